//! Temporal smoothing of the raw threshold comparison.
//!
//! The per-frame comparison `metric > threshold` flickers with detector
//! jitter. This gate is a two-state machine with counted-frame transition
//! guards: engaging requires M consecutive raw-active frames, releasing
//! requires N consecutive raw-inactive frames. N is kept at or below M so
//! letting go is never slower than engaging.

/// Debounced gesture state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Inactive,
    Active,
}

/// Transition reported by one gate update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// No state change this frame
    None,
    /// Confirmed inactive -> active transition
    Rose,
    /// Confirmed active -> inactive transition
    Fell,
}

/// Debounce gate with asymmetric engage/release frame counts
#[derive(Debug)]
pub struct HysteresisGate {
    engage_frames: u32,
    release_frames: u32,
    state: GateState,
    streak: u32,
}

impl HysteresisGate {
    /// Create a new gate.
    ///
    /// # Panics
    ///
    /// Panics if either frame count is zero or if `release_frames`
    /// exceeds `engage_frames`. `Config::validate` rejects these before
    /// a pipeline is built.
    #[must_use]
    pub fn new(engage_frames: u32, release_frames: u32) -> Self {
        assert!(engage_frames > 0, "Engage frame count must be greater than 0");
        assert!(release_frames > 0, "Release frame count must be greater than 0");
        assert!(
            release_frames <= engage_frames,
            "Release frame count must not exceed engage frame count"
        );
        Self {
            engage_frames,
            release_frames,
            state: GateState::Inactive,
            streak: 0,
        }
    }

    /// Feed one frame's raw comparison result.
    ///
    /// Missing-detection frames are fed as `raw_active = false`.
    pub fn update(&mut self, raw_active: bool) -> GateEvent {
        match self.state {
            GateState::Inactive => {
                if raw_active {
                    self.streak += 1;
                    if self.streak >= self.engage_frames {
                        self.state = GateState::Active;
                        self.streak = 0;
                        return GateEvent::Rose;
                    }
                } else {
                    self.streak = 0;
                }
            }
            GateState::Active => {
                if raw_active {
                    self.streak = 0;
                } else {
                    self.streak += 1;
                    if self.streak >= self.release_frames {
                        self.state = GateState::Inactive;
                        self.streak = 0;
                        return GateEvent::Fell;
                    }
                }
            }
        }
        GateEvent::None
    }

    /// Force the gate inactive, discarding any running streak.
    ///
    /// Used when a subject has been unseen past the grace period.
    pub fn force_inactive(&mut self) -> GateEvent {
        let was_active = self.state == GateState::Active;
        self.state = GateState::Inactive;
        self.streak = 0;
        if was_active {
            GateEvent::Fell
        } else {
            GateEvent::None
        }
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == GateState::Active
    }

    /// Reset to inactive with no pending streak
    pub fn reset(&mut self) {
        self.state = GateState::Inactive;
        self.streak = 0;
    }
}
