//! Sustained-hold reset gesture.
//!
//! While the game sits on its terminal screen, holding the gesture for a
//! long duration requests a round reset. The timer only counts frames the
//! debounce gate has already confirmed active, and the event is a one-shot
//! latch: the player must release and re-engage before another reset can
//! fire.

use std::time::Duration;

/// One-shot detector for the hold-to-reset gesture
#[derive(Debug)]
pub struct HoldResetDetector {
    hold_duration: Duration,
    held_since: Option<Duration>,
    fired: bool,
}

impl HoldResetDetector {
    /// Create a new detector.
    ///
    /// # Panics
    ///
    /// Panics if `hold_duration` is zero. `Config::validate` rejects this
    /// before a pipeline is built.
    #[must_use]
    pub fn new(hold_duration: Duration) -> Self {
        assert!(!hold_duration.is_zero(), "Hold duration must be greater than 0");
        Self {
            hold_duration,
            held_since: None,
            fired: false,
        }
    }

    /// Feed one frame; returns `true` exactly once per sustained episode.
    ///
    /// `now` is the session clock the pipeline stamps every frame with.
    /// The timer starts when the gate is confirmed active while
    /// `game_over` is set, and clears when either drops.
    pub fn update(&mut self, debounced_active: bool, game_over: bool, now: Duration) -> bool {
        if !debounced_active {
            // Release re-arms the latch
            self.held_since = None;
            self.fired = false;
            return false;
        }
        if !game_over {
            self.held_since = None;
            return false;
        }

        let held_since = *self.held_since.get_or_insert(now);
        if !self.fired && now.saturating_sub(held_since) >= self.hold_duration {
            self.fired = true;
            log::info!("hold-to-reset fired after {:?}", self.hold_duration);
            return true;
        }
        false
    }

    /// Discard any running hold, keeping the latch armed
    pub fn reset(&mut self) {
        self.held_since = None;
        self.fired = false;
    }
}
