//! Subject slot tracking and per-frame assignment.
//!
//! The landmark source offers no identity across frames, so detections are
//! re-sorted every frame on a positional key (centroid along the
//! configured axis) and assigned to slots in order: slot 0 is the top
//! (or left) subject, slot 1 the bottom (or right). Players swapping
//! lanes therefore swap slots; that is the accepted convention, not a
//! defect to compensate for.

use crate::{
    calibration::Calibrator,
    config::{Config, SortAxis},
    gate::{GateEvent, HysteresisGate},
    hold_reset::HoldResetDetector,
    landmarks::LandmarkSet,
    metric,
};
use std::time::Duration;

/// Per-frame output for one subject slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectSignal {
    /// Slot index (0 = top/P1, 1 = bottom/P2)
    pub slot: usize,
    /// Debounced gesture state, the jump/flap control signal
    pub active: bool,
    /// One-frame pulse on the confirmed rising edge
    pub rising_edge: bool,
    /// One-shot hold-to-reset event
    pub reset_requested: bool,
    /// Whether this slot has a usable threshold yet
    pub calibrated: bool,
}

impl SubjectSignal {
    fn inactive(slot: usize) -> Self {
        Self {
            slot,
            active: false,
            rising_edge: false,
            reset_requested: false,
            calibrated: false,
        }
    }
}

/// State bound to one persistent subject slot
struct SubjectSlot {
    calibrator: Calibrator,
    gate: HysteresisGate,
    hold_reset: HoldResetDetector,
    last_seen: Duration,
    active_since: Option<Duration>,
}

impl SubjectSlot {
    fn new(config: &Config, now: Duration) -> Self {
        Self {
            calibrator: Calibrator::new(
                config.calibration.warmup_frames,
                config.calibration.margin,
                config.calibration.max_noise_std_dev,
            ),
            gate: HysteresisGate::new(config.debounce.engage_frames, config.debounce.release_frames),
            hold_reset: HoldResetDetector::new(Duration::from_secs_f64(config.hold_reset.hold_secs)),
            last_seen: now,
            active_since: None,
        }
    }

    /// Advance one frame with a raw comparison result (or a miss)
    fn advance(&mut self, index: usize, raw_active: bool, now: Duration, game_over: bool) -> SubjectSignal {
        let event = self.gate.update(raw_active);
        match event {
            GateEvent::Rose => self.active_since = Some(now),
            GateEvent::Fell => self.active_since = None,
            GateEvent::None => {}
        }
        let active = self.gate.is_active();
        let reset_requested = self.hold_reset.update(active, game_over, now);
        SubjectSignal {
            slot: index,
            active,
            rising_edge: event == GateEvent::Rose,
            reset_requested,
            calibrated: self.calibrator.is_calibrated(),
        }
    }
}

/// Assigns detections to persistent slots and advances per-slot state
pub struct SubjectTracker {
    config: Config,
    grace_period: Duration,
    slot_timeout: Duration,
    slots: Vec<Option<SubjectSlot>>,
}

impl SubjectTracker {
    /// Create a tracker with one slot per configured player.
    ///
    /// The config is expected to have passed `Config::validate`.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let players = config.tracker.players;
        let grace_period = Duration::from_secs_f64(config.tracker.grace_period_secs);
        let slot_timeout = Duration::from_secs_f64(config.tracker.slot_timeout_secs);
        let mut slots = Vec::with_capacity(players);
        slots.resize_with(players, || None);
        Self {
            config,
            grace_period,
            slot_timeout,
            slots,
        }
    }

    /// Number of subject slots
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether a slot currently holds a calibrated subject
    #[must_use]
    pub fn is_calibrated(&self, slot: usize) -> bool {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .is_some_and(|s| s.calibrator.is_calibrated())
    }

    /// Re-enter warm-up on every live slot (e.g. on game reset)
    pub fn recalibrate(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.calibrator.recalibrate();
        }
    }

    /// Process one frame's detections.
    ///
    /// Always yields exactly one signal per slot; every failure mode
    /// degrades to an inactive signal rather than an error.
    pub fn update(&mut self, detections: &[LandmarkSet], now: Duration, game_over: bool) -> Vec<SubjectSignal> {
        let assignment = assign_slots(detections, self.slots.len(), self.config.tracker.sort_axis);
        if detections.len() > self.slots.len() {
            log::debug!(
                "{} detections for {} slots, extras unassigned",
                detections.len(),
                self.slots.len()
            );
        }

        let mut signals = Vec::with_capacity(self.slots.len());
        for (index, detection) in assignment.into_iter().enumerate() {
            let signal = match detection {
                Some(landmarks) => self.update_seen(index, landmarks, now, game_over),
                None => self.update_unseen(index, now, game_over),
            };
            signals.push(signal);
        }
        signals
    }

    fn update_seen(
        &mut self,
        index: usize,
        landmarks: &LandmarkSet,
        now: Duration,
        game_over: bool,
    ) -> SubjectSignal {
        let slot = self.slots[index].get_or_insert_with(|| {
            log::info!("subject slot {index} created, warming up");
            SubjectSlot::new(&self.config, now)
        });

        let raw_active = match metric::extract(landmarks) {
            Ok(value) => {
                slot.last_seen = now;
                if slot.calibrator.is_calibrated() {
                    // threshold() is always Some once calibrated
                    slot.calibrator.threshold().is_some_and(|t| value > t)
                } else {
                    slot.calibrator.observe(value);
                    false
                }
            }
            Err(e) => {
                // Skipped frame for this subject, same as a miss
                log::debug!("slot {index}: {e}");
                false
            }
        };

        slot.advance(index, raw_active, now, game_over)
    }

    fn update_unseen(&mut self, index: usize, now: Duration, game_over: bool) -> SubjectSignal {
        let Some(slot) = self.slots[index].as_mut() else {
            return SubjectSignal::inactive(index);
        };

        let unseen_for = now.saturating_sub(slot.last_seen);
        if unseen_for >= self.slot_timeout {
            log::info!("subject slot {index} unseen for {unseen_for:?}, destroying");
            self.slots[index] = None;
            return SubjectSignal::inactive(index);
        }

        if unseen_for >= self.grace_period {
            // Fail-safe: no detection means no gesture, calibration kept
            slot.gate.force_inactive();
            slot.active_since = None;
            slot.hold_reset.reset();
            let calibrated = slot.calibrator.is_calibrated();
            return SubjectSignal {
                slot: index,
                active: false,
                rising_edge: false,
                reset_requested: false,
                calibrated,
            };
        }

        // Short dropout: let the release counter do its job
        slot.advance(index, false, now, game_over)
    }
}

/// Sort detections on the positional key and map them onto slots.
///
/// Returns one entry per slot: the detection whose centroid ranks at that
/// position (ascending key), or `None`. Detections past the slot count
/// are left unassigned; empty landmark sets are ignored.
#[must_use]
pub fn assign_slots<'a>(
    detections: &'a [LandmarkSet],
    slot_count: usize,
    axis: SortAxis,
) -> Vec<Option<&'a LandmarkSet>> {
    let mut keyed: Vec<(f64, &LandmarkSet)> = detections
        .iter()
        .filter_map(|set| {
            let centroid = set.centroid()?;
            let key = match axis {
                SortAxis::Vertical => centroid.y,
                SortAxis::Horizontal => centroid.x,
            };
            key.is_finite().then_some((key, set))
        })
        .collect();
    keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    (0..slot_count).map(|i| keyed.get(i).map(|(_, set)| *set)).collect()
}
