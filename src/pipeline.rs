//! Per-frame gesture pipeline.
//!
//! One [`GesturePipeline::process`] call per rendered frame turns the
//! landmark sets the detector produced into one [`SubjectSignal`] per
//! subject slot. The call never fails: malformed landmarks, degenerate
//! geometry, and missing detections all degrade to an inactive signal for
//! the affected subject, because a game control signal must never leave
//! "no signal" undefined.

use crate::{
    config::Config,
    landmarks::LandmarkSet,
    tracker::{SubjectSignal, SubjectTracker},
    Result,
};
use std::time::Duration;

/// Frame-synchronous gesture pipeline over one or two subject slots
pub struct GesturePipeline {
    tracker: SubjectTracker,
    frames_processed: u64,
}

impl GesturePipeline {
    /// Build a pipeline from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the configuration fails validation.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        log::info!(
            "gesture pipeline: {} player(s), engage {} / release {} frames, warm-up {} frames",
            config.tracker.players,
            config.debounce.engage_frames,
            config.debounce.release_frames,
            config.calibration.warmup_frames,
        );
        Ok(Self {
            tracker: SubjectTracker::new(config),
            frames_processed: 0,
        })
    }

    /// Pipeline with the default single-player configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            tracker: SubjectTracker::new(Config::default()),
            frames_processed: 0,
        }
    }

    /// Process one frame.
    ///
    /// `detections` are the landmark sets the external detector returned
    /// for this frame (possibly empty), `now` the session clock, and
    /// `game_over` the terminal-screen flag the game loop supplies for
    /// the hold-to-reset gesture. Always returns exactly one signal per
    /// slot.
    pub fn process(&mut self, detections: &[LandmarkSet], now: Duration, game_over: bool) -> Vec<SubjectSignal> {
        self.frames_processed += 1;
        self.tracker.update(detections, now, game_over)
    }

    /// Re-enter calibration warm-up on every live slot
    pub fn recalibrate(&mut self) {
        self.tracker.recalibrate();
    }

    /// Whether a slot currently has a usable threshold.
    ///
    /// Staying `false` well past the expected warm-up duration means the
    /// player should be asked to recalibrate; it is never an error.
    #[must_use]
    pub fn is_calibrated(&self, slot: usize) -> bool {
        self.tracker.is_calibrated(slot)
    }

    /// Number of subject slots
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.tracker.slot_count()
    }

    /// Frames processed since construction
    #[must_use]
    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }
}
