//! Demo application loop for the gesture pipeline.
//!
//! Runs the full pipeline against any [`LandmarkSource`] and logs the
//! signals a game loop would consume. A built-in synthetic source scripts
//! mouth-opening pulses so the wiring can be exercised end to end without
//! a camera attached.

use crate::{
    config::Config,
    constants::{LEFT_MOUTH_CORNER, LOWER_INNER_LIP, NUM_FACE_LANDMARKS, RIGHT_MOUTH_CORNER, UPPER_INNER_LIP},
    landmarks::{LandmarkSet, LandmarkSource, Point2},
    pipeline::GesturePipeline,
    Result,
};
use log::{info, warn};
use std::time::Duration;

/// Demo session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Frames to run before stopping
    pub max_frames: u64,
    /// Simulated frames per second, drives the session clock
    pub fps: f64,
}

/// Demo application: one landmark source, one pipeline, one loop
pub struct TongueSwitchApp {
    pipeline: GesturePipeline,
    source: Box<dyn LandmarkSource>,
    session: SessionConfig,
}

impl TongueSwitchApp {
    /// Create a demo app over the given source.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline configuration is invalid or the
    /// session fps is not positive.
    pub fn new(config: Config, source: Box<dyn LandmarkSource>, session: SessionConfig) -> Result<Self> {
        if session.fps <= 0.0 {
            return Err(crate::Error::InvalidInput("fps must be positive".to_string()));
        }
        let pipeline = GesturePipeline::new(config)?;
        Ok(Self {
            pipeline,
            source,
            session,
        })
    }

    /// Run the session to completion, logging edges and reset requests.
    ///
    /// # Errors
    ///
    /// Source failures are logged and treated as empty frames; only an
    /// invalid session setup can error.
    pub fn run(&mut self) -> Result<()> {
        info!(
            "running {} frames at {:.0} fps over {} slot(s)",
            self.session.max_frames,
            self.session.fps,
            self.pipeline.slot_count()
        );
        for frame in 0..self.session.max_frames {
            let now = Duration::from_secs_f64(frame as f64 / self.session.fps);

            let detections = match self.source.next_frame() {
                Ok(sets) => sets,
                Err(e) => {
                    // No retry here; absence decays the gesture state
                    warn!("landmark source failed this frame: {e}");
                    Vec::new()
                }
            };

            let signals = self.pipeline.process(&detections, now, false);
            for signal in &signals {
                if signal.rising_edge {
                    info!("frame {frame}: slot {} gesture ON", signal.slot);
                }
                if signal.reset_requested {
                    info!("frame {frame}: slot {} requested reset", signal.slot);
                }
            }
        }

        for slot in 0..self.pipeline.slot_count() {
            if !self.pipeline.is_calibrated(slot) {
                warn!("slot {slot} never calibrated; ask the player to recalibrate");
            }
        }
        Ok(())
    }
}

/// Scripted landmark source: faces with periodic mouth-opening pulses.
///
/// Each subject keeps the mouth closed through the warm-up, then opens it
/// for a short burst on a fixed cycle, with a small deterministic wobble
/// standing in for detector jitter.
pub struct SyntheticSource {
    players: usize,
    frame: u64,
    /// Frames per open/close cycle
    cycle: u64,
    /// Open-mouth frames at the start of each cycle
    burst: u64,
    /// Frames of closed mouth before the first pulse
    quiet_lead: u64,
}

impl SyntheticSource {
    #[must_use]
    pub fn new(players: usize, quiet_lead: u64) -> Self {
        Self {
            players,
            frame: 0,
            cycle: 90,
            burst: 10,
            quiet_lead,
        }
    }

    fn face(&self, index: usize) -> LandmarkSet {
        // Stack subjects vertically, matching the two-lane convention
        let center_y = if self.players == 1 {
            0.5
        } else {
            0.3 + 0.4 * index as f64
        };

        let in_burst = self.frame >= self.quiet_lead && (self.frame - self.quiet_lead) % self.cycle < self.burst;
        let openness = if in_burst { 0.45 } else { 0.04 };
        let wobble = 0.002 * (self.frame as f64 * 0.7 + index as f64).sin();

        let width = 0.10;
        let gap = openness * width + wobble;

        let mut points = vec![Point2::new(0.5, center_y); NUM_FACE_LANDMARKS];
        points[UPPER_INNER_LIP] = Point2::new(0.5, center_y + 0.05);
        points[LOWER_INNER_LIP] = Point2::new(0.5, center_y + 0.05 + gap);
        points[LEFT_MOUTH_CORNER] = Point2::new(0.5 - width / 2.0, center_y + 0.05);
        points[RIGHT_MOUTH_CORNER] = Point2::new(0.5 + width / 2.0, center_y + 0.05);
        LandmarkSet::new(points)
    }
}

impl LandmarkSource for SyntheticSource {
    fn next_frame(&mut self) -> Result<Vec<LandmarkSet>> {
        let sets = (0..self.players).map(|i| self.face(i)).collect();
        self.frame += 1;
        Ok(sets)
    }
}
