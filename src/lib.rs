//! Tongue-gesture input pipeline for webcam-controlled arcade games.
//!
//! This library turns a noisy stream of per-frame facial-landmark
//! coordinates into a stable, self-calibrating boolean control signal:
//! "tongue out" or not, per player. The pipeline is:
//! 1. Metric extraction: a scale-invariant mouth-opening ratio per face
//! 2. Calibration: a closed-mouth baseline learned during warm-up
//! 3. Hysteresis: counted-frame debounce of the threshold comparison
//! 4. Subject tracking: positional slot assignment for two-player mode
//! 5. Hold-to-reset: a one-shot event for the "hold to restart" gesture
//!
//! The face-landmark detector itself is an external collaborator behind
//! the [`landmarks::LandmarkSource`] seam; this crate never touches image
//! data and performs only fixed small-index arithmetic per frame.
//!
//! # Examples
//!
//! ## Driving the pipeline per frame
//!
//! ```
//! use tongue_switch::{config::Config, pipeline::GesturePipeline};
//! use tongue_switch::landmarks::LandmarkSet;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = Config::default();
//! config.tracker.players = 1;
//! let mut pipeline = GesturePipeline::new(config)?;
//!
//! // Per rendered frame: hand over whatever the detector found
//! let detections: Vec<LandmarkSet> = Vec::new(); // no faces this frame
//! let signals = pipeline.process(&detections, Duration::from_millis(33), false);
//!
//! for signal in signals {
//!     if signal.active {
//!         println!("player {} is flapping", signal.slot);
//!     }
//!     if signal.reset_requested {
//!         println!("player {} asked for a restart", signal.slot);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Two-player mode
//!
//! ```
//! use tongue_switch::config::{Config, SortAxis};
//! use tongue_switch::pipeline::GesturePipeline;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = Config::default();
//! config.tracker.players = 2;
//! config.tracker.sort_axis = SortAxis::Vertical; // P1 above P2 in frame
//! let pipeline = GesturePipeline::new(config)?;
//! assert_eq!(pipeline.slot_count(), 2);
//! # Ok(())
//! # }
//! ```

/// Landmark data types and the detector-facing source trait
pub mod landmarks;

/// Mouth-opening metric extraction
pub mod metric;

/// Per-subject closed-mouth calibration
pub mod calibration;

/// Debounce gate for the raw threshold comparison
pub mod gate;

/// Sustained-hold reset gesture detection
pub mod hold_reset;

/// Subject slot tracking and per-frame assignment
pub mod tracker;

/// Per-frame pipeline orchestration
pub mod pipeline;

/// Demo application loop and synthetic landmark source
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the pipeline
pub mod constants;

/// Configuration management
pub mod config;

pub use error::{Error, Result};
