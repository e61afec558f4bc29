//! Configuration management for the gesture pipeline

use crate::{
    constants::{
        DEFAULT_CALIBRATION_MARGIN, DEFAULT_ENGAGE_FRAMES, DEFAULT_GRACE_PERIOD_SECS, DEFAULT_HOLD_RESET_SECS,
        DEFAULT_MAX_NOISE_STD_DEV, DEFAULT_PLAYERS, DEFAULT_RELEASE_FRAMES, DEFAULT_SLOT_TIMEOUT_SECS,
        DEFAULT_WARMUP_FRAMES, MAX_PLAYERS,
    },
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Subject tracking configuration
    pub tracker: TrackerConfig,

    /// Calibration configuration
    pub calibration: CalibrationConfig,

    /// Debounce gate configuration
    pub debounce: DebounceConfig,

    /// Hold-to-reset configuration
    pub hold_reset: HoldResetConfig,
}

/// Subject tracking parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Number of subject slots (1 or 2)
    pub players: usize,

    /// Axis the per-frame positional sort runs along
    pub sort_axis: SortAxis,

    /// Seconds without a detection before the gesture is forced inactive
    pub grace_period_secs: f64,

    /// Seconds without a detection before the slot is destroyed
    pub slot_timeout_secs: f64,
}

/// Positional sort axis for two-player slot assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAxis {
    /// Top subject first (players stacked in camera framing)
    Vertical,
    /// Left subject first (players side by side)
    Horizontal,
}

/// Calibration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Warm-up window size in frames
    pub warmup_frames: usize,

    /// Additive margin above the closed-mouth baseline
    pub margin: f64,

    /// Maximum standard deviation accepted when closing the warm-up window
    pub max_noise_std_dev: f64,
}

/// Debounce gate parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    /// Consecutive above-threshold frames required to engage
    pub engage_frames: u32,

    /// Consecutive below-threshold frames required to release
    pub release_frames: u32,
}

/// Hold-to-reset parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldResetConfig {
    /// Sustained-hold duration in seconds
    pub hold_secs: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            calibration: CalibrationConfig::default(),
            debounce: DebounceConfig::default(),
            hold_reset: HoldResetConfig::default(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            players: DEFAULT_PLAYERS,
            sort_axis: SortAxis::Vertical,
            grace_period_secs: DEFAULT_GRACE_PERIOD_SECS,
            slot_timeout_secs: DEFAULT_SLOT_TIMEOUT_SECS,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            warmup_frames: DEFAULT_WARMUP_FRAMES,
            margin: DEFAULT_CALIBRATION_MARGIN,
            max_noise_std_dev: DEFAULT_MAX_NOISE_STD_DEV,
        }
    }
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            engage_frames: DEFAULT_ENGAGE_FRAMES,
            release_frames: DEFAULT_RELEASE_FRAMES,
        }
    }
}

impl Default for HoldResetConfig {
    fn default() -> Self {
        Self {
            hold_secs: DEFAULT_HOLD_RESET_SECS,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first out-of-range parameter.
    pub fn validate(&self) -> Result<()> {
        if self.tracker.players == 0 || self.tracker.players > MAX_PLAYERS {
            return Err(Error::ConfigError(format!(
                "Player count must be between 1 and {MAX_PLAYERS}"
            )));
        }
        if self.tracker.grace_period_secs <= 0.0 {
            return Err(Error::ConfigError("Grace period must be positive".to_string()));
        }
        if self.tracker.slot_timeout_secs < self.tracker.grace_period_secs {
            return Err(Error::ConfigError(
                "Slot timeout must not be shorter than the grace period".to_string(),
            ));
        }

        if self.calibration.warmup_frames == 0 {
            return Err(Error::ConfigError(
                "Warm-up window must be greater than 0 frames".to_string(),
            ));
        }
        if self.calibration.margin <= 0.0 {
            return Err(Error::ConfigError("Calibration margin must be positive".to_string()));
        }
        if self.calibration.max_noise_std_dev < 0.0 {
            return Err(Error::ConfigError(
                "Calibration noise bound must be non-negative".to_string(),
            ));
        }

        if self.debounce.engage_frames == 0 || self.debounce.release_frames == 0 {
            return Err(Error::ConfigError(
                "Debounce frame counts must be greater than 0".to_string(),
            ));
        }
        if self.debounce.release_frames > self.debounce.engage_frames {
            return Err(Error::ConfigError(
                "Release frame count must not exceed engage frame count".to_string(),
            ));
        }

        if self.hold_reset.hold_secs <= 0.0 {
            return Err(Error::ConfigError("Hold duration must be positive".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Tongue Switch Configuration

# Subject tracking
tracker:
  players: 1
  sort_axis: vertical
  grace_period_secs: 1.0
  slot_timeout_secs: 5.0

# Calibration (keep tongue in during warm-up)
calibration:
  warmup_frames: 30
  margin: 0.05
  max_noise_std_dev: 0.02

# Debounce gate
debounce:
  engage_frames: 3
  release_frames: 2

# Hold-to-reset
hold_reset:
  hold_secs: 5.0
"#;
