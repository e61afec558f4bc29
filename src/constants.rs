//! Constants used throughout the gesture pipeline

/// Number of landmarks in a full FaceMesh landmark set
pub const NUM_FACE_LANDMARKS: usize = 468;

/// Upper inner-lip midpoint landmark index
pub const UPPER_INNER_LIP: usize = 13;

/// Lower inner-lip midpoint landmark index
pub const LOWER_INNER_LIP: usize = 14;

/// Left mouth-corner landmark index
pub const LEFT_MOUTH_CORNER: usize = 78;

/// Right mouth-corner landmark index
pub const RIGHT_MOUTH_CORNER: usize = 308;

/// Default frames per second assumption
pub const DEFAULT_FPS: f64 = 30.0;

/// Default calibration warm-up window in frames
pub const DEFAULT_WARMUP_FRAMES: usize = 30;

/// Default additive margin above the calibrated baseline
pub const DEFAULT_CALIBRATION_MARGIN: f64 = 0.05;

/// Default maximum standard deviation accepted when closing the warm-up window
pub const DEFAULT_MAX_NOISE_STD_DEV: f64 = 0.02;

/// Default consecutive above-threshold frames required to engage
pub const DEFAULT_ENGAGE_FRAMES: u32 = 3;

/// Default consecutive below-threshold frames required to release
pub const DEFAULT_RELEASE_FRAMES: u32 = 2;

/// Default sustained-hold duration for the reset gesture, in seconds
pub const DEFAULT_HOLD_RESET_SECS: f64 = 5.0;

/// Default detection-loss grace period before the gesture is forced
/// inactive, in seconds
pub const DEFAULT_GRACE_PERIOD_SECS: f64 = 1.0;

/// Default detection-loss duration before a subject slot is destroyed,
/// in seconds
pub const DEFAULT_SLOT_TIMEOUT_SECS: f64 = 5.0;

/// Default number of subject slots
pub const DEFAULT_PLAYERS: usize = 1;

/// Maximum number of concurrent subjects
pub const MAX_PLAYERS: usize = 2;

/// Numeric precision epsilon for geometry guards
pub const GEOMETRY_EPSILON: f64 = 1e-6;
