//! Error types for the tongue-switch gesture pipeline.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Landmark set is missing entries or has non-finite coordinates at
    /// the indices the metric reads
    #[error("malformed landmarks: {0}")]
    MalformedLandmarks(String),

    /// Normalization reference distance collapsed below epsilon
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid input parameters provided
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Landmark source failed to produce a frame
    #[error("landmark source error: {0}")]
    SourceError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
