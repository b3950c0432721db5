//! Error types for the Pysra dashboard

use thiserror::Error;

/// Main error type for Pysra dashboard operations
#[derive(Error, Debug)]
pub enum PysraError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Heatmap input was not a valid date-keyed JSON map
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date could not be parsed or fell outside the supported range
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias using PysraError
pub type PysraResult<T> = Result<T, PysraError>;
