//! Error types for score operations.

use thiserror::Error;

/// Result type for score operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur when reading scores or evaluation configurations.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No file of the requested kind among the submission files
    #[error("No {kind} submission file found")]
    MissingFile {
        /// Kind of results file
        kind: &'static str,
    },
}
