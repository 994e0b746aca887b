//! Error types for label handling.

use thiserror::Error;

/// Result type for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

/// Errors that can occur when parsing labels or label values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    /// Unknown label name
    #[error("Unknown label. Provided: {provided}; Available: {available}")]
    UnknownLabel {
        /// Name that was provided
        provided: String,
        /// Comma separated list of known labels
        available: String,
    },

    /// Unknown value for a label
    #[error("Unknown {label} value: {provided}")]
    UnknownValue {
        /// Label the value belongs to
        label: &'static str,
        /// Value that was provided
        provided: String,
    },
}
