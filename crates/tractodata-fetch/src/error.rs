//! Error types for fetch operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching datasets.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success HTTP response
    #[error("HTTP error fetching {url}: {status}")]
    Http {
        /// Requested URL
        url: String,
        /// Response status
        status: reqwest::StatusCode,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Downloaded file does not match its published checksum
    #[error(
        "The downloaded file {path} does not have the expected hash value of {expected}. \
         Instead, the hash value was {computed}. This could mean that something is wrong \
         with the file or that the upstream file has been updated. You can try downloading \
         the file again or updating to the newest version of tractodata"
    )]
    HashMismatch {
        /// File that was checked
        path: PathBuf,
        /// Published MD5 digest
        expected: String,
        /// Digest of the local file
        computed: String,
    },

    /// Zip archive error
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Archive format that cannot be extracted
    #[error("Archive extension is not recognized: {0}")]
    UnsupportedArchive(PathBuf),

    /// No data home could be determined
    #[error("Could not determine a data home; set TRACTODATA_HOME")]
    NoHome,

    /// Background task failure
    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}
