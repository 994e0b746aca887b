//! Error types for dataset access.

use crate::dataset::Dataset;
use thiserror::Error;
use tractodata_fetch::FetchError;
use tractodata_scores::ScoreError;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur when accessing datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Unknown dataset name
    #[error("Unknown dataset. Provided: {provided}; Available: {available}")]
    UnknownDataset {
        /// Name that was provided
        provided: String,
        /// Comma separated list of the registered datasets
        available: String,
    },

    /// The dataset does not resolve to a single file
    #[error("Dataset {dataset} has {count} files, expected exactly one")]
    UnexpectedFileCount {
        /// Dataset
        dataset: Dataset,
        /// Number of files found
        count: usize,
    },

    /// A file the dataset should contain was not found
    #[error("Dataset {dataset} has no {kind} file")]
    MissingFile {
        /// Dataset
        dataset: Dataset,
        /// Kind of file looked for
        kind: &'static str,
    },

    /// Fetch error
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Score error
    #[error(transparent)]
    Score(#[from] ScoreError),
}
