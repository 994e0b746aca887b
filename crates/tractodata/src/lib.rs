#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jhlegarreta/tractodata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod files;
pub mod registry;
pub mod repository;

pub use dataset::Dataset;
pub use error::{DatasetError, Result};
pub use files::{BundleFiles, DwiFiles, TractogramFiles};
pub use registry::{DatasetSpec, MNI_USE_PERMISSION_FILE, REGISTRY};
pub use repository::{DEFAULT_CONCURRENCY, Repository};

pub use tractodata_fetch as fetch;
pub use tractodata_labels as labels;
pub use tractodata_scores as scores;

pub use tractodata_fetch::{Config, Fetched, FileStatus};
pub use tractodata_labels::{Endpoint, ExcludeIncludeMap, Hemisphere, Label, Surface, Tissue};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
