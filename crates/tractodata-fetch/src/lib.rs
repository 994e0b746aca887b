#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jhlegarreta/tractodata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod hash;

pub use config::{BASE_URL_ENV_VAR, Config, DEFAULT_BASE_URL, HOME_ENV_VAR};
pub use error::{FetchError, Result};
pub use fetcher::{FetchSpec, Fetched, FetchedFile, Fetcher, FileStatus, RemoteFile};
pub use hash::{check_md5, file_md5};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
