#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jhlegarreta/tractodata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod filter;
pub mod keys;
pub mod label;
pub mod subseq;
pub mod values;

pub use error::{LabelError, Result};
pub use filter::{filter_filenames_on_value, filter_list_on_list};
pub use keys::{KEY_SEPARATOR, bundle_endpoint_key, bundle_key, surface_key};
pub use label::{Label, label_value, label_value_pair};
pub use subseq::{is_substring_of_all, longest_common_substring};
pub use values::{DtiMap, Endpoint, ExcludeIncludeMap, Hemisphere, Surface, Tissue};
