#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/jhlegarreta/tractodata/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod evaluation;
pub mod performance;
pub mod submission;

pub use error::{Result, ScoreError};
pub use evaluation::{BundleEvaluation, TrackingEvaluationConfig};
pub use performance::{
    BUNDLE_COLUMN, ROI_COLUMN, SUBMISSION_ID_COLUMN, angular_performance, bundle_performance,
    overall_performance,
};
pub use submission::{SubmissionFiles, classify_submission_files, submission_ids};
