//! Classification of the ISMRM 2015 Tractography Challenge submission
//! result files.

use crate::error::{Result, ScoreError};
use std::path::{Path, PathBuf};
use tractodata_labels::longest_common_substring;

const OVERALL_LABEL: &str = "overall";
const ANGULAR_ERROR_LABEL: &str = "angular_error";
const INDIVIDUAL_BUNDLE_LABEL: &str = "individual_bundle";

/// Submission result files, by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFiles {
    /// Overall performance of all submissions
    pub overall: PathBuf,
    /// Per-submission angular error results
    pub angular_error: Vec<PathBuf>,
    /// Per-submission individual bundle results
    pub individual_bundle: Vec<PathBuf>,
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn with_label(fnames: &[PathBuf], label: &str) -> Vec<PathBuf> {
    fnames
        .iter()
        .filter(|f| file_stem(f).contains(label))
        .cloned()
        .collect()
}

/// Sort the submission result files by kind, preserving their order.
pub fn classify_submission_files(fnames: &[PathBuf]) -> Result<SubmissionFiles> {
    let overall = with_label(fnames, OVERALL_LABEL)
        .into_iter()
        .next()
        .ok_or(ScoreError::MissingFile {
            kind: OVERALL_LABEL,
        })?;

    Ok(SubmissionFiles {
        overall,
        angular_error: with_label(fnames, ANGULAR_ERROR_LABEL),
        individual_bundle: with_label(fnames, INDIVIDUAL_BUNDLE_LABEL),
    })
}

fn strip_common(stems: Vec<String>) -> Vec<String> {
    let common = longest_common_substring(&stems);
    if common.is_empty() {
        return stems;
    }
    stems.into_iter().map(|s| s.replace(&common, "")).collect()
}

/// Submission identifiers embedded in the file names.
///
/// The file stems share a common prefix and suffix around the identifier;
/// both are removed, e.g. `..._submission1-0_angular_error_results` → `1-0`.
pub fn submission_ids<P: AsRef<Path>>(fnames: &[P]) -> Vec<String> {
    let stems = fnames.iter().map(|f| file_stem(f.as_ref())).collect();
    strip_common(strip_common(stems))
}
