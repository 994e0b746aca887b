//! Submission performance tables.
//!
//! The overall table holds one row per submission. Angular error and
//! individual bundle results come one file per submission; they are stacked
//! into a single table keyed by the submission identifier derived from each
//! file name.

use crate::error::{Result, ScoreError};
use crate::submission::submission_ids;
use polars::prelude::*;
use std::iter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Submission identifier column.
pub const SUBMISSION_ID_COLUMN: &str = "Submission ID";

/// Region of interest column of the angular error results.
pub const ROI_COLUMN: &str = "ROI";

/// Bundle column of the individual bundle results.
pub const BUNDLE_COLUMN: &str = "Bundle";

fn read_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!(path = %path.display(), rows = df.height(), "Read submission scores");
    Ok(df)
}

/// Keep `key` and the requested score columns, in that order.
fn select_scores(df: &DataFrame, key: &str, scores: Option<&[String]>) -> Result<DataFrame> {
    match scores {
        Some(scores) if !scores.is_empty() => Ok(df.select(
            iter::once(key.to_string()).chain(scores.iter().cloned()),
        )?),
        _ => Ok(df.clone()),
    }
}

/// Move the `keys` columns to the front.
fn keys_first(df: &DataFrame, keys: &[&str]) -> Result<DataFrame> {
    let rest: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .filter(|name| !keys.contains(&name.as_str()))
        .collect();
    let order = keys.iter().map(|k| k.to_string()).chain(rest);
    Ok(df.select(order)?)
}

fn filter_rows(df: &DataFrame, key: &str, values: &[String]) -> Result<DataFrame> {
    let keys = df
        .column(key)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let mask: BooleanChunked = keys
        .str()?
        .into_iter()
        .map(|v| v.is_some_and(|v| values.iter().any(|wanted| wanted == v)))
        .collect();
    Ok(df.filter(&mask)?)
}

/// Read the overall performance of all submissions.
///
/// The `Submission ID` column comes first, followed by the requested
/// `scores`, or by every score when none are given.
pub fn overall_performance(path: &Path, scores: Option<&[String]>) -> Result<DataFrame> {
    let df = read_csv(path)?;
    let df = select_scores(&df, SUBMISSION_ID_COLUMN, scores)?;
    keys_first(&df, &[SUBMISSION_ID_COLUMN])
}

fn stacked_performance(
    paths: &[PathBuf],
    kind: &'static str,
    key: &str,
    scores: Option<&[String]>,
    keep: Option<&[String]>,
) -> Result<DataFrame> {
    if paths.is_empty() {
        return Err(ScoreError::MissingFile { kind });
    }

    let ids = submission_ids(paths);
    let mut frames = Vec::with_capacity(paths.len());
    for (path, id) in paths.iter().zip(ids) {
        let mut df = select_scores(&read_csv(path)?, key, scores)?;
        let id_col: Column = Series::new(SUBMISSION_ID_COLUMN.into(), vec![id; df.height()]).into();
        df.with_column(id_col)?;
        frames.push(df.lazy());
    }

    let args = UnionArgs {
        to_supertypes: true,
        ..Default::default()
    };
    let df = concat(frames, args)?.collect()?;
    let df = keys_first(&df, &[SUBMISSION_ID_COLUMN, key])?;

    match keep {
        Some(values) if !values.is_empty() => filter_rows(&df, key, values),
        _ => Ok(df),
    }
}

/// Read and stack the angular error results of all submissions.
///
/// Rows are keyed by `Submission ID` and `ROI`; when `rois` is given only
/// those regions are kept.
pub fn angular_performance(
    paths: &[PathBuf],
    scores: Option<&[String]>,
    rois: Option<&[String]>,
) -> Result<DataFrame> {
    stacked_performance(paths, "angular_error", ROI_COLUMN, scores, rois)
}

/// Read and stack the individual bundle results of all submissions.
///
/// Rows are keyed by `Submission ID` and `Bundle`; when `bundles` is given
/// only those bundles are kept.
pub fn bundle_performance(
    paths: &[PathBuf],
    scores: Option<&[String]>,
    bundles: Option<&[String]>,
) -> Result<DataFrame> {
    stacked_performance(paths, "individual_bundle", BUNDLE_COLUMN, scores, bundles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|c| c.to_string()).collect()
    }

    fn strings(df: &DataFrame, column: &str) -> Vec<String> {
        df.column(column)
            .unwrap()
            .as_materialized_series()
            .str()
            .unwrap()
            .into_no_null_iter()
            .map(str::to_string)
            .collect()
    }

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn angular_files(dir: &TempDir) -> Vec<PathBuf> {
        vec![
            write(
                dir,
                "ismrm2015_tractography_challenge_submission1-0_angular_error_results.csv",
                "ROI,mean,std,max\nSingle,10.5,2,30.1\nCrossing,20.25,4,45.0\n",
            ),
            write(
                dir,
                "ismrm2015_tractography_challenge_submission2-1_angular_error_results.csv",
                "ROI,mean,std,max\nSingle,11.0,2.5,31.0\nCrossing,19.0,3.5,40.0\n",
            ),
        ]
    }

    #[test]
    fn test_overall_performance() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "ismrm2015_tractography_challenge_overall_results.csv",
            "VB,Submission ID,IB,OL\n20,1-0,100,0.3\n22,1-1,90,0.35\n",
        );

        let df = overall_performance(&path, None).unwrap();
        assert_eq!(df.shape(), (2, 4));
        assert_eq!(names(&df), vec!["Submission ID", "VB", "IB", "OL"]);
        assert_eq!(strings(&df, SUBMISSION_ID_COLUMN), vec!["1-0", "1-1"]);

        let scores = vec!["OL".to_string()];
        let df = overall_performance(&path, Some(scores.as_slice())).unwrap();
        assert_eq!(names(&df), vec!["Submission ID", "OL"]);
    }

    #[test]
    fn test_overall_performance_unknown_score() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "overall.csv", "Submission ID,VB\n1-0,20\n");
        let scores = vec!["nope".to_string()];
        assert!(matches!(
            overall_performance(&path, Some(scores.as_slice())),
            Err(ScoreError::Polars(_))
        ));
    }

    #[test]
    fn test_angular_performance() {
        let dir = TempDir::new().unwrap();
        let paths = angular_files(&dir);

        let df = angular_performance(&paths, None, None).unwrap();
        assert_eq!(df.shape(), (4, 5));
        assert_eq!(names(&df), vec!["Submission ID", "ROI", "mean", "std", "max"]);
        assert_eq!(
            strings(&df, SUBMISSION_ID_COLUMN),
            vec!["1-0", "1-0", "2-1", "2-1"]
        );
    }

    #[rstest]
    #[case::single_roi(&["Crossing"], &["Crossing", "Crossing"], &["1-0", "2-1"])]
    #[case::both_rois(
        &["Single", "Crossing"],
        &["Single", "Crossing", "Single", "Crossing"],
        &["1-0", "1-0", "2-1", "2-1"]
    )]
    #[case::unknown_roi(&["Fanning"], &[], &[])]
    fn test_angular_performance_filters(
        #[case] rois: &[&str],
        #[case] expected_rois: &[&str],
        #[case] expected_ids: &[&str],
    ) {
        let dir = TempDir::new().unwrap();
        let paths = angular_files(&dir);

        let scores = vec!["mean".to_string()];
        let rois: Vec<String> = rois.iter().map(|r| r.to_string()).collect();
        let df = angular_performance(&paths, Some(scores.as_slice()), Some(rois.as_slice()))
            .unwrap();
        assert_eq!(names(&df), vec!["Submission ID", "ROI", "mean"]);
        assert_eq!(strings(&df, ROI_COLUMN), expected_rois);
        assert_eq!(strings(&df, SUBMISSION_ID_COLUMN), expected_ids);
    }

    #[test]
    fn test_bundle_performance() {
        let dir = TempDir::new().unwrap();
        let paths = vec![
            write(
                &dir,
                "ismrm2015_tractography_challenge_submission1-0_individual_bundle_results.csv",
                "Bundle,VB,OL,OR\nCC,1,0.5,0.1\nCST_left,1,0.4,0.2\n",
            ),
            write(
                &dir,
                "ismrm2015_tractography_challenge_submission2-1_individual_bundle_results.csv",
                "Bundle,VB,OL,OR\nCC,0,0.0,0.0\nCST_left,1,0.6,0.3\n",
            ),
        ];

        let bundles = vec!["CC".to_string()];
        let df = bundle_performance(&paths, None, Some(bundles.as_slice())).unwrap();
        assert_eq!(df.shape(), (2, 5));
        assert_eq!(names(&df)[..2], ["Submission ID", "Bundle"]);
        assert_eq!(strings(&df, SUBMISSION_ID_COLUMN), vec!["1-0", "2-1"]);
    }

    #[test]
    fn test_stacked_without_files() {
        assert!(matches!(
            bundle_performance(&[], None, None),
            Err(ScoreError::MissingFile {
                kind: "individual_bundle"
            })
        ));
    }
}
