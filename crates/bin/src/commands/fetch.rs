//! `fetch`: download datasets with bounded concurrency.

use crate::Format;
use crate::commands::print_json;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::path::PathBuf;
use std::pin::pin;
use std::time::Duration;
use tractodata::{Dataset, Repository};

/// Outcome of fetching one dataset.
#[derive(Debug, Serialize)]
struct Outcome {
    dataset: Dataset,
    folder: Option<PathBuf>,
    downloaded: usize,
    error: Option<String>,
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

pub(crate) async fn run(
    repo: &Repository,
    datasets: &[Dataset],
    concurrency: usize,
    progress: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = if progress {
        progress_bar(datasets.len())
    } else {
        ProgressBar::hidden()
    };
    pb.set_message(format!(
        "Fetching {} datasets ({} concurrent)...",
        datasets.len(),
        concurrency.max(1)
    ));

    let mut outcomes = Vec::with_capacity(datasets.len());
    let mut results = pin!(repo.fetch_stream(datasets, concurrency));
    while let Some((dataset, result)) = results.next().await {
        pb.inc(1);
        let outcome = match result {
            Ok(fetched) => Outcome {
                dataset,
                folder: Some(fetched.folder),
                downloaded: fetched.downloaded,
                error: None,
            },
            Err(e) => Outcome {
                dataset,
                folder: None,
                downloaded: 0,
                error: Some(e.to_string()),
            },
        };
        outcomes.push(outcome);
    }
    pb.finish_and_clear();

    // Completion order is arbitrary; report in registry order.
    outcomes.sort_by_key(|o| o.dataset);
    let failed = outcomes.iter().filter(|o| o.error.is_some()).count();

    match format {
        Format::Text => {
            for outcome in &outcomes {
                match (&outcome.folder, &outcome.error) {
                    (Some(folder), _) => println!(
                        "{:<38} ok ({} downloaded) {}",
                        outcome.dataset,
                        outcome.downloaded,
                        folder.display()
                    ),
                    (None, Some(error)) => println!("{:<38} FAILED {error}", outcome.dataset),
                    (None, None) => {}
                }
            }
        }
        Format::Json => print_json(&outcomes)?,
    }

    if failed > 0 {
        return Err(format!("{failed} of {} datasets failed to fetch", outcomes.len()).into());
    }
    Ok(())
}
