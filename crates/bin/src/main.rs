//! tractodata CLI binary.
//!
//! Lists, fetches and inspects the tractography datasets.

mod commands;
mod logging;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use tractodata::fetch::HOME_ENV_VAR;
use tractodata::{Config, Dataset, Repository};

#[derive(Parser)]
#[command(name = "tractodata")]
#[command(about = "tractodata: tractography research datasets", long_about = None)]
#[command(version)]
struct Cli {
    /// Data home, overriding TRACTODATA_HOME
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not draw progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format of the commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Human readable
    Text,
    /// JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered datasets
    Datasets,

    /// Fetch datasets into the data home
    Fetch {
        /// Datasets to fetch
        #[arg(required_unless_present = "all")]
        datasets: Vec<Dataset>,

        /// Fetch every registered dataset
        #[arg(long, conflicts_with = "datasets")]
        all: bool,

        /// Number of datasets fetched at once
        #[arg(long, default_value_t = tractodata::DEFAULT_CONCURRENCY)]
        concurrency: usize,
    },

    /// Print the files of a dataset, fetching it when needed
    Files {
        /// Dataset
        dataset: Dataset,
    },

    /// List the label values found in the files of a dataset
    Labels {
        /// Dataset
        dataset: Dataset,

        /// Kind of label
        #[arg(long, value_enum)]
        kind: commands::labels::LabelKind,
    },

    /// Check the local copies of datasets without downloading
    Status {
        /// Datasets to check
        #[arg(required_unless_present = "all")]
        datasets: Vec<Dataset>,

        /// Check every registered dataset
        #[arg(long, conflicts_with = "datasets")]
        all: bool,
    },

    /// Print the data home
    Home,

    /// ISMRM 2015 Tractography Challenge submission scores
    Scores {
        /// Score table
        #[arg(value_enum)]
        table: commands::scores::ScoreTable,

        /// Score columns to keep
        #[arg(long = "score")]
        scores: Vec<String>,

        /// ROIs to keep (angular error table)
        #[arg(long = "roi")]
        rois: Vec<String>,

        /// Bundles to keep (bundle table)
        #[arg(long = "bundle")]
        bundles: Vec<String>,
    },

    /// Print a tracking evaluation configuration
    EvaluationConfig {
        /// Dataset
        dataset: Dataset,
    },
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init()?;

    let config = Config::from_lookup(|key| match (&cli.home, key) {
        (Some(home), HOME_ENV_VAR) => Some(home.to_string_lossy().into_owned()),
        _ => std::env::var(key).ok(),
    })?
    .show_progress(!cli.no_progress);
    let format = cli.format;

    match cli.command {
        Commands::Datasets => commands::datasets::run(format)?,
        Commands::Home => commands::home::run(&config, format)?,
        Commands::Fetch {
            datasets,
            all,
            concurrency,
        } => {
            let datasets = selection(datasets, all);
            let progress = config.progress_enabled();
            // One overall bar replaces the per-file bars of concurrent downloads.
            let repo = Repository::new(config.show_progress(false))?;
            commands::fetch::run(&repo, &datasets, concurrency, progress, format).await?;
        }
        Commands::Files { dataset } => {
            let repo = Repository::new(config)?;
            commands::files::run(&repo, dataset, format).await?;
        }
        Commands::Labels { dataset, kind } => {
            let repo = Repository::new(config)?;
            commands::labels::run(&repo, dataset, kind, format).await?;
        }
        Commands::Status { datasets, all } => {
            let repo = Repository::new(config)?;
            commands::status::run(&repo, &selection(datasets, all), format).await?;
        }
        Commands::Scores {
            table,
            scores,
            rois,
            bundles,
        } => {
            let repo = Repository::new(config)?;
            let filters = commands::scores::Filters {
                scores: non_empty(scores),
                rois: non_empty(rois),
                bundles: non_empty(bundles),
            };
            commands::scores::run(&repo, table, &filters, format).await?;
        }
        Commands::EvaluationConfig { dataset } => {
            let repo = Repository::new(config)?;
            commands::evaluation::run(&repo, dataset, format).await?;
        }
    }

    Ok(())
}

fn selection(datasets: Vec<Dataset>, all: bool) -> Vec<Dataset> {
    if all { Dataset::all() } else { datasets }
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    (!values.is_empty()).then_some(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "tractodata",
            "--home",
            "/tmp/data",
            "fetch",
            "FIBERCUP_ANAT",
            "ismrm2015_dwi",
        ])
        .unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/data")));
        match cli.command {
            Commands::Fetch { datasets, all, .. } => {
                assert!(!all);
                assert_eq!(datasets, vec![Dataset::FibercupAnat, Dataset::Ismrm2015Dwi]);
            }
            _ => panic!("expected fetch"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_dataset() {
        assert!(Cli::try_parse_from(["tractodata", "files", "ISBI2013_ANAT"]).is_err());
    }

    #[test]
    fn test_fetch_needs_datasets_or_all() {
        assert!(Cli::try_parse_from(["tractodata", "fetch"]).is_err());
        assert!(Cli::try_parse_from(["tractodata", "fetch", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["tractodata", "fetch", "--all", "HCP_TR_ANAT"]).is_err());
    }

    #[test]
    fn test_selection() {
        assert_eq!(selection(vec![], true).len(), 31);
        assert_eq!(
            selection(vec![Dataset::HcpTrAnat], false),
            vec![Dataset::HcpTrAnat]
        );
        assert_eq!(non_empty(vec![]), None);
    }
}
