use crate::Format;
use crate::commands::print_json;
use tractodata::{Dataset, Repository};

pub(crate) async fn run(
    repo: &Repository,
    dataset: Dataset,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = repo.tracking_evaluation_config(dataset).await?;
    match format {
        Format::Text => {
            for (bundle, evaluation) in config.iter() {
                let threshold = evaluation
                    .cluster_threshold()
                    .map_or_else(|| "-".to_string(), |t| t.to_string());
                println!("{bundle:<12} cluster_threshold={threshold}");
            }
        }
        Format::Json => print_json(&config)?,
    }
    Ok(())
}
