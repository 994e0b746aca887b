use crate::Format;
use crate::commands::print_json;
use tractodata::{Dataset, Repository};

pub(crate) async fn run(
    repo: &Repository,
    dataset: Dataset,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let fnames = repo.fnames(dataset).await?;
    match format {
        Format::Text => {
            for fname in &fnames {
                println!("{}", fname.display());
            }
        }
        Format::Json => print_json(&fnames)?,
    }
    Ok(())
}
