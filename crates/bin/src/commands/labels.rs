use crate::Format;
use crate::commands::print_json;
use clap::ValueEnum;
use tractodata::{Dataset, Repository};

/// Label listed by the `labels` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LabelKind {
    /// Bundles, `bundle[,hemisphere]`
    Bundles,
    /// Bundle endpoints, `bundle[,hemisphere],endpoint`
    Endpoints,
    /// DTI maps
    Dti,
    /// Tracking exclusion/inclusion maps
    ExcludeInclude,
    /// Tissue maps
    Tissues,
    /// Surfaces, `surface[,hemisphere]`
    Surfaces,
}

pub(crate) async fn run(
    repo: &Repository,
    dataset: Dataset,
    kind: LabelKind,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let values = match kind {
        LabelKind::Bundles => repo.list_bundles(dataset).await?,
        LabelKind::Endpoints => repo.list_bundle_endpoints(dataset).await?,
        LabelKind::Dti => repo.list_dti_maps(dataset).await?,
        LabelKind::ExcludeInclude => repo.list_exclude_include_maps(dataset).await?,
        LabelKind::Tissues => repo.list_tissue_maps(dataset).await?,
        LabelKind::Surfaces => repo.list_surfaces(dataset).await?,
    };

    match format {
        Format::Text => {
            for value in &values {
                println!("{value}");
            }
        }
        Format::Json => print_json(&values)?,
    }
    Ok(())
}
