use crate::Format;
use crate::commands::print_json;
use serde_json::json;
use tractodata::{Dataset, REGISTRY};

pub(crate) fn run(format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => {
            println!("{:<38} {:>9}  {}", "DATASET", "SIZE", "DESCRIPTION");
            for spec in &REGISTRY {
                println!("{:<38} {:>9}  {}", spec.dataset, spec.data_size, spec.doc);
            }
        }
        Format::Json => {
            let entries: Vec<_> = Dataset::ALL
                .iter()
                .map(|dataset| {
                    let spec = dataset.spec();
                    json!({
                        "name": dataset,
                        "folder": spec.relative_folder(),
                        "file": spec.local_name,
                        "md5": spec.md5,
                        "size": spec.data_size,
                        "archive": spec.unzip,
                        "description": spec.doc,
                    })
                })
                .collect();
            print_json(&entries)?;
        }
    }
    Ok(())
}
