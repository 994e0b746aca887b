use crate::Format;
use crate::commands::print_json;
use serde_json::json;
use tractodata::{Dataset, FileStatus, Repository};

fn describe(status: &FileStatus) -> String {
    match status {
        FileStatus::Missing => "missing".to_string(),
        FileStatus::Valid => "valid".to_string(),
        FileStatus::Corrupt { computed } => format!("corrupt (md5 {computed})"),
    }
}

pub(crate) async fn run(
    repo: &Repository,
    datasets: &[Dataset],
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut rows = Vec::new();
    for &dataset in datasets {
        for (file, status) in repo.status(dataset).await? {
            rows.push((dataset, file, status));
        }
    }

    match format {
        Format::Text => {
            for (dataset, file, status) in &rows {
                println!("{dataset:<38} {file:<56} {}", describe(status));
            }
        }
        Format::Json => {
            let entries: Vec<_> = rows
                .iter()
                .map(|(dataset, file, status)| {
                    let computed = match status {
                        FileStatus::Corrupt { computed } => Some(computed),
                        _ => None,
                    };
                    json!({
                        "dataset": dataset,
                        "file": file,
                        "status": match status {
                            FileStatus::Missing => "missing",
                            FileStatus::Valid => "valid",
                            FileStatus::Corrupt { .. } => "corrupt",
                        },
                        "md5": computed,
                    })
                })
                .collect();
            print_json(&entries)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        assert_eq!(describe(&FileStatus::Missing), "missing");
        assert_eq!(
            describe(&FileStatus::Corrupt {
                computed: "abc".to_string()
            }),
            "corrupt (md5 abc)"
        );
    }
}
