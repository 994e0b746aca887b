use crate::Format;
use crate::commands::print_json;
use serde_json::json;
use tractodata::Config;

pub(crate) fn run(config: &Config, format: Format) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        Format::Text => println!("{}", config.home().display()),
        Format::Json => print_json(&json!({
            "home": config.home(),
            "base_url": config.remote_base_url(),
        }))?,
    }
    Ok(())
}
