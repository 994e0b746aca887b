//! Subcommand implementations.

pub(crate) mod datasets;
pub(crate) mod evaluation;
pub(crate) mod fetch;
pub(crate) mod files;
pub(crate) mod home;
pub(crate) mod labels;
pub(crate) mod scores;
pub(crate) mod status;

use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
