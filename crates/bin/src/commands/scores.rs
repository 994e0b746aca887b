//! `scores`: ISMRM 2015 Tractography Challenge submission tables.

use crate::Format;
use crate::commands::print_json;
use clap::ValueEnum;
use polars::prelude::*;
use serde_json::{Map, Value};
use tractodata::Repository;

/// Score table printed by the `scores` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScoreTable {
    /// Overall performance per submission
    Overall,
    /// Angular error per submission and ROI
    Angular,
    /// Performance per submission and bundle
    Bundle,
}

/// Column and row filters.
#[derive(Debug, Default)]
pub(crate) struct Filters {
    pub(crate) scores: Option<Vec<String>>,
    pub(crate) rois: Option<Vec<String>>,
    pub(crate) bundles: Option<Vec<String>>,
}

pub(crate) async fn run(
    repo: &Repository,
    table: ScoreTable,
    filters: &Filters,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let scores = filters.scores.as_deref();
    let df = match table {
        ScoreTable::Overall => repo.submission_overall_performance(scores).await?,
        ScoreTable::Angular => {
            repo.submission_angular_performance(scores, filters.rois.as_deref())
                .await?
        }
        ScoreTable::Bundle => {
            repo.submission_bundle_performance(scores, filters.bundles.as_deref())
                .await?
        }
    };

    match format {
        Format::Text => println!("{df}"),
        Format::Json => print_json(&rows(&df)?)?,
    }
    Ok(())
}

fn json_value(value: AnyValue<'_>) -> Value {
    let dtype = value.dtype();
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(b) => Value::Bool(b),
        AnyValue::String(s) => Value::from(s),
        AnyValue::StringOwned(s) => Value::from(s.as_str()),
        v if dtype.is_integer() => v.extract::<i64>().map_or(Value::Null, Value::from),
        v if dtype.is_float() => v.extract::<f64>().map_or(Value::Null, Value::from),
        v => Value::String(v.to_string()),
    }
}

/// Table rows as JSON objects keyed by column name.
fn rows(df: &DataFrame) -> PolarsResult<Vec<Value>> {
    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let mut row = Map::new();
        for column in df.get_columns() {
            row.insert(column.name().to_string(), json_value(column.get(i)?));
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}
