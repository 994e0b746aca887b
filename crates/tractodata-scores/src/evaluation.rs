//! Tracking evaluation configuration.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Evaluation settings of a single bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleEvaluation {
    /// Streamline clustering distance threshold
    pub cluster_threshold: Number,
    /// Remaining settings, kept as provided
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BundleEvaluation {
    /// Cluster threshold as a float.
    pub fn cluster_threshold(&self) -> Option<f64> {
        self.cluster_threshold.as_f64()
    }
}

/// Bundle name to evaluation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingEvaluationConfig {
    bundles: BTreeMap<String, BundleEvaluation>,
}

impl TrackingEvaluationConfig {
    /// Parse a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Settings of `bundle`.
    pub fn bundle(&self, bundle: &str) -> Option<&BundleEvaluation> {
        self.bundles.get(bundle)
    }

    /// Configured bundle names, sorted.
    pub fn bundle_names(&self) -> impl Iterator<Item = &str> {
        self.bundles.keys().map(String::as_str)
    }

    /// Iterate over the bundles and their settings.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleEvaluation)> {
        self.bundles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of configured bundles.
    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    /// Whether no bundle is configured.
    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}
