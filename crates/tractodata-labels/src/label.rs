//! Filename labels and their extraction.
//!
//! Dataset files follow a BIDS-like naming scheme: a subject prefix followed
//! by `_`-separated `key-value` entities, e.g.
//! `sub01-T1w_hemi-L_space-orig_desc-synth_subset-Cing_tractography.trk`.

use crate::error::LabelError;
use crate::values::{Endpoint, ExcludeIncludeMap, Hemisphere, Tissue};
use derive_more::Display;
use std::path::Path;
use std::str::FromStr;

const BUNDLE_KEY: &str = "subset";
const ENDPOINT_KEY: &str = "part";
const HEMISPHERE_KEY: &str = "hemi";
const GENERAL_KEY: &str = "label";
const MODEL_DTI: &str = "model-DTI";
const SURFACE_SUFFIX: &str = "surf";
const SEGMENTATION_SUFFIXES: &[&str] = &["dseg", "probseg"];

/// Label that can be sought in a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Label {
    /// Bundle name (`subset-<v>`)
    #[display("bundle")]
    Bundle,
    /// Bundle endpoint (`part-<v>`)
    #[display("endpoint")]
    Endpoint,
    /// Hemisphere (`hemi-<v>`)
    #[display("hemisphere")]
    Hemisphere,
    /// Tissue segmentation (`label-<v>_dseg`, `label-<v>_probseg`)
    #[display("tissue")]
    Tissue,
    /// DTI derived map (`model-DTI_label-<v>`)
    #[display("dti")]
    Dti,
    /// Tracking exclusion/inclusion map (`label-<v>`)
    #[display("exclude_include")]
    ExcludeInclude,
    /// Surface type (`<v>.surf`)
    #[display("surface")]
    Surface,
}

impl Label {
    /// All labels.
    pub const ALL: &'static [Self] = &[
        Self::Bundle,
        Self::Endpoint,
        Self::Hemisphere,
        Self::Tissue,
        Self::Dti,
        Self::ExcludeInclude,
        Self::Surface,
    ];

    /// Whether the filename root keeps inner periods for this label.
    const fn keeps_inner_periods(&self) -> bool {
        matches!(self, Self::Surface)
    }
}

impl FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.to_string() == s)
            .ok_or_else(|| LabelError::UnknownLabel {
                provided: s.to_string(),
                available: Self::ALL
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Filename root: the base name up to its first period, or up to its last
/// period when `keep_inner_periods` is set.
fn filename_root(fname: &Path, keep_inner_periods: bool) -> Option<&str> {
    let base = fname.file_name()?.to_str()?;
    let root = if keep_inner_periods {
        base.rsplit_once('.').map_or(base, |(root, _)| root)
    } else {
        base.split('.').next().unwrap_or(base)
    };
    Some(root)
}

fn entity_value<'a>(token: &'a str, key: &str) -> Option<&'a str> {
    token
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|value| !value.is_empty())
}

/// Get the value of `label` contained in the filename, if any.
///
/// The first token of the filename root is the subject and is never
/// considered.
pub fn label_value(fname: impl AsRef<Path>, label: Label) -> Option<String> {
    let root = filename_root(fname.as_ref(), label.keeps_inner_periods())?;
    let tokens: Vec<&str> = root.split('_').collect();
    if tokens.len() < 2 {
        return None;
    }
    let entities = &tokens[1..];
    // Entities that are followed by at least one other token.
    let inner = &entities[..entities.len() - 1];

    let value = match label {
        Label::Bundle => inner.iter().find_map(|t| entity_value(t, BUNDLE_KEY)),
        Label::Endpoint => inner
            .iter()
            .filter_map(|t| entity_value(t, ENDPOINT_KEY))
            .find(|v| v.parse::<Endpoint>().is_ok()),
        Label::Hemisphere => inner
            .iter()
            .filter_map(|t| entity_value(t, HEMISPHERE_KEY))
            .find(|v| v.parse::<Hemisphere>().is_ok()),
        Label::Tissue => entities.windows(2).find_map(|pair| {
            entity_value(pair[0], GENERAL_KEY)
                .filter(|v| v.parse::<Tissue>().is_ok())
                .filter(|_| SEGMENTATION_SUFFIXES.contains(&pair[1]))
        }),
        Label::Dti => entities
            .windows(2)
            .find(|pair| pair[0] == MODEL_DTI)
            .and_then(|pair| entity_value(pair[1], GENERAL_KEY)),
        Label::ExcludeInclude => entities
            .iter()
            .filter_map(|t| entity_value(t, GENERAL_KEY))
            .find(|v| v.parse::<ExcludeIncludeMap>().is_ok()),
        Label::Surface => entities.last().and_then(|last| {
            last.strip_suffix(SURFACE_SUFFIX)
                .and_then(|rest| rest.strip_suffix('.'))
                .filter(|v| !v.is_empty())
        }),
    };

    value.map(str::to_string)
}

/// Build the text under which `value` of `label` appears in filenames.
pub fn label_value_pair(label: Label, value: &str) -> String {
    match label {
        Label::Bundle => format!("{BUNDLE_KEY}-{value}"),
        Label::Endpoint => format!("{ENDPOINT_KEY}-{value}"),
        Label::Hemisphere => format!("{HEMISPHERE_KEY}-{value}"),
        Label::Tissue | Label::Dti | Label::ExcludeInclude => format!("{GENERAL_KEY}-{value}"),
        Label::Surface => format!("{value}.{SURFACE_SUFFIX}"),
    }
}
