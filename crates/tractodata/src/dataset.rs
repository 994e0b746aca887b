//! Registered datasets.

use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Datasets available for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dataset {
    /// Fiber Cup anatomy
    FibercupAnat,
    /// Fiber Cup diffusion data
    FibercupDwi,
    /// Fiber Cup tissue maps
    FibercupTissueMaps,
    /// Fiber Cup synthetic tracking
    FibercupSynthTracking,
    /// Fiber Cup synthetic bundling
    FibercupSynthBundling,
    /// Fiber Cup synthetic bundle centroids
    FibercupSynthBundleCentroids,
    /// Fiber Cup bundle masks
    FibercupBundleMasks,
    /// Fiber Cup bundle endpoint masks
    FibercupBundleEndpointMasks,
    /// Fiber Cup diffusion peaks
    FibercupDiffusionPeaks,
    /// Fiber Cup local probabilistic tracking
    FibercupLocalProbTracking,
    /// Fiber Cup local probabilistic bundling
    FibercupLocalProbBundling,
    /// Fiber Cup tracking evaluation configuration
    FibercupTrackingEvaluationConfig,
    /// HCP Test-Retest anatomy
    HcpTrAnat,
    /// HCP Test-Retest DTI maps
    HcpTrDtiMaps,
    /// HCP Test-Retest partial volume estimate maps
    HcpTrPveMaps,
    /// HCP Test-Retest tracking exclusion/inclusion maps
    HcpTrExcludeIncludeMaps,
    /// HCP Test-Retest surfaces
    HcpTrSurfaces,
    /// HCP Test-Retest particle filtering tracking
    HcpTrPftTracking,
    /// ISMRM 2015 anatomy
    Ismrm2015Anat,
    /// ISMRM 2015 diffusion data
    Ismrm2015Dwi,
    /// ISMRM 2015 tissue maps
    Ismrm2015TissueMaps,
    /// ISMRM 2015 surfaces
    Ismrm2015Surfaces,
    /// ISMRM 2015 DTI maps
    Ismrm2015DtiMaps,
    /// ISMRM 2015 synthetic tracking
    Ismrm2015SynthTracking,
    /// ISMRM 2015 synthetic bundling
    Ismrm2015SynthBundling,
    /// ISMRM 2015 bundle masks
    Ismrm2015BundleMasks,
    /// ISMRM 2015 bundle endpoint masks
    Ismrm2015BundleEndpointMasks,
    /// ISMRM 2015 challenge submission results
    Ismrm2015ChallengeSubmission,
    /// ISMRM 2015 tracking evaluation configuration
    Ismrm2015TrackingEvaluationConfig,
    /// MNI ICBM 2009c nonlinear symmetric template anatomy
    #[serde(rename = "MNI2009CNONLINSYMM_ANAT")]
    Mni2009cNonlinSymmAnat,
    /// MNI ICBM 2009c nonlinear symmetric template surfaces
    #[serde(rename = "MNI2009CNONLINSYMM_SURFACES")]
    Mni2009cNonlinSymmSurfaces,
}

impl Dataset {
    /// All datasets, in registry order.
    pub const ALL: [Self; 31] = [
        Self::FibercupAnat,
        Self::FibercupDwi,
        Self::FibercupTissueMaps,
        Self::FibercupSynthTracking,
        Self::FibercupSynthBundling,
        Self::FibercupSynthBundleCentroids,
        Self::FibercupBundleMasks,
        Self::FibercupBundleEndpointMasks,
        Self::FibercupDiffusionPeaks,
        Self::FibercupLocalProbTracking,
        Self::FibercupLocalProbBundling,
        Self::FibercupTrackingEvaluationConfig,
        Self::HcpTrAnat,
        Self::HcpTrDtiMaps,
        Self::HcpTrPveMaps,
        Self::HcpTrExcludeIncludeMaps,
        Self::HcpTrSurfaces,
        Self::HcpTrPftTracking,
        Self::Ismrm2015Anat,
        Self::Ismrm2015Dwi,
        Self::Ismrm2015TissueMaps,
        Self::Ismrm2015Surfaces,
        Self::Ismrm2015DtiMaps,
        Self::Ismrm2015SynthTracking,
        Self::Ismrm2015SynthBundling,
        Self::Ismrm2015BundleMasks,
        Self::Ismrm2015BundleEndpointMasks,
        Self::Ismrm2015ChallengeSubmission,
        Self::Ismrm2015TrackingEvaluationConfig,
        Self::Mni2009cNonlinSymmAnat,
        Self::Mni2009cNonlinSymmSurfaces,
    ];

    /// Returns all datasets.
    pub fn all() -> Vec<Self> {
        Self::ALL.to_vec()
    }

    /// Upper-case dataset name, e.g. `FIBERCUP_ANAT`.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FibercupAnat => "FIBERCUP_ANAT",
            Self::FibercupDwi => "FIBERCUP_DWI",
            Self::FibercupTissueMaps => "FIBERCUP_TISSUE_MAPS",
            Self::FibercupSynthTracking => "FIBERCUP_SYNTH_TRACKING",
            Self::FibercupSynthBundling => "FIBERCUP_SYNTH_BUNDLING",
            Self::FibercupSynthBundleCentroids => "FIBERCUP_SYNTH_BUNDLE_CENTROIDS",
            Self::FibercupBundleMasks => "FIBERCUP_BUNDLE_MASKS",
            Self::FibercupBundleEndpointMasks => "FIBERCUP_BUNDLE_ENDPOINT_MASKS",
            Self::FibercupDiffusionPeaks => "FIBERCUP_DIFFUSION_PEAKS",
            Self::FibercupLocalProbTracking => "FIBERCUP_LOCAL_PROB_TRACKING",
            Self::FibercupLocalProbBundling => "FIBERCUP_LOCAL_PROB_BUNDLING",
            Self::FibercupTrackingEvaluationConfig => "FIBERCUP_TRACKING_EVALUATION_CONFIG",
            Self::HcpTrAnat => "HCP_TR_ANAT",
            Self::HcpTrDtiMaps => "HCP_TR_DTI_MAPS",
            Self::HcpTrPveMaps => "HCP_TR_PVE_MAPS",
            Self::HcpTrExcludeIncludeMaps => "HCP_TR_EXCLUDE_INCLUDE_MAPS",
            Self::HcpTrSurfaces => "HCP_TR_SURFACES",
            Self::HcpTrPftTracking => "HCP_TR_PFT_TRACKING",
            Self::Ismrm2015Anat => "ISMRM2015_ANAT",
            Self::Ismrm2015Dwi => "ISMRM2015_DWI",
            Self::Ismrm2015TissueMaps => "ISMRM2015_TISSUE_MAPS",
            Self::Ismrm2015Surfaces => "ISMRM2015_SURFACES",
            Self::Ismrm2015DtiMaps => "ISMRM2015_DTI_MAPS",
            Self::Ismrm2015SynthTracking => "ISMRM2015_SYNTH_TRACKING",
            Self::Ismrm2015SynthBundling => "ISMRM2015_SYNTH_BUNDLING",
            Self::Ismrm2015BundleMasks => "ISMRM2015_BUNDLE_MASKS",
            Self::Ismrm2015BundleEndpointMasks => "ISMRM2015_BUNDLE_ENDPOINT_MASKS",
            Self::Ismrm2015ChallengeSubmission => "ISMRM2015_CHALLENGE_SUBMISSION",
            Self::Ismrm2015TrackingEvaluationConfig => "ISMRM2015_TRACKING_EVALUATION_CONFIG",
            Self::Mni2009cNonlinSymmAnat => "MNI2009CNONLINSYMM_ANAT",
            Self::Mni2009cNonlinSymmSurfaces => "MNI2009CNONLINSYMM_SURFACES",
        }
    }

    /// Lower-case dataset value, e.g. `fibercup_anat`.
    pub fn value(&self) -> String {
        self.name().to_lowercase()
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Dataset {
    type Err = DatasetError;

    /// Parse either the upper-case name or the lower-case value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s || d.value() == s)
            .ok_or_else(|| DatasetError::UnknownDataset {
                provided: s.to_string(),
                available: Self::ALL.iter().map(|d| d.name()).collect::<Vec<_>>().join(", "),
            })
    }
}
