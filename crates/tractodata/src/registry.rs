//! Published dataset registry.
//!
//! Every dataset is a single file hosted on the Open Science Framework, at
//! `<base URL><osf id>/download`, stored under the data home in a BIDS-like
//! folder tree. Archive datasets are extracted in place.

use crate::dataset::Dataset;
use std::path::{Path, PathBuf};
use tractodata_fetch::{FetchSpec, RemoteFile};

/// File shipped with the MNI template archives stating its use permissions.
pub const MNI_USE_PERMISSION_FILE: &str = "COPYING";

/// Remote location and local layout of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Dataset
    pub dataset: Dataset,
    /// Folder components below the data home
    pub folder: &'static [&'static str],
    /// Open Science Framework file identifier
    pub osf_id: &'static str,
    /// Local file name
    pub local_name: &'static str,
    /// Published MD5 digest
    pub md5: &'static str,
    /// Approximate download size
    pub data_size: &'static str,
    /// Description
    pub doc: &'static str,
    /// Whether the file is an archive to extract
    pub unzip: bool,
    /// Use permission file to leave out of the dataset files
    pub use_permission_file: Option<&'static str>,
}

impl DatasetSpec {
    /// Folder relative to the data home.
    pub fn relative_folder(&self) -> PathBuf {
        self.folder.iter().collect()
    }

    /// Remote path relative to the base URL.
    pub fn remote_path(&self) -> String {
        format!("{}/download", self.osf_id)
    }

    /// Whether a file belongs to the dataset data, i.e. is not a use permission
    /// file.
    pub fn is_data_file(&self, path: &Path) -> bool {
        self.use_permission_file
            .is_none_or(|permission| !path.to_string_lossy().contains(permission))
    }

    /// Description used by the fetcher.
    pub fn fetch_spec(&self) -> FetchSpec {
        FetchSpec {
            name: self.dataset.value(),
            folder: self.relative_folder(),
            files: vec![RemoteFile::new(
                self.remote_path(),
                self.local_name,
                Some(self.md5),
            )],
            data_size: Some(self.data_size.to_string()),
            unzip: self.unzip,
            message: None,
        }
    }
}

impl Dataset {
    /// Registry entry of this dataset.
    pub fn spec(&self) -> &'static DatasetSpec {
        &REGISTRY[*self as usize]
    }
}

macro_rules! folder {
    ($($part:literal),+ $(,)?) => {
        &[$($part),+]
    };
}

/// Registry entries, in [`Dataset::ALL`] order.
pub static REGISTRY: [DatasetSpec; 31] = [
    DatasetSpec {
        dataset: Dataset::FibercupAnat,
        folder: folder!("datasets", "fibercup", "raw", "sub-01", "anat"),
        osf_id: "2xmgw",
        local_name: "sub01-T1w.nii.gz",
        md5: "7170d0192fa00b5ef069f8e7c274950c",
        data_size: "543B",
        doc: "Fiber Cup dataset anatomy data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupDwi,
        folder: folder!("datasets", "fibercup", "raw", "sub-01", "dwi"),
        osf_id: "br4ds",
        local_name: "sub01-dwi.zip",
        md5: "705396981f1bcda51de12098db968390",
        data_size: "0.39MB",
        doc: "Fiber Cup dataset diffusion data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupTissueMaps,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "segmentation", "synth", "sub-01", "anat"
        ),
        osf_id: "z8qea",
        local_name: "sub01-T1w_space-orig_dseg.zip",
        md5: "98e09f049676fe35c593baa33d1d0524",
        data_size: "808B",
        doc: "Fiber Cup dataset tissue maps",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupSynthTracking,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "tracking", "synth", "sub-01", "dwi"
        ),
        osf_id: "ug7d6",
        local_name: "sub01-dwi_space-orig_desc-synth_tractography.trk",
        md5: "9b46bbd9381f589037b5b0077c91ed55",
        data_size: "10.35MB",
        doc: "Fiber Cup dataset synthetic tracking data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupSynthBundling,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "bundling", "synth", "sub-01", "dwi"
        ),
        osf_id: "h84w6",
        local_name: "sub01-dwi_space-orig_desc-synth_subset-bundles_tractography.zip",
        md5: "60589568bc13d4093af5bb282d78e9ff",
        data_size: "8.55MB",
        doc: "Fiber Cup dataset synthetic bundling data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupSynthBundleCentroids,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "centroids", "quickbundles", "sub-01", "dwi"
        ),
        osf_id: "7eaxv",
        local_name: "sub01-dwi_space-orig_desc-synth_subset-bundles_centroid.zip",
        md5: "c60f4206dd0dfc1f1e1a4f282935eee4",
        data_size: "20.7KB",
        doc: "Fiber Cup dataset synthetic QuickBundles bundle centroid data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupBundleMasks,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "bundling", "synth", "sub-01", "anat"
        ),
        osf_id: "r5f9q",
        local_name: "sub01-T1w_space-orig_desc-synth_subset-bundles_tractography.zip",
        md5: "e46d1e634e0c5b6a062d2da03edf7c0a",
        data_size: "0.5MB",
        doc: "Fiber Cup dataset synthetic bundle masks",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupBundleEndpointMasks,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "connectivity", "synth", "sub-01", "anat"
        ),
        osf_id: "y7b2r",
        local_name: "sub01-T1w_space-orig_desc-synth_subset-bundles_part-endpoints_tractography.zip",
        md5: "ad8efab1c4743aa83df242c77b61c102",
        data_size: "6.6KB",
        doc: "Fiber Cup dataset synthetic bundle endpoint masks",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupDiffusionPeaks,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "diffusion_peaks", "dipy_csd", "sub-01", "dwi"
        ),
        osf_id: "ezqa3",
        local_name: "sub01-dwi_space-orig_model-CSD_PEAKS.nii.gz",
        md5: "1914dc2c9c26efaf181058f5b4f9480c",
        data_size: "48KB",
        doc: "Fiber Cup dataset diffusion model peaks",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupLocalProbTracking,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "tracking", "dipy_local_prob", "sub-01", "dwi"
        ),
        osf_id: "4zs6w",
        local_name: "sub01-dwi_space-orig_desc-PROB_tractography.trk",
        md5: "0136b3accd6314e684426eb4e21b99b7",
        data_size: "16MB",
        doc: "Fiber Cup dataset local probabilistic tracking data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupLocalProbBundling,
        folder: folder!(
            "datasets", "fibercup", "derivatives", "bundling", "quickbundles", "sub-01", "dwi"
        ),
        osf_id: "9hr2e",
        local_name: "sub01-dwi_space-orig_desc-PROB_subset-bundles_tractography.zip",
        md5: "399af174b025b03dcada6632cb759591",
        data_size: "2.1MB",
        doc: "Fiber Cup dataset local probabilistic bundling data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::FibercupTrackingEvaluationConfig,
        folder: folder!("datasets", "fibercup", "derivatives", "scoring", "dwi"),
        osf_id: "r3h54",
        local_name: "tracking_evaluation_config.json",
        md5: "6399cb13a9600acee1ad8fe69437a5af",
        data_size: "917B",
        doc: "Fiber Cup dataset tracking evaluation config file",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrAnat,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "structural", "tractoflow_fsl", "sub-103818_re",
            "anat"
        ),
        osf_id: "8xedb",
        local_name: "sub103818_re-T1w_space-MNI152NLin2009cSym.nii.gz",
        md5: "3e0adbf95d5c48519bb00f1492f52e39",
        data_size: "3.6MB",
        doc: "HCP Test-Retest subject retest dataset anatomy data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrDtiMaps,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "diffusion", "tractoflow_fsl", "sub-103818_re",
            "dwi"
        ),
        osf_id: "3zmsn",
        local_name: "sub103818_re-dwi_space-MNI152NLin2009cSym_model-DTI.zip",
        md5: "1a52dd87c4a9519435be2d81ee1e9d76",
        data_size: "2.8MB",
        doc: "HCP Test-Retest subject retest dataset DTI maps",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrPveMaps,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "segmentation", "fast", "sub-103818_re", "anat"
        ),
        osf_id: "pabwx",
        local_name: "sub103818_re-T1w_space-MNI152NLin2009cSym_probseg.zip",
        md5: "5cefd06349f18a2f05a3fea1992a7eca",
        data_size: "1.6MB",
        doc: "HCP Test-Retest subject retest dataset PVE map data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrExcludeIncludeMaps,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "structural", "tractoflow_fsl", "sub-103818_re",
            "anat"
        ),
        osf_id: "u8sbp",
        local_name: "sub103818_re-T1w_space-MNI152NLin2009cSym_exclude_include.zip",
        md5: "574692ec2baf7fec8d2381c5be48a408",
        data_size: "1.3MB",
        doc: "HCP Test-Retest subject retest dataset exclude/include map data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrSurfaces,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "surface", "set_nf_civet", "sub-103818_re", "anat"
        ),
        osf_id: "n89q2",
        local_name: "sub103818_re-T1w_space-MNI152NLin2009cSym_LPS.surf.zip",
        md5: "0fa063e5b648a7b64d11ae0948573043",
        data_size: "3.9MB",
        doc: "HCP Test-Retest subject retest dataset surface data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::HcpTrPftTracking,
        folder: folder!(
            "datasets", "hcp_tr", "derivatives", "tracking", "tractoflow_fsl", "sub-103818_re",
            "dwi"
        ),
        osf_id: "xwc8b",
        local_name: "sub103818_re-dwi_space-MNI152NLin2009cSym_desc-PFT_tractography.trk",
        md5: "dbc59743f56e6372018359613a6ff262",
        data_size: "4.2MB",
        doc: "HCP Test-Retest subject retest dataset PFT tracking data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015Anat,
        folder: folder!("datasets", "ismrm2015", "raw", "sub-01", "anat"),
        osf_id: "gdvch",
        local_name: "sub01-T1w.nii.gz",
        md5: "65af72af2824abce0243cb09555e3a6c",
        data_size: "7.3MB",
        doc: "ISMRM 2015 Tractography Challenge dataset anatomy data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015Dwi,
        folder: folder!("datasets", "ismrm2015", "raw", "sub-01", "dwi"),
        osf_id: "4s9ev",
        local_name: "sub01-dwi.zip",
        md5: "3f228979ca1960f25aa9abc14dc708b8",
        data_size: "7.1MB",
        doc: "ISMRM 2015 Tractography Challenge dataset diffusion data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015TissueMaps,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "segmentation", "synth", "sub-01", "anat"
        ),
        osf_id: "b3z54",
        local_name: "sub01-T1w_space-orig_dseg.zip",
        md5: "04c1518480d79d603b126e2c436c697a",
        data_size: "205.9KB",
        doc: "ISMRM 2015 Tractography Challenge dataset tissue maps",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015Surfaces,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "surface", "fastsurfer", "sub-01", "anat"
        ),
        osf_id: "yb6d2",
        local_name: "sub01-T1w_space-orig_pial.surf.zip",
        md5: "33ea5dcd1e863eb4dc8c3063bf3d89fd",
        data_size: "3.7MB",
        doc: "ISMRM 2015 Tractography Challenge dataset surface data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015DtiMaps,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "diffusion", "scilpy", "sub-01", "dwi"
        ),
        osf_id: "wnfh2",
        local_name: "sub01-dwi_space-orig_desc-WLS_model-DTI.zip",
        md5: "ea30620705f123ca6dffcfce9330d0ac",
        data_size: "5.5MB",
        doc: "ISMRM 2015 Tractography Challenge dataset DTI maps",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015SynthTracking,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "tracking", "synth", "sub-01", "dwi"
        ),
        osf_id: "nxmr8",
        local_name: "sub01-dwi_space-orig_desc-synth_tractography.trk",
        md5: "2a72eeb2949285176344eca31f0b3a39",
        data_size: "235.8MB",
        doc: "ISMRM 2015 Tractography Challenge dataset synthetic tracking data",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015SynthBundling,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "bundling", "synth", "sub-01", "dwi"
        ),
        osf_id: "5bzaf",
        local_name: "sub01-dwi_space-orig_desc-synth_subset-bundles_tractography.zip",
        md5: "69daad08e5093fd3eff9a2fbf26777bc",
        data_size: "217.6MB",
        doc: "ISMRM 2015 Tractography Challenge dataset synthetic bundling data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015BundleMasks,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "bundling", "synth", "sub-01", "anat"
        ),
        osf_id: "qy2ap",
        local_name: "sub01-T1w_space-orig_desc-synth_subset-bundles_tractography.zip",
        md5: "56cd19ba6b57875e582d5d704ec0312f",
        data_size: "543.3KB",
        doc: "ISMRM 2015 Tractography Challenge dataset synthetic bundle masks",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015BundleEndpointMasks,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "connectivity", "synth", "sub-01", "anat"
        ),
        osf_id: "24yqs",
        local_name: "sub01-T1w_space-orig_desc-synth_subset-bundles_part-endpoints_tractography.zip",
        md5: "30d14a729cb100aca6386230cef45284",
        data_size: "203.3KB",
        doc: "ISMRM 2015 Tractography Challenge dataset synthetic bundle endpoint masks",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015ChallengeSubmission,
        folder: folder!(
            "datasets", "ismrm2015", "derivatives", "submission", "synth", "sub-02", "dwi"
        ),
        osf_id: "t4m9a",
        local_name: "sub02-dwi_space-orig_desc-synth_submission_results_tractography.zip",
        md5: "6f27a599ac4977a5a91f9111c1726665",
        data_size: "116.8KB",
        doc: "ISMRM 2015 Tractography Challenge submission result data",
        unzip: true,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Ismrm2015TrackingEvaluationConfig,
        folder: folder!("datasets", "ismrm2015", "derivatives", "scoring", "dwi"),
        osf_id: "wbdyr",
        local_name: "tracking_evaluation_config.json",
        md5: "164489da0dc4fb069212543c669ba284",
        data_size: "1.4KB",
        doc: "ISMRM 2015 Tractography Challenge dataset tracking evaluation config file",
        unzip: false,
        use_permission_file: None,
    },
    DatasetSpec {
        dataset: Dataset::Mni2009cNonlinSymmAnat,
        folder: folder!(
            "datasets", "mni", "derivatives", "atlas", "icbm152_2009c_nonlinsymm", "sub-01", "anat"
        ),
        osf_id: "4hqzj",
        local_name: "sub01-T1w.zip",
        md5: "0e3455597421e8fb14321d236bae45c9",
        data_size: "4.2MB",
        doc: "MNI ICBM 2009c Nonlinear Symmetric 1x1x1mm template dataset brain-masked anatomy data",
        unzip: true,
        use_permission_file: Some(MNI_USE_PERMISSION_FILE),
    },
    DatasetSpec {
        dataset: Dataset::Mni2009cNonlinSymmSurfaces,
        folder: folder!(
            "datasets", "mni", "derivatives", "surface", "fastsurfer", "sub-01", "anat"
        ),
        osf_id: "4dfv7",
        local_name: "sub01-T1w_space-orig_pial.surf.zip",
        md5: "b36a14f78ff006a6b881414d45b1111c",
        data_size: "8.1MB",
        doc: "MNI ICBM 2009c Nonlinear Symmetric 1x1x1mm template dataset surface data",
        unzip: true,
        use_permission_file: Some(MNI_USE_PERMISSION_FILE),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_registry_order() {
        for (index, dataset) in Dataset::ALL.iter().enumerate() {
            assert_eq!(REGISTRY[index].dataset, *dataset);
            assert_eq!(dataset.spec().dataset, *dataset);
        }
    }

    #[test]
    fn test_registry_entries() {
        for spec in &REGISTRY {
            assert_eq!(spec.md5.len(), 32, "{}", spec.dataset);
            assert!(spec.md5.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(spec.folder.first(), Some(&"datasets"));
            assert!(!spec.osf_id.is_empty() && !spec.osf_id.contains('/'));
            assert_eq!(spec.unzip, spec.local_name.ends_with(".zip"), "{}", spec.dataset);
        }
    }

    #[rstest]
    #[case(Dataset::FibercupAnat, "datasets/fibercup/raw/sub-01/anat")]
    #[case(
        Dataset::Ismrm2015ChallengeSubmission,
        "datasets/ismrm2015/derivatives/submission/synth/sub-02/dwi"
    )]
    fn test_relative_folder(#[case] dataset: Dataset, #[case] expected: &str) {
        assert_eq!(dataset.spec().relative_folder(), PathBuf::from(expected));
    }

    #[test]
    fn test_fetch_spec() {
        let spec = Dataset::FibercupDwi.spec().fetch_spec();
        assert_eq!(spec.name, "fibercup_dwi");
        assert!(spec.unzip);
        assert_eq!(spec.files.len(), 1);
        assert_eq!(spec.files[0].remote_path, "br4ds/download");
        assert_eq!(spec.files[0].local_name, "sub01-dwi.zip");
        assert_eq!(
            spec.files[0].md5.as_deref(),
            Some("705396981f1bcda51de12098db968390")
        );
        assert_eq!(spec.data_size.as_deref(), Some("0.39MB"));
    }

    #[test]
    fn test_use_permission_files() {
        let spec = Dataset::Mni2009cNonlinSymmAnat.spec();
        assert!(!spec.is_data_file(Path::new("/home/mni/COPYING")));
        assert!(spec.is_data_file(Path::new("/home/mni/sub01-T1w.nii.gz")));
        assert!(Dataset::FibercupAnat.spec().is_data_file(Path::new("COPYING")));
    }
}
