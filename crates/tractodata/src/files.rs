//! Resolved dataset files and their grouping by label.
//!
//! The functions here work on resolved file lists only and never touch the
//! network.

use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};
use crate::registry::DatasetSpec;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tractodata_fetch::Fetched;
use tractodata_labels::{
    Label, bundle_endpoint_key, bundle_key, filter_filenames_on_value, label_value, surface_key,
};

/// Files of a diffusion dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DwiFiles {
    /// Diffusion weighted image
    pub dwi: PathBuf,
    /// b-values
    pub bval: PathBuf,
    /// b-vectors
    pub bvec: PathBuf,
}

/// A tractogram and the anatomy it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TractogramFiles {
    /// Reference anatomy
    pub reference: PathBuf,
    /// Tractogram
    pub tractogram: PathBuf,
}

/// Bundle tractograms and the anatomy they refer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleFiles {
    /// Reference anatomy
    pub reference: PathBuf,
    /// Bundle key to tractogram
    pub bundles: BTreeMap<String, PathBuf>,
}

/// Files of a fetched dataset: the file itself, or the sorted archive members
/// without use permission files.
pub fn resolve_fnames(spec: &DatasetSpec, fetched: &Fetched) -> Vec<PathBuf> {
    let mut fnames = Vec::new();
    for file in &fetched.files {
        match &file.members {
            Some(members) => fnames.extend(
                members
                    .iter()
                    .filter(|m| spec.is_data_file(m))
                    .map(|m| fetched.folder.join(m)),
            ),
            None => fnames.push(file.path.clone()),
        }
    }
    if spec.unzip {
        fnames.sort();
    }
    fnames
}

/// The single file of a dataset.
pub fn single(dataset: Dataset, fnames: Vec<PathBuf>) -> Result<PathBuf> {
    let count = fnames.len();
    match <[PathBuf; 1]>::try_from(fnames) {
        Ok([fname]) => Ok(fname),
        Err(_) => Err(DatasetError::UnexpectedFileCount { dataset, count }),
    }
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
}

/// Pick the image, b-values and b-vectors of a diffusion dataset by extension.
pub fn dwi_files(dataset: Dataset, fnames: &[PathBuf]) -> Result<DwiFiles> {
    let find = |suffix: &str, kind: &'static str| {
        fnames
            .iter()
            .find(|f| has_suffix(f, suffix))
            .cloned()
            .ok_or(DatasetError::MissingFile { dataset, kind })
    };

    Ok(DwiFiles {
        dwi: find(".nii.gz", "diffusion image")?,
        bval: find(".bval", "b-value")?,
        bvec: find(".bvec", "b-vector")?,
    })
}

/// Narrow `fnames` down to the given label values, when any.
pub fn filter_on<V: Display>(
    fnames: Vec<PathBuf>,
    label: Label,
    values: Option<&[V]>,
) -> Vec<PathBuf> {
    match values {
        Some(values) if !values.is_empty() => {
            let values: Vec<String> = values.iter().map(ToString::to_string).collect();
            filter_filenames_on_value(&fnames, label, &values)
        }
        _ => fnames,
    }
}

/// `bundle[,hemisphere]` key of a file; `None` when it carries no bundle.
pub fn bundle_key_of(fname: &Path) -> Option<String> {
    let bundle = label_value(fname, Label::Bundle)?;
    let hemisphere = label_value(fname, Label::Hemisphere);
    Some(bundle_key(&bundle, hemisphere.as_deref()))
}

/// `bundle[,hemisphere],endpoint` key of a file; `None` when it carries no
/// bundle or no endpoint.
pub fn bundle_endpoint_key_of(fname: &Path) -> Option<String> {
    let bundle = label_value(fname, Label::Bundle)?;
    let endpoint = label_value(fname, Label::Endpoint)?;
    let hemisphere = label_value(fname, Label::Hemisphere);
    Some(bundle_endpoint_key(&bundle, &endpoint, hemisphere.as_deref()))
}

/// `surface[,hemisphere]` key of a file; `None` when it is not a surface.
pub fn surface_key_of(fname: &Path) -> Option<String> {
    let surface = label_value(fname, Label::Surface)?;
    let hemisphere = label_value(fname, Label::Hemisphere);
    Some(surface_key(&surface, hemisphere.as_deref()))
}

/// Keys of the files, in file order, skipping files without a key.
pub fn keys<F>(fnames: &[PathBuf], key_of: F) -> Vec<String>
where
    F: Fn(&Path) -> Option<String>,
{
    fnames.iter().filter_map(|f| key_of(f)).collect()
}

/// Key to file map, skipping files without a key.
pub fn keyed<F>(fnames: Vec<PathBuf>, key_of: F) -> BTreeMap<String, PathBuf>
where
    F: Fn(&Path) -> Option<String>,
{
    fnames
        .into_iter()
        .filter_map(|f| key_of(&f).map(|key| (key, f)))
        .collect()
}

/// Key function returning the value of a single label.
pub fn label_key(label: Label) -> impl Fn(&Path) -> Option<String> {
    move |fname| label_value(fname, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tractodata_fetch::FetchedFile;
    use tractodata_labels::{Endpoint, Hemisphere};

    fn paths(folder: &str, names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| Path::new(folder).join(n)).collect()
    }

    fn bundling() -> Vec<PathBuf> {
        paths(
            "/home/bundling",
            &[
                "sub01-T1w_space-orig_desc-synth_subset-CC_tractography.trk",
                "sub01-T1w_hemi-L_space-orig_desc-synth_subset-CST_tractography.trk",
                "sub01-T1w_hemi-R_space-orig_desc-synth_subset-CST_tractography.trk",
                "sub01-T1w_hemi-L_space-orig_desc-synth_subset-Cing_tractography.trk",
            ],
        )
    }

    #[test]
    fn test_resolve_archive_members() {
        let spec = Dataset::Mni2009cNonlinSymmSurfaces.spec();
        let folder = PathBuf::from("/home/mni");
        let fetched = Fetched {
            folder: folder.clone(),
            files: vec![FetchedFile {
                local_name: spec.local_name.to_string(),
                path: folder.join(spec.local_name),
                members: Some(vec![
                    PathBuf::from("sub01-T1w_hemi-R_space-orig_pial.surf.vtk"),
                    PathBuf::from("COPYING"),
                    PathBuf::from("sub01-T1w_hemi-L_space-orig_pial.surf.vtk"),
                ]),
            }],
            downloaded: 0,
        };

        assert_eq!(
            resolve_fnames(spec, &fetched),
            vec![
                folder.join("sub01-T1w_hemi-L_space-orig_pial.surf.vtk"),
                folder.join("sub01-T1w_hemi-R_space-orig_pial.surf.vtk"),
            ]
        );
    }

    #[test]
    fn test_resolve_single_file() {
        let spec = Dataset::FibercupAnat.spec();
        let path = PathBuf::from("/home/anat/sub01-T1w.nii.gz");
        let fetched = Fetched {
            folder: PathBuf::from("/home/anat"),
            files: vec![FetchedFile {
                local_name: spec.local_name.to_string(),
                path: path.clone(),
                members: None,
            }],
            downloaded: 1,
        };
        let fnames = resolve_fnames(spec, &fetched);
        assert_eq!(single(Dataset::FibercupAnat, fnames).unwrap(), path);
    }

    #[test]
    fn test_single_rejects_many() {
        let err = single(Dataset::FibercupDwi, bundling()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnexpectedFileCount {
                dataset: Dataset::FibercupDwi,
                count: 4
            }
        ));
    }

    #[test]
    fn test_dwi_files() {
        let fnames = paths("/dwi", &["sub01-dwi.bval", "sub01-dwi.bvec", "sub01-dwi.nii.gz"]);
        let dwi = dwi_files(Dataset::FibercupDwi, &fnames).unwrap();
        assert_eq!(dwi.bval, fnames[0]);
        assert_eq!(dwi.bvec, fnames[1]);
        assert_eq!(dwi.dwi, fnames[2]);

        let err = dwi_files(Dataset::FibercupDwi, &fnames[1..]).unwrap_err();
        assert!(matches!(err, DatasetError::MissingFile { kind: "b-value", .. }));
    }

    #[test]
    fn test_bundle_keys() {
        let keys = keys(&bundling(), bundle_key_of);
        assert_eq!(keys, vec!["CC", "CST,L", "CST,R", "Cing,L"]);
    }

    #[test]
    fn test_bundle_filters() {
        let bundles = vec!["CST".to_string()];
        let fnames = filter_on(bundling(), Label::Bundle, Some(bundles.as_slice()));
        let fnames = filter_on(fnames, Label::Hemisphere, Some(&[Hemisphere::Right][..]));
        let map = keyed(fnames, bundle_key_of);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["CST,R"]);

        let all = filter_on::<String>(bundling(), Label::Bundle, None);
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_endpoint_keys() {
        let fnames = paths(
            "/endpoints",
            &[
                "sub01-T1w_space-orig_desc-synth_subset-CC_part-head_tractography.nii.gz",
                "sub01-T1w_space-orig_desc-synth_subset-CC_part-tail_tractography.nii.gz",
                "sub01-T1w_hemi-L_space-orig_desc-synth_subset-CST_part-head_tractography.nii.gz",
                "sub01-T1w_space-orig_desc-synth_subset-CC_tractography.nii.gz",
            ],
        );
        assert_eq!(
            keys(&fnames, bundle_endpoint_key_of),
            vec!["CC,head", "CC,tail", "CST,L,head"]
        );

        let tails = filter_on(fnames, Label::Endpoint, Some(&[Endpoint::Tail][..]));
        assert_eq!(keyed(tails, bundle_endpoint_key_of).len(), 1);
    }

    #[test]
    fn test_surface_and_label_keys() {
        let fnames = paths(
            "/surfaces",
            &[
                "sub01-T1w_hemi-L_space-orig_pial.surf.vtk",
                "sub01-T1w_hemi-R_space-orig_pial.surf.vtk",
                "COPYING",
            ],
        );
        assert_eq!(keys(&fnames, surface_key_of), vec!["pial,L", "pial,R"]);

        let dti = paths(
            "/dti",
            &[
                "sub01-dwi_space-orig_model-DTI_label-FA.nii.gz",
                "sub01-dwi_space-orig_model-DTI_label-MD.nii.gz",
            ],
        );
        let map = keyed(dti, label_key(Label::Dti));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["FA", "MD"]);
    }
}
