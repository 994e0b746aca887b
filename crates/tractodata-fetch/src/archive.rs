//! Archive extraction for zipped and tarred datasets.

use crate::error::{FetchError, Result};
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    /// `.zip`
    Zip,
    /// `.tar.gz` or `.tgz`
    TarGz,
}

impl ArchiveKind {
    /// Detect the archive format from a file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_lowercase();
        if name.ends_with(".zip") {
            Some(Self::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else {
            None
        }
    }
}

/// Extract an archive into `dest`, overwriting existing files.
///
/// Returns the paths of the extracted regular files relative to `dest`, in
/// archive order. Entries whose paths would escape `dest` are skipped.
pub fn extract(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let kind = ArchiveKind::from_path(archive)
        .ok_or_else(|| FetchError::UnsupportedArchive(archive.to_path_buf()))?;
    debug!(archive = %archive.display(), ?kind, "extracting");

    match kind {
        ArchiveKind::Zip => extract_zip(archive, dest),
        ArchiveKind::TarGz => extract_tar_gz(archive, dest),
    }
}

/// List the regular file members of an archive without extracting it.
pub fn members(archive: &Path) -> Result<Vec<PathBuf>> {
    let kind = ArchiveKind::from_path(archive)
        .ok_or_else(|| FetchError::UnsupportedArchive(archive.to_path_buf()))?;

    match kind {
        ArchiveKind::Zip => {
            let mut zip = zip::ZipArchive::new(File::open(archive)?)?;
            let mut names = Vec::with_capacity(zip.len());
            for i in 0..zip.len() {
                let entry = zip.by_index(i)?;
                if entry.is_dir() {
                    continue;
                }
                if let Some(name) = entry.enclosed_name() {
                    names.push(name);
                }
            }
            Ok(names)
        }
        ArchiveKind::TarGz => {
            let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive)?));
            let mut names = Vec::new();
            for entry in tar.entries()? {
                let entry = entry?;
                if !entry.header().entry_type().is_file() {
                    continue;
                }
                if let Some(name) = enclosed_tar_path(&entry.path()?) {
                    names.push(name);
                }
            }
            Ok(names)
        }
    }
}

fn extract_zip(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let mut zip = zip::ZipArchive::new(File::open(archive)?)?;
    let mut extracted = Vec::with_capacity(zip.len());

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!(entry = entry.name(), "skipping archive entry with unsafe path");
            continue;
        };

        let target = dest.join(&relative);
        if entry.is_dir() {
            fs::create_dir_all(&target)?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        extracted.push(relative);
    }

    Ok(extracted)
}

/// Path of a tar entry relative to the extraction folder, the way
/// `tar::Entry::unpack_in` lays it out: root, prefix and `.` components are
/// dropped. `None` for entries with `..` components or no name left.
fn enclosed_tar_path(path: &Path) -> Option<PathBuf> {
    let mut relative = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => relative.push(part),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => return None,
        }
    }
    (!relative.as_os_str().is_empty()).then_some(relative)
}

fn extract_tar_gz(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dest)?;
    let mut tar = tar::Archive::new(GzDecoder::new(File::open(archive)?));
    let mut extracted = Vec::new();

    for entry in tar.entries()? {
        let mut entry = entry?;
        let path = entry.path()?.into_owned();
        let is_file = entry.header().entry_type().is_file();

        let Some(relative) = enclosed_tar_path(&path) else {
            warn!(entry = %path.display(), "skipping archive entry with unsafe path");
            continue;
        };
        if !entry.unpack_in(dest)? {
            warn!(entry = %path.display(), "skipping archive entry with unsafe path");
            continue;
        }
        if is_file {
            extracted.push(relative);
        }
    }

    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        zip.add_directory("nested/", SimpleFileOptions::default())
            .unwrap();
        for (name, data) in entries {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap();
    }

    /// Tar entry names are written verbatim so that absolute and escaping
    /// names can be stored.
    fn write_tar_gz(path: &Path, entries: &[(&str, &[u8])]) {
        let gz = flate2::write::GzEncoder::new(
            File::create(path).unwrap(),
            flate2::Compression::default(),
        );
        let mut builder = tar::Builder::new(gz);
        for (name, data) in entries {
            let mut header = tar::Header::new_gnu();
            let name = name.as_bytes();
            header.as_old_mut().name[..name.len()].copy_from_slice(name);
            header.set_entry_type(tar::EntryType::Regular);
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append(&header, *data).unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[rstest]
    #[case("sub01-dwi.zip", Some(ArchiveKind::Zip))]
    #[case("SUB01-DWI.ZIP", Some(ArchiveKind::Zip))]
    #[case("surfaces.tar.gz", Some(ArchiveKind::TarGz))]
    #[case("surfaces.tgz", Some(ArchiveKind::TarGz))]
    #[case("surfaces.tar.bz2", None)]
    #[case("sub01-T1w.nii.gz", None)]
    fn test_archive_kind(#[case] name: &str, #[case] expected: Option<ArchiveKind>) {
        assert_eq!(ArchiveKind::from_path(Path::new(name)), expected);
    }

    #[test]
    fn test_extract_zip() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("sub01-dwi.zip");
        write_zip(
            &archive,
            &[
                ("sub01-dwi.bval", b"0 1000"),
                ("nested/sub01-dwi.bvec", b"1 0 0"),
            ],
        );

        let out = dir.path().join("out");
        let members = extract(&archive, &out).unwrap();

        assert_eq!(
            members,
            vec![
                PathBuf::from("sub01-dwi.bval"),
                PathBuf::from("nested/sub01-dwi.bvec")
            ]
        );
        assert_eq!(fs::read(out.join("sub01-dwi.bval")).unwrap(), b"0 1000");
        assert_eq!(members, super::members(&archive).unwrap());
    }

    #[test]
    fn test_extract_zip_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("a.zip");
        write_zip(&archive, &[("file.txt", b"fresh")]);
        fs::write(dir.path().join("file.txt"), b"stale").unwrap();

        extract(&archive, dir.path()).unwrap();
        assert_eq!(fs::read(dir.path().join("file.txt")).unwrap(), b"fresh");
    }

    #[test]
    fn test_extract_tar_gz() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("maps.tar.gz");
        write_tar_gz(&archive, &[("label-WM_dseg.nii.gz", b"wm"), ("a/b.txt", b"b")]);

        let members = extract(&archive, dir.path()).unwrap();
        assert_eq!(
            members,
            vec![PathBuf::from("label-WM_dseg.nii.gz"), PathBuf::from("a/b.txt")]
        );
        assert_eq!(fs::read(dir.path().join("a/b.txt")).unwrap(), b"b");
        assert_eq!(members, super::members(&archive).unwrap());
    }

    #[rstest]
    #[case("maps/label-WM_dseg.nii.gz", Some("maps/label-WM_dseg.nii.gz"))]
    #[case("/maps/label-WM_dseg.nii.gz", Some("maps/label-WM_dseg.nii.gz"))]
    #[case("./maps/./label-WM_dseg.nii.gz", Some("maps/label-WM_dseg.nii.gz"))]
    #[case("../label-WM_dseg.nii.gz", None)]
    #[case("maps/../../label-WM_dseg.nii.gz", None)]
    #[case("/", None)]
    fn test_enclosed_tar_path(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(enclosed_tar_path(Path::new(path)), expected.map(PathBuf::from));
    }

    #[test]
    fn test_extract_tar_gz_absolute_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("surfaces.tar.gz");
        write_tar_gz(&archive, &[("/abs_surfaces/lh.pial.surf.vtk", b"lh")]);

        let out = dir.path().join("out");
        let members = extract(&archive, &out).unwrap();

        assert_eq!(members, vec![PathBuf::from("abs_surfaces/lh.pial.surf.vtk")]);
        assert!(members.iter().all(|m| out.join(m).is_file()));
        assert_eq!(members, super::members(&archive).unwrap());
    }

    #[test]
    fn test_extract_tar_gz_skips_escaping_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("maps.tar.gz");
        write_tar_gz(&archive, &[("../evil.txt", b"evil"), ("ok.txt", b"ok")]);

        let out = dir.path().join("out");
        let members = extract(&archive, &out).unwrap();

        assert_eq!(members, vec![PathBuf::from("ok.txt")]);
        assert!(!dir.path().join("evil.txt").exists());
        assert_eq!(members, super::members(&archive).unwrap());
    }

    #[test]
    fn test_extract_zip_skips_escaping_entry() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("maps.zip");
        write_zip(&archive, &[("../evil.txt", b"evil"), ("ok.txt", b"ok")]);

        let out = dir.path().join("out");
        let members = extract(&archive, &out).unwrap();

        assert_eq!(members, vec![PathBuf::from("ok.txt")]);
        assert!(!dir.path().join("evil.txt").exists());
        assert_eq!(members, super::members(&archive).unwrap());
    }

    #[test]
    fn test_extract_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("data.rar");
        fs::write(&archive, b"").unwrap();

        let result = extract(&archive, dir.path());
        assert!(matches!(result, Err(FetchError::UnsupportedArchive(_))));
    }
}
