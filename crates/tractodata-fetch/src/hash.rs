//! MD5 checksums of local files.

use crate::error::{FetchError, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for hashing.
const CHUNK_SIZE: usize = 128 * 64;

/// Compute the lowercase hex MD5 digest of a file, streaming its contents.
pub fn file_md5<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Check a file against its expected MD5 digest.
///
/// `None` skips the check. The expected digest is compared case-insensitively.
/// A mismatching file is left in place.
pub fn check_md5<P: AsRef<Path>>(path: P, expected: Option<&str>) -> Result<()> {
    let Some(expected) = expected else {
        return Ok(());
    };

    let path = path.as_ref();
    let computed = file_md5(path)?;
    if expected.to_lowercase() != computed {
        return Err(FetchError::HashMismatch {
            path: path.to_path_buf(),
            expected: expected.to_string(),
            computed,
        });
    }

    Ok(())
}

/// Whether an existing file matches the expected digest.
pub(crate) fn matches_md5(path: &Path, expected: Option<&str>) -> Result<bool> {
    match expected {
        Some(expected) => Ok(file_md5(path)? == expected.to_lowercase()),
        None => Ok(true),
    }
}
