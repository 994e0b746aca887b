//! Dataset fetcher: download, verify and unpack remote files into the data home.

use crate::archive;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::hash;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// User agent sent with every download request.
const USER_AGENT: &str = concat!("tractodata/", env!("CARGO_PKG_VERSION"));

/// Suffix of files being downloaded.
const PARTIAL_SUFFIX: &str = ".part";

/// A remote file and where it lands locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    /// Path relative to the configured base URL (e.g. `2xmgw/download`)
    pub remote_path: String,
    /// File name inside the fetch folder
    pub local_name: String,
    /// Published MD5 digest; `None` disables verification
    pub md5: Option<String>,
}

impl RemoteFile {
    /// Create a remote file entry.
    pub fn new(
        remote_path: impl Into<String>,
        local_name: impl Into<String>,
        md5: Option<&str>,
    ) -> Self {
        Self {
            remote_path: remote_path.into(),
            local_name: local_name.into(),
            md5: md5.map(str::to_string),
        }
    }
}

/// Everything needed to fetch one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSpec {
    /// Dataset name, used in log messages
    pub name: String,
    /// Destination folder. Relative folders are resolved against the data home.
    pub folder: PathBuf,
    /// Files to fetch
    pub files: Vec<RemoteFile>,
    /// Human readable size (e.g. "7.1MB")
    pub data_size: Option<String>,
    /// Extract the files after download
    pub unzip: bool,
    /// Message logged once fetching completes
    pub message: Option<String>,
}

/// A fetched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedFile {
    /// File name inside the fetch folder
    pub local_name: String,
    /// Absolute path of the file
    pub path: PathBuf,
    /// Extracted members relative to the fetch folder, for unpacked archives
    pub members: Option<Vec<PathBuf>>,
}

/// Outcome of a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Folder holding the files
    pub folder: PathBuf,
    /// Files in fetch order
    pub files: Vec<FetchedFile>,
    /// Number of files downloaded by this call
    pub downloaded: usize,
}

impl Fetched {
    /// Look up a fetched file by its local name.
    pub fn file(&self, local_name: &str) -> Option<&FetchedFile> {
        self.files.iter().find(|f| f.local_name == local_name)
    }
}

/// Local state of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Not downloaded
    Missing,
    /// Present and matching its checksum
    Valid,
    /// Present but with a different checksum
    Corrupt {
        /// Digest of the local file
        computed: String,
    },
}

/// Fetches datasets into the data home.
pub struct Fetcher {
    client: reqwest::Client,
    config: Config,
}

impl Fetcher {
    /// Create a fetcher for the given configuration.
    pub fn new(config: Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout())
            .build()
            .map_err(FetchError::Network)?;

        Ok(Self { client, config })
    }

    /// Configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute folder for a spec.
    pub fn folder(&self, spec: &FetchSpec) -> PathBuf {
        if spec.folder.is_absolute() {
            spec.folder.clone()
        } else {
            self.config.home().join(&spec.folder)
        }
    }

    /// URL of a remote file.
    pub fn url(&self, file: &RemoteFile) -> String {
        format!("{}{}", self.config.remote_base_url(), file.remote_path)
    }

    /// Fetch the files of a spec.
    ///
    /// Files already present with a matching checksum are not downloaded
    /// again. Freshly downloaded files are verified; a mismatch is an error and
    /// the file is kept for inspection. Archives are extracted when the fetch spec
    /// asks for it.
    pub async fn fetch(&self, spec: &FetchSpec) -> Result<Fetched> {
        let folder = self.folder(spec);

        if !folder.exists() {
            info!(dataset = %spec.name, "Creating new folder {}", folder.display());
            tokio::fs::create_dir_all(&folder).await?;
        }

        if let Some(size) = &spec.data_size {
            info!(dataset = %spec.name, "Data size is approximately {size}");
        }

        let mut downloaded = 0;
        for file in &spec.files {
            let path = folder.join(&file.local_name);

            if path.exists() && is_valid(&path, file.md5.as_deref()).await? {
                debug!(dataset = %spec.name, file = %file.local_name, "already in place");
                continue;
            }

            info!(
                dataset = %spec.name,
                "Downloading {} to {}",
                file.local_name,
                folder.display()
            );
            self.download(&self.url(file), &path).await?;
            verify(&path, file.md5.as_deref()).await?;
            downloaded += 1;
        }

        if downloaded == 0 {
            info!(
                dataset = %spec.name,
                "Dataset is already in place. If you want to fetch it again, please first \
                 remove the file at issue in folder {}",
                folder.display()
            );
        } else {
            info!(dataset = %spec.name, "Files successfully downloaded to {}", folder.display());
        }

        if let Some(message) = &spec.message {
            info!(dataset = %spec.name, "{message}");
        }

        let mut files = Vec::with_capacity(spec.files.len());
        for file in &spec.files {
            let path = folder.join(&file.local_name);
            let members = if spec.unzip {
                Some(unpack(&path, &folder, downloaded > 0).await?)
            } else {
                None
            };
            files.push(FetchedFile {
                local_name: file.local_name.clone(),
                path,
                members,
            });
        }

        Ok(Fetched {
            folder,
            files,
            downloaded,
        })
    }

    /// Report the local state of each file of a spec without network access.
    pub async fn status(&self, spec: &FetchSpec) -> Result<Vec<(String, FileStatus)>> {
        let folder = self.folder(spec);
        let mut statuses = Vec::with_capacity(spec.files.len());

        for file in &spec.files {
            let path = folder.join(&file.local_name);
            let status = if !path.exists() {
                FileStatus::Missing
            } else {
                let computed = blocking(move || hash::file_md5(path)).await?;
                match file.md5.as_deref() {
                    Some(expected) if expected.to_lowercase() != computed => {
                        FileStatus::Corrupt { computed }
                    }
                    _ => FileStatus::Valid,
                }
            };
            statuses.push((file.local_name.clone(), status));
        }

        Ok(statuses)
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
            });
        }

        let partial = partial_path(dest);
        let progress = self.progress_bar(response.content_length());
        let mut out = tokio::fs::File::create(&partial).await?;

        while let Some(chunk) = response.chunk().await? {
            out.write_all(&chunk).await?;
            progress.inc(chunk.len() as u64);
        }
        out.flush().await?;
        drop(out);
        progress.finish_and_clear();

        tokio::fs::rename(&partial, dest).await?;
        Ok(())
    }

    fn progress_bar(&self, total: Option<u64>) -> ProgressBar {
        if !self.config.progress_enabled() {
            return ProgressBar::hidden();
        }

        match total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::with_template(
                        "Download Progress: [{bar:40.cyan/blue}] {percent}% of {total_bytes}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        }
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(PARTIAL_SUFFIX);
    dest.with_file_name(name)
}

async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

async fn is_valid(path: &Path, md5: Option<&str>) -> Result<bool> {
    let path = path.to_path_buf();
    let md5 = md5.map(str::to_string);
    blocking(move || hash::matches_md5(&path, md5.as_deref())).await
}

async fn verify(path: &Path, md5: Option<&str>) -> Result<()> {
    let path = path.to_path_buf();
    let md5 = md5.map(str::to_string);
    blocking(move || hash::check_md5(&path, md5.as_deref())).await
}

/// Extract an archive when it was just downloaded or when any of its members
/// is missing on disk; otherwise only list its members.
async fn unpack(archive: &Path, folder: &Path, fresh: bool) -> Result<Vec<PathBuf>> {
    let archive = archive.to_path_buf();
    let folder = folder.to_path_buf();

    blocking(move || {
        if !fresh {
            let members = archive::members(&archive)?;
            if members.iter().all(|m| folder.join(m).is_file()) {
                return Ok(members);
            }
        }
        archive::extract(&archive, &folder)
    })
    .await
}
