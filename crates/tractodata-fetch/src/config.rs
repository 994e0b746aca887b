//! Data home and remote storage configuration.

use crate::error::{FetchError, Result};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding the data home.
pub const HOME_ENV_VAR: &str = "TRACTODATA_HOME";

/// Environment variable overriding the remote storage base URL.
pub const BASE_URL_ENV_VAR: &str = "TRACTODATA_BASE_URL";

/// Remote storage hosting the datasets (Open Science Framework).
pub const DEFAULT_BASE_URL: &str = "https://osf.io/";

/// Name of the data home directory under the user's home.
const HOME_DIR_NAME: &str = ".tractodata";

/// Some datasets are a few hundred megabytes.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Fetch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    home: PathBuf,
    base_url: String,
    timeout: Duration,
    show_progress: bool,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// The data home is `$TRACTODATA_HOME` when set, `~/.tractodata` otherwise.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = match lookup(HOME_ENV_VAR) {
            Some(home) if !home.is_empty() => PathBuf::from(home),
            _ => dirs::home_dir().ok_or(FetchError::NoHome)?.join(HOME_DIR_NAME),
        };

        let config = Self::with_home(home);
        Ok(match lookup(BASE_URL_ENV_VAR) {
            Some(url) if !url.is_empty() => config.base_url(url),
            _ => config,
        })
    }

    /// Create a configuration rooted at the given data home.
    pub fn with_home<P: Into<PathBuf>>(home: P) -> Self {
        Self {
            home: home.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            show_progress: true,
        }
    }

    /// Set the remote base URL. A trailing `/` is appended when missing.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set the HTTP request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Enable or disable download progress bars.
    #[must_use]
    pub const fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Data home.
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Root of the dataset tree, `<home>/datasets`.
    pub fn datasets_dir(&self) -> PathBuf {
        self.home.join("datasets")
    }

    /// Remote base URL, always ending with `/`.
    pub fn remote_base_url(&self) -> &str {
        &self.base_url
    }

    /// HTTP request timeout.
    pub const fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether progress bars are drawn.
    pub const fn progress_enabled(&self) -> bool {
        self.show_progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_home_from_variable() {
        let config = Config::from_lookup(lookup_from(&[(HOME_ENV_VAR, "TEST_PATH")])).unwrap();
        assert_eq!(config.home(), Path::new("TEST_PATH"));
        assert_eq!(config.datasets_dir(), Path::new("TEST_PATH").join("datasets"));
    }

    #[test]
    fn test_default_home() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let expected = dirs::home_dir().unwrap().join(".tractodata");
        assert_eq!(config.home(), expected);
        assert_eq!(config.remote_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_empty_home_variable_falls_back() {
        let config = Config::from_lookup(lookup_from(&[(HOME_ENV_VAR, "")])).unwrap();
        assert!(config.home().ends_with(".tractodata"));
    }

    #[test]
    fn test_base_url_normalised() {
        let config = Config::with_home("/tmp/x").base_url("http://127.0.0.1:8000");
        assert_eq!(config.remote_base_url(), "http://127.0.0.1:8000/");

        let config = Config::from_lookup(lookup_from(&[
            (HOME_ENV_VAR, "/data"),
            (BASE_URL_ENV_VAR, "http://mirror.local/files/"),
        ]))
        .unwrap();
        assert_eq!(config.remote_base_url(), "http://mirror.local/files/");
    }

    #[test]
    fn test_builder_settings() {
        let config = Config::with_home("/data")
            .timeout(Duration::from_secs(5))
            .show_progress(false);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert!(!config.progress_enabled());
    }
}
