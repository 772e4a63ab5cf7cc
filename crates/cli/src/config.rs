//! CLI configuration
//!
//! Settings are layered: built-in defaults, then the TOML config file, then
//! `BOOKSHELF_*` environment variables.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Base URL of the API, including the version prefix
    pub base_url: String,
    /// Request timeout in seconds (0 = no timeout)
    pub timeout_secs: u64,
    /// Directory holding the session token
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8088/api/v1".to_string(),
            timeout_secs: 30,
            data_dir: None,
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "bookshelf")
}

/// `<config_dir>/config.toml` for this user, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

impl ClientSettings {
    /// Load settings, reading `path` if given (it must exist) or the default
    /// config file if present
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// As [`ClientSettings::load`], with `env` standing in for the process
    /// environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let defaults = Self::default();

        let mut builder = config::Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?;

        match path {
            Some(path) => {
                builder = builder.add_source(config::File::from(path).required(true));
            }
            None => {
                if let Some(path) = default_config_path() {
                    builder = builder.add_source(config::File::from(path).required(false));
                }
            }
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("BOOKSHELF").source(env))
            .build()
            .context("Failed to load configuration")?;

        Ok(settings.try_deserialize()?)
    }

    /// Apply a base URL given on the command line
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Directory for the token file
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .context("No home directory found; set data_dir or BOOKSHELF_DATA_DIR")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
        vars.iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect()
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"https://books.example.com/api/v1\"\ndata_dir = \"/tmp/bookshelf\"\n",
        )
        .unwrap();

        let settings = ClientSettings::load_with_env(Some(&path), Some(env(&[]))).unwrap();

        assert_eq!(settings.base_url, "https://books.example.com/api/v1");
        assert_eq!(settings.timeout_secs, 30);
        assert_eq!(settings.data_dir, Some(PathBuf::from("/tmp/bookshelf")));
        assert_eq!(
            settings.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/bookshelf")
        );
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "base_url = \"https://books.example.com/api/v1\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let settings = ClientSettings::load_with_env(
            Some(&path),
            Some(env(&[
                ("BOOKSHELF_BASE_URL", "http://127.0.0.1:9000/api/v1"),
                ("BOOKSHELF_TIMEOUT_SECS", "60"),
                ("UNRELATED_BASE_URL", "http://ignored"),
            ])),
        )
        .unwrap();

        assert_eq!(settings.base_url, "http://127.0.0.1:9000/api/v1");
        assert_eq!(settings.timeout_secs, 60);
    }

    #[test]
    fn command_line_base_url_wins() {
        let settings = ClientSettings::default().with_base_url(Some("http://cli/api/v1".into()));
        assert_eq!(settings.base_url, "http://cli/api/v1");

        let settings = ClientSettings::default().with_base_url(None);
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result =
            ClientSettings::load_with_env(Some(&dir.path().join("absent.toml")), Some(env(&[])));
        assert!(result.is_err());
    }

    #[test]
    fn zero_timeout_disables_it() {
        let settings = ClientSettings {
            timeout_secs: 0,
            ..ClientSettings::default()
        };
        assert_eq!(settings.timeout(), None);
        assert_eq!(
            ClientSettings::default().timeout(),
            Some(Duration::from_secs(30))
        );
    }
}
