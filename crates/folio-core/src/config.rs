//! Application configuration.
//!
//! Loaded from `~/.config/folio/config.toml` when present; every field has a
//! default so a missing file is not an error. The `FOLIO_API_URL` environment
//! variable overrides the configured gateway URL.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default gateway base URL, pointing at a locally running backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppConfig {
    /// Backend origin; the gateway mounts its API under `/api`.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Override for the session/data directory (defaults to `~/.config/folio`).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
            data_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default location, applying the
    /// `FOLIO_API_URL` override when set.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        if let Ok(url) = std::env::var("FOLIO_API_URL") {
            if !url.trim().is_empty() {
                config.backend_url = url;
            }
        }
        Ok(config)
    }

    /// Loads the configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Returns the folio configuration directory (`~/.config/folio`).
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio"))
    }

    /// Returns the path of the configuration file, if a config dir exists.
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Directory where session files live.
    ///
    /// Honors `data_dir` when configured, otherwise the config dir.
    pub fn session_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(Self::config_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_missing() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn file_values_win_over_defaults() {
        let config: AppConfig =
            toml::from_str("backend_url = \"https://folio.example.com\"\ntimeout_secs = 5\n")
                .unwrap();
        assert_eq!(config.backend_url, "https://folio.example.com");
        assert_eq!(config.timeout_secs, 5);
    }
}
