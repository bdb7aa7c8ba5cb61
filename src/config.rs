use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::version::types::{ArtifactCoordinate, DEFAULT_ARTIFACT_ID, DEFAULT_GROUP_ID};

const APP_NAME: &str = "wicket-versions";

// =============================================================================
// Defaults
// =============================================================================

/// Default Maven Central search endpoint
pub const DEFAULT_BASE_URL: &str = "https://search.maven.org";

/// Default number of rows requested from the search endpoint
pub const DEFAULT_ROWS: u32 = 100;

/// Default timeout for the index request in milliseconds (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Default cache time-to-live in milliseconds (1 hour)
pub const DEFAULT_CACHE_TTL_MS: u64 = 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// Application configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub index: IndexConfig,
    pub cache: CacheConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            result => result,
        }
    }
}

/// Package index configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    pub base_url: String,
    pub group_id: String,
    pub artifact_id: String,
    pub rows: u32,
    /// Request timeout in milliseconds
    pub request_timeout: u64,
}

impl IndexConfig {
    pub fn coordinate(&self) -> ArtifactCoordinate {
        ArtifactCoordinate::new(&self.group_id, &self.artifact_id)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout)
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            group_id: DEFAULT_GROUP_ID.to_string(),
            artifact_id: DEFAULT_ARTIFACT_ID.to_string(),
            rows: DEFAULT_ROWS,
            request_timeout: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

/// Cache-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheConfig {
    /// Time-to-live of the cached version list in milliseconds
    pub ttl: u64,
    /// Return the expired list when a refill fails instead of the error
    pub serve_stale_on_error: bool,
}

impl CacheConfig {
    pub fn ttl_duration(&self) -> Duration {
        Duration::from_millis(self.ttl)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_CACHE_TTL_MS,
            serve_stale_on_error: false,
        }
    }
}

/// Returns the path to the data directory for wicket-versions.
/// Uses $XDG_DATA_HOME/wicket-versions if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/wicket-versions,
/// or ./wicket-versions if neither is available.
pub fn data_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the configuration directory.
/// Same resolution as [`data_dir`] with $XDG_CONFIG_HOME and ~/.config.
pub fn config_dir() -> PathBuf {
    dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("wicket-versions.log")
}

fn dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_relative: &str) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_relative)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(APP_NAME)
}
