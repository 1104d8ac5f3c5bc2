//! Configuration management for adb_ferry
//!
//! This module provides configuration with zero-config defaults and an
//! optional TOML file. The defaults reproduce the tool's stock behavior
//! exactly; a config file only exists to override the ADB binary path,
//! the default remote directory, or the child-process poll interval.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{adb, transfer};
use crate::errors::{ConfigError, Result};

/// Application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Name or path of the ADB binary to invoke
    pub adb_path: String,

    /// Remote directory used as the default push destination and pull source
    pub remote_music_dir: String,

    /// Interval between child-process liveness polls (e.g. "500ms")
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            adb_path: adb::BINARY.to_string(),
            remote_music_dir: transfer::DEFAULT_REMOTE_DIR.to_string(),
            poll_interval: transfer::POLL_INTERVAL,
        }
    }
}

impl AppConfig {
    /// Load configuration with file-over-defaults precedence
    ///
    /// An explicitly specified file must exist; the default location is
    /// optional and silently skipped when absent.
    pub async fn load(config_file_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path }.into());
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => {
                debug!("Loading config from: {}", path.display());
                Self::load_from_file(&path).await?
            }
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Find a configuration file in the standard location
    fn find_config_file() -> Option<PathBuf> {
        let path = Self::default_config_path()?;
        path.exists().then_some(path)
    }

    /// Default config file path for the current user
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("adb_ferry").join("config.toml"))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(ConfigError::Io)?;
        let config: AppConfig = toml::from_str(&content).map_err(ConfigError::InvalidFormat)?;
        Ok(config)
    }

    /// Check configuration values for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.adb_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "adb_path".to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
