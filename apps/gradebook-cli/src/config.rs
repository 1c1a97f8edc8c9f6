//! Configuration for the gradebook CLI
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [display]
//! precision = 2
//!
//! [sort]
//! strategy = "partition"
//! descending = false
//! ```
//!
//! Lookup order: an explicit path, then `GRADEBOOK_CONFIG`, then
//! `<config dir>/gradebook/config.toml`. Missing sections fall back to
//! defaults.

use std::path::{Path, PathBuf};

use gradebook_core::SortStrategy;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "GRADEBOOK_CONFIG";

/// CLI-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradebookConfig {
    /// Output formatting
    pub display: DisplayConfig,
    /// Default sort behavior
    pub sort: SortConfig,
}

/// Output formatting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for averages and statistics
    pub precision: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Default sort configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub strategy: SortStrategy,
    pub descending: bool,
}

impl GradebookConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Resolve and load the configuration.
    ///
    /// An explicit path or `GRADEBOOK_CONFIG` must point at a readable file.
    /// The default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::resolve(explicit, from_env.as_deref())
    }

    /// Lookup with the `GRADEBOOK_CONFIG` value passed in
    fn resolve(explicit: Option<&Path>, from_env: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            tracing::info!("Loading config from {:?}", path);
            return Self::load_file(path);
        }

        if let Some(path) = from_env {
            tracing::info!("Loading config from {} = {:?}", CONFIG_ENV, path);
            return Self::load_file(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => {
                tracing::info!("Loading config from {:?}", path);
                Self::load_file(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// `<config dir>/gradebook/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gradebook").join("config.toml"))
}
