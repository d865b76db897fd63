//! Configuration file support for Formwork.
//!
//! Two configuration file locations are supported:
//! - Global: `~/.formwork/config.toml` - User-wide defaults
//! - Project: `.formwork/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::countries::provider::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

/// Formwork configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Country data source settings
    pub countries: CountriesConfig,

    /// Network settings
    pub net: NetConfig,
}

/// Country-source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CountriesConfig {
    /// Endpoint URL for the country list fetch
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,
}

/// Network-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Offline mode (never fetch from the network)
    #[serde(default)]
    pub offline: bool,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.countries.endpoint.is_some() {
            self.countries.endpoint = other.countries.endpoint;
        }
        if other.countries.timeout.is_some() {
            self.countries.timeout = other.countries.timeout;
        }
        if other.net.offline {
            self.net.offline = true;
        }
    }

    /// The configured country endpoint, parsed and validated.
    pub fn country_endpoint(&self) -> Result<Url> {
        let raw = self
            .countries
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT);
        Url::parse(raw).with_context(|| format!("invalid country endpoint: {raw}"))
    }

    /// The configured fetch timeout in seconds.
    pub fn country_timeout(&self) -> u64 {
        self.countries.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.formwork/config.toml)
/// 2. Global config (~/.formwork/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        let global = Config::load_or_default(global_path);
        config.merge(global);
    }

    if project_path.exists() {
        let project = Config::load_or_default(project_path);
        config.merge(project);
    }

    config
}

/// Get the global formwork config directory (~/.formwork).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".formwork"))
}

/// Get the global config path (~/.formwork/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.formwork/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".formwork").join("config.toml")
}
