//! Configuration management for finai

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

mod client;

pub use client::{ClientConfig, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL, DEFAULT_TIMEOUT};

/// Persisted CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Bearer token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Client tuning
    #[serde(default)]
    pub preferences: Preferences,
}

/// Client tuning preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Cache time-to-live in milliseconds
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,

    /// Maximum number of cached responses
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

fn default_cache_ttl_ms() -> u64 {
    DEFAULT_CACHE_TTL.as_millis() as u64
}

fn default_cache_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            cache_ttl_ms: default_cache_ttl_ms(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".finai").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Build the client settings from this config
    pub fn client_config(&self) -> Result<ClientConfig> {
        let api_url = self.api_url.as_deref().ok_or(ConfigError::MissingBaseUrl)?;
        let token = self.token.as_deref().ok_or(ConfigError::MissingToken)?;

        if self.preferences.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "preferences.timeout_ms must be greater than zero".to_string(),
            )
            .into());
        }

        let config = ClientConfig::new(api_url, token)?
            .with_timeout(Duration::from_millis(self.preferences.timeout_ms))
            .with_cache_ttl(Duration::from_millis(self.preferences.cache_ttl_ms))
            .with_cache_capacity(self.preferences.cache_capacity);

        Ok(config)
    }
}
