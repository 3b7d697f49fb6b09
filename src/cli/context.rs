//! Command execution context
//!
//! Merges the config file with flag/env overrides and builds the client.

use std::time::Duration;

use finai::config::{ClientConfig, Config};
use finai::error::{ConfigError, Error, Result};
use finai::AnalysisClient;

use crate::cli::{GlobalOptions, OutputFormat};

/// Context for command execution containing the client and runtime options.
pub struct CommandContext {
    pub client: AnalysisClient,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or no URL/token can be
    /// resolved from any layer.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let client_config = resolve_client_config(opts)?;
        log::debug!("Using API at {}", client_config.base_url());

        Ok(Self {
            client: AnalysisClient::new(client_config)?,
            format: opts.format,
        })
    }
}

/// Layer flag/env overrides on top of the config file.
///
/// A missing config file is not an error as long as the overrides supply a
/// URL and a token.
pub fn resolve_client_config(opts: &GlobalOptions) -> Result<ClientConfig> {
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(err) => return Err(err),
    };

    if let Some(api_url) = &opts.api_url {
        config.api_url = Some(api_url.clone());
    }
    if let Some(token) = &opts.token {
        config.token = Some(token.clone());
    }

    let mut client_config = config.client_config()?;
    if let Some(timeout_ms) = opts.timeout_ms {
        client_config = client_config.with_timeout(Duration::from_millis(timeout_ms));
    }

    Ok(client_config)
}
