//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the flag/env layer (clap resolves both); the config file is
/// merged in `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.finai/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Bearer token override
    pub token: Option<String>,

    /// Per-request timeout override, in milliseconds
    pub timeout_ms: Option<u64>,
}

impl GlobalOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            token: cli.token.clone(),
            timeout_ms: cli.timeout_ms,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
