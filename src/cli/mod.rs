//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod analysis;
pub mod args;
pub mod completions;
pub mod context;
pub mod health;
pub mod init;
pub mod job;
pub mod status;

pub use args::{GlobalOptions, OutputFormat, Section, WaitArgs};
pub use context::CommandContext;

/// finai - command-line client for the FinancialAI analysis API
#[derive(Parser, Debug)]
#[command(name = "finai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "FINAI_FORMAT",
        default_value = "pretty",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "FINAI_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// API base URL (overrides the config file)
    #[arg(long, global = true, env = "FINAI_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Bearer token (overrides the config file)
    #[arg(
        long,
        global = true,
        env = "FINAI_TOKEN",
        hide_env = true,
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "FINAI_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the configuration file interactively
    Init,

    /// Show configuration status
    Status,

    /// Check API and model availability
    Health,

    /// Run a quick analysis
    Quick,

    /// Run a full synchronous analysis
    Full,

    /// Fetch one analysis section from its dedicated endpoint
    Section {
        #[arg(value_enum)]
        section: Section,
    },

    /// Queue a deep analysis job and print its id
    Queue,

    /// Show the current state of a job
    Job {
        /// Job ID returned by `finai queue`
        job_id: String,
    },

    /// Poll a job until it completes or fails
    Wait {
        /// Job ID returned by `finai queue`
        job_id: String,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Queue a deep analysis and wait for the result
    Analyze {
        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Cancel a queued or running job
    Cancel {
        /// Job ID to cancel
        job_id: String,
    },

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   finai completion bash > /etc/bash_completion.d/finai
  zsh:    finai completion zsh > \"${fpath[1]}/_finai\"
  fish:   finai completion fish > ~/.config/fish/completions/finai.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
