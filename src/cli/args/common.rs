//! Common CLI types shared across commands

use std::time::Duration;

use clap::Args;
use finai::WaitOptions;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Pretty,
    /// JSON wrapped in a `{data, meta}` envelope
    Json,
}

/// Single-section reads served by dedicated endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Section {
    /// Predicted spend per category
    Category,
    /// Predicted spend per month
    Monthly,
    /// Detected anomalies
    Anomalies,
    /// Savings tips
    Tips,
    /// Financial health score
    HealthScore,
    /// Dashboard chart data
    Dashboard,
}

/// Polling controls for commands that wait on a job
#[derive(Debug, Clone, Args)]
pub struct WaitArgs {
    /// Give up after this many milliseconds
    #[arg(long = "wait-timeout-ms", default_value_t = 120_000)]
    pub wait_timeout_ms: u64,

    /// Delay between status checks, in milliseconds
    #[arg(long, default_value_t = 2_000)]
    pub poll_interval_ms: u64,
}

impl WaitArgs {
    pub fn options(&self) -> WaitOptions {
        WaitOptions::default()
            .with_timeout(Duration::from_millis(self.wait_timeout_ms))
            .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
    }
}
