//! Health command implementation

use colored::Colorize;

use finai::AnalysisApi;
use finai::error::Result;
use finai::models::ModelAvailabilityDisplay;
use finai::output::{format_json, format_table};

use crate::cli::{CommandContext, OutputFormat};

/// Query the health endpoint
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let health = ctx.client.health().await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&health)?),
        OutputFormat::Pretty => {
            if health.is_ok() {
                println!("{} API status: {}", "✓".green(), health.status);
            } else {
                println!("{} API status: {}", "✗".red(), health.status);
            }

            let store = if health.firebase {
                "connected".green()
            } else {
                "unavailable".yellow()
            };
            println!("  Data store: {}", store);

            if let Some(timestamp) = &health.timestamp {
                println!(
                    "  Checked at: {}",
                    finai::models::display::format_as_iso_datetime(timestamp)
                );
            }

            println!();
            println!("{}", format_table(&ModelAvailabilityDisplay::rows(&health)));
        }
    }

    Ok(())
}
