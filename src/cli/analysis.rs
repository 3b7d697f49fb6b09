//! Synchronous analysis commands

use colored::Colorize;

use finai::AnalysisApi;
use finai::client::AnalysisResult;
use finai::error::Result;
use finai::output::{format_json, format_report};

use crate::cli::{CommandContext, OutputFormat, Section};

/// Run a quick analysis
pub async fn quick(ctx: &CommandContext) -> Result<()> {
    let result = ctx.client.quick_analysis().await?;
    print_result(&result, ctx.format)
}

/// Run a full synchronous analysis
pub async fn full(ctx: &CommandContext) -> Result<()> {
    let result = ctx.client.full_analysis().await?;
    print_result(&result, ctx.format)
}

/// Fetch a single section; repeated reads inside the cache TTL are not refetched
pub async fn section(ctx: &CommandContext, section: Section) -> Result<()> {
    let api = &ctx.client;
    let payload = match section {
        Section::Category => api.predict_category().await?,
        Section::Monthly => api.predict_monthly().await?,
        Section::Anomalies => api.detect_anomalies().await?,
        Section::Tips => api.savings_tips().await?,
        Section::HealthScore => api.health_score().await?,
        Section::Dashboard => api.charts_dashboard().await?,
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&payload)?),
        OutputFormat::Pretty => {
            let body = payload.get("data").unwrap_or(&payload);
            println!("{}", serde_json::to_string_pretty(body)?);
        }
    }
    Ok(())
}

fn print_result(result: &AnalysisResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(result)?),
        OutputFormat::Pretty => {
            println!(
                "{}\n",
                format!("Financial analysis ({})", result.meta.level).bold()
            );
            println!("{}", format_report(result));
        }
    }
    Ok(())
}
