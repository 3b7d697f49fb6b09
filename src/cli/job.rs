//! Job queue commands

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use serde_json::Value;

use finai::AnalysisApi;
use finai::client::AnalysisResult;
use finai::error::Result;
use finai::models::JobDisplay;
use finai::output::{format_json, format_report, format_table};

use crate::cli::{CommandContext, OutputFormat, WaitArgs};

/// Queue a deep analysis and print the job id
pub async fn queue(ctx: &CommandContext) -> Result<()> {
    let job = ctx.client.queue_analysis().await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&job)?),
        OutputFormat::Pretty => {
            println!("{} Queued job {}", "✓".green(), job.job_id.bold());
            println!("{}", format_table(&[JobDisplay::from(&job)]));
            println!("\nFollow it with: {}", format!("finai wait {}", job.job_id).cyan());
        }
    }

    Ok(())
}

/// Show the current state of one job
pub async fn show(ctx: &CommandContext, job_id: &str) -> Result<()> {
    let job = ctx.client.check_job(job_id).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&job)?),
        OutputFormat::Pretty => println!("{}", format_table(&[JobDisplay::from(&job)])),
    }

    Ok(())
}

/// Poll an existing job to completion
pub async fn wait(ctx: &CommandContext, job_id: &str, args: &WaitArgs) -> Result<()> {
    let spinner = spinner(ctx.format, format!("Waiting for job {}...", job_id));
    let outcome = ctx.client.wait_for_job(job_id, &args.options()).await;
    finish(spinner);

    print_job_result(&outcome?, ctx.format)
}

/// Queue a deep analysis and wait for its result
pub async fn analyze(ctx: &CommandContext, args: &WaitArgs) -> Result<()> {
    let spinner = spinner(ctx.format, "Running deep analysis...".to_string());
    let outcome = ctx.client.full_analysis_async(&args.options()).await;
    finish(spinner);

    print_job_result(&outcome?, ctx.format)
}

/// Cancel a job
pub async fn cancel(ctx: &CommandContext, job_id: &str) -> Result<()> {
    let response = ctx.client.cancel_job(job_id).await?;

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&response)?),
        OutputFormat::Pretty => println!("{} Cancelled job {}", "✓".green(), job_id.bold()),
    }

    Ok(())
}

/// Spinner on stderr for pretty output; JSON output stays clean
fn spinner(format: OutputFormat, message: String) -> Option<ProgressBar> {
    if format == OutputFormat::Json {
        return None;
    }

    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        bar.set_style(style);
    }
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(120));
    Some(bar)
}

fn finish(spinner: Option<ProgressBar>) {
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
}

fn print_job_result(result: &Value, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", format_json(result)?),
        OutputFormat::Pretty => {
            println!("{} Job completed\n", "✓".green());
            // Deep-analysis jobs return a full report; anything else is shown raw
            match AnalysisResult::deserialize(result) {
                Ok(report) => println!("{}", format_report(&report)),
                Err(_) => println!("{}", serde_json::to_string_pretty(result)?),
            }
        }
    }
    Ok(())
}
