//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, theme::ColorfulTheme};

use finai::config::{ClientConfig, Config};
use finai::{AnalysisApi, AnalysisClient};
use finai::error::{ConfigError, Error, Result};

use crate::cli::args::GlobalOptions;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Run the init command
///
/// Existing preferences are kept; only the URL and token are replaced.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to finai!".bold().green());
    println!("Let's connect to your FinancialAI API.\n");

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => Config::default(),
        Err(err) => return Err(err),
    };

    let theme = ColorfulTheme::default();

    let default_url = opts
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_url: String = Input::with_theme(&theme)
        .with_prompt("API URL")
        .default(default_url)
        .interact_text()?;

    let token: String = Password::with_theme(&theme)
        .with_prompt("API token")
        .interact()?;

    // Validate before anything is written
    let client_config = ClientConfig::new(&api_url, &token)?;

    let check = Confirm::with_theme(&theme)
        .with_prompt("Check the connection now?")
        .default(true)
        .interact()?;

    if check {
        println!("\n{}", "Contacting API...".cyan());
        match AnalysisClient::new(client_config)?.health().await {
            Ok(health) if health.is_ok() => {
                println!("{}", "✓ API reachable".green());
            }
            Ok(health) => {
                println!("{} API answered with status '{}'", "⚠".yellow(), health.status);
            }
            Err(err) => {
                println!("{} Could not reach API: {}", "⚠".yellow(), err);
                println!("  → Saving anyway; check the URL with 'finai health'");
            }
        }
    }

    config.api_url = Some(api_url);
    config.token = Some(token);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Check API health", "finai health".cyan());
    println!("  {} - Run a quick analysis", "finai quick".cyan());

    Ok(())
}
