//! Status command implementation

use colored::Colorize;

use finai::config::Config;
use finai::error::Result;

use crate::cli::args::GlobalOptions;

/// Show which settings are configured and where they come from
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "finai Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            println!();

            match (&opts.api_url, &config.api_url) {
                (Some(url), _) => println!("{} API URL: {} {}", "✓".green(), url, "(override)".dimmed()),
                (None, Some(url)) => println!("{} API URL: {}", "✓".green(), url),
                (None, None) => {
                    println!("{} API URL not configured", "✗".red());
                    println!("  → Run 'finai init' to configure");
                }
            }

            if opts.token.is_some() {
                println!("{} API token configured {}", "✓".green(), "(override)".dimmed());
            } else if config.token.is_some() {
                println!("{} API token configured", "✓".green());
            } else {
                println!("{} API token not configured", "✗".red());
                println!("  → Run 'finai init' to configure");
            }

            let prefs = &config.preferences;
            let timeout_ms = opts.timeout_ms.unwrap_or(prefs.timeout_ms);
            println!("{} Request timeout: {}ms", "○".dimmed(), timeout_ms);
            println!("{} Cache TTL: {}ms", "○".dimmed(), prefs.cache_ttl_ms);
            println!("{} Cache capacity: {}", "○".dimmed(), prefs.cache_capacity);
            println!();
        }
        Err(_) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "finai init".cyan()
            );
            println!();
        }
    }

    Ok(())
}
