//! finai - command-line client for the FinancialAI analysis API

use clap::Parser;

mod cli;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use finai::error::{Error, Result};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        if let Some(hint) = hint_for(&err) {
            eprintln!("  → {}", hint);
        }
        std::process::exit(1);
    }
}

/// Follow-up suggestion for errors the user can fix locally
fn hint_for(err: &Error) -> Option<&'static str> {
    match err.as_api()?.status_code()? {
        401 | 403 => Some("Check your token with 'finai status' or rerun 'finai init'"),
        404 => Some("Check the API URL with 'finai status'"),
        _ => None,
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp_millis().init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("finai version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
        Commands::Health => cli::health::run(&CommandContext::new(&opts)?).await,
        Commands::Quick => cli::analysis::quick(&CommandContext::new(&opts)?).await,
        Commands::Full => cli::analysis::full(&CommandContext::new(&opts)?).await,
        Commands::Section { section } => {
            cli::analysis::section(&CommandContext::new(&opts)?, section).await
        }
        Commands::Queue => cli::job::queue(&CommandContext::new(&opts)?).await,
        Commands::Job { job_id } => cli::job::show(&CommandContext::new(&opts)?, &job_id).await,
        Commands::Wait { job_id, wait } => {
            cli::job::wait(&CommandContext::new(&opts)?, &job_id, &wait).await
        }
        Commands::Analyze { wait } => {
            cli::job::analyze(&CommandContext::new(&opts)?, &wait).await
        }
        Commands::Cancel { job_id } => {
            cli::job::cancel(&CommandContext::new(&opts)?, &job_id).await
        }
    }
}
