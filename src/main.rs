use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use claimbot_cli::config::BotConfig;
use claimbot_cli::schedule;
use claimbot_cli::workflow::Workflow;

/// Claimbot - unattended weekly free-item claims
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a single claim run and exit
    Run,

    /// Run the weekly scheduler until interrupted
    Schedule,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    info!("Starting claimbot v{}", env!("CARGO_PKG_VERSION"));

    let config = BotConfig::load(&cli.config).context("failed to resolve configuration")?;

    match cli.command {
        Commands::Run => {
            match Workflow::new(config).run().await {
                Ok(report) => {
                    info!(run_id = %report.run_id, elapsed = ?report.elapsed, "run completed successfully");
                    Ok(())
                }
                Err(err) => {
                    error!(%err, "run failed");
                    std::process::exit(1);
                }
            }
        }
        Commands::Schedule => {
            tokio::select! {
                _ = schedule::run_forever(config) => {}
                _ = tokio::signal::ctrl_c() => {
                    info!("interrupt received, shutting down");
                }
            }
            Ok(())
        }
    }
}

fn init_logging(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
