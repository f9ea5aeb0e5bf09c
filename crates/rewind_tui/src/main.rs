//! Rewind - tic-tac-toe with time travel, in the terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::TuiConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)?.with_overrides(cli.log_file.clone(), cli.descending);

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            initialize_file_tracing(&config)?;
            debug!(?config, "Configuration resolved");
            terminal::run(config.sort_order())
        }
        Command::Replay { intents, json } => {
            initialize_stderr_tracing();
            let output = replay::run(&intents, config.sort_order(), json)?;
            println!("{}", output.trim_end());
            Ok(())
        }
    }
}

/// Logs to a file so output does not interfere with the TUI.
fn initialize_file_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

/// Replay output goes to stdout, so logs go to stderr and stay quiet by default.
fn initialize_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
