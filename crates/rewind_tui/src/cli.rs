//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Log file for the terminal UI (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List history newest first
    #[arg(long)]
    pub descending: bool,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Tui,

    /// Apply a script of intents and print the resulting game
    Replay {
        /// Intents: a cell 0-8 plays it, j<N> jumps to move N, s toggles sort, r resets
        intents: Vec<String>,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
