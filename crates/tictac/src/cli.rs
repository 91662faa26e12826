//! Command-line interface for tictac.

use std::path::PathBuf;

use clap::Parser;
use tictac_core::StartEntryPolicy;

/// Tic-tac-toe in the terminal, with a move history you can travel through
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What "Start Again?" in the history does: reset or view
    #[arg(long)]
    pub start_entry: Option<StartEntryPolicy>,

    /// Disable the end-of-game confetti
    #[arg(long)]
    pub no_confetti: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
