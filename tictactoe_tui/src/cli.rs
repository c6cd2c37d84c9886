//! Command-line interface for the terminal host.

use clap::Parser;
use std::path::PathBuf;

/// Play the in-world tic-tac-toe screen in a terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Tic-tac-toe against a random opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Screen configuration (TOML). Defaults to the stock layout.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the board)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
