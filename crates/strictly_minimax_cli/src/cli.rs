//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - a tic-tac-toe opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against an alpha-beta minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_minimax.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactive rounds in the terminal
    Play {
        /// Two humans share the keyboard instead of playing the engine
        #[arg(long)]
        pvp: bool,
    },

    /// Show the engine's move for a board
    Suggest {
        /// Board as nine squares in row-major order, e.g. "XX./.O./..."
        #[arg(short, long)]
        board: String,

        /// Print every candidate move's score and search counters
        #[arg(long)]
        scores: bool,
    },
}
