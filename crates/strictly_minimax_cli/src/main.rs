//! Strictly Minimax - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_minimax::{Board, Mode};
use strictly_minimax_cli::{Cli, CliConfig, Command, run_rounds, suggest};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { pvp } => {
            let mode = if pvp {
                Mode::PlayerVsPlayer
            } else {
                Mode::PlayerVsEngine
            };
            info!(?mode, "Starting game");
            let stdin = std::io::stdin();
            let tally = run_rounds(&mut stdin.lock(), &mut std::io::stdout(), mode, &config)?;
            info!(rounds = tally.rounds(), "Session finished");
            Ok(())
        }
        Command::Suggest { board, scores } => {
            let board: Board = board
                .parse()
                .with_context(|| format!("Invalid board {:?}", board))?;
            let config = config.with_show_scores(scores);
            suggest(&mut std::io::stdout(), &board, *config.show_scores())
        }
    }
}
