//! Sanmoku - console entry point.

use anyhow::{Context, Result};
use clap::Parser;
use sanmoku::{Cli, ConsoleChannel, GameController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // stdout belongs to the game; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli
        .session_config()
        .context("Failed to load session config")?;
    info!(?config, "Starting sanmoku");

    let channel = ConsoleChannel::stdio(*config.clear_screen());
    let outcome = GameController::new(channel, *config.language())
        .run()
        .context("Game session ended before a result")?;

    info!(%outcome, "Game over");
    Ok(())
}
