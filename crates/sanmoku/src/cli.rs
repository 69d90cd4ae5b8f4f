//! Command-line interface for sanmoku.

use crate::config::{ConfigError, SessionConfig};
use crate::messages::Language;
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Sanmoku - two-player tic-tac-toe on the console
#[derive(Parser, Debug)]
#[command(name = "sanmoku")]
#[command(about = "Two-player sanmoku-narabe (tic-tac-toe) in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep previous output instead of clearing the terminal each turn
    #[arg(long)]
    pub no_clear: bool,

    /// Message language (en, ja)
    #[arg(long)]
    pub lang: Option<Language>,
}

impl Cli {
    /// Resolves the session config: file (or defaults), then flags.
    #[instrument(skip(self))]
    pub fn session_config(&self) -> Result<SessionConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => SessionConfig::from_file(path)?,
            None => SessionConfig::default(),
        };
        Ok(base.with_overrides(self.no_clear, self.lang))
    }
}
