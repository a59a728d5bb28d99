//! CLI command implementations for Fun Finance.

pub(crate) mod board;
pub(crate) mod play;
pub(crate) mod run;

mod output;

use clap::ValueEnum;
use fun_finance::GameConfig;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Output format for the `run` and `board` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// One JSON object per response.
    Json,
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}

/// Build the game config from command-line values.
pub(crate) fn game_config(seed: Option<u64>, player1: String, player2: String) -> GameConfig {
    GameConfig {
        player_names: [player1, player2],
        seed,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Send diagnostics to stderr, filtered by `RUST_LOG` (default `warn`).
pub(crate) fn init_logging() {
    // Don't fail if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Send diagnostics to a file so they don't draw over the TUI.
pub(crate) fn init_file_logging(path: &Path) -> Result<(), CliError> {
    let file = std::fs::File::create(path).map_err(|e| {
        CliError::new(format!("Failed to create log file {}: {e}", path.display()))
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
