//! Fun Finance CLI - play the board game in a terminal or over stdin.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Fun Finance - a two-player money board game
#[derive(Parser, Debug)]
#[command(name = "fun-finance")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Random seed for dice and chance cards (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Name of the first player
        #[arg(long, default_value = "Player 1")]
        player1: String,

        /// Name of the second player
        #[arg(long, default_value = "Player 2")]
        player2: String,

        /// Write diagnostics to this file
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },

    /// Read commands from stdin, one per line, and print the responses
    Run {
        /// Random seed for dice and chance cards (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Name of the first player
        #[arg(long, default_value = "Player 1")]
        player1: String,

        /// Name of the second player
        #[arg(long, default_value = "Player 2")]
        player2: String,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Skip the opening status
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the board
    Board {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            seed,
            player1,
            player2,
            log_file,
        } => cli::play::execute(&cli::game_config(seed, player1, player2), log_file.as_deref()),

        Commands::Run {
            seed,
            player1,
            player2,
            format,
            quiet,
        } => {
            cli::init_logging();
            cli::run::execute(&cli::game_config(seed, player1, player2), format, quiet)
        }

        Commands::Board { format } => cli::board::execute(format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
