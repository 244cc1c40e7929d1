//! Command-line interface for strictly_guess.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Strictly Guess - guess the secret number, one command at a time
#[derive(Parser, Debug)]
#[command(name = "strictly_guess")]
#[command(about = "Number-guessing game that remembers your progress between runs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = crate::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Path to the saved game file (overrides config and environment)
    #[arg(long)]
    pub game_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new game
    Start {
        /// Player name (prompted for if omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Submit a guess for the current game
    Guess {
        /// Your guess, an integer
        #[arg(allow_hyphen_values = true)]
        guess: String,
    },

    /// Show the guesses so far and the response to the last one
    Status,
}
