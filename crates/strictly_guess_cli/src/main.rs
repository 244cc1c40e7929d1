//! Strictly Guess - command-line entry point
//!
//! Each invocation runs one command against the saved game and exits.

#![warn(missing_docs)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use strictly_guess_cli::{Cli, Command, GAME_FILE_ENV, GameStore, GuessConfig, SessionError};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GuessConfig::load(&cli.config)?
        .with_overrides(cli.game_file, std::env::var_os(GAME_FILE_ENV));
    debug!(?config, "Configuration resolved");

    match run(cli.command, &config)? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            info!(error = %e, "Command refused");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Runs one command. The outer error is a setup failure; the inner one is
/// reported to the player.
#[instrument(skip(config))]
fn run(command: Command, config: &GuessConfig) -> Result<Result<(), SessionError>> {
    let store = GameStore::new(config.game_file());
    let mut stdout = std::io::stdout().lock();

    let result = match command {
        Command::Start { name } => {
            let rules = config.rules()?;
            let mut stdin = std::io::stdin().lock();
            strictly_guess_cli::start(
                &store,
                rules,
                name.as_deref(),
                &mut stdin,
                &mut rand::rng(),
                &mut stdout,
            )
        }
        Command::Guess { guess } => {
            strictly_guess_cli::guess(&store, &guess, &mut stdout).map(|_| ())
        }
        Command::Status => strictly_guess_cli::status(&store, &mut stdout),
    };
    Ok(result)
}

/// Logs go to stderr and default to warnings only, keeping game output clean.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
