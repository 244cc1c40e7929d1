//! Strictly Guess CLI library - orchestration around the guessing game
//!
//! The binary is a thin wrapper over this crate so the commands can be
//! driven from tests with an in-memory writer and a scratch game file.
//!
//! # Architecture
//!
//! - **Config**: TOML settings plus environment overrides
//! - **Store**: JSON game file, replaced atomically on every save
//! - **Session**: the `start`, `guess` and `status` commands

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod session;
mod store;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DEFAULT_GAME_FILE, GAME_FILE_ENV, GuessConfig};

// Crate-level exports - Persistence
pub use store::{GameStore, StoreError};

// Crate-level exports - Commands
pub use session::{SessionError, guess, start, status};
