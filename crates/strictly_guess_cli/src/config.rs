//! Game configuration loaded from TOML.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strictly_guess::{DEFAULT_HIGH, DEFAULT_LOW, GameRules, MAX_GUESSES};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_guess.toml";

/// Saved game location when neither config nor environment sets one.
pub const DEFAULT_GAME_FILE: &str = "guess_game.json";

/// Environment variable that overrides the saved game location.
pub const GAME_FILE_ENV: &str = "STRICTLY_GUESS_GAME_FILE";

/// Settings for new games and where the current game is kept.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuessConfig {
    /// Path of the saved game file.
    #[serde(default = "default_game_file")]
    game_file: PathBuf,

    /// Lowest possible secret.
    #[serde(default = "default_low")]
    low: i64,

    /// Highest possible secret.
    #[serde(default = "default_high")]
    high: i64,

    /// Guesses allowed before the game is lost.
    #[serde(default = "default_max_guesses")]
    max_guesses: usize,
}

fn default_game_file() -> PathBuf {
    PathBuf::from(DEFAULT_GAME_FILE)
}

fn default_low() -> i64 {
    DEFAULT_LOW
}

fn default_high() -> i64 {
    DEFAULT_HIGH
}

fn default_max_guesses() -> usize {
    MAX_GUESSES
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            game_file: default_game_file(),
            low: default_low(),
            high: default_high(),
            max_guesses: default_max_guesses(),
        }
    }
}

impl GuessConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(game_file = %config.game_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies game file overrides. A command-line path beats the
    /// environment value, which beats the file.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, flag: Option<PathBuf>, env: Option<OsString>) -> Self {
        if let Some(path) = flag {
            debug!(path = %path.display(), "Game file set on command line");
            self.game_file = path;
        } else if let Some(path) = env.filter(|p| !p.is_empty()) {
            debug!(var = GAME_FILE_ENV, "Game file set from environment");
            self.game_file = PathBuf::from(path);
        }
        self
    }

    /// Validated rules for new games.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the range is empty or `max_guesses` is zero.
    #[instrument(skip(self))]
    pub fn rules(&self) -> Result<GameRules, ConfigError> {
        GameRules::new(self.low, self.high, self.max_guesses)
            .map_err(|e| ConfigError::new(e.to_string()))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
