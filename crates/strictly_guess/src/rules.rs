//! Fixed parameters of a game: the secret range and the guess limit.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::GuessError;

/// Lowest secret value under the default rules.
pub const DEFAULT_LOW: i64 = 1;

/// Highest secret value under the default rules.
pub const DEFAULT_HIGH: i64 = 100;

/// Guesses allowed under the default rules before the game is lost.
pub const MAX_GUESSES: usize = 10;

/// Range and guess limit a game is played under.
///
/// Rules are stored with each game, so a saved game keeps the rules it was
/// created with. Deserialized rules go through [`GameRules::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RulesRecord")]
pub struct GameRules {
    low: i64,
    high: i64,
    max_guesses: usize,
}

impl GameRules {
    /// Creates validated rules.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidRules`] if `low > high` or `max_guesses == 0`.
    #[instrument]
    pub fn new(low: i64, high: i64, max_guesses: usize) -> Result<Self, GuessError> {
        if low > high || max_guesses == 0 {
            return Err(GuessError::InvalidRules {
                low,
                high,
                max_guesses,
            });
        }
        Ok(Self {
            low,
            high,
            max_guesses,
        })
    }

    /// Lowest possible secret.
    pub fn low(&self) -> i64 {
        self.low
    }

    /// Highest possible secret.
    pub fn high(&self) -> i64 {
        self.high
    }

    /// Number of guesses allowed.
    pub fn max_guesses(&self) -> usize {
        self.max_guesses
    }
}

/// Unvalidated shape of [`GameRules`] as it appears in a saved game.
#[derive(Deserialize)]
struct RulesRecord {
    low: i64,
    high: i64,
    max_guesses: usize,
}

impl TryFrom<RulesRecord> for GameRules {
    type Error = GuessError;

    fn try_from(record: RulesRecord) -> Result<Self, Self::Error> {
        Self::new(record.low, record.high, record.max_guesses)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            max_guesses: MAX_GUESSES,
        }
    }
}
