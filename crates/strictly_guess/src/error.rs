//! Error types for the guessing game.

use derive_more::{Display, Error};

/// Errors raised by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GuessError {
    /// The guess token does not parse as an integer. Nothing was recorded.
    ///
    /// Player-facing text for this case is the game's
    /// [`Outcome::Invalid`](crate::Outcome::Invalid) message.
    #[display("{raw:?} is not an integer")]
    InvalidInput {
        /// The token as the player typed it.
        raw: String,
    },

    /// The secret range is empty or the guess limit is zero.
    #[display("Invalid game rules: range {low}..={high} with {max_guesses} guesses")]
    InvalidRules {
        /// Lower bound of the secret range.
        low: i64,
        /// Upper bound of the secret range.
        high: i64,
        /// Number of guesses allowed.
        max_guesses: usize,
    },
}
