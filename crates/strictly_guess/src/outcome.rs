//! Classification of a guess relative to the secret.

use serde::{Deserialize, Serialize};

/// The response to the most recent guess, or the state before any guess.
///
/// `Lost` and `Invalid` are never stored as a game's current outcome; they
/// exist so every message the game can produce has a variant to render it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// No guess has been made yet.
    #[default]
    Start,
    /// The guess was above the secret.
    TooHigh,
    /// The guess was below the secret.
    TooLow,
    /// The guess matched the secret.
    Correct,
    /// All guesses were used without a match.
    Lost,
    /// The guess was not an integer.
    Invalid,
}

impl Outcome {
    /// Returns true for the outcome that wins the game.
    pub fn is_win(self) -> bool {
        matches!(self, Self::Correct)
    }
}
