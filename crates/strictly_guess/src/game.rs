//! The guessing game entity.

use std::cmp::Ordering;
use std::num::IntErrorKind;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{GameRules, GuessError, Outcome};

/// A single player's game: name, hidden secret, guess history and the
/// response to the latest guess.
///
/// The game does not refuse guesses once [`done`](Self::done) is true.
/// Callers that persist the game are expected to discard it at that point.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessingGame {
    name: String,
    secret: i64,
    guesses: Vec<String>,
    current_outcome: Outcome,
    rules: GameRules,
}

impl GuessingGame {
    /// Creates a game under the default rules with a secret from the thread RNG.
    #[instrument(skip(name))]
    pub fn create(name: impl Into<String>) -> Self {
        Self::create_with(name, GameRules::default(), &mut rand::rng())
    }

    /// Creates a game under `rules`, drawing the secret uniformly from the
    /// rules' range using `rng`.
    #[instrument(skip(name, rng))]
    pub fn create_with<R: Rng>(
        name: impl Into<String>,
        rules: GameRules,
        rng: &mut R,
    ) -> Self {
        let secret = rng.random_range(rules.low()..=rules.high());
        Self::with_secret(name, rules, secret)
    }

    /// Creates a game with a known secret.
    pub fn with_secret(name: impl Into<String>, rules: GameRules, secret: i64) -> Self {
        let name = name.into();
        debug!(name = %name, max_guesses = rules.max_guesses(), "New game");
        Self {
            name,
            secret,
            guesses: Vec::new(),
            current_outcome: Outcome::Start,
            rules,
        }
    }

    /// Records a guess and returns how it compares to the secret.
    ///
    /// The raw token is stored exactly as given; surrounding whitespace is
    /// ignored only for parsing. Integers beyond the `i64` range are still
    /// integers and compare as too high or too low.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidInput`] if `raw` is not an integer. The
    /// game is left unchanged in that case.
    #[instrument(skip(self), fields(guess_count = self.guesses.len()))]
    pub fn check_guess(&mut self, raw: &str) -> Result<Outcome, GuessError> {
        let outcome = match raw.trim().parse::<i64>() {
            Ok(value) => match value.cmp(&self.secret) {
                Ordering::Less => Outcome::TooLow,
                Ordering::Greater => Outcome::TooHigh,
                Ordering::Equal => Outcome::Correct,
            },
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Outcome::TooHigh,
                IntErrorKind::NegOverflow => Outcome::TooLow,
                _ => {
                    debug!("Rejected non-integer guess");
                    return Err(GuessError::InvalidInput {
                        raw: raw.to_string(),
                    });
                }
            },
        };

        self.guesses.push(raw.to_string());
        self.current_outcome = outcome;

        debug!(
            guess_count = self.guesses.len(),
            outcome = %self.current_outcome,
            "Guess recorded"
        );
        Ok(self.current_outcome)
    }

    /// Renders the fixed player-facing template for `outcome`.
    ///
    /// Only the player's name and the game's rules are interpolated, so an
    /// outcome always renders the same text for a given game.
    pub fn message(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Start => format!(
                "Hello, {}. I'm thinking of a number from {} to {}. You have {} guesses.",
                self.name,
                self.rules.low(),
                self.rules.high(),
                self.rules.max_guesses()
            ),
            Outcome::TooHigh => "Your guess is too high.".to_string(),
            Outcome::TooLow => "Your guess is too low.".to_string(),
            Outcome::Correct => format!("Congratulations, {}! You guessed it.", self.name),
            Outcome::Lost => format!(
                "Sorry, {}, you are out of guesses. Better luck next time!",
                self.name
            ),
            Outcome::Invalid => "That is not a valid guess. Please enter an integer.".to_string(),
        }
    }

    /// True once the secret has been guessed or the guess limit reached.
    pub fn done(&self) -> bool {
        self.current_outcome.is_win() || self.guesses.len() >= self.rules.max_guesses()
    }

    /// True when the guess limit was reached without a correct guess.
    pub fn lost(&self) -> bool {
        self.guesses.len() >= self.rules.max_guesses() && !self.current_outcome.is_win()
    }

    /// The player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw guesses in the order they were made.
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    /// Outcome of the latest guess, or [`Outcome::Start`].
    pub fn current_outcome(&self) -> Outcome {
        self.current_outcome
    }

    /// Rules this game was created under.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Guesses left before the game is lost.
    pub fn remaining_guesses(&self) -> usize {
        self.rules.max_guesses().saturating_sub(self.guesses.len())
    }
}

// Hand-written so the secret never ends up in logs.
impl std::fmt::Debug for GuessingGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuessingGame")
            .field("name", &self.name)
            .field("secret", &"<hidden>")
            .field("guesses", &self.guesses)
            .field("current_outcome", &self.current_outcome)
            .field("rules", &self.rules)
            .finish()
    }
}
