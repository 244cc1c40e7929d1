//! Strictly Guess - number-guessing game logic
//!
//! A single [`GuessingGame`] tracks the player's name, the hidden secret, the
//! raw guesses submitted so far, and the outcome of the most recent one. It
//! performs no I/O; saving the game between runs is the caller's business.
//!
//! # Example
//!
//! ```
//! use strictly_guess::{GameRules, GuessingGame, Outcome};
//!
//! let mut game = GuessingGame::with_secret("Ada", GameRules::default(), 42);
//! assert_eq!(game.check_guess("10").unwrap(), Outcome::TooLow);
//! assert_eq!(game.check_guess("42").unwrap(), Outcome::Correct);
//! assert!(game.done());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod error;
mod game;
mod outcome;
mod rules;

// Crate-level exports
pub use error::GuessError;
pub use game::GuessingGame;
pub use outcome::Outcome;
pub use rules::{DEFAULT_HIGH, DEFAULT_LOW, GameRules, MAX_GUESSES};
