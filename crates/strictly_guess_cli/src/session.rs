//! The three game commands: start, guess and status.
//!
//! Each command loads the saved game, performs one operation, and writes the
//! result back (or removes the file once the game is over). Player-facing
//! text goes to the supplied writer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use derive_more::{Display, Error};
use rand::Rng;
use strictly_guess::{GameRules, GuessError, GuessingGame, Outcome};
use tracing::{debug, info, instrument, warn};

use crate::{GameStore, StoreError};

/// Errors reported to the player by the game commands.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// `start` was run while a game file exists.
    #[display(
        "There is already a game file.  Use the status command to see details of the current game."
    )]
    GameExists {
        /// Location of the existing game file.
        path: PathBuf,
    },

    /// `guess` or `status` was run with no game file.
    #[display("No game in progress. Use the start command to begin a new game.")]
    NoGame {
        /// Location that was checked.
        path: PathBuf,
    },

    /// The player gave a blank name.
    #[display("A name is required to start a game.")]
    EmptyName,

    /// The saved game was already won or lost.
    #[display("That game is already over. Use the start command to begin a new game.")]
    AlreadyFinished,

    /// The game rejected the guess.
    #[display("{_0}")]
    Guess(GuessError),

    /// The game file could not be read or written.
    #[display("{_0}")]
    Store(StoreError),

    /// Reading the player's input or writing output failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),
}

impl From<GuessError> for SessionError {
    fn from(err: GuessError) -> Self {
        Self::Guess(err)
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Starts a new game and saves it.
///
/// When `name` is `None` the player is asked for it on `out` and the answer
/// is read from `input`.
///
/// # Errors
///
/// Returns [`SessionError::GameExists`] if a game is already saved and
/// [`SessionError::EmptyName`] if the name is blank.
#[instrument(skip(store, input, rng, out), fields(path = %store.path().display()))]
pub fn start<I, R, W>(
    store: &GameStore,
    rules: GameRules,
    name: Option<&str>,
    input: &mut I,
    rng: &mut R,
    out: &mut W,
) -> Result<(), SessionError>
where
    I: BufRead,
    R: Rng,
    W: Write,
{
    if store.exists() {
        warn!("Refusing to overwrite existing game");
        return Err(SessionError::GameExists {
            path: store.path().to_path_buf(),
        });
    }

    let name = match name {
        Some(name) => name.trim().to_string(),
        None => {
            write!(out, "Hello, what is your name?  ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            line.trim().to_string()
        }
    };
    if name.is_empty() {
        return Err(SessionError::EmptyName);
    }

    let game = GuessingGame::create_with(name, rules, rng);
    store.create(&game)?;
    info!(player = %game.name(), "Game started");

    writeln!(out, "{}", game.message(Outcome::Start))?;
    writeln!(out, "Type 'guess' followed by your guess at the prompt.")?;
    Ok(())
}

/// Submits one guess against the saved game.
///
/// The game file is removed once the game is won or lost, and saved
/// otherwise. An invalid guess prints the game's invalid-guess message and
/// leaves the file untouched.
///
/// # Errors
///
/// Returns [`SessionError::NoGame`] without a saved game,
/// [`SessionError::AlreadyFinished`] if the saved game is over, and
/// [`SessionError::Guess`] if `raw` is not an integer.
#[instrument(skip(store, out), fields(path = %store.path().display()))]
pub fn guess<W: Write>(store: &GameStore, raw: &str, out: &mut W) -> Result<Outcome, SessionError> {
    let mut game = load_existing(store)?;

    if game.done() {
        warn!("Saved game is already over, discarding it");
        store.remove()?;
        return Err(SessionError::AlreadyFinished);
    }

    let outcome = match game.check_guess(raw) {
        Ok(outcome) => outcome,
        Err(e) => {
            writeln!(out, "{}", game.message(Outcome::Invalid))?;
            return Err(e.into());
        }
    };
    writeln!(out, "{}", game.message(outcome))?;
    if game.lost() {
        writeln!(out, "{}", game.message(Outcome::Lost))?;
    }

    if game.done() {
        info!(won = outcome.is_win(), guesses = game.guesses().len(), "Game over");
        store.remove()?;
    } else {
        store.save(&game)?;
    }
    Ok(outcome)
}

/// Reports the guesses so far and the response to the last one.
///
/// # Errors
///
/// Returns [`SessionError::NoGame`] without a saved game.
#[instrument(skip(store, out), fields(path = %store.path().display()))]
pub fn status<W: Write>(store: &GameStore, out: &mut W) -> Result<(), SessionError> {
    let game = load_existing(store)?;

    if game.guesses().is_empty() {
        writeln!(out, "No guesses yet, use 'guess <integer>' to make a guess")?;
        return Ok(());
    }

    writeln!(out, "guesses so far:")?;
    for guess in game.guesses() {
        writeln!(out, "  {guess}")?;
    }
    writeln!(out, "my response to your last guess:")?;
    writeln!(out, "  {}", game.message(game.current_outcome()))?;
    if game.lost() {
        writeln!(out, "  {}", game.message(Outcome::Lost))?;
    } else if !game.done() {
        writeln!(out, "guesses remaining: {}", game.remaining_guesses())?;
    }
    Ok(())
}

fn load_existing(store: &GameStore) -> Result<GuessingGame, SessionError> {
    match store.load()? {
        Some(game) => Ok(game),
        None => {
            debug!("No saved game");
            Err(SessionError::NoGame {
                path: store.path().to_path_buf(),
            })
        }
    }
}
