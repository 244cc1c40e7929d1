//! Saved game file for the game in progress.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use derive_more::{Display, Error};
use strictly_guess::GuessingGame;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Corrupt game file: {}", err))
    }
}

/// JSON file holding at most one game.
///
/// Every write goes to a temporary file in the same directory which is then
/// renamed over the target, so a reader never sees a half-written game.
#[derive(Debug, Clone)]
pub struct GameStore {
    path: PathBuf,
}

impl GameStore {
    /// Creates a store backed by the file at `path`. Nothing is touched on disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        debug!("Creating GameStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the game file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if a game file is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Saves a brand new game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if a game file already exists or the write fails.
    #[instrument(skip(self, game), fields(path = %self.path.display()))]
    pub fn create(&self, game: &GuessingGame) -> Result<(), StoreError> {
        let tmp = self.write_temp(game)?;
        tmp.persist_noclobber(&self.path).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                StoreError::new(format!("Game file already exists: {}", self.path.display()))
            } else {
                StoreError::from(e.error)
            }
        })?;
        info!(player = %game.name(), "Game file created");
        Ok(())
    }

    /// Loads the saved game, or `None` if there is no game file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or does not hold a game.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<GuessingGame>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No game file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let game: GuessingGame = serde_json::from_str(&content)?;
        debug!(guess_count = game.guesses().len(), "Game loaded");
        Ok(Some(game))
    }

    /// Replaces the saved game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write or rename fails.
    #[instrument(skip(self, game), fields(path = %self.path.display()))]
    pub fn save(&self, game: &GuessingGame) -> Result<(), StoreError> {
        let tmp = self.write_temp(game)?;
        tmp.persist(&self.path).map_err(|e| StoreError::from(e.error))?;
        debug!(guess_count = game.guesses().len(), "Game saved");
        Ok(())
    }

    /// Deletes the game file. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be removed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn remove(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Game file removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_temp(&self, game: &GuessingGame) -> Result<NamedTempFile, StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, game)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        Ok(tmp)
    }
}
