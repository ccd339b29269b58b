//! Score persistence
//!
//! The score is a single counter that survives stages and sessions. Storage is
//! advisory: the in-memory value held by [`ScoreLedger`] is authoritative for
//! the running session, and failed writes are logged and otherwise ignored.
//!
//! Stores:
//! - [`MemoryStore`]: process-local, used by tests and simulations
//! - [`FileStore`]: plain-text file under the OS data directory (via `directories`)

use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine data directory")]
    NoDataDirectory,
    #[error("score storage I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Key-value collaborator holding the raw stored score
pub trait ScoreStore {
    /// Read the stored value, `None` if nothing was stored or it is unreadable
    fn load(&self) -> Option<String>;

    /// Persist a value
    ///
    /// # Errors
    /// Returns an error if the value could not be written.
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Score kept in a plain-text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the OS-standard data directory
    ///
    /// - Linux: `$XDG_DATA_HOME/wordle_stages/score` or `~/.local/share/wordle_stages/score`
    /// - macOS: `~/Library/Application Support/wordle_stages/score`
    ///
    /// # Errors
    /// Returns `StoreError::NoDataDirectory` if no home directory can be found.
    pub fn open_default() -> Result<Self, StoreError> {
        Ok(Self::new(Self::data_dir()?.join("score")))
    }

    /// The OS-standard data directory for this game
    ///
    /// # Errors
    /// Returns `StoreError::NoDataDirectory` if no home directory can be found.
    pub fn data_dir() -> Result<PathBuf, StoreError> {
        ProjectDirs::from("", "", "wordle_stages")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(StoreError::NoDataDirectory)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// Durable score counter
///
/// Reads the stored value once on open (anything absent or non-numeric counts
/// as 0) and writes through on every change, best effort.
#[derive(Debug)]
pub struct ScoreLedger<S: ScoreStore> {
    store: S,
    score: u32,
}

impl<S: ScoreStore> ScoreLedger<S> {
    /// Open the ledger over a store
    ///
    /// # Examples
    /// ```
    /// use wordle_stages::score::{MemoryStore, ScoreLedger};
    ///
    /// let ledger = ScoreLedger::open(MemoryStore::with_value("not a number"));
    /// assert_eq!(ledger.get(), 0);
    /// ```
    pub fn open(store: S) -> Self {
        let score = store
            .load()
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .unwrap_or(0);

        Self { store, score }
    }

    /// Current score
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.score
    }

    /// Add `amount` solved boards to the score
    pub fn increment(&mut self, amount: u32) {
        if amount == 0 {
            return;
        }
        self.score = self.score.saturating_add(amount);
        self.persist();
    }

    /// Set the score back to 0
    pub fn reset(&mut self) {
        self.score = 0;
        self.persist();
    }

    /// Access the underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.score.to_string()) {
            log::warn!("score not persisted ({}): {e}", self.score);
        }
    }
}
