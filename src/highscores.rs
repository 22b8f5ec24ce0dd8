//! High score persistence
//!
//! Stores a single best score. Failures are logged and read back as "no
//! stored value" so a broken file never stops a run.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Persistence collaborator for the best score
pub trait HighScoreStore {
    /// Stored best score, or 0 when nothing usable is stored
    fn load(&self) -> u64;
    /// Persist a new best score
    fn save(&self, score: u64);
}

/// On-disk record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreRecord {
    pub best: u64,
}

/// JSON file store (`{"best": N}`)
#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub const DEFAULT_FILE: &'static str = "highscore.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<HighScoreRecord> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        serde_json::from_str(&json).map_err(|e| Error::parse(&self.path, e))
    }

    pub fn try_save(&self, record: HighScoreRecord) -> Result<()> {
        let json = serde_json::to_string(&record)?;
        std::fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))
    }
}

impl Default for FileHighScoreStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FILE)
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&self) -> u64 {
        match self.try_load() {
            Ok(record) => {
                log::info!("Loaded high score {}", record.best);
                record.best
            }
            Err(e) if e.is_not_found() => {
                log::info!("No high score found, starting fresh");
                0
            }
            Err(e) => {
                log::warn!("{e}; ignoring stored high score");
                0
            }
        }
    }

    fn save(&self, score: u64) {
        match self.try_save(HighScoreRecord { best: score }) {
            Ok(()) => log::info!("High score {score} saved"),
            Err(e) => log::warn!("Failed to save high score: {e}"),
        }
    }
}

/// In-memory store; remembers every save
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    best: RefCell<u64>,
    saves: RefCell<Vec<u64>>,
}

impl MemoryHighScoreStore {
    pub fn new(best: u64) -> Self {
        Self {
            best: RefCell::new(best),
            saves: RefCell::new(Vec::new()),
        }
    }

    pub fn saves(&self) -> Vec<u64> {
        self.saves.borrow().clone()
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&self) -> u64 {
        *self.best.borrow()
    }

    fn save(&self, score: u64) {
        *self.best.borrow_mut() = score;
        self.saves.borrow_mut().push(score);
    }
}
