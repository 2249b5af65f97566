//! Best-score persistence.
//!
//! The game only ever needs one number to survive restarts. Storage is
//! best-effort: a missing or corrupt record reads as 0 and a failed write is
//! logged and otherwise ignored, so the game never stops over it.
//!
//! ```
//! use tui_2028_store::{MemoryScoreStore, ScoreStore};
//!
//! let store = MemoryScoreStore::default();
//! assert_eq!(store.load(), 0);
//! store.save(2048);
//! assert_eq!(store.load(), 2048);
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Load/save of the persisted best score.
pub trait ScoreStore {
    /// Stored best score, or 0 when absent or unreadable.
    fn load(&self) -> u64;

    /// Persist `best`. Failures are not reported to the caller.
    fn save(&self, best: u64);
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> u64 {
        (**self).load()
    }

    fn save(&self, best: u64) {
        (**self).save(best)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed score record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// On-disk record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRecord {
    pub best_score: u64,
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record, surfacing the failure reason.
    pub fn try_load(&self) -> Result<u64, StoreError> {
        let raw = fs::read_to_string(&self.path)?;
        parse_record(&raw)
    }

    /// Write the record via a sibling temp file and a rename.
    pub fn try_save(&self, best: u64) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }

        let body = serde_json::to_vec(&BestRecord { best_score: best })?;
        let tmp = self.tmp_path();
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(&body)?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u64 {
        match self.try_load() {
            Ok(best) => best,
            Err(StoreError::Io(e)) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                debug!("ignoring unreadable best score at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&self, best: u64) {
        if let Err(e) = self.try_save(best) {
            warn!("failed to save best score to {}: {}", self.path.display(), e);
        }
    }
}

/// Accepts the JSON record or a bare decimal number.
fn parse_record(raw: &str) -> Result<u64, StoreError> {
    match serde_json::from_str::<BestRecord>(raw) {
        Ok(record) => Ok(record.best_score),
        Err(e) => raw.trim().parse::<u64>().map_err(|_| StoreError::Malformed(e)),
    }
}

/// In-process store, useful for tests and for running without a disk.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    best: AtomicU64,
}

impl MemoryScoreStore {
    pub fn new(best: u64) -> Self {
        Self {
            best: AtomicU64::new(best),
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u64 {
        self.best.load(Ordering::Relaxed)
    }

    fn save(&self, best: u64) {
        self.best.store(best, Ordering::Relaxed);
    }
}
