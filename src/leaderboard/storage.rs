//! Leaderboard persistence backends.
//!
//! The leaderboard is a flat JSON list of records, read and written whole.
//! A file that is not a JSON list fails to load; inside the list, records
//! that fit neither schema are skipped with a warning.
//! There is no locking: two processes sharing one file may race.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use crate::core::PersistenceError;

use super::entry::{LeaderboardEntry, StoredRecord};

/// Where leaderboard records live.
pub trait RecordStore {
    /// Read every stored record. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<StoredRecord>>, PersistenceError>;

    /// Replace the stored records.
    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<(), PersistenceError>;
}

fn decode(text: &str, path: &Path) -> Result<Vec<StoredRecord>, PersistenceError> {
    let values: Vec<Value> =
        serde_json::from_str(text).map_err(|source| PersistenceError::Format {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<StoredRecord>(value) {
            Ok(record) => records.push(record),
            Err(err) => warn!(
                path = %path.display(),
                index,
                error = %err,
                "skipping unreadable leaderboard record"
            ),
        }
    }
    Ok(records)
}

fn encode(entries: &[LeaderboardEntry], path: &Path) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(entries).map_err(|source| PersistenceError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Option<Vec<StoredRecord>>, PersistenceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(&text, &self.path).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(self.io_error(err)),
        }
    }

    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<(), PersistenceError> {
        let text = encode(entries, &self.path)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        fs::write(&self.path, text).map_err(|err| self.io_error(err))
    }
}

/// In-memory store holding the same JSON text a file would.
///
/// `failing()` makes every save fail, for exercising the non-fatal path.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    json: Option<String>,
    fail_saves: bool,
    saves: usize,
}

const MEMORY_PATH: &str = "<memory>";

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with previously saved text.
    #[must_use]
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            json: Some(json.into()),
            ..Self::default()
        }
    }

    /// Every save fails with an I/O error.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Last saved text.
    #[must_use]
    pub fn json(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// Number of successful saves.
    #[must_use]
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<StoredRecord>>, PersistenceError> {
        self.json
            .as_deref()
            .map(|text| decode(text, Path::new(MEMORY_PATH)))
            .transpose()
    }

    fn save(&mut self, entries: &[LeaderboardEntry]) -> Result<(), PersistenceError> {
        if self.fail_saves {
            return Err(PersistenceError::Io {
                path: PathBuf::from(MEMORY_PATH),
                source: std::io::Error::new(ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.json = Some(encode(entries, Path::new(MEMORY_PATH))?);
        self.saves += 1;
        Ok(())
    }
}
