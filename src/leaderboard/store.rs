//! The bounded, ranked leaderboard.
//!
//! Holds at most `capacity` entries sorted by score, highest first. A win
//! is accepted when there is a free slot or it beats the lowest score
//! (ties do not displace). Accepted wins are merged per player and saved
//! immediately; a failed save is logged and returned, never fatal.
//!
//! If the store could not be read at startup the board is in-memory only
//! for the rest of the process: merges still rank, but nothing is written,
//! so the unreadable file is left as it was.

use tracing::{debug, error, info, warn};

use crate::core::{GameError, GuessConfig, PersistenceError};
use crate::scoring::ScoreRules;

use super::entry::{default_entries, LeaderboardEntry, ANONYMOUS};
use super::storage::{JsonFileStore, RecordStore};

/// Result of offering a win to the leaderboard.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The win qualified and was merged.
    pub accepted: bool,
    /// 0-based position of the player afterwards, if listed.
    pub rank: Option<usize>,
    /// The merged list was written to the store.
    pub saved: bool,
    /// Set when the merged list could not be saved.
    pub persist_error: Option<PersistenceError>,
}

/// Bounded, ranked leaderboard backed by a `RecordStore`.
#[derive(Debug)]
pub struct Leaderboard<S: RecordStore = JsonFileStore> {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
    store: S,
    load_error: Option<PersistenceError>,
}

impl Leaderboard<JsonFileStore> {
    /// Open the file-backed leaderboard described by `config`.
    pub fn open(config: &GuessConfig) -> Result<Self, GameError> {
        config.validate()?;
        Self::load(
            JsonFileStore::new(&config.leaderboard_path),
            config.leaderboard_capacity,
            config.seed_defaults,
        )
    }
}

impl<S: RecordStore> Leaderboard<S> {
    /// Load from `store`, migrating legacy records.
    ///
    /// With nothing stored, starts from the built-in entries when
    /// `seed_defaults` is set, empty otherwise. An unreadable store is
    /// treated the same way and the error kept in `load_error`.
    pub fn load(store: S, capacity: usize, seed_defaults: bool) -> Result<Self, GameError> {
        if capacity == 0 {
            return Err(GameError::Config(
                "leaderboard_capacity must be at least 1".into(),
            ));
        }

        let fallback = || if seed_defaults { default_entries() } else { Vec::new() };
        let rules = ScoreRules::default();

        let (entries, load_error) = match store.load() {
            Ok(Some(records)) => (
                records.into_iter().map(|r| r.into_entry(&rules)).collect(),
                None,
            ),
            Ok(None) => (fallback(), None),
            Err(err) => {
                warn!(error = %err, "could not load leaderboard; starting fresh");
                (fallback(), Some(err))
            }
        };

        let mut board = Self {
            entries,
            capacity,
            store,
            load_error,
        };
        board.rank_and_trim();
        debug!(entries = board.entries.len(), capacity, "leaderboard loaded");
        Ok(board)
    }

    /// Whether `score` would be accepted.
    #[must_use]
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < self.capacity || self.min_score().map_or(true, |min| score > min)
    }

    /// Offer a win. Merges into the player's entry (case-insensitive name)
    /// or adds a new one, re-ranks, trims to capacity, and saves.
    pub fn merge(&mut self, name: &str, score: u32, elapsed_seconds: f64) -> MergeOutcome {
        if !self.qualifies(score) {
            debug!(name, score, "score does not qualify for the leaderboard");
            return MergeOutcome {
                accepted: false,
                rank: None,
                saved: false,
                persist_error: None,
            };
        }

        let name = match name.trim() {
            "" => ANONYMOUS,
            trimmed => trimmed,
        };

        match self.rank_of(name) {
            Some(pos) => self.entries[pos].record_win(score, elapsed_seconds),
            None => self
                .entries
                .push(LeaderboardEntry::first_win(name, score, elapsed_seconds)),
        }
        self.rank_and_trim();

        let rank = self.rank_of(name);
        info!(name, score, elapsed_seconds, ?rank, "leaderboard updated");

        if self.load_error.is_some() {
            warn!("leaderboard could not be read at startup; not saving");
            return MergeOutcome {
                accepted: true,
                rank,
                saved: false,
                persist_error: None,
            };
        }

        let persist_error = self.store.save(&self.entries).err();
        if let Some(err) = &persist_error {
            error!(error = %err, "error saving leaderboard; keeping it in memory");
        }

        MergeOutcome {
            accepted: true,
            rank,
            saved: persist_error.is_none(),
            persist_error,
        }
    }

    /// Entries, highest score first.
    #[must_use]
    pub fn ranked(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Position of a player (case-insensitive), 0-based.
    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.is_player(name))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Error hit while loading, if the board started from the fallback.
    /// While set, merges are not saved.
    #[must_use]
    pub fn load_error(&self) -> Option<&PersistenceError> {
        self.load_error.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn min_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).min()
    }

    fn rank_and_trim(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(self.capacity);
    }
}
