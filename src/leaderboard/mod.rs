//! Leaderboard: ranked player records with file persistence.
//!
//! ## Key Types
//!
//! - `LeaderboardEntry`: per-player aggregate (best score, games, best time)
//! - `StoredRecord`: current or legacy on-disk record
//! - `RecordStore`: persistence seam (`JsonFileStore`, `MemoryStore`)
//! - `Leaderboard`: bounded, ranked collection with merge semantics

pub mod entry;
pub mod storage;
pub mod store;

pub use entry::{default_entries, LeaderboardEntry, LegacyRecord, StoredRecord, ANONYMOUS};
pub use storage::{JsonFileStore, MemoryStore, RecordStore};
pub use store::{Leaderboard, MergeOutcome};
