//! Leaderboard records and the on-disk schemas.
//!
//! Two record shapes may appear in a leaderboard file:
//!
//! - current: `{name, score, games, win_rate, best_time}`
//! - legacy:  `{name, time}`, from before scores existed
//!
//! Legacy records are converted on load and never written back.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreRules;

/// Name recorded when the player leaves it blank.
pub const ANONYMOUS: &str = "Anonymous";

/// Per-player aggregate.
///
/// Only `score` is required on disk; other missing fields take defaults
/// and `normalized` brings them back into range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Identity key, compared case-insensitively.
    #[serde(default = "anonymous")]
    pub name: String,
    /// Best score.
    pub score: u32,
    /// Recorded wins, at least 1.
    #[serde(default)]
    pub games: u32,
    /// 0-100, informational.
    #[serde(default)]
    pub win_rate: u8,
    /// Fastest win in seconds. 0 means no time was recorded.
    #[serde(default)]
    pub best_time: f64,
}

impl LeaderboardEntry {
    /// Entry for a player's first recorded win.
    #[must_use]
    pub fn first_win(name: impl Into<String>, score: u32, elapsed_seconds: f64) -> Self {
        Self {
            name: name.into(),
            score,
            games: 1,
            win_rate: 100,
            best_time: elapsed_seconds,
        }
    }

    /// Same player, ignoring case.
    #[must_use]
    pub fn is_player(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Fold another win into this entry.
    ///
    /// Keeps the better score and time; the win rate creeps up by one point.
    pub fn record_win(&mut self, score: u32, elapsed_seconds: f64) {
        self.games = self.games.saturating_add(1);
        self.score = self.score.max(score);
        if self.best_time <= 0.0 || elapsed_seconds < self.best_time {
            self.best_time = elapsed_seconds;
        }
        self.win_rate = self.win_rate.saturating_add(1).min(100);
    }

    /// Clamp loaded values into range: at least one game, a win rate of at
    /// most 100, and a finite, non-negative best time.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.games = self.games.max(1);
        self.win_rate = self.win_rate.min(100);
        if !self.best_time.is_finite() || self.best_time < 0.0 {
            self.best_time = 0.0;
        }
        self
    }
}

/// Record shape written before scores existed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegacyRecord {
    #[serde(default = "anonymous")]
    pub name: String,
    /// Winning time in seconds.
    pub time: f64,
}

impl LegacyRecord {
    /// Convert to a current entry, scoring the time as a single win.
    #[must_use]
    pub fn migrate(self, rules: &ScoreRules) -> LeaderboardEntry {
        let score = rules.score_from_penalty(rules.penalty(self.time).trunc());
        LeaderboardEntry::first_win(self.name, score, self.time)
    }
}

fn anonymous() -> String {
    ANONYMOUS.to_string()
}

/// Any record found in a leaderboard file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredRecord {
    Current(LeaderboardEntry),
    Legacy(LegacyRecord),
}

impl StoredRecord {
    /// Normalise to the current schema.
    #[must_use]
    pub fn into_entry(self, rules: &ScoreRules) -> LeaderboardEntry {
        match self {
            StoredRecord::Current(entry) => entry.normalized(),
            StoredRecord::Legacy(legacy) => legacy.migrate(rules),
        }
    }
}

/// Leaderboard shown before anyone has played.
#[must_use]
pub fn default_entries() -> Vec<LeaderboardEntry> {
    let seed = |name: &str, score, games, win_rate, best_time| LeaderboardEntry {
        name: name.to_string(),
        score,
        games,
        win_rate,
        best_time,
    };
    vec![
        seed("ClashMaster", 2450, 87, 94, 15.2),
        seed("RoyalePro", 2380, 76, 91, 18.7),
        seed("CardWizard", 2250, 102, 88, 22.1),
        seed("ElixirKing", 2190, 65, 87, 25.3),
        seed("TowerTaker", 2050, 93, 85, 28.9),
    ]
}
