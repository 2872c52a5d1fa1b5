//! Game configuration.
//!
//! Front ends build a `GuessConfig` at startup (or load one from JSON) and
//! hand it to the services that need it. Nothing reads process-wide state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{GameError, PersistenceError};

/// Default number of leaderboard slots.
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 10;

/// Default leaderboard file, relative to the working directory.
pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.json";

/// Complete configuration for a guessing-game process.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessConfig {
    /// Maximum leaderboard entries (N). Must be at least 1.
    pub leaderboard_capacity: usize,

    /// Where the leaderboard is persisted.
    pub leaderboard_path: PathBuf,

    /// Start from the built-in leaderboard when no file exists.
    pub seed_defaults: bool,

    /// Fixed RNG seed. `None` draws one from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            seed_defaults: true,
            rng_seed: None,
        }
    }
}

impl GuessConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leaderboard capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    /// Set the leaderboard file.
    #[must_use]
    pub fn with_leaderboard_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.leaderboard_path = path.into();
        self
    }

    /// Start new leaderboards empty instead of from the built-in seed.
    #[must_use]
    pub fn without_seed_defaults(mut self) -> Self {
        self.seed_defaults = false;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Check the values are usable.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.leaderboard_capacity == 0 {
            return Err(GameError::Config(
                "leaderboard_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing keys take their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&text).map_err(|source| PersistenceError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}
