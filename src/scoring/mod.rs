//! Time-based scoring.
//!
//! `score = max(1000 - min(elapsed * 10, 900), 100)`, truncated to an
//! integer. Non-increasing in elapsed time, between 100 and 1000.

use serde::{Deserialize, Serialize};

/// Scoring constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Score for an instant guess.
    pub base: u32,
    /// Points lost per second.
    pub per_second: f64,
    /// Largest total penalty.
    pub max_penalty: f64,
    /// Lowest possible score.
    pub floor: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base: 1000,
            per_second: 10.0,
            max_penalty: 900.0,
            floor: 100,
        }
    }
}

impl ScoreRules {
    /// Penalty for `elapsed` seconds. Negative or NaN time counts as zero.
    #[must_use]
    pub fn penalty(&self, elapsed: f64) -> f64 {
        (elapsed.max(0.0) * self.per_second).min(self.max_penalty)
    }

    /// Score left after subtracting `penalty` from the base.
    #[must_use]
    pub fn score_from_penalty(&self, penalty: f64) -> u32 {
        let raw = f64::from(self.base) - penalty;
        raw.max(f64::from(self.floor)) as u32
    }

    /// Score for a win after `elapsed` seconds.
    #[must_use]
    pub fn score(&self, elapsed: f64) -> u32 {
        self.score_from_penalty(self.penalty(elapsed))
    }
}

/// Score with the default rules.
///
/// ```
/// assert_eq!(royale_guess::scoring::score(45.0), 550);
/// ```
#[must_use]
pub fn score(elapsed: f64) -> u32 {
    ScoreRules::default().score(elapsed)
}
