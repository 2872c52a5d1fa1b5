//! # royale-guess
//!
//! Game-state and scoring engine for a "20 questions" card guessing game.
//! A secret card is drawn from a fixed catalog; the player narrows the
//! candidates with attribute questions (`elixir <= 4`, `rarity = epic`),
//! then guesses. Faster wins score higher and go on a bounded leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Static attribute typing**: Each attribute's comparison type is fixed
//!    in the catalog definition. Comparisons never inspect values to guess.
//!
//! 2. **Arena + index**: The catalog is immutable and shared; sessions keep
//!    `CardId`s into it, never card copies.
//!
//! 3. **Explicit services**: Sessions and leaderboards are constructed and
//!    passed to front ends. No process-wide singletons.
//!
//! ## Modules
//!
//! - `core`: RNG, clock, configuration, errors
//! - `cards`: Card definitions, attributes, the catalog
//! - `query`: Operators, questions, the comparison engine
//! - `session`: Game sessions and hints
//! - `scoring`: Time-based score
//! - `leaderboard`: Ranked records and persistence

pub mod cards;
pub mod core;
pub mod leaderboard;
pub mod query;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameError, GameRng, GuessConfig, InvariantViolation, ManualClock, ParseError,
    PersistenceError, SystemClock,
};

pub use crate::cards::{Attribute, AttributeKind, AttributeValue, Card, CardCatalog, CardId};

pub use crate::query::{evaluate, Operator, Query};

pub use crate::session::{GameSession, GuessOutcome, Hint, QueryOutcome, SessionPhase, SessionStatus};

pub use crate::scoring::{score, ScoreRules};

pub use crate::leaderboard::{Leaderboard, LeaderboardEntry, MergeOutcome, RecordStore};
