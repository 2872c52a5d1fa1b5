//! Core services: RNG, clock, configuration, errors.
//!
//! These are shared by every other module and carry no game rules of
//! their own.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GuessConfig, DEFAULT_LEADERBOARD_CAPACITY, DEFAULT_LEADERBOARD_FILE};
pub use error::{GameError, InvariantViolation, ParseError, PersistenceError};
pub use rng::GameRng;
