//! Game sessions and hints.
//!
//! ## Key Types
//!
//! - `GameSession`: secret, candidate set, timing; answers questions and guesses
//! - `QueryOutcome` / `GuessOutcome`: what a front end shows after each move
//! - `Hint`: a revealed fact chosen to narrow the field

pub mod hint;
pub mod state;

pub use hint::{advise, Hint};
pub use state::{
    Closeness, Eliminated, GameSession, GuessOutcome, QueryOutcome, SessionPhase, SessionStatus,
};
