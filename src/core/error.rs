//! Error types.
//!
//! - `ParseError`: a comparison value could not be read as the attribute's type.
//!   Recovered locally: the predicate counts as "no match".
//! - `PersistenceError`: leaderboard file could not be read or written.
//!   Reported, never fatal to the running game.
//! - `InvariantViolation`: the candidate set broke one of its guarantees.
//!   A logic bug, caught by debug-build checks and by tests.
//! - `GameError`: everything a front end can get back from an operation.

use std::path::PathBuf;

use thiserror::Error;

/// A raw comparison value that does not parse as an integer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("cannot compare with '{raw}': expected an integer")]
pub struct ParseError {
    /// Value the player typed.
    pub raw: String,
}

/// Leaderboard load/save failure.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("leaderboard I/O failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("leaderboard file {} is malformed: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Broken candidate-set guarantee.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("secret card is no longer among the candidates")]
    SecretEliminated,

    #[error("candidate count grew from {before} to {after}")]
    CandidatesGrew { before: usize, after: usize },

    #[error("candidate set contains a duplicate entry")]
    DuplicateCandidate,
}

/// Errors returned by the game operations.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown attribute '{0}'")]
    UnknownAttribute(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("malformed question '{0}': expected <attribute> <operator> <value>")]
    MalformedQuery(String),

    #[error("invalid card catalog: {0}")]
    InvalidCatalog(String),

    #[error("no card named '{0}' in the catalog")]
    UnknownCard(String),

    #[error("the secret card has already been found; start a new game")]
    SessionSolved,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message() {
        let err = ParseError { raw: "lots".into() };
        assert_eq!(err.to_string(), "cannot compare with 'lots': expected an integer");
    }

    #[test]
    fn test_persistence_converts_into_game_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: GameError = PersistenceError::Io {
            path: "board.json".into(),
            source: io,
        }
        .into();

        assert!(matches!(err, GameError::Persistence(PersistenceError::Io { .. })));
        assert!(err.to_string().contains("board.json"));
    }
}
