//! Comparison operators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Operator of a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `=` or `==`: equality.
    Eq,
    /// `:`: substring ("contains").
    Contains,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Operator {
    /// Operators offered in the question picker.
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Contains,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// Canonical symbol.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Contains => ":",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// True for `<`, `<=`, `>`, `>=`.
    ///
    /// Text attributes answer "no" to these; a stricter front end can
    /// refuse them up front instead.
    #[must_use]
    pub const fn is_ordering(self) -> bool {
        matches!(self, Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "=" | "==" => Ok(Operator::Eq),
            ":" => Ok(Operator::Contains),
            "<" => Ok(Operator::Lt),
            "<=" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" => Ok(Operator::Ge),
            other => Err(GameError::UnknownOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_symbols() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        assert_eq!("==".parse::<Operator>().unwrap(), Operator::Eq);
        assert!(matches!("!=".parse::<Operator>(), Err(GameError::UnknownOperator(_))));
    }

    #[test]
    fn test_is_ordering() {
        assert!(Operator::Le.is_ordering());
        assert!(!Operator::Eq.is_ordering());
        assert!(!Operator::Contains.is_ordering());
    }
}
