//! Questions: (attribute, operator, value) triples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Attribute;
use crate::core::GameError;

use super::operator::Operator;

/// A yes/no question about the secret card.
///
/// `raw` is kept exactly as typed; its meaning depends on the attribute's
/// kind and is only decided when the question is evaluated.
///
/// ```
/// use royale_guess::cards::Attribute;
/// use royale_guess::query::{Operator, Query};
///
/// let q: Query = "elixir<=4".parse().unwrap();
/// assert_eq!(q, Query::new(Attribute::Elixir, Operator::Le, "4"));
/// assert_eq!(q.to_string(), "Is the secret card's elixir <= 4?");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub attribute: Attribute,
    pub operator: Operator,
    pub raw: String,
}

impl Query {
    /// Create a new query.
    #[must_use]
    pub fn new(attribute: Attribute, operator: Operator, raw: impl Into<String>) -> Self {
        Self {
            attribute,
            operator,
            raw: raw.into(),
        }
    }

    /// Build from the three picker fields of a front end.
    pub fn from_parts(attribute: &str, operator: &str, raw: &str) -> Result<Self, GameError> {
        Ok(Self::new(attribute.parse()?, operator.parse()?, raw.trim()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Is the secret card's {} {} {}?",
            self.attribute, self.operator, self.raw
        )
    }
}

impl FromStr for Query {
    type Err = GameError;

    /// Parse `<attribute> <operator> <value>`; spaces around the operator
    /// are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GameError::MalformedQuery(s.trim().to_string());

        let op_start = s.find(['=', '<', '>', ':']).ok_or_else(malformed)?;
        let rest = &s[op_start..];
        let op_len = rest
            .char_indices()
            .take_while(|(_, c)| matches!(c, '=' | '<' | '>' | ':'))
            .count();

        let attribute = s[..op_start].trim();
        let operator = &rest[..op_len];
        let raw = rest[op_len..].trim();

        if attribute.is_empty() || raw.is_empty() {
            return Err(malformed());
        }

        Self::from_parts(attribute, operator, raw)
    }
}
