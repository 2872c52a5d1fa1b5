//! Comparison engine.
//!
//! Evaluates `value <op> raw` where `value` is a card attribute and `raw`
//! is what the player typed. The branch taken depends only on the
//! attribute's static kind:
//!
//! | Kind | `=`/`==` | `:` | `<` `<=` `>` `>=` |
//! |------|----------|-----|-------------------|
//! | Int  | numeric equality | decimal substring | numeric order |
//! | Bool | truthy-token equality | same as `=` | same as `=` |
//! | Text | case-insensitive equality | case-insensitive substring | always `false` |
//!
//! Only Int comparisons can fail: `raw` must be an optionally signed run of
//! decimal digits. Values beyond `i64` saturate, so `elixir < 1e30` written
//! out in digits still answers "yes".

use crate::cards::{AttributeValue, Card};
use crate::core::ParseError;

use super::operator::Operator;
use super::predicate::Query;

/// Tokens read as `true` for boolean attributes (compared lowercase).
pub const TRUTHY_TOKENS: [&str; 5] = ["true", "1", "yes", "y", "t"];

/// Evaluate one comparison.
///
/// ```
/// use royale_guess::cards::AttributeValue;
/// use royale_guess::query::{evaluate, Operator};
///
/// assert_eq!(evaluate(AttributeValue::Int(5), Operator::Lt, "10"), Ok(true));
/// assert_eq!(evaluate(AttributeValue::Text("rare"), Operator::Contains, "ra"), Ok(true));
/// assert!(evaluate(AttributeValue::Int(5), Operator::Eq, "five").is_err());
/// ```
pub fn evaluate(value: AttributeValue<'_>, op: Operator, raw: &str) -> Result<bool, ParseError> {
    match value {
        AttributeValue::Int(v) => compare_int(v, op, raw),
        AttributeValue::Bool(v) => Ok(compare_bool(v, raw)),
        AttributeValue::Text(s) => Ok(compare_text(s, op, raw)),
    }
}

fn compare_int(value: i64, op: Operator, raw: &str) -> Result<bool, ParseError> {
    let comp = parse_int(raw).ok_or_else(|| ParseError {
        raw: raw.to_string(),
    })?;

    Ok(match op {
        Operator::Eq => value == comp,
        Operator::Lt => value < comp,
        Operator::Le => value <= comp,
        Operator::Gt => value > comp,
        Operator::Ge => value >= comp,
        Operator::Contains => value.to_string().contains(&comp.to_string()),
    })
}

/// Parse an integer, saturating at the `i64` bounds.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(v) = trimmed.parse() {
        return Some(v);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Every operator on a boolean is equality.
fn compare_bool(value: bool, raw: &str) -> bool {
    value == is_truthy(raw)
}

fn compare_text(value: &str, op: Operator, raw: &str) -> bool {
    let value = value.to_lowercase();
    let raw = raw.to_lowercase();
    match op {
        Operator::Eq => value == raw,
        Operator::Contains => value.contains(&raw),
        Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge => false,
    }
}

/// Whether a typed token means `true`.
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    let token = raw.trim().to_lowercase();
    TRUTHY_TOKENS.contains(&token.as_str())
}

impl Query {
    /// Evaluate against a card, keeping a parse failure visible.
    pub fn evaluate(&self, card: &Card) -> Result<bool, ParseError> {
        evaluate(self.attribute.value_of(card), self.operator, &self.raw)
    }

    /// Evaluate against a card; a value that does not parse counts as no match.
    #[must_use]
    pub fn matches(&self, card: &Card) -> bool {
        self.evaluate(card).unwrap_or(false)
    }
}
