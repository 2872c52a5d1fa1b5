//! Question language: operators, queries, and the comparison engine.
//!
//! A `Query` names an `Attribute`, an `Operator`, and the raw value the
//! player typed. `evaluate` compares a card's attribute value against it,
//! dispatching on the attribute's static kind.

pub mod evaluator;
pub mod operator;
pub mod predicate;

pub use evaluator::{evaluate, is_truthy, TRUTHY_TOKENS};
pub use operator::Operator;
pub use predicate::Query;
