//! Card system: definitions, typed attributes, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Static card data
//! - `CardId`: Index of a card in its catalog
//! - `Attribute` / `AttributeKind`: Queryable attributes and their fixed types
//! - `CardCatalog`: The immutable card arena sessions index into

pub mod attributes;
pub mod catalog;
pub mod definition;

pub use attributes::{Attribute, AttributeKind, AttributeValue, CardType, Rarity, Role, Target};
pub use catalog::CardCatalog;
pub use definition::{Card, CardId};
