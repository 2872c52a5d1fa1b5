//! Card attributes and their static typing.
//!
//! Every queryable attribute has a fixed `AttributeKind` decided here, at
//! catalog-definition time. Comparisons branch on that kind; they never
//! inspect a value to guess its type.
//!
//! ## Attribute Kinds
//!
//! - `Int`: elixir cost
//! - `Bool`: melee, flying
//! - `Text`: name and the enumerated attributes (rarity, type, target, role)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::GameError;

use super::definition::Card;

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Lowercase text form, as shown to players and stored on disk.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

/// What kind of card it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Troop,
    Spell,
    Building,
}

impl CardType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardType::Troop => "troop",
            CardType::Spell => "spell",
            CardType::Building => "building",
        }
    }
}

/// Which units a card can hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Ground,
    Air,
    Both,
}

impl Target {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Target::Ground => "ground",
            Target::Air => "air",
            Target::Both => "both",
        }
    }
}

/// Strategic role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Defense,
    Support,
    WinCondition,
    Swarm,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Defense => "defense",
            Role::Support => "support",
            Role::WinCondition => "win_condition",
            Role::Swarm => "swarm",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static type of an attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Int,
    Bool,
    Text,
}

/// A queryable card attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Name,
    Rarity,
    #[serde(rename = "type")]
    CardType,
    Elixir,
    Melee,
    Flying,
    Target,
    Role,
}

impl Attribute {
    /// Attributes offered in the question picker and considered for hints.
    ///
    /// `Name` is queryable but never revealed as a hint.
    pub const QUESTIONABLE: [Attribute; 7] = [
        Attribute::Rarity,
        Attribute::CardType,
        Attribute::Elixir,
        Attribute::Melee,
        Attribute::Flying,
        Attribute::Target,
        Attribute::Role,
    ];

    /// The attribute's fixed comparison type.
    #[must_use]
    pub const fn kind(self) -> AttributeKind {
        match self {
            Attribute::Elixir => AttributeKind::Int,
            Attribute::Melee | Attribute::Flying => AttributeKind::Bool,
            Attribute::Name
            | Attribute::Rarity
            | Attribute::CardType
            | Attribute::Target
            | Attribute::Role => AttributeKind::Text,
        }
    }

    /// Name used in questions (`type` for the card type).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Attribute::Name => "name",
            Attribute::Rarity => "rarity",
            Attribute::CardType => "type",
            Attribute::Elixir => "elixir",
            Attribute::Melee => "melee",
            Attribute::Flying => "flying",
            Attribute::Target => "target",
            Attribute::Role => "role",
        }
    }

    /// Read this attribute from a card.
    #[must_use]
    pub fn value_of(self, card: &Card) -> AttributeValue<'_> {
        match self {
            Attribute::Name => AttributeValue::Text(&card.name),
            Attribute::Rarity => AttributeValue::Text(card.rarity.as_str()),
            Attribute::CardType => AttributeValue::Text(card.card_type.as_str()),
            Attribute::Elixir => AttributeValue::Int(i64::from(card.elixir)),
            Attribute::Melee => AttributeValue::Bool(card.melee),
            Attribute::Flying => AttributeValue::Bool(card.flying),
            Attribute::Target => AttributeValue::Text(card.target.as_str()),
            Attribute::Role => AttributeValue::Text(card.role.as_str()),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Attribute {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Attribute::Name),
            "rarity" => Ok(Attribute::Rarity),
            "type" | "card_type" => Ok(Attribute::CardType),
            "elixir" => Ok(Attribute::Elixir),
            "melee" => Ok(Attribute::Melee),
            "flying" => Ok(Attribute::Flying),
            "target" => Ok(Attribute::Target),
            "role" => Ok(Attribute::Role),
            _ => Err(GameError::UnknownAttribute(s.trim().to_string())),
        }
    }
}

/// A card's value for one attribute.
///
/// The variant always matches `Attribute::kind` of the attribute it was
/// read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeValue<'a> {
    Int(i64),
    Bool(bool),
    Text(&'a str),
}

impl AttributeValue<'_> {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Int(_) => AttributeKind::Int,
            AttributeValue::Bool(_) => AttributeKind::Bool,
            AttributeValue::Text(_) => AttributeKind::Text,
        }
    }
}

impl fmt::Display for AttributeValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Int(v) => write!(f, "{v}"),
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::Text(s) => f.write_str(s),
        }
    }
}
