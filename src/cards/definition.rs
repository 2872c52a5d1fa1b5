//! Cards and their IDs.
//!
//! A `Card` never changes after the catalog is built. Sessions refer to
//! cards by `CardId`, an index into the catalog, rather than copying them.

use serde::{Deserialize, Serialize};

use super::attributes::{CardType, Rarity, Role, Target};

/// Index of a card in its `CardCatalog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u16);

impl CardId {
    /// ID for the card at catalog position `id`.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// The underlying index as stored.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Position in the catalog.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One playable card and the attributes players can ask about.
///
/// ## Example
///
/// ```
/// use royale_guess::cards::{Card, CardType, Rarity, Role, Target};
///
/// let hog = Card::new("Hog Rider", Rarity::Rare, CardType::Troop, 4, Target::Ground, Role::WinCondition)
///     .melee()
///     .with_image("card images/clash-hog-rider.webp");
///
/// assert!(hog.melee);
/// assert!(!hog.flying);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique display name; the card's identity.
    pub name: String,

    pub rarity: Rarity,

    pub card_type: CardType,

    /// Elixir cost, 1 to 10.
    pub elixir: u8,

    /// Fights in close combat.
    pub melee: bool,

    /// Air unit.
    pub flying: bool,

    pub target: Target,

    pub role: Role,

    /// Opaque image reference for front ends.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Card {
    /// Create a ground, ranged card with no image.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        rarity: Rarity,
        card_type: CardType,
        elixir: u8,
        target: Target,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            rarity,
            card_type,
            elixir,
            melee: false,
            flying: false,
            target,
            role,
            image: None,
        }
    }

    /// Mark as a melee unit (builder pattern).
    #[must_use]
    pub fn melee(mut self) -> Self {
        self.melee = true;
        self
    }

    /// Mark as a flying unit.
    #[must_use]
    pub fn flying(mut self) -> Self {
        self.flying = true;
        self
    }

    /// Attach an image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}
