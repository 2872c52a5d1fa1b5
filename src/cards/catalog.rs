//! The card catalog.
//!
//! `CardCatalog` is the arena every session indexes into: an ordered,
//! unique-named, immutable list of cards. It is built once per process and
//! shared behind an `Arc`.

use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::core::{GameError, GameRng};

use super::attributes::{CardType, Rarity, Role, Target};
use super::definition::{Card, CardId};

/// Ordered, immutable collection of cards.
///
/// ## Example
///
/// ```
/// use royale_guess::cards::CardCatalog;
///
/// let catalog = CardCatalog::standard();
/// let knight = catalog.find_by_name("knight").unwrap();
/// assert_eq!(catalog[knight].elixir, 3);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    cards: Vec<Card>,
    by_name: FxHashMap<String, CardId>,
}

impl CardCatalog {
    /// Build a catalog, checking names are unique and costs are in range.
    pub fn new(cards: Vec<Card>) -> Result<Self, GameError> {
        if cards.is_empty() {
            return Err(GameError::InvalidCatalog("catalog has no cards".into()));
        }
        if cards.len() > usize::from(u16::MAX) {
            return Err(GameError::InvalidCatalog(format!(
                "{} cards exceeds the supported maximum",
                cards.len()
            )));
        }

        let mut by_name = FxHashMap::default();
        for (idx, card) in cards.iter().enumerate() {
            if !(1..=10).contains(&card.elixir) {
                return Err(GameError::InvalidCatalog(format!(
                    "{} has elixir {}, expected 1-10",
                    card.name, card.elixir
                )));
            }
            let key = card.name.to_lowercase();
            if by_name.insert(key, CardId::new(idx as u16)).is_some() {
                return Err(GameError::InvalidCatalog(format!(
                    "duplicate card name '{}'",
                    card.name
                )));
            }
        }

        Ok(Self { cards, by_name })
    }

    /// The compiled-in 20-card catalog.
    #[must_use]
    pub fn standard() -> Self {
        let cards = standard_cards();
        let by_name = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| (card.name.to_lowercase(), CardId::new(idx as u16)))
            .collect();
        Self { cards, by_name }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Check an ID belongs to this catalog.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    /// Look a card up by name, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<CardId> {
        self.by_name.get(&name.trim().to_lowercase()).copied()
    }

    /// All IDs in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.cards.len()).map(|idx| CardId::new(idx as u16))
    }

    /// All cards with their IDs, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(idx, card)| (CardId::new(idx as u16), card))
    }

    /// Pick a secret uniformly at random.
    pub fn pick_secret(&self, rng: &mut GameRng) -> CardId {
        CardId::new(rng.pick_index(self.cards.len()) as u16)
    }
}

impl Index<CardId> for CardCatalog {
    type Output = Card;

    fn index(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }
}

fn card(
    name: &str,
    rarity: Rarity,
    card_type: CardType,
    elixir: u8,
    target: Target,
    role: Role,
    image: &str,
) -> Card {
    Card::new(name, rarity, card_type, elixir, target, role)
        .with_image(format!("card images/{image}.webp"))
}

fn standard_cards() -> Vec<Card> {
    use CardType::*;
    use Rarity::*;
    use Role::*;
    use Target::*;

    vec![
        card("Knight", Common, Troop, 3, Ground, Defense, "clash-knight").melee(),
        card("Archers", Common, Troop, 3, Both, Support, "clash-archers"),
        card("Giant", Rare, Troop, 5, Ground, WinCondition, "clash-giant"),
        card("Baby Dragon", Epic, Troop, 4, Air, Support, "clash-baby-dragon").flying(),
        card("Hog Rider", Rare, Troop, 4, Ground, WinCondition, "clash-hog-rider").melee(),
        card("Wizard", Rare, Troop, 5, Both, Support, "clash-wizard"),
        card("Inferno Tower", Rare, Building, 5, Ground, Defense, "clash-inferno-tower"),
        card("Balloon", Epic, Troop, 5, Air, WinCondition, "clash-balloon").flying(),
        card("Electro Wizard", Legendary, Troop, 4, Both, Support, "clash-electro-wizard"),
        card("Skeletons", Common, Troop, 1, Ground, Swarm, "clash-skeletons"),
        card("Prince", Epic, Troop, 5, Ground, WinCondition, "clash-prince").melee(),
        card("Miner", Legendary, Troop, 3, Ground, Support, "clash-royale-miner"),
        card("Princess", Legendary, Troop, 3, Both, Support, "clash-princess").flying(),
        card("Goblin Barrel", Epic, Spell, 3, Ground, WinCondition, "clash-goblin-barrel"),
        card("Fireball", Rare, Spell, 4, Ground, Support, "clash-fireball"),
        card("Mortar", Common, Building, 4, Ground, Defense, "clash-mortar"),
        card("Musketeer", Rare, Troop, 4, Both, Support, "clash-musketeer"),
        card("Goblin Gang", Common, Troop, 3, Ground, Swarm, "clash-goblin-gang"),
        card("Minion Horde", Common, Troop, 5, Air, Swarm, "clash-minion-horde").flying(),
        card("Lava Hound", Legendary, Troop, 7, Air, WinCondition, "clash-lava-hound").flying(),
    ]
}
