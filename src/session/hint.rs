//! Hint advisor.
//!
//! Attributes are tried in a random order; the first one that would split
//! the remaining candidates (some share the secret's value, some don't) is
//! revealed. Selection is uniform among informative attributes, not ranked
//! by information gain. When every candidate agrees on every attribute the
//! first letter of the secret's name is revealed instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Attribute, Card, CardCatalog, CardId, CardType, Rarity, Role, Target};
use crate::core::GameRng;

/// A fact about the secret card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Rarity(Rarity),
    CardType(CardType),
    Elixir(u8),
    Melee(bool),
    Flying(bool),
    Target(Target),
    Role(Role),
    /// Fallback when no attribute narrows the field.
    NameInitial(char),
}

impl Hint {
    /// Reveal one attribute of `card`.
    #[must_use]
    pub fn reveal(attribute: Attribute, card: &Card) -> Self {
        match attribute {
            Attribute::Rarity => Hint::Rarity(card.rarity),
            Attribute::CardType => Hint::CardType(card.card_type),
            Attribute::Elixir => Hint::Elixir(card.elixir),
            Attribute::Melee => Hint::Melee(card.melee),
            Attribute::Flying => Hint::Flying(card.flying),
            Attribute::Target => Hint::Target(card.target),
            Attribute::Role => Hint::Role(card.role),
            Attribute::Name => Hint::NameInitial(name_initial(card)),
        }
    }

    /// The attribute revealed, `None` for the name fallback.
    #[must_use]
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Hint::Rarity(_) => Some(Attribute::Rarity),
            Hint::CardType(_) => Some(Attribute::CardType),
            Hint::Elixir(_) => Some(Attribute::Elixir),
            Hint::Melee(_) => Some(Attribute::Melee),
            Hint::Flying(_) => Some(Attribute::Flying),
            Hint::Target(_) => Some(Attribute::Target),
            Hint::Role(_) => Some(Attribute::Role),
            Hint::NameInitial(_) => None,
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Rarity(r) => write!(f, "The secret card's rarity is '{r}'"),
            Hint::CardType(t) => write!(f, "The secret card is a {t}"),
            Hint::Elixir(e) => write!(f, "The secret card costs {e} elixir"),
            Hint::Melee(true) => f.write_str("The secret card is a melee unit"),
            Hint::Melee(false) => f.write_str("The secret card is not a melee unit"),
            Hint::Flying(true) => f.write_str("The secret card can fly"),
            Hint::Flying(false) => f.write_str("The secret card cannot fly"),
            Hint::Target(t) => write!(f, "The secret card targets {t} units"),
            Hint::Role(r) => write!(f, "The secret card's role is {r}"),
            Hint::NameInitial(c) => write!(f, "The secret card's name starts with '{c}'"),
        }
    }
}

fn name_initial(card: &Card) -> char {
    card.name.chars().next().unwrap_or('?')
}

/// Pick an informative hint about `secret` given the current candidates.
pub fn advise(
    catalog: &CardCatalog,
    secret: CardId,
    candidates: &im::Vector<CardId>,
    rng: &mut GameRng,
) -> Hint {
    let secret_card = &catalog[secret];

    let mut order = Attribute::QUESTIONABLE;
    rng.shuffle(&mut order);

    for attribute in order {
        let value = attribute.value_of(secret_card);
        let sharing = candidates
            .iter()
            .filter(|&&id| attribute.value_of(&catalog[id]) == value)
            .count();

        if sharing > 0 && sharing < candidates.len() {
            return Hint::reveal(attribute, secret_card);
        }
    }

    Hint::NameInitial(name_initial(secret_card))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> CardCatalog {
        CardCatalog::new(vec![
            Card::new("Knight", Rarity::Common, CardType::Troop, 3, Target::Ground, Role::Defense).melee(),
            // Differs from Knight only by elixir.
            Card::new("Squire", Rarity::Common, CardType::Troop, 2, Target::Ground, Role::Defense).melee(),
            // Same attributes as Knight apart from the name.
            Card::new("Paladin", Rarity::Common, CardType::Troop, 3, Target::Ground, Role::Defense).melee(),
        ])
        .unwrap()
    }

    #[test]
    fn test_only_informative_attribute_is_chosen() {
        let catalog = catalog();
        let candidates: im::Vector<CardId> = catalog.ids().collect();

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let hint = advise(&catalog, CardId::new(0), &candidates, &mut rng);
            assert_eq!(hint, Hint::Elixir(3));
        }
    }

    #[test]
    fn test_choice_varies_among_informative_attributes() {
        let catalog = CardCatalog::new(vec![
            Card::new("Knight", Rarity::Common, CardType::Troop, 3, Target::Ground, Role::Defense).melee(),
            // Differs from Knight only by elixir.
            Card::new("Squire", Rarity::Common, CardType::Troop, 2, Target::Ground, Role::Defense).melee(),
            // Differs from Knight only by rarity.
            Card::new("Champion", Rarity::Rare, CardType::Troop, 3, Target::Ground, Role::Defense).melee(),
        ])
        .unwrap();
        let candidates: im::Vector<CardId> = catalog.ids().collect();

        let hints: Vec<Hint> = (0..50)
            .map(|seed| advise(&catalog, CardId::new(0), &candidates, &mut GameRng::new(seed)))
            .collect();

        assert!(hints
            .iter()
            .all(|h| matches!(h, Hint::Elixir(3) | Hint::Rarity(Rarity::Common))));
        assert!(hints.contains(&Hint::Elixir(3)));
        assert!(hints.contains(&Hint::Rarity(Rarity::Common)));
    }

    #[test]
    fn test_fallback_to_name_initial() {
        let catalog = catalog();
        // Knight and Paladin agree on every hintable attribute.
        let candidates: im::Vector<CardId> = [CardId::new(0), CardId::new(2)].into_iter().collect();

        let mut rng = GameRng::new(1);
        let hint = advise(&catalog, CardId::new(2), &candidates, &mut rng);
        assert_eq!(hint, Hint::NameInitial('P'));
        assert_eq!(hint.attribute(), None);
        assert_eq!(hint.to_string(), "The secret card's name starts with 'P'");
    }

    #[test]
    fn test_single_candidate_falls_back() {
        let catalog = catalog();
        let candidates: im::Vector<CardId> = [CardId::new(1)].into_iter().collect();

        let mut rng = GameRng::new(3);
        assert_eq!(advise(&catalog, CardId::new(1), &candidates, &mut rng), Hint::NameInitial('S'));
    }

    #[test]
    fn test_hint_phrasing() {
        assert_eq!(Hint::Rarity(Rarity::Rare).to_string(), "The secret card's rarity is 'rare'");
        assert_eq!(Hint::CardType(CardType::Spell).to_string(), "The secret card is a spell");
        assert_eq!(Hint::Elixir(4).to_string(), "The secret card costs 4 elixir");
        assert_eq!(Hint::Melee(false).to_string(), "The secret card is not a melee unit");
        assert_eq!(Hint::Flying(true).to_string(), "The secret card can fly");
        assert_eq!(Hint::Target(Target::Air).to_string(), "The secret card targets air units");
        assert_eq!(
            Hint::Role(Role::WinCondition).to_string(),
            "The secret card's role is win_condition"
        );
    }

    #[test]
    fn test_reveal_matches_attribute() {
        let catalog = catalog();
        let knight = &catalog[CardId::new(0)];
        for attribute in Attribute::QUESTIONABLE {
            assert_eq!(Hint::reveal(attribute, knight).attribute(), Some(attribute));
        }
    }
}
