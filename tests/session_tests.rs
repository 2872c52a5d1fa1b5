//! Session tests.
//!
//! These drive whole games through the public operations:
//! - A question that isolates the secret, followed by a winning guess
//! - The candidate-set guarantees over arbitrary question sequences
//! - Scoring and leaderboard hand-off after a win

use std::sync::Arc;

use proptest::prelude::*;

use royale_guess::cards::{Attribute, Card, CardCatalog, CardId, CardType, Rarity, Role, Target};
use royale_guess::leaderboard::{Leaderboard, MemoryStore};
use royale_guess::query::{Operator, Query};
use royale_guess::session::{GameSession, GuessOutcome, SessionPhase};
use royale_guess::{GameRng, ManualClock};

fn three_card_catalog() -> Arc<CardCatalog> {
    Arc::new(
        CardCatalog::new(vec![
            Card::new("Skeletons", Rarity::Common, CardType::Troop, 1, Target::Ground, Role::Swarm),
            Card::new("Miner", Rarity::Legendary, CardType::Troop, 3, Target::Ground, Role::Support),
            Card::new("Wizard", Rarity::Rare, CardType::Troop, 5, Target::Both, Role::Support),
        ])
        .unwrap(),
    )
}

/// Only one card costs 3; asking about it isolates the secret.
#[test]
fn test_end_to_end_single_question_win() {
    let catalog = three_card_catalog();
    let clock = ManualClock::new();
    let secret = catalog.find_by_name("Miner").unwrap();
    let mut session =
        GameSession::with_secret(catalog.clone(), secret, GameRng::new(7), clock.clone()).unwrap();

    let outcome = session
        .pose_query(&Query::from_parts("elixir", "=", "3").unwrap())
        .unwrap();
    assert!(outcome.answer);
    assert_eq!(outcome.eliminated.len(), 2);
    assert!(!outcome.eliminated.contains(&secret));
    assert_eq!(session.candidates().len(), 1);
    assert_eq!(session.candidates()[0], secret);

    clock.advance(12.0);
    let result = session.guess(secret).unwrap();
    assert!(result.is_win());
    assert_eq!(session.phase(), SessionPhase::Solved);
}

/// A full game on the standard catalog, ending on the leaderboard.
#[test]
fn test_standard_game_reaches_leaderboard() {
    let catalog = Arc::new(CardCatalog::standard());
    let clock = ManualClock::new();
    let secret = catalog.find_by_name("Hog Rider").unwrap();
    let mut session =
        GameSession::with_secret(catalog.clone(), secret, GameRng::new(3), clock.clone()).unwrap();

    for text in ["type = troop", "melee = yes", "role : win", "elixir < 5"] {
        let outcome = session.pose_query(&text.parse().unwrap()).unwrap();
        assert!(outcome.answer, "{text}");
        assert!(session.check_invariants().is_ok());
    }
    assert_eq!(session.question_count(), 4);
    assert_eq!(session.candidates().len(), 1);

    // A wrong guess first.
    let miss = session.guess_by_name("Prince").unwrap();
    assert!(matches!(miss, GuessOutcome::Miss { eliminated: None, .. }));

    clock.advance(45.0);
    let GuessOutcome::Win {
        elapsed_seconds,
        score,
        ..
    } = session.guess_by_name("hog rider").unwrap()
    else {
        panic!("expected a win");
    };
    assert_eq!(score, 550);

    let mut board = Leaderboard::load(MemoryStore::new(), 10, true).unwrap();
    let merged = board.merge("Tester", score, elapsed_seconds);
    assert!(merged.accepted);
    assert_eq!(merged.rank, Some(5));
    assert!(merged.persist_error.is_none());
}

/// Hints on the standard catalog always split the remaining field.
#[test]
fn test_hints_are_informative_on_standard_catalog() {
    let catalog = Arc::new(CardCatalog::standard());
    for seed in 0..30 {
        let mut session = GameSession::with_clock(catalog.clone(), GameRng::new(seed), ManualClock::new());
        let hint = session.hint();
        let attribute = hint.attribute().expect("a full catalog always has an informative attribute");

        let secret_value = attribute.value_of(session.secret_card());
        let sharing = session
            .candidate_cards()
            .filter(|c| attribute.value_of(c) == secret_value)
            .count();
        assert!(sharing > 0 && sharing < catalog.len());
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn attribute_strategy() -> impl Strategy<Value = Attribute> {
    prop::sample::select(vec![
        Attribute::Name,
        Attribute::Rarity,
        Attribute::CardType,
        Attribute::Elixir,
        Attribute::Melee,
        Attribute::Flying,
        Attribute::Target,
        Attribute::Role,
    ])
}

fn raw_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..12).prop_map(|n| n.to_string()),
        prop::sample::select(vec![
            "common", "rare", "epic", "legendary", "troop", "spell", "building", "ground", "air",
            "both", "support", "swarm", "yes", "no", "true", "0", "wiz", "g", "",
        ])
        .prop_map(str::to_string),
        "[a-z]{1,6}",
    ]
}

fn query_strategy() -> impl Strategy<Value = Query> {
    (
        attribute_strategy(),
        prop::sample::select(Operator::ALL.to_vec()),
        raw_value_strategy(),
    )
        .prop_map(|(attribute, operator, raw)| Query::new(attribute, operator, raw))
}

#[derive(Clone, Debug)]
enum Move {
    Ask(Query),
    Guess(u16),
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![
        4 => query_strategy().prop_map(Move::Ask),
        1 => (0u16..20).prop_map(Move::Guess),
    ]
}

proptest! {
    /// The secret stays a candidate and the set never grows, for any moves.
    #[test]
    fn prop_candidate_invariants(seed in any::<u64>(), moves in prop::collection::vec(move_strategy(), 0..25)) {
        let catalog = Arc::new(CardCatalog::standard());
        let mut session = GameSession::with_clock(catalog, GameRng::new(seed), ManualClock::new());
        let secret = session.secret();

        for mv in moves {
            let before = session.candidates().len();
            match mv {
                Move::Ask(query) => {
                    let outcome = session.pose_query(&query).unwrap();
                    prop_assert_eq!(outcome.eliminated.len() + session.candidates().len(), before);
                    prop_assert!(!outcome.eliminated.contains(&secret));
                }
                Move::Guess(raw) => {
                    let card = CardId::new(raw);
                    if card == secret {
                        continue;
                    }
                    session.guess(card).unwrap();
                }
            }
            prop_assert!(session.candidates().contains(&secret));
            prop_assert!(session.candidates().len() <= before);
            prop_assert!(session.check_transition(before).is_ok());
        }
    }

    /// Every surviving candidate answers the same way as the secret.
    #[test]
    fn prop_survivors_agree_with_secret(seed in any::<u64>(), query in query_strategy()) {
        let catalog = Arc::new(CardCatalog::standard());
        let mut session = GameSession::with_clock(catalog, GameRng::new(seed), ManualClock::new());

        let outcome = session.pose_query(&query).unwrap();
        for card in session.candidate_cards() {
            prop_assert_eq!(query.matches(card), outcome.answer);
        }
        for &id in &outcome.eliminated {
            prop_assert_ne!(query.matches(&session.catalog()[id]), outcome.answer);
        }
    }
}
