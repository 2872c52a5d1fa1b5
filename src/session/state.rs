//! Game session: the candidate-filtering state machine.
//!
//! A session holds the secret, the live candidate set (IDs into the shared
//! catalog, catalog order preserved), and timing. It is `Active` until a
//! guess names the secret, then `Solved` for good.
//!
//! ## Guarantees
//!
//! - While active, the secret is always a candidate. A question's answer is
//!   computed from the secret itself and only cards whose result differs
//!   are eliminated, so the secret can never be filtered out.
//! - Questions and guesses never grow the candidate set.

use std::fmt;
use std::sync::Arc;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::cards::{Card, CardCatalog, CardId};
use crate::core::{Clock, GameError, GameRng, InvariantViolation, ParseError, SystemClock};
use crate::query::Query;
use crate::scoring::ScoreRules;

use super::hint::{advise, Hint};

/// Cards removed by one operation.
pub type Eliminated = SmallVec<[CardId; 8]>;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Active,
    /// Terminal: the secret was guessed.
    Solved,
}

/// Result of posing a question.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOutcome {
    pub query: Query,
    /// Answer for the secret card.
    pub answer: bool,
    /// Candidates whose answer differed, in catalog order.
    pub eliminated: Eliminated,
    /// Set when the value did not parse; the answer is then "no".
    pub parse_error: Option<ParseError>,
}

/// Result of a guess.
#[derive(Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    /// The guess named the secret.
    Win {
        card: CardId,
        /// Seconds from start to the winning guess, rounded to 1/100.
        elapsed_seconds: f64,
        score: u32,
    },
    /// Wrong card. `eliminated` is `None` if it was already out.
    Miss {
        card: CardId,
        eliminated: Option<CardId>,
    },
}

impl GuessOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, GuessOutcome::Win { .. })
    }
}

/// How near the player is to a single remaining card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Closeness {
    Searching,
    GettingClose,
    FinalCard,
}

/// Snapshot for a status bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionStatus {
    pub remaining: usize,
    pub total: usize,
    pub eliminated: usize,
    pub questions: u32,
    pub elapsed_seconds: f64,
    pub phase: SessionPhase,
}

impl SessionStatus {
    #[must_use]
    pub fn closeness(&self) -> Closeness {
        match self.remaining {
            0 | 1 => Closeness::FinalCard,
            2 | 3 => Closeness::GettingClose,
            _ => Closeness::Searching,
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cards remaining: {}/{} | Eliminated: {} | Questions: {}",
            self.remaining, self.total, self.eliminated, self.questions
        )?;
        match self.closeness() {
            Closeness::FinalCard => f.write_str(" | Final card!"),
            Closeness::GettingClose => f.write_str(" | Getting close!"),
            Closeness::Searching => Ok(()),
        }
    }
}

/// One game of guess-the-card.
#[derive(Clone, Debug)]
pub struct GameSession<C: Clock = SystemClock> {
    catalog: Arc<CardCatalog>,
    rng: GameRng,
    clock: C,
    rules: ScoreRules,

    secret: CardId,
    candidates: Vector<CardId>,
    phase: SessionPhase,

    started_at: f64,
    ended_at: Option<f64>,
    question_count: u32,
}

impl GameSession<SystemClock> {
    /// Start a session on the wall clock with a random secret.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, rng: GameRng) -> Self {
        Self::with_clock(catalog, rng, SystemClock::new())
    }
}

impl<C: Clock> GameSession<C> {
    /// Start a session with a random secret on the given clock.
    #[must_use]
    pub fn with_clock(catalog: Arc<CardCatalog>, mut rng: GameRng, clock: C) -> Self {
        let secret = catalog.pick_secret(&mut rng);
        Self::start(catalog, secret, rng, clock)
    }

    /// Start a session with a chosen secret.
    pub fn with_secret(
        catalog: Arc<CardCatalog>,
        secret: CardId,
        rng: GameRng,
        clock: C,
    ) -> Result<Self, GameError> {
        if !catalog.contains(secret) {
            return Err(GameError::UnknownCard(secret.to_string()));
        }
        Ok(Self::start(catalog, secret, rng, clock))
    }

    fn start(catalog: Arc<CardCatalog>, secret: CardId, rng: GameRng, clock: C) -> Self {
        let started_at = clock.now();
        let candidates = catalog.ids().collect();
        info!(cards = catalog.len(), seed = rng.seed(), "session started");
        Self {
            catalog,
            rng,
            clock,
            rules: ScoreRules::default(),
            secret,
            candidates,
            phase: SessionPhase::Active,
            started_at,
            ended_at: None,
            question_count: 0,
        }
    }

    /// Replace the scoring constants.
    #[must_use]
    pub fn with_score_rules(mut self, rules: ScoreRules) -> Self {
        self.rules = rules;
        self
    }

    // === Operations ===

    /// Ask a question about the secret and drop every candidate whose
    /// answer differs.
    ///
    /// A value that does not parse answers "no" for every card, so nothing
    /// is eliminated; the error is returned in the outcome.
    pub fn pose_query(&mut self, query: &Query) -> Result<QueryOutcome, GameError> {
        self.ensure_active()?;
        let before = self.candidates.len();

        let (answer, parse_error) = match query.evaluate(&self.catalog[self.secret]) {
            Ok(answer) => (answer, None),
            Err(err) => {
                warn!(%query, error = %err, "question value did not parse; answering no");
                (false, Some(err))
            }
        };

        let catalog = &self.catalog;
        let mut eliminated = Eliminated::new();
        let kept: Vector<CardId> = self
            .candidates
            .iter()
            .copied()
            .filter(|&id| {
                let keep = query.matches(&catalog[id]) == answer;
                if !keep {
                    eliminated.push(id);
                }
                keep
            })
            .collect();

        self.candidates = kept;
        self.question_count += 1;
        self.debug_check(before);

        debug!(
            %query,
            answer,
            eliminated = eliminated.len(),
            remaining = self.candidates.len(),
            "question answered"
        );

        Ok(QueryOutcome {
            query: query.clone(),
            answer,
            eliminated,
            parse_error,
        })
    }

    /// Guess a card. A correct guess solves the session; a wrong one
    /// removes that card from the candidates.
    pub fn guess(&mut self, card: CardId) -> Result<GuessOutcome, GameError> {
        self.ensure_active()?;
        if !self.catalog.contains(card) {
            return Err(GameError::UnknownCard(card.to_string()));
        }

        if card == self.secret {
            let ended_at = self.clock.now();
            self.ended_at = Some(ended_at);
            self.phase = SessionPhase::Solved;

            let elapsed_seconds = round_centis(ended_at - self.started_at);
            let score = self.rules.score(elapsed_seconds);
            info!(
                card = %self.catalog[card].name,
                elapsed_seconds,
                score,
                questions = self.question_count,
                "secret found"
            );
            return Ok(GuessOutcome::Win {
                card,
                elapsed_seconds,
                score,
            });
        }

        let before = self.candidates.len();
        let eliminated = self
            .candidates
            .index_of(&card)
            .map(|pos| self.candidates.remove(pos));
        self.debug_check(before);

        debug!(card = %self.catalog[card].name, remaining = self.candidates.len(), "wrong guess");
        Ok(GuessOutcome::Miss { card, eliminated })
    }

    /// Guess by card name (case-insensitive).
    pub fn guess_by_name(&mut self, name: &str) -> Result<GuessOutcome, GameError> {
        let card = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| GameError::UnknownCard(name.trim().to_string()))?;
        self.guess(card)
    }

    /// Reveal something informative about the secret.
    pub fn hint(&mut self) -> Hint {
        let hint = advise(&self.catalog, self.secret, &self.candidates, &mut self.rng);
        debug!(%hint, "hint given");
        hint
    }

    /// Start over with a new random secret and every card in play.
    pub fn reset(&mut self) {
        self.secret = self.catalog.pick_secret(&mut self.rng);
        self.restart();
        info!("session reset with a new secret");
    }

    /// Put every card back in play and restart the timer, keeping the
    /// secret.
    pub fn restore_candidates(&mut self) -> Result<(), GameError> {
        self.ensure_active()?;
        self.restart();
        debug!("all cards restored");
        Ok(())
    }

    fn restart(&mut self) {
        self.candidates = self.catalog.ids().collect();
        self.phase = SessionPhase::Active;
        self.started_at = self.clock.now();
        self.ended_at = None;
        self.question_count = 0;
    }

    // === Accessors ===

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardCatalog> {
        &self.catalog
    }

    #[must_use]
    pub fn secret(&self) -> CardId {
        self.secret
    }

    #[must_use]
    pub fn secret_card(&self) -> &Card {
        &self.catalog[self.secret]
    }

    /// Live candidates in catalog order. Cloning is O(1).
    #[must_use]
    pub fn candidates(&self) -> &Vector<CardId> {
        &self.candidates
    }

    /// Live candidate cards in catalog order.
    pub fn candidate_cards(&self) -> impl Iterator<Item = &Card> {
        self.candidates.iter().map(|&id| &self.catalog[id])
    }

    #[must_use]
    pub fn is_candidate(&self, card: CardId) -> bool {
        self.candidates.contains(&card)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == SessionPhase::Solved
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Seconds since the start, frozen once solved.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        let end = self.ended_at.unwrap_or_else(|| self.clock.now());
        (end - self.started_at).max(0.0)
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let total = self.catalog.len();
        let remaining = self.candidates.len();
        SessionStatus {
            remaining,
            total,
            eliminated: total - remaining,
            questions: self.question_count,
            elapsed_seconds: self.elapsed_seconds(),
            phase: self.phase,
        }
    }

    // === Invariants ===

    /// Check the candidate set is well formed.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.phase == SessionPhase::Active && !self.candidates.contains(&self.secret) {
            return Err(InvariantViolation::SecretEliminated);
        }
        let mut seen = FxHashSet::default();
        if !self.candidates.iter().all(|id| seen.insert(*id)) {
            return Err(InvariantViolation::DuplicateCandidate);
        }
        Ok(())
    }

    /// Check the set is well formed and no larger than `before`.
    pub fn check_transition(&self, before: usize) -> Result<(), InvariantViolation> {
        let after = self.candidates.len();
        if after > before {
            return Err(InvariantViolation::CandidatesGrew { before, after });
        }
        self.check_invariants()
    }

    fn debug_check(&self, before: usize) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_transition(before) {
                panic!("session invariant violated: {violation}");
            }
        }
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.phase {
            SessionPhase::Active => Ok(()),
            SessionPhase::Solved => Err(GameError::SessionSolved),
        }
    }
}

fn round_centis(seconds: f64) -> f64 {
    (seconds.max(0.0) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Attribute, CardType, Rarity, Role, Target};
    use crate::core::ManualClock;
    use crate::query::Operator;

    fn three_cards() -> Arc<CardCatalog> {
        Arc::new(
            CardCatalog::new(vec![
                Card::new("Knight", Rarity::Common, CardType::Troop, 3, Target::Ground, Role::Defense).melee(),
                Card::new("Giant", Rarity::Rare, CardType::Troop, 5, Target::Ground, Role::WinCondition),
                Card::new("Balloon", Rarity::Epic, CardType::Troop, 5, Target::Air, Role::WinCondition).flying(),
            ])
            .unwrap(),
        )
    }

    fn session(secret: u16) -> (GameSession<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let s = GameSession::with_secret(three_cards(), CardId::new(secret), GameRng::new(1), clock.clone())
            .unwrap();
        (s, clock)
    }

    #[test]
    fn test_new_session_has_full_candidates() {
        let (s, _) = session(0);
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.question_count(), 0);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn test_query_collapses_to_secret() {
        let (mut s, _) = session(0);
        let q = Query::new(Attribute::Elixir, Operator::Eq, "3");

        let outcome = s.pose_query(&q).unwrap();
        assert!(outcome.answer);
        assert_eq!(outcome.eliminated.as_slice(), &[CardId::new(1), CardId::new(2)]);
        assert_eq!(s.candidates().iter().copied().collect::<Vec<_>>(), vec![CardId::new(0)]);
        assert_eq!(s.question_count(), 1);
    }

    #[test]
    fn test_no_answer_keeps_disagreeing_cards() {
        let (mut s, _) = session(1);
        let q = Query::new(Attribute::Flying, Operator::Eq, "yes");

        let outcome = s.pose_query(&q).unwrap();
        assert!(!outcome.answer);
        assert_eq!(outcome.eliminated.as_slice(), &[CardId::new(2)]);
        assert!(s.is_candidate(CardId::new(0)));
        assert!(s.is_candidate(CardId::new(1)));
    }

    #[test]
    fn test_unparsable_value_answers_no_and_eliminates_nothing() {
        let (mut s, _) = session(0);
        let q = Query::new(Attribute::Elixir, Operator::Lt, "cheap");

        let outcome = s.pose_query(&q).unwrap();
        assert!(!outcome.answer);
        assert!(outcome.eliminated.is_empty());
        assert_eq!(outcome.parse_error.map(|e| e.raw), Some("cheap".to_string()));
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.question_count(), 1);
    }

    #[test]
    fn test_query_on_singleton_is_noop() {
        let (mut s, _) = session(0);
        s.pose_query(&Query::new(Attribute::Name, Operator::Eq, "knight")).unwrap();
        assert_eq!(s.candidates().len(), 1);

        let outcome = s.pose_query(&Query::new(Attribute::Rarity, Operator::Eq, "epic")).unwrap();
        assert!(!outcome.answer);
        assert!(outcome.eliminated.is_empty());
        assert_eq!(s.candidates().len(), 1);
    }

    #[test]
    fn test_miss_removes_guessed_card() {
        let (mut s, _) = session(0);
        let outcome = s.guess(CardId::new(2)).unwrap();

        assert_eq!(
            outcome,
            GuessOutcome::Miss {
                card: CardId::new(2),
                eliminated: Some(CardId::new(2)),
            }
        );
        assert!(!s.is_candidate(CardId::new(2)));
        assert_eq!(s.phase(), SessionPhase::Active);

        // Guessing it again eliminates nothing.
        let again = s.guess(CardId::new(2)).unwrap();
        assert_eq!(
            again,
            GuessOutcome::Miss {
                card: CardId::new(2),
                eliminated: None,
            }
        );
        assert_eq!(s.candidates().len(), 2);
    }

    #[test]
    fn test_win_records_time_and_score() {
        let (mut s, clock) = session(1);
        clock.advance(45.004);

        let outcome = s.guess_by_name("giant").unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Win {
                card: CardId::new(1),
                elapsed_seconds: 45.0,
                score: 550,
            }
        );
        assert!(s.is_solved());

        // Time is frozen once solved.
        clock.advance(100.0);
        assert_eq!(s.elapsed_seconds(), 45.004);
    }

    #[test]
    fn test_solved_session_rejects_play() {
        let (mut s, _) = session(0);
        s.guess(CardId::new(0)).unwrap();

        let q = Query::new(Attribute::Elixir, Operator::Eq, "3");
        assert!(matches!(s.pose_query(&q), Err(GameError::SessionSolved)));
        assert!(matches!(s.guess(CardId::new(1)), Err(GameError::SessionSolved)));
        assert!(matches!(s.restore_candidates(), Err(GameError::SessionSolved)));
    }

    #[test]
    fn test_unknown_cards() {
        let (mut s, _) = session(0);
        assert!(matches!(s.guess(CardId::new(9)), Err(GameError::UnknownCard(_))));
        assert!(matches!(s.guess_by_name("Mega Knight"), Err(GameError::UnknownCard(name)) if name == "Mega Knight"));
        assert!(GameSession::with_secret(three_cards(), CardId::new(3), GameRng::new(0), ManualClock::new()).is_err());
    }

    #[test]
    fn test_reset_restores_everything() {
        let (mut s, clock) = session(0);
        s.guess(CardId::new(0)).unwrap();
        clock.advance(30.0);

        s.reset();
        assert_eq!(s.phase(), SessionPhase::Active);
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.question_count(), 0);
        assert_eq!(s.elapsed_seconds(), 0.0);
        assert!(s.check_invariants().is_ok());
    }

    #[test]
    fn test_restore_keeps_secret() {
        let (mut s, clock) = session(2);
        s.pose_query(&Query::new(Attribute::Flying, Operator::Eq, "true")).unwrap();
        assert_eq!(s.candidates().len(), 1);
        clock.advance(12.0);

        s.restore_candidates().unwrap();
        assert_eq!(s.secret(), CardId::new(2));
        assert_eq!(s.candidates().len(), 3);
        assert_eq!(s.elapsed_seconds(), 0.0);
    }

    #[test]
    fn test_status() {
        let (mut s, clock) = session(1);
        clock.advance(2.5);
        s.guess(CardId::new(0)).unwrap();

        let status = s.status();
        assert_eq!(status.remaining, 2);
        assert_eq!(status.total, 3);
        assert_eq!(status.eliminated, 1);
        assert_eq!(status.elapsed_seconds, 2.5);
        assert_eq!(status.closeness(), Closeness::GettingClose);
        assert_eq!(
            status.to_string(),
            "Cards remaining: 2/3 | Eliminated: 1 | Questions: 0 | Getting close!"
        );
    }

    #[test]
    fn test_check_transition_detects_growth() {
        let (s, _) = session(0);
        assert_eq!(
            s.check_transition(2),
            Err(InvariantViolation::CandidatesGrew { before: 2, after: 3 })
        );
    }

    #[test]
    fn test_hint_is_informative() {
        let (mut s, _) = session(0);
        let hint = s.hint();
        let attribute = hint.attribute().expect("some attribute splits three distinct cards");

        let secret_value = attribute.value_of(s.secret_card());
        let sharing = s
            .candidate_cards()
            .filter(|c| attribute.value_of(c) == secret_value)
            .count();
        assert!(sharing > 0 && sharing < 3);
    }

    #[test]
    fn test_round_centis() {
        assert_eq!(round_centis(1.234), 1.23);
        assert_eq!(round_centis(1.235_1), 1.24);
        assert_eq!(round_centis(-3.0), 0.0);
    }
}
