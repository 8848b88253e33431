//! The per-round match state machine.
//!
//! ## States
//!
//! - `Idle`: no cards revealed-unmatched
//! - `OneRevealed`: one card awaiting its partner pick
//! - `Resolving`: a mismatched pair is face-up; input is locked until the
//!   caller's delay fires and invokes `resolve_mismatch`
//! - `RoundWon`: all cards matched; terminal for the round
//!
//! Matches resolve immediately on the second flip. Mismatches park in
//! `Resolving` so the render layer can show both faces for the configured
//! delay; the engine never runs the timer itself.
//!
//! Invalid flips (already face-up, mid-resolution, after the win) are
//! ignored rather than errors - they are expected under rapid input.

use smallvec::SmallVec;

use crate::deck::{CardId, Deck, Face};

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No cards revealed-unmatched.
    Idle,
    /// One card face-up, awaiting a second pick.
    OneRevealed,
    /// Two mismatched cards face-up, awaiting `resolve_mismatch`.
    Resolving,
    /// Every card matched. Terminal for the round.
    RoundWon,
}

/// What a single `flip` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip was rejected (unknown id, already face-up, input locked).
    Ignored,

    /// First card of a pair turned face-up.
    Revealed { card: CardId },

    /// Second card completed a pair. Both cards are now `Matched` and the
    /// turn counter advanced.
    Matched {
        first: CardId,
        second: CardId,
        round_won: bool,
    },

    /// Second card did not match. Both cards stay revealed in `Resolving`
    /// until `resolve_mismatch` reverts them; the turn counts then.
    Mismatched { first: CardId, second: CardId },
}

/// State machine tracking face states, pair resolution, and turns for one
/// round. Owns the deck's transient face state exclusively.
///
/// Turn counting rule: exactly one increment per completed pair
/// comparison, whatever the outcome. Flipping a single card never counts.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    deck: Deck,
    /// Revealed-unmatched selection, at most a pair.
    revealed: SmallVec<[CardId; 2]>,
    phase: Phase,
    turns: u32,
}

impl MatchEngine {
    /// Start a round over a freshly built deck.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            revealed: SmallVec::new(),
            phase: Phase::Idle,
            turns: 0,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Completed pair comparisons this round.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The deck being played.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Board positions currently face-down (power-up reveal set).
    #[must_use]
    pub fn hidden_cards(&self) -> Vec<CardId> {
        self.deck.hidden_cards()
    }

    /// Flip a card face-up.
    ///
    /// Ignored while `Resolving` (input locked during the reveal window),
    /// after the round is won, for unknown ids, and for cards that are not
    /// face-down - flipping the same position twice is a no-op.
    pub fn flip(&mut self, card: CardId) -> FlipOutcome {
        if matches!(self.phase, Phase::Resolving | Phase::RoundWon) {
            return FlipOutcome::Ignored;
        }

        let entity = match self.deck.get(card) {
            Some(c) if c.is_hidden() => c.entity_id(),
            _ => return FlipOutcome::Ignored,
        };

        self.set_face(card, Face::Revealed);
        self.revealed.push(card);

        if self.revealed.len() < 2 {
            self.phase = Phase::OneRevealed;
            return FlipOutcome::Revealed { card };
        }

        let first = self.revealed[0];
        let second = self.revealed[1];
        let first_entity = self
            .deck
            .get(first)
            .map(|c| c.entity_id())
            .unwrap_or(entity);

        if first_entity == entity {
            self.set_face(first, Face::Matched);
            self.set_face(second, Face::Matched);
            self.revealed.clear();
            self.turns += 1;

            let round_won = self.deck.all_matched();
            self.phase = if round_won { Phase::RoundWon } else { Phase::Idle };

            FlipOutcome::Matched {
                first,
                second,
                round_won,
            }
        } else {
            self.phase = Phase::Resolving;
            FlipOutcome::Mismatched { first, second }
        }
    }

    /// Revert a mismatched pair to face-down and count the turn.
    ///
    /// Called by the render layer once its reveal delay elapses. Returns
    /// the pair that reverted, or `None` when there is no pending mismatch
    /// (the call is then a no-op).
    pub fn resolve_mismatch(&mut self) -> Option<(CardId, CardId)> {
        if self.phase != Phase::Resolving {
            return None;
        }

        let first = self.revealed[0];
        let second = self.revealed[1];
        self.set_face(first, Face::Hidden);
        self.set_face(second, Face::Hidden);
        self.revealed.clear();
        self.turns += 1;
        self.phase = Phase::Idle;

        Some((first, second))
    }

    fn set_face(&mut self, card: CardId, face: Face) {
        if let Some(c) = self.deck.get_mut(card) {
            c.face = face;
        }
    }
}
