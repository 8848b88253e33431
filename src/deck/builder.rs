//! Deck construction.
//!
//! ## Algorithm
//!
//! 1. Collapse the pool to distinct entities (first occurrence wins).
//! 2. Draw `board_size / 2` of them uniformly without replacement, via a
//!    shrinking index pool.
//! 3. Duplicate the chosen set into pairs, Fisher–Yates shuffle the
//!    combined list, and assign each position a fresh `CardId`.
//!
//! The same pool yields different decks on repeated calls unless the RNG
//! is seeded.

use rustc_hash::FxHashSet;

use super::card::{Card, CardId};
use crate::core::{Entity, EntityId, GameRng};
use crate::error::GameError;

/// The shuffled, paired card sequence for one round.
///
/// ## Invariant
///
/// Length equals the requested board size; exactly `len / 2` distinct
/// entities, each appearing exactly twice; order is the shuffled display
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty? (Never true for a built deck.)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in display order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by board position.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Count of cards already paired off.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Have all cards been paired off?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched())
    }

    /// Board positions currently face-down.
    #[must_use]
    pub fn hidden_cards(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.is_hidden())
            .map(|c| c.id)
            .collect()
    }

    /// The distinct entities on the board, one per pair, in first-appearance
    /// order. Used by the win screen's "caught" list.
    #[must_use]
    pub fn distinct_entities(&self) -> Vec<&Entity> {
        let mut seen: FxHashSet<EntityId> = FxHashSet::default();
        self.cards
            .iter()
            .filter(|c| seen.insert(c.entity_id()))
            .map(|c| &c.entity)
            .collect()
    }
}

/// Build a shuffled, paired deck from an entity pool.
///
/// `board_size` must be even, nonzero, and at most twice the number of
/// distinct entities in `pool`. Duplicate pool entries (by id) collapse
/// before sampling, so a provider that repeats an entity cannot produce a
/// board with four copies of it.
///
/// # Errors
///
/// - [`GameError::InvalidBoardSize`] for a zero or odd size.
/// - [`GameError::InsufficientPool`] when the pool cannot fill the board.
pub fn build_deck(
    pool: &[Entity],
    board_size: usize,
    rng: &mut GameRng,
) -> Result<Deck, GameError> {
    if board_size == 0 || board_size % 2 != 0 {
        return Err(GameError::InvalidBoardSize(board_size));
    }

    // First occurrence wins so sampling stays uniform over distinct ids.
    let mut seen: FxHashSet<EntityId> = FxHashSet::default();
    let mut distinct: Vec<&Entity> = Vec::with_capacity(pool.len());
    for entity in pool {
        if seen.insert(entity.id) {
            distinct.push(entity);
        }
    }

    let pairs = board_size / 2;
    if pairs > distinct.len() {
        return Err(GameError::InsufficientPool {
            requested: board_size,
            available: distinct.len(),
        });
    }

    let chosen = rng.sample_indices(distinct.len(), pairs);

    let mut faces: Vec<&Entity> = Vec::with_capacity(board_size);
    for idx in chosen {
        faces.push(distinct[idx]);
        faces.push(distinct[idx]);
    }
    rng.shuffle(&mut faces);

    let cards = faces
        .into_iter()
        .enumerate()
        .map(|(pos, entity)| Card::new(CardId::new(pos as u32), entity.clone()))
        .collect();

    Ok(Deck { cards })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn pool(count: u32) -> Vec<Entity> {
        (1..=count)
            .map(|i| Entity::new(EntityId::new(i), format!("mon-{i}"), format!("sprites/{i}.png")))
            .collect()
    }

    fn entity_counts(deck: &Deck) -> FxHashMap<EntityId, usize> {
        let mut counts = FxHashMap::default();
        for card in deck.cards() {
            *counts.entry(card.entity_id()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_deck_length_and_pairing() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&pool(20), 12, &mut rng).unwrap();

        assert_eq!(deck.len(), 12);

        let counts = entity_counts(&deck);
        assert_eq!(counts.len(), 6, "6 distinct entities on a 12-card board");
        assert!(counts.values().all(|&n| n == 2), "each entity exactly twice");
    }

    #[test]
    fn test_card_ids_are_positions() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&pool(10), 8, &mut rng).unwrap();

        for (pos, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.id.index(), pos);
            assert!(card.is_hidden());
        }
    }

    #[test]
    fn test_insufficient_pool() {
        let mut rng = GameRng::new(42);

        let err = build_deck(&pool(5), 12, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientPool {
                requested: 12,
                available: 5
            }
        );

        // Exactly enough is fine.
        assert!(build_deck(&pool(6), 12, &mut rng).is_ok());
    }

    #[test]
    fn test_invalid_board_size() {
        let mut rng = GameRng::new(42);

        assert_eq!(
            build_deck(&pool(10), 0, &mut rng).unwrap_err(),
            GameError::InvalidBoardSize(0)
        );
        assert_eq!(
            build_deck(&pool(10), 7, &mut rng).unwrap_err(),
            GameError::InvalidBoardSize(7)
        );
    }

    #[test]
    fn test_duplicate_pool_entries_collapse() {
        let mut rng = GameRng::new(42);

        // 4 distinct entities, each listed three times.
        let mut repeated = Vec::new();
        for _ in 0..3 {
            repeated.extend(pool(4));
        }

        let deck = build_deck(&repeated, 8, &mut rng).unwrap();
        let counts = entity_counts(&deck);
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&n| n == 2));

        // And the duplicates don't inflate the distinct count.
        let err = build_deck(&repeated, 12, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientPool {
                requested: 12,
                available: 4
            }
        );
    }

    #[test]
    fn test_seeded_builds_are_reproducible() {
        let entities = pool(20);

        let deck1 = build_deck(&entities, 16, &mut GameRng::new(7)).unwrap();
        let deck2 = build_deck(&entities, 16, &mut GameRng::new(7)).unwrap();
        assert_eq!(deck1, deck2);
    }

    #[test]
    fn test_different_seeds_differ() {
        let entities = pool(20);

        let deck1 = build_deck(&entities, 16, &mut GameRng::new(1)).unwrap();
        let deck2 = build_deck(&entities, 16, &mut GameRng::new(2)).unwrap();
        assert_ne!(deck1, deck2);
    }

    #[test]
    fn test_distinct_entities_order() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&pool(8), 8, &mut rng).unwrap();

        let distinct = deck.distinct_entities();
        assert_eq!(distinct.len(), 4);

        // First-appearance order matches the board.
        let first = deck.cards()[0].entity_id();
        assert_eq!(distinct[0].id, first);
    }

    #[test]
    fn test_hidden_cards_tracks_faces() {
        let mut rng = GameRng::new(42);
        let deck = build_deck(&pool(6), 4, &mut rng).unwrap();

        assert_eq!(deck.hidden_cards().len(), 4);
        assert_eq!(deck.matched_count(), 0);
        assert!(!deck.all_matched());
    }
}
