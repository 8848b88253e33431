//! Cards and face state.
//!
//! A `Card` is one placement of an entity on the board. Cards live exactly
//! one round: the deck builder creates them, the match engine mutates their
//! face state, and the next deal replaces them wholesale.

use serde::{Deserialize, Serialize};

use crate::core::{Entity, EntityId};

/// Unique board-position identifier, dense `0..deck.len()`.
///
/// Two cards of the same pair carry the same `EntityId` but always
/// different `CardId`s, so "flip the same physical position twice" is
/// detectable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Board position index of this card.
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

/// Face state of a card on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Face-down, flippable.
    #[default]
    Hidden,
    /// Face-up, awaiting pair resolution.
    Revealed,
    /// Paired off; never reverts.
    Matched,
}

/// A placement of one entity on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Board position id, unique within the deck.
    pub id: CardId,

    /// The entity shown when this card is face-up.
    pub entity: Entity,

    /// Current face state.
    pub face: Face,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(id: CardId, entity: Entity) -> Self {
        Self {
            id,
            entity,
            face: Face::Hidden,
        }
    }

    /// The entity id this card matches on.
    #[must_use]
    pub fn entity_id(&self) -> EntityId {
        self.entity.id
    }

    /// Is this card face-down?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.face == Face::Hidden
    }

    /// Has this card been paired off?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.face == Face::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(id: u32) -> Entity {
        Entity::new(EntityId::new(id), format!("mon-{id}"), format!("sprites/{id}.png"))
    }

    #[test]
    fn test_card_id() {
        let id = CardId::new(3);
        assert_eq!(id.raw(), 3);
        assert_eq!(id.index(), 3);
        assert_eq!(format!("{}", id), "Card(3)");
    }

    #[test]
    fn test_card_starts_hidden() {
        let card = Card::new(CardId::new(0), entity(25));

        assert!(card.is_hidden());
        assert!(!card.is_matched());
        assert_eq!(card.face, Face::Hidden);
        assert_eq!(card.entity_id(), EntityId::new(25));
    }

    #[test]
    fn test_face_default() {
        assert_eq!(Face::default(), Face::Hidden);
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(CardId::new(1), entity(4));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
