//! Entity model: the creatures that become card faces.
//!
//! Entities are owned by the external data provider; the engine only reads
//! them. An `EntityId` is the provider's stable identifier, so two cards
//! match exactly when their entity ids are equal.

use serde::{Deserialize, Serialize};

/// Stable identifier for an entity in the provider's data set.
///
/// Matching compares entity ids, never names or images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create a new entity ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for EntityId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// An item from the fetched data pool: id, display name, image reference.
///
/// Immutable once fetched. The deck builder clones entities into both cards
/// of a pair; everything downstream treats them as read-only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Provider-assigned identifier.
    pub id: EntityId,

    /// Display name shown on the win screen.
    pub name: String,

    /// Image reference (sprite URL or asset key) for the card face.
    pub image: String,
}

impl Entity {
    /// Create a new entity.
    #[must_use]
    pub fn new(id: EntityId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id() {
        let id = EntityId::new(25);
        assert_eq!(id.raw(), 25);
        assert_eq!(EntityId::from(25u32), id);
        assert_eq!(format!("{}", id), "Entity(25)");
    }

    #[test]
    fn test_entity_new() {
        let entity = Entity::new(EntityId::new(7), "squirtle", "sprites/7.png");
        assert_eq!(entity.id, EntityId::new(7));
        assert_eq!(entity.name, "squirtle");
        assert_eq!(entity.image, "sprites/7.png");
    }

    #[test]
    fn test_serialization() {
        let entity = Entity::new(EntityId::new(1), "bulbasaur", "sprites/1.png");
        let json = serde_json::to_string(&entity).unwrap();
        let deserialized: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(entity, deserialized);
    }
}
