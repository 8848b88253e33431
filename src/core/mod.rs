//! Core types: entities, RNG, configuration, and the clock seam.
//!
//! These are the building blocks the rest of the engine composes. Nothing
//! here knows about decks, rounds, or sessions.

pub mod clock;
pub mod config;
pub mod entity;
pub mod rng;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GameConfig;
pub use entity::{Entity, EntityId};
pub use rng::GameRng;
