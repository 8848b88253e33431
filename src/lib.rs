//! # memodex
//!
//! A memory-matching game session engine with generation-based
//! progression.
//!
//! ## Design Principles
//!
//! 1. **Engine, not app**: rendering, the creature data source, audio, and
//!    the storage backend are external collaborators behind traits and
//!    events. The crate owns the invariants: pairing correctness, turn
//!    counting, and no-regression across reloads.
//!
//! 2. **Caller-driven time**: pool fetches and reveal delays are deferred
//!    continuations the caller completes (`supply_pool`,
//!    `resolve_mismatch`). Nothing blocks, nothing spawns timers, and
//!    every sequence is synchronously simulable in tests.
//!
//! 3. **Persist after every mutation**: the session record is saved on
//!    every turn and transition, so a reload resumes exactly where play
//!    stopped. Loads are version-gated and degrade to defaults.
//!
//! ## Modules
//!
//! - `core`: entities, RNG, configuration, clock seam
//! - `deck`: cards, face state, deck construction
//! - `engine`: the per-round turn/match state machine
//! - `events`: the render/caller boundary
//! - `provider`: the pool fetch protocol (tokens, stale discard)
//! - `session`: the persisted record and storage seam
//! - `game`: the session controller
//! - `scoring`: turn ratings and time formatting
//! - `error`: failure taxonomy

pub mod core;
pub mod deck;
pub mod engine;
pub mod error;
pub mod events;
pub mod game;
pub mod provider;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Clock, Entity, EntityId, FixedClock, GameConfig, GameRng, SystemClock};

pub use crate::deck::{build_deck, Card, CardId, Deck, Face};

pub use crate::engine::{FlipOutcome, MatchEngine, Phase};

pub use crate::error::GameError;

pub use crate::events::{ErrorKind, GameEvent};

pub use crate::game::SessionController;

pub use crate::provider::{FetchError, PoolRequest, RequestToken};

pub use crate::scoring::{format_elapsed, rate, Rating};

pub use crate::session::{load_session, save_session, MemoryStore, Session, SessionStore};
