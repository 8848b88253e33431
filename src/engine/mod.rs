//! Match engine: the per-round turn/match state machine.
//!
//! ## Key Types
//!
//! - `Phase`: Idle | OneRevealed | Resolving | RoundWon
//! - `FlipOutcome`: what a flip did (including `Ignored` for rejected input)
//! - `MatchEngine`: owns the deck's transient face state for one round
//!
//! The engine is deliberately timer-free: mismatches park in `Resolving`
//! until the caller's delay fires and calls `resolve_mismatch`, which makes
//! every sequence synchronously simulable in tests.

mod machine;

pub use machine::{FlipOutcome, MatchEngine, Phase};
