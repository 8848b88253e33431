//! Events emitted across the render/caller boundary.
//!
//! The controller pushes events onto a queue; the caller drains it after
//! each call and updates the view. Events are the only channel through
//! which the engine's transient state reaches the outside.

use serde::{Deserialize, Serialize};

use crate::deck::{CardId, Face};
use crate::scoring::Rating;

/// Error kinds surfaced across the boundary.
///
/// Both degrade to a retryable state: the round stays unstarted and
/// `start_round` may be invoked again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// The fetched pool cannot fill the requested board.
    InsufficientPool,
    /// The pool fetch itself failed (transient).
    Fetch,
}

/// Something the caller should react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A deck was dealt; the board can render. Cards come from
    /// `SessionController::deck`.
    DeckReady {
        generation: u8,
        board_size: usize,
    },

    /// A card changed face state.
    CardFlipped { card: CardId, face: Face },

    /// A pair comparison completed; the persisted turn counters advanced.
    TurnRecorded { turns: u32 },

    /// A mismatched pair is face-up. The caller shows both faces for
    /// `delay_ms`, then calls `resolve_mismatch`.
    MismatchPending {
        first: CardId,
        second: CardId,
        delay_ms: u64,
    },

    /// A power-up fired. The caller reveals `revealed` for `duration_ms`,
    /// then re-hides them; engine face state is untouched.
    PowerUpUsed {
        revealed: Vec<CardId>,
        duration_ms: u64,
        remaining: u32,
    },

    /// All cards matched. `elapsed_ms` is the round duration.
    RoundWon {
        turns: u32,
        elapsed_ms: u64,
        rating: Rating,
    },

    /// The session moved to the next generation. A new round starts once
    /// the player picks a board size.
    GenerationAdvanced { generation: u8 },

    /// The final generation was already cleared; there is nothing left to
    /// advance to.
    GameCompleted,

    /// A failure the caller may surface or retry.
    Error { kind: ErrorKind },
}
