//! Game configuration.
//!
//! Callers configure the engine at startup rather than patching constants:
//! how many generations exist, which board sizes are playable, and the
//! timer durations the render layer must schedule. The engine never
//! hardcodes these - defaults mirror the shipped game.

use serde::{Deserialize, Serialize};

/// Engine-wide configuration, fixed for the lifetime of a controller.
///
/// ## Defaults
///
/// - 9 generations
/// - board sizes 12 (easy) and 16 (hard)
/// - 1000 ms mismatch reveal, 1500 ms power-up reveal
///
/// Timer durations are contracts for the caller: the engine exposes
/// "start a delay of this length, then call back" and never runs timers
/// itself, so tests can resolve delays synchronously.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Session format version. A persisted session recorded under a
    /// different version is discarded on load.
    pub session_version: String,

    /// Number of generations to clear, ordered 1..=total.
    pub total_generations: u8,

    /// Playable board sizes (card counts). Must all be even.
    pub board_sizes: Vec<usize>,

    /// How long mismatched cards stay revealed before the caller
    /// invokes `resolve_mismatch`.
    pub mismatch_delay_ms: u64,

    /// How long a power-up keeps hidden cards revealed.
    pub power_up_reveal_ms: u64,

    /// Storage key the session record persists under.
    pub session_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session_version: "1.5".to_string(),
            total_generations: 9,
            board_sizes: vec![12, 16],
            mismatch_delay_ms: 1000,
            power_up_reveal_ms: 1500,
            session_key: "gameState".to_string(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with the shipped-game defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of generations.
    #[must_use]
    pub fn with_generations(mut self, total: u8) -> Self {
        self.total_generations = total;
        self
    }

    /// Set the playable board sizes.
    #[must_use]
    pub fn with_board_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.board_sizes = sizes.into();
        self
    }

    /// Set the mismatch reveal duration.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Set the power-up reveal duration.
    #[must_use]
    pub fn with_power_up_reveal_ms(mut self, ms: u64) -> Self {
        self.power_up_reveal_ms = ms;
        self
    }

    /// Check whether a board size is playable under this configuration.
    ///
    /// A size qualifies when it is nonzero, even, and listed in
    /// `board_sizes`.
    #[must_use]
    pub fn is_playable_size(&self, board_size: usize) -> bool {
        board_size > 0 && board_size % 2 == 0 && self.board_sizes.contains(&board_size)
    }

    /// Check whether a generation ordinal is the last one.
    #[must_use]
    pub fn is_final_generation(&self, generation: u8) -> bool {
        generation >= self.total_generations
    }
}
