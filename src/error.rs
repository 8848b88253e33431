//! Error taxonomy for the session engine.
//!
//! Failures here are never fatal to the process: every variant either
//! aborts a single call with no state mutation, or degrades to a
//! retryable/default state. Transient fetch failures live in
//! [`crate::provider::FetchError`] since they originate outside the core.

use thiserror::Error;

/// Errors surfaced by deck construction and controller operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The entity pool cannot fill the requested board.
    ///
    /// A board of `requested` cards needs `requested / 2` distinct
    /// entities; the pool only offered `available`.
    #[error("pool of {available} distinct entities cannot fill a board of {requested} cards")]
    InsufficientPool { requested: usize, available: usize },

    /// Board size is zero, odd, or not one of the configured sizes.
    #[error("board size {0} is not playable")]
    InvalidBoardSize(usize),

    /// Generation advancement requires the current round to be won first.
    #[error("cannot advance generation before the round is won")]
    RoundNotWon,

    /// No power-ups left to spend.
    #[error("no power-ups remaining")]
    NoPowerUps,

    /// The operation needs a dealt deck and an unfinished round.
    #[error("no active round")]
    NoActiveRound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InsufficientPool {
            requested: 16,
            available: 5,
        };
        assert_eq!(
            format!("{}", err),
            "pool of 5 distinct entities cannot fill a board of 16 cards"
        );

        assert_eq!(
            format!("{}", GameError::InvalidBoardSize(7)),
            "board size 7 is not playable"
        );
    }
}
