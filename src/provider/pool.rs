//! Pool fetch protocol types.
//!
//! Fetching is asynchronous from the engine's point of view but owned by
//! the caller: the controller issues a [`PoolRequest`], the caller fetches
//! however it likes (HTTP, cache, fixture), and completes the request via
//! `supply_pool` with the request's token. Tokens are monotonic, so a
//! completion racing a newer request identifies itself as stale and is
//! dropped - a slow fetch for generation 2 can never clobber a board
//! already re-requested for generation 3.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monotonically increasing id tying a pool fetch to the round that
/// issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(pub u64);

impl RequestToken {
    /// Create a new request token.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Request({})", self.0)
    }
}

/// A pool fetch the caller must perform.
///
/// Emitted by `start_round`; completed by `supply_pool` with the same
/// token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolRequest {
    /// Token the completion must echo back.
    pub token: RequestToken,

    /// Generation whose entity pool is wanted.
    pub generation: u8,

    /// Board size the round will be dealt at.
    pub board_size: usize,
}

/// Transient failure fetching an entity pool.
///
/// Surfaced to the caller through the event stream; the round stays
/// unstarted and `start_round` may simply be invoked again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("pool fetch failed: {reason}")]
pub struct FetchError {
    /// Human-readable cause, e.g. the transport error text.
    pub reason: String,
}

impl FetchError {
    /// Create a fetch error from any displayable cause.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        assert_eq!(format!("{}", RequestToken::new(3)), "Request(3)");
        assert_eq!(RequestToken::new(3).raw(), 3);
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::new("503 from upstream");
        assert_eq!(format!("{}", err), "pool fetch failed: 503 from upstream");
    }

    #[test]
    fn test_request_serialization() {
        let request = PoolRequest {
            token: RequestToken::new(1),
            generation: 2,
            board_size: 12,
        };
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: PoolRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, deserialized);
    }
}
