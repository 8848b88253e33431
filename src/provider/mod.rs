//! Data provider seam: the pool fetch protocol.
//!
//! The remote source of entities (the creature API) is an external
//! collaborator. The engine never fetches; it emits a [`PoolRequest`] and
//! waits for the caller to complete it, identifying completions by token
//! so stale results are discarded.

mod pool;

pub use pool::{FetchError, PoolRequest, RequestToken};
