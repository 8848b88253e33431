//! Session persistence: the progress record and its storage seam.
//!
//! ## Key Types
//!
//! - `Session`: the persisted cross-reload progress record (JSON,
//!   camelCase fields, version-gated load)
//! - `SessionStore`: opaque get/set/clear string storage trait
//! - `MemoryStore`: in-memory implementation, doubles as the test store

pub mod record;
pub mod store;

pub use record::{load_session, save_session, Session};
pub use store::{MemoryStore, SessionStore};
