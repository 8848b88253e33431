//! Event types crossing the render/caller boundary.

mod event;

pub use event::{ErrorKind, GameEvent};
