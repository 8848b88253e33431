//! Game orchestration: the session controller.
//!
//! Ties the deck builder, match engine, scoring, and session persistence
//! together behind the event-driven surface the render layer consumes.

mod controller;

pub use controller::SessionController;
