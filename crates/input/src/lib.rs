//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Columns has
//! no auto-repeat rules of its own: one key press is one action.

pub mod map;

pub use columns_types as types;

pub use map::{handle_key_event, should_quit};
