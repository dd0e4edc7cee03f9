//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Only key presses
//! matter: the engine is turn-based, so there is no auto-repeat handling here.

pub mod map;

pub use kana_merge_types as types;

pub use map::{handle_key_event, should_quit};
