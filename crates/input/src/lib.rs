//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Terminal
//! auto-repeat drives held keys; there is no DAS/ARR timing layer.

pub mod map;

pub use tui_bricks_types as types;

pub use map::{handle_key_event, should_quit};
