//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::GameAction`]s
//! and pointer hits. Pointer hits stay in terminal cells; the renderer's
//! screen mapping turns them into logical positions.

pub mod map;

pub use tui_mines_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit, PointerHit};
