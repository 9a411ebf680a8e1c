//! Terminal input module (session-facing).
//!
//! Maps `crossterm` key events onto the four movement directions. The mapping
//! is stateless: it never holds a copy of the player position, so whichever
//! loop owns the session always moves from the current position.

pub mod map;

pub use tui_dungeon_types as types;

pub use map::{direction_for, handle_key_event, should_quit};
