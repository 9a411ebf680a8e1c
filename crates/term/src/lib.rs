//! Terminal front end.
//!
//! Renders a session into a simple framebuffer and flushes it to the terminal
//! with crossterm. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Treat the terminal as the scrollable window onto the board
//! - Compensate for glyph aspect ratio (2 columns per board cell)

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_dungeon_core as core;
pub use tui_dungeon_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
