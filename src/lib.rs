//! TUI Dungeon (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_dungeon::{core, input, term, types}`
//! and adds the runtime [`config`].

pub mod config;

pub use tui_dungeon_core as core;
pub use tui_dungeon_input as input;
pub use tui_dungeon_term as term;
pub use tui_dungeon_types as types;

pub use config::GameConfig;
