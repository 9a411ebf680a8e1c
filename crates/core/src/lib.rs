//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains board generation, movement and the viewport rules.
//! It has **zero dependencies** on terminal I/O or input delivery, making it:
//!
//! - **Deterministic**: Same seed produces the identical dungeon
//! - **Testable**: Every generation property can be checked across seeds
//! - **Portable**: Can drive a terminal, a GUI or a headless harness
//!
//! # Module Structure
//!
//! - [`grid`]: Flat row-major board of wall/open cells
//! - [`generate`]: Lattice room placement, outline stamping, player start
//! - [`movement`]: One-cell moves with wall collision
//! - [`viewport`]: Scroll offset derived from the player position
//! - [`session`]: The authoritative player position on a generated board
//! - [`rng`]: Seeded LCG
//! - [`snapshot`]: Serializable view of a session for renderers
//!
//! # Example
//!
//! ```
//! use tui_dungeon_core::GameSession;
//! use tui_dungeon_types::Direction;
//!
//! let mut session = GameSession::reference(12345).unwrap();
//! let before = session.player();
//!
//! if session.apply(Direction::Down) {
//!     assert_eq!(session.player().y, before.y + 1);
//! } else {
//!     assert_eq!(session.player(), before);
//! }
//!
//! let scroll = session.scroll_offset();
//! assert!(scroll.scroll_x <= 470 && scroll.scroll_y <= 470);
//! ```

pub mod generate;
pub mod grid;
pub mod movement;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod viewport;

pub use tui_dungeon_types as types;

// Re-export commonly used types for convenience
pub use generate::{stamp_room, BoardGenerator, GenerateError, GeneratedBoard, PlacedRoom};
pub use grid::Grid;
pub use movement::attempt_move;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snapshot::{BoardSnapshot, CellDescriptor, PlayerSnapshot};
pub use viewport::{axis_offset, compute_offset, ScrollOffset, ViewportMetrics};
