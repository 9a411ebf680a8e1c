//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (generation, session logic, terminal rendering).
//!
//! # Board Dimensions
//!
//! The reference board is 35x35 cells: a 32x32 room area, one walkway
//! column/row and a two-cell border budget.
//!
//! - **Width**: 35 columns (indexed 0-34)
//! - **Height**: 35 rows (indexed 0-34)
//! - Row 0, row 34, column 0 and column 34 are always wall
//!
//! # Viewport Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CELL_PX` | 42 | Edge length of one cell in pixels |
//! | `VIEWPORT_PX` | 1000 | Edge length of the visible window in pixels |
//!
//! # Room Catalog
//!
//! Rooms are placed in catalog order. Earlier rooms constrain later ones, so
//! the big rooms come first.
//!
//! | Room | Size | Door |
//! |------|------|------|
//! | 0 | 16x16 | (8, 15) |
//! | 1 | 16x8 | (8, 7) |
//! | 2 | 16x8 | (8, 7) |
//! | 3 | 8x8 | (4, 7) |
//! | 4 | 8x8 | (4, 7) |
//!
//! # Examples
//!
//! ```
//! use tui_dungeon_types::{Direction, Pos, ROOM_CATALOG, BOARD_WIDTH};
//!
//! let pos = Pos::new(1, 1);
//! assert_eq!(pos.step(Direction::Down), Pos::new(1, 2));
//!
//! assert_eq!(Direction::from_str("left"), Some(Direction::Left));
//! assert_eq!(ROOM_CATALOG.len(), 5);
//! assert_eq!(BOARD_WIDTH, 35);
//! ```

/// Board width in cells (35 columns)
pub const BOARD_WIDTH: u16 = 35;

/// Board height in cells (35 rows)
pub const BOARD_HEIGHT: u16 = 35;

/// Cell edge length in pixels
pub const CELL_PX: u32 = 42;

/// Visible viewport edge length in pixels
pub const VIEWPORT_PX: u32 = 1000;

/// Upper bound on the number of rooms in one catalog
pub const MAX_ROOMS: usize = 16;

/// Random samples tried per room (and for the player) before the
/// deterministic scan takes over.
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

/// Cells reserved around the room lattice: two border cells plus one walkway.
pub const LATTICE_MARGIN: u16 = 3;

/// The reference room catalog.
pub const ROOM_CATALOG: [RoomSpec; 5] = [
    RoomSpec::with_door(16, 16, 8, 15),
    RoomSpec::with_door(16, 8, 8, 7),
    RoomSpec::with_door(16, 8, 8, 7),
    RoomSpec::with_door(8, 8, 4, 7),
    RoomSpec::with_door(8, 8, 4, 7),
];


/// What occupies one grid position.
///
/// Every cell is exactly one of these; there is no "unset" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    #[default]
    Open,
    Wall,
}

impl CellKind {
    pub fn is_wall(self) -> bool {
        self == CellKind::Wall
    }
}

/// Integer grid coordinates, `x` left to right and `y` top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one cell away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four movement directions. There are no diagonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit `(dx, dy)` for this direction. Up decreases `y`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_dungeon_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Door offset relative to a room's top-left anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Door {
    pub x: u16,
    pub y: u16,
}

impl Door {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Template for one room: its footprint and an optional door.
///
/// The footprint spans `width x height` cells from the anchor. The wall
/// outline is drawn one cell in from the anchor's top and left edges, so the
/// anchor row and column stay open as walkway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomSpec {
    pub width: u16,
    pub height: u16,
    pub door: Option<Door>,
}

impl RoomSpec {
    /// A closed room with no door.
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            door: None,
        }
    }

    pub const fn with_door(width: u16, height: u16, door_x: u16, door_y: u16) -> Self {
        Self {
            width,
            height,
            door: Some(Door::new(door_x, door_y)),
        }
    }

    /// Whether `door` lies on this room's wall outline.
    ///
    /// The outline spans offsets `1..=width-1` horizontally and
    /// `1..=height-1` vertically.
    pub fn door_on_outline(&self, door: Door) -> bool {
        let (x, y) = (door.x, door.y);
        let right = self.width.saturating_sub(1);
        let bottom = self.height.saturating_sub(1);
        let within = (1..=right).contains(&x) && (1..=bottom).contains(&y);
        within && (x == 1 || x == right || y == 1 || y == bottom)
    }
}
