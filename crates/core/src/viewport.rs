//! Viewport offset - keeps the player roughly centred in the visible window.
//!
//! The offset is derived, never stored: callers recompute it from the player
//! position whenever they need it. Units are whatever the caller measures
//! cells and viewport in (pixels in the reference configuration, terminal
//! columns/rows in the TUI).

use serde::Serialize;

use crate::types::{Pos, CELL_PX, VIEWPORT_PX};

/// Scroll position of the visible window's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollOffset {
    pub scroll_x: u32,
    pub scroll_y: u32,
}

/// Offset along one axis.
///
/// `cell * cell_size - viewport / 2`, clamped to `[0, board - viewport]`.
/// A board no larger than the viewport never scrolls.
pub fn axis_offset(cell: i32, cell_size: u32, viewport: u32, board: u32) -> u32 {
    let raw = cell as i64 * cell_size as i64 - (viewport / 2) as i64;
    let max = board.saturating_sub(viewport) as i64;
    raw.clamp(0, max) as u32
}

/// Offset for a square viewport.
pub fn compute_offset(
    position: Pos,
    cell_size: u32,
    viewport_size: u32,
    board_width: u32,
    board_height: u32,
) -> ScrollOffset {
    ScrollOffset {
        scroll_x: axis_offset(position.x, cell_size, viewport_size, board_width),
        scroll_y: axis_offset(position.y, cell_size, viewport_size, board_height),
    }
}

/// Cell and viewport sizes for one presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    pub cell_w: u32,
    pub cell_h: u32,
    pub viewport_w: u32,
    pub viewport_h: u32,
}

impl ViewportMetrics {
    pub fn new(cell_w: u32, cell_h: u32, viewport_w: u32, viewport_h: u32) -> Self {
        Self {
            cell_w,
            cell_h,
            viewport_w,
            viewport_h,
        }
    }

    /// 42px cells in a 1000x1000px window.
    pub fn reference() -> Self {
        Self::new(CELL_PX, CELL_PX, VIEWPORT_PX, VIEWPORT_PX)
    }

    /// Offset for a board measured in cells.
    pub fn offset(&self, position: Pos, board_cells_w: u16, board_cells_h: u16) -> ScrollOffset {
        ScrollOffset {
            scroll_x: axis_offset(
                position.x,
                self.cell_w,
                self.viewport_w,
                board_cells_w as u32 * self.cell_w,
            ),
            scroll_y: axis_offset(
                position.y,
                self.cell_h,
                self.viewport_h,
                board_cells_h as u32 * self.cell_h,
            ),
        }
    }
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::reference()
    }
}
