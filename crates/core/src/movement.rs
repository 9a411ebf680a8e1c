//! Movement and collision.

use crate::grid::Grid;
use crate::types::{Direction, Pos};

/// Step one cell in `dir` unless the target is a wall.
///
/// A blocked move returns `current` unchanged. Off-grid targets count as
/// wall, though with an intact border they are never reached.
pub fn attempt_move(grid: &Grid, current: Pos, dir: Direction) -> Pos {
    let candidate = current.step(dir);
    if grid.is_wall(candidate.x, candidate.y) {
        current
    } else {
        candidate
    }
}
