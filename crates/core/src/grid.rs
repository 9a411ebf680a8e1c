//! Grid module - the dungeon board
//!
//! The grid is a `width x height` array of [`CellKind`] stored flat in
//! row-major order (`y * width + x`) for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Out-of-range lookups return `None` rather than panicking.

use crate::types::CellKind;

/// The dungeon board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid with every cell open.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![CellKind::Open; width as usize * height as usize],
        }
    }

    /// Create a grid whose outermost ring is wall and everything else open.
    pub fn bordered(width: u16, height: u16) -> Self {
        let mut grid = Self::new(width, height);
        grid.stamp_border();
        grid
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at (x, y); `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, cell: CellKind) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Wall check. Out-of-range positions count as wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), Some(CellKind::Open))
    }

    /// In bounds and open.
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(CellKind::Open))
    }

    /// Whether the half-open box `[x, x+w) x [y, y+h)` contains any wall.
    ///
    /// Cells of the box that fall outside the grid count as walls, so a box
    /// hanging off the edge always conflicts.
    pub fn has_conflict(&self, x: i32, y: i32, w: u16, h: u16) -> bool {
        (y..y + h as i32).any(|cy| (x..x + w as i32).any(|cx| self.is_wall(cx, cy)))
    }

    /// Mark row 0, the last row, column 0 and the last column as wall.
    pub fn stamp_border(&mut self) {
        let (w, h) = (self.width as i32, self.height as i32);
        for y in 0..h {
            self.set(0, y, CellKind::Wall);
            self.set(w - 1, y, CellKind::Wall);
        }
        for x in 0..w {
            self.set(x, 0, CellKind::Wall);
            self.set(x, h - 1, CellKind::Wall);
        }
    }

    /// Whether every cell of the outermost ring is wall.
    pub fn border_intact(&self) -> bool {
        let (w, h) = (self.width as i32, self.height as i32);
        (0..h).all(|y| self.is_wall(0, y) && self.is_wall(w - 1, y))
            && (0..w).all(|x| self.is_wall(x, 0) && self.is_wall(x, h - 1))
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(35, 35);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(34, 0), Some(34));
        assert_eq!(grid.index(0, 1), Some(35));
        assert_eq!(grid.index(34, 34), Some(35 * 35 - 1));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(35, 0), None);
        assert_eq!(grid.index(0, 35), None);
    }

    #[test]
    fn test_bordered_grid_has_wall_ring_and_open_interior() {
        let grid = Grid::bordered(6, 4);
        assert!(grid.border_intact());
        for y in 1..3 {
            for x in 1..5 {
                assert!(grid.is_open(x, y), "({}, {}) should be open", x, y);
            }
        }
        assert_eq!(grid.wall_count(), 2 * 6 + 2 * 2);
    }

    #[test]
    fn test_out_of_bounds_is_wall_not_open() {
        let mut grid = Grid::new(4, 4);
        assert!(grid.is_wall(-1, 0));
        assert!(!grid.is_open(4, 0));
        assert!(!grid.set(0, 4, CellKind::Wall));
    }

    #[test]
    fn test_has_conflict_checks_whole_box() {
        let mut grid = Grid::new(10, 10);
        assert!(!grid.has_conflict(0, 0, 10, 10));

        // A wall deep inside the box still conflicts, not just on its edge.
        grid.set(5, 5, CellKind::Wall);
        assert!(grid.has_conflict(2, 2, 6, 6));
        assert!(!grid.has_conflict(0, 0, 5, 5));
        assert!(grid.has_conflict(8, 8, 4, 4));
    }

    #[test]
    fn test_rows_iterate_in_order() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, CellKind::Wall);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1][2], CellKind::Wall);
        assert_eq!(rows[0][2], CellKind::Open);
    }
}
