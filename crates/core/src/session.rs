//! Game session - the authoritative player position on a fixed board.
//!
//! The session owns the generated grid and never mutates it. The player
//! position is the only mutable state and changes only through accepted
//! moves; the scroll offset is derived from it on demand.

use crate::generate::{BoardGenerator, GenerateError, GeneratedBoard};
use crate::grid::Grid;
use crate::movement::attempt_move;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;
use crate::types::{Direction, Pos, RoomSpec, ROOM_CATALOG};
use crate::viewport::{ScrollOffset, ViewportMetrics};

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    player: Pos,
    seed: u32,
    moves: u32,
    blocked: u32,
}

impl GameSession {
    /// Start a session on an already generated board.
    pub fn new(board: GeneratedBoard, seed: u32) -> Self {
        Self {
            grid: board.grid,
            player: board.start,
            seed,
            moves: 0,
            blocked: 0,
        }
    }

    /// Generate a board from `catalog` and start on it.
    pub fn generate(
        generator: &BoardGenerator,
        catalog: &[RoomSpec],
        seed: u32,
    ) -> Result<Self, GenerateError> {
        let mut rng = SimpleRng::new(seed);
        let board = generator.generate(catalog, &mut rng)?;
        Ok(Self::new(board, seed))
    }

    /// The reference 35x35 board with the built-in room catalog.
    pub fn reference(seed: u32) -> Result<Self, GenerateError> {
        Self::generate(&BoardGenerator::default(), &ROOM_CATALOG, seed)
    }

    /// Start on a hand-built grid. `None` if `start` is not an open cell.
    pub fn from_grid(grid: Grid, start: Pos) -> Option<Self> {
        if !grid.is_open(start.x, start.y) {
            return None;
        }
        Some(Self {
            grid,
            player: start,
            seed: 0,
            moves: 0,
            blocked: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Accepted moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Moves rejected by a wall so far.
    pub fn blocked(&self) -> u32 {
        self.blocked
    }

    /// Try to move the player one cell. Returns whether the position changed.
    pub fn apply(&mut self, dir: Direction) -> bool {
        let next = attempt_move(&self.grid, self.player, dir);
        if next == self.player {
            self.blocked = self.blocked.saturating_add(1);
            return false;
        }
        self.player = next;
        self.moves = self.moves.saturating_add(1);
        true
    }

    /// Scroll offset in the reference pixel configuration.
    pub fn scroll_offset(&self) -> ScrollOffset {
        self.offset_for(ViewportMetrics::reference())
    }

    /// Scroll offset for an arbitrary surface, e.g. a resized terminal.
    pub fn offset_for(&self, metrics: ViewportMetrics) -> ScrollOffset {
        metrics.offset(self.player, self.grid.width(), self.grid.height())
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(
            &self.grid,
            self.player,
            self.scroll_offset(),
            self.seed,
            self.moves,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellKind;

    #[test]
    fn test_reference_session_starts_on_open_cell() {
        for seed in 1..=20 {
            let session = GameSession::reference(seed).unwrap();
            let p = session.player();
            assert!(session.grid().is_open(p.x, p.y), "seed {}", seed);
            assert_eq!(session.seed(), seed);
        }
    }

    #[test]
    fn test_apply_counts_moves_and_bumps() {
        let mut session = GameSession::from_grid(Grid::bordered(35, 35), Pos::new(1, 1)).unwrap();

        assert!(!session.apply(Direction::Up));
        assert_eq!(session.player(), Pos::new(1, 1));
        assert!(session.apply(Direction::Down));
        assert_eq!(session.player(), Pos::new(1, 2));
        assert_eq!(session.moves(), 1);
        assert_eq!(session.blocked(), 1);
    }

    #[test]
    fn test_from_grid_rejects_wall_start() {
        let mut grid = Grid::bordered(5, 5);
        grid.set(2, 2, CellKind::Wall);
        assert!(GameSession::from_grid(grid.clone(), Pos::new(2, 2)).is_none());
        assert!(GameSession::from_grid(grid, Pos::new(0, 0)).is_none());
    }

    #[test]
    fn test_scroll_follows_player() {
        let mut session = GameSession::from_grid(Grid::bordered(35, 35), Pos::new(1, 17)).unwrap();
        assert_eq!(session.scroll_offset().scroll_x, 0);
        for _ in 0..33 {
            session.apply(Direction::Right);
        }
        assert_eq!(session.player(), Pos::new(33, 17));
        assert_eq!(session.scroll_offset().scroll_x, 470);
        assert_eq!(session.scroll_offset().scroll_y, 17 * 42 - 500);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut session = GameSession::reference(5).unwrap();
        session.apply(Direction::Down);
        let snap = session.snapshot();

        assert_eq!(snap.player_pos(), session.player());
        assert_eq!(snap.scroll, session.scroll_offset());
        assert_eq!(snap.moves, session.moves());
        assert_eq!(snap.cells.len(), 35);
        for (y, row) in snap.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                assert_eq!(cell.is_wall, session.grid().is_wall(x as i32, y as i32));
            }
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let session = GameSession::from_grid(Grid::bordered(3, 3), Pos::new(1, 1)).unwrap();
        let json = session.snapshot().to_json().unwrap();
        assert!(json.contains(r#""isWall":true"#));
        assert!(json.contains(r#""isWall":false"#));
        assert!(json.contains(r#""player":{"x":1,"y":1}"#));
        assert!(json.contains(r#""scroll":{"scrollX":0,"scrollY":0}"#));
    }
}
