use serde::Serialize;

use crate::grid::Grid;
use crate::types::Pos;
use crate::viewport::ScrollOffset;

/// What a rendering collaborator needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDescriptor {
    pub is_wall: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PlayerSnapshot {
    pub x: i32,
    pub y: i32,
}

impl From<Pos> for PlayerSnapshot {
    fn from(value: Pos) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything the presentation layer consumes after an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    pub moves: u32,
    /// Rows top to bottom.
    pub cells: Vec<Vec<CellDescriptor>>,
    pub player: PlayerSnapshot,
    pub scroll: ScrollOffset,
}

impl BoardSnapshot {
    pub fn capture(grid: &Grid, player: Pos, scroll: ScrollOffset, seed: u32, moves: u32) -> Self {
        let cells = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|c| CellDescriptor {
                        is_wall: c.is_wall(),
                    })
                    .collect()
            })
            .collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            seed,
            moves,
            cells,
            player: player.into(),
            scroll,
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<CellDescriptor> {
        if x < 0 || y < 0 {
            return None;
        }
        self.cells.get(y as usize)?.get(x as usize).copied()
    }

    pub fn player_pos(&self) -> Pos {
        Pos::new(self.player.x, self.player.y)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
