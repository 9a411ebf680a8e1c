//! Board generation - rooms on a lattice, walkways between them
//!
//! Generation stamps a wall border, then places each [`RoomSpec`] of the
//! catalog in order. A room's anchor snaps to a lattice of `width x height`
//! slots offset by one cell from the border, and a candidate is accepted only
//! when its whole footprint box is free of walls (and of earlier doors).
//! Accepted rooms are stamped as hollow wall outlines with an optional single
//! door gap. Finally the player is dropped onto a random open cell.
//!
//! Sampling is bounded: after `max_attempts` random candidates a row-major
//! scan picks the first valid slot, so a crowded catalog degrades to a
//! deterministic layout instead of spinning. Only when the scan finds nothing
//! does generation fail.

use std::fmt;

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{
    CellKind, Pos, RoomSpec, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_MAX_PLACEMENT_ATTEMPTS,
    LATTICE_MARGIN, MAX_ROOMS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    BoardTooSmall { width: u16, height: u16 },
    TooManyRooms { count: usize },
    RoomTooSmall { index: usize },
    RoomDoesNotFit { index: usize },
    DoorOffOutline { index: usize },
    NoRoomSlot { index: usize },
    NoOpenCell,
}

impl GenerateError {
    pub fn code(self) -> &'static str {
        match self {
            GenerateError::BoardTooSmall { .. }
            | GenerateError::TooManyRooms { .. }
            | GenerateError::RoomTooSmall { .. }
            | GenerateError::RoomDoesNotFit { .. }
            | GenerateError::DoorOffOutline { .. } => "invalid_catalog",
            GenerateError::NoRoomSlot { .. } | GenerateError::NoOpenCell => "placement_failed",
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::BoardTooSmall { width, height } => {
                write!(f, "board {}x{} is smaller than 3x3", width, height)
            }
            GenerateError::TooManyRooms { count } => {
                write!(f, "catalog has {} rooms, at most {} allowed", count, MAX_ROOMS)
            }
            GenerateError::RoomTooSmall { index } => {
                write!(f, "room {} is smaller than 3x3", index)
            }
            GenerateError::RoomDoesNotFit { index } => {
                write!(f, "room {} has no lattice slot on this board", index)
            }
            GenerateError::DoorOffOutline { index } => {
                write!(f, "door of room {} is not on its wall outline", index)
            }
            GenerateError::NoRoomSlot { index } => {
                write!(f, "no free slot left for room {}", index)
            }
            GenerateError::NoOpenCell => write!(f, "no open cell left for the player"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// A room from the catalog at its accepted anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedRoom {
    pub spec: RoomSpec,
    pub x: i32,
    pub y: i32,
}

impl PlacedRoom {
    pub fn new(spec: RoomSpec, x: i32, y: i32) -> Self {
        Self { spec, x, y }
    }

    pub fn anchor(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    /// Absolute position of the door gap, if the room has one.
    pub fn door_cell(&self) -> Option<Pos> {
        self.spec
            .door
            .map(|d| Pos::new(self.x + d.x as i32, self.y + d.y as i32))
    }

    /// Whether `pos` is inside the footprint box `[x, x+w) x [y, y+h)`.
    pub fn footprint_contains(&self, pos: Pos) -> bool {
        pos.x >= self.x
            && pos.y >= self.y
            && pos.x < self.x + self.spec.width as i32
            && pos.y < self.y + self.spec.height as i32
    }

    /// Every outline cell exactly once, door cell included.
    pub fn outline(&self) -> impl Iterator<Item = Pos> {
        let left = self.x + 1;
        let top = self.y + 1;
        let right = self.x + self.spec.width as i32 - 1;
        let bottom = self.y + self.spec.height as i32 - 1;

        let horizontal = (left..=right).flat_map(move |x| [Pos::new(x, top), Pos::new(x, bottom)]);
        let vertical =
            (top + 1..bottom).flat_map(move |y| [Pos::new(left, y), Pos::new(right, y)]);
        horizontal.chain(vertical)
    }
}

/// Stamp a room's outline onto the grid and carve its door.
pub fn stamp_room(grid: &mut Grid, room: &PlacedRoom) {
    for cell in room.outline() {
        grid.set(cell.x, cell.y, CellKind::Wall);
    }
    if let Some(door) = room.door_cell() {
        grid.set(door.x, door.y, CellKind::Open);
    }
}

/// Result of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    pub grid: Grid,
    pub start: Pos,
    pub rooms: ArrayVec<PlacedRoom, MAX_ROOMS>,
    /// How many placements (rooms plus player) fell back to the deterministic scan.
    pub fallbacks: u32,
}

/// Lays out rooms and the player start on a bordered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGenerator {
    width: u16,
    height: u16,
    max_attempts: u32,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl BoardGenerator {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            max_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Cap on random samples per placement. Zero skips sampling entirely and
    /// goes straight to the deterministic scan.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Number of anchor slots along each axis for `spec`.
    pub fn lattice_slots(&self, spec: &RoomSpec) -> (u16, u16) {
        if spec.width == 0 || spec.height == 0 {
            return (0, 0);
        }
        (
            self.width.saturating_sub(LATTICE_MARGIN) / spec.width,
            self.height.saturating_sub(LATTICE_MARGIN) / spec.height,
        )
    }

    fn slot_anchor(spec: &RoomSpec, slot_x: u32, slot_y: u32) -> Pos {
        Pos::new(
            (slot_x * spec.width as u32) as i32 + 1,
            (slot_y * spec.height as u32) as i32 + 1,
        )
    }

    /// Reject catalogs that could never be laid out on this board.
    pub fn validate(&self, catalog: &[RoomSpec]) -> Result<(), GenerateError> {
        if self.width < 3 || self.height < 3 {
            return Err(GenerateError::BoardTooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if catalog.len() > MAX_ROOMS {
            return Err(GenerateError::TooManyRooms {
                count: catalog.len(),
            });
        }
        for (index, spec) in catalog.iter().enumerate() {
            if spec.width < 3 || spec.height < 3 {
                return Err(GenerateError::RoomTooSmall { index });
            }
            let (slots_x, slots_y) = self.lattice_slots(spec);
            if slots_x == 0 || slots_y == 0 {
                return Err(GenerateError::RoomDoesNotFit { index });
            }
            if let Some(door) = spec.door {
                if !spec.door_on_outline(door) {
                    return Err(GenerateError::DoorOffOutline { index });
                }
            }
        }
        Ok(())
    }

    /// Generate a board for `catalog`, drawing randomness from `rng`.
    pub fn generate(
        &self,
        catalog: &[RoomSpec],
        rng: &mut SimpleRng,
    ) -> Result<GeneratedBoard, GenerateError> {
        self.validate(catalog)?;

        let mut grid = Grid::bordered(self.width, self.height);
        let mut rooms: ArrayVec<PlacedRoom, MAX_ROOMS> = ArrayVec::new();
        let mut fallbacks = 0u32;

        for (index, spec) in catalog.iter().enumerate() {
            let (room, fell_back) = self
                .place_room(&grid, &rooms, spec, rng)
                .ok_or(GenerateError::NoRoomSlot { index })?;
            if fell_back {
                fallbacks += 1;
            }
            stamp_room(&mut grid, &room);
            rooms.push(room);
        }

        let (start, fell_back) = self.place_player(&grid, rng).ok_or(GenerateError::NoOpenCell)?;
        if fell_back {
            fallbacks += 1;
        }

        Ok(GeneratedBoard {
            grid,
            start,
            rooms,
            fallbacks,
        })
    }

    /// A candidate conflicts if its box holds a wall or an earlier room's door.
    fn room_conflicts(grid: &Grid, rooms: &[PlacedRoom], candidate: &PlacedRoom) -> bool {
        let spec = &candidate.spec;
        if grid.has_conflict(candidate.x, candidate.y, spec.width, spec.height) {
            return true;
        }
        rooms
            .iter()
            .filter_map(PlacedRoom::door_cell)
            .any(|door| candidate.footprint_contains(door))
    }

    /// Returns the accepted room and whether the fallback scan produced it.
    fn place_room(
        &self,
        grid: &Grid,
        rooms: &[PlacedRoom],
        spec: &RoomSpec,
        rng: &mut SimpleRng,
    ) -> Option<(PlacedRoom, bool)> {
        let (slots_x, slots_y) = self.lattice_slots(spec);
        let (slots_x, slots_y) = (slots_x as u32, slots_y as u32);

        for _ in 0..self.max_attempts {
            let anchor = Self::slot_anchor(spec, rng.next_range(slots_x), rng.next_range(slots_y));
            let candidate = PlacedRoom::new(*spec, anchor.x, anchor.y);
            if !Self::room_conflicts(grid, rooms, &candidate) {
                return Some((candidate, false));
            }
        }

        (0..slots_y)
            .flat_map(|sy| (0..slots_x).map(move |sx| (sx, sy)))
            .map(|(sx, sy)| {
                let anchor = Self::slot_anchor(spec, sx, sy);
                PlacedRoom::new(*spec, anchor.x, anchor.y)
            })
            .find(|candidate| !Self::room_conflicts(grid, rooms, candidate))
            .map(|room| (room, true))
    }

    fn place_player(&self, grid: &Grid, rng: &mut SimpleRng) -> Option<(Pos, bool)> {
        for _ in 0..self.max_attempts {
            let x = rng.next_range(self.width as u32) as i32;
            let y = rng.next_range(self.height as u32) as i32;
            if !grid.has_conflict(x, y, 1, 1) {
                return Some((Pos::new(x, y), false));
            }
        }

        (0..self.height as i32)
            .flat_map(|y| (0..self.width as i32).map(move |x| Pos::new(x, y)))
            .find(|pos| grid.is_open(pos.x, pos.y))
            .map(|pos| (pos, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Door, ROOM_CATALOG};

    fn reference(seed: u32) -> GeneratedBoard {
        BoardGenerator::default()
            .generate(&ROOM_CATALOG, &mut SimpleRng::new(seed))
            .unwrap()
    }

    #[test]
    fn test_outline_visits_each_cell_once() {
        let room = PlacedRoom::new(RoomSpec::new(8, 8), 9, 9);
        let cells: Vec<Pos> = room.outline().collect();
        assert_eq!(cells.len(), 24);

        let mut dedup = cells.clone();
        dedup.sort_by_key(|p| (p.y, p.x));
        dedup.dedup();
        assert_eq!(dedup.len(), cells.len());

        for p in cells {
            let on_edge = p.x == 10 || p.x == 16 || p.y == 10 || p.y == 16;
            assert!(on_edge, "{:?} is not on the outline", p);
        }
    }

    #[test]
    fn test_stamp_room_carves_single_door() {
        let mut grid = Grid::bordered(35, 35);
        let room = PlacedRoom::new(RoomSpec::with_door(8, 8, 4, 7), 9, 17);
        stamp_room(&mut grid, &room);

        assert!(grid.is_open(9 + 4, 17 + 7));
        for cell in room.outline() {
            if cell == Pos::new(13, 24) {
                continue;
            }
            assert!(grid.is_wall(cell.x, cell.y), "{:?} should be wall", cell);
        }

        // Hollow: interior and anchor walkway stay open.
        assert!(grid.is_open(13, 20));
        assert!(grid.is_open(9, 17));
    }

    #[test]
    fn test_lattice_slots_reference_catalog() {
        let gen = BoardGenerator::default();
        assert_eq!(gen.lattice_slots(&ROOM_CATALOG[0]), (2, 2));
        assert_eq!(gen.lattice_slots(&ROOM_CATALOG[1]), (2, 4));
        assert_eq!(gen.lattice_slots(&ROOM_CATALOG[3]), (4, 4));
    }

    #[test]
    fn test_anchors_snap_to_lattice() {
        for seed in 1..=50 {
            let board = reference(seed);
            for room in &board.rooms {
                assert_eq!((room.x - 1) % room.spec.width as i32, 0);
                assert_eq!((room.y - 1) % room.spec.height as i32, 0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(reference(99), reference(99));
    }

    #[test]
    fn test_seeds_produce_different_layouts() {
        let first = reference(1);
        assert!((2..=20).any(|seed| reference(seed).grid != first.grid));
    }

    #[test]
    fn test_zero_attempts_uses_deterministic_scan() {
        let gen = BoardGenerator::default().with_max_attempts(0);
        let a = gen.generate(&ROOM_CATALOG, &mut SimpleRng::new(1)).unwrap();
        let b = gen.generate(&ROOM_CATALOG, &mut SimpleRng::new(777)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fallbacks, ROOM_CATALOG.len() as u32 + 1);

        let anchors: Vec<Pos> = a.rooms.iter().map(PlacedRoom::anchor).collect();
        assert_eq!(
            anchors,
            vec![
                Pos::new(1, 1),
                Pos::new(17, 1),
                Pos::new(17, 9),
                Pos::new(1, 17),
                Pos::new(9, 17),
            ]
        );
        assert_eq!(a.start, Pos::new(1, 1));
    }

    #[test]
    fn test_full_catalog_reports_no_slot() {
        let gen = BoardGenerator::new(10, 10);
        let catalog = [RoomSpec::new(7, 7), RoomSpec::new(7, 7)];
        let err = gen.generate(&catalog, &mut SimpleRng::new(3)).unwrap_err();
        assert_eq!(err, GenerateError::NoRoomSlot { index: 1 });
        assert_eq!(err.code(), "placement_failed");
    }

    #[test]
    fn test_validate_rejects_bad_catalogs() {
        let gen = BoardGenerator::new(10, 10);
        assert_eq!(
            gen.validate(&[RoomSpec::new(8, 8)]),
            Err(GenerateError::RoomDoesNotFit { index: 0 })
        );
        assert_eq!(
            gen.validate(&[RoomSpec::new(4, 4), RoomSpec::new(2, 5)]),
            Err(GenerateError::RoomTooSmall { index: 1 })
        );
        let mut inner_door = RoomSpec::new(6, 6);
        inner_door.door = Some(Door::new(3, 3));
        assert_eq!(
            gen.validate(&[inner_door]),
            Err(GenerateError::DoorOffOutline { index: 0 })
        );
        assert_eq!(
            BoardGenerator::new(2, 10).validate(&[]),
            Err(GenerateError::BoardTooSmall {
                width: 2,
                height: 10
            })
        );
        let crowded = [RoomSpec::new(3, 3); MAX_ROOMS + 1];
        assert_eq!(
            BoardGenerator::new(100, 100).validate(&crowded),
            Err(GenerateError::TooManyRooms {
                count: MAX_ROOMS + 1
            })
        );
    }

    #[test]
    fn test_error_codes_and_messages() {
        let gen = BoardGenerator::new(10, 10);
        let err = gen.validate(&[RoomSpec::new(8, 8)]).unwrap_err();
        assert_eq!(err.code(), "invalid_catalog");
        assert_eq!(err.to_string(), "room 0 has no lattice slot on this board");

        let mut inner_door = RoomSpec::new(6, 6);
        inner_door.door = Some(Door::new(3, 3));
        let err = gen.validate(&[inner_door]).unwrap_err();
        assert_eq!(err.code(), "invalid_catalog");
        assert_eq!(err.to_string(), "door of room 0 is not on its wall outline");

        assert_eq!(
            GenerateError::BoardTooSmall { width: 2, height: 10 }.to_string(),
            "board 2x10 is smaller than 3x3"
        );
        assert_eq!(GenerateError::NoRoomSlot { index: 3 }.code(), "placement_failed");
        assert_eq!(GenerateError::NoOpenCell.code(), "placement_failed");
        assert_eq!(
            GenerateError::NoOpenCell.to_string(),
            "no open cell left for the player"
        );
    }

    #[test]
    fn test_empty_catalog_still_places_player() {
        let board = BoardGenerator::new(5, 5)
            .generate(&[], &mut SimpleRng::new(4))
            .unwrap();
        assert!(board.rooms.is_empty());
        assert!(board.grid.is_open(board.start.x, board.start.y));
    }

    #[test]
    fn test_later_room_never_covers_earlier_door() {
        // First room sits at (1,1) with its door on the outline corner (4,4).
        // The small room's slots at (1,1), (4,1) and (1,4) hit walls; the box
        // at (4,4) holds only the open door cell, so only the door rule
        // rejects it.
        let gen = BoardGenerator::new(10, 10).with_max_attempts(0);
        let catalog = [RoomSpec::with_door(4, 4, 3, 3), RoomSpec::new(3, 3)];
        let err = gen.generate(&catalog, &mut SimpleRng::new(1)).unwrap_err();
        assert_eq!(err, GenerateError::NoRoomSlot { index: 1 });
    }
}
