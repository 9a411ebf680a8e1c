//! BoardView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). The terminal plays the role of the
//! scrollable container: the view computes the scroll offset for the current
//! terminal size and draws only the window of the board it selects.

use crate::core::{GameSession, ScrollOffset, ViewportMetrics};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::CellKind;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(12, 12, 16);
const WALL: Style = Style::new(Rgb::new(150, 140, 120), Rgb::new(60, 55, 48));
const FLOOR: Style = Style::new(Rgb::new(70, 70, 80), Rgb::new(24, 24, 30)).dim();
const PLAYER: Style = Style::new(Rgb::new(255, 220, 90), Rgb::new(24, 24, 30)).bold();
const STATUS: Style = Style::new(Rgb::new(200, 200, 200), BACKGROUND);

/// Draws the visible part of the dungeon plus a one-line status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    status_line: bool,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
            status_line: true,
        }
    }
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            status_line: true,
        }
    }

    pub fn without_status_line(mut self) -> Self {
        self.status_line = false;
        self
    }

    /// Terminal area left for the map once the status line is taken.
    pub fn map_area(&self, viewport: Viewport) -> Viewport {
        let reserved = u16::from(self.status_line && viewport.height > 1);
        Viewport::new(viewport.width, viewport.height - reserved)
    }

    /// Cell and window sizes in terminal units.
    pub fn metrics(&self, viewport: Viewport) -> ViewportMetrics {
        let map = self.map_area(viewport);
        ViewportMetrics::new(
            self.cell_w as u32,
            self.cell_h as u32,
            map.width as u32,
            map.height as u32,
        )
    }

    pub fn scroll(&self, session: &GameSession, viewport: Viewport) -> ScrollOffset {
        session.offset_for(self.metrics(viewport))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &GameSession, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(BACKGROUND, BACKGROUND)));

        let grid = session.grid();
        let player = session.player();
        let map = self.map_area(viewport);
        let scroll = self.scroll(session, viewport);

        let board_w = grid.width() as i64 * self.cell_w as i64;
        let board_h = grid.height() as i64 * self.cell_h as i64;
        // Boards smaller than the window are centred instead of scrolled.
        let origin_x = (map.width as i64 - board_w).max(0) / 2;
        let origin_y = (map.height as i64 - board_h).max(0) / 2;

        for sy in 0..map.height {
            let by = sy as i64 - origin_y + scroll.scroll_y as i64;
            if by < 0 || by >= board_h {
                continue;
            }
            let cell_y = (by / self.cell_h as i64) as i32;

            for sx in 0..map.width {
                let bx = sx as i64 - origin_x + scroll.scroll_x as i64;
                if bx < 0 || bx >= board_w {
                    continue;
                }
                let cell_x = (bx / self.cell_w as i64) as i32;
                let lead = bx % self.cell_w as i64 == 0;

                let glyph = if cell_x == player.x && cell_y == player.y {
                    Glyph::new(if lead { '@' } else { ' ' }, PLAYER)
                } else {
                    match grid.get(cell_x, cell_y) {
                        Some(CellKind::Wall) => Glyph::new('█', WALL),
                        _ => Glyph::new(if lead { '·' } else { ' ' }, FLOOR),
                    }
                };
                fb.set(sx, sy, glyph);
            }
        }

        if map.height < viewport.height {
            self.draw_status(fb, session, viewport.height - 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_status(&self, fb: &mut FrameBuffer, session: &GameSession, y: u16) {
        let p = session.player();
        let line = format!(
            " ({:>2},{:>2})  moves {}  seed {}   wasd/arrows move  q quit",
            p.x,
            p.y,
            session.moves(),
            session.seed()
        );
        fb.put_str(0, y, &line, STATUS);
    }
}
