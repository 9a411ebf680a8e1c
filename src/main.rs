//! Terminal dungeon runner (default binary).
//!
//! Generates one board at startup, then blocks on key events and redraws
//! after each one. A single loop owns the session, so every key press moves
//! from the position left by the previous one.

use anyhow::{Context, Result};
use crossterm::event::{self, Event};

use tui_dungeon::input::{handle_key_event, should_quit};
use tui_dungeon::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use tui_dungeon::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut session = config
        .start_session()
        .with_context(|| format!("generating dungeon (seed {})", config.seed))?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut tui_dungeon::core::GameSession) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut redraw = true;

    loop {
        if redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(session, Viewport::new(w, h), &mut fb);
            term.present(&fb)?;
            redraw = false;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(dir) = handle_key_event(key) {
                    redraw = session.apply(dir);
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                redraw = true;
            }
            _ => {}
        }
    }
}
