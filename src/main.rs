//! Terminal Slowtris runner (default binary).
//!
//! The loop renders one frame per iteration from a session snapshot, polls
//! for key input with a tick-bounded timeout, and advances the line-clear
//! flash timer. All game rules live in `slowtris-core`; this file only
//! wires the terminal to the session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use slowtris::core::{Session, SessionSnapshot};
use slowtris::input::{should_quit, translate_key};
use slowtris::store::FileStore;
use slowtris::term::{GameView, TerminalRenderer, Viewport};
use slowtris::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut session = Session::new(seed, Box::new(FileStore::in_home_dir()));

    let view = GameView::default();
    let mut snapshot = SessionSnapshot::default();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snapshot);
        let fb = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if should_quit(key, session.phase()) {
                        return Ok(());
                    }
                    if let Some(input) = translate_key(key, session.phase()) {
                        session.handle_input(input);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick: the only timer-driven mutation is the flash resolution.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }
    }
}
