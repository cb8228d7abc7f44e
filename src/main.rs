//! Terminal Connect Four runner (default binary).
//!
//! Fixed-timestep loop: terminal events are folded into one `FrameInput`
//! per tick, the session advances once per tick, and the snapshot is
//! rendered through a reused framebuffer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{error, info};

use tui_connect_four::core::{GameSession, GameSnapshot};
use tui_connect_four::input::{should_quit, PointerTracker};
use tui_connect_four::term::{FrameBuffer, GameView, TerminalBell, TerminalRenderer, Viewport};
use tui_connect_four::record::FileRecord;
use tui_connect_four::types::TICK_MS;
use tui_connect_four::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_path.as_deref())?;

    let mut record = config
        .record_path
        .as_deref()
        .map(FileRecord::create)
        .transpose()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, record.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        error!("exiting with error: {:#}", e);
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: &Config,
    mut record: Option<&mut FileRecord>,
) -> Result<()> {
    let view = GameView::default();
    let (cell_w, cell_h) = view.cell_metrics();
    let seed = config.seed_or_clock();
    let mut session = GameSession::with_settings(seed, config.session_settings(cell_w, cell_h));
    let mut bell = TerminalBell::new(config.sound);
    let mut tracker = PointerTracker::new();
    info!(seed, sound = config.sound, "session ready");

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        session.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit requested");
                        return Ok(());
                    }
                    tracker.handle_key(key);
                }
                Event::Mouse(mouse) => tracker.handle_mouse(mouse),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();

            let input = tracker.take_frame(|x, y| view.board_pointer(viewport, x, y));
            let elapsed_ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
            session.update(&input, elapsed_ms, &mut bell);

            if let Some(record) = record.as_deref_mut() {
                session.snapshot_into(&mut snap);
                record.record(session.last_events(), &snap)?;
            }
        }
    }
}
