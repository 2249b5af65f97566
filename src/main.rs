//! Terminal 2028 runner (default binary).
//!
//! It uses crossterm for keyboard and mouse input and a framebuffer-based
//! renderer. Logs go to a file (when configured) because the terminal is
//! in alternate-screen raw mode.

use std::fs::OpenOptions;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2028::core::{GameSnapshot, GameState, MoveReport};
use tui_2028::input::{handle_key_event, should_quit, SwipeTracker};
use tui_2028::store::{FileScoreStore, ScoreStore};
use tui_2028::term::{FrameBuffer, GameView, RenderThrottle, TerminalRenderer, Viewport};
use tui_2028::types::GameAction;
use tui_2028::Config;

/// Poll interval while tiles are sliding (about 60 fps).
const FRAME_MS: u64 = 16;
/// Poll interval while the board is still.
const IDLE_POLL_MS: u64 = 100;
/// Heartbeat redraw for a static board.
const STATIC_REDRAW_MS: u64 = 500;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let store = FileScoreStore::new(&config.best_path);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &store);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config, store: &dyn ScoreStore) -> Result<()> {
    let seed = config.resolved_seed();
    let mut game = GameState::new(seed)
        .with_best(store.load())
        .with_settle_ms(config.settle_ms());
    info!("starting: seed {}, best {}", seed, game.best());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut throttle = RenderThrottle::new(STATIC_REDRAW_MS);
    let mut swipe = SwipeTracker::new();

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;

    loop {
        persist_best(store, game.tick(now_ms()));

        // Render.
        let now = now_ms();
        game.snapshot_into(now, &mut snap);
        if throttle.should_render_snapshot(now, &snap) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input.
        let timeout = if game.is_settling() { FRAME_MS } else { IDLE_POLL_MS };
        if !event::poll(Duration::from_millis(timeout))? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    // A slide still in flight counts.
                    persist_best(store, game.flush());
                    return Ok(());
                }
                handle_key_event(key)
            }
            Event::Mouse(mouse) => swipe.handle_mouse(mouse, now_ms()),
            Event::Resize(..) => {
                term.invalidate();
                throttle.invalidate();
                None
            }
            _ => None,
        };

        match action {
            Some(GameAction::NewGame) => {
                game.restart_with_best(store.load());
                swipe.cancel();
            }
            Some(action) => {
                game.apply_action(action, now_ms());
            }
            None => {}
        }
    }
}

/// Save the best score if a committed move raised it.
fn persist_best(store: &dyn ScoreStore, report: Option<MoveReport>) {
    if let Some(report) = report {
        if report.best_changed {
            store.save(report.best);
        }
    }
}
