//! Terminal Party Tetris runner.
//!
//! Uses crossterm for input and a custom framebuffer-based renderer.
//! Log output goes to a file because the terminal is the game screen.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal,
};

use party_tetris::core::{Game, GameEvent};
use party_tetris::input::{handle_key_event, should_quit};
use party_tetris::term::{GameView, Screen, Viewport};
use party_tetris::types::TICK_MS;

/// How long a transient status message stays on screen.
const STATUS_MS: i32 = 1500;

const LOG_FILE: &str = "party-tetris.log";

fn main() -> Result<()> {
    party_tetris::log::init_log(log::LevelFilter::Info, LOG_FILE)?;

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Restore the terminal even when run() failed.
    let _ = screen.exit();
    result
}

fn run(screen: &mut Screen) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1);
    log::info!("new session, seed {}", seed);

    let mut game = Game::new(seed);
    let view = GameView::default();

    let tick_len = Duration::from_millis(u64::from(TICK_MS));
    let mut tick_started = Instant::now();
    let mut status: Option<String> = None;
    let mut status_timer_ms: i32 = 0;

    loop {
        // Draw the current state before waiting on input.
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(cols, rows), status.as_deref());
        screen.draw(&fb)?;

        // Wait for input, but never past the next tick.
        let timeout = tick_len.saturating_sub(tick_started.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        log::info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
            }
        }

        // Advance the simulation once per tick.
        if tick_started.elapsed() >= tick_len {
            tick_started = Instant::now();
            game.tick(TICK_MS);

            if status_timer_ms > 0 {
                status_timer_ms -= TICK_MS as i32;
                if status_timer_ms <= 0 {
                    status = None;
                }
            }
        }

        for ev in game.take_events() {
            match ev {
                GameEvent::LinesCleared(n) => {
                    log::info!("cleared {} line(s), score {}", n, game.score());
                    let text = match n {
                        1 => "LINE CLEAR".to_string(),
                        2 => "DOUBLE".to_string(),
                        3 => "TRIPLE".to_string(),
                        _ => "QUAD!".to_string(),
                    };
                    status = Some(text);
                    status_timer_ms = STATUS_MS;
                }
                GameEvent::LeveledUp(level) => {
                    log::info!("level up to {}", level);
                    status = Some(format!("LEVEL {}!", level));
                    status_timer_ms = STATUS_MS;
                }
                GameEvent::GameOver => {
                    log::info!(
                        "game over: score {} lines {} level {}",
                        game.score(),
                        game.lines(),
                        game.level()
                    );
                    status = None;
                    status_timer_ms = 0;
                }
                GameEvent::StateChanged(snap) => {
                    log::debug!(
                        "score {} lines {} level {} paused {}",
                        snap.score,
                        snap.lines,
                        snap.level,
                        snap.is_paused
                    );
                }
                GameEvent::Locked | GameEvent::Moved | GameEvent::Rotated => {}
            }
        }
    }
}
