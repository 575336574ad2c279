//! Terminal Tetris runner.
//!
//! Drives the core one tick at a time: at most one input command per tick
//! plus one gravity step at the interval the current score dictates.
//! Scores are offered to the high-score table when the session ends.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use termtris::core::GameState;
use termtris::input::{map_key, should_quit};
use termtris::scores::ScoreStore;
use termtris::term::{GameView, TerminalRenderer, Viewport};
use termtris::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let player = std::env::args().nth(1).unwrap_or_else(|| "player".into());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &player);

    // Always try to restore terminal state before reporting anything.
    let _ = term.exit();

    // Persistence failure is reported, never fatal: the session already
    // ran to completion with a valid in-memory table.
    if let Ok(Some(warning)) = &result {
        eprintln!("{warning}");
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, player: &str) -> Result<Option<String>> {
    let store = ScoreStore::new(ScoreStore::default_path());
    let mut scores = store.load();

    let mut state = GameState::new(clock_seed());
    state.start();

    let view = GameView::default();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut pending: Option<Command> = None;
    let mut score_recorded = false;
    let mut save_warning = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&state, &scores, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        break;
                    }
                    // One command per tick; the first press wins.
                    if pending.is_none() {
                        pending = map_key(key);
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(command) = pending.take() {
                state.apply_command(command);
            }
            state.tick(TICK_MS);

            if state.game_over() && !score_recorded {
                score_recorded = true;
                scores.insert(player, state.score());
                if let Err(err) = store.save(&scores) {
                    save_warning = Some(format!("failed to save high scores: {err:#}"));
                }
            }
        }
    }

    Ok(save_warning)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
