//! End-to-end tests: game session plus headless rendering

use termtris::core::GameState;
use termtris::scores::HighScoreTable;
use termtris::term::{FrameBuffer, GameView, Viewport};
use termtris::types::{Command, TICK_MS};

fn fb_row(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|cell| cell.ch).unwrap_or(' '))
        .collect()
}

fn fb_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb_row(fb, y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_render_shows_score_and_speed_panel() {
    let mut state = GameState::new(42);
    state.start();

    let view = GameView::default();
    let fb = view.render(&state, &HighScoreTable::new(), Viewport::new(80, 30));

    let text = fb_text(&fb);
    assert!(text.contains("SCORE"));
    assert!(text.contains("SPEED"));
    assert!(text.contains("700 ms"));
    assert!(text.contains("HIGH SCORES"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_render_shows_high_scores_and_game_over() {
    let mut state = GameState::new(42);
    state.start();
    // Drop straight down until the stack tops out.
    for _ in 0..10_000 {
        if state.game_over() {
            break;
        }
        state.apply_command(Command::SoftDrop);
    }
    assert!(state.game_over());

    let mut scores = HighScoreTable::new();
    scores.insert("alice", 37);

    let view = GameView::default();
    let fb = view.render(&state, &scores, Viewport::new(80, 30));

    let text = fb_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("37 alice"));
}

#[test]
fn test_render_draws_the_falling_piece() {
    let mut state = GameState::new(42);
    state.start();

    let view = GameView::default();
    let fb = view.render(&state, &HighScoreTable::new(), Viewport::new(80, 30));

    // At least the four cells of the active piece are solid blocks.
    let solid = fb_text(&fb).chars().filter(|&ch| ch == '█').count();
    assert!(solid >= 8, "expected piece blocks, found {solid}");
}

#[test]
fn test_full_session_is_stable_under_mixed_input() {
    let mut state = GameState::new(99);
    state.start();

    let commands = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveRight,
        Command::SoftDrop,
    ];
    let view = GameView::default();
    let mut scores = HighScoreTable::new();

    let mut i = 0usize;
    while !state.game_over() && i < 200_000 {
        state.apply_command(commands[i % commands.len()]);
        state.tick(TICK_MS);
        // Render occasionally; it must never disturb the state.
        if i % 5000 == 0 {
            let score_before = state.score();
            let _ = view.render(&state, &scores, Viewport::new(80, 30));
            assert_eq!(state.score(), score_before);
        }
        i += 1;
    }
    assert!(state.game_over());

    scores.insert("it", state.score());
    assert_eq!(scores.best(), Some(state.score()));
}
