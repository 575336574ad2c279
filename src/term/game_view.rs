//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable.

use crate::core::GameState;
use crate::scores::HighScoreTable;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, GRID_COLS, GRID_ROWS};

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

/// Renders the playing field, side panel, and overlays.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the current game state into a framebuffer.
    pub fn render(
        &self,
        state: &GameState,
        scores: &HighScoreTable,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (GRID_COLS as u16) * self.cell_w;
        let field_h = GRID_ROWS as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + 18) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(25, 25, 35),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for row in 0..GRID_ROWS as i8 {
            for col in 0..GRID_COLS as i8 {
                match state.grid().get(col, row).flatten() {
                    Some(kind) => {
                        self.draw_grid_cell(&mut fb, start_x, start_y, col, row, kind);
                    }
                    None => {
                        let dot = CellStyle {
                            fg: Rgb::new(60, 60, 70),
                            ..field_bg
                        };
                        self.fill_cell(&mut fb, start_x, start_y, col, row, '·', dot);
                    }
                }
            }
        }

        // The falling piece, clipped to the visible field.
        if let Some(piece) = state.active() {
            for (r, c) in piece.matrix.iter_filled() {
                let col = piece.position.col + c as i8;
                let row = piece.position.row + r as i8;
                if row >= 0 && row < GRID_ROWS as i8 && col >= 0 && col < GRID_COLS as i8 {
                    self.draw_grid_cell(&mut fb, start_x, start_y, col, row, piece.kind);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, scores, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: i8,
        row: i8,
        kind: ShapeKind,
    ) {
        let style = CellStyle {
            fg: shape_color(kind),
            bg: Rgb::new(25, 25, 35),
            bold: true,
        };
        self.fill_cell(fb, start_x, start_y, col, row, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: i8,
        row: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (col as u16) * self.cell_w;
        let py = start_y + 1 + row as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        scores: &HighScoreTable,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(
            panel_x,
            y,
            &format!("{} ms", state.drop_interval_ms()),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH SCORES", label);
        y = y.saturating_add(1);
        if scores.is_empty() {
            fb.put_str(panel_x, y, "-", value);
        }
        for entry in scores.entries().iter().take(5) {
            if y >= viewport.height {
                break;
            }
            fb.put_str(
                panel_x,
                y,
                &format!("{} {}", entry.score, entry.name),
                value,
            );
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn shape_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
    }
}
