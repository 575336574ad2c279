//! Game state module - the single game-session object
//!
//! Owns the grid, the active piece, the score, and the gravity timer.
//! All operations are synchronous and run to completion; collision and
//! rotation rejections are boolean outcomes, not errors.

use crate::core::{speed, ActivePiece, Grid, ShapeBag};
use crate::types::Command;

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Option<ActivePiece>,
    score: u32,
    game_over: bool,
    bag: ShapeBag,
    drop_timer_ms: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            score: 0,
            game_over: false,
            bag: ShapeBag::new(seed),
            drop_timer_ms: 0,
        }
    }

    /// Spawn the first piece
    pub fn start(&mut self) {
        if self.active.is_none() && !self.game_over {
            self.spawn_piece();
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current gravity interval, derived from the score
    pub fn drop_interval_ms(&self) -> u32 {
        speed::drop_interval_ms(self.score)
    }

    /// Draw the next shape and place it at top-center.
    ///
    /// Returns false and flags game over when the spawn placement already
    /// collides with locked cells.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.bag.draw());

        if self.grid.collides(&piece.matrix, piece.position) {
            self.game_over = true;
            self.active = None;
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// Try to move the active piece by (delta_col, delta_row).
    ///
    /// Commits and returns true when the proposed position is free; leaves
    /// the position unchanged otherwise. A failed downward move is the
    /// caller's signal to lock.
    pub fn move_piece(&mut self, delta_col: i8, delta_row: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let proposed = active.position.offset(delta_col, delta_row);
        if self.grid.collides(&active.matrix, proposed) {
            return false;
        }

        self.active = Some(ActivePiece {
            position: proposed,
            ..active
        });
        true
    }

    /// Try to rotate the active piece clockwise.
    ///
    /// The rotated matrix is committed only when it fits at the current
    /// position; on rejection the piece matrix is left unchanged.
    pub fn rotate_piece(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotated = active.matrix.rotated_cw();
        if self.grid.collides(&rotated, active.position) {
            return false;
        }

        self.active = Some(ActivePiece {
            matrix: rotated,
            ..active
        });
        true
    }

    /// Write the active piece's cells into the grid at its position
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.grid.lock(&active.matrix, active.position, active.kind);
    }

    /// Remove all full rows and score one point per cleared row.
    ///
    /// Returns the number of rows cleared; zero is a valid no-op.
    pub fn clear_lines(&mut self) -> usize {
        let cleared = self.grid.clear_full_rows().len();
        self.score += cleared as u32;
        cleared
    }

    /// Apply one input command. Returns whether the command changed state.
    ///
    /// `Quit` is handled by the loop driver, never here.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.game_over {
            return false;
        }
        match command {
            Command::MoveLeft => self.move_piece(-1, 0),
            Command::MoveRight => self.move_piece(1, 0),
            Command::SoftDrop => self.step_down(),
            Command::Rotate => self.rotate_piece(),
            Command::Quit => false,
        }
    }

    /// Advance timers by one tick and apply gravity when due.
    ///
    /// Returns true when the piece moved or locked this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms += elapsed_ms;
        let interval = self.drop_interval_ms();
        if self.drop_timer_ms < interval {
            return false;
        }
        // Keep the overshoot so jittery tick timing does not slow gravity.
        self.drop_timer_ms -= interval;
        self.step_down();
        true
    }

    /// One downward step: move if possible, otherwise lock, clear, respawn.
    fn step_down(&mut self) -> bool {
        if self.move_piece(0, 1) {
            return true;
        }

        self.lock_piece();
        self.clear_lines();
        self.spawn_piece();
        true
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
