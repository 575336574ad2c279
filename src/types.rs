//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Grid dimensions
pub const GRID_COLS: u8 = 10;
pub const GRID_ROWS: u8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_DROP_MS: u32 = 700;
pub const DROP_STEP_MS: u32 = 60;
pub const DROP_FLOOR_MS: u32 = 120;

/// Score threshold at which the gravity interval steps down
pub const SPEED_SCORE_STEP: u32 = 10;

/// Maximum number of retained high-score entries
pub const MAX_HIGH_SCORES: usize = 10;

/// Tetromino shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// The full shape set, in bag order before shuffling
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::O => "O",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
        }
    }
}

/// Cell on the grid (None = empty, Some = filled with shape kind)
pub type Cell = Option<ShapeKind>;

/// Top-left anchor of a piece within the grid.
///
/// `row` may be negative while a piece is still entering from above;
/// committed positions are always collision-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub col: i8,
    pub row: i8,
}

impl Position {
    pub fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Position offset by a delta
    pub fn offset(&self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }
}

/// Commands the input layer feeds the core, at most one per tick.
///
/// "No input this tick" is `Option::None` at the boundary, not a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Quit,
}
