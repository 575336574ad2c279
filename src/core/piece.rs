//! Piece module - shape matrices and rotation
//!
//! Every shape is a small 0/1 occupancy matrix inside a bounding box
//! (2x2 for O, 2x3 for T, 1x4 for I, ...). Rotation is clockwise:
//! transpose the matrix, then reverse each row. The O piece is invariant
//! under this transform by construction.

use crate::types::{Position, ShapeKind, GRID_COLS};

/// Largest bounding-box side across the shape set (the I piece)
pub const MAX_PIECE_DIM: usize = 4;

/// A 0/1 occupancy matrix within a fixed 4x4 bounding box.
///
/// Only the top-left `rows x cols` region is meaningful; the rest stays
/// false. Copy-sized and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceMatrix {
    rows: usize,
    cols: usize,
    cells: [[bool; MAX_PIECE_DIM]; MAX_PIECE_DIM],
}

impl PieceMatrix {
    /// Build a matrix from a row-major 0/1 pattern.
    ///
    /// Used by the shape table and by tests that need synthetic pieces.
    pub fn from_pattern<const N: usize>(pattern: &[[u8; N]]) -> Self {
        assert!(!pattern.is_empty() && pattern.len() <= MAX_PIECE_DIM);
        assert!(N >= 1 && N <= MAX_PIECE_DIM);

        let mut cells = [[false; MAX_PIECE_DIM]; MAX_PIECE_DIM];
        for (r, row) in pattern.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self {
            rows: pattern.len(),
            cols: N,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterate over occupied (row, col) offsets
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c])
    }

    /// Clockwise rotation: transpose, then reverse each row.
    ///
    /// The result's bounding box swaps dimensions (rows x cols becomes
    /// cols x rows). The original is left untouched; callers commit the
    /// rotated copy only after it passes collision checks.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_PIECE_DIM]; MAX_PIECE_DIM];
        for r in 0..self.cols {
            for c in 0..self.rows {
                cells[r][c] = self.cells[self.rows - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Count of occupied cells
    pub fn filled_count(&self) -> usize {
        self.iter_filled().count()
    }
}

/// Spawn-orientation matrix for a shape kind
pub fn shape_matrix(kind: ShapeKind) -> PieceMatrix {
    match kind {
        ShapeKind::I => PieceMatrix::from_pattern(&[[1, 1, 1, 1]]),
        ShapeKind::O => PieceMatrix::from_pattern(&[[1, 1], [1, 1]]),
        ShapeKind::T => PieceMatrix::from_pattern(&[[1, 1, 1], [0, 1, 0]]),
        ShapeKind::S => PieceMatrix::from_pattern(&[[0, 1, 1], [1, 1, 0]]),
        ShapeKind::Z => PieceMatrix::from_pattern(&[[1, 1, 0], [0, 1, 1]]),
        ShapeKind::J => PieceMatrix::from_pattern(&[[1, 0, 0], [1, 1, 1]]),
        ShapeKind::L => PieceMatrix::from_pattern(&[[0, 0, 1], [1, 1, 1]]),
    }
}

/// The falling piece: a shape kind, its current matrix, and its anchor.
///
/// The matrix starts as the spawn orientation and is replaced in place on
/// each committed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub matrix: PieceMatrix,
    pub position: Position,
}

impl ActivePiece {
    /// Create a piece at the canonical top-center spawn position
    pub fn spawn(kind: ShapeKind) -> Self {
        let matrix = shape_matrix(kind);
        let col = (GRID_COLS as i8 - matrix.cols() as i8) / 2;
        Self {
            kind,
            matrix,
            position: Position::new(col, 0),
        }
    }

    /// Create a piece at an explicit position (tests and synthetic setups)
    pub fn at(kind: ShapeKind, position: Position) -> Self {
        Self {
            kind,
            matrix: shape_matrix(kind),
            position,
        }
    }
}
