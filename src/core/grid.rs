//! Grid module - the fixed playing field
//!
//! A 10x20 grid where each cell is empty or filled with a shape kind.
//! Uses a flat array for cache locality and zero-allocation.
//! Coordinates: (col, row) with col in 0..10 left to right and row in
//! 0..20 top to bottom. Rows above the grid (row < 0) are open space a
//! piece may occupy while entering the field.

use arrayvec::ArrayVec;

use crate::core::piece::PieceMatrix;
use crate::types::{Cell, Position, ShapeKind, GRID_COLS, GRID_ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_COLS * GRID_ROWS) as usize;

/// The playing field - 10 columns x 20 rows in flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(col: i8, row: i8) -> Option<usize> {
        if col < 0 || col >= GRID_COLS as i8 || row < 0 || row >= GRID_ROWS as i8 {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    /// Get cell at (col, row); None if out of bounds
    pub fn get(&self, col: i8, row: i8) -> Option<Cell> {
        Self::index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row); returns false if out of bounds
    pub fn set(&mut self, col: i8, row: i8, cell: Cell) -> bool {
        match Self::index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether the cell is inside the grid and filled
    pub fn is_occupied(&self, col: i8, row: i8) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Whether a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= GRID_ROWS as usize {
            return false;
        }
        let start = row * GRID_COLS as usize;
        let end = start + GRID_COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Pure collision check for a piece matrix at a candidate position.
    ///
    /// Collision iff any occupied piece cell lands outside the side walls,
    /// at or below the floor, or on an occupied grid cell. `row < 0` alone
    /// is not a collision: pieces may still be entering from above.
    pub fn collides(&self, matrix: &PieceMatrix, position: Position) -> bool {
        matrix.iter_filled().any(|(r, c)| {
            let col = position.col + c as i8;
            let row = position.row + r as i8;

            if col < 0 || col >= GRID_COLS as i8 || row >= GRID_ROWS as i8 {
                return true;
            }
            if row < 0 {
                return false;
            }
            self.is_occupied(col, row)
        })
    }

    /// Write a piece's occupied cells into the grid with its fill value.
    ///
    /// Cells still above the top edge are dropped; `set` bounds-checks
    /// each write.
    pub fn lock(&mut self, matrix: &PieceMatrix, position: Position, kind: ShapeKind) {
        for (r, c) in matrix.iter_filled() {
            self.set(position.col + c as i8, position.row + r as i8, Some(kind));
        }
    }

    /// Clear all full rows and return their indices, top to bottom.
    ///
    /// Surviving rows keep their relative order and drop by the number of
    /// full rows below them; the freed rows at the top become empty.
    /// Two-pointer compaction, zero-allocation. The buffer holds every row
    /// on the grid, so the call cannot fail however the rows were filled.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, { GRID_ROWS as usize }> {
        let mut cleared = ArrayVec::new();
        let cols = GRID_COLS as usize;
        let mut write_row = GRID_ROWS as usize;

        for read_row in (0..GRID_ROWS as usize).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * cols;
                    let dst = write_row * cols;
                    self.cells.copy_within(src..src + cols, dst);
                }
            }
        }

        for cell in &mut self.cells[..write_row * cols] {
            *cell = None;
        }

        cleared.reverse();
        cleared
    }

    /// Reference to the flat cell storage (read-only, for rendering)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid with the given rows filled completely (test setups)
    pub fn with_full_rows(rows: &[usize]) -> Self {
        let mut grid = Self::new();
        for &row in rows {
            for col in 0..GRID_COLS as i8 {
                grid.set(col, row as i8, Some(ShapeKind::I));
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
