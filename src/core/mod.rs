//! Core module - pure game logic with no external dependencies
//!
//! Game rules, state, and policies live here. Zero dependencies on UI,
//! terminal, or file I/O, so everything is unit-testable.

pub mod game;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod speed;

pub use game::GameState;
pub use grid::Grid;
pub use piece::{shape_matrix, ActivePiece, PieceMatrix};
pub use rng::{ShapeBag, SimpleRng};
