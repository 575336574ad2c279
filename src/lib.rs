//! Terminal Tetris.
//!
//! `core` holds the pure game-state machine; `scores` the high-score table
//! and its plain-text store; `input` and `term` the crossterm-facing edges.

pub mod core;
pub mod input;
pub mod scores;
pub mod term;
pub mod types;
