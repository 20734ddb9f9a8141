//! A heuristic opponent for the board game 'Connect 4'
//!
//! This engine uses a depth-limited minimax search with alpha-beta
//! pruning and a hand-tuned positional evaluation to pick a column
//! for the side it plays. Difficulty presets trade search depth
//! against a deliberate chance of playing a random move.
//!
//! # Basic Usage
//!
//! ```
//! use fourline_ai::{Board, Difficulty, Engine, Level, Side};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! let mut engine = Engine::with_seed(Side::PlayerTwo, Difficulty::from_level(Level::Hard), 0);
//! let column = engine.choose_move(&mut board)?;
//!
//! assert!(column < fourline_ai::COLS);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod difficulty;

pub mod engine;

pub mod error;

pub mod evaluator;

pub mod referee;


pub use board::{Board, Cell, Side};
pub use difficulty::{Difficulty, Level};
pub use engine::Engine;
pub use error::EngineError;

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of columns on the game board
pub const COLS: usize = 7;

// a four-in-a-row window must fit along every orientation
const_assert!(ROWS >= 4);
const_assert!(COLS >= 4);
