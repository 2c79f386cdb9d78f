//! A fixed-depth minimax agent for playing the board game 'Connect 4'
//!
//! This agent expands the game tree exhaustively to a fixed number of plies,
//! scoring cut-off positions with a windowed pattern heuristic. Sibling moves
//! are searched in parallel.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, minimax::{Minimax, SearchConfig}};
//!
//! let mut search = Minimax::new(SearchConfig::default().with_depth(1));
//! let result = search.search(&Board::new());
//!
//! // the centre column is the only move that earns a bonus on an empty board
//! assert_eq!(result.column, Some(4));
//! assert_eq!(result.value, 3);
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod evaluation;

pub mod minimax;


/// The number of columns on the game board
pub const COLUMNS: usize = 7;

/// The number of rows on the game board
pub const ROWS: usize = 6;

/// The number of pieces in a row needed to win
pub const CONNECT: usize = 4;

/// The number of plies the AI searches ahead
pub const DEPTH: usize = 4;

// a winning line must fit on the board in every direction
const_assert!(COLUMNS >= CONNECT);
const_assert!(ROWS >= CONNECT);
// the centre bonus is defined over the three middle columns
const_assert!(COLUMNS % 2 == 1 && COLUMNS >= 3);
