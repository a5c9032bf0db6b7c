//! A minimax agent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited game tree search with alpha-beta
//! pruning and a heuristic evaluation of the frontier positions to pick
//! a strong move for either player.
//!
//! # Basic Usage
//!
//! ```
//! use connect_four_ai::{board::{Board, Side}, solver::Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut solver = Solver::new(Board::from_moves("112233")?);
//! let (score, best_move) = solver.solve(Side::First);
//!
//! assert!((score, best_move) == (99, 3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod referee;

pub mod eval;

pub mod solver;

mod test;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const WIN_LENGTH: usize = 4;

// ensure a winning line fits on the board in every orientation
const_assert!(WIN_LENGTH <= WIDTH);
const_assert!(WIN_LENGTH <= HEIGHT);
