//! Board state and incremental conflict bookkeeping for the n-queens problem.
//!
//! A [`Board`] holds one queen per row and maintains per-line occupancy
//! counters, so asking how many queens attack a given queen is O(1) and
//! relocating a queen is an O(1) counter update. The running total of
//! attacking pairs is adjusted on every move rather than recomputed, which
//! is what makes a min-conflicts search loop cheap per step.
//!
//! # Example
//!
//! ```
//! use minconflicts_core::{Board, Position};
//!
//! // A solved 4-queens placement.
//! let placement = [
//!     Position::new(0, 1),
//!     Position::new(1, 3),
//!     Position::new(2, 0),
//!     Position::new(3, 2),
//! ];
//! let board = Board::new(&placement).unwrap();
//! assert!(board.is_solved());
//! ```

mod board;
mod error;

pub use board::{count_attacking_pairs, Board, Position};
pub use error::PlacementError;
