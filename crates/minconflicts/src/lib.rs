//! Min-conflicts n-queens solver.
//!
//! One-stop re-export of the board, search, and configuration APIs.
//!
//! # Example
//!
//! ```
//! use minconflicts::prelude::*;
//!
//! // A solved 4-queens placement reports success without taking a step.
//! let placement = [
//!     Position::new(0, 1),
//!     Position::new(1, 3),
//!     Position::new(2, 0),
//!     Position::new(3, 2),
//! ];
//! let mut board = Board::new(&placement).unwrap();
//! let outcome = MinConflicts::with_seed(42).run(&mut board, 100);
//! assert_eq!(outcome, SolveOutcome::Solved(0));
//! ```

// Board state and validation
pub use minconflicts_core::{count_attacking_pairs, Board, PlacementError, Position};

// Search engine and restart driver
pub use minconflicts_solver::{
    random_placement, solve_first, MinConflicts, RestartSolution, SearchError, SolveOutcome,
};

// File-based configuration
pub use minconflicts_config::{ConfigError, RestartConfig, SolverConfig, TerminationConfig};

pub mod prelude {
    pub use super::{Board, MinConflicts, PlacementError, Position, SolveOutcome, SolverConfig};
}
