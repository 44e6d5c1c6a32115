//! Min-conflicts search for the n-queens problem.
//!
//! Each step picks one of the most-conflicted queens and slides it along its
//! row to the column that leaves it with the fewest conflicts, breaking ties
//! at random. The loop is bounded by a step budget: min-conflicts is
//! incomplete and can stall in a local minimum, so the search guarantees
//! bounded effort, not a solution. [`solve_first`] layers independent random
//! restarts on top for the cases where a single run stalls.
//!
//! # Example
//!
//! ```
//! use minconflicts_core::Board;
//! use minconflicts_solver::{random_placement, MinConflicts, SolveOutcome};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let placement = random_placement(8, &mut rng);
//! let mut board = Board::new(&placement).unwrap();
//!
//! let outcome = MinConflicts::from_rng(rng).run(&mut board, 10_000);
//! if let SolveOutcome::Solved(steps) = outcome {
//!     assert!(board.is_solved());
//!     assert!(steps < 10_000);
//! }
//! ```

mod error;
mod placement;
mod restart;
mod search;

pub use error::SearchError;
pub use placement::random_placement;
pub use restart::{solve_first, RestartSolution};
pub use search::{MinConflicts, SolveOutcome};
