//! Parallel multi-restart driver.
//!
//! Min-conflicts can stall in a local minimum, and the usual remedy is a
//! fresh random restart. Restarts are embarrassingly parallel: every attempt
//! owns its board and generator outright, so they race on rayon's pool and
//! the first solved board wins. The per-board step loop itself stays
//! strictly sequential.

use minconflicts_core::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::info;

use crate::placement::random_placement;
use crate::search::{MinConflicts, SolveOutcome};

/// A solved board together with the attempt that produced it.
#[derive(Debug)]
pub struct RestartSolution {
    /// The conflict-free board.
    pub board: Board,
    /// Index of the winning attempt.
    pub attempt: u64,
    /// Steps the winning attempt took.
    pub steps: u64,
}

/// Races `attempts` independent searches and returns the first solution.
///
/// Every attempt derives its own ChaCha stream from `seed`, so the set of
/// boards explored is reproducible even though which attempt finishes first
/// depends on scheduling. Returns `None` when every attempt exhausts its
/// step budget.
pub fn solve_first(n: usize, max_steps: u64, attempts: u64, seed: u64) -> Option<RestartSolution> {
    (0..attempts).into_par_iter().find_map_any(|attempt| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(attempt);

        let placement = random_placement(n, &mut rng);
        let mut board =
            Board::new(&placement).expect("a permutation placement is always valid");

        match MinConflicts::from_rng(rng).run(&mut board, max_steps) {
            SolveOutcome::Solved(steps) => {
                info!(event = "restart_solved", attempt, steps);
                Some(RestartSolution {
                    board,
                    attempt,
                    steps,
                })
            }
            SolveOutcome::Exhausted => None,
        }
    })
}
