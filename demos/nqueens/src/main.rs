//! N-Queens demo driver.
//!
//! Thin wrapper around the solver: reads the board size and step budget
//! from the command line, seeds a random placement, runs the search, and
//! prints the result.
//!
//! ```text
//! nqueens [N] [MAX_STEPS]
//! ```
//!
//! Optional settings (random seed, restart attempts) are read from
//! `solver.toml` in the working directory.

use std::env;
use std::process::ExitCode;

use minconflicts::prelude::*;
use minconflicts::{count_attacking_pairs, random_placement, solve_first};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

const DEFAULT_N: usize = 8;
const DEFAULT_MAX_STEPS: u64 = 10_000;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let n: usize = match args.next().map(|arg| arg.parse()) {
        None => DEFAULT_N,
        Some(Ok(n)) => n,
        Some(Err(_)) => return usage(),
    };

    let config = SolverConfig::load("solver.toml").unwrap_or_default();
    let max_steps: u64 = match args.next().map(|arg| arg.parse()) {
        None => config.step_count_limit().unwrap_or(DEFAULT_MAX_STEPS),
        Some(Ok(steps)) => steps,
        Some(Err(_)) => return usage(),
    };
    let attempts = config.restart_attempts().unwrap_or(1);

    println!("Solving {n}-queens with a budget of {max_steps} steps...");

    if attempts > 1 {
        let seed = config.random_seed.unwrap_or_else(rand::random);
        match solve_first(n, max_steps, attempts, seed) {
            Some(solution) => {
                report_solved(&solution.board, solution.steps);
                ExitCode::SUCCESS
            }
            None => {
                println!(
                    "Not solved: all {attempts} attempts exhausted their budget. \
                     Try more steps or more attempts."
                );
                ExitCode::FAILURE
            }
        }
    } else {
        let mut rng = match config.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let placement = random_placement(n, &mut rng);
        let mut board = match Board::new(&placement) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("invalid placement: {err}");
                return ExitCode::FAILURE;
            }
        };

        match MinConflicts::from_rng(rng).run(&mut board, max_steps) {
            SolveOutcome::Solved(steps) => {
                report_solved(&board, steps);
                ExitCode::SUCCESS
            }
            SolveOutcome::Exhausted => {
                println!(
                    "Not solved after {max_steps} steps ({} attacking pairs remain). \
                     Try increasing the budget.",
                    board.attacking_pairs()
                );
                ExitCode::FAILURE
            }
        }
    }
}

fn usage() -> ExitCode {
    eprintln!("usage: nqueens [N] [MAX_STEPS]");
    ExitCode::FAILURE
}

fn report_solved(board: &Board, steps: u64) {
    println!("Solved {}-queens in {steps} steps.", board.n());
    print_board(board);

    // The incremental counters and a full rescan must tell the same story.
    assert_eq!(count_attacking_pairs(board.positions()), 0);
}

/// Prints the board to stdout. Large boards get a position list instead of
/// a grid.
fn print_board(board: &Board) {
    let n = board.n();
    let columns: Vec<usize> = board.positions().map(|p| p.column).collect();
    if n > 32 {
        println!("columns by row: {columns:?}");
        return;
    }

    println!("{}", "-".repeat(n * 2 + 1));
    for row in 0..n {
        print!("|");
        for column in 0..n {
            print!("{}", if columns[row] == column { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}
