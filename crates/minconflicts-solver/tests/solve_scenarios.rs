//! End-to-end search scenarios.

use minconflicts_core::{count_attacking_pairs, Board, PlacementError, Position};
use minconflicts_solver::{random_placement, MinConflicts, SolveOutcome};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn board_from_columns(columns: &[usize]) -> Board {
    let positions: Vec<Position> = columns
        .iter()
        .enumerate()
        .map(|(row, &column)| Position::new(row, column))
        .collect();
    Board::new(&positions).unwrap()
}

#[test]
fn single_queen_is_solved_in_zero_steps() {
    let mut board = board_from_columns(&[0]);
    let outcome = MinConflicts::with_seed(1).run(&mut board, 100);
    assert_eq!(outcome, SolveOutcome::Solved(0));
}

#[test]
fn four_queens_solves_within_budget() {
    // The two 4-queens solutions, up to which one the tie-breaks land on.
    let solutions: [&[usize]; 2] = [&[1, 3, 0, 2], &[2, 0, 3, 1]];

    for seed in 0..20 {
        let mut board = board_from_columns(&[0, 1, 2, 3]);
        let outcome = MinConflicts::with_seed(seed).run(&mut board, 1_000);

        if let SolveOutcome::Solved(steps) = outcome {
            assert!(steps < 1_000);
            assert!(board.is_solved());
            assert_eq!(count_attacking_pairs(board.positions()), 0);

            let columns: Vec<usize> = board.positions().map(|p| p.column).collect();
            assert!(solutions.contains(&columns.as_slice()));
            return;
        }
    }
    panic!("no seed solved 4-queens within 1000 steps");
}

#[test]
fn large_board_solves_from_random_start() {
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let placement = random_placement(50, &mut rng);
        let mut board = Board::new(&placement).unwrap();

        if MinConflicts::from_rng(rng).run(&mut board, 50_000).is_solved() {
            assert!(board.is_solved());
            assert_eq!(count_attacking_pairs(board.positions()), 0);
            return;
        }
    }
    panic!("no seed solved 50-queens within 50000 steps");
}

#[test]
fn zero_budget_returns_exhausted_without_moving() {
    let mut board = board_from_columns(&[0, 1, 2, 3]);
    let before: Vec<Position> = board.positions().collect();
    let pairs_before = board.attacking_pairs();

    let outcome = MinConflicts::with_seed(3).run(&mut board, 0);

    assert_eq!(outcome, SolveOutcome::Exhausted);
    assert_eq!(board.positions().collect::<Vec<_>>(), before);
    assert_eq!(board.attacking_pairs(), pairs_before);
}

#[test]
fn unsolvable_sizes_exhaust_the_budget() {
    // No solution exists for n=2 or n=3, so the search must report
    // exhaustion rather than loop.
    for columns in [&[0usize, 1] as &[usize], &[0, 1, 2]] {
        let mut board = board_from_columns(columns);
        let outcome = MinConflicts::with_seed(5).run(&mut board, 500);
        assert_eq!(outcome, SolveOutcome::Exhausted);
        assert!(!board.is_solved());
    }
}

#[test]
fn duplicate_row_is_rejected() {
    let positions = [
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(0, 2),
    ];
    assert_eq!(
        Board::new(&positions),
        Err(PlacementError::DuplicateRow { row: 2 })
    );
}

#[test]
fn incremental_total_survives_a_full_search() {
    let mut rng = StdRng::seed_from_u64(13);
    let placement = random_placement(12, &mut rng);
    let mut board = Board::new(&placement).unwrap();

    MinConflicts::from_rng(rng).run(&mut board, 2_000);

    // Whatever the outcome, the incremental total and the rescan agree.
    assert_eq!(
        board.attacking_pairs(),
        count_attacking_pairs(board.positions())
    );
}
