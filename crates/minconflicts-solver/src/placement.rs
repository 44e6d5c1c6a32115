//! Random initial placements.

use minconflicts_core::Position;
use rand::seq::SliceRandom;
use rand::Rng;

/// Samples an initial placement with one queen per row and every column
/// used exactly once (a uniform random permutation).
///
/// [`Board::new`](minconflicts_core::Board::new) does not require distinct
/// columns; starting from a permutation just leaves only diagonal conflicts
/// to repair, which is how the classic driver seeds the search.
pub fn random_placement<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Position> {
    let mut columns: Vec<usize> = (0..n).collect();
    columns.shuffle(rng);
    columns
        .into_iter()
        .enumerate()
        .map(|(row, column)| Position::new(row, column))
        .collect()
}
