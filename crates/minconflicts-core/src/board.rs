//! Queen placement with O(1) conflict queries.

use std::fmt;

use crate::error::PlacementError;

/// A square on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Creates a position at the given row and column.
    pub const fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// N queens on an NxN board, one per row.
///
/// The row of each queen is structural: `columns[row]` is the column of the
/// queen fixed to that row, and a move only ever changes that column. Since
/// rows can never collide, three counter families cover every way two queens
/// can attack each other:
///
/// - `column_queens[c]`: queens in column `c`
/// - `asc_diagonals`: queens on the diagonal keyed by `column - row`,
///   shifted by `n - 1` to index an array
/// - `desc_diagonals`: queens on the diagonal keyed by `column + row`
///
/// Each counter includes the queen itself, so the number of *other* queens
/// attacking a queen is the three-counter sum minus three.
///
/// `attacking_pairs` is the number of unordered attacking pairs. It is
/// derived from the counters once at construction and afterwards only
/// adjusted by the conflict delta of each move, so it must agree with a full
/// pairwise rescan at every step. [`count_attacking_pairs`] is that rescan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    n: usize,
    columns: Vec<usize>,
    column_queens: Vec<u32>,
    asc_diagonals: Vec<u32>,
    desc_diagonals: Vec<u32>,
    attacking_pairs: u64,
}

impl Board {
    /// Builds a board from one `(row, column)` pair per row.
    ///
    /// The board size is the number of positions given. Counters are
    /// populated in a single pass, then the pair total is the per-queen
    /// conflict sum halved: every attacking pair is seen once from each end,
    /// so the sum is always even.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if two positions share a row or any
    /// coordinate is out of range.
    pub fn new(initial: &[Position]) -> Result<Self, PlacementError> {
        let n = initial.len();
        let diagonals = (2 * n).saturating_sub(1);
        let mut columns = vec![0usize; n];
        let mut occupied_rows = vec![false; n];
        let mut column_queens = vec![0u32; n];
        let mut asc_diagonals = vec![0u32; diagonals];
        let mut desc_diagonals = vec![0u32; diagonals];

        for &Position { row, column } in initial {
            if row >= n || column >= n {
                return Err(PlacementError::OutOfBounds { row, column, n });
            }
            if occupied_rows[row] {
                return Err(PlacementError::DuplicateRow { row });
            }
            occupied_rows[row] = true;
            columns[row] = column;
            column_queens[column] += 1;
            asc_diagonals[column + (n - 1) - row] += 1;
            desc_diagonals[column + row] += 1;
        }

        let mut board = Board {
            n,
            columns,
            column_queens,
            asc_diagonals,
            desc_diagonals,
            attacking_pairs: 0,
        };
        let conflict_sum: u64 = board
            .positions()
            .map(|queen| u64::from(board.conflict_count(queen)))
            .sum();
        debug_assert!(
            conflict_sum % 2 == 0,
            "every attacking pair is counted from both ends"
        );
        board.attacking_pairs = conflict_sum / 2;
        Ok(board)
    }

    /// Board size.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of other queens attacking the queen at `position`. O(1).
    pub fn conflict_count(&self, position: Position) -> u32 {
        debug_assert!(
            self.is_occupied(position),
            "conflict_count takes an occupied square"
        );
        (self.column_queens[position.column] - 1)
            + (self.asc_diagonals[self.asc_index(position)] - 1)
            + (self.desc_diagonals[self.desc_index(position)] - 1)
    }

    /// Relocates the queen at `from` to `to` within the same row.
    ///
    /// The queen's conflicts at `from` are measured before its counters
    /// drop, its conflicts at `to` after they rise, and the pair total is
    /// adjusted by the difference. This is the only mutation path after
    /// construction. Moving a queen onto its own square is allowed and
    /// leaves the board unchanged.
    pub fn move_queen(&mut self, from: Position, to: Position) {
        debug_assert!(
            self.is_occupied(from),
            "move_queen takes an occupied square"
        );
        debug_assert_eq!(from.row, to.row, "queens stay on their row");
        debug_assert!(to.column < self.n, "target column is on the board");

        let lost = self.conflict_count(from);

        let (from_asc, from_desc) = (self.asc_index(from), self.desc_index(from));
        self.column_queens[from.column] -= 1;
        self.asc_diagonals[from_asc] -= 1;
        self.desc_diagonals[from_desc] -= 1;

        let (to_asc, to_desc) = (self.asc_index(to), self.desc_index(to));
        self.columns[to.row] = to.column;
        self.column_queens[to.column] += 1;
        self.asc_diagonals[to_asc] += 1;
        self.desc_diagonals[to_desc] += 1;

        let gained = self.conflict_count(to);
        self.attacking_pairs = self.attacking_pairs + u64::from(gained) - u64::from(lost);
    }

    /// True when no two queens attack each other.
    pub fn is_solved(&self) -> bool {
        self.attacking_pairs == 0
    }

    /// Running count of unordered attacking pairs.
    pub fn attacking_pairs(&self) -> u64 {
        self.attacking_pairs
    }

    /// Queen positions in row order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(row, &column)| Position::new(row, column))
    }

    fn is_occupied(&self, position: Position) -> bool {
        position.row < self.n && self.columns[position.row] == position.column
    }

    // column - row + (n - 1), rearranged to stay in unsigned arithmetic.
    #[inline]
    fn asc_index(&self, position: Position) -> usize {
        position.column + (self.n - 1) - position.row
    }

    #[inline]
    fn desc_index(&self, position: Position) -> usize {
        position.column + position.row
    }
}

/// Counts attacking pairs by scanning every pair of queens. O(N²).
///
/// The incremental total on [`Board`] must agree with this at all times;
/// tests cross-check the two after randomized move sequences.
pub fn count_attacking_pairs(queens: impl IntoIterator<Item = Position>) -> u64 {
    let queens: Vec<Position> = queens.into_iter().collect();
    let mut pairs = 0u64;

    for i in 0..queens.len() {
        for j in (i + 1)..queens.len() {
            let (a, b) = (queens[i], queens[j]);
            // Row conflict
            if a.row == b.row {
                pairs += 1;
            }
            // Column conflict
            if a.column == b.column {
                pairs += 1;
            }
            // Diagonal conflict: equal row and column distance
            let row_diff = a.row.abs_diff(b.row);
            let column_diff = a.column.abs_diff(b.column);
            if row_diff == column_diff && row_diff != 0 {
                pairs += 1;
            }
        }
    }

    pairs
}
