//! Error types for board construction.

use thiserror::Error;

/// Rejection reasons for an initial queen placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Two queens were assigned to the same row.
    #[error("two queens share row {row}")]
    DuplicateRow { row: usize },

    /// A coordinate lies outside the board.
    #[error("position ({row}, {column}) is outside the {n}x{n} board")]
    OutOfBounds { row: usize, column: usize, n: usize },
}
