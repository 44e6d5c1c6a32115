//! Error types for the search driver.

use thiserror::Error;

/// Contract violations surfaced by the search driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A conflicted queen was requested from a board that has none.
    ///
    /// [`MinConflicts::run`](crate::MinConflicts::run) checks `is_solved`
    /// before every pick, so hitting this indicates a caller bug rather
    /// than a runtime condition.
    #[error("all queens are already conflict-free")]
    AllQueensSatisfied,
}
