//! Solver error types.

use minescout_core::BoardError;

/// Errors surfaced by deduction methods.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// A method queried the clue of a cell that shows none.
    ///
    /// Border extraction only yields numbered cells, so this indicates a
    /// defect in the border computation or in a method's cell selection,
    /// never a property of the board being solved. It is propagated
    /// immediately rather than swallowed.
    #[display("invalid state query: {_0}")]
    InvalidState(#[from] BoardError),
}
