//! Session error types.

use minescout_solver::SolverError;

/// Errors surfaced by the session loop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SessionError {
    /// The deduction pass failed.
    #[display("deduction pass failed: {_0}")]
    Solver(#[from] SolverError),
}
