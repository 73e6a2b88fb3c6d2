//! Deduction methods and orchestration for the Minescout engine.
//!
//! Each deduction method implements the [`Method`](method::Method) trait:
//! a pure analysis of a [`Board`](minescout_core::Board) that returns the
//! cells it can prove safe or mined. [`MethodSolver`] runs the configured
//! methods in priority order and short-circuits on the first one that
//! finds anything, so the weakest sufficient method always wins.
//!
//! # Examples
//!
//! ```
//! use minescout_core::Board;
//! use minescout_solver::MethodSolver;
//!
//! let board: Board = "
//!     0 1 .
//!     0 1 .
//!     0 1 .
//! "
//! .parse()?;
//!
//! let solver = MethodSolver::with_all_methods();
//! let deduction = solver.deduce(&board)?;
//! assert_eq!(deduction.safe().len(), 2);
//! assert!(deduction.mines().is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    deduction::*,
    error::*,
    method::{BoxedMethod, Method},
    method_solver::*,
};

mod deduction;
mod error;
pub mod method;
mod method_solver;

#[cfg(test)]
mod testing;
