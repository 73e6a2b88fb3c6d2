//! Deduction methods.
//!
//! This module provides the deduction methods the engine can run against a
//! board. Each method implements the [`Method`] trait and proves cells
//! safe or mined from the currently revealed clues alone, without
//! guessing.

use std::fmt::Debug;

use minescout_core::Board;

pub use self::{backtracking::Backtracking, group::Group, naive::Naive};
use crate::{Deduction, SolverError};

mod backtracking;
mod group;
mod naive;

/// Returns the standard methods, in fixed priority order.
///
/// Ordered from cheapest to strongest: [`Naive`] before [`Group`]. The
/// ordering is observable behavior (on ambiguous boards it decides which
/// deductions are found first) and must be preserved. [`Backtracking`]
/// stays out of this list until it can produce deductions.
///
/// # Examples
///
/// ```
/// use minescout_solver::method::{self, Method as _};
///
/// let methods = method::all_methods();
/// assert_eq!(methods.len(), 2);
/// assert_eq!(methods[0].name(), "naive");
/// ```
#[must_use]
pub fn all_methods() -> Vec<BoxedMethod> {
    vec![Box::new(Naive::new()), Box::new(Group::new())]
}

/// A deduction method: a pure analysis of the current board state.
pub trait Method: Debug {
    /// Returns the name of the method.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the method.
    fn clone_box(&self) -> BoxedMethod;

    /// Evaluates the board and returns every cell this method can prove
    /// safe or mined.
    ///
    /// Methods never mutate the board, and for a fixed board state the
    /// result is identical on every call.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidState`] if a clue query addressed a
    /// cell that shows no number; see the error's documentation for why
    /// this is a fault rather than a recoverable condition.
    fn deduce(&self, board: &Board) -> Result<Deduction, SolverError>;
}

/// A boxed method.
pub type BoxedMethod = Box<dyn Method>;

impl Clone for BoxedMethod {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
