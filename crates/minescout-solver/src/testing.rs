//! Test utilities for method implementations.
//!
//! [`MethodTester`] runs a deduction method against a board fixture given
//! in the board text form and asserts on the resulting safe/mine sets.
//! All methods return `self` for fluent chaining, and assertion failures
//! report the caller's location via `#[track_caller]`.

use minescout_core::{Board, Position, PositionSet};

use crate::{Deduction, Method};

/// A fluent harness for verifying deduction methods against board
/// fixtures.
#[derive(Debug)]
pub struct MethodTester {
    board: Board,
    deduction: Deduction,
}

impl MethodTester {
    /// Creates a tester from board text (`.` covered, `F` flagged, `0`-`8`
    /// clues).
    ///
    /// # Panics
    ///
    /// Panics if the text is not a valid board.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let board = s.parse().unwrap();
        Self {
            board,
            deduction: Deduction::new(),
        }
    }

    /// Runs the method once, storing its result for later assertions.
    ///
    /// # Panics
    ///
    /// Panics if the method returns an error.
    #[track_caller]
    pub fn deduce<M>(mut self, method: &M) -> Self
    where
        M: Method,
    {
        self.deduction = method.deduce(&self.board).unwrap();
        self
    }

    /// Asserts that exactly the given cells were proven safe.
    ///
    /// # Panics
    ///
    /// Panics if the safe set differs from the expectation.
    #[track_caller]
    pub fn assert_safe_exact<I>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let expected: PositionSet = cells.into_iter().collect();
        assert_eq!(
            self.deduction.safe(),
            &expected,
            "safe set mismatch (mines: {:?})",
            self.deduction.mines()
        );
        self
    }

    /// Asserts that exactly the given cells were proven mined.
    ///
    /// # Panics
    ///
    /// Panics if the mine set differs from the expectation.
    #[track_caller]
    pub fn assert_mines_exact<I>(self, cells: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let expected: PositionSet = cells.into_iter().collect();
        assert_eq!(
            self.deduction.mines(),
            &expected,
            "mine set mismatch (safe: {:?})",
            self.deduction.safe()
        );
        self
    }

    /// Asserts that the method proved nothing at all.
    ///
    /// # Panics
    ///
    /// Panics if either result set is non-empty.
    #[track_caller]
    pub fn assert_nothing_deduced(self) -> Self {
        assert!(
            self.deduction.is_empty(),
            "expected no deduction, got {:?}",
            self.deduction
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use minescout_core::Board;

    use super::*;
    use crate::{BoxedMethod, SolverError};

    #[derive(Debug)]
    struct NoOpMethod;

    impl Method for NoOpMethod {
        fn name(&self) -> &'static str {
            "no-op"
        }

        fn clone_box(&self) -> BoxedMethod {
            Box::new(NoOpMethod)
        }

        fn deduce(&self, _board: &Board) -> Result<Deduction, SolverError> {
            Ok(Deduction::new())
        }
    }

    #[derive(Debug)]
    struct MarkCornerSafe;

    impl Method for MarkCornerSafe {
        fn name(&self) -> &'static str {
            "mark-corner-safe"
        }

        fn clone_box(&self) -> BoxedMethod {
            Box::new(MarkCornerSafe)
        }

        fn deduce(&self, _board: &Board) -> Result<Deduction, SolverError> {
            let mut deduction = Deduction::new();
            deduction.extend_safe([Position::new(0, 0)]);
            Ok(deduction)
        }
    }

    #[test]
    fn test_assert_nothing_deduced_accepts_no_op() {
        MethodTester::from_str(". .")
            .deduce(&NoOpMethod)
            .assert_nothing_deduced();
    }

    #[test]
    #[should_panic(expected = "expected no deduction")]
    fn test_assert_nothing_deduced_rejects_progress() {
        MethodTester::from_str(". .")
            .deduce(&MarkCornerSafe)
            .assert_nothing_deduced();
    }

    #[test]
    fn test_exact_assertions_chain() {
        MethodTester::from_str(". .")
            .deduce(&MarkCornerSafe)
            .assert_safe_exact([Position::new(0, 0)])
            .assert_mines_exact([]);
    }

    #[test]
    #[should_panic(expected = "safe set mismatch")]
    fn test_assert_safe_exact_rejects_mismatch() {
        MethodTester::from_str(". .")
            .deduce(&MarkCornerSafe)
            .assert_safe_exact([Position::new(0, 1)]);
    }
}
