use minescout_core::Board;

use super::BoxedMethod;
use crate::{Deduction, Method, SolverError};

const NAME: &str = "backtracking";

/// Extension point for exhaustive search over the border's covered cells.
///
/// The intended algorithm enumerates mine/safe labelings of the covered
/// cells along the border, keeps only those consistent with every clue's
/// remaining-mine count, and reports the cells labeled the same way in
/// every surviving assignment. No such search is implemented yet: the
/// method currently yields no deductions, and it stays out of
/// [`all_methods`](super::all_methods) until it earns its place there.
/// Because it already implements [`Method`], a future implementation slots
/// into the solver without touching its dispatch.
#[derive(Debug, Default, Clone, Copy)]
pub struct Backtracking;

impl Backtracking {
    /// Creates a new `Backtracking` method.
    #[must_use]
    pub const fn new() -> Self {
        Backtracking
    }
}

impl Method for Backtracking {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn deduce(&self, _board: &Board) -> Result<Deduction, SolverError> {
        Ok(Deduction::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MethodTester;

    #[test]
    fn test_yields_no_deductions() {
        // Even on a board the other methods resolve outright.
        MethodTester::from_str(
            "
            . . .
            . 0 .
            . . .
        ",
        )
        .deduce(&Backtracking::new())
        .assert_nothing_deduced();
    }
}
