use minescout_core::Board;

use super::BoxedMethod;
use crate::{Deduction, Method, SolverError};

const NAME: &str = "naive";

/// Single-constraint deduction over each border cell in isolation.
///
/// For a border cell with `m` mines unaccounted for and `k` covered
/// neighbors, two facts follow immediately:
///
/// - `m == 0`: every covered neighbor is mine-free, and
/// - `m == k`: every covered neighbor is a mine.
///
/// Flagged neighbors never appear in the results because they are excluded
/// from covered neighborhoods by construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct Naive;

impl Naive {
    /// Creates a new `Naive` method.
    #[must_use]
    pub const fn new() -> Self {
        Naive
    }
}

impl Method for Naive {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn deduce(&self, board: &Board) -> Result<Deduction, SolverError> {
        let mut deduction = Deduction::new();
        for cell in board.border() {
            let remaining = board.remaining_mines(cell)?;
            let covered = board.covered_count(cell);

            // Every mine around this clue is already flagged.
            if remaining == 0 {
                deduction.extend_safe(board.covered_neighbors(cell));
            }
            // As many mines left as covered neighbors.
            if remaining == i32::from(covered) {
                deduction.extend_mines(board.covered_neighbors(cell));
            }
        }
        Ok(deduction)
    }
}

#[cfg(test)]
mod tests {
    use minescout_core::Position;

    use super::*;
    use crate::testing::MethodTester;

    #[test]
    fn test_zero_clue_proves_all_neighbors_safe() {
        // A revealed 0 in the middle of covered cells clears its whole
        // neighborhood.
        MethodTester::from_str(
            "
            . . .
            . 0 .
            . . .
        ",
        )
        .deduce(&Naive::new())
        .assert_safe_exact([
            Position::new(0, 0),
            Position::new(0, 1),
            Position::new(0, 2),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 0),
            Position::new(2, 1),
            Position::new(2, 2),
        ])
        .assert_mines_exact([]);
    }

    #[test]
    fn test_saturated_clue_proves_all_neighbors_mined() {
        // Both clues see exactly as many covered cells as they need mines.
        MethodTester::from_str(
            "
            2 2
            . .
        ",
        )
        .deduce(&Naive::new())
        .assert_safe_exact([])
        .assert_mines_exact([Position::new(1, 0), Position::new(1, 1)]);
    }

    #[test]
    fn test_flags_count_toward_the_clue() {
        // The flag accounts for the single mine, so the rest is safe.
        MethodTester::from_str(
            "
            1 F
            . .
        ",
        )
        .deduce(&Naive::new())
        .assert_safe_exact([Position::new(1, 0), Position::new(1, 1)])
        .assert_mines_exact([]);
    }

    #[test]
    fn test_unsaturated_clue_proves_nothing() {
        MethodTester::from_str(
            "
            1 1
            . .
        ",
        )
        .deduce(&Naive::new())
        .assert_nothing_deduced();
    }

    #[test]
    fn test_deterministic_on_fixed_board() {
        let board: Board = "
            2 3 2
            . . .
        "
        .parse()
        .unwrap();
        let method = Naive::new();
        let first = method.deduce(&board).unwrap();
        let second = method.deduce(&board).unwrap();
        assert_eq!(first, second);
    }
}
