use minescout_core::{Board, PositionSet};

use super::BoxedMethod;
use crate::{Deduction, Method, SolverError};

const NAME: &str = "group";

/// Pairwise subset deduction between two border cells.
///
/// Strengthens [`Naive`](super::Naive) by comparing clues whose covered
/// neighborhoods are nested, when neither constraint resolves on its own.
/// For border cells `c1`, `c2` with `covered(c1) ⊆ covered(c2)`, let the
/// surplus be the cells only `c2` sees:
///
/// - equal remaining-mine counts: the two constraints admit the same mine
///   count over a strict superset, so the surplus holds no mines (safe);
/// - `c2` needs exactly `|surplus|` more mines than `c1`: the surplus
///   absorbs all of them (mines).
///
/// Subset and difference are computed by coordinate value. Runtime is
/// quadratic in the border size, which stays small on the boards this
/// engine sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct Group;

impl Group {
    /// Creates a new `Group` method.
    #[must_use]
    pub const fn new() -> Self {
        Group
    }
}

struct Constraint {
    covered: PositionSet,
    remaining: i32,
}

impl Method for Group {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedMethod {
        Box::new(*self)
    }

    fn deduce(&self, board: &Board) -> Result<Deduction, SolverError> {
        // Covered neighborhoods and remaining counts are reused across
        // every pair, so compute them once per border cell.
        let mut constraints = Vec::new();
        for cell in board.border() {
            constraints.push(Constraint {
                covered: board.covered_neighbors(cell),
                remaining: board.remaining_mines(cell)?,
            });
        }

        let mut deduction = Deduction::new();
        for narrow in &constraints {
            for wide in &constraints {
                if !narrow.covered.is_subset(&wide.covered) {
                    continue;
                }
                let surplus: PositionSet = wide
                    .covered
                    .difference(&narrow.covered)
                    .copied()
                    .collect();
                if surplus.is_empty() {
                    // Self-pairs and identical neighborhoods prove nothing.
                    continue;
                }

                let deficit = wide.remaining - narrow.remaining;
                if deficit == 0 {
                    deduction.extend_safe(surplus);
                } else if usize::try_from(deficit).is_ok_and(|d| d == surplus.len()) {
                    deduction.extend_mines(surplus);
                }
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
    fn test_equal_counts_prove_surplus_safe() {
        // The corner clue and its wider neighbor need the same single
        // mine, so the cell only the wider clue sees must be empty.
        MethodTester::from_str(
            "
            1 1 1
            1 . .
        ",
        )
        .deduce(&Group::new())
        .assert_safe_exact([Position::new(1, 2)])
        .assert_mines_exact([]);
    }

    #[test]
    fn test_absorbed_deficit_proves_surplus_mined() {
        // The middle clue needs one mine more than each of its nested
        // neighbors, and has exactly one extra cell to put it in.
        MethodTester::from_str(
            "
            0 1 .
            0 2 .
            0 1 .
        ",
        )
        .deduce(&Group::new())
        .assert_safe_exact([])
        .assert_mines_exact([Position::new(0, 2), Position::new(2, 2)]);
    }

    #[test]
    fn test_wall_of_ones_clears_both_flanks() {
        // Constraint subtraction pins the mine to the middle column.
        MethodTester::from_str(
            "
            1 1 1
            . . .
        ",
        )
        .deduce(&Group::new())
        .assert_safe_exact([Position::new(1, 0), Position::new(1, 2)])
        .assert_mines_exact([]);
    }

    #[test]
    fn test_identical_neighborhoods_prove_nothing() {
        MethodTester::from_str(
            "
            1 1
            . .
        ",
        )
        .deduce(&Group::new())
        .assert_nothing_deduced();
    }

    #[test]
    fn test_flags_shift_the_counts() {
        // Each clue has one mine left after the flag; the nested
        // constraints then clear the cell only the wider clues see.
        MethodTester::from_str(
            "
            2 2 1
            F . .
        ",
        )
        .deduce(&Group::new())
        .assert_safe_exact([Position::new(1, 2)])
        .assert_mines_exact([]);
    }

    #[test]
    fn test_deterministic_on_fixed_board() {
        let board: Board = "
            0 1 .
            0 2 .
            0 1 .
        "
        .parse()
        .unwrap();
        let method = Group::new();
        assert_eq!(method.deduce(&board).unwrap(), method.deduce(&board).unwrap());
    }
}
