//! Observed cell states.

use std::fmt::{self, Display, Write as _};

/// The observed state of a single board cell.
///
/// Exactly one state holds at any time. Cells start [`Covered`], move to
/// [`Number`] when a perception update reveals their clue, and move to
/// [`Flagged`] when the session commits a mine deduction. No transition
/// ever returns a cell to `Covered`.
///
/// [`Covered`]: CellState::Covered
/// [`Number`]: CellState::Number
/// [`Flagged`]: CellState::Flagged
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Not yet revealed; may or may not hold a mine.
    #[default]
    Covered,
    /// Marked as a deduced mine by the solver.
    Flagged,
    /// Revealed, showing the count of adjacent mines in the range 0-8.
    Number(u8),
}

impl CellState {
    /// Creates a revealed state from an adjacent-mine count.
    ///
    /// # Panics
    ///
    /// Panics if `clue` is greater than 8; a cell has at most 8 neighbors.
    ///
    /// # Examples
    ///
    /// ```
    /// use minescout_core::CellState;
    ///
    /// let state = CellState::revealed(3);
    /// assert_eq!(state.clue(), Some(3));
    /// ```
    #[must_use]
    pub fn revealed(clue: u8) -> Self {
        assert!(clue <= 8, "clue must be between 0 and 8, got {clue}");
        Self::Number(clue)
    }

    /// Returns the revealed adjacent-mine count, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use minescout_core::CellState;
    ///
    /// assert_eq!(CellState::Number(2).clue(), Some(2));
    /// assert_eq!(CellState::Covered.clue(), None);
    /// assert_eq!(CellState::Flagged.clue(), None);
    /// ```
    #[must_use]
    pub const fn clue(&self) -> Option<u8> {
        match self {
            Self::Number(clue) => Some(*clue),
            Self::Covered | Self::Flagged => None,
        }
    }

    /// Parses a state from its board-text symbol.
    ///
    /// `.` is covered, `F` is flagged, and `0`-`8` are revealed clues.
    /// Returns `None` for any other character.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Covered),
            'F' => Some(Self::Flagged),
            '0' => Some(Self::Number(0)),
            '1' => Some(Self::Number(1)),
            '2' => Some(Self::Number(2)),
            '3' => Some(Self::Number(3)),
            '4' => Some(Self::Number(4)),
            '5' => Some(Self::Number(5)),
            '6' => Some(Self::Number(6)),
            '7' => Some(Self::Number(7)),
            '8' => Some(Self::Number(8)),
            _ => None,
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Covered => f.write_char('.'),
            Self::Flagged => f.write_char('F'),
            Self::Number(clue) => Display::fmt(clue, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_covered() {
        assert_eq!(CellState::default(), CellState::Covered);
    }

    #[test]
    fn test_revealed_accepts_full_clue_range() {
        for clue in 0..=8 {
            assert_eq!(CellState::revealed(clue), CellState::Number(clue));
        }
    }

    #[test]
    #[should_panic(expected = "clue must be between 0 and 8")]
    fn test_revealed_rejects_nine() {
        let _ = CellState::revealed(9);
    }

    #[test]
    fn test_symbol_round_trip() {
        for c in ['.', 'F', '0', '1', '2', '3', '4', '5', '6', '7', '8'] {
            let state = CellState::from_symbol(c).unwrap();
            assert_eq!(state.to_string(), c.to_string());
        }
    }

    #[test]
    fn test_from_symbol_rejects_unknown() {
        assert_eq!(CellState::from_symbol('9'), None);
        assert_eq!(CellState::from_symbol('x'), None);
        assert_eq!(CellState::from_symbol(' '), None);
    }

    #[test]
    fn test_variant_predicates() {
        assert!(CellState::Covered.is_covered());
        assert!(CellState::Flagged.is_flagged());
        assert!(CellState::Number(0).is_number());
        assert!(!CellState::Number(0).is_covered());
    }
}
