//! Deduction pass results.

use minescout_core::{Position, PositionSet};

/// The outcome of one deduction pass: cells proven mine-free and cells
/// proven to be mines.
///
/// Both sets are deduplicated and iterate in row-major order, so a pass
/// over a fixed board state always yields the same action sequence. A
/// deduction is transient: it is produced, dispatched, and dropped within
/// a single orchestration pass, never cached across board mutations.
///
/// An empty deduction is the "no progress" outcome, not an error: the
/// caller decides whether to stop, report a stuck board, or try something
/// stronger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduction {
    safe: PositionSet,
    mines: PositionSet,
}

impl Deduction {
    /// Creates an empty deduction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cells proven mine-free.
    #[must_use]
    pub fn safe(&self) -> &PositionSet {
        &self.safe
    }

    /// Returns the cells proven to be mines.
    #[must_use]
    pub fn mines(&self) -> &PositionSet {
        &self.mines
    }

    /// Returns `true` when the pass proved nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.safe.is_empty() && self.mines.is_empty()
    }

    /// Returns the cells claimed by both sets.
    ///
    /// Non-empty only when the underlying board state is contradictory.
    /// See [`ConflictPolicy`](crate::ConflictPolicy) for how the
    /// orchestrator can reconcile these.
    #[must_use]
    pub fn conflicts(&self) -> PositionSet {
        self.safe.intersection(&self.mines).copied().collect()
    }

    /// Adds cells proven mine-free.
    pub fn extend_safe<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.safe.extend(cells);
    }

    /// Adds cells proven to be mines.
    pub fn extend_mines<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.mines.extend(cells);
    }

    pub(crate) fn remove_safe(&mut self, cells: &PositionSet) {
        for cell in cells {
            self.safe.remove(cell);
        }
    }

    pub(crate) fn remove_mines(&mut self, cells: &PositionSet) {
        for cell in cells {
            self.mines.remove(cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let deduction = Deduction::new();
        assert!(deduction.is_empty());
        assert!(deduction.conflicts().is_empty());
    }

    #[test]
    fn test_extend_deduplicates() {
        let mut deduction = Deduction::new();
        deduction.extend_safe([Position::new(0, 0), Position::new(0, 0)]);
        deduction.extend_safe([Position::new(0, 0)]);
        assert_eq!(deduction.safe().len(), 1);
        assert!(!deduction.is_empty());
    }

    #[test]
    fn test_conflicts_is_the_intersection() {
        let mut deduction = Deduction::new();
        deduction.extend_safe([Position::new(0, 0), Position::new(0, 1)]);
        deduction.extend_mines([Position::new(0, 1), Position::new(1, 1)]);
        let conflicts = deduction.conflicts();
        assert_eq!(conflicts, [Position::new(0, 1)].into_iter().collect());
    }
}
