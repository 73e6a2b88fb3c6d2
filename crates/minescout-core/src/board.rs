//! Rectangular board and its topology queries.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{CellState, Position, PositionSet};

/// A rectangular grid of cell states with 8-connected neighbor queries.
///
/// The board owns every cell exclusively. Dimensions are fixed at
/// construction and the grid is never resized; every `(row, col)` in
/// `[0, rows) × [0, cols)` maps to exactly one cell. The neighbor relation
/// (Chebyshev distance 1, clipped at the edges) is computed on demand and
/// never stored.
///
/// Mutation happens along exactly two paths: a perception update overwrites
/// non-flagged cells via [`set_state`](Self::set_state), and the session
/// commits mine deductions via [`flag`](Self::flag). All other methods are
/// read-only queries.
///
/// # Text form
///
/// Boards round-trip through a whitespace-tolerant text form where `.` is
/// covered, `F` is flagged, and `0`-`8` are revealed clues:
///
/// ```
/// use minescout_core::Board;
///
/// let board: Board = "
///     1 1 1
///     1 F 1
///     1 1 1
/// "
/// .parse()?;
/// assert_eq!(board.rows(), 3);
/// assert_eq!(board.cols(), 3);
/// # Ok::<(), minescout_core::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates a board of the given dimensions with every cell covered.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use minescout_core::{Board, CellState, Position};
    ///
    /// let board = Board::new(8, 10);
    /// assert_eq!(board.state(Position::new(7, 9)), CellState::Covered);
    /// ```
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be non-zero, got {rows}x{cols}");
        Self {
            rows,
            cols,
            cells: vec![CellState::Covered; rows * cols],
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the geometric center cell, rounding down on even dimensions.
    ///
    /// This is the target of the opening reveal, issued before any clue
    /// exists to reason from.
    #[must_use]
    pub const fn center(&self) -> Position {
        Position::new(self.rows / 2, self.cols / 2)
    }

    /// Returns `true` if `pos` lies within the board bounds.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.rows && pos.col() < self.cols
    }

    /// Returns the state of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn state(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    /// Overwrites the state of the cell at `pos`.
    ///
    /// This is the perception write path: an external observer refreshes
    /// every non-flagged cell with its current value before a deduction
    /// pass. Nothing here validates the transition; the observer is trusted
    /// to only reveal clues or leave cells covered.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn set_state(&mut self, pos: Position, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// Marks the cell at `pos` as a deduced mine.
    ///
    /// This is the only mutation the deduction side performs itself; it is
    /// called after the corresponding flag action has been dispatched.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn flag(&mut self, pos: Position) {
        debug_assert!(
            self.state(pos).is_covered(),
            "flagging a cell that is not covered: {pos}"
        );
        self.set_state(pos, CellState::Flagged);
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns `true` if any cell is still covered.
    #[must_use]
    pub fn has_covered_cells(&self) -> bool {
        self.cells.iter().any(CellState::is_covered)
    }

    /// Returns all cells within Chebyshev distance 1 of `pos`, excluding
    /// `pos` itself and clipped to the board bounds.
    ///
    /// The order is deterministic (row-major), but callers must treat the
    /// result as a set.
    ///
    /// # Examples
    ///
    /// ```
    /// use minescout_core::{Board, Position};
    ///
    /// let board = Board::new(5, 5);
    /// assert_eq!(board.neighbors(Position::new(0, 0)).count(), 3);
    /// assert_eq!(board.neighbors(Position::new(0, 2)).count(), 5);
    /// assert_eq!(board.neighbors(Position::new(2, 2)).count(), 8);
    /// ```
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        let row_range = pos.row().saturating_sub(1)..=(pos.row() + 1).min(self.rows - 1);
        let col_range = pos.col().saturating_sub(1)..=(pos.col() + 1).min(self.cols - 1);
        row_range
            .flat_map(move |row| col_range.clone().map(move |col| Position::new(row, col)))
            .filter(move |&neighbor| neighbor != pos)
    }

    /// Returns the covered neighbors of `pos` as a set.
    #[must_use]
    pub fn covered_neighbors(&self, pos: Position) -> PositionSet {
        self.neighbors(pos)
            .filter(|&neighbor| self.state(neighbor).is_covered())
            .collect()
    }

    /// Returns the number of covered neighbors of `pos`.
    #[must_use]
    pub fn covered_count(&self, pos: Position) -> u8 {
        let mut count = 0;
        for neighbor in self.neighbors(pos) {
            if self.state(neighbor).is_covered() {
                count += 1;
            }
        }
        count
    }

    /// Returns the number of flagged neighbors of `pos`.
    #[must_use]
    pub fn flagged_count(&self, pos: Position) -> u8 {
        let mut count = 0;
        for neighbor in self.neighbors(pos) {
            if self.state(neighbor).is_flagged() {
                count += 1;
            }
        }
        count
    }

    /// Returns the count of mines not yet accounted for by flags around a
    /// numbered cell: its clue minus its flagged-neighbor count.
    ///
    /// The result is negative only when more neighbors are flagged than the
    /// clue allows, which cannot happen on a consistent board; deduction
    /// methods draw no conclusion from such a cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidState`] if the cell at `pos` shows no
    /// clue. The border only ever yields numbered cells, so hitting this
    /// from a deduction method indicates a border-extraction defect.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn remaining_mines(&self, pos: Position) -> Result<i32, BoardError> {
        let state = self.state(pos);
        let Some(clue) = state.clue() else {
            return Err(BoardError::InvalidState { pos, state });
        };
        Ok(i32::from(clue) - i32::from(self.flagged_count(pos)))
    }

    /// Returns the border: every numbered cell with at least one covered
    /// neighbor.
    ///
    /// Numbered cells whose whole neighborhood is resolved carry no usable
    /// information and are excluded. The border is recomputed from scratch
    /// on every call; it is never cached across board mutations.
    ///
    /// # Examples
    ///
    /// ```
    /// use minescout_core::{Board, Position};
    ///
    /// let board: Board = "
    ///     0 1 .
    ///     0 1 .
    /// "
    /// .parse()?;
    /// let border = board.border();
    /// assert_eq!(border.len(), 2);
    /// assert!(border.contains(&Position::new(0, 1)));
    /// assert!(border.contains(&Position::new(1, 1)));
    /// # Ok::<(), minescout_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn border(&self) -> PositionSet {
        self.positions()
            .filter(|&pos| self.state(pos).is_number() && self.covered_count(pos) > 0)
            .collect()
    }

    fn index(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} out of bounds for {}x{} board", self.rows, self.cols);
        pos.row() * self.cols + pos.col()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                Display::fmt(&self.state(Position::new(row, col)), f)?;
            }
            if row + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed_rows: Vec<Vec<CellState>> = Vec::new();
        for line in s.lines() {
            let mut row = Vec::new();
            for c in line.chars() {
                if c.is_whitespace() {
                    continue;
                }
                let state =
                    CellState::from_symbol(c).ok_or(ParseBoardError::InvalidCharacter { c })?;
                row.push(state);
            }
            if !row.is_empty() {
                parsed_rows.push(row);
            }
        }

        let rows = parsed_rows.len();
        if rows == 0 {
            return Err(ParseBoardError::Empty);
        }
        let cols = parsed_rows[0].len();
        for (row, cells) in parsed_rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(ParseBoardError::RaggedRow {
                    row,
                    len: cells.len(),
                    expected: cols,
                });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: parsed_rows.concat(),
        })
    }
}

/// Errors produced by board state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A mine-count query addressed a cell that shows no clue.
    #[display("cell {pos} holds no clue: state is {state}")]
    InvalidState {
        /// The queried cell.
        pos: Position,
        /// The state the cell actually held.
        state: CellState,
    },
}

/// Errors produced when parsing a board from its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input contained no cells.
    #[display("board text is empty")]
    Empty,
    /// A row's width differed from the first row's.
    #[display("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found in that row.
        len: usize,
        /// Number of cells in the first row.
        expected: usize,
    },
    /// A character named no cell state.
    #[display("invalid cell character {c:?}")]
    InvalidCharacter {
        /// The offending character.
        c: char,
    },
}
