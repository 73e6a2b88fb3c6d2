//! An in-memory game standing in for real perception and actuation.
//!
//! [`SimulatedGame`] owns the ground truth (mine placement and the clue
//! counts derived from it) and plays both collaborator roles: as an
//! [`Actuator`] it receives reveal and flag requests, and as an
//! [`Observer`] it writes the resulting visible state back onto the
//! session's board. Tests and the CLI drive complete games through it
//! without a screen or an input device in sight.

use minescout_core::{Board, CellState, Position, PositionSet};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::{Action, Actuator, Observer};

/// Ground truth and visible state for a simulated game.
///
/// Revealing a zero-clue cell opens its whole connected zero region, the
/// way the real game cascades. Revealing a mine does not abort anything;
/// it is recorded and reported through [`detonated`](Self::detonated),
/// since a correct deduction engine must never trigger it.
///
/// # Examples
///
/// ```
/// use minescout_core::{Board, Position};
/// use minescout_session::{Action, Actuator as _, Observer as _, sim::SimulatedGame};
///
/// let mut game = SimulatedGame::new(3, 3, [Position::new(0, 0)]);
/// game.act(Action::Reveal(Position::new(2, 2)));
///
/// let mut board = Board::new(3, 3);
/// game.observe(&mut board);
/// // The zero region opened everything except the mine.
/// assert!(board.state(Position::new(0, 0)).is_covered());
/// assert_eq!(board.state(Position::new(0, 1)).clue(), Some(1));
/// assert_eq!(board.state(Position::new(2, 2)).clue(), Some(0));
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    grid: Board,
    mines: PositionSet,
    clues: Vec<u8>,
    visible: Vec<bool>,
    flags: PositionSet,
    detonated: bool,
}

impl SimulatedGame {
    /// Creates a game with mines at exactly the given positions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or a mine lies out of bounds.
    #[must_use]
    pub fn new<I>(rows: usize, cols: usize, mines: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        // The board contributes only its geometry; its cells stay covered.
        let grid = Board::new(rows, cols);
        let mines: PositionSet = mines.into_iter().collect();
        for &mine in &mines {
            assert!(grid.contains(mine), "mine {mine} out of bounds for {rows}x{cols} field");
        }

        let mut clues = vec![0; rows * cols];
        for pos in grid.positions() {
            if mines.contains(&pos) {
                continue;
            }
            let mut clue = 0;
            for neighbor in grid.neighbors(pos) {
                if mines.contains(&neighbor) {
                    clue += 1;
                }
            }
            clues[pos.row() * cols + pos.col()] = clue;
        }

        Self {
            grid,
            mines,
            clues,
            visible: vec![false; rows * cols],
            flags: PositionSet::new(),
            detonated: false,
        }
    }

    /// Creates a game with `count` mines placed by a seeded generator,
    /// keeping the cells within Chebyshev distance 1 of `safe` clear.
    ///
    /// The same seed always produces the same field.
    ///
    /// # Panics
    ///
    /// Panics if the field cannot hold `count` mines outside the safe
    /// zone.
    #[must_use]
    pub fn random(rows: usize, cols: usize, count: usize, safe: Position, seed: u64) -> Self {
        let zone = Board::new(rows, cols);
        let reserved = zone.neighbors(safe).count() + usize::from(zone.contains(safe));
        assert!(
            count <= rows * cols - reserved,
            "cannot place {count} mines on a {rows}x{cols} field with a safe zone around {safe}"
        );

        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut mines = PositionSet::new();
        while mines.len() < count {
            let pos = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
            if pos.row().abs_diff(safe.row()) <= 1 && pos.col().abs_diff(safe.col()) <= 1 {
                continue;
            }
            mines.insert(pos);
        }
        Self::new(rows, cols, mines)
    }

    /// Returns the hidden mine set.
    #[must_use]
    pub fn mines(&self) -> &PositionSet {
        &self.mines
    }

    /// Returns the flags received so far.
    #[must_use]
    pub fn flags(&self) -> &PositionSet {
        &self.flags
    }

    /// Returns `true` if a reveal request ever hit a mine.
    #[must_use]
    pub const fn detonated(&self) -> bool {
        self.detonated
    }

    fn index(&self, pos: Position) -> usize {
        pos.row() * self.grid.cols() + pos.col()
    }

    fn reveal(&mut self, pos: Position) {
        if self.mines.contains(&pos) {
            log::warn!("reveal request hit the mine at {pos}");
            self.detonated = true;
            return;
        }

        // Open the cell; a zero clue cascades through its region.
        let mut pending = vec![pos];
        while let Some(cell) = pending.pop() {
            let index = self.index(cell);
            if self.visible[index] || self.mines.contains(&cell) {
                continue;
            }
            self.visible[index] = true;
            if self.clues[index] == 0 {
                pending.extend(self.grid.neighbors(cell));
            }
        }
    }
}

impl Observer for SimulatedGame {
    fn observe(&mut self, board: &mut Board) {
        for pos in self.grid.positions() {
            if board.state(pos).is_flagged() {
                continue;
            }
            let state = if self.visible[self.index(pos)] {
                CellState::revealed(self.clues[self.index(pos)])
            } else {
                CellState::Covered
            };
            board.set_state(pos, state);
        }
    }
}

impl Actuator for SimulatedGame {
    fn act(&mut self, action: Action) {
        match action {
            Action::Reveal(pos) => self.reveal(pos),
            Action::Flag(pos) => {
                self.flags.insert(pos);
            }
        }
    }
}
