//! Core data structures for the Minescout deduction engine.
//!
//! This crate provides the board model shared by the solver and session
//! components:
//!
//! - [`Position`]: a value-identity (row, column) cell address
//! - [`CellState`]: the observed state of one cell (covered, flagged, or a
//!   revealed mine count)
//! - [`Board`]: an owned rectangular grid of cell states with 8-connected
//!   neighbor queries and border extraction
//! - [`PositionSet`]: a deduplicated, deterministically ordered set of cell
//!   addresses
//!
//! Cells have no identity beyond their coordinates: the board is the sole
//! owner of all state, and every set operation over cells works on
//! positions by value.
//!
//! # Examples
//!
//! ```
//! use minescout_core::{Board, Position};
//!
//! let board: Board = "
//!     1 1 .
//!     0 1 .
//!     0 1 .
//! "
//! .parse()?;
//!
//! // The border is every numbered cell that still touches a covered cell.
//! let border = board.border();
//! assert!(border.contains(&Position::new(0, 1)));
//! assert!(!border.contains(&Position::new(0, 2))); // covered, not a clue
//! # Ok::<(), minescout_core::ParseBoardError>(())
//! ```

pub use self::{board::*, cell_state::*, position::*};

mod board;
mod cell_state;
mod position;
