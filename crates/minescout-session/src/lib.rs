//! The Minescout session loop.
//!
//! A [`Session`] owns the board and the solver and brokers between two
//! narrow collaborator interfaces: an [`Observer`] that refreshes cell
//! states before each deduction pass (perception), and an [`Actuator`]
//! that consumes the reveal/flag requests a pass produces (actuation).
//! The engine never inspects raw imagery and never emits raw input; its
//! obligations end at structured board state on one side and [`Action`]
//! values on the other.
//!
//! [`sim::SimulatedGame`] plays both collaborator roles against an
//! in-memory mine field, letting tests and the CLI drive complete games.
//!
//! # Examples
//!
//! ```
//! use minescout_core::Position;
//! use minescout_session::{Session, sim::SimulatedGame};
//! use minescout_solver::MethodSolver;
//!
//! // One mine in the corner of a 4x4 field.
//! let mut game = SimulatedGame::new(4, 4, [Position::new(0, 0)]);
//! let mut session = Session::new(4, 4, MethodSolver::with_all_methods());
//!
//! let summary = session.run(&mut game)?;
//! assert!(summary.outcome().is_completed());
//! assert!(!game.detonated());
//! # Ok::<(), minescout_session::SessionError>(())
//! ```

pub use self::{action::*, error::*, session::*};

mod action;
mod error;
mod session;
pub mod sim;
