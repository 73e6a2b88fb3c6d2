//! The observe-deduce-act loop.

use minescout_core::Board;
use minescout_solver::{MethodSolver, MethodSolverStats};

use crate::{Action, SessionError};

/// Supplies fresh cell states before each deduction pass.
///
/// This is the perception boundary. Before a pass, the implementation
/// overwrites the state of every cell that is not already flagged with its
/// currently visible value: a clue for revealed cells, covered otherwise.
/// How the values are produced (screen capture, a simulation, a replay) is
/// no concern of the session, and neither are perception failures or
/// retries: by the time `observe` returns, the board reflects the
/// collaborator's best current view.
///
/// Any `FnMut(&mut Board)` closure is an observer.
pub trait Observer {
    /// Refreshes the board in place.
    fn observe(&mut self, board: &mut Board);
}

impl<F> Observer for F
where
    F: FnMut(&mut Board),
{
    fn observe(&mut self, board: &mut Board) {
        self(board);
    }
}

/// Consumes the input requests a deduction pass produces.
///
/// This is the actuation boundary. The session dispatches one [`Action`]
/// per deduced cell; everything past that (coordinate translation,
/// device events, pacing) happens behind this trait.
///
/// Any `FnMut(Action)` closure is an actuator.
pub trait Actuator {
    /// Dispatches one action.
    fn act(&mut self, action: Action);
}

impl<F> Actuator for F
where
    F: FnMut(Action),
{
    fn act(&mut self, action: Action) {
        self(action);
    }
}

/// Pairs an independent observer and actuator into one collaborator.
///
/// [`Session`] methods take a single value implementing both traits, which
/// suits collaborators like [`SimulatedGame`](crate::sim::SimulatedGame)
/// that play both roles over shared state. When perception and actuation
/// are separate values, this adapter joins them.
///
/// # Examples
///
/// ```
/// use minescout_core::Board;
/// use minescout_session::{Action, Collaborators, Session};
/// use minescout_solver::MethodSolver;
///
/// let mut dispatched = Vec::new();
/// let mut collaborators = Collaborators {
///     observer: |_board: &mut Board| {},
///     actuator: |action: Action| dispatched.push(action),
/// };
///
/// let mut session = Session::new(5, 5, MethodSolver::with_all_methods());
/// session.first_move(&mut collaborators);
/// drop(collaborators);
/// assert_eq!(dispatched.len(), 1);
/// ```
#[derive(Debug)]
pub struct Collaborators<O, A> {
    /// The perception side.
    pub observer: O,
    /// The actuation side.
    pub actuator: A,
}

impl<O, A> Observer for Collaborators<O, A>
where
    O: Observer,
    A: Actuator,
{
    fn observe(&mut self, board: &mut Board) {
        self.observer.observe(board);
    }
}

impl<O, A> Actuator for Collaborators<O, A>
where
    O: Observer,
    A: Actuator,
{
    fn act(&mut self, action: Action) {
        self.actuator.act(action);
    }
}

/// Outcome of a single session step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The pass proved something and actions were dispatched.
    Progress {
        /// Number of reveal actions dispatched.
        revealed: usize,
        /// Number of flag actions dispatched and committed locally.
        flagged: usize,
    },
    /// No method made progress; nothing was dispatched.
    Stuck,
}

/// Terminal outcome of a full session run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionOutcome {
    /// Every cell ended revealed or flagged.
    Completed,
    /// A pass proved nothing while covered cells remain.
    Stuck,
}

/// Totals from a full session run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    outcome: SessionOutcome,
    passes: usize,
    revealed: usize,
    flagged: usize,
}

impl SessionSummary {
    /// Returns how the run ended.
    #[must_use]
    pub const fn outcome(&self) -> SessionOutcome {
        self.outcome
    }

    /// Returns the number of passes that made progress.
    #[must_use]
    pub const fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the total number of reveal actions dispatched, not counting
    /// the opening move.
    #[must_use]
    pub const fn revealed(&self) -> usize {
        self.revealed
    }

    /// Returns the total number of cells flagged.
    #[must_use]
    pub const fn flagged(&self) -> usize {
        self.flagged
    }
}

/// One game worth of deduction: owns the board, runs the solver, and
/// brokers between the perception and actuation collaborators.
///
/// Everything is synchronous and single-threaded. One [`step`](Self::step)
/// is one full cycle: a perception refresh, one method evaluation, one
/// batch of dispatched actions, one batch of local flag commits. The board
/// has no other writer between steps.
#[derive(Debug)]
pub struct Session {
    board: Board,
    solver: MethodSolver,
    stats: MethodSolverStats,
}

impl Session {
    /// Creates a session over a fresh, fully covered board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize, solver: MethodSolver) -> Self {
        let board = Board::new(rows, cols);
        let stats = solver.new_stats();
        Self {
            board,
            solver,
            stats,
        }
    }

    /// Returns the board as currently known.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns which methods have resolved passes so far.
    #[must_use]
    pub fn stats(&self) -> &MethodSolverStats {
        &self.stats
    }

    /// Returns the solver driving this session.
    #[must_use]
    pub fn solver(&self) -> &MethodSolver {
        &self.solver
    }

    /// Issues the opening reveal at the board's center cell.
    ///
    /// Before the first perception update there is no clue to reason from,
    /// so the opening move is fixed rather than deduced. It mutates no
    /// local state; the revealed value arrives with the next observation.
    pub fn first_move<A>(&mut self, actuator: &mut A)
    where
        A: Actuator + ?Sized,
    {
        let action = Action::Reveal(self.board.center());
        log::debug!("opening move: {action}");
        actuator.act(action);
    }

    /// Runs one observe-deduce-act cycle.
    ///
    /// The collaborator first refreshes the board, then one deduction pass
    /// runs. Each safe cell is dispatched as a reveal and each mine cell
    /// as a flag; a flagged cell's local state is committed to flagged
    /// immediately after its action is dispatched. That commit is the only
    /// state change the session performs itself; revealed values always
    /// come back through the next observation.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Solver`] if the deduction pass failed.
    pub fn step<C>(&mut self, collaborator: &mut C) -> Result<StepOutcome, SessionError>
    where
        C: Observer + Actuator + ?Sized,
    {
        collaborator.observe(&mut self.board);

        let deduction = self.solver.deduce_with_stats(&self.board, &mut self.stats)?;
        if deduction.is_empty() {
            return Ok(StepOutcome::Stuck);
        }

        let mut revealed = 0;
        for &cell in deduction.safe() {
            collaborator.act(Action::Reveal(cell));
            revealed += 1;
        }
        let mut flagged = 0;
        for &cell in deduction.mines() {
            collaborator.act(Action::Flag(cell));
            self.board.flag(cell);
            flagged += 1;
        }
        log::debug!("pass dispatched {revealed} reveals and {flagged} flags");
        Ok(StepOutcome::Progress { revealed, flagged })
    }

    /// Runs the session to completion: the opening move, then steps until
    /// the board is fully resolved or a pass proves nothing.
    ///
    /// A collaborator that never reflects dispatched reveals back through
    /// observation can keep the loop running; upholding the perception
    /// contract is the observer's side of the bargain.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Solver`] if a deduction pass failed.
    pub fn run<C>(&mut self, collaborator: &mut C) -> Result<SessionSummary, SessionError>
    where
        C: Observer + Actuator + ?Sized,
    {
        self.first_move(collaborator);

        let mut passes = 0;
        let mut revealed = 0;
        let mut flagged = 0;
        loop {
            match self.step(collaborator)? {
                StepOutcome::Progress {
                    revealed: r,
                    flagged: f,
                } => {
                    passes += 1;
                    revealed += r;
                    flagged += f;
                }
                StepOutcome::Stuck => {
                    let outcome = if self.board.has_covered_cells() {
                        SessionOutcome::Stuck
                    } else {
                        SessionOutcome::Completed
                    };
                    let summary = SessionSummary {
                        outcome,
                        passes,
                        revealed,
                        flagged,
                    };
                    log::info!(
                        "session {outcome:?}: {passes} passes, {revealed} revealed, {flagged} flagged"
                    );
                    return Ok(summary);
                }
            }
        }
    }
}
