use minescout_core::Board;

use crate::{
    Deduction, SolverError,
    method::{self, BoxedMethod, Method as _},
};

/// How [`MethodSolver`] reconciles a cell claimed both safe and mined by
/// one pass.
///
/// The deduction methods never cross-validate their two result sets, so on
/// a contradictory board a cell can land in both. No reconciliation is
/// inherently right, and the solver does not guess: the default passes
/// both sets through untouched, and callers that want a resolution pick
/// one explicitly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ConflictPolicy {
    /// Pass both sets through untouched.
    #[default]
    Ignore,
    /// Drop conflicted cells from the safe set.
    PreferMines,
    /// Drop conflicted cells from the mine set.
    PreferSafe,
}

/// Statistics collected across deduction passes.
///
/// Tracks how many passes each method resolved, in solver order, plus the
/// total number of productive passes.
#[derive(Debug, Clone)]
pub struct MethodSolverStats {
    applications: Vec<usize>,
    total_passes: usize,
}

impl MethodSolverStats {
    /// Returns method application counts in solver order.
    ///
    /// Methods that never produced a result are included with a count of
    /// `0`; the index mapping is defined by [`MethodSolver::methods`].
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of passes that produced a deduction.
    #[must_use]
    pub fn total_passes(&self) -> usize {
        self.total_passes
    }

    /// Returns `true` if any pass produced a deduction.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_passes > 0
    }
}

/// Runs deduction methods in fixed priority order, short-circuiting on the
/// first that finds anything.
///
/// One call to [`deduce`](Self::deduce) is one orchestration pass: methods
/// are tried in order, and the first non-empty result is returned without
/// consulting the rest, even if a stronger method could find more. The
/// weakest sufficient method always wins, which keeps passes cheap and the
/// sequence of deductions stable. When every method comes up empty, the
/// returned deduction is empty and the caller decides what "stuck" means.
///
/// # Examples
///
/// ```
/// use minescout_core::Board;
/// use minescout_solver::MethodSolver;
///
/// let board: Board = "
///     2 2
///     . .
/// "
/// .parse()?;
///
/// let solver = MethodSolver::with_all_methods();
/// let deduction = solver.deduce(&board)?;
/// assert_eq!(deduction.mines().len(), 2);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MethodSolver {
    methods: Vec<BoxedMethod>,
    conflict_policy: ConflictPolicy,
}

impl MethodSolver {
    /// Creates a solver that tries the given methods in order.
    #[must_use]
    pub fn new(methods: Vec<BoxedMethod>) -> Self {
        Self {
            methods,
            conflict_policy: ConflictPolicy::default(),
        }
    }

    /// Creates a solver with the standard method list.
    ///
    /// Methods are ordered from cheapest to strongest, as defined by
    /// [`method::all_methods`].
    #[must_use]
    pub fn with_all_methods() -> Self {
        Self::new(method::all_methods())
    }

    /// Sets the conflict policy applied to each pass's result.
    #[must_use]
    pub fn with_conflict_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Returns the configured methods in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`MethodSolverStats::applications`].
    #[must_use]
    pub fn methods(&self) -> &[BoxedMethod] {
        &self.methods
    }

    /// Returns the configured conflict policy.
    #[must_use]
    pub const fn conflict_policy(&self) -> ConflictPolicy {
        self.conflict_policy
    }

    /// Creates a statistics object aligned with this solver's method order.
    #[must_use]
    pub fn new_stats(&self) -> MethodSolverStats {
        MethodSolverStats {
            applications: vec![0; self.methods.len()],
            total_passes: 0,
        }
    }

    /// Runs one deduction pass over the board.
    ///
    /// Returns the first method's non-empty result, reconciled per the
    /// conflict policy, or an empty deduction when no method makes
    /// progress.
    ///
    /// The pass never mutates the board; committing flags and dispatching
    /// reveals is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidState`] if a method hit a cell in an
    /// unexpected state, which indicates a defect rather than a board
    /// property.
    pub fn deduce(&self, board: &Board) -> Result<Deduction, SolverError> {
        let mut stats = self.new_stats();
        self.deduce_with_stats(board, &mut stats)
    }

    /// Runs one deduction pass, recording which method produced the result.
    ///
    /// Statistics accumulate across calls, so one object can follow a whole
    /// game.
    ///
    /// # Errors
    ///
    /// Same as [`deduce`](Self::deduce).
    pub fn deduce_with_stats(
        &self,
        board: &Board,
        stats: &mut MethodSolverStats,
    ) -> Result<Deduction, SolverError> {
        debug_assert_eq!(self.methods.len(), stats.applications.len());
        for (i, method) in self.methods.iter().enumerate() {
            let deduction = method.deduce(board)?;
            if !deduction.is_empty() {
                stats.applications[i] += 1;
                stats.total_passes += 1;
                return Ok(self.reconcile(deduction));
            }
        }
        Ok(Deduction::new())
    }

    fn reconcile(&self, mut deduction: Deduction) -> Deduction {
        match self.conflict_policy {
            ConflictPolicy::Ignore => {}
            ConflictPolicy::PreferMines => {
                let conflicts = deduction.conflicts();
                deduction.remove_safe(&conflicts);
            }
            ConflictPolicy::PreferSafe => {
                let conflicts = deduction.conflicts();
                deduction.remove_mines(&conflicts);
            }
        }
        deduction
    }
}
