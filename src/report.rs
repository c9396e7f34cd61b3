//! Defines the [`SolveReport`] returned by all single-method runs.

use crate::method::Method;
use crate::trace::IterationRecord;

/// Why a run stopped.
///
/// - [`Termination::ExactRoot`]        : `f(estimate) == 0.0` exactly
/// - [`Termination::ToleranceReached`] : relative approximate error <= tolerance
/// - [`Termination::IterationCap`]     : iteration cap hit; the last estimate
///   is still returned and this is not an error
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Termination {
    ExactRoot,
    ToleranceReached,
    IterationCap,
}

/// Final report for one method run.
///
/// - `method`      : which method produced it
/// - `root`        : final root estimate
/// - `f_root`      : function value at `root`
/// - `termination` : why the run stopped
/// - `trace`       : full ordered iteration table; `trace.len()` always
///   equals the iteration count and indices run `1..=len` with no gaps
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub method: Method,
    pub root: f64,
    pub f_root: f64,
    pub termination: Termination,
    pub trace: Vec<IterationRecord>,
}

impl SolveReport {
    /// Number of iterations performed (the trace length).
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    /// Relative approximate error (%) of the final iteration.
    /// NaN when the run stopped on its first iteration.
    #[must_use]
    pub fn last_error_pct(&self) -> f64 {
        self.trace.last().map_or(f64::NAN, |r| r.approx_error_pct)
    }
}
