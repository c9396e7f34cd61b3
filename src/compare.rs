//! Runs every method against the same problem and ranks the survivors.
//!
//! Each method is guarded independently: a precondition failure (no sign
//! change) or a runtime failure (division by zero, zero derivative) for one
//! method is captured into that method's [`MethodOutcome`] and the remaining
//! methods still run. Ranking among converged methods is ascending by
//! `(iterations, |f(root)|, |last error %|)`; at most one winner is flagged.

use crate::bisection::bisection;
use crate::config::SolveCfg;
use crate::errors::SolveError;
use crate::false_position::false_position;
use crate::method::Method;
use crate::newton::newton;
use crate::report::SolveReport;
use crate::secant::secant;

/// Summary of one converged comparator run, derived from the method's
/// [`SolveReport`].
///
/// `iterations` always equals the length of the trace it was derived from;
/// `is_best` is assigned only after all methods complete and is true for at
/// most one result per comparison.
#[derive(Debug, Clone)]
pub struct MethodResult {
    pub method: Method,
    pub iterations: usize,
    pub root: f64,
    pub f_root: f64,
    pub last_error_pct: f64,
    pub is_best: bool,
}

impl MethodResult {
    fn from_report(report: &SolveReport) -> Self {
        Self {
            method: report.method,
            iterations: report.iterations(),
            root: report.root,
            f_root: report.f_root,
            last_error_pct: report.last_error_pct(),
            is_best: false,
        }
    }
}

/// Outcome of one method inside a comparison. The method identity is
/// attached unconditionally, on failure as well as success.
#[derive(Debug)]
pub enum MethodOutcome {
    Converged(MethodResult),
    Failed { method: Method, error: SolveError },
}

impl MethodOutcome {
    #[must_use]
    pub fn method(&self) -> Method {
        match self {
            MethodOutcome::Converged(r) => r.method,
            MethodOutcome::Failed { method, .. } => *method,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&MethodResult> {
        match self {
            MethodOutcome::Converged(r) => Some(r),
            MethodOutcome::Failed { .. } => None,
        }
    }

    /// `"OK"` for a converged method, the failure description otherwise.
    #[must_use]
    pub fn status(&self) -> String {
        match self {
            MethodOutcome::Converged(_) => "OK".to_string(),
            MethodOutcome::Failed { error, .. } => error.to_string(),
        }
    }
}

/// Result of running all four methods on one problem.
///
/// `outcomes` holds one entry per method in the fixed evaluation order
/// (bisection, false position, secant, Newton); `best` names the ranked
/// winner, or `None` when no method converged.
#[derive(Debug)]
pub struct Comparison {
    pub outcomes: Vec<MethodOutcome>,
    pub best: Option<Method>,
}

impl Comparison {
    /// The winning result, when any method converged.
    #[must_use]
    pub fn best_result(&self) -> Option<&MethodResult> {
        let best = self.best?;
        self.outcomes
            .iter()
            .find(|o| o.method() == best)
            .and_then(MethodOutcome::result)
    }

    /// One-line summary of the comparison outcome.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.best_result() {
            Some(r) => format!(
                "best method: {} (iterations: {})",
                r.method, r.iterations
            ),
            None => "no applicable method".to_string(),
        }
    }
}

/// Dispatches one method onto its entry point using the shared input
/// surface (`x0`/`x1` as bracket, guess pair, or single guess).
pub(crate) fn run_method<F, G>(
    method: Method,
    func: F,
    dfunc: Option<G>,
    x0: f64,
    x1: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    match method {
        Method::Bisection => bisection(func, x0, x1, cfg),
        Method::FalsePosition => false_position(func, x0, x1, cfg),
        Method::Secant => secant(func, x0, x1, cfg),
        Method::NewtonRaphson => newton(func, dfunc, x0, cfg),
    }
}

/// Index of the best converged outcome: lexicographically smallest by
/// `(iterations, |f(root)|, |last error %|)`. NaN error values order after
/// every finite value, so an otherwise-tied NaN entry never wins a
/// tie-break. `None` when nothing converged.
#[must_use]
pub fn select_best(outcomes: &[MethodOutcome]) -> Option<usize> {
    outcomes
        .iter()
        .enumerate()
        .filter_map(|(i, o)| o.result().map(|r| (i, r)))
        .min_by(|(_, a), (_, b)| {
            a.iterations
                .cmp(&b.iterations)
                .then(a.f_root.abs().total_cmp(&b.f_root.abs()))
                .then(a.last_error_pct.abs().total_cmp(&b.last_error_pct.abs()))
        })
        .map(|(i, _)| i)
}

/// Runs all four methods against the same `func` (and `dfunc`, for Newton)
/// and flags the best by the ranking rule above.
///
/// `x0`/`x1` serve as the bracket for bisection and false position, the two
/// initial guesses for secant, and (`x0` only) the initial guess for Newton.
/// Method failures never abort the comparison; they are captured as that
/// method's outcome and excluded from ranking.
pub fn compare_all<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    x1: f64,
    cfg: SolveCfg,
) -> Comparison
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let mut outcomes: Vec<MethodOutcome> = Method::ALL
        .iter()
        .map(|&method| {
            match run_method(method, &mut func, dfunc.as_mut(), x0, x1, cfg) {
                Ok(report) => MethodOutcome::Converged(MethodResult::from_report(&report)),
                Err(error) => MethodOutcome::Failed { method, error },
            }
        })
        .collect();

    let best = select_best(&outcomes).map(|i| {
        if let MethodOutcome::Converged(r) = &mut outcomes[i] {
            r.is_best = true;
        }
        outcomes[i].method()
    });

    Comparison { outcomes, best }
}
