//! Root-finding method definitions.
//!
//! Provides the [`Method`] enum, which enumerates the four supported
//! methods, along with the shared [`Method::MAX_ITERATIONS`] hard cap.

use crate::compare::run_method;
use crate::config::SolveCfg;
use crate::errors::SolveError;
use crate::report::SolveReport;

/// Root-finding method variants.
/// - [`Method::Bisection`] and [`Method::FalsePosition`] are bracketing
///   methods: they require a sign change on `[lower, upper]`.
/// - [`Method::Secant`] and [`Method::NewtonRaphson`] are open methods:
///   no bracket is required.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Method {
    Bisection,
    FalsePosition,
    Secant,
    NewtonRaphson,
}

impl Method {
    /// Hard cap on iterations for every method. Reaching it is normal
    /// termination, not an error; the last estimate is returned.
    pub const MAX_ITERATIONS: usize = 1000;

    /// Fixed evaluation order used by the comparator.
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::Secant,
        Method::NewtonRaphson,
    ];

    /// Method names for the [`SolveReport::method`] field.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Bisection     => "bisection",
            Method::FalsePosition => "false_position",
            Method::Secant        => "secant",
            Method::NewtonRaphson => "newton_raphson",
        }
    }

    /// Runs this method against `func` with the shared input surface.
    ///
    /// `x0`/`x1` map onto each method's own inputs:
    /// - [`Method::Bisection`] / [`Method::FalsePosition`] : bracket `[x0, x1]`
    /// - [`Method::Secant`]        : two initial guesses `x0`, `x1`
    /// - [`Method::NewtonRaphson`] : initial guess `x0`; `x1` is ignored
    ///
    /// `dfunc` is consulted only by Newton; `None` selects the central
    /// finite-difference fallback.
    pub fn run<F, G>(
        self,
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
        run_method(self, func, dfunc, x0, x1, cfg)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
