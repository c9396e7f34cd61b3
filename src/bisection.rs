//! Bisection method.

use crate::bracket::bracketed_search;
use crate::config::SolveCfg;
use crate::errors::SolveError;
use crate::method::Method;
use crate::report::SolveReport;

/// Midpoint of the current bracket.
#[inline]
fn midpoint(lower: f64, _f_lower: f64, upper: f64, _f_upper: f64) -> f64 {
    0.5 * (lower + upper)
}

/// Finds a root of `func` on `[lower, upper]` using the
/// [bisection method](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Requires a sign change: `func(lower)` and `func(upper)` must not have the
/// same sign, otherwise [`SolveError::InvalidBracket`] is returned before any
/// iteration runs. Each iteration halves the bracket at its midpoint and
/// records one [`crate::trace::IterationRecord`].
///
/// # Errors
/// - [`SolveError::InvalidBracket`] : `func(lower) * func(upper) > 0`
/// - [`SolveError::Input`]          : invalid tolerance, `max_iter == 0`,
///   or a non-finite bound
pub fn bisection<F>(
    func: F,
    lower: f64,
    upper: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    bracketed_search(func, Method::Bisection, lower, upper, cfg, midpoint)
}
