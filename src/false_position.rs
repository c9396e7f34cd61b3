//! False position (regula falsi) method.

use crate::bracket::bracketed_search;
use crate::config::SolveCfg;
use crate::errors::SolveError;
use crate::method::Method;
use crate::report::SolveReport;

/// x-intercept of the chord through `(lower, f(lower))` and
/// `(upper, f(upper))`.
#[inline]
fn chord_intercept(lower: f64, f_lower: f64, upper: f64, f_upper: f64) -> f64 {
    upper - f_upper * (lower - upper) / (f_lower - f_upper)
}

/// Finds a root of `func` on `[lower, upper]` using the plain
/// [false position method](https://en.wikipedia.org/wiki/Regula_falsi).
///
/// Same sign-change precondition, narrowing rule, and termination policy as
/// [`crate::bisection::bisection`]; only the update formula differs. The
/// classic update can stagnate (one endpoint never moves) for convex or
/// concave functions; that is accepted behavior here, bounded by the
/// iteration cap, with no Illinois-style damping.
///
/// # Errors
/// - [`SolveError::InvalidBracket`] : `func(lower) * func(upper) > 0`
/// - [`SolveError::Input`]          : invalid tolerance, `max_iter == 0`,
///   or a non-finite bound
pub fn false_position<F>(
    func: F,
    lower: f64,
    upper: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    bracketed_search(func, Method::FalsePosition, lower, upper, cfg, chord_intercept)
}
