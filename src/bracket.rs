//! Shared iteration driver for the two bracketing methods.
//!
//! Bisection and false position differ only in how the next estimate is
//! formed from the current bracket; the precondition, the narrowing rule,
//! the error bookkeeping, and the termination policy are identical. Both
//! public entry points delegate here with their own update formula.

use crate::config::{require_finite, ResolvedCfg, SolveCfg};
use crate::errors::SolveError;
use crate::method::Method;
use crate::report::{SolveReport, Termination};
use crate::trace::{error_percent, IterationRecord};

/// Produces the next estimate from the current bracket
/// `(lower, f_lower, upper, f_upper)`.
pub(crate) type UpdateRule = fn(f64, f64, f64, f64) -> f64;

/// Runs a bracketing method to completion.
///
/// Precondition: `f(lower) * f(upper) <= 0`. A positive product is
/// [`SolveError::InvalidBracket`], surfaced before any record is produced.
///
/// Each iteration forms `xr` via `update`, records the row, then narrows the
/// bracket: `f(lower) * f(xr) < 0` keeps the lower side (the upper endpoint
/// becomes `xr`), otherwise the lower endpoint is replaced. Terminates on
/// `f(xr) == 0` exactly, on relative approximate error <= tolerance, or on
/// the iteration cap (normal termination, last estimate returned).
pub(crate) fn bracketed_search<F>(
    mut f: F,
    method: Method,
    lower: f64,
    upper: f64,
    cfg: SolveCfg,
    update: UpdateRule,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let ResolvedCfg { tolerance, max_iter } = cfg.resolve()?;
    let mut lower = require_finite("lower bound", lower)?;
    let mut upper = require_finite("upper bound", upper)?;

    let mut f_lower = f(lower);
    let mut f_upper = f(upper);
    if f_lower * f_upper > 0.0 {
        return Err(SolveError::InvalidBracket { lower, upper });
    }

    let mut trace = Vec::new();
    let mut xr = lower;
    let mut termination = Termination::IterationCap;

    for iteration in 1..=max_iter {
        let xr_prev = xr;
        xr = update(lower, f_lower, upper, f_upper);
        let f_xr = f(xr);

        // +inf on the first iteration: recorded as NaN, never <= tolerance
        let ea = if iteration == 1 {
            f64::INFINITY
        } else {
            ((xr - xr_prev) / xr).abs()
        };

        trace.push(IterationRecord {
            iteration,
            x_lower: lower,
            f_lower,
            x_upper: upper,
            f_upper,
            estimate: xr,
            f_estimate: f_xr,
            approx_error_pct: error_percent(ea),
        });

        if f_xr == 0.0 {
            termination = Termination::ExactRoot;
            break;
        }
        if ea <= tolerance {
            termination = Termination::ToleranceReached;
            break;
        }

        if f_lower * f_xr < 0.0 {
            upper = xr;
            f_upper = f_xr;
        } else {
            lower = xr;
            f_lower = f_xr;
        }
    }

    let f_root = trace.last().map_or(f64::NAN, |r| r.f_estimate);
    Ok(SolveReport {
        method,
        root: xr,
        f_root,
        termination,
        trace,
    })
}
