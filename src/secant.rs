//! Secant method.

use crate::config::{require_finite, ResolvedCfg, SolveCfg};
use crate::errors::SolveError;
use crate::method::Method;
use crate::report::{SolveReport, Termination};
use crate::trace::{error_percent, IterationRecord};

/// Finds a root of `func` using the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method).
///
/// Takes two initial points `x0`, `x1` directly; no sign change is required
/// and the pair need not bracket a root. Each iteration intersects the
/// secant line through `(x0, f(x0))` and `(x1, f(x1))` with the x-axis,
/// records the row, then shifts `x0 <- x1, x1 <- xr`.
///
/// # Errors
/// - [`SolveError::DivisionByZero`] : `func(x0) == func(x1)` exactly at any
///   iteration. Fatal for the run; no partial trace is returned. With
///   `x0 == x1` this triggers on the first iteration.
/// - [`SolveError::Input`]          : invalid tolerance, `max_iter == 0`,
///   or a non-finite guess
///
/// # Notes
/// Convergence is superlinear (~1.618) near simple roots, but without a
/// bracket the iteration can diverge; the cap bounds worst-case cost.
pub fn secant<F>(
    mut func: F,
    x0: f64,
    x1: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
{
    let ResolvedCfg { tolerance, max_iter } = cfg.resolve()?;
    let mut x0 = require_finite("x0", x0)?;
    let mut x1 = require_finite("x1", x1)?;

    let mut f0 = func(x0);
    let mut f1 = func(x1);

    let mut trace = Vec::new();
    let mut xr = x1;
    let mut termination = Termination::IterationCap;

    for iteration in 1..=max_iter {
        let xr_prev = xr;
        let denom = f0 - f1;
        if denom == 0.0 {
            return Err(SolveError::DivisionByZero { x0, x1 });
        }
        xr = x1 - f1 * (x0 - x1) / denom;
        let f_xr = func(xr);

        let ea = if iteration == 1 {
            f64::INFINITY
        } else {
            ((xr - xr_prev) / xr).abs()
        };

        trace.push(IterationRecord {
            iteration,
            x_lower: x0,
            f_lower: f0,
            x_upper: x1,
            f_upper: f1,
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

        x0 = x1;
        f0 = f1;
        x1 = xr;
        f1 = f_xr;
    }

    let f_root = trace.last().map_or(f64::NAN, |r| r.f_estimate);
    Ok(SolveReport {
        method: Method::Secant,
        root: xr,
        f_root,
        termination,
        trace,
    })
}
