//! Newton-Raphson method.

use crate::config::{require_finite, ResolvedCfg, SolveCfg};
use crate::derivative::central_difference;
use crate::errors::SolveError;
use crate::method::Method;
use crate::report::{SolveReport, Termination};
use crate::trace::{error_percent, IterationRecord};

/// Finds a root of `func` using the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method).
///
/// Takes a single initial point `x0`. Each iteration evaluates `func` and
/// its derivative at the current estimate and steps to
/// `xr - f(xr) / f'(xr)`. The derivative is `dfunc` when supplied, else the
/// central finite difference from [`crate::derivative`].
///
/// Trace rows use only the lower slots (`x_lower` = current iterate,
/// `f_lower` = its function value); `x_upper`/`f_upper` hold NaN.
///
/// # Errors
/// - [`SolveError::ZeroDerivative`] : `f'(x) == 0` exactly at the current
///   estimate. Fatal for the run; no partial trace is returned.
/// - [`SolveError::Input`]          : invalid tolerance, `max_iter == 0`,
///   or a non-finite guess
///
/// # Notes
/// Convergence is quadratic near simple roots with a good guess; poor
/// guesses can diverge or cycle, bounded only by the iteration cap.
pub fn newton<F, G>(
    mut func: F,
    mut dfunc: Option<G>,
    x0: f64,
    cfg: SolveCfg,
) -> Result<SolveReport, SolveError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64,
{
    let ResolvedCfg { tolerance, max_iter } = cfg.resolve()?;
    let mut xr = require_finite("x0", x0)?;

    let mut trace = Vec::new();
    let mut termination = Termination::IterationCap;

    for iteration in 1..=max_iter {
        let fx = func(xr);
        let dfx = match dfunc.as_mut() {
            Some(df) => df(xr),
            None => central_difference(&mut func, xr),
        };
        if dfx == 0.0 {
            return Err(SolveError::ZeroDerivative { x: xr });
        }

        let xr_next = xr - fx / dfx;
        let f_next = func(xr_next);

        let ea = if iteration == 1 {
            f64::INFINITY
        } else {
            ((xr_next - xr) / xr_next).abs()
        };

        trace.push(IterationRecord {
            iteration,
            x_lower: xr,
            f_lower: fx,
            x_upper: f64::NAN,
            f_upper: f64::NAN,
            estimate: xr_next,
            f_estimate: f_next,
            approx_error_pct: error_percent(ea),
        });

        xr = xr_next;
        if f_next == 0.0 {
            termination = Termination::ExactRoot;
            break;
        }
        if ea <= tolerance {
            termination = Termination::ToleranceReached;
            break;
        }
    }

    let f_root = trace.last().map_or(f64::NAN, |r| r.f_estimate);
    Ok(SolveReport {
        method: Method::NewtonRaphson,
        root: xr,
        f_root,
        termination,
        trace,
    })
}
