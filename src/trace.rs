//! One row of a method's iteration trace.

/// A single iteration of one method run.
///
/// - `iteration`   : 1-based index; a trace's indices are exactly `1..=len`.
/// - `x_lower`, `f_lower`, `x_upper`, `f_upper` : the pair of points the
///   update formula consumed this iteration. For the bracketing methods this
///   is the bracket before narrowing; for secant it is `(x0, x1)`; for
///   Newton only the lower slots are used (`x_upper`/`f_upper` hold NaN).
/// - `estimate`, `f_estimate` : the new estimate `xr` and `f(xr)`.
/// - `approx_error_pct` : relative approximate error
///   `|xr - xr_prev| / |xr|` as a percentage; NaN on the first iteration,
///   where no previous estimate exists.
///
/// Records are immutable once appended; the ordered sequence is the run's
/// trace.
#[derive(Debug, Copy, Clone)]
pub struct IterationRecord {
    pub iteration: usize,
    pub x_lower: f64,
    pub f_lower: f64,
    pub x_upper: f64,
    pub f_upper: f64,
    pub estimate: f64,
    pub f_estimate: f64,
    pub approx_error_pct: f64,
}

/// Converts the internal fractional error into the reported percent field.
/// The first iteration carries `ea = +inf` internally and reports NaN.
#[inline]
pub(crate) fn error_percent(ea: f64) -> f64 {
    if ea.is_infinite() {
        f64::NAN
    } else {
        ea * 100.0
    }
}
