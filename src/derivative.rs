//! Numeric differentiation fallback for Newton-Raphson.

/// Fixed central-difference step, 2^-26 (the square root of machine
/// epsilon for f64).
pub const FD_STEP: f64 = 1.490_116_119_384_765_6e-8;

/// Central finite-difference estimate of `f'(x)`:
/// `(f(x + h) - f(x - h)) / (2h)` with `h = 2^-26`.
///
/// No configuration and no cancellation guard beyond the fixed step; if the
/// function is undefined near `x` the NaN/Inf it produces flows through.
#[inline]
pub fn central_difference<F>(f: &mut F, x: f64) -> f64
where
    F: FnMut(f64) -> f64,
{
    (f(x + FD_STEP) - f(x - FD_STEP)) / (2.0 * FD_STEP)
}
