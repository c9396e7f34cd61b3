//! Root-finding error types.
//!
//! - [`InputError`] : caller-side input validation
//!     - invalid tolerance or iteration cap
//!     - non-finite bounds or initial guesses
//! - [`SolveError`] : per-run failures
//!     - missing sign change for a bracketing method
//!     - degenerate secant denominator
//!     - vanishing Newton derivative

use thiserror::Error;

/// Malformed numeric input, checked before any iteration runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got {got}")]
    InvalidMaxIter { got: usize },

    #[error("non-finite {name}: got {got}")]
    NonFiniteInput { name: &'static str, got: f64 },
}

/// Failure of one method run.
///
/// A single-method invocation surfaces these directly to the caller with no
/// partial trace. The comparator instead captures them into that method's
/// outcome and continues with the remaining methods.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("no sign change on [{lower}, {upper}]: f(lower) * f(upper) > 0")]
    InvalidBracket { lower: f64, upper: f64 },

    #[error("division by zero in secant step: f(x0) == f(x1) at x0={x0}, x1={x1}")]
    DivisionByZero { x0: f64, x1: f64 },

    #[error("derivative is zero at x={x}; try another x0 or supply f'(x)")]
    ZeroDerivative { x: f64 },
}
