//! Shared configuration for all root-finding runs.
//!
//! [`SolveCfg`] — universal fields
//! - `tolerance`  : relative-approximate-error stopping threshold
//! - `in_percent` : whether `tolerance` was supplied as a percentage
//! - `max_iter`   : iteration cap (defaults to [`Method::MAX_ITERATIONS`])
//!
//! Validation happens in [`SolveCfg::resolve`], called by every method
//! entry point before iterating.

use crate::errors::InputError;
use crate::method::Method;

/// Run configuration shared by all four methods.
///
/// # Construction
/// - [`SolveCfg::new`] takes the stopping tolerance.
/// - [`SolveCfg::percent_tolerance`] marks it as a percentage; it is
///   divided by 100 during [`SolveCfg::resolve`].
/// - [`SolveCfg::with_max_iter`] overrides the 1000-iteration cap.
///
/// # Validation
/// [`SolveCfg::resolve`] checks that the effective tolerance is finite and
/// `> 0`, and that `max_iter >= 1`.
#[derive(Debug, Copy, Clone)]
pub struct SolveCfg {
    tolerance: f64,
    in_percent: bool,
    max_iter: usize,
}

impl SolveCfg {
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            tolerance,
            in_percent: false,
            max_iter: Method::MAX_ITERATIONS,
        }
    }

    /// Marks the tolerance as expressed in percent (divided by 100 on
    /// [`SolveCfg::resolve`]).
    #[must_use]
    pub fn percent_tolerance(mut self) -> Self {
        self.in_percent = true;
        self
    }

    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self {
        self.max_iter = v;
        self
    }

    #[inline] #[must_use] pub fn tolerance(&self) -> f64 { self.tolerance }
    #[inline] #[must_use] pub fn in_percent(&self) -> bool { self.in_percent }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    /// Validates the configuration and returns the effective (fractional)
    /// tolerance plus the iteration cap.
    pub(crate) fn resolve(&self) -> Result<ResolvedCfg, InputError> {
        let tol = if self.in_percent {
            self.tolerance / 100.0
        } else {
            self.tolerance
        };

        if !tol.is_finite() || tol <= 0.0 {
            return Err(InputError::InvalidTolerance { got: tol });
        }
        if self.max_iter == 0 {
            return Err(InputError::InvalidMaxIter { got: 0 });
        }

        Ok(ResolvedCfg {
            tolerance: tol,
            max_iter: self.max_iter,
        })
    }
}

/// Validated configuration handed to the iteration loops.
/// `tolerance` is always a fraction here.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ResolvedCfg {
    pub tolerance: f64,
    pub max_iter: usize,
}

/// Rejects non-finite bounds/guesses before any method runs.
#[inline]
pub(crate) fn require_finite(name: &'static str, v: f64) -> Result<f64, InputError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(InputError::NonFiniteInput { name, got: v })
    }
}
