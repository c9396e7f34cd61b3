//! Classical root-finding for single-variable real functions.
//!
//! Four iterative methods — bisection, false position, secant, and
//! Newton-Raphson — each producing a full per-iteration trace table, plus a
//! comparator that runs every method on the same problem and ranks the
//! survivors by efficiency.
//!
//! The function under search is any `FnMut(f64) -> f64`; an analytic
//! derivative for Newton is optional and falls back to a central finite
//! difference. Every run is a bounded sequential loop (hard cap of
//! [`Method::MAX_ITERATIONS`]) stopping on an exact zero, on the relative
//! approximate error dropping to the configured tolerance, or on the cap.
//!
//! ```
//! use rootrace::{bisection, SolveCfg};
//!
//! let report = bisection(|x| x * x - 2.0, 1.0, 2.0, SolveCfg::new(1e-4))
//!     .expect("sign change on [1, 2]");
//! assert!((report.root - 2.0_f64.sqrt()).abs() < 1e-3);
//! assert_eq!(report.iterations(), report.trace.len());
//! ```

pub mod compare;
pub mod config;
pub mod derivative;
pub mod errors;
pub mod method;
pub mod report;
pub mod trace;

pub mod bisection;
pub mod false_position;
pub mod newton;
pub mod secant;

mod bracket;

pub use bisection::bisection;
pub use compare::{compare_all, select_best, Comparison, MethodOutcome, MethodResult};
pub use config::SolveCfg;
pub use errors::{InputError, SolveError};
pub use false_position::false_position;
pub use method::Method;
pub use newton::newton;
pub use report::{SolveReport, Termination};
pub use secant::secant;
pub use trace::IterationRecord;
