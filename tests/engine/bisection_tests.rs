//! tests for the bisection method
use rootrace::bisection::bisection;
use rootrace::config::SolveCfg;
use rootrace::errors::{InputError, SolveError};
use rootrace::report::Termination;

type TestResult = Result<(), SolveError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 1.0, 2.0, SolveCfg::new(1e-4))?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-3);
    assert!(res.f_root.abs() <= 1e-3);
    assert!(res.iterations() > 0);
    assert!(res.iterations() < 1000);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f = |x: f64| x * x - 2.0;
    let err = bisection(f, 3.0, 4.0, SolveCfg::new(1e-4)).unwrap_err();

    assert!(matches!(err, SolveError::InvalidBracket { lower, upper }
        if lower == 3.0 && upper == 4.0));
}

#[test]
fn trace_indices_are_contiguous_from_1() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 1.0, 2.0, SolveCfg::new(1e-6))?;

    assert_eq!(res.iterations(), res.trace.len());
    for (i, rec) in res.trace.iter().enumerate() {
        assert_eq!(rec.iteration, i + 1);
    }
    Ok(())
}

#[test]
fn first_record_error_is_nan_then_finite() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 1.0, 2.0, SolveCfg::new(1e-6))?;

    assert!(res.trace[0].approx_error_pct.is_nan());
    for rec in &res.trace[1..] {
        assert!(rec.approx_error_pct.is_finite());
    }
    Ok(())
}

#[test]
fn bracket_holds_sign_change_at_every_row() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = bisection(f, 1.0, 2.0, SolveCfg::new(1e-6))?;

    for rec in &res.trace {
        assert!(rec.f_lower * rec.f_upper <= 0.0);
    }
    Ok(())
}

#[test]
fn exact_zero_stops_on_first_midpoint() -> TestResult {
    let f = |x: f64| x;
    let res = bisection(f, -1.0, 1.0, SolveCfg::new(1e-4))?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.root, 0.0);
    assert!(res.trace[0].approx_error_pct.is_nan());
    Ok(())
}

#[test]
fn iteration_cap_is_normal_termination() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let cfg = SolveCfg::new(1e-300).with_max_iter(5);
    let res = bisection(f, 1.0, 2.0, cfg)?;

    assert_eq!(res.termination, Termination::IterationCap);
    assert_eq!(res.iterations(), 5);
    assert!((res.root - 2.0_f64.sqrt()).abs() < 0.1);
    Ok(())
}

#[test]
fn rerun_is_bit_identical() -> TestResult {
    let f = |x: f64| x.powi(3) - x - 2.0;
    let cfg = SolveCfg::new(1e-6);
    let a = bisection(f, 1.0, 2.0, cfg)?;
    let b = bisection(f, 1.0, 2.0, cfg)?;

    assert_eq!(a.root.to_bits(), b.root.to_bits());
    assert_eq!(a.trace.len(), b.trace.len());
    for (ra, rb) in a.trace.iter().zip(&b.trace) {
        assert_eq!(ra.estimate.to_bits(), rb.estimate.to_bits());
        assert_eq!(ra.f_estimate.to_bits(), rb.f_estimate.to_bits());
        assert_eq!(
            ra.approx_error_pct.to_bits(),
            rb.approx_error_pct.to_bits()
        );
    }
    Ok(())
}

#[test]
fn percent_tolerance_matches_fraction() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let as_fraction = bisection(f, 1.0, 2.0, SolveCfg::new(0.03125))?;
    let as_percent = bisection(f, 1.0, 2.0, SolveCfg::new(3.125).percent_tolerance())?;

    assert_eq!(as_fraction.iterations(), as_percent.iterations());
    assert_eq!(as_fraction.root.to_bits(), as_percent.root.to_bits());
    Ok(())
}

#[test]
fn zero_tolerance_is_invalid() {
    let f = |x: f64| x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new(0.0)).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Input(InputError::InvalidTolerance { got }) if got == 0.0
    ));
}

#[test]
fn negative_tolerance_is_invalid() {
    let f = |x: f64| x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new(-1e-4)).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Input(InputError::InvalidTolerance { .. })
    ));
}

#[test]
fn non_finite_bound_is_invalid() {
    let f = |x: f64| x;
    let err = bisection(f, f64::NAN, 1.0, SolveCfg::new(1e-4)).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Input(InputError::NonFiniteInput { name: "lower bound", .. })
    ));
}

#[test]
fn zero_max_iter_is_invalid() {
    let f = |x: f64| x;
    let err = bisection(f, -1.0, 1.0, SolveCfg::new(1e-4).with_max_iter(0)).unwrap_err();
    assert!(matches!(
        err,
        SolveError::Input(InputError::InvalidMaxIter { got: 0 })
    ));
}
