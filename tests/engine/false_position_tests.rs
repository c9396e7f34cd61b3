//! tests for the false position (regula falsi) method
use rootrace::config::SolveCfg;
use rootrace::errors::SolveError;
use rootrace::false_position::false_position;
use rootrace::report::Termination;

type TestResult = Result<(), SolveError>;

#[test]
fn finds_sqrt_2() -> TestResult {
    let f = |x: f64| x * x - 2.0;
    let res = false_position(f, 1.0, 2.0, SolveCfg::new(1e-6))?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert!((res.root - 2.0_f64.sqrt()).abs() <= 1e-5);
    assert!(res.iterations() > 0);
    Ok(())
}

#[test]
fn no_sign_change() {
    let f = |x: f64| x * x + 1.0;
    let err = false_position(f, -1.0, 1.0, SolveCfg::new(1e-6)).unwrap_err();
    assert!(matches!(err, SolveError::InvalidBracket { .. }));
}

#[test]
fn linear_function_lands_exactly() -> TestResult {
    // the chord through a line is the line: first intercept is the root
    let f = |x: f64| 2.0 * x - 6.0;
    let res = false_position(f, 0.0, 10.0, SolveCfg::new(1e-6))?;

    assert_eq!(res.termination, Termination::ExactRoot);
    assert_eq!(res.iterations(), 1);
    assert_eq!(res.root, 3.0);
    Ok(())
}

#[test]
fn trace_matches_iteration_count() -> TestResult {
    let f = |x: f64| x.powi(3) - x - 2.0;
    let res = false_position(f, 1.0, 2.0, SolveCfg::new(1e-8))?;

    assert_eq!(res.iterations(), res.trace.len());
    for (i, rec) in res.trace.iter().enumerate() {
        assert_eq!(rec.iteration, i + 1);
        assert!(rec.f_lower * rec.f_upper <= 0.0);
    }
    assert!(res.trace[0].approx_error_pct.is_nan());
    Ok(())
}

#[test]
fn stagnating_endpoint_still_converges() -> TestResult {
    // convex on [0, 1.5]: the upper endpoint never moves under the pure
    // update, which is accepted behavior bounded by the cap
    let f = |x: f64| x.powi(10) - 1.0;
    let res = false_position(f, 0.0, 1.5, SolveCfg::new(1e-4))?;

    assert_eq!(res.termination, Termination::ToleranceReached);
    assert!((res.root - 1.0).abs() <= 0.05);
    let stagnant = res
        .trace
        .iter()
        .filter(|r| r.x_upper == 1.5)
        .count();
    assert!(stagnant > 1);
    Ok(())
}

#[test]
fn slower_than_unit_cap_allows_partial_progress() -> TestResult {
    let f = |x: f64| x.powi(10) - 1.0;
    let res = false_position(f, 0.0, 1.5, SolveCfg::new(1e-12).with_max_iter(3))?;

    assert_eq!(res.termination, Termination::IterationCap);
    assert_eq!(res.iterations(), 3);
    Ok(())
}

#[test]
fn rerun_is_bit_identical() -> TestResult {
    let f = |x: f64| x * x * x - x - 2.0;
    let cfg = SolveCfg::new(1e-7);
    let a = false_position(f, 1.0, 2.0, cfg)?;
    let b = false_position(f, 1.0, 2.0, cfg)?;

    assert_eq!(a.root.to_bits(), b.root.to_bits());
    assert_eq!(a.iterations(), b.iterations());
    Ok(())
}
