use odelab::prelude::*;

mod common;
use common::{exp_reference, exp_rhs};

#[test]
fn rejects_reversed_or_empty_interval() {
    for (a, b) in [(2.0, 1.0), (1.0, 1.0), (Float::NAN, 1.0), (0.0, Float::INFINITY)] {
        let err = improved_euler(&exp_rhs, a, b, 1.0, 0.1).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval(_, _)), "a = {a}, b = {b}");
    }
}

#[test]
fn rejects_nonpositive_step() {
    for h in [0.0, -0.5, Float::NAN, Float::INFINITY] {
        let err = improved_euler(&exp_rhs, 0.0, 1.0, 1.0, h).unwrap_err();
        assert!(matches!(err, Error::InvalidStepSize(_)), "h = {h}");
        let err = adams4(&exp_rhs, 0.0, 1.0, 1.0, h, 1e-6, 50).unwrap_err();
        assert!(matches!(err, Error::InvalidStepSize(_)), "h = {h}");
    }
}

#[test]
fn rejects_unrepresentably_long_grids() {
    // (b - a) / h beyond any grid length a usize can count
    let err = improved_euler(&exp_rhs, 0.0, Float::MAX, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, Error::InvalidStepSize(_)));
    let err = adams4(&exp_rhs, 0.0, Float::MAX, 1.0, 1.0, 1e-6, 50).unwrap_err();
    assert!(matches!(err, Error::InvalidStepSize(_)));
    // b - a overflows to infinity, so the quotient is infinite
    let err = improved_euler(&exp_rhs, -Float::MAX, Float::MAX, 1.0, 2.0).unwrap_err();
    assert!(matches!(err, Error::InvalidStepSize(_)));
    let err = Parameters::new(0.0, Float::MAX, 1.0, 1.0, 1e-6).unwrap_err();
    assert!(matches!(err, Error::InvalidStepSize(_)));
}

#[test]
fn rejects_nonpositive_tolerance() {
    for e in [0.0, -1e-3, Float::NAN] {
        let err = adams4(&exp_rhs, 0.0, 1.0, 1.0, 0.1, e, 50).unwrap_err();
        assert!(matches!(err, Error::InvalidTolerance(_)), "e = {e}");
    }
}

#[test]
fn rejects_non_finite_initial_value() {
    let err = adams4(&exp_rhs, 0.0, 1.0, Float::NAN, 0.1, 1e-6, 50).unwrap_err();
    assert!(matches!(err, Error::InvalidInitialValue(_)));
}

#[test]
fn parameters_constructor_screens_every_field() {
    assert!(Parameters::new(0.0, 1.0, 1.0, 0.1, 1e-6).is_ok());
    assert!(matches!(
        Parameters::new(1.0, 1.0, 1.0, 0.1, 1e-6),
        Err(Error::InvalidInterval(_, _))
    ));
    assert!(matches!(
        Parameters::new(0.0, 1.0, 1.0, -0.1, 1e-6),
        Err(Error::InvalidStepSize(_))
    ));
    assert!(matches!(
        Parameters::new(0.0, 1.0, 1.0, 0.1, 0.0),
        Err(Error::InvalidTolerance(_))
    ));
    assert!(matches!(
        Parameters::new(0.0, 1.0, Float::INFINITY, 0.1, 1e-6),
        Err(Error::InvalidInitialValue(_))
    ));
}

#[test]
fn halved_parameters_keep_everything_but_the_step() {
    let params = Parameters::new(0.0, 1.0, 1.0, 0.1, 1e-6).unwrap();
    let half = params.halved();
    assert_eq!(half.h, 0.05);
    assert_eq!((half.a, half.b, half.y0, half.e), (params.a, params.b, params.y0, params.e));
    assert_eq!(half.point_count(), 2 * params.point_count() - 1);
}

#[test]
fn nan_right_hand_side_is_caught() {
    let poisoned = |_x: Float, _y: Float| Float::NAN;
    let err = improved_euler(&poisoned, 0.0, 1.0, 1.0, 0.1).unwrap_err();
    assert!(matches!(err, Error::NonFinite(_)));
    let err = adams4(&poisoned, 0.0, 1.0, 1.0, 0.1, 1e-6, 50).unwrap_err();
    assert!(matches!(err, Error::NonFinite(_)));
}

#[test]
fn nan_in_the_multistep_phase_is_caught() {
    // Finite through the starter, NaN once the predictor-corrector is running
    let partial = |x: Float, y: Float| if x > 0.5 { Float::NAN } else { y };
    let err = adams4(&partial, 0.0, 1.0, 1.0, 0.1, 1e-6, 50).unwrap_err();
    assert!(matches!(err, Error::NonFinite(x) if x > 0.5));
}

#[test]
fn runaway_values_abort_instead_of_propagating() {
    let explode = |_x: Float, y: Float| y * Float::MAX;
    let err = improved_euler(&explode, 0.0, 10.0, 1.0, 1.0).unwrap_err();
    assert!(matches!(err, Error::NonFinite(_)));
}

#[test]
fn runaway_corrector_reports_non_convergence() {
    // h * df/dy far beyond the contraction limit: sweeps make things worse
    let stiff = |_x: Float, y: Float| 100.0 * y;
    let err = adams4(&stiff, 0.0, 5.0, 1.0, 0.5, 1e-6, 8).unwrap_err();
    match err {
        Error::NonConvergence(x, limit) => {
            assert_eq!(limit, 8);
            assert!(x > 0.0);
        }
        other => panic!("expected NonConvergence, got {other:?}"),
    }
}

#[test]
fn solve_surfaces_corrector_failures() {
    let stiff = |_x: Float, y: Float| 100.0 * y;
    let params = Parameters::new(0.0, 5.0, 1.0, 0.5, 1e-6).unwrap();
    let options = SolveOptions::builder().max_corrections(8).build();
    let err = solve(Method::Adams4, &stiff, exp_reference, 1.0, &params, &options).unwrap_err();
    assert!(matches!(err, Error::NonConvergence(_, 8)));
}

#[test]
fn mismatched_half_step_run_is_rejected() {
    let full = improved_euler(&exp_rhs, 0.0, 1.0, 1.0, 0.1).unwrap();
    let not_half = improved_euler(&exp_rhs, 0.0, 1.0, 1.0, 0.1).unwrap();
    let err =
        error_rows(&full, &not_half, Method::ImprovedEuler, exp_reference, 1.0).unwrap_err();
    assert!(matches!(err, Error::HalfStepMismatch(11, 11)));
}

#[test]
fn validation_errors_display_the_offending_value() {
    let err = improved_euler(&exp_rhs, 0.0, 1.0, 1.0, -0.25).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("-0.25"), "{text}");
    let err = Parameters::new(3.0, 2.0, 1.0, 0.1, 1e-6).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("a = 3") && text.contains("b = 2"), "{text}");
}
