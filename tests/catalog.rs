use approx::{assert_abs_diff_eq, assert_relative_eq};
use odelab::prelude::*;

#[test]
fn references_match_their_initial_conditions() {
    for problem in catalog() {
        let d = problem.defaults;
        let c = (problem.constant)(d.a, d.y0);
        assert_abs_diff_eq!((problem.reference)(d.a, c), d.y0, epsilon = 1e-9);
    }
}

#[test]
fn references_satisfy_their_equations() {
    // Central difference of the closed form against the right-hand side
    let dx = 1e-6;
    for problem in catalog() {
        let d = problem.defaults;
        let c = (problem.constant)(d.a, d.y0);
        for i in 1..=8 {
            let x = d.a + (d.b - d.a) * i as Float / 10.0;
            let y = (problem.reference)(x, c);
            if !y.is_finite() {
                continue;
            }
            let slope =
                ((problem.reference)(x + dx, c) - (problem.reference)(x - dx, c)) / (2.0 * dx);
            assert_relative_eq!(
                slope,
                (problem.rhs)(x, y),
                max_relative = 1e-4,
                epsilon = 1e-4
            );
        }
    }
}

#[test]
fn defaults_produce_documented_grids() {
    let expected = [(21, 0.05), (31, 0.1), (201, 0.01)];
    for (problem, (points, h)) in catalog().iter().zip(expected) {
        assert_eq!(problem.defaults.point_count(), points, "{}", problem.describe);
        assert_eq!(problem.defaults.h, h, "{}", problem.describe);
    }
}

#[test]
fn both_methods_reproduce_every_catalog_problem() {
    let options = SolveOptions::builder().build();
    for problem in catalog() {
        let d = problem.defaults;
        let c = (problem.constant)(d.a, d.y0);
        for (method, bound) in [(Method::ImprovedEuler, 0.1), (Method::Adams4, 1e-3)] {
            let report =
                solve(method, &problem.rhs, problem.reference, c, &d, &options).unwrap();
            let worst = report
                .rows
                .iter()
                .map(|row| row.abs_error)
                .fold(0.0 as Float, Float::max);
            assert!(
                worst < bound,
                "{} via {}: worst |y - exact| = {worst}",
                problem.describe,
                method.name()
            );
        }
    }
}
