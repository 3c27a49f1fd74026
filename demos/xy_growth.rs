//! # Example: Gaussian Growth
//!
//! Solve the catalog problem
//!
//! dy/dx = x y
//!
//! over [-1, 1] with y(-1) = 1 and compare both fixed-step methods. The
//! closed form is the Gaussian bump y = e^(x^2 / 2 - 1/2), so the run ends
//! back at y(1) = 1.

use odelab::prelude::*;

fn main() {
    let problem = &catalog()[2];
    let params = problem.defaults;
    let c = (problem.constant)(params.a, params.y0);
    let options = SolveOptions::builder().build();

    for method in [Method::ImprovedEuler, Method::Adams4] {
        println!("== {} ==", method.name());
        match solve(method, &problem.rhs, problem.reference, c, &params, &options) {
            Ok(report) => {
                print!("{}", render_table(&report.rows));
                println!(
                    "{} points, {} evaluations of f (plus {} on the half-step run)",
                    report.trajectory.len(),
                    report.trajectory.nfev,
                    report.half_step.nfev
                );
            }
            Err(e) => eprintln!("integration failed: {e}"),
        }
        println!();
    }
}
