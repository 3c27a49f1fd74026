//! # Example: Cubic Relaxation
//!
//! Solve
//!
//! dy/dx = (x + 1)^3 - y
//!
//! with y(0) = 0. The closed form is y = C e^(-x) + x^3 + 3x - 2 and the
//! initial condition fixes C = 2, so the reference curve is available for
//! the comparison chart.

use odelab::prelude::*;

fn main() {
    let f = |x: Float, y: Float| (x + 1.0).powi(3) - y;
    let reference = |x: Float, c: Float| c * (-x).exp() + x.powi(3) + 3.0 * x - 2.0;

    let params = match Parameters::new(0.0, 3.0, 0.0, 0.1, 1e-6) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("bad parameters: {e}");
            return;
        }
    };
    let options = SolveOptions::builder().max_corrections(80).build();

    match solve(Method::Adams4, &f, reference, 2.0, &params, &options) {
        Ok(report) => {
            print!("{}", render_table(&report.rows));
            println!(
                "{} points, {} evaluations of f (plus {} on the half-step run)",
                report.trajectory.len(),
                report.trajectory.nfev,
                report.half_step.nfev
            );
            let title = "dy/dx = (x + 1)^3 - y";
            match render_comparison(
                "relaxation.png",
                title,
                &report.trajectory,
                reference,
                2.0,
                params.a,
                params.b,
            ) {
                Ok(()) => println!("chart written to relaxation.png"),
                Err(e) => eprintln!("could not draw the chart: {e}"),
            }
        }
        Err(e) => eprintln!("integration failed: {e}"),
    }
}
