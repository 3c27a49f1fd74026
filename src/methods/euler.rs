//! Improved Euler (Heun) fixed-step integrator.

use crate::{
    Float,
    core::{rhs::Rhs, trajectory::Trajectory},
    error::Error,
    methods::{point_count, validate_problem},
};

/// Improved Euler method: a trial Euler step followed by a trapezoidal
/// average of the slopes at both ends. Second order, two right-hand side
/// evaluations per step.
///
/// Integrates y' = f(x, y) from `a` to `b` with constant step `h`, starting
/// at y(a) = `y0`. The grid has `(b - a) / h` rounded down plus one points;
/// the final abscissa may undershoot `b` when the step does not divide the
/// interval evenly.
pub fn improved_euler<F>(
    f: &F,
    a: Float,
    b: Float,
    y0: Float,
    h: Float,
) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    // --- Input Validation ---
    validate_problem(a, b, y0, h)?;

    // --- Declarations ---
    let n = point_count(a, b, h);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    let mut nfev = 0;

    x.push(a);
    y.push(y0);

    // --- Main integration loop ---
    for i in 1..n {
        // Abscissas come straight from the index so spacing cannot drift.
        let x_prev = a + (i - 1) as Float * h;
        let x_cur = a + i as Float * h;
        let y_prev = y[i - 1];

        let k1 = f.eval(x_prev, y_prev);
        let k2 = f.eval(x_cur, y_prev + h * k1);
        let y_cur = y_prev + h / 2.0 * (k1 + k2);
        nfev += 2;

        if !y_cur.is_finite() {
            return Err(Error::NonFinite(x_cur));
        }

        x.push(x_cur);
        y.push(y_cur);
    }

    Ok(Trajectory { x, y, h, nfev })
}
