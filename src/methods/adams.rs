//! Adams fourth-order predictor-corrector fixed-step integrator.
//!
//! Reference
//! - E. Hairer, S. P. Nørsett, and G. Wanner, "Solving Ordinary Differential
//!   Equations I. Nonstiff Problems", 2nd ed., Springer (1993), ch. III.1.

use crate::{
    Float,
    core::{rhs::Rhs, trajectory::Trajectory},
    error::Error,
    methods::{point_count, validate_problem, validate_tolerance},
};

/// Adams-Bashforth 4 predictor with Adams-Moulton 3 corrector, started by
/// classical Runge-Kutta 4 points. Fourth order, fixed step.
///
/// Each multistep point is predicted explicitly from the last four cached
/// derivatives, then corrected with fixed-point sweeps until two consecutive
/// corrector values agree within `e`. A sweep count above `max_corrections`
/// aborts with [`Error::NonConvergence`] rather than looping forever; that
/// happens when `h` times the problem's stiffness makes the corrector
/// iteration expansive instead of contractive.
pub fn adams4<F>(
    f: &F,
    a: Float,
    b: Float,
    y0: Float,
    h: Float,
    e: Float,
    max_corrections: usize,
) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    // --- Input Validation ---
    validate_problem(a, b, y0, h)?;
    validate_tolerance(e)?;

    // --- Declarations ---
    let n = point_count(a, b, h);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    // Derivative cache: dydx[i] = f(x_i, y_i), kept in lockstep with the grid.
    let mut dydx = Vec::with_capacity(n);
    let mut nfev = 0;

    x.push(a);
    y.push(y0);
    dydx.push(f.eval(a, y0));
    nfev += 1;

    // --- RK4 starter ---
    // The multistep formulas need four known points; short grids (n <= 4)
    // are covered entirely by the starter.
    for i in 1..n.min(4) {
        let x_prev = a + (i - 1) as Float * h;
        let x_cur = a + i as Float * h;
        let y_prev = y[i - 1];

        let k1 = h * f.eval(x_prev, y_prev);
        let k2 = h * f.eval(x_prev + C2 * h, y_prev + A21 * k1);
        let k3 = h * f.eval(x_prev + C3 * h, y_prev + A32 * k2);
        let k4 = h * f.eval(x_prev + C4 * h, y_prev + A43 * k3);
        let y_cur = y_prev + B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4;
        nfev += 4;

        if !y_cur.is_finite() {
            return Err(Error::NonFinite(x_cur));
        }

        x.push(x_cur);
        y.push(y_cur);
        dydx.push(f.eval(x_cur, y_cur));
        nfev += 1;
    }

    // --- Multistep phase ---
    for i in 4..n {
        let x_cur = a + i as Float * h;
        let y_prev = y[i - 1];

        // Explicit Adams-Bashforth prediction from the four cached slopes.
        let mut y_pred = y_prev
            + h / 24.0
                * (AB1 * dydx[i - 1] + AB2 * dydx[i - 2] + AB3 * dydx[i - 3] + AB4 * dydx[i - 4]);
        dydx.push(f.eval(x_cur, y_pred));
        nfev += 1;

        // Implicit Adams-Moulton correction using the predicted slope.
        let mut y_cor = y_prev
            + h / 24.0 * (AM0 * dydx[i] + AM1 * dydx[i - 1] + AM2 * dydx[i - 2] + AM3 * dydx[i - 3]);

        // Fixed-point sweeps until two consecutive corrector values agree
        // within e. A NaN difference compares false and falls through to the
        // finite check below.
        let mut sweeps = 0;
        while (y_cor - y_pred).abs() > e {
            if sweeps >= max_corrections {
                return Err(Error::NonConvergence(x_cur, max_corrections));
            }
            y_pred = y_cor;
            dydx[i] = f.eval(x_cur, y_pred);
            nfev += 1;
            y_cor = y_prev
                + h / 24.0
                    * (AM0 * dydx[i] + AM1 * dydx[i - 1] + AM2 * dydx[i - 2] + AM3 * dydx[i - 3]);
            sweeps += 1;
        }

        if !y_cor.is_finite() {
            return Err(Error::NonFinite(x_cur));
        }

        x.push(x_cur);
        y.push(y_cor);
    }

    Ok(Trajectory { x, y, h, nfev })
}

// Classical RK4 starter coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;

// Adams-Bashforth 4-step predictor weights, h/24 factored out
const AB1: Float = 55.0;
const AB2: Float = -59.0;
const AB3: Float = 37.0;
const AB4: Float = -9.0;

// Adams-Moulton 3-step corrector weights, h/24 factored out
const AM0: Float = 9.0;
const AM1: Float = 19.0;
const AM2: Float = -5.0;
const AM3: Float = 1.0;
