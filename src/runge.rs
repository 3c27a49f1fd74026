//! Runge-rule accuracy evaluation against a half-step companion run.

use crate::{Float, core::trajectory::Trajectory, error::Error, methods::Method};

/// One error-table row: the numeric value at a grid point together with its
/// accuracy estimates. Derived for display, never stored by the library.
#[derive(Debug, Clone)]
pub struct ErrorRow {
    pub index: usize,
    pub x: Float,
    /// Numeric value from the full-step run.
    pub y: Float,
    /// Runge-rule estimate (y_h(x) - y_{h/2}(x)) / (2^p - 1).
    pub runge: Float,
    /// Absolute deviation from the closed-form solution.
    pub abs_error: Float,
    /// Closed-form solution value at x.
    pub exact: Float,
}

/// Build per-point error rows for a full-step trajectory using Runge's rule.
///
/// `half` must come from the same problem integrated with the step halved, so
/// that full-step point i coincides with half-step point 2i; the lengths are
/// checked before any row is built. `reference` is the closed-form solution
/// and `c` its integration constant. The method's order fixes the 2^p - 1
/// denominator, nonzero for every order the crate ships. Row 0 compares the
/// shared initial condition with itself, so its estimate is exactly zero.
pub fn error_rows<R>(
    full: &Trajectory,
    half: &Trajectory,
    method: Method,
    reference: R,
    c: Float,
) -> Result<Vec<ErrorRow>, Error>
where
    R: Fn(Float, Float) -> Float,
{
    if half.len() + 1 < 2 * full.len() {
        return Err(Error::HalfStepMismatch(full.len(), half.len()));
    }

    let denom = Float::powi(2.0, method.order() as i32) - 1.0;
    let mut rows = Vec::with_capacity(full.len());
    for i in 0..full.len() {
        let x = full.x[i];
        let y = full.y[i];
        let exact = reference(x, c);
        rows.push(ErrorRow {
            index: i,
            x,
            y,
            runge: (y - half.y[2 * i]) / denom,
            abs_error: (exact - y).abs(),
            exact,
        });
    }
    Ok(rows)
}
