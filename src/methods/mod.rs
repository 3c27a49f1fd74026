// Numerical methods

mod adams;
mod euler;

pub use adams::adams4;
pub use euler::improved_euler;

use crate::{Float, error::Error};

/// Fixed-step integration scheme selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Improved Euler (Heun), second order
    ImprovedEuler,
    /// Adams-Bashforth 4 predictor with Adams-Moulton 3 corrector, fourth order
    Adams4,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::ImprovedEuler => "Improved Euler",
            Method::Adams4 => "Adams 4th order",
        }
    }

    /// Convergence order p, the exponent in the Runge-rule denominator.
    pub fn order(&self) -> u32 {
        match self {
            Method::ImprovedEuler => 2,
            Method::Adams4 => 4,
        }
    }
}

/// Number of grid points a step h produces on [a, b], start included.
/// The last point may undershoot b when (b - a) / h is not an integer.
/// Callers validate the inputs first so the count fits in a usize.
pub(crate) fn point_count(a: Float, b: Float, h: Float) -> usize {
    ((b - a) / h).floor() as usize + 1
}

pub(crate) fn validate_problem(a: Float, b: Float, y0: Float, h: Float) -> Result<(), Error> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(Error::InvalidInterval(a, b));
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    // Steps this small give more grid points than usize can count; an
    // infinite quotient fails the comparison too.
    if !(((b - a) / h).floor() < usize::MAX as Float) {
        return Err(Error::InvalidStepSize(h));
    }
    if !y0.is_finite() {
        return Err(Error::InvalidInitialValue(y0));
    }
    Ok(())
}

pub(crate) fn validate_tolerance(e: Float) -> Result<(), Error> {
    if !e.is_finite() || e <= 0.0 {
        return Err(Error::InvalidTolerance(e));
    }
    Ok(())
}
