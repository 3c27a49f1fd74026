//! Errors for integration methods and error evaluation

use crate::Float;

/// Validation and runtime errors returned by the solver entry points.
#[derive(Debug, Clone)]
pub enum Error {
    /// Interval bounds do not satisfy `a < b`, or one of them is not finite.
    InvalidInterval(Float, Float),
    /// Step size is not positive and finite.
    InvalidStepSize(Float),
    /// Corrector tolerance is not positive and finite.
    InvalidTolerance(Float),
    /// Initial value is not finite.
    InvalidInitialValue(Float),
    /// An accepted solution value became NaN or infinite at this abscissa.
    NonFinite(Float),
    /// The corrector did not settle within the sweep limit at this abscissa.
    NonConvergence(Float, usize),
    /// Half-step trajectory has too few points for the Runge comparison
    /// (full-step length, half-step length).
    HalfStepMismatch(usize, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInterval(a, b) => {
                write!(f, "interval must satisfy a < b with finite bounds (got a = {}, b = {})", a, b)
            }
            Error::InvalidStepSize(v) => write!(f, "step size h must be positive and finite (got {})", v),
            Error::InvalidTolerance(v) => write!(f, "tolerance e must be positive and finite (got {})", v),
            Error::InvalidInitialValue(v) => write!(f, "initial value y0 must be finite (got {})", v),
            Error::NonFinite(x) => write!(f, "solution value became non-finite at x = {}", x),
            Error::NonConvergence(x, limit) => {
                write!(f, "corrector failed to converge within {} sweeps at x = {}", limit, x)
            }
            Error::HalfStepMismatch(full, half) => {
                write!(
                    f,
                    "half-step run too short for Runge comparison ({} full-step points need at least {} half-step points, got {})",
                    full,
                    2 * full.saturating_sub(1) + 1,
                    half
                )
            }
        }
    }
}

impl std::error::Error for Error {}
