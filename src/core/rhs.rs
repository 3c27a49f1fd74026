//! User-supplied right-hand side of a scalar first-order ODE.

use crate::Float;

/// User-supplied right-hand side of a scalar Cauchy problem.
///
/// Implement this trait for your equation to provide the function
/// `y' = f(x, y)`. The integrators call [`eval`](Rhs::eval) with the current
/// abscissa `x` and value `y` and expect the derivative back. Any closure or
/// plain function with the matching signature already implements it.
///
/// # Example
///
/// ```ignore
/// struct Riccati;
/// impl Rhs for Riccati {
///     fn eval(&self, x: f64, y: f64) -> f64 {
///         y + (1.0 + x) * y * y
///     }
/// }
/// ```
pub trait Rhs {
    fn eval(&self, x: Float, y: Float) -> Float;
}

impl<F> Rhs for F
where
    F: Fn(Float, Float) -> Float,
{
    fn eval(&self, x: Float, y: Float) -> Float {
        self(x, y)
    }
}
