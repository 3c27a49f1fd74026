use odelab::Float;

/// dy/dx = y with y(0) = 1: the classic exponential growth problem, used
/// wherever a smooth equation with a known closed form is enough.
pub fn exp_rhs(_x: Float, y: Float) -> Float {
    y
}

/// Closed form of `exp_rhs`: y = C e^x.
pub fn exp_reference(x: Float, c: Float) -> Float {
    c * x.exp()
}
