//! Entry points tying the integrators, half-step companion runs and the
//! Runge error rows together.

use crate::{
    Float,
    core::{rhs::Rhs, trajectory::Trajectory},
    error::Error,
    methods::{Method, adams4, improved_euler},
    runge::{ErrorRow, error_rows},
};

use super::{options::SolveOptions, params::Parameters};

/// Everything one method run produces: both trajectories and the error rows.
#[derive(Debug, Clone)]
pub struct MethodReport {
    pub method: Method,
    /// Run at the requested step h.
    pub trajectory: Trajectory,
    /// Companion run at h / 2 backing the Runge estimates.
    pub half_step: Trajectory,
    pub rows: Vec<ErrorRow>,
}

/// Integrate with the selected method at the parameters' own step size.
pub fn integrate<F>(
    method: Method,
    f: &F,
    params: &Parameters,
    options: &SolveOptions,
) -> Result<Trajectory, Error>
where
    F: Rhs,
{
    match method {
        Method::ImprovedEuler => improved_euler(f, params.a, params.b, params.y0, params.h),
        Method::Adams4 => adams4(
            f,
            params.a,
            params.b,
            params.y0,
            params.h,
            params.e,
            options.max_corrections,
        ),
    }
}

/// Run a method at h and at h / 2 and derive the per-point error rows.
///
/// `c` is the integration constant for the closed-form `reference`, normally
/// obtained from a problem's `constant` function at `(a, y0)`. The first
/// failure in either run aborts the whole report; there are no partial
/// results.
pub fn solve<F, R>(
    method: Method,
    f: &F,
    reference: R,
    c: Float,
    params: &Parameters,
    options: &SolveOptions,
) -> Result<MethodReport, Error>
where
    F: Rhs,
    R: Fn(Float, Float) -> Float,
{
    let trajectory = integrate(method, f, params, options)?;
    let half_step = integrate(method, f, &params.halved(), options)?;
    let rows = error_rows(&trajectory, &half_step, method, reference, c)?;
    Ok(MethodReport { method, trajectory, half_step, rows })
}
