//! Validated integration parameters shared by the solvers.

use crate::{Float, error::Error, methods};

/// Integration setup: interval, initial value, step and corrector tolerance.
///
/// [`Parameters::new`] screens every field up front so the driver can reject
/// bad input before any integration starts; the integrators re-check on entry
/// since they also accept raw arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub a: Float,
    pub b: Float,
    pub y0: Float,
    pub h: Float,
    /// Corrector tolerance; only the Adams method reads it.
    pub e: Float,
}

impl Parameters {
    /// Validate and bundle a full parameter set.
    pub fn new(a: Float, b: Float, y0: Float, h: Float, e: Float) -> Result<Self, Error> {
        methods::validate_problem(a, b, y0, h)?;
        methods::validate_tolerance(e)?;
        Ok(Parameters { a, b, y0, h, e })
    }

    /// Companion parameter set with the step halved, for Runge comparison runs.
    pub fn halved(&self) -> Parameters {
        Parameters { h: self.h / 2.0, ..*self }
    }

    /// Number of grid points the step produces on [a, b], start included.
    pub fn point_count(&self) -> usize {
        methods::point_count(self.a, self.b, self.h)
    }
}
