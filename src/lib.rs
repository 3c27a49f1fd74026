//! A lab of fixed-step numerical methods for scalar Cauchy problems, with
//! accuracy reporting against known closed-form solutions.
//!
//! Two integration schemes are provided: the improved Euler method (order 2)
//! and the fourth-order Adams predictor-corrector started by Runge-Kutta 4.
//! The high-level [`solve`] entry point runs a scheme at step `h` and again at
//! `h / 2`, then derives a per-point error table combining the Runge-rule
//! estimate with the deviation from the closed-form solution. A small
//! [`catalog`] ships three textbook equations with their closed forms and
//! sensible default parameters.

mod error;
mod plot;
mod problems;
mod report;
mod runge;

pub mod core;
pub mod methods;
pub mod prelude;
pub mod solve;

pub use crate::core::rhs::Rhs;
pub use crate::core::trajectory::Trajectory;
pub use error::Error;
pub use methods::{Method, adams4, improved_euler};
pub use plot::render_comparison;
pub use problems::{Problem, catalog};
pub use report::render_table;
pub use runge::{ErrorRow, error_rows};
pub use solve::{MethodReport, Parameters, SolveOptions, integrate, solve};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
