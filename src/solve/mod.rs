//! High-level solve module: parameters, options and entry points.

pub mod options;
pub mod params;
pub mod run;

// Re-exports for ergonomic access via crate::solve::* and prelude
pub use options::SolveOptions;
pub use params::Parameters;
pub use run::{MethodReport, integrate, solve};
