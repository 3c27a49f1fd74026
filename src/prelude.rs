//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odelab::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `Rhs`, `Trajectory`, `Error`, `Float`.
//! - Methods: `Method`, `improved_euler`, `adams4`.
//! - High-level API: `solve`, `integrate`, `Parameters`, `SolveOptions`,
//!   `MethodReport`, `ErrorRow`, `error_rows`.
//! - Problems and presentation: `Problem`, `catalog`, `render_table`,
//!   `render_comparison`.
//!

pub use crate::core::{rhs::Rhs, trajectory::Trajectory};
pub use crate::methods::{Method, adams4, improved_euler};
pub use crate::solve::{MethodReport, Parameters, SolveOptions, integrate, solve};
pub use crate::{
    Error, ErrorRow, Float, Problem, catalog, error_rows, render_comparison, render_table,
};
