//! Core traits and types used throughout the library.

pub mod rhs;
pub mod trajectory;
