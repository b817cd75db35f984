//! Equation classification core and the pure collaborators built on it.
//! Nothing in here performs I/O.

pub mod batch;
pub mod error;
pub mod linear;
pub mod quadratic;
pub mod render;
pub mod solution;
pub mod solver;
pub mod tolerance;

pub use error::SolveError;
pub use solution::{RootCount, Solution};
pub use solver::{solve, Equation};
pub use tolerance::{is_negligible, TOLERANCE};
