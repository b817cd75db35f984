//! Linear and quadratic equation solver with tolerance-based degeneracy
//! handling, plus the interactive, one-shot and batch front ends.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;

pub use crate::core::{solve, Equation, RootCount, Solution, SolveError};
