//! Equation dispatch: degree-2 → degree-1 → degree-0 collapse.

use super::error::SolveError;
use super::linear::solve_linear;
use super::quadratic::solve_quadratic;
use super::solution::Solution;
use super::tolerance::is_negligible;

/// Solves `a·x² + b·x + c = 0`, falling back to the linear solver when the
/// leading coefficient is negligible.
///
/// Finiteness is checked by whichever solver is picked: a NaN or infinite
/// `a` is never negligible, so it reaches [`solve_quadratic`] and is
/// rejected there.
pub fn solve(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    if is_negligible(a) {
        solve_linear(b, c)
    } else {
        solve_quadratic(a, b, c)
    }
}

/// Coefficients of `a·x² + b·x + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Equation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn solve(&self) -> Result<Solution, SolveError> {
        solve(self.a, self.b, self.c)
    }

    /// Left-hand side at `x`; the residual of a candidate root.
    pub fn evaluate(&self, x: f64) -> f64 {
        // Horner form
        (self.a * x + self.b) * x + self.c
    }
}

impl From<[f64; 3]> for Equation {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self::new(a, b, c)
    }
}
