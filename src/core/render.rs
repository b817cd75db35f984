//! Human-readable rendering of solve results.

use std::fmt;

use super::solution::{RootCount, Solution};

/// Renders a solution, e.g. `two roots: 1, 2`.
pub fn render(solution: &Solution) -> String {
    solution.to_string()
}

/// Prints `-0` as `0`.
fn root(x: f64) -> f64 {
    x + 0.0
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::NoRoots => write!(f, "no roots"),
            Solution::OneRoot([x]) => write!(f, "one root: {}", root(*x)),
            Solution::TwoRoots([x1, x2]) => {
                write!(f, "two roots: {}, {}", root(*x1), root(*x2))
            }
            Solution::InfiniteRoots => write!(f, "infinitely many roots"),
        }
    }
}

impl fmt::Display for RootCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RootCount::NoRoots => "no roots",
            RootCount::OneRoot => "one root",
            RootCount::TwoRoots => "two roots",
            RootCount::InfiniteRoots => "infinitely many roots",
        };
        f.write_str(s)
    }
}
