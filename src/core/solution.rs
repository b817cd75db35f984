//! Result types for a single solve.

/// How many real roots an equation has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootCount {
    NoRoots,
    OneRoot,
    TwoRoots,
    InfiniteRoots,
}

/// The classified outcome of solving an equation.
///
/// Root values are only carried by the one- and two-root variants. For
/// `TwoRoots` the values are distinct and ascending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    NoRoots,
    OneRoot([f64; 1]),
    TwoRoots([f64; 2]),
    InfiniteRoots,
}

impl Solution {
    pub fn one(x: f64) -> Self {
        Solution::OneRoot([x])
    }

    /// Builds a two-root solution, ordering the values smaller first.
    pub fn two(x1: f64, x2: f64) -> Self {
        if x1 <= x2 {
            Solution::TwoRoots([x1, x2])
        } else {
            Solution::TwoRoots([x2, x1])
        }
    }

    pub fn count(&self) -> RootCount {
        match self {
            Solution::NoRoots => RootCount::NoRoots,
            Solution::OneRoot(_) => RootCount::OneRoot,
            Solution::TwoRoots(_) => RootCount::TwoRoots,
            Solution::InfiniteRoots => RootCount::InfiniteRoots,
        }
    }

    /// The reported root values; empty for `NoRoots` and `InfiniteRoots`.
    pub fn roots(&self) -> &[f64] {
        match self {
            Solution::OneRoot(x) => x.as_slice(),
            Solution::TwoRoots(x) => x.as_slice(),
            Solution::NoRoots | Solution::InfiniteRoots => &[],
        }
    }
}
