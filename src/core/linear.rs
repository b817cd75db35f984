use super::error::SolveError;
use super::solution::Solution;
use super::tolerance::is_negligible;

/// Solves `b·x + c = 0`.
pub fn solve_linear(b: f64, c: f64) -> Result<Solution, SolveError> {
    let b = SolveError::check_finite("b", b)?;
    let c = SolveError::check_finite("c", c)?;

    let solution = match (is_negligible(b), is_negligible(c)) {
        // 0 = 0 holds for every x
        (true, true) => Solution::InfiniteRoots,
        (true, false) => Solution::NoRoots,
        (false, true) => Solution::one(0.0),
        (false, false) => Solution::one(-c / b),
    };
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_equation_has_infinite_roots() {
        assert_eq!(solve_linear(0.0, 0.0), Ok(Solution::InfiniteRoots));
        assert_eq!(solve_linear(1e-8, -1e-8), Ok(Solution::InfiniteRoots));
    }

    #[test]
    fn nonzero_constant_has_no_roots() {
        assert_eq!(solve_linear(0.0, 5.0), Ok(Solution::NoRoots));
        assert_eq!(solve_linear(1e-9, -0.25), Ok(Solution::NoRoots));
    }

    #[test]
    fn single_root() {
        assert_eq!(solve_linear(2.0, -1.0), Ok(Solution::one(0.5)));
        assert_eq!(solve_linear(-4.0, 1.0), Ok(Solution::one(0.25)));
    }

    #[test]
    fn negligible_constant_gives_exact_zero() {
        let Ok(Solution::OneRoot([x])) = solve_linear(3.0, 1e-9) else {
            panic!("expected one root");
        };
        assert_eq!(x, 0.0);
        assert!(x.is_sign_positive());
    }

    #[test]
    fn rejects_nan() {
        assert!(matches!(
            solve_linear(f64::NAN, 1.0),
            Err(SolveError::NonFinite { name: "b", .. })
        ));
        assert!(matches!(
            solve_linear(1.0, f64::INFINITY),
            Err(SolveError::NonFinite { name: "c", .. })
        ));
    }
}
