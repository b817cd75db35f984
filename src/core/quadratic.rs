use super::error::SolveError;
use super::solution::Solution;
use super::tolerance::is_negligible;

/// Solves `a·x² + b·x + c = 0` for a non-negligible `a`.
///
/// Callers with a possibly vanishing leading coefficient go through
/// [`solve`](crate::core::solver::solve), which falls back to the linear
/// solver. Here a negligible `a` is rejected with
/// [`SolveError::DegenerateLeading`].
///
/// Distinct roots are computed as `q / a` and `c / q` with
/// `q = -(b + sign(b)·√D) / 2`, which avoids cancellation when `b² ≫ 4ac`.
/// When `b²` or `4ac` overflows, the discriminant is formed from the
/// coefficients divided by the largest magnitude among them.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    let a = SolveError::check_finite("a", a)?;
    let b = SolveError::check_finite("b", b)?;
    let c = SolveError::check_finite("c", c)?;
    if is_negligible(a) {
        return Err(SolveError::DegenerateLeading { a });
    }

    let mut d = discriminant(a, b, c);
    let (a, b, c, root_d) = if d.is_finite() {
        (a, b, c, d)
    } else {
        // b² or 4ac overflowed: same roots, coefficients scaled into range
        let s = a.abs().max(b.abs()).max(c.abs());
        let (a, b, c) = (a / s, b / s, c / s);
        let scaled = discriminant(a, b, c);
        d = scaled * s * s;
        (a, b, c, scaled)
    };

    // A slightly negative discriminant is still negative: no tolerance here.
    if d < 0.0 {
        return Ok(Solution::NoRoots);
    }
    if is_negligible(d) {
        return Ok(Solution::one(-b / (2.0 * a)));
    }

    let q = -0.5 * (b + root_d.sqrt().copysign(b));
    Ok(Solution::two(q / a, c / q))
}

/// `b² − 4ac`
#[inline]
pub fn discriminant(a: f64, b: f64, c: f64) -> f64 {
    b * b - 4.0 * a * c
}
