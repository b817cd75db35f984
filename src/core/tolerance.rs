//! Tolerance-based zero test shared by every solver.

/// Magnitudes strictly below this are treated as exactly zero.
pub const TOLERANCE: f64 = 1e-6;

/// `true` when `|value| < TOLERANCE`.
#[inline]
pub fn is_negligible(value: f64) -> bool {
    value.abs() < TOLERANCE
}

/// Approximate equality under the same tolerance as [`is_negligible`].
#[inline]
pub fn approx_eq(x: f64, y: f64) -> bool {
    is_negligible(x - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_noise_are_negligible() {
        assert!(is_negligible(0.0));
        assert!(is_negligible(-0.0));
        assert!(is_negligible(1e-9));
        assert!(is_negligible(-9.9e-7));
    }

    #[test]
    fn boundary_is_not_negligible() {
        // strict comparison: exactly TOLERANCE counts as nonzero
        assert!(!is_negligible(TOLERANCE));
        assert!(!is_negligible(-TOLERANCE));
        assert!(!is_negligible(0.5));
    }

    #[test]
    fn approx_eq_uses_shared_tolerance() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(!approx_eq(1.0, 1.00001));
    }
}
