use thiserror::Error;

/// Reasons a solve call is rejected instead of producing a [`Solution`].
///
/// [`Solution`]: crate::core::solution::Solution
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolveError {
    #[error("coefficient `{name}` is not a finite number ({value})")]
    NonFinite { name: &'static str, value: f64 },

    #[error("leading coefficient {a} is negligible; not a quadratic equation")]
    DegenerateLeading { a: f64 },
}

impl SolveError {
    /// Fails with [`SolveError::NonFinite`] unless `value` is finite.
    pub fn check_finite(name: &'static str, value: f64) -> Result<f64, SolveError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SolveError::NonFinite { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_finite_message() {
        let err = SolveError::check_finite("b", f64::NAN).unwrap_err();
        assert_eq!(format!("{}", err), "coefficient `b` is not a finite number (NaN)");
    }

    #[test]
    fn infinity_rejected() {
        assert!(SolveError::check_finite("a", f64::INFINITY).is_err());
        assert!(SolveError::check_finite("a", f64::NEG_INFINITY).is_err());
        assert_eq!(SolveError::check_finite("a", -2.5), Ok(-2.5));
    }

    #[test]
    fn degenerate_message() {
        let err = SolveError::DegenerateLeading { a: 0.0 };
        assert_eq!(
            format!("{}", err),
            "leading coefficient 0 is negligible; not a quadratic equation"
        );
    }
}
