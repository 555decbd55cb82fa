//! Confidence / tail decision rule

use crate::types::{Decision, TailMode};
use eda_core::{Error, Result};

/// Significance level for a confidence percentage
///
/// `alpha = 1 - confidence / 100`, halved for [`TailMode::TwoTailed`].
/// Confidence must lie in `[0, 100]`.
///
/// # Example
///
/// ```rust
/// use eda_hypothesis::{significance_level, TailMode};
///
/// let alpha = significance_level(95.0, TailMode::TwoTailed).unwrap();
/// assert!((alpha - 0.025).abs() < 1e-12);
/// ```
pub fn significance_level(confidence: f64, tail: TailMode) -> Result<f64> {
    if !(0.0..=100.0).contains(&confidence) {
        return Err(Error::InvalidParameter(format!(
            "Confidence {confidence} must be within [0, 100]"
        )));
    }

    let alpha = 1.0 - confidence / 100.0;
    Ok(match tail {
        TailMode::OneTailed => alpha,
        TailMode::TwoTailed => alpha / 2.0,
    })
}

/// Reject the null hypothesis when `p_value < alpha`
pub fn decide(p_value: f64, alpha: f64) -> Decision {
    if p_value < alpha {
        Decision::RejectNull
    } else {
        Decision::AcceptNull
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_from_confidence() {
        assert_relative_eq!(significance_level(95.0, TailMode::OneTailed).unwrap(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(significance_level(99.0, TailMode::TwoTailed).unwrap(), 0.005, epsilon = 1e-12);
        assert_relative_eq!(significance_level(100.0, TailMode::OneTailed).unwrap(), 0.0);
        assert_relative_eq!(significance_level(0.0, TailMode::OneTailed).unwrap(), 1.0);
    }

    #[test]
    fn test_confidence_out_of_range() {
        assert!(significance_level(-1.0, TailMode::OneTailed).is_err());
        assert!(significance_level(100.5, TailMode::TwoTailed).is_err());
        assert!(significance_level(f64::NAN, TailMode::OneTailed).is_err());
    }

    #[test]
    fn test_decision_is_strict() {
        assert_eq!(decide(0.04, 0.05), Decision::RejectNull);
        assert_eq!(decide(0.05, 0.05), Decision::AcceptNull);
        assert_eq!(decide(1.0, 0.05), Decision::AcceptNull);
    }

    #[test]
    fn test_two_tailed_is_stricter() {
        // p = 0.04 passes one-tailed 95% but not the halved two-tailed alpha
        let one = significance_level(95.0, TailMode::OneTailed).unwrap();
        let two = significance_level(95.0, TailMode::TwoTailed).unwrap();
        assert!(decide(0.04, one).is_reject());
        assert!(!decide(0.04, two).is_reject());
    }
}
