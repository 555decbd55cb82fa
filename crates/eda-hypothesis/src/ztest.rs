//! Two-sample Z-test with pooled variance

use crate::traits::{paired_moments, standardise, TwoSampleTest};
use crate::types::{TestMethod, TestStatistic};
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Pooled-variance two-sample Z-test
///
/// The standard error of the mean difference is
/// `sqrt(ss / (n1 + n2 - 2) * (1/n1 + 1/n2))` where `ss` is the summed
/// squared deviations of both samples. The p-value is two-sided under the
/// standard normal: `2 * (1 - Φ(|z|))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZTest;

impl ZTest {
    pub fn new() -> Self {
        Self
    }
}

impl TwoSampleTest for ZTest {
    fn method(&self) -> TestMethod {
        TestMethod::ZTest
    }

    fn statistic(&self, first: &[f64], second: &[f64]) -> Result<TestStatistic> {
        let (a, b) = paired_moments(first, second)?;

        let pooled = (a.sum_squares + b.sum_squares) / (a.n + b.n - 2.0);
        let std_error = (pooled * (1.0 / a.n + 1.0 / b.n)).sqrt();
        let diff = a.mean - b.mean;

        let (statistic, p_value) = match standardise(diff, std_error)? {
            Some(z) => {
                let normal = Normal::new(0.0, 1.0)
                    .map_err(|e| Error::InvalidParameter(e.to_string()))?;
                (z, (2.0 * (1.0 - normal.cdf(z.abs()))).clamp(0.0, 1.0))
            }
            None => (f64::INFINITY.copysign(diff), 0.0),
        };

        Ok(TestStatistic {
            statistic,
            p_value,
            degrees_of_freedom: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identical_samples() {
        let sample = [1.0, 2.0, 3.0, 4.0];
        let stat = ZTest.statistic(&sample, &sample).unwrap();
        assert_relative_eq!(stat.statistic, 0.0);
        assert_relative_eq!(stat.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_statistic() {
        // means 12 / 22, ss 10 / 10, pooled 2.5, se = 1
        let a = [10.0, 11.0, 12.0, 13.0, 14.0];
        let b = [20.0, 21.0, 22.0, 23.0, 24.0];
        let stat = ZTest.statistic(&a, &b).unwrap();
        assert_relative_eq!(stat.statistic, -10.0, epsilon = 1e-12);
        assert!(stat.p_value < 1e-10);
        assert!(stat.degrees_of_freedom.is_none());
    }

    #[test]
    fn test_moderate_difference_p_value() {
        // se = 1, z = -1.5 => p = 2 * (1 - Φ(1.5)) ≈ 0.1336
        let a = [10.0, 11.0, 12.0, 13.0, 14.0];
        let b = [11.5, 12.5, 13.5, 14.5, 15.5];
        let stat = ZTest.statistic(&a, &b).unwrap();
        assert_relative_eq!(stat.statistic, -1.5, epsilon = 1e-12);
        assert_relative_eq!(stat.p_value, 0.133614, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_variance_equal_means_is_degenerate() {
        let err = ZTest.statistic(&[3.0, 3.0], &[3.0, 3.0]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }

    #[test]
    fn test_zero_variance_different_means() {
        let stat = ZTest.statistic(&[1.0, 1.0], &[2.0, 2.0]).unwrap();
        assert_eq!(stat.statistic, f64::NEG_INFINITY);
        assert_eq!(stat.p_value, 0.0);
    }

    #[test]
    fn test_inexact_constant_samples_are_degenerate() {
        // summing 0.1s leaves rounding noise in the means and squared deviations
        let err = ZTest.statistic(&[0.1; 10], &[0.1; 5]).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));

        let stat = ZTest.statistic(&[0.1; 10], &[0.3; 5]).unwrap();
        assert_eq!(stat.statistic, f64::NEG_INFINITY);
        assert_eq!(stat.p_value, 0.0);
    }

    #[test]
    fn test_too_few_observations() {
        assert!(ZTest.statistic(&[1.0], &[2.0]).is_err());
        assert!(ZTest.statistic(&[], &[1.0, 2.0, 3.0]).is_err());
    }
}
