//! Two-sample Student T-test

use crate::traits::{paired_moments, standardise, TwoSampleTest};
use crate::types::{TestMethod, TestStatistic};
use eda_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Variance assumption of the T-test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarianceAssumption {
    /// Equal variances, pooled estimate, `df = n1 + n2 - 2`
    Pooled,
    /// Unequal variances with Welch–Satterthwaite degrees of freedom
    Welch,
}

/// Two-sample T-test over independent samples
///
/// The pooled (equal-variance) form is the default; [`TTest::welch`] opts
/// into the unequal-variance variant. The p-value is two-sided.
#[derive(Debug, Clone, Copy)]
pub struct TTest {
    variance: VarianceAssumption,
}

impl TTest {
    /// Pooled equal-variance T-test
    pub fn new() -> Self {
        Self {
            variance: VarianceAssumption::Pooled,
        }
    }

    /// Welch's unequal-variance T-test
    pub fn welch() -> Self {
        Self {
            variance: VarianceAssumption::Welch,
        }
    }

    pub fn variance_assumption(&self) -> VarianceAssumption {
        self.variance
    }
}

impl Default for TTest {
    fn default() -> Self {
        Self::new()
    }
}

impl TwoSampleTest for TTest {
    fn method(&self) -> TestMethod {
        TestMethod::TTest
    }

    fn statistic(&self, first: &[f64], second: &[f64]) -> Result<TestStatistic> {
        let (a, b) = paired_moments(first, second)?;
        let diff = a.mean - b.mean;

        let (std_error, df) = match self.variance {
            VarianceAssumption::Pooled => {
                let df = a.n + b.n - 2.0;
                let pooled = (a.sum_squares + b.sum_squares) / df;
                ((pooled * (1.0 / a.n + 1.0 / b.n)).sqrt(), df)
            }
            VarianceAssumption::Welch => {
                if a.n < 2.0 || b.n < 2.0 {
                    return Err(Error::InsufficientData {
                        expected: 2,
                        actual: first.len().min(second.len()),
                    });
                }
                let va = a.sample_variance() / a.n;
                let vb = b.sample_variance() / b.n;
                let denom = va.powi(2) / (a.n - 1.0) + vb.powi(2) / (b.n - 1.0);
                let df = if denom > 0.0 {
                    (va + vb).powi(2) / denom
                } else {
                    a.n + b.n - 2.0
                };
                ((va + vb).sqrt(), df)
            }
        };

        let (statistic, p_value) = match standardise(diff, std_error)? {
            Some(t) => {
                let dist = StudentsT::new(0.0, 1.0, df)
                    .map_err(|e| Error::InvalidParameter(e.to_string()))?;
                (t, (2.0 * (1.0 - dist.cdf(t.abs()))).clamp(0.0, 1.0))
            }
            None => (f64::INFINITY.copysign(diff), 0.0),
        };

        Ok(TestStatistic {
            statistic,
            p_value,
            degrees_of_freedom: Some(df),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pooled_known_value() {
        let a = [10.0, 11.0, 12.0, 13.0, 14.0];
        let b = [11.5, 12.5, 13.5, 14.5, 15.5];
        let stat = TTest::new().statistic(&a, &b).unwrap();
        assert_relative_eq!(stat.statistic, -1.5, epsilon = 1e-12);
        assert_eq!(stat.degrees_of_freedom, Some(8.0));
        assert_relative_eq!(stat.p_value, 0.172003, epsilon = 1e-5);
    }

    #[test]
    fn test_t_p_value_exceeds_z_p_value() {
        // heavier tails of the T distribution
        let a = [10.0, 11.0, 12.0, 13.0, 14.0];
        let b = [11.5, 12.5, 13.5, 14.5, 15.5];
        let t = TTest::new().statistic(&a, &b).unwrap();
        let z = crate::ZTest.statistic(&a, &b).unwrap();
        assert_relative_eq!(t.statistic, z.statistic, epsilon = 1e-12);
        assert!(t.p_value > z.p_value);
    }

    #[test]
    fn test_welch_statistic_and_df() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 30.0];
        let stat = TTest::welch().statistic(&a, &b).unwrap();
        assert_relative_eq!(stat.statistic, -1.3598002, epsilon = 1e-6);
        assert_relative_eq!(stat.degrees_of_freedom.unwrap(), 4.1537893, epsilon = 1e-6);
    }

    #[test]
    fn test_identical_samples_accept() {
        let sample = [2.0, 4.0, 6.0];
        let stat = TTest::new().statistic(&sample, &sample).unwrap();
        assert_relative_eq!(stat.statistic, 0.0);
        assert_relative_eq!(stat.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inexact_constant_samples_are_degenerate() {
        for test in [TTest::new(), TTest::welch()] {
            let err = test.statistic(&[0.1; 10], &[0.1; 5]).unwrap_err();
            assert!(matches!(err, Error::DegenerateInput(_)));

            let stat = test.statistic(&[0.3; 5], &[0.1; 10]).unwrap();
            assert_eq!(stat.statistic, f64::INFINITY);
            assert_eq!(stat.p_value, 0.0);
        }
    }

    #[test]
    fn test_welch_needs_two_per_group() {
        assert!(TTest::welch().statistic(&[1.0], &[2.0, 3.0, 4.0]).is_err());
        assert!(TTest::new().statistic(&[1.0], &[2.0, 3.0, 4.0]).is_ok());
    }
}
