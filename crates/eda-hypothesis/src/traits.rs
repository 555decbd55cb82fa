//! Two-sample test trait and shared sample moments

use crate::decision::{decide, significance_level};
use crate::types::{TailMode, TestMethod, TestResult, TestStatistic};
use eda_core::{utils, Error, Result};
use tracing::debug;

/// A test comparing the means of two independent samples
pub trait TwoSampleTest {
    /// Which method this test implements
    fn method(&self) -> TestMethod;

    /// Compute the statistic and its two-sided p-value
    fn statistic(&self, first: &[f64], second: &[f64]) -> Result<TestStatistic>;

    /// Run the test and apply the confidence / tail decision rule
    fn run(
        &self,
        first: &[f64],
        second: &[f64],
        confidence: f64,
        tail: TailMode,
        null_hypothesis: String,
    ) -> Result<TestResult> {
        let alpha = significance_level(confidence, tail)?;
        let stat = self.statistic(first, second)?;
        let decision = decide(stat.p_value, alpha);

        debug!(
            method = %self.method(),
            statistic = stat.statistic,
            p_value = stat.p_value,
            alpha,
            reject = decision.is_reject(),
            "two-sample test finished"
        );

        Ok(TestResult {
            method: self.method(),
            statistic: stat.statistic,
            p_value: stat.p_value,
            alpha,
            decision,
            null_hypothesis,
            tail,
            confidence,
            sample_sizes: (first.len(), second.len()),
            degrees_of_freedom: stat.degrees_of_freedom,
        })
    }
}

/// Count, mean and sum of squared deviations of one sample
#[derive(Debug, Clone, Copy)]
pub(crate) struct Moments {
    pub n: f64,
    pub mean: f64,
    pub sum_squares: f64,
}

impl Moments {
    pub fn of(sample: &[f64]) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::empty_input("Two-sample test"));
        }
        if sample.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidInput(
                "Two-sample test requires finite values".to_string(),
            ));
        }

        let n = sample.len() as f64;
        // A constant sample has exactly its value as mean and no spread
        if utils::is_constant(sample) {
            return Ok(Self {
                n,
                mean: sample[0],
                sum_squares: 0.0,
            });
        }

        let mean = utils::mean(sample);
        let sum_squares = sample.iter().map(|v| (v - mean).powi(2)).sum();
        Ok(Self {
            n,
            mean,
            sum_squares,
        })
    }

    /// Sample variance (ddof = 1)
    pub fn sample_variance(&self) -> f64 {
        if self.n < 2.0 {
            0.0
        } else {
            self.sum_squares / (self.n - 1.0)
        }
    }
}

/// Both samples' moments, rejecting inputs with no residual degrees of freedom
pub(crate) fn paired_moments(first: &[f64], second: &[f64]) -> Result<(Moments, Moments)> {
    let a = Moments::of(first)?;
    let b = Moments::of(second)?;
    if first.len() + second.len() <= 2 {
        return Err(Error::InsufficientData {
            expected: 3,
            actual: first.len() + second.len(),
        });
    }
    Ok((a, b))
}

/// Turn a mean difference and its standard error into a statistic
///
/// A zero standard error is only meaningful when the means differ; the
/// statistic is then infinite and the p-value zero.
pub(crate) fn standardise(diff: f64, std_error: f64) -> Result<Option<f64>> {
    if std_error > 0.0 {
        return Ok(Some(diff / std_error));
    }
    if diff == 0.0 {
        return Err(Error::zero_spread("Two-sample test statistic"));
    }
    Ok(None)
}
