//! Core traits for outlier detection

use crate::types::{Detection, Fence, OutlierLabel};
use eda_core::{Error, Result};

/// Intrinsic properties of an outlier detector
pub trait OutlierDetectorProperties {
    /// Get the name of this detector
    fn name(&self) -> &str;

    /// Check if the underlying location/scale pair is robust to outliers
    fn is_robust(&self) -> bool;

    /// Get the asymptotic breakdown point of the fence (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}

/// Threshold-based outlier detector over a single numeric sample
///
/// Detectors are stateless apart from their threshold: [`fence`](Self::fence)
/// fits the decision boundary on the non-null values, [`label`](Self::label)
/// applies it to every row.
pub trait OutlierDetector: OutlierDetectorProperties {
    /// Threshold multiplier of the spread term
    fn threshold(&self) -> f64;

    /// Fit the decision boundary on a sample without nulls
    fn fence(&self, sample: &[f64]) -> Result<Fence>;

    /// Whether `value` is an outlier under `fence`
    fn is_outlier(&self, fence: &Fence, value: f64) -> bool {
        !fence.contains(value)
    }

    /// Label every row; null and NaN rows are never outliers
    fn label(&self, values: &[Option<f64>]) -> Result<Detection> {
        let sample: Vec<f64> = values.iter().flatten().copied().filter(|v| !v.is_nan()).collect();
        let fence = self.fence(&sample)?;

        let labels = values
            .iter()
            .map(|value| match value {
                Some(v) if !v.is_nan() && self.is_outlier(&fence, *v) => OutlierLabel::Outlier,
                _ => OutlierLabel::NonOutlier,
            })
            .collect();

        Ok(Detection { fence, labels })
    }

    /// Label a sample with no missing values
    fn label_dense(&self, values: &[f64]) -> Result<Detection> {
        let wrapped: Vec<Option<f64>> = values.iter().copied().map(Some).collect();
        self.label(&wrapped)
    }
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<f64> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::invalid_threshold(threshold));
    }
    Ok(threshold)
}

pub(crate) fn require_values(sample: &[f64], operation: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    Ok(())
}
