//! Interquartile Range (IQR) outlier detector

use crate::traits::{require_values, validate_threshold, OutlierDetector, OutlierDetectorProperties};
use crate::types::{Fence, OutlierMethod};
use eda_core::{utils, Result};

/// Interquartile range detector (Tukey fences)
///
/// Bounds are `[Q1 - threshold * IQR, Q3 + threshold * IQR]` with quartiles
/// taken by linear interpolation. The classic Tukey rule is `threshold = 1.5`.
#[derive(Debug, Clone, Copy)]
pub struct Iqr {
    threshold: f64,
}

impl Iqr {
    /// Create a new IQR detector
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }

    /// Tukey's conventional inner fences
    pub fn tukey() -> Self {
        Self { threshold: 1.5 }
    }
}

impl OutlierDetectorProperties for Iqr {
    fn name(&self) -> &str {
        "IQR"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.25
    }
}

impl OutlierDetector for Iqr {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn fence(&self, sample: &[f64]) -> Result<Fence> {
        require_values(sample, "IQR detection")?;

        let sorted = utils::sorted(sample);
        let q1 = utils::quantile_sorted(&sorted, 0.25)?;
        let q3 = utils::quantile_sorted(&sorted, 0.75)?;
        let center = utils::quantile_sorted(&sorted, 0.5)?;
        let iqr = q3 - q1;

        Ok(Fence {
            method: OutlierMethod::Iqr,
            threshold: self.threshold,
            center,
            spread: iqr,
            lower: q1 - self.threshold * iqr,
            upper: q3 + self.threshold * iqr,
        })
    }
}
