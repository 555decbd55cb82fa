//! Z-score outlier detector

use crate::traits::{require_values, validate_threshold, OutlierDetector, OutlierDetectorProperties};
use crate::types::{Fence, OutlierMethod};
use eda_core::{utils, Error, Result};

/// Z-score detector
///
/// A value is an outlier when `|(x - mean) / std| > threshold`, with the
/// population standard deviation (ddof = 0). A constant sample has no
/// defined z-scores and is rejected with a degenerate-input error rather
/// than labelled.
#[derive(Debug, Clone, Copy)]
pub struct ZScore {
    threshold: f64,
}

impl ZScore {
    /// Create a new Z-score detector
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }

    /// Absolute z-score of `value` under `fence`
    pub fn score(fence: &Fence, value: f64) -> f64 {
        ((value - fence.center) / fence.spread).abs()
    }
}

impl OutlierDetectorProperties for ZScore {
    fn name(&self) -> &str {
        "Z-score"
    }

    fn is_robust(&self) -> bool {
        false
    }

    fn breakdown_point(&self) -> f64 {
        0.0
    }
}

impl OutlierDetector for ZScore {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn fence(&self, sample: &[f64]) -> Result<Fence> {
        require_values(sample, "Z-score detection")?;

        if utils::is_constant(sample) {
            return Err(Error::zero_spread("Z-score"));
        }

        let center = utils::mean(sample);
        let spread = utils::population_std(sample).ok_or_else(|| Error::empty_input("Z-score detection"))?;
        if spread == 0.0 || !spread.is_finite() {
            return Err(Error::zero_spread("Z-score"));
        }

        Ok(Fence {
            method: OutlierMethod::ZScore,
            threshold: self.threshold,
            center,
            spread,
            lower: center - self.threshold * spread,
            upper: center + self.threshold * spread,
        })
    }

    fn is_outlier(&self, fence: &Fence, value: f64) -> bool {
        Self::score(fence, value) > self.threshold
    }
}
