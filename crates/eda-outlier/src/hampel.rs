//! Hampel filter (median absolute deviation) outlier detector
//!
//! Uses the raw MAD, without the 1.4826 normal-consistency factor, so the
//! threshold is expressed in MAD units.

use crate::traits::{require_values, validate_threshold, OutlierDetector, OutlierDetectorProperties};
use crate::types::{Fence, OutlierMethod};
use eda_core::{utils, Result};
use tracing::debug;

/// Hampel filter detector
///
/// Bounds are `median ± threshold * MAD`. When more than half the sample
/// shares one value the MAD is zero and the bounds collapse onto the median,
/// so every value different from the median is flagged.
#[derive(Debug, Clone, Copy)]
pub struct Hampel {
    threshold: f64,
}

impl Hampel {
    /// Create a new Hampel detector
    pub fn new(threshold: f64) -> Result<Self> {
        Ok(Self {
            threshold: validate_threshold(threshold)?,
        })
    }
}

impl OutlierDetectorProperties for Hampel {
    fn name(&self) -> &str {
        "Hampel"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl OutlierDetector for Hampel {
    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn fence(&self, sample: &[f64]) -> Result<Fence> {
        require_values(sample, "Hampel detection")?;

        let (median, mad) = utils::median_abs_deviation(sample)?;
        if mad == 0.0 {
            debug!(median, "MAD is zero, Hampel bounds collapse onto the median");
        }

        Ok(Fence {
            method: OutlierMethod::Hampel,
            threshold: self.threshold,
            center: median,
            spread: mad,
            lower: median - self.threshold * mad,
            upper: median + self.threshold * mad,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hampel_fence() {
        let fence = Hampel::new(3.0)
            .unwrap()
            .fence(&[1.0, 2.0, 3.0, 4.0, 100.0])
            .unwrap();
        assert_relative_eq!(fence.center, 3.0);
        assert_relative_eq!(fence.spread, 1.0);
        assert_relative_eq!(fence.lower, 0.0);
        assert_relative_eq!(fence.upper, 6.0);
    }

    #[test]
    fn test_hampel_flags_outlier() {
        let detection = Hampel::new(3.0)
            .unwrap()
            .label_dense(&[1.0, 2.0, 3.0, 4.0, 100.0])
            .unwrap();
        assert_eq!(detection.outlier_rows(), vec![4]);
    }

    #[test]
    fn test_zero_threshold_flags_non_median_values() {
        let detection = Hampel::new(0.0)
            .unwrap()
            .label_dense(&[1.0, 2.0, 3.0, 4.0, 5.0])
            .unwrap();
        assert_eq!(detection.outlier_rows(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_zero_mad_collapses_bounds() {
        let detection = Hampel::new(2.0)
            .unwrap()
            .label_dense(&[7.0, 7.0, 7.0, 7.0, 8.0])
            .unwrap();
        assert_eq!(detection.fence.spread, 0.0);
        assert_eq!(detection.outlier_rows(), vec![4]);
    }
}
