//! Threshold-based outlier detection
//!
//! This crate provides three interchangeable detectors over a single numeric
//! sample:
//!
//! | Detector | Location / scale | Breakdown point |
//! |----------|------------------|-----------------|
//! | [`ZScore`] | mean / population std | 0% |
//! | [`Iqr`] | quartiles / IQR | 25% |
//! | [`Hampel`] | median / MAD | 50% |
//!
//! Every detector labels each row as outlier or non-outlier; null rows are
//! always non-outliers.
//!
//! # Examples
//!
//! ```rust
//! use eda_outlier::{detect, OutlierMethod};
//!
//! let values = [Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(100.0)];
//! let detection = detect(OutlierMethod::ZScore, 1.5, &values).unwrap();
//! assert_eq!(detection.outlier_rows(), vec![4]);
//! ```

mod hampel;
mod iqr;
mod traits;
mod types;
mod zscore;

pub use hampel::Hampel;
pub use iqr::Iqr;
pub use traits::{OutlierDetector, OutlierDetectorProperties};
pub use types::{Detection, Fence, OutlierLabel, OutlierMethod};
pub use zscore::ZScore;

use eda_core::Result;

/// Build the detector for `method` with the given threshold
pub fn detector(method: OutlierMethod, threshold: f64) -> Result<Box<dyn OutlierDetector>> {
    Ok(match method {
        OutlierMethod::ZScore => Box::new(ZScore::new(threshold)?),
        OutlierMethod::Iqr => Box::new(Iqr::new(threshold)?),
        OutlierMethod::Hampel => Box::new(Hampel::new(threshold)?),
    })
}

/// Label every row of a nullable sample with the chosen method
pub fn detect(method: OutlierMethod, threshold: f64, values: &[Option<f64>]) -> Result<Detection> {
    detector(method, threshold)?.label(values)
}
