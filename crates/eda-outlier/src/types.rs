//! Types for outlier detection results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outlier detection methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutlierMethod {
    /// Standardised distance from the mean
    ZScore,
    /// Tukey fences around the interquartile range
    Iqr,
    /// Median ± k·MAD (Hampel filter)
    Hampel,
}

impl OutlierMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZScore => "Z score",
            Self::Iqr => "Interquartile range (IQR)",
            Self::Hampel => "Hampel filter",
        }
    }
}

impl Default for OutlierMethod {
    fn default() -> Self {
        Self::ZScore
    }
}

impl fmt::Display for OutlierMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-row outlier label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlierLabel {
    Outlier,
    NonOutlier,
}

impl OutlierLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outlier => "outlier",
            Self::NonOutlier => "non-outlier",
        }
    }

    pub fn is_outlier(&self) -> bool {
        matches!(self, Self::Outlier)
    }
}

impl fmt::Display for OutlierLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision boundary fitted on a sample
///
/// `center` and `spread` are the location/scale pair of the method
/// (mean/std, median/IQR, median/MAD); `lower` and `upper` are the
/// inclusive non-outlier bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fence {
    pub method: OutlierMethod,
    pub threshold: f64,
    pub center: f64,
    pub spread: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Fence {
    /// Whether `value` lies inside the inclusive bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Labels for every row of a column plus the fence that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub fence: Fence,
    pub labels: Vec<OutlierLabel>,
}

impl Detection {
    /// Number of rows labelled as outliers
    pub fn outlier_count(&self) -> usize {
        self.labels.iter().filter(|l| l.is_outlier()).count()
    }

    /// Row positions labelled as outliers
    pub fn outlier_rows(&self) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| l.is_outlier().then_some(i))
            .collect()
    }

    /// Boolean mask, `true` for outlier rows
    pub fn mask(&self) -> Vec<bool> {
        self.labels.iter().map(OutlierLabel::is_outlier).collect()
    }
}
