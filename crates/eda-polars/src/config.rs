//! Configuration for analysis routines

use crate::error::{Error, Result};
use eda_hypothesis::{TailMode, TestMethod};
use eda_outlier::OutlierMethod;
use serde::{Deserialize, Serialize};

/// User-adjustable settings shared by the analysis routines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Outlier detection method
    pub outlier_method: OutlierMethod,

    /// Threshold multiplier for outlier bounds (>= 0, typically 0 to 5)
    pub outlier_threshold: f64,

    /// Two-sample test method
    pub test_method: TestMethod,

    /// Confidence level in percent (0 to 100)
    pub confidence: f64,

    /// Tail mode of the decision rule
    pub tail: TailMode,

    /// Correlations with `|r|` at or below this are hidden (0 to 1)
    pub correlation_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            outlier_method: OutlierMethod::default(),
            outlier_threshold: 3.0,
            test_method: TestMethod::default(),
            confidence: 95.0,
            tail: TailMode::default(),
            correlation_threshold: 0.5,
        }
    }
}

impl AnalysisConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::InvalidParameter(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::InvalidParameter(e.to_string()))
    }

    /// Check every value is within its allowed range
    pub fn validate(&self) -> Result<()> {
        if !self.outlier_threshold.is_finite() || self.outlier_threshold < 0.0 {
            return Err(eda_core::Error::invalid_threshold(self.outlier_threshold).into());
        }
        if !(0.0..=100.0).contains(&self.confidence) {
            return Err(Error::InvalidParameter(format!(
                "Confidence {} must be within [0, 100]",
                self.confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.correlation_threshold) {
            return Err(Error::InvalidParameter(format!(
                "Correlation threshold {} must be within [0, 1]",
                self.correlation_threshold
            )));
        }
        Ok(())
    }
}
