//! Result and option types for two-sample tests

use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-sample test methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestMethod {
    /// Pooled-variance two-sample Z-test
    ZTest,
    /// Student's two-sample T-test
    TTest,
}

impl TestMethod {
    /// Get the name of this method
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZTest => "Z-Test",
            Self::TTest => "T-Test",
        }
    }
}

impl Default for TestMethod {
    fn default() -> Self {
        Self::ZTest
    }
}

impl fmt::Display for TestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the significance level is derived from the confidence level
///
/// The p-value is always two-sided; [`TailMode::TwoTailed`] halves alpha
/// before comparing against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailMode {
    OneTailed,
    TwoTailed,
}

impl TailMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTailed => "one-tailed",
            Self::TwoTailed => "two-tailed",
        }
    }
}

impl Default for TailMode {
    fn default() -> Self {
        Self::OneTailed
    }
}

impl fmt::Display for TailMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TailMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-tailed" | "one" | "one_tailed" => Ok(Self::OneTailed),
            "two-tailed" | "two" | "two_tailed" => Ok(Self::TwoTailed),
            other => Err(Error::InvalidParameter(format!(
                "Unknown tail mode '{other}', expected 'one-tailed' or 'two-tailed'"
            ))),
        }
    }
}

/// Outcome of comparing the p-value against alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    RejectNull,
    AcceptNull,
}

impl Decision {
    pub fn is_reject(&self) -> bool {
        matches!(self, Self::RejectNull)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RejectNull => f.write_str("Reject null hypothesis"),
            Self::AcceptNull => f.write_str("Accept null hypothesis"),
        }
    }
}

/// Raw output of a test statistic computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestStatistic {
    /// Z or T value
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Degrees of freedom of the reference distribution (T-test only)
    pub degrees_of_freedom: Option<f64>,
}

/// Complete result of a hypothesis test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub method: TestMethod,
    pub statistic: f64,
    pub p_value: f64,
    /// Significance level the p-value was compared against
    pub alpha: f64,
    pub decision: Decision,
    pub null_hypothesis: String,
    pub tail: TailMode,
    pub confidence: f64,
    pub sample_sizes: (usize, usize),
    pub degrees_of_freedom: Option<f64>,
}

impl TestResult {
    pub fn is_significant(&self) -> bool {
        self.decision.is_reject()
    }
}

/// Null-hypothesis statement for comparing the means of `value_column`
/// across the two groups defined by `split_by`
pub fn null_hypothesis(value_column: &str, split_by: &str) -> String {
    format!("Null hypothesis: two groups by {split_by} of {value_column} have same means (averages)")
}
