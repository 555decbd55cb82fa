//! Error types for the EDA analysis engine
//!
//! Provides the numeric error type shared by all eda crates, plus the
//! [`ErrorKind`] taxonomy the presentation layer maps to user messages.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error type for numeric analysis routines
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A statistic is undefined for this input (zero variance, zero spread, ...)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::DegenerateInput(format!("{operation} requires at least one non-null value"))
    }

    /// Create an error for a statistic whose spread term is zero
    pub fn zero_spread(statistic: &str) -> Self {
        Self::DegenerateInput(format!("{statistic} is undefined: spread is zero"))
    }

    /// Create an error for an out-of-range threshold
    pub fn invalid_threshold(threshold: f64) -> Self {
        Self::InvalidParameter(format!(
            "Threshold {threshold} must be a non-negative finite number"
        ))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Classify this error for the presentation boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) | Self::InvalidInput(_) => ErrorKind::InvalidParameter,
            Self::InsufficientData { .. } | Self::DegenerateInput(_) => ErrorKind::DegenerateInput,
        }
    }
}

/// Recoverable failure kinds surfaced to the presentation layer
///
/// None of these is fatal to a session; a failed call leaves the working
/// table and any previously displayed result untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Column missing, or of the wrong semantic type
    InvalidColumn,
    /// Both a second column and a grouping column were supplied
    AmbiguousSplit,
    /// Grouping column has more than two distinct values
    TooManyGroups,
    /// Fewer than two numeric columns available
    InsufficientColumns,
    /// Zero variance, zero MAD or empty sample
    DegenerateInput,
    /// Configuration value out of range
    InvalidParameter,
    /// Failure inside the table backend
    Backend,
}

impl ErrorKind {
    /// Short guidance suitable for display next to the failed control
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidColumn => "Please select an existing column of a suitable (numerical) type.",
            Self::AmbiguousSplit => "Please choose either a 2nd column or a grouping column, not both.",
            Self::TooManyGroups => {
                "Grouping column has more than 2 groups; please select another column."
            }
            Self::InsufficientColumns => "At least two numerical columns are required.",
            Self::DegenerateInput => {
                "The selected data has no spread or no values; the statistic is undefined."
            }
            Self::InvalidParameter => "A setting is out of its allowed range.",
            Self::Backend => "The dataset could not be processed.",
        }
    }
}
