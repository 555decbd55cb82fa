//! Error types for eda-polars

use eda_core::{ColumnClass, ColumnKind, ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Analysis error: {0}")]
    Core(#[from] eda_core::Error),

    #[error("Invalid column '{column}': {reason}")]
    InvalidColumn { column: String, reason: String },

    #[error("Ambiguous split: both a second column '{column}' and a grouping column '{group_by}' were given")]
    AmbiguousSplit { column: String, group_by: String },

    #[error("Grouping column '{column}' has {found} distinct values, at most 2 are supported")]
    TooManyGroups { column: String, found: usize },

    #[error("Need at least {expected} numeric columns, found {actual}")]
    InsufficientColumns { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a column that is not in the table
    pub fn missing_column(column: &str) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: "no such column".to_string(),
        }
    }

    /// Create an error for a column of the wrong semantic class
    pub fn wrong_class(column: &str, expected: &str, actual: ColumnKind) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: format!("expected {expected} data, found {actual}"),
        }
    }

    /// Create an error for a storage type the engine does not analyse
    pub fn unsupported_dtype(column: &str, dtype: &impl std::fmt::Display) -> Self {
        Self::InvalidColumn {
            column: column.to_string(),
            reason: format!("unsupported storage type {dtype}"),
        }
    }

    /// Classify this error for the presentation boundary
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Polars(_) => ErrorKind::Backend,
            Self::Core(e) => e.kind(),
            Self::InvalidColumn { .. } => ErrorKind::InvalidColumn,
            Self::AmbiguousSplit { .. } => ErrorKind::AmbiguousSplit,
            Self::TooManyGroups { .. } => ErrorKind::TooManyGroups,
            Self::InsufficientColumns { .. } => ErrorKind::InsufficientColumns,
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
        }
    }
}

pub(crate) fn class_label(class: ColumnClass) -> &'static str {
    match class {
        ColumnClass::Numeric => "numerical",
        ColumnClass::Categorical => "categorical",
        ColumnClass::Temporal => "date/time",
    }
}
