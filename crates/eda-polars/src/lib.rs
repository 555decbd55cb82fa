//! Polars integration for the EDA analysis engine
//!
//! A Polars [`DataFrame`](polars::prelude::DataFrame) is the table every
//! routine operates on. The crate provides:
//!
//! - column classification and the preconditions each routine checks
//! - two-sample extraction (two columns, or one column split by a grouping
//!   column with exactly two values)
//! - outlier labelling that returns a new, labelled table
//! - Z-test / T-test with a confidence and tail decision rule
//! - a Pearson correlation matrix with lower-triangle and threshold views
//! - a per-column profile and data-quality views
//! - [`Session`], which owns the working table between calls
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use eda_polars::{EdaStatsExt, OutlierMethod};
//!
//! let df = df!["x" => [1.0, 2.0, 3.0, 4.0, 100.0]].unwrap();
//! let result = df.detect_outliers("x", OutlierMethod::ZScore, 1.5).unwrap();
//! assert_eq!(result.outliers.height(), 1);
//! ```

mod classify;
mod config;
mod correlation;
mod error;
mod hypothesis;
mod outliers;
mod profile;
mod quality;
mod session;
mod split;
mod traits;

pub use classify::{
    categorical_columns, classify, column_kind, numeric_columns, require_not_temporal,
    require_numeric, storage_type,
};
pub use config::AnalysisConfig;
pub use correlation::{correlate, CorrelationMatrix};
pub use error::{Error, Result};
pub use hypothesis::hypothesis_test;
pub use outliers::{detect_outliers, OutlierResult, LABEL_COLUMN};
pub use profile::{profile, ColumnProfile, ProfileSummary};
pub use quality::{convert_column, duplicated_rows, missing_rows};
pub use session::Session;
pub use split::{split, ColumnSelection, GroupSplit};
pub use traits::EdaStatsExt;

// Re-export the option types callers need alongside the table API
pub use eda_core::{ColumnClass, ColumnKind, ErrorKind};
pub use eda_hypothesis::{Decision, TailMode, TestMethod, TestResult};
pub use eda_outlier::{Detection, Fence, OutlierLabel, OutlierMethod};
