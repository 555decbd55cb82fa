//! Statistical analysis engine for exploratory data analysis
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`eda_core`]: error taxonomy, column kinds and numeric primitives
//! - [`eda_outlier`]: Z-score, IQR and Hampel detectors over a single sample
//! - [`eda_hypothesis`]: two-sample Z-test and T-test with the confidence/tail rule
//! - [`eda_polars`]: the same routines over Polars DataFrames, plus correlation,
//!   profiling, data-quality views and [`Session`]
//!
//! # Example
//!
//! ```rust
//! use eda_engine::{AnalysisConfig, ColumnSelection, Session};
//! use polars::prelude::*;
//!
//! let df = df![
//!     "group" => ["A", "A", "B", "B"],
//!     "value" => [10.0, 12.0, 50.0, 52.0],
//! ]
//! .unwrap();
//!
//! let session = Session::with_config(df, AnalysisConfig::default()).unwrap();
//! let result = session
//!     .hypothesis_test(&ColumnSelection::grouped("value", "group"))
//!     .unwrap();
//! assert!(result.is_significant());
//! ```

pub use eda_core;
pub use eda_hypothesis;
pub use eda_outlier;
pub use eda_polars;

pub use eda_polars::{
    AnalysisConfig, ColumnKind, ColumnSelection, CorrelationMatrix, EdaStatsExt, Error, ErrorKind,
    OutlierMethod, OutlierResult, ProfileSummary, Result, Session, TailMode, TestMethod,
    TestResult,
};
