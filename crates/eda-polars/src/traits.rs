//! Extension trait exposing the analysis routines on Polars DataFrames

use crate::{
    classify, correlation, hypothesis, outliers, profile, quality, split, ColumnSelection,
    CorrelationMatrix, GroupSplit, OutlierResult, ProfileSummary, Result,
};
use eda_core::ColumnKind;
use eda_hypothesis::{TailMode, TestMethod, TestResult};
use eda_outlier::OutlierMethod;
use polars::prelude::*;

/// Extension trait for EDA operations on Polars DataFrames
///
/// Every method leaves `self` untouched; operations that change the table
/// return a new one.
pub trait EdaStatsExt {
    /// Resolve the kind of a column
    fn column_kind_of(&self, column: &str) -> Result<ColumnKind>;

    /// Label outliers in a numeric column
    ///
    /// # Returns
    /// The labels, the outlier rows, and a copy of the table with an
    /// `outlier` column attached
    fn detect_outliers(
        &self,
        column: &str,
        method: OutlierMethod,
        threshold: f64,
    ) -> Result<OutlierResult>;

    /// Extract the two samples of a comparison
    fn split_samples(&self, selection: &ColumnSelection) -> Result<GroupSplit>;

    /// Run a two-sample test
    ///
    /// # Arguments
    /// * `selection` - Value column plus a second column or a grouping column
    /// * `method` - Z-test or T-test
    /// * `confidence` - Confidence level in percent
    /// * `tail` - One- or two-tailed decision rule
    fn hypothesis_test(
        &self,
        selection: &ColumnSelection,
        method: TestMethod,
        confidence: f64,
        tail: TailMode,
    ) -> Result<TestResult>;

    /// Pearson correlation between all numeric columns
    fn correlation_matrix(&self, threshold: f64) -> Result<CorrelationMatrix>;

    /// Per-column descriptive profile
    fn profile(&self) -> Result<ProfileSummary>;

    /// Rows with any null cell
    fn missing_rows(&self) -> Result<DataFrame>;

    /// Rows that occur more than once
    fn duplicated_rows(&self) -> Result<DataFrame>;

    /// Copy with one column cast to another kind
    fn convert_column(&self, column: &str, kind: ColumnKind) -> Result<DataFrame>;
}

impl EdaStatsExt for DataFrame {
    fn column_kind_of(&self, column: &str) -> Result<ColumnKind> {
        classify::classify(self, column)
    }

    fn detect_outliers(
        &self,
        column: &str,
        method: OutlierMethod,
        threshold: f64,
    ) -> Result<OutlierResult> {
        outliers::detect_outliers(self, column, method, threshold)
    }

    fn split_samples(&self, selection: &ColumnSelection) -> Result<GroupSplit> {
        split::split(self, selection)
    }

    fn hypothesis_test(
        &self,
        selection: &ColumnSelection,
        method: TestMethod,
        confidence: f64,
        tail: TailMode,
    ) -> Result<TestResult> {
        hypothesis::hypothesis_test(self, selection, method, confidence, tail)
    }

    fn correlation_matrix(&self, threshold: f64) -> Result<CorrelationMatrix> {
        correlation::correlate(self, threshold)
    }

    fn profile(&self) -> Result<ProfileSummary> {
        profile::profile(self)
    }

    fn missing_rows(&self) -> Result<DataFrame> {
        quality::missing_rows(self)
    }

    fn duplicated_rows(&self) -> Result<DataFrame> {
        quality::duplicated_rows(self)
    }

    fn convert_column(&self, column: &str, kind: ColumnKind) -> Result<DataFrame> {
        quality::convert_column(self, column, kind)
    }
}
