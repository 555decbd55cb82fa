//! Explicit ownership of the working table across analysis calls

use crate::config::AnalysisConfig;
use crate::correlation::{correlate, CorrelationMatrix};
use crate::error::Result;
use crate::hypothesis::hypothesis_test;
use crate::outliers::{detect_outliers, OutlierResult};
use crate::profile::{profile, ProfileSummary};
use crate::quality::convert_column;
use crate::split::ColumnSelection;
use eda_core::ColumnKind;
use eda_hypothesis::TestResult;
use eda_outlier::OutlierMethod;
use polars::prelude::*;
use tracing::debug;

/// One user's dataset and settings
///
/// Holds the table as loaded (`baseline`) and the working table that outlier
/// labelling and type conversion replace. A replacement happens only after
/// the operation succeeded, so a failed call leaves the working table as it
/// was. Repeated outlier detection runs on the working table, so labels
/// compound until [`reset`](Self::reset) is called.
#[derive(Debug, Clone)]
pub struct Session {
    baseline: DataFrame,
    working: DataFrame,
    config: AnalysisConfig,
}

impl Session {
    pub fn new(table: DataFrame) -> Self {
        Self {
            working: table.clone(),
            baseline: table,
            config: AnalysisConfig::default(),
        }
    }

    pub fn with_config(table: DataFrame, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let mut session = Self::new(table);
        session.config = config;
        Ok(session)
    }

    /// The current working table
    pub fn table(&self) -> &DataFrame {
        &self.working
    }

    /// The table as originally loaded
    pub fn baseline(&self) -> &DataFrame {
        &self.baseline
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Label outliers in `column` with the configured method and threshold
    pub fn detect_outliers(&mut self, column: &str) -> Result<OutlierResult> {
        self.detect_outliers_with(column, self.config.outlier_method, self.config.outlier_threshold)
    }

    /// Label outliers with an explicit method and threshold
    pub fn detect_outliers_with(
        &mut self,
        column: &str,
        method: OutlierMethod,
        threshold: f64,
    ) -> Result<OutlierResult> {
        let result = detect_outliers(&self.working, column, method, threshold)?;
        self.working = result.table.clone();
        Ok(result)
    }

    /// Run the configured two-sample test on the working table
    pub fn hypothesis_test(&self, selection: &ColumnSelection) -> Result<TestResult> {
        hypothesis_test(
            &self.working,
            selection,
            self.config.test_method,
            self.config.confidence,
            self.config.tail,
        )
    }

    pub fn correlate(&self) -> Result<CorrelationMatrix> {
        correlate(&self.working, self.config.correlation_threshold)
    }

    pub fn profile(&self) -> Result<ProfileSummary> {
        profile(&self.working)
    }

    /// Cast a column of the working table
    pub fn convert_column(&mut self, column: &str, kind: ColumnKind) -> Result<()> {
        self.working = convert_column(&self.working, column, kind)?;
        Ok(())
    }

    /// Discard labels and conversions, restoring the table as loaded
    pub fn reset(&mut self) {
        debug!("restoring baseline table");
        self.working = self.baseline.clone();
    }
}
