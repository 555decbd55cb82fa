//! Table-level outlier detection

use crate::classify::numeric_values;
use crate::error::Result;
use eda_outlier::{Detection, OutlierMethod};
use polars::prelude::*;
use tracing::{debug, instrument};

/// Name of the label column attached to the table
pub const LABEL_COLUMN: &str = "outlier";

/// Result of labelling one column of a table
#[derive(Debug, Clone)]
pub struct OutlierResult {
    /// Column the labels were computed on
    pub column: String,
    /// Per-row labels and the fence that produced them
    pub detection: Detection,
    /// Rows labelled as outliers (including the label column)
    pub outliers: DataFrame,
    /// The input table with the label column attached
    pub table: DataFrame,
}

impl OutlierResult {
    pub fn method(&self) -> OutlierMethod {
        self.detection.fence.method
    }

    pub fn outlier_count(&self) -> usize {
        self.detection.outlier_count()
    }
}

/// Label every row of `df` by whether `column` is an outlier
///
/// The input table is never modified; the returned [`OutlierResult::table`]
/// is a copy carrying a string column named [`LABEL_COLUMN`] with values
/// `outlier` / `non-outlier`, replacing any previous label column.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn detect_outliers(
    df: &DataFrame,
    column: &str,
    method: OutlierMethod,
    threshold: f64,
) -> Result<OutlierResult> {
    let values = numeric_values(df, column)?;
    let detection = eda_outlier::detect(method, threshold, &values)?;

    let labels: Vec<&str> = detection.labels.iter().map(|l| l.as_str()).collect();
    let mut table = df.clone();
    table.with_column(Series::new(PlSmallStr::from(LABEL_COLUMN), labels))?;

    let mask = BooleanChunked::from_slice(PlSmallStr::from("mask"), &detection.mask());
    let outliers = table.filter(&mask)?;

    debug!(
        lower = detection.fence.lower,
        upper = detection.fence.upper,
        outliers = outliers.height(),
        "labelled outliers"
    );

    Ok(OutlierResult {
        column: column.to_string(),
        detection,
        outliers,
        table,
    })
}
