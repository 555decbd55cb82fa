//! Table-level two-sample hypothesis tests

use crate::error::Result;
use crate::split::{split, validate_selection, ColumnSelection};
use eda_hypothesis::{
    null_hypothesis, significance_level, two_sample_test, TailMode, TestMethod, TestResult,
};
use polars::prelude::*;
use tracing::instrument;

/// Run a two-sample test on the samples named by `selection`
///
/// Preconditions are checked in a fixed order: the value column is numeric,
/// the comparison column (if any) is numeric, the selection is not
/// ambiguous, the confidence is in range, and the grouping column has at
/// most two distinct values.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn hypothesis_test(
    df: &DataFrame,
    selection: &ColumnSelection,
    method: TestMethod,
    confidence: f64,
    tail: TailMode,
) -> Result<TestResult> {
    validate_selection(df, selection)?;
    significance_level(confidence, tail)?;

    let samples = split(df, selection)?;
    let statement = null_hypothesis(&selection.value, selection.split_by().unwrap_or_default());

    let result = two_sample_test(method).run(
        &samples.first,
        &samples.second,
        confidence,
        tail,
        statement,
    )?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_statement_names_group_column() {
        let df = df![
            "v" => [1.0, 2.0, 3.0, 2.0, 3.0, 4.0],
            "g" => ["a", "a", "a", "b", "b", "b"],
        ]
        .unwrap();
        let result = hypothesis_test(
            &df,
            &ColumnSelection::grouped("v", "g"),
            TestMethod::TTest,
            95.0,
            TailMode::OneTailed,
        )
        .unwrap();
        assert_eq!(
            result.null_hypothesis,
            "Null hypothesis: two groups by g of v have same means (averages)"
        );
        assert_eq!(result.sample_sizes, (3, 3));
    }

    #[test]
    fn test_ambiguous_before_group_count() {
        let df = df![
            "v" => [1.0, 2.0, 3.0],
            "w" => [1.0, 2.0, 3.0],
            "g" => ["a", "b", "c"],
        ]
        .unwrap();
        let selection = ColumnSelection::new("v", Some("w"), Some("g"));
        let err = hypothesis_test(&df, &selection, TestMethod::ZTest, 95.0, TailMode::OneTailed)
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousSplit { .. }));
    }

    #[test]
    fn test_non_numeric_value_column_first() {
        let df = df!["name" => ["x", "y"], "g" => ["a", "b"]].unwrap();
        let err = hypothesis_test(
            &df,
            &ColumnSelection::grouped("name", "g"),
            TestMethod::ZTest,
            95.0,
            TailMode::OneTailed,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidColumn { .. }));
    }
}
