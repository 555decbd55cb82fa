//! Data-quality views and column type conversion

use crate::classify::{lookup, storage_type};
use crate::error::Result;
use eda_core::ColumnKind;
use polars::prelude::*;
use tracing::debug;

/// Rows with at least one missing cell
///
/// A cell is missing when it is null, or NaN in a float column.
pub fn missing_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut mask = BooleanChunked::full(PlSmallStr::from("mask"), false, df.height());
    for column in df.get_columns() {
        mask = &mask | &missing_mask(column)?;
    }
    Ok(df.filter(&mask)?)
}

/// Every row that has an identical copy elsewhere in the table
///
/// All copies are returned, not just the repeats.
pub fn duplicated_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.width() == 0 {
        return Ok(df.clone());
    }
    Ok(df.filter(&df.is_duplicated()?)?)
}

/// Per-row missing flags of one column: null, or NaN in float storage
pub(crate) fn missing_mask(column: &Column) -> Result<BooleanChunked> {
    let nulls = column.is_null();
    if !column.dtype().is_float() {
        return Ok(nulls);
    }
    let nans = column.is_nan()?.fill_null_with_values(false)?;
    Ok(&nulls | &nans)
}

/// Copy of `df` with `column` cast to `kind`
///
/// Values that cannot be represented in the target type become null.
pub fn convert_column(df: &DataFrame, column: &str, kind: ColumnKind) -> Result<DataFrame> {
    let source = lookup(df, column)?;
    let before = source.null_count();
    let converted = source.cast(&storage_type(kind))?;

    debug!(
        column,
        target = %kind,
        coerced = converted.null_count().saturating_sub(before),
        "converted column"
    );

    let mut table = df.clone();
    table.with_column(converted)?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_rows() {
        let df = df![
            "a" => [Some(1.0), None, Some(3.0)],
            "b" => [Some("x"), Some("y"), None],
        ]
        .unwrap();
        assert_eq!(missing_rows(&df).unwrap().height(), 2);
    }

    #[test]
    fn test_duplicated_rows_keeps_all_copies() {
        let df = df![
            "a" => [1, 2, 1, 3, 1],
            "b" => ["x", "y", "x", "z", "w"],
        ]
        .unwrap();
        let dups = duplicated_rows(&df).unwrap();
        assert_eq!(dups.height(), 2);
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let df = df![
            "a" => [Some(1.0), Some(f64::NAN), Some(3.0), None],
            "b" => [1i64, 2, 3, 4],
        ]
        .unwrap();
        let missing = missing_rows(&df).unwrap();
        let ids: Vec<Option<i64>> = missing.column("b").unwrap().i64().unwrap().into_iter().collect();
        assert_eq!(ids, vec![Some(2), Some(4)]);
    }

    #[test]
    fn test_duplicated_rows_match_nulls_and_keep_order() {
        let df = df![
            "a" => [Some(1.0), None, Some(2.0), None, Some(1.0)],
            "b" => ["x", "y", "z", "y", "x"],
        ]
        .unwrap();
        let dups = duplicated_rows(&df).unwrap();
        let keys: Vec<Option<&str>> = dups.column("b").unwrap().str().unwrap().into_iter().collect();
        assert_eq!(keys, vec![Some("x"), Some("y"), Some("y"), Some("x")]);
    }

    #[test]
    fn test_convert_coerces_failures_to_null() {
        let df = df!["a" => ["1", "2", "oops"]].unwrap();
        let converted = convert_column(&df, "a", ColumnKind::Integer).unwrap();
        let column = converted.column("a").unwrap();
        assert_eq!(column.dtype(), &DataType::Int64);
        assert_eq!(column.null_count(), 1);
    }
}
