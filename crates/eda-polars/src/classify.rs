//! Column classification and per-routine preconditions

use crate::error::{class_label, Error, Result};
use eda_core::{ColumnClass, ColumnKind};
use polars::prelude::*;

/// Map a Polars storage type onto the engine's closed set of column kinds
///
/// Returns `None` for storage the engine does not analyse (lists, structs,
/// binary, durations, ...).
pub fn column_kind(dtype: &DataType) -> Option<ColumnKind> {
    match dtype {
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64 => Some(ColumnKind::Integer),
        DataType::Float32 | DataType::Float64 => Some(ColumnKind::Float),
        DataType::Boolean => Some(ColumnKind::Boolean),
        DataType::String | DataType::Categorical(..) | DataType::Enum(..) => {
            Some(ColumnKind::Categorical)
        }
        DataType::Date => Some(ColumnKind::Date),
        DataType::Datetime(..) => Some(ColumnKind::DateTime),
        _ => None,
    }
}

/// Polars storage type a conversion to `kind` produces
pub fn storage_type(kind: ColumnKind) -> DataType {
    match kind {
        ColumnKind::Integer => DataType::Int64,
        ColumnKind::Float => DataType::Float64,
        ColumnKind::Boolean => DataType::Boolean,
        ColumnKind::Categorical => DataType::String,
        ColumnKind::Date => DataType::Date,
        ColumnKind::DateTime => DataType::Datetime(TimeUnit::Microseconds, None),
    }
}

/// Look up a column, reporting a missing one as [`Error::InvalidColumn`]
pub(crate) fn lookup<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Column> {
    df.column(column).map_err(|_| Error::missing_column(column))
}

/// Classify a column of the table
pub fn classify(df: &DataFrame, column: &str) -> Result<ColumnKind> {
    let col = lookup(df, column)?;
    column_kind(col.dtype()).ok_or_else(|| Error::unsupported_dtype(column, col.dtype()))
}

/// Require a numeric (integer or float) column
pub fn require_numeric(df: &DataFrame, column: &str) -> Result<ColumnKind> {
    require_class(df, column, ColumnClass::Numeric)
}

/// Require a column that can be placed on a continuous or categorical axis
pub fn require_not_temporal(df: &DataFrame, column: &str) -> Result<ColumnKind> {
    let kind = classify(df, column)?;
    if kind.is_temporal() {
        return Err(Error::InvalidColumn {
            column: column.to_string(),
            reason: format!("{} columns are not supported here", class_label(ColumnClass::Temporal)),
        });
    }
    Ok(kind)
}

fn require_class(df: &DataFrame, column: &str, class: ColumnClass) -> Result<ColumnKind> {
    let kind = classify(df, column)?;
    if kind.class() != class {
        return Err(Error::wrong_class(column, class_label(class), kind));
    }
    Ok(kind)
}

/// Names of all numeric columns, in table order
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    columns_of_class(df, ColumnClass::Numeric)
}

/// Names of all categorical (string, categorical, boolean) columns, in table order
pub fn categorical_columns(df: &DataFrame) -> Vec<String> {
    columns_of_class(df, ColumnClass::Categorical)
}

fn columns_of_class(df: &DataFrame, class: ColumnClass) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|c| column_kind(c.dtype()).is_some_and(|k| k.class() == class))
        .map(|c| c.name().to_string())
        .collect()
}

/// Values of a numeric column as `f64`, nulls preserved
pub(crate) fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>> {
    require_numeric(df, column)?;
    let cast = lookup(df, column)?.cast(&DataType::Float64)?;
    let values = cast.f64()?.into_iter().collect();
    Ok(values)
}

/// Non-null, non-NaN values of a numeric column
pub(crate) fn dense_values(df: &DataFrame, column: &str) -> Result<Vec<f64>> {
    Ok(numeric_values(df, column)?
        .into_iter()
        .flatten()
        .filter(|v| !v.is_nan())
        .collect())
}
