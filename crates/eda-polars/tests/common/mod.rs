//! Common test fixtures for eda-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Single float column named `x`
pub fn single_column(values: &[f64]) -> DataFrame {
    DataFrame::new(vec![Series::new(PlSmallStr::from("x"), values.to_vec()).into()]).unwrap()
}

/// Small mixed table: two correlated numeric columns, a group column with
/// two values, a three-valued category, a boolean and a date column
pub fn mixed_table() -> DataFrame {
    let dates = Series::new(
        PlSmallStr::from("day"),
        vec![19000i32, 19001, 19002, 19003, 19004, 19005],
    )
    .cast(&DataType::Date)
    .unwrap();

    DataFrame::new(vec![
        Series::new(PlSmallStr::from("height"), vec![150.0, 160.0, 155.0, 180.0, 175.0, 185.0]).into(),
        Series::new(PlSmallStr::from("weight"), vec![50.0, 58.0, 54.0, 80.0, 74.0, 86.0]).into(),
        Series::new(PlSmallStr::from("sex"), vec!["F", "F", "F", "M", "M", "M"]).into(),
        Series::new(PlSmallStr::from("size"), vec!["S", "M", "S", "L", "M", "L"]).into(),
        Series::new(PlSmallStr::from("member"), vec![true, false, true, true, false, true]).into(),
        dates.into(),
    ])
    .unwrap()
}

/// Read a string column back out of a table
pub fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect()
}
