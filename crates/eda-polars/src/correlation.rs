//! Pearson correlation matrix over the numeric columns of a table

use crate::classify::{numeric_columns, numeric_values};
use crate::error::{Error, Result};
use eda_core::utils;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square, symmetric matrix of pairwise Pearson coefficients
///
/// `values[i][j]` is `None` where the coefficient is undefined (a constant
/// column, or fewer than two complete pairs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
    /// Cells with `|r| <= threshold` are hidden from [`masked`](Self::masked)
    pub threshold: f64,
}

impl CorrelationMatrix {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient between two columns by name
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    /// Strictly-lower-triangular view; the diagonal and upper half are blank
    pub fn lower_triangle(&self) -> Vec<Vec<Option<f64>>> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, r)| if j < i { *r } else { None })
                    .collect()
            })
            .collect()
    }

    /// Lower-triangular view with weak correlations (`|r| <= threshold`) hidden
    pub fn masked(&self) -> Vec<Vec<Option<f64>>> {
        self.lower_triangle()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|r| r.filter(|r| r.abs() > self.threshold))
                    .collect()
            })
            .collect()
    }

    /// Column pairs whose correlation survives the threshold, strongest first
    pub fn strong_pairs(&self) -> Vec<(String, String, f64)> {
        let mut pairs: Vec<(String, String, f64)> = self
            .masked()
            .iter()
            .enumerate()
            .flat_map(|(i, row)| {
                row.iter().enumerate().filter_map(move |(j, r)| {
                    r.map(|r| (self.columns[i].clone(), self.columns[j].clone(), r))
                })
            })
            .collect();
        pairs.sort_by(|a, b| b.2.abs().total_cmp(&a.2.abs()));
        pairs
    }

    /// Full matrix as a table, with a leading `column` name column
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(self.len() + 1);
        columns.push(Series::new(PlSmallStr::from("column"), self.columns.clone()).into());
        for (j, name) in self.columns.iter().enumerate() {
            let cells: Vec<Option<f64>> = self.values.iter().map(|row| row[j]).collect();
            columns.push(Series::new(PlSmallStr::from(name.as_str()), cells).into());
        }
        Ok(DataFrame::new(columns)?)
    }
}

/// Pearson correlation between every pair of numeric columns
///
/// Each pair uses the rows where both columns are present. At least two
/// numeric columns are required; `threshold` must lie in `[0, 1]`.
#[instrument(skip(df), fields(rows = df.height()))]
pub fn correlate(df: &DataFrame, threshold: f64) -> Result<CorrelationMatrix> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(Error::InvalidParameter(format!(
            "Correlation threshold {threshold} must be within [0, 1]"
        )));
    }

    let columns = numeric_columns(df);
    if columns.len() < 2 {
        return Err(Error::InsufficientColumns {
            expected: 2,
            actual: columns.len(),
        });
    }

    let data = columns
        .iter()
        .map(|c| numeric_values(df, c))
        .collect::<Result<Vec<_>>>()?;

    let n = columns.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        values[i][i] = pairwise_pearson(&data[i], &data[i]).map(|_| 1.0);
        for j in 0..i {
            let r = pairwise_pearson(&data[i], &data[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    debug!(columns = n, "computed correlation matrix");

    Ok(CorrelationMatrix {
        columns,
        values,
        threshold,
    })
}

fn pairwise_pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => Some((*a, *b)),
            _ => None,
        })
        .unzip();
    utils::pearson_correlation(&xs, &ys).ok()
}
