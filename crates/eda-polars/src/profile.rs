//! Per-column descriptive profile of a table

use crate::classify::column_kind;
use crate::error::Result;
use crate::quality::missing_mask;
use eda_core::{utils, ColumnKind};
use ordered_float::OrderedFloat;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;
use tracing::instrument;

/// Descriptive statistics of one column
///
/// Fields that are not meaningful for the column's kind, or undefined for
/// its values, are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Storage type as reported by the table backend
    pub dtype: String,
    /// `None` for storage types the engine does not analyse
    pub kind: Option<ColumnKind>,
    /// Number of non-missing values
    pub count: usize,
    pub unique: Option<usize>,
    /// Most frequent value (first encountered on ties)
    pub top: Option<String>,
    pub freq: Option<usize>,
    pub mean: Option<f64>,
    /// Sample standard deviation (ddof = 1)
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Share of missing cells in percent; NaN counts as missing in float columns
    pub null_percent: f64,
}

/// Profile of every column of a table, in table order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub rows: usize,
    pub columns: Vec<ColumnProfile>,
}

impl ProfileSummary {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Profile every column of `df`
#[instrument(skip(df), fields(rows = df.height(), columns = df.width()))]
pub fn profile(df: &DataFrame) -> Result<ProfileSummary> {
    let columns = df
        .get_columns()
        .iter()
        .map(profile_column)
        .collect::<Result<Vec<_>>>()?;

    Ok(ProfileSummary {
        rows: df.height(),
        columns,
    })
}

fn profile_column(column: &Column) -> Result<ColumnProfile> {
    let len = column.len();
    let missing = missing_mask(column)?.num_trues();
    let kind = column_kind(column.dtype());

    let mut profile = ColumnProfile {
        name: column.name().to_string(),
        dtype: column.dtype().to_string(),
        kind,
        count: len - missing,
        unique: None,
        top: None,
        freq: None,
        mean: None,
        std: None,
        min: None,
        max: None,
        null_percent: if len == 0 {
            0.0
        } else {
            missing as f64 / len as f64 * 100.0
        },
    };

    match kind {
        Some(kind) if kind.is_numeric() => {
            let cast = column.cast(&DataType::Float64)?;
            let values: Vec<f64> = cast.f64()?.into_iter().flatten().filter(|v| !v.is_nan()).collect();

            let (unique, mode) = tally(values.iter().map(|v| OrderedFloat(*v)));
            profile.unique = Some(unique);
            if let Some((value, freq)) = mode {
                profile.top = Some(value.0.to_string());
                profile.freq = Some(freq);
            }

            if !values.is_empty() {
                profile.mean = Some(utils::mean(&values));
                profile.std = utils::variance(&values, 1).map(f64::sqrt);
                profile.min = values.iter().copied().reduce(f64::min);
                profile.max = values.iter().copied().reduce(f64::max);
            }
        }
        Some(_) => {
            let cast = column.cast(&DataType::String)?;
            let (unique, mode) = tally(cast.str()?.into_iter().flatten());
            profile.unique = Some(unique);
            if let Some((value, freq)) = mode {
                profile.top = Some(value.to_string());
                profile.freq = Some(freq);
            }
        }
        None => {}
    }

    Ok(profile)
}

/// Distinct count and most frequent value, ties going to the first seen
fn tally<K: Hash + Eq + Copy>(values: impl Iterator<Item = K>) -> (usize, Option<(K, usize)>) {
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (position, value) in values.enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }

    let mode = counts
        .iter()
        .max_by(|(_, (ca, pa)), (_, (cb, pb))| ca.cmp(cb).then(pb.cmp(pa)))
        .map(|(value, (count, _))| (*value, *count));

    (counts.len(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_numeric_profile() {
        let df = df!["x" => [Some(1.0), Some(2.0), Some(2.0), None, Some(5.0)]].unwrap();
        let summary = profile(&df).unwrap();
        let x = summary.column("x").unwrap();

        assert_eq!(x.count, 4);
        assert_eq!(x.unique, Some(3));
        assert_eq!(x.top.as_deref(), Some("2"));
        assert_eq!(x.freq, Some(2));
        assert_relative_eq!(x.mean.unwrap(), 2.5);
        assert_relative_eq!(x.std.unwrap(), 3.0f64.sqrt());
        assert_eq!(x.min, Some(1.0));
        assert_eq!(x.max, Some(5.0));
        assert_relative_eq!(x.null_percent, 20.0);
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let df = df!["x" => [1.0, f64::NAN, 3.0, 4.0]].unwrap();
        let x = profile(&df).unwrap().columns.remove(0);
        assert_eq!(x.count, 3);
        assert_relative_eq!(x.null_percent, 25.0);
        assert_eq!(x.unique, Some(3));
    }

    #[test]
    fn test_categorical_profile_has_no_moments() {
        let df = df!["c" => ["a", "b", "a", "c"]].unwrap();
        let c = profile(&df).unwrap().columns.remove(0);
        assert_eq!(c.unique, Some(3));
        assert_eq!(c.top.as_deref(), Some("a"));
        assert_eq!(c.freq, Some(2));
        assert!(c.mean.is_none() && c.std.is_none());
    }

    #[test]
    fn test_tally_ties_go_to_first_seen() {
        let (unique, mode) = tally(["b", "a", "a", "b", "c"].into_iter());
        assert_eq!(unique, 3);
        assert_eq!(mode, Some(("b", 2)));
    }

    #[test]
    fn test_zero_rows() {
        let df = DataFrame::new(vec![
            Series::new(PlSmallStr::from("x"), Vec::<f64>::new()).into(),
        ])
        .unwrap();
        let x = profile(&df).unwrap().columns.remove(0);
        assert_eq!(x.count, 0);
        assert_eq!(x.null_percent, 0.0);
        assert!(x.mean.is_none());
        assert_eq!(x.top, None);
    }
}
