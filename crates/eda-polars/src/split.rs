//! Two-sample extraction from a table

use crate::classify::{classify, dense_values, lookup, numeric_values, require_numeric};
use crate::error::{Error, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Columns chosen for a two-sample comparison
///
/// Either `compare` names a second numeric column, or `group_by` names a
/// column whose two distinct values partition `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelection {
    pub value: String,
    pub compare: Option<String>,
    pub group_by: Option<String>,
}

impl ColumnSelection {
    pub fn new(value: &str, compare: Option<&str>, group_by: Option<&str>) -> Self {
        Self {
            value: value.to_string(),
            compare: compare.map(str::to_string),
            group_by: group_by.map(str::to_string),
        }
    }

    /// Compare two numeric columns
    pub fn columns(value: &str, compare: &str) -> Self {
        Self::new(value, Some(compare), None)
    }

    /// Compare one numeric column across two groups
    pub fn grouped(value: &str, group_by: &str) -> Self {
        Self::new(value, None, Some(group_by))
    }

    /// The column that defines the two groups
    pub fn split_by(&self) -> Option<&str> {
        self.group_by.as_deref().or(self.compare.as_deref())
    }
}

/// Two numeric samples ready for a two-sample test
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSplit {
    /// Group values (grouped split) or column names (column split)
    pub labels: (String, String),
    pub first: Vec<f64>,
    pub second: Vec<f64>,
}

impl GroupSplit {
    pub fn sizes(&self) -> (usize, usize) {
        (self.first.len(), self.second.len())
    }
}

/// Where the second sample comes from
#[derive(Debug, Clone, Copy)]
pub(crate) enum SplitTarget<'a> {
    Column(&'a str),
    Group(&'a str),
}

/// Check column types and selection shape, in the order they are reported
pub(crate) fn validate_selection<'a>(
    df: &DataFrame,
    selection: &'a ColumnSelection,
) -> Result<SplitTarget<'a>> {
    require_numeric(df, &selection.value)?;
    if let Some(compare) = &selection.compare {
        require_numeric(df, compare)?;
    }

    match (&selection.compare, &selection.group_by) {
        (Some(column), Some(group_by)) => Err(Error::AmbiguousSplit {
            column: column.clone(),
            group_by: group_by.clone(),
        }),
        (None, None) => Err(Error::InvalidColumn {
            column: selection.value.clone(),
            reason: "a second column or a grouping column is required".to_string(),
        }),
        (None, Some(group_by)) => {
            classify(df, group_by)?;
            Ok(SplitTarget::Group(group_by))
        }
        (Some(compare), None) => Ok(SplitTarget::Column(compare)),
    }
}

/// Extract the two samples named by `selection`
///
/// Null and NaN values are dropped from each sample. A grouping column must
/// have exactly two distinct non-null values; groups are ordered by first
/// appearance.
pub fn split(df: &DataFrame, selection: &ColumnSelection) -> Result<GroupSplit> {
    match validate_selection(df, selection)? {
        SplitTarget::Column(compare) => Ok(GroupSplit {
            labels: (selection.value.clone(), compare.to_string()),
            first: dense_values(df, &selection.value)?,
            second: dense_values(df, compare)?,
        }),
        SplitTarget::Group(group_by) => split_by_group(df, &selection.value, group_by),
    }
}

fn split_by_group(df: &DataFrame, value: &str, group_by: &str) -> Result<GroupSplit> {
    let keys = lookup(df, group_by)?.cast(&DataType::String)?;
    let keys = keys.str()?;
    let values = numeric_values(df, value)?;

    let mut groups: Vec<(String, Vec<f64>)> = Vec::with_capacity(2);
    for (key, value) in keys.into_iter().zip(values) {
        let Some(key) = key else { continue };
        let index = match groups.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                groups.push((key.to_string(), Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(v) = value.filter(|v| !v.is_nan()) {
            groups[index].1.push(v);
        }
    }

    debug!(group_by, groups = groups.len(), "partitioned column by group");

    if groups.len() > 2 {
        return Err(Error::TooManyGroups {
            column: group_by.to_string(),
            found: groups.len(),
        });
    }

    let mut groups = groups.into_iter();
    match (groups.next(), groups.next()) {
        (Some((first_label, first)), Some((second_label, second))) => Ok(GroupSplit {
            labels: (first_label, second_label),
            first,
            second,
        }),
        (first, _) => Err(eda_core::Error::InsufficientData {
            expected: 2,
            actual: usize::from(first.is_some()),
        }
        .into()),
    }
}
