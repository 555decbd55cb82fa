//! Typed column kinds
//!
//! Storage types are resolved once into a closed [`ColumnKind`] and threaded
//! through the engine as a value; no component re-derives a column's type
//! from type-name strings.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared element type of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    Categorical,
    Date,
    DateTime,
}

/// Semantic class used to gate analysis routines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnClass {
    /// Integer or floating-point storage
    Numeric,
    /// String, categorical or boolean storage
    Categorical,
    /// Date or datetime storage
    Temporal,
}

impl ColumnKind {
    /// Semantic class of this kind
    ///
    /// Booleans are grouped with categoricals: they are counted, not averaged.
    pub fn class(&self) -> ColumnClass {
        match self {
            Self::Integer | Self::Float => ColumnClass::Numeric,
            Self::Boolean | Self::Categorical => ColumnClass::Categorical,
            Self::Date | Self::DateTime => ColumnClass::Temporal,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.class() == ColumnClass::Numeric
    }

    pub fn is_categorical(&self) -> bool {
        self.class() == ColumnClass::Categorical
    }

    pub fn is_temporal(&self) -> bool {
        self.class() == ColumnClass::Temporal
    }

    /// Get the name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Categorical => "categorical",
            Self::Date => "date",
            Self::DateTime => "datetime",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for ColumnClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Numeric => "numeric",
            Self::Categorical => "categorical",
            Self::Temporal => "temporal",
        };
        f.write_str(name)
    }
}

/// Parses both the engine's own names and the conversion targets offered by
/// the dataset editor (`int64`, `float64`, `object`, `category`, `bool`,
/// `string`, `datetime`, `date`).
impl FromStr for ColumnKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" | "int64" | "int32" => Ok(Self::Integer),
            "float" | "float64" | "float32" | "double" => Ok(Self::Float),
            "boolean" | "bool" => Ok(Self::Boolean),
            "categorical" | "category" | "object" | "string" | "str" => Ok(Self::Categorical),
            "date" => Ok(Self::Date),
            "datetime" | "timestamp" => Ok(Self::DateTime),
            other => Err(Error::InvalidParameter(format!("Unknown column type '{other}'"))),
        }
    }
}
