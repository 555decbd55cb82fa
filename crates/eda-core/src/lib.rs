//! Core types for the EDA analysis engine
//!
//! This crate holds what every analysis component shares:
//!
//! - [`Error`] / [`ErrorKind`]: the numeric error type and the recoverable
//!   failure taxonomy exposed to the presentation layer
//! - [`ColumnKind`] / [`ColumnClass`]: the closed set of column storage kinds
//!   and the numeric / categorical / temporal classes that gate routines
//! - [`utils`]: slice-level primitives (moments, type-7 quantiles, median,
//!   MAD, Pearson correlation)
//!
//! # Example
//!
//! ```rust
//! use eda_core::{utils, ColumnKind, ColumnClass};
//!
//! let (q1, q3) = utils::quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!((q1, q3), (2.0, 4.0));
//!
//! assert_eq!(ColumnKind::Float.class(), ColumnClass::Numeric);
//! ```

pub mod error;
pub mod kinds;
pub mod utils;

pub use error::{Error, ErrorKind, Result};
pub use kinds::{ColumnClass, ColumnKind};
