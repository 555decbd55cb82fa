//! Numeric primitives over data slices
//!
//! Everything here works on plain `f64` slices that already had nulls
//! removed; table adapters are responsible for that step.

use crate::{Error, Result};
use num_traits::{Float, NumCast};
use std::cmp::Ordering;

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use eda_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use eda_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Variance with `ddof` delta degrees of freedom
///
/// `ddof = 0` gives the population variance, `ddof = 1` the sample variance.
/// Returns `None` when `data.len() <= ddof`.
pub fn variance(data: &[f64], ddof: usize) -> Option<f64> {
    if data.len() <= ddof {
        return None;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    Some(ss / (data.len() - ddof) as f64)
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use eda_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    variance(data, 1).map(f64::sqrt).unwrap_or(0.0)
}

/// True when every value equals the first one exactly
///
/// Empty slices are not constant. The population std of `[0.1; 10]` is
/// about `1e-17`, not zero; this check is exact.
///
/// # Examples
///
/// ```rust
/// use eda_core::utils::is_constant;
///
/// assert!(is_constant(&[0.1; 10]));
/// assert!(!is_constant(&[0.1, 0.2]));
/// ```
pub fn is_constant<T: PartialEq>(data: &[T]) -> bool {
    match data.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => false,
    }
}

/// Population standard deviation (ddof = 0), the scale used for z-scores
pub fn population_std(data: &[f64]) -> Option<f64> {
    variance(data, 0).map(f64::sqrt)
}

/// Quantile of pre-sorted data by linear interpolation between order statistics
///
/// This is the Hyndman-Fan type 7 definition: position `h = (n - 1) * p`,
/// result `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!("Quantile {p} must be in [0, 1]")));
    }
    let n = sorted_data.len();
    if n == 0 {
        return Err(Error::empty_input("quantile"));
    }
    if n == 1 {
        return Ok(sorted_data[0]);
    }

    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    let frac = h - lo as f64;
    Ok(sorted_data[lo] + frac * (sorted_data[hi] - sorted_data[lo]))
}

/// First and third quartiles, `(q1, q3)`
pub fn quartiles(data: &[f64]) -> Result<(f64, f64)> {
    let s = sorted(data);
    Ok((quantile_sorted(&s, 0.25)?, quantile_sorted(&s, 0.75)?))
}

/// Median of unsorted data
pub fn median(data: &[f64]) -> Result<f64> {
    quantile_sorted(&sorted(data), 0.5)
}

/// Median absolute deviation around the median, unscaled
///
/// Returns `(median, mad)`.
pub fn median_abs_deviation(data: &[f64]) -> Result<(f64, f64)> {
    let center = median(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - center).abs()).collect();
    Ok((center, median(&deviations)?))
}

/// Calculate the Pearson correlation coefficient of two paired slices
pub fn pearson_correlation<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired observations"));
    }

    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    if is_constant(x) || is_constant(y) {
        return Err(Error::zero_spread("Pearson correlation"));
    }

    let n: T = NumCast::from(x.len())
        .ok_or_else(|| Error::InvalidInput("sample size not representable".to_string()))?;

    let mean_x = x.iter().fold(T::zero(), |acc, &v| acc + v) / n;
    let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let mut numerator = T::zero();
    let mut sum_sq_x = T::zero();
    let mut sum_sq_y = T::zero();

    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator = numerator + dx * dy;
        sum_sq_x = sum_sq_x + dx * dx;
        sum_sq_y = sum_sq_y + dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();

    if denominator == T::zero() {
        return Err(Error::zero_spread("Pearson correlation"));
    }

    // Rounding can push |r| a hair past 1 for perfectly linear data
    let r = numerator / denominator;
    Ok(r.max(-T::one()).min(T::one()))
}
