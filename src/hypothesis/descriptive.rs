//! hypothesis::descriptive — sample moments shared by every test engine.
//!
//! Purpose
//! -------
//! Provide the small set of descriptive statistics the hypothesis tests are
//! built from: sample mean, sample variance and standard deviation with an
//! `n − 1` denominator, the median used by the Brown–Forsythe centering,
//! and the difference of group means.
//!
//! Key behaviors
//! -------------
//! - Keep the spread computations guarded: a sample standard deviation on
//!   fewer than 2 observations is an error, never a silent NaN.
//! - Stay slice-based and allocation-free except for the median's sort
//!   buffer.
//!
//! Invariants & assumptions
//! ------------------------
//! - Callers of [`mean`] and [`median`] guarantee a non-empty, finite
//!   series via the validation module; these helpers do not re-check.
//! - [`sample_variance`] and [`sample_std`] enforce `n ≥ 2` themselves
//!   because they are also called on derived series (paired differences)
//!   that never pass through `validate_series`.
//!
//! Conventions
//! -----------
//! - "Sample" always means the `n − 1` (ddof = 1) denominator.
//! - [`mean_difference`] is oriented `mean(second) − mean(first)` so that a
//!   positive value means the second series sits above the first.
//!
//! Downstream usage
//! ----------------
//! - The paired engine takes the mean and std of the per-student
//!   differences; the unpaired engine takes per-group variances; Levene's
//!   check takes per-group medians.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the moments on small hand-checked series and cover the
//!   insufficient-data branch and both median parities.

use crate::hypothesis::errors::{TestError, TestResult};

/// Sample mean of a non-empty series.
///
/// Panics
/// ------
/// - Division by zero length yields NaN rather than panicking; public
///   entry points rely on validation to prevent empty input.
#[inline]
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Difference of sample means, `mean(second) − mean(first)`.
#[inline]
pub fn mean_difference(first: &[f64], second: &[f64]) -> f64 {
    mean(second) - mean(first)
}

/// Sample variance with an `n − 1` denominator.
///
/// Parameters
/// ----------
/// - `data`: `&[f64]`
///   Series of at least 2 finite values.
///
/// Returns
/// -------
/// `TestResult<f64>`
///   - `Ok(variance)` for `n ≥ 2`.
///   - `Err(TestError::InsufficientData(n))` for shorter input, where the
///     `n − 1` denominator would divide by zero.
#[inline]
pub fn sample_variance(data: &[f64]) -> TestResult<f64> {
    let n = data.len();
    if n < 2 {
        return Err(TestError::InsufficientData(n));
    }
    let center = mean(data);
    Ok(data.iter().map(|&x| (x - center).powi(2)).sum::<f64>() / (n - 1) as f64)
}

/// Sample standard deviation, `sqrt` of [`sample_variance`].
#[inline]
pub fn sample_std(data: &[f64]) -> TestResult<f64> {
    Ok(sample_variance(data)?.sqrt())
}

/// Median of a non-empty series; average of the two middle values for even
/// lengths.
///
/// Notes
/// -----
/// - Sorts a copy; the input is never reordered.
/// - Comparison unwraps via `expect` because validated scores are finite
///   and therefore totally ordered.
pub fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).expect("scores are finite after validation"));
    let n = sorted.len();
    if n % 2 == 1 { sorted[n / 2] } else { (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0 }
}
