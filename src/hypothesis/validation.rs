//! hypothesis::validation — shared input guards for the test engines.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the hypothesis-testing routines in
//! this crate. This avoids duplicating checks on series length, score
//! finiteness, admissible range, and pairing shape across the paired test,
//! the independent test, and the homogeneity pre-check.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on score series before any statistic is
//!   computed.
//! - Map invalid inputs into structured [`TestError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Score series must have length at least 2 to support a sample standard
//!   deviation with an `n − 1` denominator.
//! - All score values must be finite (`!NaN`, not ±∞).
//! - Scores must lie in `[0, max_score]` where the check takes a ceiling.
//! - Paired series must be index-aligned and therefore equal in length.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what error construction requires.
//! - A successful return (`Ok(())`) is a guarantee that basic shape and
//!   range constraints hold; callers may then index and divide freely.
//! - The homogeneity guard deliberately skips the range check: Levene's
//!   test is scale-free and does not consume a score ceiling.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_paired`] / [`validate_groups`] at the top of the test
//!   engines and [`validate_homogeneity_inputs`] at the top of the Levene
//!   check, before computing any means or spreads.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise every branch: short series, non-finite values,
//!   out-of-range scores, mismatched lengths, and a success path.

use crate::hypothesis::errors::{TestError, TestResult};

/// Validate a single score series against length, finiteness, and range.
///
/// Parameters
/// ----------
/// - `scores`: `&[f64]`
///   Score series, one entry per student. Must have length at least 2, and
///   every value must be finite and inside `[0, max_score]`.
/// - `max_score`: `f64`
///   Upper bound of the admissible score range, typically
///   `AnalysisConfig::max_score()`.
///
/// Returns
/// -------
/// `TestResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(TestError)` with the variant encoding which condition failed
///     and, where relevant, the offending value.
///
/// Errors
/// ------
/// - `TestError::InsufficientData(n)`
///   Returned when `scores.len() < 2`.
/// - `TestError::NonFiniteScore(value)`
///   Returned when any element is NaN or ±∞.
/// - `TestError::ScoreOutOfRange(value, max_score)`
///   Returned when any element falls outside `[0, max_score]`.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `TestError`.
pub fn validate_series(scores: &[f64], max_score: f64) -> TestResult<()> {
    if scores.len() < 2 {
        return Err(TestError::InsufficientData(scores.len()));
    }

    for &value in scores {
        if !value.is_finite() {
            return Err(TestError::NonFiniteScore(value));
        }
        if value < 0.0 || value > max_score {
            return Err(TestError::ScoreOutOfRange(value, max_score));
        }
    }

    Ok(())
}

/// Validate an index-aligned pretest/posttest pair of series.
///
/// The shape check runs first so that a length mismatch is reported as such
/// rather than as a property of either series alone.
///
/// Errors
/// ------
/// - `TestError::ShapeMismatch(left, right)` when the lengths differ.
/// - Any error from [`validate_series`] applied to each series.
pub fn validate_paired(pretest: &[f64], posttest: &[f64], max_score: f64) -> TestResult<()> {
    if pretest.len() != posttest.len() {
        return Err(TestError::ShapeMismatch(pretest.len(), posttest.len()));
    }
    validate_series(pretest, max_score)?;
    validate_series(posttest, max_score)
}

/// Validate two independent groups. Lengths may differ.
///
/// Errors
/// ------
/// - Any error from [`validate_series`] applied to each group.
pub fn validate_groups(group_a: &[f64], group_b: &[f64], max_score: f64) -> TestResult<()> {
    validate_series(group_a, max_score)?;
    validate_series(group_b, max_score)
}

/// Validate two groups for the homogeneity-of-variance check.
///
/// Levene's test is scale-free, so only length and finiteness are enforced;
/// the score-range check is left to the calling test engine.
///
/// Errors
/// ------
/// - `TestError::InsufficientData(n)` when either group has `n < 2`.
/// - `TestError::NonFiniteScore(value)` on NaN or ±∞.
pub fn validate_homogeneity_inputs(group_a: &[f64], group_b: &[f64]) -> TestResult<()> {
    for group in [group_a, group_b] {
        if group.len() < 2 {
            return Err(TestError::InsufficientData(group.len()));
        }
        for &value in group {
            if !value.is_finite() {
                return Err(TestError::NonFiniteScore(value));
            }
        }
    }
    Ok(())
}
