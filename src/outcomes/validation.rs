//! outcomes::validation — input guards for the outcome metrics.
//!
//! Purpose
//! -------
//! Centralize the shape, finiteness, and range checks shared by the
//! learning-gain and mastery-rate computations. Unlike the t-test guards,
//! a single observation is legal here: the metrics are per-student or
//! simple proportions and need no sample spread.
//!
//! Key behaviors
//! -------------
//! - Enforce a finite, strictly positive score ceiling before it is used
//!   as a denominator.
//! - Enforce non-empty series with finite, in-range scores.
//! - Enforce index alignment of pretest/posttest pairs.
//!
//! Conventions
//! -----------
//! - Purely validation; no I/O, no allocation beyond error construction.
//! - A successful return guarantees the metrics may divide by `max_score`
//!   and index both series freely.
//!
//! Testing notes
//! -------------
//! - Unit tests cover every branch plus a success path with a single
//!   student.

use crate::outcomes::errors::{OutcomeError, OutcomeResult};

/// Validate the score ceiling used by the metrics.
///
/// Errors
/// ------
/// - `OutcomeError::InvalidMaxScore(max_score)` when the ceiling is
///   non-finite or non-positive.
pub fn validate_max_score(max_score: f64) -> OutcomeResult<()> {
    if !max_score.is_finite() || max_score <= 0.0 {
        return Err(OutcomeError::InvalidMaxScore(max_score));
    }
    Ok(())
}

/// Validate a single score series for the metrics: non-empty, finite,
/// within `[0, max_score]`.
///
/// Errors
/// ------
/// - `OutcomeError::EmptySeries` on an empty slice.
/// - `OutcomeError::NonFiniteScore(value)` on NaN or ±∞.
/// - `OutcomeError::ScoreOutOfRange(value, max_score)` outside the range.
pub fn validate_scores(scores: &[f64], max_score: f64) -> OutcomeResult<()> {
    if scores.is_empty() {
        return Err(OutcomeError::EmptySeries);
    }
    for &value in scores {
        if !value.is_finite() {
            return Err(OutcomeError::NonFiniteScore(value));
        }
        if value < 0.0 || value > max_score {
            return Err(OutcomeError::ScoreOutOfRange(value, max_score));
        }
    }
    Ok(())
}

/// Validate an index-aligned pretest/posttest pair for the gain metric.
///
/// Errors
/// ------
/// - `OutcomeError::ShapeMismatch(left, right)` when the lengths differ.
/// - Any error from [`validate_scores`] applied to each series.
pub fn validate_score_pairs(pretest: &[f64], posttest: &[f64], max_score: f64) -> OutcomeResult<()> {
    if pretest.len() != posttest.len() {
        return Err(OutcomeError::ShapeMismatch(pretest.len(), posttest.len()));
    }
    validate_scores(pretest, max_score)?;
    validate_scores(posttest, max_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A single-student success path (legal for metrics, unlike t-tests).
    // - Each rejection branch: empty series, non-finite score, range
    //   violation, invalid ceiling, and paired length mismatch.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that one student is enough for the metric guards.
    //
    // Given
    // -----
    // - A single-element series and an aligned single-element pair.
    //
    // Expect
    // ------
    // - Both guards return `Ok(())`.
    fn metric_guards_accept_a_single_student() {
        // Act & Assert
        assert!(validate_scores(&[75.0], 100.0).is_ok());
        assert!(validate_score_pairs(&[50.0], &[75.0], 100.0).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Exercise every rejection branch of the metric guards.
    //
    // Given
    // -----
    // - An empty series, a NaN score, an out-of-range score, a zero
    //   ceiling, and a mismatched pair.
    //
    // Expect
    // ------
    // - Each input maps to its dedicated `OutcomeError` variant.
    fn metric_guards_reject_each_malformed_input() {
        // Act & Assert
        match validate_scores(&[], 100.0) {
            Err(OutcomeError::EmptySeries) => (),
            other => panic!("expected EmptySeries, got {other:?}"),
        }
        match validate_scores(&[50.0, f64::NAN], 100.0) {
            Err(OutcomeError::NonFiniteScore(_)) => (),
            other => panic!("expected NonFiniteScore, got {other:?}"),
        }
        match validate_scores(&[50.0, 101.0], 100.0) {
            Err(OutcomeError::ScoreOutOfRange(v, _)) => assert_eq!(v, 101.0),
            other => panic!("expected ScoreOutOfRange, got {other:?}"),
        }
        match validate_max_score(0.0) {
            Err(OutcomeError::InvalidMaxScore(v)) => assert_eq!(v, 0.0),
            other => panic!("expected InvalidMaxScore, got {other:?}"),
        }
        match validate_score_pairs(&[50.0, 60.0], &[70.0], 100.0) {
            Err(OutcomeError::ShapeMismatch(left, right)) => assert_eq!((left, right), (2, 1)),
            other => panic!("expected ShapeMismatch(2, 1), got {other:?}"),
        }
    }
}
