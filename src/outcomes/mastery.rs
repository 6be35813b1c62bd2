//! outcomes::mastery — mastery rate against a fixed performance threshold.
//!
//! Purpose
//! -------
//! Classify each student as having mastered the material when their score
//! exceeds a fixed fraction of the maximum, and report the group's mastery
//! rate as a rounded percentage.
//!
//! Key behaviors
//! -------------
//! - A student masters when `score / max_score > MASTERY_THRESHOLD`
//!   (strictly greater: exactly 80% of the ceiling does not count).
//! - `mastery_percent = round_two(mastered / total · 100)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated first (non-empty, finite, within
//!   `[0, max_score]`, positive finite ceiling).
//! - The threshold is a fixed policy constant in the current scope, not a
//!   parameter; callers needing a different cut would extend the analysis
//!   configuration instead.
//!
//! Conventions
//! -----------
//! - Rounding matches the gain metric: final percentage, two decimals,
//!   half away from zero.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the strict-threshold boundary (exactly 80% does not
//!   master), a hand-checked mixed group, and the all/none extremes.

use crate::outcomes::errors::OutcomeResult;
use crate::outcomes::round_two;
use crate::outcomes::validation::{validate_max_score, validate_scores};

/// Fraction of the maximum score a student must strictly exceed to count
/// as having mastered the material.
pub const MASTERY_THRESHOLD: f64 = 0.8;

/// MasteryOutcome — mastery counts and rate for one group.
///
/// Purpose
/// -------
/// Represent the mastery classification of a score series: how many
/// students exceeded the threshold, out of how many, and the resulting
/// percentage.
///
/// Fields
/// ------
/// - `mastered_count`: `usize`
///   Students with `score / max_score > MASTERY_THRESHOLD`.
/// - `total_count`: `usize`
///   Number of scores classified.
/// - `mastery_percent`: `f64`
///   `mastered_count / total_count · 100`, rounded to two decimals.
///
/// Invariants
/// ----------
/// - `mastered_count ≤ total_count` and `total_count ≥ 1`.
/// - `mastery_percent` lies in [0, 100].
///
/// Performance
/// -----------
/// - Three scalars; `Copy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryOutcome {
    mastered_count: usize,
    total_count: usize,
    mastery_percent: f64,
}

impl MasteryOutcome {
    /// Students strictly above the threshold.
    pub fn mastered_count(&self) -> usize {
        self.mastered_count
    }

    /// Number of scores classified.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Mastery rate as a percentage, rounded to two decimals.
    pub fn mastery_percent(&self) -> f64 {
        self.mastery_percent
    }
}

/// Compute the mastery rate of a score series.
///
/// Parameters
/// ----------
/// - `scores`: `&[f64]`
///   Scores to classify, one per student, within `[0, max_score]`.
/// - `max_score`: `f64`
///   Finite, strictly positive score ceiling.
///
/// Returns
/// -------
/// `OutcomeResult<MasteryOutcome>`
///   Counts and rounded percentage for the group.
///
/// Errors
/// ------
/// - `OutcomeError::InvalidMaxScore(..)`, `OutcomeError::EmptySeries`,
///   `OutcomeError::NonFiniteScore(..)`, and
///   `OutcomeError::ScoreOutOfRange(..)` from validation.
///
/// Examples
/// --------
/// ```rust
/// use edumetrics::outcomes::mastery::mastery_rate;
///
/// let outcome = mastery_rate(&[81.0, 79.0, 90.0, 60.0], 100.0).unwrap();
/// assert_eq!(outcome.mastered_count(), 2);
/// assert_eq!(outcome.mastery_percent(), 50.0);
/// ```
pub fn mastery_rate(scores: &[f64], max_score: f64) -> OutcomeResult<MasteryOutcome> {
    validate_max_score(max_score)?;
    validate_scores(scores, max_score)?;

    let mastered_count =
        scores.iter().filter(|&&score| score / max_score > MASTERY_THRESHOLD).count();
    let total_count = scores.len();
    let mastery_percent = round_two(mastered_count as f64 / total_count as f64 * 100.0);

    Ok(MasteryOutcome { mastered_count, total_count, mastery_percent })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - A hand-checked mixed group, including the strict boundary (79 and
    //   exactly 80 out of 100 do not master; 81 does).
    // - The all-mastered and none-mastered extremes.
    // - Rounding of a repeating-decimal percentage.
    //
    // They intentionally DO NOT cover:
    // - Validation branches; those are unit-tested in outcomes::validation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the mixed-group contract: of [81, 79, 90, 60] out of 100, only
    // 81 and 90 strictly exceed 80% of the ceiling.
    //
    // Given
    // -----
    // - Scores [81, 79, 90, 60] with max_score 100.
    //
    // Expect
    // ------
    // - mastered_count 2, total_count 4, mastery_percent 50.0.
    fn mastery_rate_counts_strict_exceedances_only() {
        // Act
        let outcome = mastery_rate(&[81.0, 79.0, 90.0, 60.0], 100.0).expect("valid scores");

        // Assert
        assert_eq!(outcome.mastered_count(), 2);
        assert_eq!(outcome.total_count(), 4);
        assert_eq!(outcome.mastery_percent(), 50.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the boundary is strict: exactly 80% of the ceiling does not
    // count as mastery.
    //
    // Given
    // -----
    // - Scores [80, 80.01] with max_score 100.
    //
    // Expect
    // ------
    // - Only the 80.01 masters.
    fn mastery_rate_boundary_is_strict() {
        // Act
        let outcome = mastery_rate(&[80.0, 80.01], 100.0).expect("valid scores");

        // Assert
        assert_eq!(outcome.mastered_count(), 1);
        assert_eq!(outcome.mastery_percent(), 50.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify the extremes and the two-decimal rounding of a repeating
    // percentage.
    //
    // Given
    // -----
    // - An all-mastered pair, a none-mastered pair, and a group of three
    //   with one mastered (33.333…%).
    //
    // Expect
    // ------
    // - 100.0, 0.0, and 33.33 respectively.
    fn mastery_rate_extremes_and_rounding() {
        // Act
        let all = mastery_rate(&[95.0, 88.0], 100.0).expect("valid scores");
        let none = mastery_rate(&[10.0, 60.0], 100.0).expect("valid scores");
        let third = mastery_rate(&[95.0, 60.0, 40.0], 100.0).expect("valid scores");

        // Assert
        assert_eq!(all.mastery_percent(), 100.0);
        assert_eq!(none.mastery_percent(), 0.0);
        assert_eq!(third.mastery_percent(), 33.33);
    }
}
