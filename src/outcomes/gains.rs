//! outcomes::gains — normalized learning gain per student.
//!
//! Purpose
//! -------
//! Compute each student's normalized learning gain: the fraction of the
//! improvement headroom (distance from the pretest to the maximum score)
//! that the posttest actually realized, expressed as a percentage.
//!
//! Key behaviors
//! -------------
//! - Per student: `gain = ((post − pre) / (max_score − pre)) · 100`,
//!   rounded to two decimals.
//! - A pretest already at the ceiling leaves no headroom; that student's
//!   gain is undefined and fails with [`OutcomeError::UndefinedGain`]
//!   carrying the index, never a divide-by-zero artifact.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated first (aligned lengths, finite scores in
//!   `[0, max_score]`, positive finite ceiling).
//! - Gains may be negative (a decline eats into the headroom) and are at
//!   most 100 (the posttest cannot exceed the ceiling).
//!
//! Conventions
//! -----------
//! - The rounding policy (final percentage, two decimals, half away from
//!   zero) is shared with the mastery metric via the subtree's `round_two`
//!   helper.
//!
//! Downstream usage
//! ----------------
//! - Reporting collaborators typically aggregate the records with the
//!   descriptive helpers (mean/std of the gain percents) and chart them
//!   per student.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the full-headroom case (50 → 100 out of 100 is a 100%
//!   gain), the undefined case (pretest at the ceiling), a negative gain,
//!   and the rounding behavior.

use crate::outcomes::errors::{OutcomeError, OutcomeResult};
use crate::outcomes::round_two;
use crate::outcomes::validation::{validate_max_score, validate_score_pairs};

/// GainRecord — one student's pretest, posttest, and normalized gain.
///
/// Fields
/// ------
/// - `pretest`: `f64`
///   The student's pretest score.
/// - `posttest`: `f64`
///   The student's posttest score.
/// - `gain_percent`: `f64`
///   Normalized gain as a percentage of the available improvement, rounded
///   to two decimals; negative when performance declined.
///
/// Notes
/// -----
/// - A plain value record: created once per analysis call, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainRecord {
    pub pretest: f64,
    pub posttest: f64,
    pub gain_percent: f64,
}

/// Compute the normalized learning gain for every student.
///
/// Parameters
/// ----------
/// - `pretest`: `&[f64]`
///   Pretest scores, one per student, within `[0, max_score]`.
/// - `posttest`: `&[f64]`
///   Posttest scores, index-aligned with `pretest`.
/// - `max_score`: `f64`
///   Finite, strictly positive score ceiling.
///
/// Returns
/// -------
/// `OutcomeResult<Vec<GainRecord>>`
///   One record per student, in input order.
///
/// Errors
/// ------
/// - `OutcomeError::InvalidMaxScore(..)`, `OutcomeError::ShapeMismatch(..)`,
///   `OutcomeError::EmptySeries`, `OutcomeError::NonFiniteScore(..)`, and
///   `OutcomeError::ScoreOutOfRange(..)` from validation.
/// - `OutcomeError::UndefinedGain(index)` when a pretest equals
///   `max_score`; the whole call fails so no partial collection escapes.
///
/// Examples
/// --------
/// ```rust
/// use edumetrics::outcomes::gains::learning_gains;
///
/// let records = learning_gains(&[50.0], &[100.0], 100.0).unwrap();
/// assert_eq!(records[0].gain_percent, 100.0);
/// ```
pub fn learning_gains(
    pretest: &[f64], posttest: &[f64], max_score: f64,
) -> OutcomeResult<Vec<GainRecord>> {
    validate_max_score(max_score)?;
    validate_score_pairs(pretest, posttest, max_score)?;

    pretest
        .iter()
        .zip(posttest)
        .enumerate()
        .map(|(index, (&pre, &post))| {
            if pre == max_score {
                return Err(OutcomeError::UndefinedGain(index));
            }
            let gain_percent = round_two(((post - pre) / (max_score - pre)) * 100.0);
            Ok(GainRecord { pretest: pre, posttest: post, gain_percent })
        })
        .collect()
}
