//! outcomes — per-student learning gains and group mastery rates.
//!
//! Purpose
//! -------
//! Collect the outcome metrics of an intervention study: the normalized
//! learning gain of each student (how much of the available improvement
//! toward the maximum score was actually realized) and the mastery rate of
//! a group (the fraction of students strictly above a fixed performance
//! threshold). This subtree is an independent path from the hypothesis
//! tests: it consumes only raw score arrays and a score ceiling.
//!
//! Key behaviors
//! -------------
//! - Expose per-student gains via [`learning_gains`] returning a
//!   [`GainRecord`] per student.
//! - Expose the mastery rate via [`mastery_rate`] returning a
//!   [`MasteryOutcome`], with the fixed policy constant
//!   [`MASTERY_THRESHOLD`].
//! - Centralize shape/range guards in [`validation`] and error types in
//!   [`errors`], mirroring the hypothesis subtree's conventions.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scores are finite and within `[0, max_score]`; the ceiling is finite
//!   and strictly positive. Enforced by the guards, never assumed.
//! - A single student is legal input: the metrics need no sample spread.
//! - Both metrics round their final percentage to two decimals, half away
//!   from zero; no intermediate rounding.
//!
//! Conventions
//! -----------
//! - Failures are reported via [`OutcomeResult`] / [`OutcomeError`];
//!   an undefined gain (pretest at the ceiling) is an error carrying the
//!   student index, not a NaN in the output.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use edumetrics::outcomes::{learning_gains, mastery_rate};
//!
//!   let gains = learning_gains(&[40.0, 55.0], &[70.0, 70.0], 100.0)?;
//!   let mastery = mastery_rate(&[81.0, 79.0], 100.0)?;
//!   # Ok::<(), edumetrics::outcomes::OutcomeError>(())
//!   ```
//!
//! Testing notes
//! -------------
//! - Unit tests in [`gains`] and [`mastery`] pin the metric contracts and
//!   degenerate cases; [`validation`] covers the guard branches.

pub mod errors;
pub mod gains;
pub mod mastery;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{OutcomeError, OutcomeResult};
pub use self::gains::{GainRecord, learning_gains};
pub use self::mastery::{MASTERY_THRESHOLD, MasteryOutcome, mastery_rate};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{OutcomeError, OutcomeResult};
    pub use super::gains::{GainRecord, learning_gains};
    pub use super::mastery::{MASTERY_THRESHOLD, MasteryOutcome, mastery_rate};
}

/// Round a percentage to two decimals, half away from zero.
///
/// The single rounding policy shared by both metrics; applied to the final
/// percentage only.
#[inline]
pub(crate) fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
