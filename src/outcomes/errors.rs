//! outcomes::errors — error types for the outcome-metric routines.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the outcome metrics
//! (normalized learning gains and mastery rate), together with a
//! conversion layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`OutcomeResult`] and [`OutcomeError`] as the canonical result
//!   and error types for the metrics and their validation helpers.
//! - Attach human-readable `Display` messages to each variant.
//! - Implement `From<OutcomeError> for PyErr` mapping to `ValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Metric routines validate their inputs and return [`OutcomeResult<T>`]
//!   instead of panicking.
//! - `OutcomeError` values are small and cheap to clone.
//!
//! Conventions
//! -----------
//! - This module covers outcome-metric errors only; the hypothesis-test
//!   subtree owns its own `errors` module.
//! - `UndefinedGain` carries the student index so a presentation layer can
//!   name the affected row when it decides to skip or abort.
//!
//! Downstream usage
//! ----------------
//! - `learning_gains` and `mastery_rate` return [`OutcomeResult<T>`] to
//!   propagate failures cleanly to callers.
//!
//! Testing notes
//! -------------
//! - Unit tests verify payload embedding in the `Display` messages.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type OutcomeResult<T> = Result<T, OutcomeError>;

/// OutcomeError — error conditions for the outcome metrics.
///
/// Variants
/// --------
/// - `EmptySeries`
///   A metric was asked for on an empty score series.
/// - `ShapeMismatch(left: usize, right: usize)`
///   Paired pretest/posttest series have unequal lengths.
/// - `NonFiniteScore(value: f64)`
///   A score is NaN or ±∞.
/// - `ScoreOutOfRange(value: f64, max_score: f64)`
///   A score falls outside the admissible range `[0, max_score]`.
/// - `InvalidMaxScore(max_score: f64)`
///   The supplied score ceiling is non-positive or not finite.
/// - `UndefinedGain(index: usize)`
///   The gain denominator `max_score − pretest` is zero for the student at
///   `index`: the ceiling was already reached, so no normalized gain
///   exists.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`]; converted
///   to `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeError {
    //------ Input validation errors ------
    EmptySeries,
    ShapeMismatch(usize, usize),
    NonFiniteScore(f64),
    ScoreOutOfRange(f64, f64),
    InvalidMaxScore(f64),
    //------ Undefined metric ------
    UndefinedGain(usize),
}

impl std::error::Error for OutcomeError {}

impl std::fmt::Display for OutcomeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeError::EmptySeries => {
                write!(f, "Score series must contain at least one observation.")
            }
            OutcomeError::ShapeMismatch(left, right) => {
                write!(f, "Paired series must have equal lengths; got {left} and {right}.")
            }
            OutcomeError::NonFiniteScore(value) => {
                write!(f, "Invalid score value: {value}. Must be a finite number.")
            }
            OutcomeError::ScoreOutOfRange(value, max_score) => {
                write!(f, "Score {value} is outside the admissible range [0, {max_score}].")
            }
            OutcomeError::InvalidMaxScore(max_score) => {
                write!(f, "Invalid max score: {max_score}. Must be finite and positive.")
            }
            OutcomeError::UndefinedGain(index) => {
                write!(
                    f,
                    "Normalized gain is undefined for student {index}: the pretest already \
                     equals the maximum score."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<OutcomeError> for PyErr {
    fn from(err: OutcomeError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
