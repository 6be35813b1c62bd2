//! hypothesis::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the hypothesis-testing
//! routines (paired and independent t-tests, Levene's homogeneity check),
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. Validation and runtime failures stay localized here while the
//! rest of the subtree propagates them via `?`.
//!
//! Key behaviors
//! -------------
//! - Define [`TestResult`] and [`TestError`] as the canonical result and
//!   error types for every test engine and validation helper in this
//!   subtree.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<TestError> for PyErr` to surface Rust-side failures as
//!   `ValueError` to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Test engines validate their inputs (lengths, finiteness, score range)
//!   and return [`TestResult<T>`] instead of panicking.
//! - `TestError` values are small, cheap to clone, and comfortable to use
//!   in unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust `Display` message
//!   verbatim.
//!
//! Conventions
//! -----------
//! - This module covers hypothesis-testing errors only; the outcome-metric
//!   subtree owns its own `errors` module, and configuration errors live in
//!   `crate::config`.
//! - Error messages are phrased in terms of domain constraints ("at least 2
//!   observations", "equal lengths") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - `TTestOutcome::paired`, `TTestOutcome::unpaired`, and
//!   `HomogeneityOutcome::levene` return [`TestResult<T>`] to propagate
//!   failures cleanly to callers.
//! - Presentation layers match on [`TestError`] variants to decide whether
//!   to abort a run or skip the affected group.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload (offending value, lengths) and is non-empty.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type TestResult<T> = Result<T, TestError>;

/// TestError — error conditions for the hypothesis-testing engines.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur while
/// running a paired t-test, an independent t-test, or the Levene
/// homogeneity pre-check.
///
/// Variants
/// --------
/// - `InsufficientData(n: usize)`
///   A series has fewer than 2 observations, so a sample standard
///   deviation (and hence a t statistic) cannot be computed.
/// - `ShapeMismatch(left: usize, right: usize)`
///   Paired pretest/posttest series have unequal lengths.
/// - `NonFiniteScore(value: f64)`
///   A score is NaN or ±∞ and cannot enter the statistics.
/// - `ScoreOutOfRange(value: f64, max_score: f64)`
///   A score falls outside the admissible range `[0, max_score]`.
/// - `ZeroVariance`
///   The spread in the denominator of a t statistic is exactly zero while
///   the mean difference is not, leaving the statistic unbounded.
///
/// Invariants
/// ----------
/// - Each variant carries just enough payload to identify the offending
///   input without dragging whole score arrays into the error.
/// - `ZeroVariance` is only emitted after validation has passed; it marks a
///   degenerate dataset, not a malformed one.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] so it works
///   with idiomatic `?`-based propagation.
/// - A [`From<TestError> for PyErr`] implementation maps all cases to
///   `ValueError` at the Python boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    //------ Input validation errors ------
    InsufficientData(usize),
    ShapeMismatch(usize, usize),
    NonFiniteScore(f64),
    ScoreOutOfRange(f64, f64),
    //------ Degenerate data ------
    ZeroVariance,
}

impl std::error::Error for TestError {}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::InsufficientData(n) => {
                write!(f, "Need at least 2 observations to compute a t statistic; got {n}.")
            }
            TestError::ShapeMismatch(left, right) => {
                write!(f, "Paired series must have equal lengths; got {left} and {right}.")
            }
            TestError::NonFiniteScore(value) => {
                write!(f, "Invalid score value: {value}. Must be a finite number.")
            }
            TestError::ScoreOutOfRange(value, max_score) => {
                write!(f, "Score {value} is outside the admissible range [0, {max_score}].")
            }
            TestError::ZeroVariance => {
                write!(
                    f,
                    "Zero spread with a nonzero mean difference; the t statistic is unbounded."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<TestError> for PyErr {
    fn from(err: TestError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
