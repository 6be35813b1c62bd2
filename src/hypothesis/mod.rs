//! hypothesis — t-test engines and their shared infrastructure.
//!
//! Purpose
//! -------
//! Collect the hypothesis-testing routines of an intervention study and
//! their shared infrastructure: descriptive moments, input validation,
//! Student-t tail quantities, the Levene variance-homogeneity gate, the
//! decision policy, and the paired/unpaired t-test engines, including
//! Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose the dependent and independent t-tests via [`TTestOutcome`] and
//!   its constructors [`TTestOutcome::paired`](ttest::TTestOutcome::paired)
//!   and [`TTestOutcome::unpaired`](ttest::TTestOutcome::unpaired).
//! - Expose the variance-homogeneity pre-check via [`HomogeneityOutcome`]
//!   and [`HomogeneityOutcome::levene`](levene::HomogeneityOutcome::levene).
//! - Centralize input guards in [`validation`], ensuring series length,
//!   finiteness, score range, and pairing shape are checked once in a
//!   consistent way across test modules.
//! - Provide a dedicated error type [`TestError`] and result alias
//!   [`TestResult`], plus a conversion layer to Python exceptions when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Score inputs are finite, real-valued, and within `[0, max_score]`;
//!   modules call the [`validation`] guards before any computation.
//! - Engines in this subtree report failures via [`TestResult`] and never
//!   panic on user-facing invalid inputs; panics indicate programming
//!   errors.
//! - Every computation is a pure function of its explicit inputs: no
//!   shared mutable state, so each group's analysis is independent and
//!   safely concurrent.
//! - [`TestError`] variants are small and cloneable so they can be used
//!   comfortably in unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *hypothesis tests*; outcome metrics
//!   (learning gains, mastery) live under `crate::outcomes` with their own
//!   errors, and configuration lives in `crate::config`.
//! - Error messages are phrased in terms of domain constraints such as
//!   "at least 2 observations" or "equal lengths" rather than low-level
//!   details.
//! - Public entry points are thin wrappers that delegate shape checks to
//!   [`validation`] and propagate [`TestError`] via [`TestResult`].
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use edumetrics::config::AnalysisConfig;
//!   use edumetrics::hypothesis::{TTestOutcome, TestResult};
//!
//!   fn analyze(pre: &[f64], post: &[f64]) -> TestResult<TTestOutcome> {
//!       let config = AnalysisConfig::new(0.05, 100.0).expect("valid settings");
//!       TTestOutcome::paired(pre, post, &config)
//!   }
//!   ```
//!
//!   and only refers to `hypothesis::errors` or `hypothesis::validation`
//!   directly when matching on [`TestError`] or reusing the guards.
//! - Reporting collaborators consume the outcome accessors (statistic,
//!   p-value, critical value, decision, direction) to phrase their
//!   verdicts; nothing here prints or plots.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding for [`TestError`] variants.
//! - Unit tests in [`validation`] exercise all guard branches, including
//!   insufficient data, non-finite values, range violations, and shape
//!   mismatches.
//! - Unit tests in [`descriptive`], [`student`], [`decision`], [`levene`],
//!   and [`ttest`] cover the numeric contracts, degenerate-data
//!   conventions, and the equivalence of the two rejection rules; the
//!   end-to-end study pipeline is exercised in the integration suite.

pub mod decision;
pub mod descriptive;
pub mod errors;
pub mod levene;
pub mod student;
pub mod ttest;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::decision::{Decision, Direction};
pub use self::errors::{TestError, TestResult};
pub use self::levene::HomogeneityOutcome;
pub use self::ttest::TTestOutcome;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use edumetrics::hypothesis::prelude::*;
//
// to import the main hypothesis-testing surface in a single line.

pub mod prelude {
    pub use super::decision::{Decision, Direction};
    pub use super::errors::{TestError, TestResult};
    pub use super::levene::HomogeneityOutcome;
    pub use super::ttest::TTestOutcome;
}
