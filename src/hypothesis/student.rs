//! hypothesis::student — two-tailed Student-t tail quantities.
//!
//! Purpose
//! -------
//! Resolve the two quantities every t-test in this crate derives from the
//! Student-t distribution: the positive two-tailed critical value t* with
//! P(|T| > t*) = alpha, and the two-tailed p-value of an observed
//! statistic.
//!
//! Key behaviors
//! -------------
//! - Evaluate the inverse CDF at `1 − alpha/2` for the critical value and
//!   the upper tail at `|t|` for the p-value, via
//!   [`statrs::distribution::StudentsT`].
//! - Accept fractional degrees of freedom: `StudentsT` is continuous in its
//!   freedom parameter, which the Welch–Satterthwaite path requires.
//!
//! Invariants & assumptions
//! ------------------------
//! - `degrees_of_freedom > 0` — guaranteed by the callers: validation
//!   enforces `n ≥ 2` per series, so paired df is ≥ 1, pooled df is ≥ 2,
//!   and the Welch df is strictly positive whenever either group has
//!   positive variance.
//! - `alpha` lies in (0, 1) — guaranteed by [`crate::config::AnalysisConfig`].
//!
//! Conventions
//! -----------
//! - Both functions are two-tailed; one-sided tests are out of scope.
//! - The p-value is clamped into [0, 1] to absorb floating-point slop at
//!   the tails.
//!
//! Downstream usage
//! ----------------
//! - `TTestOutcome::paired` and `TTestOutcome::unpaired` call
//!   [`two_tailed_p_value`] on their statistic and [`critical_value`] while
//!   assembling the decision.
//!
//! Testing notes
//! -------------
//! - Unit tests pin t* against textbook values for integer df, check
//!   monotonicity across a fractional df, and assert the equivalence
//!   |t| > t*  ⟺  p < alpha on both sides of the threshold.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Positive two-tailed critical value t* with P(|T| > t*) = alpha.
///
/// Parameters
/// ----------
/// - `alpha`: `f64`
///   Two-tailed significance level in (0, 1).
/// - `degrees_of_freedom`: `f64`
///   Strictly positive; may be fractional (Welch).
///
/// Returns
/// -------
/// `f64`
///   The quantile of the Student-t distribution at `1 − alpha/2`.
///
/// Panics
/// ------
/// - Panics only if `degrees_of_freedom <= 0`, which the callers' validation
///   rules out; the `expect` documents that invariant.
pub fn critical_value(alpha: f64, degrees_of_freedom: f64) -> f64 {
    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .expect("degrees of freedom are strictly positive after validation");
    dist.inverse_cdf(1.0 - alpha / 2.0)
}

/// Two-tailed p-value of an observed t statistic.
///
/// Parameters
/// ----------
/// - `statistic`: `f64`
///   Observed t statistic; the sign is irrelevant for a two-tailed test.
/// - `degrees_of_freedom`: `f64`
///   Strictly positive; may be fractional (Welch).
///
/// Returns
/// -------
/// `f64`
///   `2 · (1 − F(|t|))` clamped into [0, 1], where F is the Student-t CDF.
pub fn two_tailed_p_value(statistic: f64, degrees_of_freedom: f64) -> f64 {
    let dist = StudentsT::new(0.0, 1.0, degrees_of_freedom)
        .expect("degrees of freedom are strictly positive after validation");
    (2.0 * (1.0 - dist.cdf(statistic.abs()))).clamp(0.0, 1.0)
}
