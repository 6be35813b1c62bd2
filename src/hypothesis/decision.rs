//! hypothesis::decision — rejection rules and directional classification.
//!
//! Purpose
//! -------
//! Apply the decision policy shared by both t-test engines: two independent
//! rejection rules (statistic against the critical value, p-value against
//! alpha) and a directional classifier on the mean difference.
//!
//! Key behaviors
//! -------------
//! - Evaluate `reject_by_statistic = |t| > t*` and
//!   `reject_by_pvalue = p ≤ alpha` as separate booleans, never collapsed
//!   into one flag.
//! - Classify the sign of the mean difference into [`Direction`].
//!
//! Invariants & assumptions
//! ------------------------
//! - With a consistently computed critical value the two rules agree in all
//!   non-degenerate cases; they are reported independently because the
//!   study domain treats them as two complementary lines of evidence.
//! - The only point where they can disagree is the measure-zero boundary
//!   `p == alpha` (equivalently `|t| == t*`), where the p-value rule uses
//!   `≤` and the statistic rule uses strict `>`.
//!
//! Conventions
//! -----------
//! - `Direction::Improved` means a strictly positive mean difference under
//!   the engines' orientation (posttest − pretest, or group B − group A).
//!
//! Downstream usage
//! ----------------
//! - `TTestOutcome` embeds a [`Decision`] and forwards its fields through
//!   accessors; presentation layers read the two flags and the direction to
//!   phrase their verdicts.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the direction classifier on all three signs and both
//!   rejection rules on either side of their thresholds; the cross-rule
//!   equivalence property is asserted end-to-end in the ttest module and
//!   the integration suite.

/// Direction — sign classification of a mean difference.
///
/// Variants
/// --------
/// - `Improved`: the mean difference is strictly positive.
/// - `Declined`: the mean difference is strictly negative.
/// - `None`: the mean difference is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Improved,
    Declined,
    None,
}

impl Direction {
    /// Classify the sign of a mean difference.
    #[inline]
    pub fn from_mean_difference(mean_difference: f64) -> Self {
        if mean_difference > 0.0 {
            Direction::Improved
        } else if mean_difference < 0.0 {
            Direction::Declined
        } else {
            Direction::None
        }
    }

    /// Lower-case label, stable across the Python boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Improved => "improved",
            Direction::Declined => "declined",
            Direction::None => "none",
        }
    }
}

/// Decision — the two rejection verdicts plus the direction of change.
///
/// Purpose
/// -------
/// Hold the outcome of the decision policy for one t-test: whether each of
/// the two rejection rules fires, and which way the measured performance
/// moved.
///
/// Fields
/// ------
/// - `reject_by_statistic`: `bool`
///   True when `|statistic| > critical_value`.
/// - `reject_by_pvalue`: `bool`
///   True when `p_value ≤ alpha`.
/// - `direction`: [`Direction`]
///   Sign classification of the mean difference.
///
/// Invariants
/// ----------
/// - The two flags agree whenever `p_value != alpha` exactly; tests assert
///   this equivalence on non-boundary data.
///
/// Performance
/// -----------
/// - Three scalars; `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub reject_by_statistic: bool,
    pub reject_by_pvalue: bool,
    pub direction: Direction,
}

impl Decision {
    /// Evaluate the decision policy for one test.
    ///
    /// Parameters
    /// ----------
    /// - `statistic`: `f64`
    ///   Observed t statistic.
    /// - `p_value`: `f64`
    ///   Two-tailed p-value of `statistic`.
    /// - `critical_value`: `f64`
    ///   Positive two-tailed critical value at the same alpha and df.
    /// - `alpha`: `f64`
    ///   Two-tailed significance level.
    /// - `mean_difference`: `f64`
    ///   Oriented mean difference the test was computed from.
    ///
    /// Returns
    /// -------
    /// [`Decision`]
    ///   Both rejection verdicts and the direction classification.
    pub fn evaluate(
        statistic: f64, p_value: f64, critical_value: f64, alpha: f64, mean_difference: f64,
    ) -> Self {
        Decision {
            reject_by_statistic: statistic.abs() > critical_value,
            reject_by_pvalue: p_value <= alpha,
            direction: Direction::from_mean_difference(mean_difference),
        }
    }
}
