//! hypothesis::levene — variance-homogeneity pre-check for two groups.
//!
//! Purpose
//! -------
//! Implement the median-centered Levene test (the Brown–Forsythe variant,
//! robust to non-normal score distributions) for equality of variances
//! between two independent groups. Its verdict is a *gate*, not a final
//! hypothesis conclusion: it only selects which variance-pooling model the
//! independent t-test uses downstream.
//!
//! Key behaviors
//! -------------
//! - Center each group on its median and take absolute deviations
//!   z = |x − median(group)|.
//! - Run a two-group one-way ANOVA on the deviations; the F statistic has
//!   df₁ = 1 and df₂ = n_a + n_b − 2, with the p-value from
//!   [`statrs::distribution::FisherSnedecor`].
//! - Decide `equal_variance = (p_value > alpha)` against the analysis-wide
//!   significance level.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both groups have at least 2 finite observations; enforced by
//!   [`validate_homogeneity_inputs`](crate::hypothesis::validation::validate_homogeneity_inputs).
//! - `alpha` lies in (0, 1); callers source it from
//!   [`AnalysisConfig`](crate::config::AnalysisConfig).
//! - Degenerate spreads never crash: two constant groups carry no evidence
//!   against homogeneity and report statistic 0, p-value 1, equal variance
//!   by convention.
//!
//! Conventions
//! -----------
//! - The test is symmetric in its two groups; swapping them changes
//!   nothing in the outcome.
//! - Error handling uses [`TestError`](crate::hypothesis::TestError) /
//!   [`TestResult`] from `hypothesis::errors`.
//!
//! Downstream usage
//! ----------------
//! - `TTestOutcome::unpaired` runs this check first and embeds the outcome
//!   in its result for audit; callers can also invoke
//!   [`HomogeneityOutcome::levene`] directly on two score arrays.
//!
//! Testing notes
//! -------------
//! - Unit tests cover a clear unequal-spread case, a same-spread case, the
//!   constant-groups convention, swap symmetry, and the validation path.

use crate::hypothesis::descriptive::{mean, median};
use crate::hypothesis::errors::TestResult;
use crate::hypothesis::validation::validate_homogeneity_inputs;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// HomogeneityOutcome — verdict of the Levene variance-equality check.
///
/// Purpose
/// -------
/// Represent the outcome of a single median-centered Levene test between
/// two groups: the F statistic, its p-value, and the equal-variance
/// decision taken against the analysis-wide alpha.
///
/// Key behaviors
/// -------------
/// - Holds the Brown–Forsythe F statistic with df₁ = 1, df₂ = n_a + n_b − 2.
/// - Stores the upper-tail p-value of the observed statistic.
/// - Stores the gate decision `equal_variance = (p_value > alpha)`.
/// - Provides lightweight accessors so downstream code does not depend on
///   the internal layout.
///
/// Parameters
/// ----------
/// Constructed via [`HomogeneityOutcome::levene`]:
/// - `group_a`, `group_b`: `&[f64]`
///   Independent score series with at least 2 finite values each.
/// - `alpha`: `f64`
///   Two-tailed significance level used as the gate threshold.
///
/// Fields
/// ------
/// - `statistic`: `f64`
///   Levene F statistic on the median-centered absolute deviations.
/// - `p_value`: `f64`
///   Upper-tail F(1, n_a + n_b − 2) probability of `statistic`.
/// - `equal_variance`: `bool`
///   True when the data are compatible with equal variances at `alpha`.
///
/// Invariants
/// ----------
/// - `p_value` lies in [0, 1].
/// - `equal_variance == (p_value > alpha)` for the original call.
///
/// Performance
/// -----------
/// - Three scalars; `Copy`, cheap to embed in a t-test outcome.
///
/// Notes
/// -----
/// - A gate verdict, not a standalone conclusion about the study; it only
///   chooses between the pooled and Welch variance models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomogeneityOutcome {
    statistic: f64,
    p_value: f64,
    equal_variance: bool,
}

impl HomogeneityOutcome {
    /// Run the median-centered (Brown–Forsythe) Levene test on two groups.
    ///
    /// Parameters
    /// ----------
    /// - `group_a`: `&[f64]`
    ///   First group's scores; length ≥ 2, finite values.
    /// - `group_b`: `&[f64]`
    ///   Second group's scores; length ≥ 2, finite values.
    /// - `alpha`: `f64`
    ///   Significance level in (0, 1) used for the equal-variance gate,
    ///   typically `AnalysisConfig::alpha()`.
    ///
    /// Returns
    /// -------
    /// `TestResult<HomogeneityOutcome>`
    ///   - `Ok(outcome)` with the F statistic, p-value, and gate decision.
    ///   - `Err(TestError)` when validation rejects the inputs.
    ///
    /// Errors
    /// ------
    /// - `TestError::InsufficientData(n)` when either group has `n < 2`.
    /// - `TestError::NonFiniteScore(value)` on NaN or ±∞ scores.
    ///
    /// Panics
    /// ------
    /// - Never panics on validated input; degenerate zero-spread cases are
    ///   resolved by convention instead of dividing by zero.
    ///
    /// Notes
    /// -----
    /// - Two constant groups yield statistic 0, p-value 1, and
    ///   `equal_variance == true`: with no dispersion anywhere there is no
    ///   evidence against homogeneity.
    /// - If the within-group deviation spread is zero while the groups'
    ///   deviation levels differ (each group internally uniform but at
    ///   different spreads), the statistic is unbounded; the outcome
    ///   reports p-value 0 and `equal_variance == false`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use edumetrics::hypothesis::levene::HomogeneityOutcome;
    ///
    /// let tight = vec![50.0, 50.5, 49.5, 50.2, 49.8];
    /// let wide = vec![30.0, 90.0, 45.0, 80.0, 55.0];
    ///
    /// let outcome = HomogeneityOutcome::levene(&tight, &wide, 0.05).unwrap();
    ///
    /// assert!(!outcome.equal_variance());
    /// assert!((0.0..=1.0).contains(&outcome.p_value()));
    /// ```
    pub fn levene(group_a: &[f64], group_b: &[f64], alpha: f64) -> TestResult<Self> {
        validate_homogeneity_inputs(group_a, group_b)?;
        let deviations_a = calc_absolute_deviations(group_a);
        let deviations_b = calc_absolute_deviations(group_b);
        let (statistic, p_value) = calc_levene_f(&deviations_a, &deviations_b);

        Ok(HomogeneityOutcome { statistic, p_value, equal_variance: p_value > alpha })
    }

    /// Levene F statistic on the median-centered deviations.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Upper-tail F p-value of [`statistic`](Self::statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Equal-variance gate decision at the original alpha.
    pub fn equal_variance(&self) -> bool {
        self.equal_variance
    }
}

//
// ---------- Private helpers ----------
//

/// Absolute deviations from the group median, z = |x − median(group)|.
#[inline]
fn calc_absolute_deviations(group: &[f64]) -> Vec<f64> {
    let center = median(group);
    group.iter().map(|&x| (x - center).abs()).collect()
}

/// Two-group one-way ANOVA F on the deviation scores, with its p-value.
///
/// Parameters
/// ----------
/// - `deviations_a`, `deviations_b`: `&[f64]`
///   Median-centered absolute deviations per group, length ≥ 2 each.
///
/// Returns
/// -------
/// `(f64, f64)`
///   The F statistic (df₁ = 1, df₂ = n_a + n_b − 2) and its upper-tail
///   p-value.
///
/// Notes
/// -----
/// - Zero within-group dispersion is resolved by convention rather than
///   division: (0, 1) when the between-group dispersion is also zero,
///   (∞, 0) otherwise.
fn calc_levene_f(deviations_a: &[f64], deviations_b: &[f64]) -> (f64, f64) {
    let n_a = deviations_a.len() as f64;
    let n_b = deviations_b.len() as f64;
    let mean_a = mean(deviations_a);
    let mean_b = mean(deviations_b);
    let grand_mean = (mean_a * n_a + mean_b * n_b) / (n_a + n_b);

    let between = n_a * (mean_a - grand_mean).powi(2) + n_b * (mean_b - grand_mean).powi(2);
    let within: f64 = deviations_a.iter().map(|&z| (z - mean_a).powi(2)).sum::<f64>()
        + deviations_b.iter().map(|&z| (z - mean_b).powi(2)).sum::<f64>();
    let df_within = n_a + n_b - 2.0;

    if within == 0.0 {
        return if between == 0.0 { (0.0, 1.0) } else { (f64::INFINITY, 0.0) };
    }

    let statistic = between * df_within / within;
    let p_value = 1.0
        - FisherSnedecor::new(1.0, df_within)
            .expect("degrees of freedom are strictly positive after validation")
            .cdf(statistic);
    (statistic, p_value)
}
