//! hypothesis::ttest — paired and independent t-tests over score series.
//!
//! Purpose
//! -------
//! Implement the two hypothesis tests of an intervention study: the
//! dependent (paired) t-test on pretest/posttest scores from one group, and
//! the independent (unpaired) t-test between two different groups with a
//! variance-homogeneity gate selecting the pooled or Welch variance model.
//!
//! Key behaviors
//! -------------
//! - Paired: test whether the mean of per-student differences
//!   dᵢ = postᵢ − preᵢ differs from zero, with t = mean(d)/(std(d)/√n) and
//!   df = n − 1.
//! - Unpaired: run the Levene check first, then the pooled-variance
//!   statistic with df = n_a + n_b − 2 under equal variances, or the Welch
//!   statistic with the fractional Welch–Satterthwaite df otherwise. The
//!   gate protects the Type-I error rate against heteroscedastic groups,
//!   which a constant-df implementation would miss.
//! - Assemble a compact [`TTestOutcome`] with the statistic, two-tailed
//!   p-value, degrees of freedom, critical value, mean difference, the
//!   [`Decision`] of the two rejection rules, and (for the unpaired test)
//!   the embedded [`HomogeneityOutcome`] for audit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are validated before any statistic is computed; a constructed
//!   outcome always holds finite statistic, p-value in [0, 1], and
//!   strictly positive df.
//! - The unpaired statistic and mean difference are oriented
//!   group B − group A: swapping the groups negates both and changes
//!   nothing else.
//! - Zero-spread inputs never produce NaN or ±∞: identical paired series
//!   resolve to the exact null (statistic 0, p-value 1), and a zero-spread
//!   series with a nonzero mean difference fails with
//!   [`TestError::ZeroVariance`].
//!
//! Conventions
//! -----------
//! - Both tests are two-tailed at the config's alpha.
//! - Error handling uses [`TestError`] / [`TestResult`]; results are
//!   immutable value objects owned by the caller.
//!
//! Downstream usage
//! ----------------
//! - Presentation layers read the accessors to phrase reports; nothing in
//!   this module prints or plots.
//! - Each group's analysis is an independent, side-effect-free computation
//!   over its own arrays and may run concurrently with others.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact-null paired case, the df = n − 1 contract,
//!   a hand-checked rejection, shape/length validation, the zero-variance
//!   error, group-swap antisymmetry, Welch-path engagement with fractional
//!   df, and the equivalence of the two rejection rules.

use crate::config::AnalysisConfig;
use crate::hypothesis::decision::{Decision, Direction};
use crate::hypothesis::descriptive::{mean, mean_difference, sample_std, sample_variance};
use crate::hypothesis::errors::{TestError, TestResult};
use crate::hypothesis::levene::HomogeneityOutcome;
use crate::hypothesis::student;
use crate::hypothesis::validation::{validate_groups, validate_paired};

/// TTestOutcome — outcome of one paired or independent t-test.
///
/// Purpose
/// -------
/// Represent the full result of a single t-test invocation: the statistic
/// and its two-tailed p-value, the degrees of freedom and critical value
/// they were judged against, the oriented mean difference, the decision of
/// the two rejection rules, and the homogeneity verdict when one was taken.
///
/// Key behaviors
/// -------------
/// - Read-only after construction; all fields are reached through
///   accessors so downstream code does not depend on the layout.
/// - Carries the [`HomogeneityOutcome`] only for the unpaired test; the
///   paired test takes no variance gate and reports `None`.
///
/// Parameters
/// ----------
/// Constructed via [`TTestOutcome::paired`] or [`TTestOutcome::unpaired`];
/// see those constructors for the input contracts.
///
/// Fields
/// ------
/// - `statistic`: `f64`
///   The t statistic.
/// - `p_value`: `f64`
///   Two-tailed Student-t p-value of `statistic`.
/// - `degrees_of_freedom`: `f64`
///   n − 1 (paired), n_a + n_b − 2 (pooled), or the fractional Welch df.
/// - `critical_value`: `f64`
///   Positive two-tailed critical value at the config's alpha and the same
///   df.
/// - `mean_difference`: `f64`
///   mean(post − pre) for the paired test; mean(B) − mean(A) for the
///   unpaired test.
/// - `decision`: [`Decision`]
///   Both rejection verdicts and the direction of change.
/// - `homogeneity`: `Option<HomogeneityOutcome>`
///   The Levene verdict backing the variance-model choice; `None` for the
///   paired test.
///
/// Invariants
/// ----------
/// - `p_value` lies in [0, 1] and `degrees_of_freedom > 0`.
/// - `decision` was evaluated from exactly these fields and the original
///   alpha.
/// - `homogeneity.is_some()` iff the outcome came from the unpaired test.
///
/// Performance
/// -----------
/// - A handful of scalars; `Copy`, cheap to return by value and to hand to
///   reporting collaborators.
///
/// Notes
/// -----
/// - Designed as a value object; it does not retain the score arrays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestOutcome {
    statistic: f64,
    p_value: f64,
    degrees_of_freedom: f64,
    critical_value: f64,
    mean_difference: f64,
    decision: Decision,
    homogeneity: Option<HomogeneityOutcome>,
}

impl TTestOutcome {
    /// Run the dependent (paired) t-test on one group's pretest/posttest
    /// scores.
    ///
    /// Parameters
    /// ----------
    /// - `pretest`: `&[f64]`
    ///   Pretest scores, one per student, within `[0, config.max_score()]`.
    /// - `posttest`: `&[f64]`
    ///   Posttest scores, index-aligned with `pretest`.
    /// - `config`: `&AnalysisConfig`
    ///   Analysis-wide alpha and score ceiling.
    ///
    /// Returns
    /// -------
    /// `TestResult<TTestOutcome>`
    ///   The outcome with `mean_difference = mean(post − pre)`,
    ///   df = n − 1, and no embedded homogeneity verdict.
    ///
    /// Errors
    /// ------
    /// - `TestError::ShapeMismatch(..)` on unequal lengths.
    /// - `TestError::InsufficientData(n)` when `n < 2` (df would be 0).
    /// - `TestError::NonFiniteScore(..)` / `TestError::ScoreOutOfRange(..)`
    ///   from validation.
    /// - `TestError::ZeroVariance` when every difference is the same
    ///   nonzero value, leaving the statistic unbounded.
    ///
    /// Notes
    /// -----
    /// - A posttest identical to the pretest is the exact null: the outcome
    ///   reports statistic 0, p-value 1, and direction
    ///   [`Direction::None`] instead of a 0/0 artifact.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use edumetrics::config::AnalysisConfig;
    /// use edumetrics::hypothesis::ttest::TTestOutcome;
    ///
    /// let config = AnalysisConfig::new(0.05, 100.0).unwrap();
    /// let pretest = vec![55.0, 62.0, 48.0, 70.0, 66.0];
    /// let posttest = vec![63.0, 70.0, 55.0, 78.0, 71.0];
    ///
    /// let outcome = TTestOutcome::paired(&pretest, &posttest, &config).unwrap();
    ///
    /// assert_eq!(outcome.degrees_of_freedom(), 4.0);
    /// assert!(outcome.mean_difference() > 0.0);
    /// ```
    pub fn paired(pretest: &[f64], posttest: &[f64], config: &AnalysisConfig) -> TestResult<Self> {
        validate_paired(pretest, posttest, config.max_score())?;
        let differences: Vec<f64> =
            posttest.iter().zip(pretest).map(|(post, pre)| post - pre).collect();
        let n = differences.len() as f64;
        let mean_diff = mean(&differences);
        let spread = sample_std(&differences)?;
        let degrees_of_freedom = n - 1.0;

        let (statistic, p_value) = if spread == 0.0 {
            if mean_diff != 0.0 {
                return Err(TestError::ZeroVariance);
            }
            (0.0, 1.0)
        } else {
            let statistic = mean_diff / (spread / n.sqrt());
            (statistic, student::two_tailed_p_value(statistic, degrees_of_freedom))
        };

        Ok(Self::assemble(statistic, p_value, degrees_of_freedom, mean_diff, config, None))
    }

    /// Run the independent (unpaired) t-test between two groups, gated on
    /// the Levene homogeneity check.
    ///
    /// Parameters
    /// ----------
    /// - `group_a`: `&[f64]`
    ///   First group's scores (e.g. control); length ≥ 2.
    /// - `group_b`: `&[f64]`
    ///   Second group's scores (e.g. experimental); length ≥ 2, not
    ///   necessarily equal to `group_a` in length.
    /// - `config`: `&AnalysisConfig`
    ///   Analysis-wide alpha and score ceiling.
    ///
    /// Returns
    /// -------
    /// `TestResult<TTestOutcome>`
    ///   The outcome with `mean_difference = mean(group_b) − mean(group_a)`
    ///   and the Levene verdict embedded for audit. Under equal variances
    ///   the statistic uses the pooled model with df = n_a + n_b − 2;
    ///   otherwise the Welch model with the fractional
    ///   Welch–Satterthwaite df.
    ///
    /// Errors
    /// ------
    /// - `TestError::InsufficientData(n)` when either group has `n < 2`.
    /// - `TestError::NonFiniteScore(..)` / `TestError::ScoreOutOfRange(..)`
    ///   from validation.
    /// - `TestError::ZeroVariance` when both groups are constant at
    ///   different levels.
    ///
    /// Notes
    /// -----
    /// - Two constant groups at the same level are the exact null:
    ///   statistic 0, p-value 1, direction [`Direction::None`].
    /// - Swapping the groups negates `statistic` and `mean_difference` and
    ///   leaves p-value, critical value, df, and the homogeneity verdict
    ///   unchanged.
    pub fn unpaired(group_a: &[f64], group_b: &[f64], config: &AnalysisConfig) -> TestResult<Self> {
        validate_groups(group_a, group_b, config.max_score())?;
        let homogeneity = HomogeneityOutcome::levene(group_a, group_b, config.alpha())?;
        let mean_diff = mean_difference(group_a, group_b);
        let n_a = group_a.len() as f64;
        let n_b = group_b.len() as f64;
        let var_a = sample_variance(group_a)?;
        let var_b = sample_variance(group_b)?;

        let (statistic, p_value, degrees_of_freedom) = if homogeneity.equal_variance() {
            calc_pooled(mean_diff, var_a, var_b, n_a, n_b)?
        } else {
            calc_welch(mean_diff, var_a, var_b, n_a, n_b)
        };

        Ok(Self::assemble(
            statistic,
            p_value,
            degrees_of_freedom,
            mean_diff,
            config,
            Some(homogeneity),
        ))
    }

    /// The t statistic.
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Two-tailed p-value of [`statistic`](Self::statistic).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Degrees of freedom; fractional on the Welch path.
    pub fn degrees_of_freedom(&self) -> f64 {
        self.degrees_of_freedom
    }

    /// Positive two-tailed critical value at the original alpha and df.
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    /// Oriented mean difference the test was computed from.
    pub fn mean_difference(&self) -> f64 {
        self.mean_difference
    }

    /// The decision of the two rejection rules plus the direction.
    pub fn decision(&self) -> Decision {
        self.decision
    }

    /// True when `|statistic| > critical_value`.
    pub fn reject_by_statistic(&self) -> bool {
        self.decision.reject_by_statistic
    }

    /// True when `p_value ≤ alpha`.
    pub fn reject_by_pvalue(&self) -> bool {
        self.decision.reject_by_pvalue
    }

    /// Direction of the measured change.
    pub fn direction(&self) -> Direction {
        self.decision.direction
    }

    /// The embedded Levene verdict; `None` for the paired test.
    pub fn homogeneity(&self) -> Option<HomogeneityOutcome> {
        self.homogeneity
    }

    /// Resolve the critical value, evaluate the decision policy, and pack
    /// the outcome.
    fn assemble(
        statistic: f64, p_value: f64, degrees_of_freedom: f64, mean_difference: f64,
        config: &AnalysisConfig, homogeneity: Option<HomogeneityOutcome>,
    ) -> Self {
        let critical_value = student::critical_value(config.alpha(), degrees_of_freedom);
        let decision =
            Decision::evaluate(statistic, p_value, critical_value, config.alpha(), mean_difference);
        TTestOutcome {
            statistic,
            p_value,
            degrees_of_freedom,
            critical_value,
            mean_difference,
            decision,
            homogeneity,
        }
    }
}

//
// ---------- Private helpers ----------
//

/// Pooled-variance independent t statistic, p-value, and df.
///
/// Returns `TestError::ZeroVariance` when both groups are constant at
/// different levels; two constant groups at the same level resolve to the
/// exact null (0, 1, df).
#[inline]
fn calc_pooled(
    mean_diff: f64, var_a: f64, var_b: f64, n_a: f64, n_b: f64,
) -> TestResult<(f64, f64, f64)> {
    let degrees_of_freedom = n_a + n_b - 2.0;
    let pooled = ((n_a - 1.0) * var_a + (n_b - 1.0) * var_b) / degrees_of_freedom;
    let standard_error = (pooled * (1.0 / n_a + 1.0 / n_b)).sqrt();

    if standard_error == 0.0 {
        if mean_diff != 0.0 {
            return Err(TestError::ZeroVariance);
        }
        return Ok((0.0, 1.0, degrees_of_freedom));
    }

    let statistic = mean_diff / standard_error;
    Ok((statistic, student::two_tailed_p_value(statistic, degrees_of_freedom), degrees_of_freedom))
}

/// Welch independent t statistic, p-value, and fractional
/// Welch–Satterthwaite df.
///
/// The unequal-variance gate only fires when at least one group has
/// positive spread, so the standard error and the df denominator are
/// strictly positive here.
#[inline]
fn calc_welch(mean_diff: f64, var_a: f64, var_b: f64, n_a: f64, n_b: f64) -> (f64, f64, f64) {
    let term_a = var_a / n_a;
    let term_b = var_b / n_b;
    let standard_error = (term_a + term_b).sqrt();
    let degrees_of_freedom = (term_a + term_b).powi(2)
        / (term_a.powi(2) / (n_a - 1.0) + term_b.powi(2) / (n_b - 1.0));

    let statistic = mean_diff / standard_error;
    (statistic, student::two_tailed_p_value(statistic, degrees_of_freedom), degrees_of_freedom)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The exact-null paired case (posttest == pretest).
    // - The df = n − 1 contract and a hand-checked paired rejection.
    // - Validation surfacing (shape mismatch, insufficient data) and the
    //   zero-variance error on a constant shift.
    // - Unpaired orientation and antisymmetry under group swap.
    // - Welch-path engagement: fractional df below n_a + n_b − 2.
    // - Equivalence of the two rejection rules across datasets.
    //
    // They intentionally DO NOT cover:
    // - The Levene internals (levene module) or the tail-quantity math
    //   (student module); both are unit-tested where they live.
    // -------------------------------------------------------------------------

    fn config() -> AnalysisConfig {
        AnalysisConfig::new(0.05, 100.0).expect("conventional settings are valid")
    }

    #[test]
    // Purpose
    // -------
    // Verify the exact-null contract: a posttest identical to the pretest
    // yields statistic 0, p-value 1, zero mean difference, and no
    // direction, rather than a 0/0 artifact.
    //
    // Given
    // -----
    // - A pretest of five scores and a posttest equal to it elementwise.
    //
    // Expect
    // ------
    // - statistic == 0, p_value == 1, mean_difference == 0,
    //   direction == None, and neither rule rejects.
    fn paired_identical_series_is_exact_null() {
        // Arrange
        let scores = vec![55.0_f64, 62.0, 48.0, 70.0, 66.0];

        // Act
        let outcome =
            TTestOutcome::paired(&scores, &scores, &config()).expect("identical series are legal");

        // Assert
        assert_eq!(outcome.statistic(), 0.0);
        assert_eq!(outcome.p_value(), 1.0);
        assert_eq!(outcome.mean_difference(), 0.0);
        assert_eq!(outcome.direction(), Direction::None);
        assert!(!outcome.reject_by_statistic());
        assert!(!outcome.reject_by_pvalue());
    }

    #[test]
    // Purpose
    // -------
    // Pin the degrees-of-freedom contract for the paired test.
    //
    // Given
    // -----
    // - Ten students with varying gains.
    //
    // Expect
    // ------
    // - degrees_of_freedom == 9 exactly.
    fn paired_ten_students_has_nine_degrees_of_freedom() {
        // Arrange
        let pretest = vec![55.0_f64, 62.0, 48.0, 70.0, 66.0, 59.0, 51.0, 64.0, 58.0, 61.0];
        let posttest = vec![63.0_f64, 70.0, 55.0, 78.0, 71.0, 66.0, 60.0, 73.0, 64.0, 69.0];

        // Act
        let outcome =
            TTestOutcome::paired(&pretest, &posttest, &config()).expect("valid paired input");

        // Assert
        assert_eq!(outcome.degrees_of_freedom(), 9.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify a hand-checked paired rejection: consistent gains across ten
    // students produce a large positive statistic, a tiny p-value, and an
    // improved direction, with both rejection rules agreeing.
    //
    // Given
    // -----
    // - Differences [8, 8, 7, 8, 5, 7, 9, 9, 6, 8] with mean 7.5 and
    //   sample std ≈ 1.2693, so t ≈ 18.7 against t*(0.05, 9) ≈ 2.26.
    //
    // Expect
    // ------
    // - statistic ≈ 18.7, both rules reject, direction Improved.
    fn paired_consistent_gains_reject_the_null() {
        // Arrange
        let pretest = vec![55.0_f64, 62.0, 48.0, 70.0, 66.0, 59.0, 51.0, 64.0, 58.0, 61.0];
        let posttest = vec![63.0_f64, 70.0, 55.0, 78.0, 71.0, 66.0, 60.0, 73.0, 64.0, 69.0];

        // Act
        let outcome =
            TTestOutcome::paired(&pretest, &posttest, &config()).expect("valid paired input");

        // Assert
        assert!((outcome.mean_difference() - 7.5).abs() < 1e-12);
        assert!((outcome.statistic() - 18.68).abs() < 0.05, "t = {}", outcome.statistic());
        assert!(outcome.p_value() < 1e-6);
        assert!(outcome.reject_by_statistic());
        assert!(outcome.reject_by_pvalue());
        assert_eq!(outcome.direction(), Direction::Improved);
    }

    #[test]
    // Purpose
    // -------
    // Ensure the paired engine surfaces validation failures and the
    // zero-variance degenerate case as typed errors.
    //
    // Given
    // -----
    // - Mismatched lengths, a single pair, and a constant nonzero shift.
    //
    // Expect
    // ------
    // - ShapeMismatch, InsufficientData, and ZeroVariance respectively.
    fn paired_degenerate_inputs_return_typed_errors() {
        // Arrange
        let pretest = vec![55.0_f64, 62.0, 48.0];
        let cfg = config();

        // Act & Assert: length mismatch
        match TTestOutcome::paired(&pretest, &[60.0, 70.0], &cfg) {
            Err(TestError::ShapeMismatch(left, right)) => assert_eq!((left, right), (3, 2)),
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }

        // Act & Assert: single pair
        match TTestOutcome::paired(&[50.0], &[60.0], &cfg) {
            Err(TestError::InsufficientData(n)) => assert_eq!(n, 1),
            other => panic!("expected InsufficientData(1), got {other:?}"),
        }

        // Act & Assert: constant nonzero shift
        let shifted: Vec<f64> = pretest.iter().map(|&x| x + 5.0).collect();
        match TTestOutcome::paired(&pretest, &shifted, &cfg) {
            Err(TestError::ZeroVariance) => (),
            other => panic!("expected ZeroVariance, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the unpaired orientation and the swap property: the statistic
    // and mean difference negate under a group swap while the p-value,
    // critical value, df, and homogeneity verdict stay fixed.
    //
    // Given
    // -----
    // - Two similar-spread groups at different levels.
    //
    // Expect
    // ------
    // - mean_difference == mean(B) − mean(A); swapping negates statistic
    //   and mean_difference only.
    fn unpaired_swap_negates_statistic_and_mean_difference_only() {
        // Arrange
        let group_a = vec![54.0_f64, 47.0, 63.0, 58.0, 45.0, 59.0, 66.0, 50.0];
        let group_b = vec![68.0_f64, 71.0, 60.0, 79.0, 83.0, 59.0, 72.0, 66.0];
        let cfg = config();

        // Act
        let forward = TTestOutcome::unpaired(&group_a, &group_b, &cfg).expect("valid groups");
        let reversed = TTestOutcome::unpaired(&group_b, &group_a, &cfg).expect("valid groups");

        // Assert: orientation
        let expected_diff = mean(&group_b) - mean(&group_a);
        assert!((forward.mean_difference() - expected_diff).abs() < 1e-12);
        assert_eq!(forward.direction(), Direction::Improved);

        // Assert: antisymmetric pieces
        assert!((forward.statistic() + reversed.statistic()).abs() < 1e-12);
        assert!((forward.mean_difference() + reversed.mean_difference()).abs() < 1e-12);

        // Assert: invariant pieces
        assert!((forward.p_value() - reversed.p_value()).abs() < 1e-12);
        assert!((forward.critical_value() - reversed.critical_value()).abs() < 1e-12);
        assert!((forward.degrees_of_freedom() - reversed.degrees_of_freedom()).abs() < 1e-12);
        assert_eq!(
            forward.homogeneity().expect("unpaired outcomes embed the verdict").equal_variance(),
            reversed.homogeneity().expect("unpaired outcomes embed the verdict").equal_variance()
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify the Welch path engages on visibly different spreads: the
    // homogeneity gate fails, and the reported df is fractional and
    // strictly below the pooled df n_a + n_b − 2.
    //
    // Given
    // -----
    // - A group clustered within ±0.5 of 50 and a group spread over
    //   [30, 90], five students each.
    //
    // Expect
    // ------
    // - equal_variance false; df non-integer; df < 8.
    fn unpaired_heteroscedastic_groups_take_the_welch_path() {
        // Arrange
        let tight = vec![50.0_f64, 50.5, 49.5, 50.2, 49.8];
        let wide = vec![30.0_f64, 90.0, 45.0, 80.0, 55.0];

        // Act
        let outcome = TTestOutcome::unpaired(&tight, &wide, &config()).expect("valid groups");

        // Assert
        let verdict = outcome.homogeneity().expect("unpaired outcomes embed the verdict");
        assert!(!verdict.equal_variance());
        let df = outcome.degrees_of_freedom();
        assert!(df < 8.0, "Welch df should undercut the pooled df; got {df}");
        assert!((df - df.round()).abs() > 1e-6, "Welch df should be fractional; got {df}");
        assert_eq!(outcome.reject_by_statistic(), outcome.reject_by_pvalue());
    }

    #[test]
    // Purpose
    // -------
    // Ensure constant unpaired groups follow the documented degenerate
    // contract: same level is the exact null, different levels are a
    // zero-variance error.
    //
    // Given
    // -----
    // - Two constant groups at 70, and a constant group at 70 against a
    //   constant group at 55.
    //
    // Expect
    // ------
    // - Same level: statistic 0, p-value 1, direction None.
    // - Different levels: `TestError::ZeroVariance`.
    fn unpaired_constant_groups_follow_degenerate_contract() {
        // Arrange
        let level_a = vec![70.0_f64, 70.0, 70.0];
        let level_b = vec![55.0_f64, 55.0, 55.0, 55.0];
        let cfg = config();

        // Act & Assert: same level
        let null = TTestOutcome::unpaired(&level_a, &level_a, &cfg).expect("legal input");
        assert_eq!(null.statistic(), 0.0);
        assert_eq!(null.p_value(), 1.0);
        assert_eq!(null.direction(), Direction::None);

        // Act & Assert: different levels
        match TTestOutcome::unpaired(&level_a, &level_b, &cfg) {
            Err(TestError::ZeroVariance) => (),
            other => panic!("expected ZeroVariance, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Assert the decision-rule equivalence property across datasets on
    // both sides of significance: whenever alpha and df are consistent,
    // `reject_by_statistic == reject_by_pvalue`.
    //
    // Given
    // -----
    // - A strongly separated pair, an overlapping pair, and a paired
    //   dataset with mild gains.
    //
    // Expect
    // ------
    // - The two flags agree for every outcome.
    fn rejection_rules_agree_across_datasets() {
        // Arrange
        let cfg = config();
        let separated_a = vec![45.0_f64, 50.0, 48.0, 52.0, 47.0, 51.0];
        let separated_b = vec![78.0_f64, 84.0, 80.0, 86.0, 79.0, 83.0];
        let overlapping_a = vec![55.0_f64, 61.0, 49.0, 66.0, 58.0, 52.0];
        let overlapping_b = vec![57.0_f64, 60.0, 52.0, 68.0, 55.0, 56.0];
        let pretest = vec![52.0_f64, 61.0, 47.0, 68.0, 55.0, 63.0, 50.0, 59.0];
        let posttest = vec![54.0_f64, 60.0, 50.0, 71.0, 58.0, 62.0, 55.0, 61.0];

        // Act
        let outcomes = vec![
            TTestOutcome::unpaired(&separated_a, &separated_b, &cfg).expect("valid groups"),
            TTestOutcome::unpaired(&overlapping_a, &overlapping_b, &cfg).expect("valid groups"),
            TTestOutcome::paired(&pretest, &posttest, &cfg).expect("valid paired input"),
        ];

        // Assert
        for outcome in outcomes {
            assert_eq!(
                outcome.reject_by_statistic(),
                outcome.reject_by_pvalue(),
                "rules disagree at t = {}, p = {}, t* = {}",
                outcome.statistic(),
                outcome.p_value(),
                outcome.critical_value()
            );
        }
    }
}
