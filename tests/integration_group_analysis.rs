//! Integration tests for the control-vs-experimental study pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end outcome analysis: from raw score arrays,
//!   through the paired and independent t-tests with their homogeneity
//!   gate and decision policy, to the learning-gain and mastery metrics.
//! - Exercise a realistic study shape (two groups of twelve students, a
//!   mildly improving control group and a strongly improving experimental
//!   group) rather than toy edge cases only.
//!
//! Coverage
//! --------
//! - `config`:
//!   - `AnalysisConfig` construction with conventional settings.
//! - `hypothesis::ttest`:
//!   - Paired tests on both groups, including a borderline
//!     non-significant control result.
//!   - Independent tests on the pretest baseline and the posttest
//!     endline, with the pooled path and its df = n_a + n_b − 2.
//!   - Equivalence of the two rejection rules across every outcome.
//! - `hypothesis::levene`:
//!   - The embedded homogeneity verdict on similar-spread groups.
//! - `outcomes::gains` and `outcomes::mastery`:
//!   - Per-student gain records (positive and negative) and the mastery
//!     percentages of both groups.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (guards,
//!   descriptive moments, tail quantities) — covered by unit tests.
//! - Python bindings and input conversion — exercised at a higher
//!   integration level from Python.
//! - The Welch path and degenerate-variance conventions — pinned by unit
//!   tests in the ttest and levene modules.

use edumetrics::config::AnalysisConfig;
use edumetrics::hypothesis::{Direction, TTestOutcome};
use edumetrics::outcomes::{learning_gains, mastery_rate};

/// Purpose
/// -------
/// Provide the conventional analysis settings shared by every test in this
/// suite: alpha = 0.05, max_score = 100.
///
/// Invariants
/// ----------
/// - Panics if the constructor rejects the settings; that is treated as a
///   test-time configuration error, not a behavior under test.
fn study_config() -> AnalysisConfig {
    AnalysisConfig::new(0.05, 100.0).expect("conventional settings should be accepted")
}

/// Purpose
/// -------
/// Control-group scores: twelve students with small, mixed pretest-to-
/// posttest changes (mean gain ≈ 1.08 points), chosen so the paired test
/// lands just short of significance at alpha = 0.05 (t ≈ 2.17 against
/// t* ≈ 2.20 at df = 11).
///
/// Returns
/// -------
/// - `(pretest, posttest)` index-aligned score vectors.
fn control_scores() -> (Vec<f64>, Vec<f64>) {
    let pretest = vec![52.0, 48.0, 61.0, 55.0, 47.0, 58.0, 63.0, 50.0, 56.0, 49.0, 60.0, 54.0];
    let posttest = vec![54.0, 47.0, 63.0, 58.0, 45.0, 59.0, 66.0, 50.0, 58.0, 48.0, 63.0, 55.0];
    (pretest, posttest)
}

/// Purpose
/// -------
/// Experimental-group scores: twelve students with large, consistent
/// gains (mean gain ≈ 17.2 points), so the paired test rejects decisively
/// and the posttest endline sits well above the control group's.
///
/// Returns
/// -------
/// - `(pretest, posttest)` index-aligned score vectors.
fn experimental_scores() -> (Vec<f64>, Vec<f64>) {
    let pretest = vec![50.0, 53.0, 47.0, 59.0, 62.0, 46.0, 55.0, 51.0, 58.0, 44.0, 57.0, 60.0];
    let posttest = vec![68.0, 71.0, 60.0, 79.0, 83.0, 59.0, 72.0, 66.0, 77.0, 58.0, 74.0, 81.0];
    (pretest, posttest)
}

#[test]
// Purpose
// -------
// Verify the paired tests tell the two groups apart: the control group's
// mixed gains stay below the significance bar while the experimental
// group's consistent gains reject decisively, with both rejection rules
// agreeing in each case.
//
// Given
// -----
// - The control and experimental datasets and conventional settings.
//
// Expect
// ------
// - Control: df = 11, direction Improved, neither rule rejects, p-value
//   just above alpha (between 0.05 and 0.10).
// - Experimental: direction Improved, both rules reject, p-value below
//   1e-6, mean difference ≈ 17.17.
fn paired_tests_separate_control_from_experimental() {
    let config = study_config();
    let (control_pre, control_post) = control_scores();
    let (experimental_pre, experimental_post) = experimental_scores();

    let control = TTestOutcome::paired(&control_pre, &control_post, &config)
        .expect("control scores are valid paired input");
    assert_eq!(control.degrees_of_freedom(), 11.0);
    assert_eq!(control.direction(), Direction::Improved);
    assert!(!control.reject_by_statistic());
    assert!(!control.reject_by_pvalue());
    assert!(
        control.p_value() > 0.05 && control.p_value() < 0.10,
        "control p-value should be borderline; got {}",
        control.p_value()
    );

    let experimental = TTestOutcome::paired(&experimental_pre, &experimental_post, &config)
        .expect("experimental scores are valid paired input");
    assert_eq!(experimental.direction(), Direction::Improved);
    assert!(experimental.reject_by_statistic());
    assert!(experimental.reject_by_pvalue());
    assert!(experimental.p_value() < 1e-6);
    assert!((experimental.mean_difference() - 206.0 / 12.0).abs() < 1e-12);
}

#[test]
// Purpose
// -------
// Verify the independent tests across groups: the pretest baseline shows
// no significant difference (the groups start comparable), the posttest
// endline separates them decisively, and both comparisons take the pooled
// path with df = n_a + n_b − 2 because the spreads are similar.
//
// Given
// -----
// - Control and experimental pretest and posttest vectors.
//
// Expect
// ------
// - Baseline: homogeneity verdict embedded, equal variances, df = 22,
//   no rejection by either rule.
// - Endline: equal variances, df = 22, both rules reject, mean difference
//   ≈ +15.17 in favor of the experimental group, direction Improved.
fn unpaired_tests_compare_baseline_and_endline() {
    let config = study_config();
    let (control_pre, control_post) = control_scores();
    let (experimental_pre, experimental_post) = experimental_scores();

    let baseline = TTestOutcome::unpaired(&control_pre, &experimental_pre, &config)
        .expect("pretest groups are valid input");
    let baseline_verdict = baseline.homogeneity().expect("unpaired outcomes embed the verdict");
    assert!(baseline_verdict.equal_variance());
    assert_eq!(baseline.degrees_of_freedom(), 22.0);
    assert!(!baseline.reject_by_statistic());
    assert!(!baseline.reject_by_pvalue());

    let endline = TTestOutcome::unpaired(&control_post, &experimental_post, &config)
        .expect("posttest groups are valid input");
    let endline_verdict = endline.homogeneity().expect("unpaired outcomes embed the verdict");
    assert!(endline_verdict.equal_variance());
    assert_eq!(endline.degrees_of_freedom(), 22.0);
    assert!(endline.reject_by_statistic());
    assert!(endline.reject_by_pvalue());
    assert_eq!(endline.direction(), Direction::Improved);
    assert!((endline.mean_difference() - (848.0 / 12.0 - 666.0 / 12.0)).abs() < 1e-9);
}

#[test]
// Purpose
// -------
// Assert the decision-rule equivalence property across the full study:
// every outcome the pipeline produces, significant or not, reports the
// same verdict through both rejection rules.
//
// Given
// -----
// - All four tests of the study (two paired, two unpaired).
//
// Expect
// ------
// - `reject_by_statistic == reject_by_pvalue` for each outcome, and every
//   p-value lies in [0, 1] with a positive critical value.
fn rejection_rules_agree_across_the_whole_study() {
    let config = study_config();
    let (control_pre, control_post) = control_scores();
    let (experimental_pre, experimental_post) = experimental_scores();

    let outcomes = vec![
        TTestOutcome::paired(&control_pre, &control_post, &config).expect("valid paired input"),
        TTestOutcome::paired(&experimental_pre, &experimental_post, &config)
            .expect("valid paired input"),
        TTestOutcome::unpaired(&control_pre, &experimental_pre, &config).expect("valid groups"),
        TTestOutcome::unpaired(&control_post, &experimental_post, &config).expect("valid groups"),
    ];

    for outcome in outcomes {
        assert_eq!(
            outcome.reject_by_statistic(),
            outcome.reject_by_pvalue(),
            "rules disagree at t = {}, p = {}, t* = {}",
            outcome.statistic(),
            outcome.p_value(),
            outcome.critical_value()
        );
        assert!((0.0..=1.0).contains(&outcome.p_value()));
        assert!(outcome.critical_value() > 0.0);
    }
}

#[test]
// Purpose
// -------
// Verify the outcome-metric path end to end: per-student gain records for
// both groups (including a negative gain in the control group) and the
// mastery percentages of the posttest scores.
//
// Given
// -----
// - Both groups' score vectors with max_score = 100.
//
// Expect
// ------
// - One gain record per student; control student 0 gains 4.17% and
//   student 1 declines by 1.92%; the experimental mean gain exceeds the
//   control mean gain.
// - Mastery: no control student exceeds 80% of the ceiling (0%), while
//   two experimental students do (16.67%).
fn outcome_metrics_summarize_both_groups() {
    let (control_pre, control_post) = control_scores();
    let (experimental_pre, experimental_post) = experimental_scores();

    let control_gains =
        learning_gains(&control_pre, &control_post, 100.0).expect("control gains are defined");
    let experimental_gains = learning_gains(&experimental_pre, &experimental_post, 100.0)
        .expect("experimental gains are defined");
    assert_eq!(control_gains.len(), 12);
    assert_eq!(experimental_gains.len(), 12);
    assert_eq!(control_gains[0].gain_percent, 4.17);
    assert_eq!(control_gains[1].gain_percent, -1.92);

    let mean_of = |records: &[edumetrics::outcomes::GainRecord]| {
        records.iter().map(|r| r.gain_percent).sum::<f64>() / records.len() as f64
    };
    assert!(mean_of(&experimental_gains) > mean_of(&control_gains));

    let control_mastery = mastery_rate(&control_post, 100.0).expect("valid scores");
    assert_eq!(control_mastery.mastered_count(), 0);
    assert_eq!(control_mastery.mastery_percent(), 0.0);

    let experimental_mastery = mastery_rate(&experimental_post, 100.0).expect("valid scores");
    assert_eq!(experimental_mastery.mastered_count(), 2);
    assert_eq!(experimental_mastery.total_count(), 12);
    assert_eq!(experimental_mastery.mastery_percent(), 16.67);
}
