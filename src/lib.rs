//! edumetrics — intervention outcome analysis with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the outcome-analysis engines to Python via the `_edumetrics`
//! extension module. The crate answers one question about an educational
//! intervention: did it produce a statistically significant and practically
//! meaningful change in student performance, given paired pretest/posttest
//! scores for a control and an experimental group?
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`config`, `hypothesis`, `outcomes`)
//!   as the public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_edumetrics` Python extension when the `python-bindings` feature is
//!   enabled.
//! - Create and register Python submodules (`hypothesis`, `outcomes`) under
//!   `edumetrics` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible classes mirror
//!   the invariants and signatures of their Rust counterparts
//!   (`TTestOutcome`, `GainRecord`, `MasteryOutcome`).
//! - Every engine operation is a pure function of its explicit inputs;
//!   each group's analysis is independent and side-effect free.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_edumetrics.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `edumetrics` package.
//! - Errors from core Rust code are propagated as typed error enums
//!   internally and converted to `ValueError` at the PyO3 boundary.
//! - Presentation (reports, charts) is a consumer of the plain result
//!   objects; the engines have no display dependency.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_edumetrics` module defined
//!   here and wraps its classes in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite under `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed and queried from Python.

pub mod config;
pub mod hypothesis;
pub mod outcomes;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    config::AnalysisConfig,
    hypothesis::ttest::TTestOutcome,
    outcomes::{
        gains::{GainRecord, learning_gains},
        mastery::{MasteryOutcome, mastery_rate},
    },
    utils::extract_scores,
};

/// PairedTTest — Python-facing wrapper for the dependent t-test.
///
/// Purpose
/// -------
/// Represent the result of a dependent (paired) t-test on one group's
/// pretest/posttest scores when called from Python, forwarding all
/// computation to [`TTestOutcome::paired`].
///
/// Key behaviors
/// -------------
/// - Convert Python score containers into owned `f64` buffers.
/// - Run the paired test and store the outcome internally.
/// - Expose scalar accessors (`statistic`, `pvalue`, `degrees_of_freedom`,
///   `critical_value`, `mean_difference`, the two rejection flags, and the
///   `direction` label) as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `PairedTTest(pretest, posttest, alpha=0.05, max_score=100.0)`:
/// - `pretest`, `posttest`: array-likes of `f64`, index-aligned.
/// - `alpha`: two-tailed significance level in (0, 1).
/// - `max_score`: finite, positive score ceiling for range validation.
///
/// Fields
/// ------
/// - `inner`: [`TTestOutcome`]
///   Rust-side outcome holding the full test result used by the accessors.
///
/// Notes
/// -----
/// - This type is intended for Python; native Rust code should call
///   [`TTestOutcome::paired`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "edumetrics.hypothesis")]
pub struct PairedTTest {
    /// The paired test result struct.
    inner: TTestOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PairedTTest {
    /// Result of the dependent t-test on one group's pretest/posttest pair.
    #[new]
    #[pyo3(
        text_signature = "(pretest, posttest, /, alpha=0.05, max_score=100.0)",
        signature = (pretest, posttest, alpha = 0.05, max_score = 100.0)
    )]
    pub fn paired<'py>(
        pretest: &Bound<'py, PyAny>, posttest: &Bound<'py, PyAny>, alpha: f64, max_score: f64,
    ) -> PyResult<PairedTTest> {
        let pre = extract_scores(pretest, "pretest")?;
        let post = extract_scores(posttest, "posttest")?;
        let config = AnalysisConfig::new(alpha, max_score)?;
        let inner = TTestOutcome::paired(&pre, &post, &config)?;
        Ok(PairedTTest { inner })
    }

    /// The t statistic.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// Two-tailed p-value of the statistic.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Degrees of freedom (n − 1).
    #[getter]
    pub fn degrees_of_freedom(&self) -> f64 {
        self.inner.degrees_of_freedom()
    }

    /// Positive two-tailed critical value at the configured alpha.
    #[getter]
    pub fn critical_value(&self) -> f64 {
        self.inner.critical_value()
    }

    /// Mean of the per-student differences (posttest − pretest).
    #[getter]
    pub fn mean_difference(&self) -> f64 {
        self.inner.mean_difference()
    }

    /// True when |statistic| exceeds the critical value.
    #[getter]
    pub fn reject_by_statistic(&self) -> bool {
        self.inner.reject_by_statistic()
    }

    /// True when the p-value is at most alpha.
    #[getter]
    pub fn reject_by_pvalue(&self) -> bool {
        self.inner.reject_by_pvalue()
    }

    /// Direction of the change: "improved", "declined", or "none".
    #[getter]
    pub fn direction(&self) -> &'static str {
        self.inner.direction().as_str()
    }
}

/// UnpairedTTest — Python-facing wrapper for the independent t-test.
///
/// Purpose
/// -------
/// Represent the result of an independent t-test between two groups when
/// called from Python, forwarding all computation to
/// [`TTestOutcome::unpaired`], including the Levene homogeneity gate that
/// selects the pooled or Welch variance model.
///
/// Key behaviors
/// -------------
/// - Convert Python score containers into owned `f64` buffers.
/// - Run the Levene check and the gated independent test, storing the
///   outcome internally.
/// - Expose the same scalar accessors as [`PairedTTest`] plus the embedded
///   homogeneity verdict (`levene_statistic`, `levene_pvalue`,
///   `equal_variance`).
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `UnpairedTTest(group_a, group_b, alpha=0.05, max_score=100.0)`:
/// - `group_a`, `group_b`: array-likes of `f64`; lengths may differ.
/// - `alpha`, `max_score`: as in [`PairedTTest`].
///
/// Fields
/// ------
/// - `inner`: [`TTestOutcome`]
///   Rust-side outcome with the embedded homogeneity verdict.
///
/// Notes
/// -----
/// - The statistic and mean difference are oriented group B − group A.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "edumetrics.hypothesis")]
pub struct UnpairedTTest {
    /// The independent test result struct.
    inner: TTestOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl UnpairedTTest {
    /// Result of the independent t-test between two groups.
    #[new]
    #[pyo3(
        text_signature = "(group_a, group_b, /, alpha=0.05, max_score=100.0)",
        signature = (group_a, group_b, alpha = 0.05, max_score = 100.0)
    )]
    pub fn unpaired<'py>(
        group_a: &Bound<'py, PyAny>, group_b: &Bound<'py, PyAny>, alpha: f64, max_score: f64,
    ) -> PyResult<UnpairedTTest> {
        let a = extract_scores(group_a, "group_a")?;
        let b = extract_scores(group_b, "group_b")?;
        let config = AnalysisConfig::new(alpha, max_score)?;
        let inner = TTestOutcome::unpaired(&a, &b, &config)?;
        Ok(UnpairedTTest { inner })
    }

    /// The t statistic, oriented group B − group A.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.statistic()
    }

    /// Two-tailed p-value of the statistic.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Degrees of freedom; fractional on the Welch path.
    #[getter]
    pub fn degrees_of_freedom(&self) -> f64 {
        self.inner.degrees_of_freedom()
    }

    /// Positive two-tailed critical value at the configured alpha.
    #[getter]
    pub fn critical_value(&self) -> f64 {
        self.inner.critical_value()
    }

    /// Difference of group means, mean(B) − mean(A).
    #[getter]
    pub fn mean_difference(&self) -> f64 {
        self.inner.mean_difference()
    }

    /// True when |statistic| exceeds the critical value.
    #[getter]
    pub fn reject_by_statistic(&self) -> bool {
        self.inner.reject_by_statistic()
    }

    /// True when the p-value is at most alpha.
    #[getter]
    pub fn reject_by_pvalue(&self) -> bool {
        self.inner.reject_by_pvalue()
    }

    /// Direction of the change: "improved", "declined", or "none".
    #[getter]
    pub fn direction(&self) -> &'static str {
        self.inner.direction().as_str()
    }

    /// Levene F statistic of the homogeneity check.
    #[getter]
    pub fn levene_statistic(&self) -> f64 {
        self.inner.homogeneity().expect("unpaired outcomes embed the homogeneity check").statistic()
    }

    /// Levene p-value of the homogeneity check.
    #[getter]
    pub fn levene_pvalue(&self) -> f64 {
        self.inner.homogeneity().expect("unpaired outcomes embed the homogeneity check").p_value()
    }

    /// True when the pooled-variance model was selected.
    #[getter]
    pub fn equal_variance(&self) -> bool {
        self.inner
            .homogeneity()
            .expect("unpaired outcomes embed the homogeneity check")
            .equal_variance()
    }
}

/// LearningGains — Python-facing wrapper for the normalized-gain metric.
///
/// Runs [`learning_gains`] at construction and exposes the per-student
/// records; the `gains` property returns the gain percentages as a numpy
/// array for direct plotting.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "edumetrics.outcomes")]
pub struct LearningGains {
    /// Per-student gain records in input order.
    records: Vec<GainRecord>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LearningGains {
    /// Normalized learning gains for one group's pretest/posttest pair.
    #[new]
    #[pyo3(
        text_signature = "(pretest, posttest, /, max_score=100.0)",
        signature = (pretest, posttest, max_score = 100.0)
    )]
    pub fn compute<'py>(
        pretest: &Bound<'py, PyAny>, posttest: &Bound<'py, PyAny>, max_score: f64,
    ) -> PyResult<LearningGains> {
        let pre = extract_scores(pretest, "pretest")?;
        let post = extract_scores(posttest, "posttest")?;
        let records = learning_gains(&pre, &post, max_score)?;
        Ok(LearningGains { records })
    }

    /// Gain percentages as a numpy array, one entry per student.
    #[getter]
    pub fn gains<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        Array1::from_iter(self.records.iter().map(|record| record.gain_percent)).into_pyarray(py)
    }

    /// Per-student `(pretest, posttest, gain_percent)` tuples.
    #[getter]
    pub fn records(&self) -> Vec<(f64, f64, f64)> {
        self.records
            .iter()
            .map(|record| (record.pretest, record.posttest, record.gain_percent))
            .collect()
    }
}

/// MasteryRate — Python-facing wrapper for the mastery-rate metric.
///
/// Runs [`mastery_rate`] at construction and exposes the counts and the
/// rounded percentage.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "edumetrics.outcomes")]
pub struct MasteryRate {
    /// The mastery classification result.
    inner: MasteryOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl MasteryRate {
    /// Mastery rate of one group's scores against the fixed threshold.
    #[new]
    #[pyo3(
        text_signature = "(scores, /, max_score=100.0)",
        signature = (scores, max_score = 100.0)
    )]
    pub fn compute<'py>(scores: &Bound<'py, PyAny>, max_score: f64) -> PyResult<MasteryRate> {
        let values = extract_scores(scores, "scores")?;
        let inner = mastery_rate(&values, max_score)?;
        Ok(MasteryRate { inner })
    }

    /// Students strictly above the threshold.
    #[getter]
    pub fn mastered_count(&self) -> usize {
        self.inner.mastered_count()
    }

    /// Number of scores classified.
    #[getter]
    pub fn total_count(&self) -> usize {
        self.inner.total_count()
    }

    /// Mastery rate as a percentage, rounded to two decimals.
    #[getter]
    pub fn mastery_percent(&self) -> f64 {
        self.inner.mastery_percent()
    }
}

/// _edumetrics — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_edumetrics` Python module and register its submodules used
/// by the public `edumetrics` package.
///
/// Key behaviors
/// -------------
/// - Create `hypothesis` and `outcomes` submodules.
/// - Attach those submodules to the parent `_edumetrics` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - Invoked automatically by Python when importing the compiled
///   extension; not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _edumetrics<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let hypothesis_mod = PyModule::new(_py, "hypothesis")?;
    let outcomes_mod = PyModule::new(_py, "outcomes")?;
    hypothesis(_py, m, &hypothesis_mod)?;
    outcomes(_py, m, &outcomes_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("edumetrics.hypothesis", hypothesis_mod)?;

    _py.import("sys")?.getattr("modules")?.set_item("edumetrics.outcomes", outcomes_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn hypothesis<'py>(
    _py: Python, edumetrics: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<PairedTTest>()?;
    m.add_class::<UnpairedTTest>()?;
    edumetrics.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn outcomes<'py>(
    _py: Python, edumetrics: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<LearningGains>()?;
    m.add_class::<MasteryRate>()?;
    edumetrics.add_submodule(m)?;
    Ok(())
}
