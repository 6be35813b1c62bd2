//! config — validated analysis-wide settings for outcome studies.
//!
//! Purpose
//! -------
//! Provide a small, validated container for the two settings every analysis
//! in this crate shares: the two-tailed significance level `alpha` and the
//! score ceiling `max_score` used by range checks and outcome metrics.
//!
//! Key behaviors
//! -------------
//! - Construct [`AnalysisConfig`] values that enforce `0 < alpha < 1` and a
//!   strictly positive, finite `max_score`.
//! - Reject invalid configurations via typed errors ([`ConfigError`]) instead
//!   of panicking at call sites.
//! - Expose read-only accessors so a config cannot drift mid-analysis.
//!
//! Invariants & assumptions
//! ------------------------
//! - `alpha` lies strictly inside (0, 1); the conventional choice is 0.05
//!   (see [`AnalysisConfig::DEFAULT_ALPHA`]).
//! - `max_score` is finite and strictly positive; score series are validated
//!   against `[0, max_score]` downstream.
//! - A config is immutable for the lifetime of an analysis run; both groups
//!   of a study are expected to share one config.
//!
//! Conventions
//! -----------
//! - `alpha` is always interpreted two-tailed; one-sided tests are out of
//!   scope for this crate.
//! - Invalid configurations return [`ConfigError`] rather than panicking.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`AnalysisConfig`] once per study and pass it by reference
//!   into `TTestOutcome::paired` / `TTestOutcome::unpaired`.
//! - Outcome metrics take the raw `max_score` scalar directly, but callers
//!   typically source it from the same config.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the accepted range for both fields and each rejection
//!   branch, including non-finite inputs.

pub type ConfigResult<T> = Result<T, ConfigError>;

/// ConfigError — invalid analysis-wide settings.
///
/// Variants
/// --------
/// - `InvalidAlpha(alpha: f64)`
///   The significance level is outside the open interval (0, 1) or not
///   finite.
/// - `InvalidMaxScore(max_score: f64)`
///   The score ceiling is non-positive or not finite.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation; converted to `ValueError` at the
///   Python boundary when the `python-bindings` feature is enabled.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidAlpha(f64),
    InvalidMaxScore(f64),
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAlpha(alpha) => {
                write!(f, "Invalid significance level: {alpha}. Must satisfy 0 < alpha < 1.")
            }
            ConfigError::InvalidMaxScore(max_score) => {
                write!(f, "Invalid max score: {max_score}. Must be finite and positive.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<ConfigError> for pyo3::PyErr {
    fn from(err: ConfigError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

/// AnalysisConfig — significance level and score ceiling for one study.
///
/// Purpose
/// -------
/// Carry the two shared settings of an outcome analysis: the two-tailed
/// significance level used by every hypothesis test and decision rule, and
/// the maximum attainable score used by range validation and the outcome
/// metrics.
///
/// Parameters
/// ----------
/// Constructed via [`AnalysisConfig::new`]:
/// - `alpha`: `f64`
///   Two-tailed significance level; must satisfy `0 < alpha < 1`.
/// - `max_score`: `f64`
///   Maximum attainable score; must be finite and strictly positive.
///
/// Invariants
/// ----------
/// - `alpha` is finite and strictly inside (0, 1).
/// - `max_score` is finite and strictly positive.
///
/// Performance
/// -----------
/// - Two scalars; `Copy`, cheap to pass by value or reference.
///
/// Notes
/// -----
/// - Fields are private so a validated config cannot be mutated into an
///   invalid state; use the accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    alpha: f64,
    max_score: f64,
}

impl AnalysisConfig {
    /// Conventional two-tailed significance level.
    pub const DEFAULT_ALPHA: f64 = 0.05;

    /// Construct a validated config.
    ///
    /// Parameters
    /// ----------
    /// - `alpha`: `f64`
    ///   Two-tailed significance level in (0, 1).
    /// - `max_score`: `f64`
    ///   Finite, strictly positive score ceiling.
    ///
    /// Returns
    /// -------
    /// `ConfigResult<AnalysisConfig>`
    ///   - `Ok(config)` when both fields are admissible.
    ///   - `Err(ConfigError::InvalidAlpha)` when `alpha` is non-finite or
    ///     outside (0, 1).
    ///   - `Err(ConfigError::InvalidMaxScore)` when `max_score` is
    ///     non-finite or non-positive.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use edumetrics::config::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::new(0.05, 100.0).unwrap();
    /// assert_eq!(config.alpha(), 0.05);
    /// assert_eq!(config.max_score(), 100.0);
    /// ```
    pub fn new(alpha: f64, max_score: f64) -> ConfigResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ConfigError::InvalidAlpha(alpha));
        }
        if !max_score.is_finite() || max_score <= 0.0 {
            return Err(ConfigError::InvalidMaxScore(max_score));
        }
        Ok(AnalysisConfig { alpha, max_score })
    }

    /// Two-tailed significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Maximum attainable score.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }
}
