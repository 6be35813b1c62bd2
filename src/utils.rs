//! utils — Python score-input conversion for the binding surface.
//!
//! Purpose
//! -------
//! Convert Python-side score containers (numpy arrays, pandas Series, or
//! plain sequences of floats) into the owned `Vec<f64>` buffers the Rust
//! engines consume, naming the offending argument in every failure.
//! Compiled only with the `python-bindings` feature; native Rust callers
//! never touch this module.

#[cfg(feature = "python-bindings")]
use numpy::PyReadonlyArray1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyTypeError, prelude::*, types::PyAny};

/// Extract one score series into an owned `Vec<f64>`.
///
/// Accepts a 1-D float64 numpy array, a pandas Series (unwrapped through
/// `to_numpy`), or any Python sequence of floats. The engines own their
/// inputs for the lifetime of one analysis call, so the scores are always
/// copied out; non-contiguous numpy views are gathered element-wise
/// rather than rejected.
///
/// Errors
/// ------
/// - `PyTypeError` naming `name` when the object is none of the accepted
///   score containers.
#[cfg(feature = "python-bindings")]
pub fn extract_scores<'py>(raw_scores: &Bound<'py, PyAny>, name: &str) -> PyResult<Vec<f64>> {
    if let Ok(scores) = raw_scores.extract::<PyReadonlyArray1<f64>>() {
        return Ok(scores.as_array().to_vec());
    }

    // pandas Series: unwrap to the underlying ndarray first.
    if let Ok(unwrapped) = raw_scores.call_method0("to_numpy") {
        if let Ok(scores) = unwrapped.extract::<PyReadonlyArray1<f64>>() {
            return Ok(scores.as_array().to_vec());
        }
    }

    raw_scores.extract::<Vec<f64>>().map_err(|_| {
        PyTypeError::new_err(format!(
            "{name} must be a 1-D numpy.ndarray, pandas.Series, or sequence of float64 scores"
        ))
    })
}
