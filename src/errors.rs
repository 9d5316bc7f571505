//! Engine error translation.
//!
//! Every [`EngineError`] crosses into Python as a `RuntimeError` carrying the
//! engine's own message, so the keyword in each message (`zero`, `empty`,
//! `Invalid`, `Overflow`) reaches the caller unchanged.

use calculator_core::Error as EngineError;
use pyo3::{PyErr, exceptions::PyRuntimeError};

/// Wrapper that lets `?` convert engine results inside `#[pymethods]`.
///
/// The orphan rule forbids `impl From<EngineError> for PyErr` here, so engine
/// errors pass through this newtype first.
#[derive(Debug)]
pub struct BindingError(pub EngineError);

impl From<EngineError> for BindingError {
    fn from(err: EngineError) -> Self {
        BindingError(err)
    }
}

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> Self {
        PyRuntimeError::new_err(err.0.to_string())
    }
}

pub type BindingResult<T> = Result<T, BindingError>;
