//! Calculator - a small numeric library for Python
//!
//! # Overview
//!
//! This crate is the `calculator` extension module. It wraps the engine in
//! [`calculator_core`] and exposes it to Python under fixed names:
//!
//! ```text
//! Calculator(initial_value=0.0)
//! Calculator.add / subtract / multiply / divide
//! Calculator.get_value / set_value
//! Calculator.sum / average
//! Calculator.greet
//! Calculator.power            (staticmethod)
//! compute_area(radius)
//! generate_fibonacci(n)
//! PI, VERSION
//! ```
//!
//! # Quick Start
//!
//! ```python
//! import calculator
//!
//! calc = calculator.Calculator(100.0)
//! calc.divide(10, 4)                 # 2.5
//! calculator.generate_fibonacci(5)   # [0, 1, 1, 2, 3]
//! calc.average([])                   # RuntimeError: Cannot compute average of empty sequence
//! ```
//!
//! # Conversions
//!
//! Scalars accept any Python `int` or `float` and come back as `float`.
//! Sequences accept any Python sequence of numbers. Fibonacci terms come back
//! as a `list[int]`.
//!
//! # Errors
//!
//! Engine failures are raised as `RuntimeError` with the engine's message; see
//! [`errors`]. Arguments that cannot be converted raise the usual `TypeError`
//! or `OverflowError` before the engine is reached.

use calculator_core::{Calculator, PI, VERSION};
use pyo3::prelude::*;

pub mod errors;

pub use calculator_core as engine;
pub use errors::{BindingError, BindingResult};

/// Calculator holding a single float value.
#[pyclass(name = "Calculator", module = "calculator")]
#[derive(Debug, Clone, Default)]
pub struct PyCalculator {
    inner: Calculator,
}

#[pymethods]
impl PyCalculator {
    #[new]
    #[pyo3(signature = (initial_value = 0.0))]
    fn new(initial_value: f64) -> Self {
        PyCalculator {
            inner: Calculator::with_value(initial_value),
        }
    }

    /// Return a + b.
    fn add(&self, a: f64, b: f64) -> f64 {
        self.inner.add(a, b)
    }

    /// Return a - b.
    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.inner.subtract(a, b)
    }

    /// Return a * b.
    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.inner.multiply(a, b)
    }

    /// Return a / b. Raises RuntimeError when b is zero.
    fn divide(&self, a: f64, b: f64) -> BindingResult<f64> {
        Ok(self.inner.divide(a, b)?)
    }

    /// Replace the held value.
    fn set_value(&mut self, value: f64) {
        self.inner.set_value(value);
    }

    /// Return the held value.
    fn get_value(&self) -> f64 {
        self.inner.value()
    }

    /// Return the sum of a sequence of numbers (0.0 when empty).
    fn sum(&self, numbers: Vec<f64>) -> f64 {
        self.inner.sum(&numbers)
    }

    /// Return the mean of a sequence of numbers. Raises RuntimeError when empty.
    fn average(&self, numbers: Vec<f64>) -> BindingResult<f64> {
        Ok(self.inner.average(&numbers)?)
    }

    /// Return base ** exponent.
    #[staticmethod]
    fn power(base: f64, exponent: f64) -> f64 {
        Calculator::power(base, exponent)
    }

    /// Return a greeting for name.
    fn greet(&self, name: &str) -> String {
        self.inner.greet(name)
    }

    fn __repr__(&self) -> String {
        format!("Calculator(value={:?})", self.inner.value())
    }
}

/// Return the area of a circle. Raises RuntimeError when radius is negative.
#[pyfunction]
fn compute_area(radius: f64) -> BindingResult<f64> {
    Ok(calculator_core::compute_area(radius)?)
}

/// Return the first n fibonacci numbers.
///
/// Raises RuntimeError when n is negative or a term would not fit in 64 bits.
#[pyfunction]
fn generate_fibonacci(n: i64) -> BindingResult<Vec<i64>> {
    Ok(calculator_core::generate_fibonacci(n)?)
}

/// Calculator module: arithmetic, aggregates, fibonacci and circle area.
#[pymodule]
#[pyo3(name = "calculator")]
pub fn calculator_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCalculator>()?;
    m.add_function(wrap_pyfunction!(compute_area, m)?)?;
    m.add_function(wrap_pyfunction!(generate_fibonacci, m)?)?;
    m.add("PI", PI)?;
    m.add("VERSION", VERSION)?;
    Ok(())
}
