//! The stateful calculator.
//!
//! A [`Calculator`] holds a single `f64`. Arithmetic, aggregate, and greeting
//! operations are pure and ignore it; only the constructors and
//! [`Calculator::set_value`] touch the held value.

use crate::{
    error::{Error, Result},
    functions,
};
use tracing::{debug, trace};

/// A scalar holder with arithmetic and sequence operations.
///
/// Equality is deliberately not implemented: two calculators holding the same
/// value are still distinct objects to the caller.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    value: f64,
}

impl Calculator {
    /// Creates a calculator holding `0.0`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calculator holding `initial_value`.
    pub fn with_value(initial_value: f64) -> Self {
        Self {
            value: initial_value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// `a / b`, or [`Error::DivisionByZero`] when `b` is `0.0` or `-0.0`.
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            debug!(kind = Error::DivisionByZero.kind(), a, "rejected division");
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }

    /// Type-level exponentiation; see [`functions::power`].
    pub fn power(base: f64, exponent: f64) -> f64 {
        functions::power(base, exponent)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Left-to-right sum starting from `0.0`, so an empty slice sums to `+0.0`.
    pub fn sum(&self, numbers: &[f64]) -> f64 {
        numbers.iter().fold(0.0, |acc, x| acc + x)
    }

    /// Arithmetic mean, or [`Error::EmptySequence`] for an empty slice.
    pub fn average(&self, numbers: &[f64]) -> Result<f64> {
        if numbers.is_empty() {
            debug!(kind = Error::EmptySequence.kind(), "rejected average");
            return Err(Error::EmptySequence);
        }
        let mean = self.sum(numbers) / numbers.len() as f64;
        trace!(len = numbers.len(), mean, "computed average");
        Ok(mean)
    }

    // ========================================================================
    // Strings
    // ========================================================================

    pub fn greet(&self, name: &str) -> String {
        format!("Hello, {name}! Welcome to the Calculator.")
    }
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod calculator_test;
