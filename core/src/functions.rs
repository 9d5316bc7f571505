//! Free functions
//!
//! Operations that need no [`Calculator`](crate::Calculator) instance:
//! exponentiation, circle area, and the fibonacci generator.

use crate::{
    constants::PI,
    error::{Error, Result},
};
use tracing::{debug, trace};

/// Longest fibonacci prefix whose terms all fit in `i64`.
///
/// Term 92 is 7540113804746346429; term 93 exceeds `i64::MAX`.
pub const MAX_FIBONACCI_LEN: usize = 93;

// ============================================================================
// Exponentiation
// ============================================================================

/// `base` raised to `exponent`, with IEEE 754 `pow` semantics.
///
/// Fractional and negative exponents behave as they do for the host's float
/// power: `power(4.0, 0.5) == 2.0`, `power(2.0, -1.0) == 0.5`.
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

// ============================================================================
// Geometry
// ============================================================================

/// Area of a circle with the given radius.
///
/// Negative (and NaN) radii are rejected with [`Error::InvalidArgument`];
/// `-0.0` counts as zero.
pub fn compute_area(radius: f64) -> Result<f64> {
    if radius < 0.0 || radius.is_nan() {
        let err = Error::InvalidArgument(format!("radius must be non-negative, got {radius}"));
        debug!(kind = err.kind(), radius, "rejected circle radius");
        return Err(err);
    }
    Ok(PI * radius * radius)
}

// ============================================================================
// Sequences
// ============================================================================

/// The first `n` fibonacci numbers, starting `0, 1, 1, 2, …`.
///
/// Negative `n` is an [`Error::InvalidArgument`]. Requests longer than
/// [`MAX_FIBONACCI_LEN`] fail with [`Error::Overflow`] naming the first term
/// that cannot be represented; terms are never wrapped or saturated.
pub fn generate_fibonacci(n: i64) -> Result<Vec<i64>> {
    if n < 0 {
        let err = Error::InvalidArgument(format!("sequence length must be non-negative, got {n}"));
        debug!(kind = err.kind(), n, "rejected fibonacci length");
        return Err(err);
    }

    let len = usize::try_from(n).unwrap_or(usize::MAX);
    if len > MAX_FIBONACCI_LEN {
        let err = Error::Overflow {
            term: MAX_FIBONACCI_LEN,
        };
        debug!(kind = err.kind(), n, "fibonacci length exceeds i64 range");
        return Err(err);
    }

    let mut terms: Vec<i64> = Vec::with_capacity(len);
    for k in 0..len {
        let term = match k {
            0 => 0,
            1 => 1,
            _ => terms[k - 1]
                .checked_add(terms[k - 2])
                .ok_or(Error::Overflow { term: k })?,
        };
        terms.push(term);
    }

    trace!(len, "generated fibonacci sequence");
    Ok(terms)
}

#[cfg(test)]
#[path = "functions_test.rs"]
mod functions_test;
