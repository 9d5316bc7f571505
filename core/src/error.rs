//! Engine failure signals.
//!
//! Every fallible operation in this crate returns [`Result`]. Each variant's
//! `Display` text contains a fixed keyword (`zero`, `empty`, `Invalid`,
//! `Overflow`) that host bindings forward verbatim, so callers on the other side
//! of the boundary can tell the failures apart by substring.

use thiserror::Error;

/// Precondition violations detected by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Division with a zero divisor (either sign).
    #[error("Division by zero!")]
    DivisionByZero,

    /// An aggregate that needs at least one element received none.
    #[error("Cannot compute average of empty sequence")]
    EmptySequence,

    /// An input outside the operation's domain (negative radius, negative length).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A fibonacci term does not fit in `i64`.
    #[error("Overflow: fibonacci term {term} does not fit in a 64-bit integer")]
    Overflow { term: usize },
}

impl Error {
    /// Short machine-readable name of the failure kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::DivisionByZero => "division_by_zero",
            Error::EmptySequence => "empty_sequence",
            Error::InvalidArgument(_) => "invalid_argument",
            Error::Overflow { .. } => "overflow",
        }
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
