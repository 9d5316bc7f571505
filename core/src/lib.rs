//! Calculator engine
//!
//! The computation core behind the `calculator` extension module: a stateful
//! [`Calculator`], free functions ([`power`], [`compute_area`],
//! [`generate_fibonacci`]) and the module constants [`PI`] and [`VERSION`].
//!
//! Nothing in this crate knows about a host language. Failures are reported as
//! [`Error`] values; bindings translate them at the boundary.

pub mod calculator;
pub mod constants;
pub mod error;
pub mod functions;

pub use calculator::Calculator;
pub use constants::{PI, VERSION};
pub use error::{Error, Result};
pub use functions::{MAX_FIBONACCI_LEN, compute_area, generate_fibonacci, power};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
