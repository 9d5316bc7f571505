//! Library-wide constants, exported to hosts as read-only module attributes.

/// Ratio of a circle's circumference to its diameter, `3.141592653589793`.
pub const PI: f64 = core::f64::consts::PI;

/// Version string reported to hosts.
pub const VERSION: &str = "1.0.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_constant_values() {
        assert_eq!(PI, 3.141592653589793);
        assert_eq!(VERSION, "1.0.0");
    }
}
