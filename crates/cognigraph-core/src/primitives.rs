//! # Primitives
//!
//! Fixed defaults for the CogniGraph CORE. These are compiled in and can be
//! overridden per call or through [`GraphConfig`](crate::config::GraphConfig).

/// Weight given to a relationship when the caller does not supply one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Amount added to each incident edge by one plasticity step when the
/// caller does not supply a rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(DEFAULT_WEIGHT, 1.0);
        assert_eq!(DEFAULT_LEARNING_RATE, 0.1);
    }
}
