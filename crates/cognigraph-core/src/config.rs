//! # Graph Configuration
//!
//! Tunable defaults for callers that do not pass explicit weights or rates.
//! The CORE only defines the shape; loading from disk is done by the app layer.

use crate::plasticity::LearningRate;
use crate::primitives::DEFAULT_WEIGHT;
use serde::{Deserialize, Serialize};

/// Defaults applied by front-ends when an operation omits a weight or rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Weight used for relationships created without one.
    pub default_weight: f64,
    /// Rate used for plasticity steps requested without one.
    pub learning_rate: LearningRate,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
            learning_rate: LearningRate::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_primitives() {
        let config = GraphConfig::default();
        assert_eq!(config.default_weight, 1.0);
        assert_eq!(config.learning_rate, LearningRate::new(0.1));
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: GraphConfig =
            serde_json::from_str(r#"{"learning_rate": 0.5}"#).expect("parse");
        assert_eq!(config.default_weight, 1.0);
        assert_eq!(config.learning_rate.value(), 0.5);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = serde_json::from_str::<GraphConfig>(r#"{"learnin_rate": 0.5}"#);
        assert!(result.is_err());
    }
}
