//! # Settings
//!
//! Loads [`GraphConfig`] from an optional TOML file.
//!
//! ```toml
//! default_weight = 1.0
//! learning_rate = 0.1
//! ```

use cognigraph_core::{CogniGraphError, GraphConfig};
use std::path::Path;

/// Maximum config file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Parse a config from TOML text. Missing keys take their defaults.
pub fn parse_config(text: &str) -> Result<GraphConfig, CogniGraphError> {
    toml::from_str(text).map_err(|e| CogniGraphError::ConfigError(e.to_string()))
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GraphConfig, CogniGraphError> {
    let Some(path) = path else {
        return Ok(GraphConfig::default());
    };

    let metadata = std::fs::metadata(path).map_err(|e| {
        CogniGraphError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
    })?;
    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(CogniGraphError::ConfigError(format!(
            "Config size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        CogniGraphError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
    })?;
    let config = parse_config(&text)?;
    tracing::debug!(
        path = %path.display(),
        default_weight = config.default_weight,
        learning_rate = config.learning_rate.value(),
        "loaded config"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_default() {
        let config = parse_config("").expect("parse");
        assert_eq!(config, GraphConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse_config("default_weight = 0.5\nlearning_rate = 0.01\n").expect("parse");
        assert_eq!(config.default_weight, 0.5);
        assert_eq!(config.learning_rate.value(), 0.01);
    }

    #[test]
    fn bad_value_is_config_error() {
        let result = parse_config("learning_rate = \"fast\"");
        assert!(matches!(result, Err(CogniGraphError::ConfigError(_))));
    }

    #[test]
    fn no_path_is_default() {
        assert_eq!(load_config(None).expect("load"), GraphConfig::default());
    }
}
