//! Snap thresholds and container bounds.

use kurbo::Rect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Engine configuration.
///
/// Missing fields in a JSON document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SnapConfig {
    /// Maximum top-left distance for a node to be a snap candidate.
    pub proximity_threshold: f64,
    /// Maximum deviation for an edge or center alignment to trigger.
    pub edge_threshold: f64,
    /// Container width.
    pub page_width: f64,
    /// Container height.
    pub page_height: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            proximity_threshold: 100.0,
            edge_threshold: 20.0,
            page_width: 800.0,
            page_height: 600.0,
        }
    }
}

impl SnapConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded snap config from {}", path.display());
        Ok(config)
    }

    /// Reject negative or non-finite values.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("proximityThreshold", self.proximity_threshold),
            ("edgeThreshold", self.edge_threshold),
            ("pageWidth", self.page_width),
            ("pageHeight", self.page_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be a non-negative number, got {}", name, value)));
            }
        }
        Ok(())
    }

    /// The page rectangle from the origin to `(page_width, page_height)`.
    pub fn container_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.page_width, self.page_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SnapConfig::default();
        assert_eq!(config.proximity_threshold, 100.0);
        assert_eq!(config.edge_threshold, 20.0);
        assert_eq!(config.container_bounds(), Rect::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = SnapConfig::from_json_str(r#"{ "edgeThreshold": 8, "pageWidth": 1024 }"#).unwrap();
        assert_eq!(config.edge_threshold, 8.0);
        assert_eq!(config.page_width, 1024.0);
        assert_eq!(config.proximity_threshold, 100.0);
        assert_eq!(config.page_height, 600.0);
    }

    #[test]
    fn test_rejects_negative() {
        let err = SnapConfig::from_json_str(r#"{ "proximityThreshold": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("proximityThreshold"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SnapConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "pageHeight": 900 }}"#).unwrap();

        let config = SnapConfig::load(file.path()).unwrap();
        assert_eq!(config.page_height, 900.0);
        assert_eq!(config.page_width, 800.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SnapConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
