//! Configuration for link analysis.
//!
//! Every field has a default, so a partial TOML/JSON document deserializes
//! cleanly. Builder-style `with_*` methods cover programmatic use.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Characters of context on each side of a backlink match
pub const DEFAULT_CONTEXT_LENGTH: usize = 50;

/// CSS class applied to generated anchors
pub const DEFAULT_LINK_CLASS: &str = "memolog-link";

/// Tunables shared by the backlink resolver, the integrity checker and the
/// markup transformer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Preview window size on each side of a link occurrence
    pub context_length: usize,
    /// Class attribute for anchors emitted by the markup transformer
    pub link_class: String,
    /// Minimum Jaro-Winkler similarity for a broken link suggestion
    pub suggestion_threshold: f64,
    /// Maximum suggestions reported per broken link
    pub max_suggestions: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            context_length: DEFAULT_CONTEXT_LENGTH,
            link_class: DEFAULT_LINK_CLASS.to_string(),
            suggestion_threshold: 0.8,
            max_suggestions: 3,
        }
    }
}

impl AnalysisConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preview context length
    pub fn with_context_length(mut self, context_length: usize) -> Self {
        self.context_length = context_length;
        self
    }

    /// Set the anchor class
    pub fn with_link_class(mut self, link_class: impl Into<String>) -> Self {
        self.link_class = link_class.into();
        self
    }

    /// Set suggestion threshold and limit
    pub fn with_suggestions(mut self, threshold: f64, max: usize) -> Self {
        self.suggestion_threshold = threshold;
        self.max_suggestions = max;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.context_length == 0 {
            return Err(Error::config_error("context_length must be greater than 0"));
        }

        if self.link_class.trim().is_empty() {
            return Err(Error::config_error("link_class cannot be empty"));
        }

        // Quotes would break out of the class attribute
        if self.link_class.contains(['"', '<', '>']) {
            return Err(Error::config_error(format!(
                "link_class contains markup characters: {}",
                self.link_class
            )));
        }

        if !(0.0..=1.0).contains(&self.suggestion_threshold) {
            return Err(Error::config_error(format!(
                "suggestion_threshold must be within [0, 1], got {}",
                self.suggestion_threshold
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::new();
        assert_eq!(config.context_length, 50);
        assert_eq!(config.link_class, "memolog-link");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"context_length": 20}"#).unwrap();
        assert_eq!(config.context_length, 20);
        assert_eq!(config.link_class, DEFAULT_LINK_CLASS);
        assert_eq!(config.max_suggestions, 3);
    }

    #[test]
    fn test_validation_failures() {
        assert!(AnalysisConfig::new().with_context_length(0).validate().is_err());
        assert!(AnalysisConfig::new().with_link_class("  ").validate().is_err());
        assert!(
            AnalysisConfig::new()
                .with_link_class("x\" onclick=\"y")
                .validate()
                .is_err()
        );
        assert!(
            AnalysisConfig::new()
                .with_suggestions(1.5, 3)
                .validate()
                .is_err()
        );
    }
}
