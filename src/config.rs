//! Annotator options
//!
//! Deserialized from the options object passed in from JavaScript; every
//! field has a default so `undefined` or `{}` is a valid configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// CSS class names used on the emitted markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassNames {
    /// Outer element of one annotated run (carries the source text)
    pub block: String,
    /// One original/transliteration pair
    pub wrapper: String,
    pub original: String,
    pub latin: String,
    /// Body class that hides every transliteration line
    pub hidden: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            block: "ck-block".to_string(),
            wrapper: "ck-annotated".to_string(),
            original: "ck-cherokee".to_string(),
            latin: "ck-latin".to_string(),
            hidden: "ck-hide-translit".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnnotatorConfig {
    pub container_selector: String,
    pub resize_debounce_ms: u32,
    pub marker_attribute: String,
    pub classes: ClassNames,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            container_selector: "#article-body".to_string(),
            resize_debounce_ms: 150,
            marker_attribute: "data-ck-translit-done".to_string(),
            classes: ClassNames::default(),
        }
    }
}

impl AnnotatorConfig {
    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.resize_debounce_ms))
    }

    /// Reject configurations that would produce unusable selectors.
    pub fn validate(&self) -> Result<(), String> {
        if self.container_selector.trim().is_empty() {
            return Err("containerSelector must not be empty".to_string());
        }
        let classes = [
            ("block", &self.classes.block),
            ("wrapper", &self.classes.wrapper),
            ("original", &self.classes.original),
            ("latin", &self.classes.latin),
            ("hidden", &self.classes.hidden),
        ];
        for (name, class) in classes {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(format!("class name '{}' must be a single non-empty token", name));
            }
        }
        if self.marker_attribute.is_empty() {
            return Err("markerAttribute must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnnotatorConfig::default();
        assert_eq!(config.resize_debounce(), Duration::from_millis(150));
        assert_eq!(config.classes.latin, "ck-latin");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let config: AnnotatorConfig =
            serde_json::from_str(r#"{"resizeDebounceMs": 300, "classes": {"latin": "roman"}}"#).unwrap();
        assert_eq!(config.resize_debounce_ms, 300);
        assert_eq!(config.classes.latin, "roman");
        assert_eq!(config.classes.original, "ck-cherokee");
        assert_eq!(config.container_selector, "#article-body");
    }

    #[test]
    fn test_validate_rejects_bad_class_names() {
        let mut config = AnnotatorConfig::default();
        config.classes.wrapper = "two words".to_string();
        assert!(config.validate().is_err());
    }
}
