//! Presentation constants for the page controllers.
//!
//! # Design
//! - Class names and button copy are plain values handed to each component at
//!   construction, never ambient globals.
//! - Documents may override any subset of fields; the rest keep their defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Class applied to the description of a collapsed example.
pub const DEFAULT_COLLAPSED_CLASS: &str = "examples-hide";
/// Button copy while an example's code is hidden.
pub const DEFAULT_SHOW_CODE_LABEL: &str = "Show example code";
/// Button copy while an example's code is shown.
pub const DEFAULT_HIDE_CODE_LABEL: &str = "Hide example code";
/// Class applied to the button of the selected showcase example.
pub const DEFAULT_ACTIVE_CLASS: &str = "btn-info";
/// Class applied to the input of the selected showcase example.
pub const DEFAULT_GLOW_CLASS: &str = "glow";

/// Errors raised while loading a page configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document was not valid JSON for [`PageConfig`].
    #[error("failed to parse page configuration: {source}")]
    Parse {
        /// Underlying decoder error.
        #[from]
        source: serde_json::Error,
    },
    /// A field held a value the controllers cannot use.
    #[error("invalid value for '{field}': {message}")]
    InvalidField {
        /// Offending field.
        field: &'static str,
        /// Human-readable reason.
        message: &'static str,
    },
}

/// Class names and button copy shared by the page controllers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Class for collapsed example descriptions.
    pub collapsed_class: String,
    /// Toggle button copy while collapsed.
    pub show_code_label: String,
    /// Toggle button copy while expanded.
    pub hide_code_label: String,
    /// Class for the selected showcase button.
    pub active_class: String,
    /// Class for the selected showcase input.
    pub glow_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            collapsed_class: DEFAULT_COLLAPSED_CLASS.to_string(),
            show_code_label: DEFAULT_SHOW_CODE_LABEL.to_string(),
            hide_code_label: DEFAULT_HIDE_CODE_LABEL.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            glow_class: DEFAULT_GLOW_CLASS.to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed documents or unknown
    /// fields, and [`ConfigError::InvalidField`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that labels are non-blank and class names are single tokens.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidField`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_label("show_code_label", &self.show_code_label)?;
        ensure_label("hide_code_label", &self.hide_code_label)?;
        ensure_class("collapsed_class", &self.collapsed_class)?;
        ensure_class("active_class", &self.active_class)?;
        ensure_class("glow_class", &self.glow_class)?;
        Ok(())
    }
}

fn ensure_label(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            message: "must not be blank",
        });
    }
    Ok(())
}

fn ensure_class(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidField {
            field,
            message: "must not be empty",
        });
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidField {
            field,
            message: "must be a single class name",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DEFAULT_GLOW_CLASS, PageConfig};

    #[test]
    fn defaults_match_page_markup() {
        let config = PageConfig::default();
        assert_eq!(config.collapsed_class, "examples-hide");
        assert_eq!(config.show_code_label, "Show example code");
        assert_eq!(config.hide_code_label, "Hide example code");
        assert_eq!(config.active_class, "btn-info");
        assert_eq!(config.glow_class, "glow");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_document_keeps_remaining_defaults() {
        let config =
            PageConfig::from_json(r#"{ "active_class": "btn-primary" }"#).expect("valid config");
        assert_eq!(config.active_class, "btn-primary");
        assert_eq!(config.glow_class, DEFAULT_GLOW_CLASS);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PageConfig::from_json(r#"{ "glow": "x" }"#).expect_err("unknown field");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn blank_label_is_invalid() {
        let err = PageConfig::from_json(r#"{ "hide_code_label": "   " }"#).expect_err("blank");
        assert!(matches!(
            err,
            ConfigError::InvalidField {
                field: "hide_code_label",
                ..
            }
        ));
    }

    #[test]
    fn class_names_must_be_single_tokens() {
        let err =
            PageConfig::from_json(r#"{ "glow_class": "glow strong" }"#).expect_err("two classes");
        assert_eq!(
            err.to_string(),
            "invalid value for 'glow_class': must be a single class name"
        );
    }
}
