//! Calculator configuration.
//!
//! Settings are plain serde data with defaults for every field. Validation
//! uses Stillwater's `Validation` so that every problem is reported in one
//! pass instead of stopping at the first.

use crate::core::DEFAULT_TAPE_CAPACITY;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems found in a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(String),

    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("Tape capacity must be at least 1")]
    ZeroTapeCapacity,

    #[error("Load error label must differ from the evaluation error label ('{0}')")]
    IndistinctLoadErrorLabel(String),
}

/// Settings for a calculator session.
///
/// # Example
///
/// ```rust
/// use keycalc::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "error_label": "E" }"#).unwrap();
/// assert_eq!(config.error_label, "E");
/// assert_eq!(config.evaluator, "standard");
///
/// let errors = CalculatorConfig::from_json(r#"{ "evaluator": "", "tape_capacity": 0 }"#)
///     .unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Registry name of the evaluator to load at startup
    pub evaluator: String,

    /// Display text after a recoverable evaluation error
    pub error_label: String,

    /// Display text when the evaluator could not be loaded
    pub load_error_label: String,

    /// Maximum number of tape entries kept
    pub tape_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            evaluator: "standard".to_string(),
            error_label: "Error".to_string(),
            load_error_label: "Load Error".to_string(),
            tape_capacity: DEFAULT_TAPE_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields take their defaults. On failure every problem found
    /// is returned.
    pub fn from_json(json: &str) -> Result<Self, Vec<ConfigError>> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| vec![ConfigError::Parse(e.to_string())])?;
        config.checked()
    }

    /// Validate, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let checks = vec![
            non_empty("evaluator", &self.evaluator),
            non_empty("error_label", &self.error_label),
            non_empty("load_error_label", &self.load_error_label),
            if self.tape_capacity == 0 {
                Validation::fail(ConfigError::ZeroTapeCapacity)
            } else {
                Validation::success(())
            },
            if !self.error_label.is_empty() && self.load_error_label == self.error_label {
                Validation::fail(ConfigError::IndistinctLoadErrorLabel(
                    self.error_label.clone(),
                ))
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate` as a `Result`.
    pub fn checked(self) -> Result<Self, Vec<ConfigError>> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
        }
    }
}

fn non_empty(field: &'static str, value: &str) -> Validation<(), NonEmptyVec<ConfigError>> {
    if value.trim().is_empty() {
        Validation::fail(ConfigError::EmptyField { field })
    } else {
        Validation::success(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.tape_capacity, DEFAULT_TAPE_CAPACITY);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = CalculatorConfig::from_json(
            r#"{ "load_error_label": "Wasm Load Error", "tape_capacity": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.load_error_label, "Wasm Load Error");
        assert_eq!(config.tape_capacity, 5);
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let config = CalculatorConfig {
            evaluator: " ".to_string(),
            error_label: "Oops".to_string(),
            load_error_label: "Oops".to_string(),
            tape_capacity: 0,
        };

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::EmptyField { field: "evaluator" })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::ZeroTapeCapacity)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::IndistinctLoadErrorLabel(_))));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_labels_are_reported_once_each() {
        let config = CalculatorConfig {
            error_label: String::new(),
            load_error_label: String::new(),
            ..CalculatorConfig::default()
        };
        let errors = config.checked().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ConfigError::EmptyField {
                    field: "error_label"
                },
                ConfigError::EmptyField {
                    field: "load_error_label"
                },
            ]
        );
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let errors = CalculatorConfig::from_json("{ not json").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ConfigError::Parse(_)));
    }

    #[test]
    fn wrong_field_type_is_a_parse_error() {
        let errors = CalculatorConfig::from_json(r#"{ "tape_capacity": "many" }"#).unwrap_err();
        assert!(matches!(errors[0], ConfigError::Parse(_)));
    }
}
