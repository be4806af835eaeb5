//! Build errors for calculator sessions.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Invalid configuration: {}", describe(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn describe(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_lists_every_problem() {
        let err = BuildError::InvalidConfig(vec![
            ConfigError::ZeroTapeCapacity,
            ConfigError::EmptyField { field: "evaluator" },
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Tape capacity must be at least 1; \
             Field 'evaluator' must not be empty"
        );
    }
}
