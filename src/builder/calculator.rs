//! Builder for constructing calculator sessions.

use crate::builder::error::BuildError;
use crate::config::CalculatorConfig;
use crate::effects::Calculator;

/// Builder for a calculator session with a fluent API.
///
/// Every setting starts at its `CalculatorConfig` default; `build`
/// validates the result and reports all problems at once.
///
/// # Example
///
/// ```rust
/// use keycalc::builder::CalculatorBuilder;
/// use keycalc::effects::Lifecycle;
///
/// let calc = CalculatorBuilder::new()
///     .error_label("E")
///     .tape_capacity(10)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.lifecycle(), Lifecycle::Uninitialized);
/// assert_eq!(calc.config().error_label, "E");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Registry name of the evaluator to load.
    pub fn evaluator(mut self, name: impl Into<String>) -> Self {
        self.config.evaluator = name.into();
        self
    }

    pub fn error_label(mut self, label: impl Into<String>) -> Self {
        self.config.error_label = label.into();
        self
    }

    pub fn load_error_label(mut self, label: impl Into<String>) -> Self {
        self.config.load_error_label = label.into();
        self
    }

    pub fn tape_capacity(mut self, capacity: usize) -> Self {
        self.config.tape_capacity = capacity;
        self
    }

    /// Build the calculator.
    /// Returns an error listing every configuration problem.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let config = self.config.checked().map_err(BuildError::InvalidConfig)?;
        Ok(Calculator::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::core::Event;
    use crate::effects::{loader, Lifecycle};

    #[test]
    fn defaults_build() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.config(), &CalculatorConfig::default());
    }

    #[test]
    fn builder_reports_all_problems() {
        let result = CalculatorBuilder::new()
            .evaluator("")
            .tape_capacity(0)
            .error_label("Same")
            .load_error_label("Same")
            .build();

        match result {
            Err(BuildError::InvalidConfig(errors)) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.contains(&ConfigError::ZeroTapeCapacity));
            }
            Ok(_) => panic!("Expected invalid configuration"),
        }
    }

    #[test]
    fn config_replaces_settings() {
        let config = CalculatorConfig {
            load_error_label: "Wasm Load Error".to_string(),
            ..CalculatorConfig::default()
        };
        let calc = CalculatorBuilder::new().config(config.clone()).build().unwrap();
        assert_eq!(calc.config(), &config);
    }

    #[tokio::test]
    async fn built_calculator_uses_configured_labels() {
        let mut calc = CalculatorBuilder::new().error_label("E").build().unwrap();
        calc.start(loader::builtin::<()>(), &()).await.unwrap();
        assert_eq!(calc.lifecycle(), Lifecycle::Ready);

        for event in [
            Event::Digit(1),
            Event::Operator(crate::core::OperationTag::Divide),
            Event::Digit(0),
        ] {
            calc.press(event).unwrap();
        }
        assert!(calc.press(Event::Equals).is_err());
        assert_eq!(calc.display(), "E");
    }
}
