//! Semantic input events and the mapping from raw controls to them.
//!
//! A button grid annotates each control with a kind (`number`, `operator`,
//! `equals`, `clear`, `delete`) and, where needed, a value. Keyboards send
//! key names. Both are mapped here, once, so that everything past this
//! boundary works with a closed `Event` type.

use super::operation::OperationTag;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised while mapping a raw control or key to an `Event`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Unknown control kind '{0}'")]
    UnknownKind(String),

    #[error("Control of kind '{kind}' is missing its {attribute}")]
    MissingValue {
        kind: &'static str,
        attribute: &'static str,
    },

    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(String),

    #[error("Unknown operator symbol '{0}'")]
    UnknownOperator(String),

    #[error("Key '{0}' is not bound to any calculator input")]
    UnknownKey(String),
}

/// A single semantic keypad press.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A decimal digit, always in `0..=9`. Build with [`Event::digit`].
    Digit(u8),
    DecimalPoint,
    Operator(OperationTag),
    Equals,
    Clear,
    Delete,
}

impl Event {
    /// Build a digit event, rejecting values above 9.
    pub fn digit(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self::Digit(value))
        } else {
            Err(InputError::InvalidDigit(value.to_string()))
        }
    }

    /// Map a button's semantic annotation to an event.
    ///
    /// `kind` is the control kind; `value` carries the digit (or `.`) for
    /// `number` controls and `op` carries the symbol for `operator` controls.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::{Event, OperationTag};
    ///
    /// assert_eq!(Event::from_control("number", Some("7"), None), Ok(Event::Digit(7)));
    /// assert_eq!(Event::from_control("number", Some("."), None), Ok(Event::DecimalPoint));
    /// assert_eq!(
    ///     Event::from_control("operator", None, Some("/")),
    ///     Ok(Event::Operator(OperationTag::Divide))
    /// );
    /// assert!(Event::from_control("operator", None, Some("%")).is_err());
    /// ```
    pub fn from_control(
        kind: &str,
        value: Option<&str>,
        op: Option<&str>,
    ) -> Result<Self, InputError> {
        match kind {
            "number" => {
                let value = value.ok_or(InputError::MissingValue {
                    kind: "number",
                    attribute: "value",
                })?;
                Self::from_character(value)
            }
            "operator" => {
                let symbol = op.ok_or(InputError::MissingValue {
                    kind: "operator",
                    attribute: "op",
                })?;
                Ok(Self::Operator(symbol.parse()?))
            }
            "equals" => Ok(Self::Equals),
            "clear" => Ok(Self::Clear),
            "delete" => Ok(Self::Delete),
            other => Err(InputError::UnknownKind(other.to_string())),
        }
    }

    /// Map a keyboard key name to an event.
    pub fn from_key(key: &str) -> Result<Self, InputError> {
        match key {
            "Enter" | "=" => Ok(Self::Equals),
            "Escape" | "c" | "C" => Ok(Self::Clear),
            "Backspace" | "Delete" => Ok(Self::Delete),
            "," => Ok(Self::DecimalPoint),
            _ => Self::from_character(key)
                .or_else(|_| key.parse().map(Self::Operator))
                .map_err(|_| InputError::UnknownKey(key.to_string())),
        }
    }

    fn from_character(text: &str) -> Result<Self, InputError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::DecimalPoint),
            (Some(c), None) => match c.to_digit(10) {
                Some(d) => Ok(Self::Digit(d as u8)),
                None => Err(InputError::InvalidDigit(text.to_string())),
            },
            _ => Err(InputError::InvalidDigit(text.to_string())),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::DecimalPoint => "decimal_point",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => write!(f, "."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => write!(f, "="),
            Self::Clear => write!(f, "C"),
            Self::Delete => write!(f, "DEL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_controls_map_to_digits_and_decimal() {
        for d in 0..=9u8 {
            let value = d.to_string();
            assert_eq!(
                Event::from_control("number", Some(&value), None),
                Ok(Event::Digit(d))
            );
        }
        assert_eq!(
            Event::from_control("number", Some("."), None),
            Ok(Event::DecimalPoint)
        );
    }

    #[test]
    fn number_control_rejects_bad_values() {
        assert_eq!(
            Event::from_control("number", Some("12"), None),
            Err(InputError::InvalidDigit("12".to_string()))
        );
        assert_eq!(
            Event::from_control("number", Some("a"), None),
            Err(InputError::InvalidDigit("a".to_string()))
        );
        assert_eq!(
            Event::from_control("number", None, None),
            Err(InputError::MissingValue {
                kind: "number",
                attribute: "value"
            })
        );
    }

    #[test]
    fn operator_controls_use_the_op_attribute() {
        assert_eq!(
            Event::from_control("operator", Some("ignored"), Some("-")),
            Ok(Event::Operator(OperationTag::Subtract))
        );
        assert_eq!(
            Event::from_control("operator", None, None),
            Err(InputError::MissingValue {
                kind: "operator",
                attribute: "op"
            })
        );
        assert_eq!(
            Event::from_control("operator", None, Some("^")),
            Err(InputError::UnknownOperator("^".to_string()))
        );
    }

    #[test]
    fn command_controls_need_no_value() {
        assert_eq!(Event::from_control("equals", None, None), Ok(Event::Equals));
        assert_eq!(Event::from_control("clear", None, None), Ok(Event::Clear));
        assert_eq!(Event::from_control("delete", None, None), Ok(Event::Delete));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            Event::from_control("memory", None, None),
            Err(InputError::UnknownKind("memory".to_string()))
        );
    }

    #[test]
    fn keyboard_keys_map_to_events() {
        assert_eq!(Event::from_key("5"), Ok(Event::Digit(5)));
        assert_eq!(Event::from_key("."), Ok(Event::DecimalPoint));
        assert_eq!(Event::from_key(","), Ok(Event::DecimalPoint));
        assert_eq!(Event::from_key("+"), Ok(Event::Operator(OperationTag::Add)));
        assert_eq!(Event::from_key("Enter"), Ok(Event::Equals));
        assert_eq!(Event::from_key("="), Ok(Event::Equals));
        assert_eq!(Event::from_key("Escape"), Ok(Event::Clear));
        assert_eq!(Event::from_key("Backspace"), Ok(Event::Delete));
    }

    #[test]
    fn unbound_keys_are_rejected() {
        assert_eq!(
            Event::from_key("F5"),
            Err(InputError::UnknownKey("F5".to_string()))
        );
        assert_eq!(
            Event::from_key("%"),
            Err(InputError::UnknownKey("%".to_string()))
        );
    }

    #[test]
    fn digit_constructor_bounds_value() {
        assert_eq!(Event::digit(9), Ok(Event::Digit(9)));
        assert!(Event::digit(10).is_err());
    }

    #[test]
    fn display_matches_keypad_labels() {
        assert_eq!(Event::Digit(3).to_string(), "3");
        assert_eq!(Event::Operator(OperationTag::Multiply).to_string(), "*");
        assert_eq!(Event::Delete.to_string(), "DEL");
    }
}
