//! Arithmetic operation tags.
//!
//! The set of operations is closed: a keypad symbol either maps to one of
//! the four tags or is rejected at the input boundary, so an evaluator
//! never sees an operation it does not know.

use super::input::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four operations a pending calculation can apply.
///
/// # Example
///
/// ```rust
/// use keycalc::core::OperationTag;
///
/// let op = OperationTag::try_from('*').unwrap();
/// assert_eq!(op, OperationTag::Multiply);
/// assert_eq!(op.symbol(), '*');
///
/// assert!(OperationTag::try_from('%').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum OperationTag {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl OperationTag {
    /// All tags in keypad order.
    pub const ALL: [OperationTag; 4] = [
        OperationTag::Add,
        OperationTag::Subtract,
        OperationTag::Multiply,
        OperationTag::Divide,
    ];

    /// ASCII symbol used on the keypad and on the tape.
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Multiply => "Multiply",
            Self::Divide => "Divide",
        }
    }
}

impl fmt::Display for OperationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for OperationTag {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' | '\u{2212}' => Ok(Self::Subtract),
            '*' | '\u{00D7}' | 'x' => Ok(Self::Multiply),
            '/' | '\u{00F7}' => Ok(Self::Divide),
            other => Err(InputError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for OperationTag {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(InputError::UnknownOperator(s.to_string())),
        }
    }
}
