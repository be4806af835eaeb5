//! State types for the calculator.
//!
//! `State` is implemented by anything the crate treats as a named position
//! in a state machine: the calculator's own input state and the session
//! lifecycle. `CalculatorState` holds everything a running calculation
//! needs and is replaced, never mutated, by each transition.

use super::operation::OperationTag;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values; they can be cloned,
/// compared, logged and serialized.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the state for display/logging.
    fn name(&self) -> &str;

    /// Whether no further transitions are expected.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state represents a failure.
    fn is_error(&self) -> bool {
        false
    }
}

/// Most digits a typed operand can hold. Further digit keys are ignored,
/// which keeps every typed operand well inside the finite `f64` range.
pub const MAX_INPUT_DIGITS: usize = 16;

/// Left operand and operator of a calculation waiting for its right operand.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PendingOperation {
    pub lhs: f64,
    pub operation: OperationTag,
}

/// The calculator's input state.
///
/// `current_input` is always a numeric literal prefix (digits, at most one
/// decimal point, optionally a leading minus from a computed result) and
/// never empty. The previous value and pending operation live together, so
/// one is present exactly when the other is.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, State};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.current_input(), "0");
/// assert!(state.previous_value().is_none());
/// assert!(state.pending_operation().is_none());
/// assert!(state.awaiting_second_operand());
/// assert_eq!(state.name(), "Entry");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current_input: String,
    pub(crate) pending: Option<PendingOperation>,
    pub(crate) awaiting_second_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The state at startup and after `Clear`.
    pub fn new() -> Self {
        Self {
            current_input: "0".to_string(),
            pending: None,
            awaiting_second_operand: true,
        }
    }

    /// Text of the number being typed or shown.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.lhs)
    }

    pub fn pending_operation(&self) -> Option<OperationTag> {
        self.pending.map(|p| p.operation)
    }

    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// True right after an operator (or equals) until a digit is typed.
    pub fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Whether the state is indistinguishable from a fresh calculator.
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }
}

impl State for CalculatorState {
    fn name(&self) -> &str {
        match (&self.pending, self.awaiting_second_operand) {
            (None, _) => "Entry",
            (Some(_), true) => "AwaitingOperand",
            (Some(_), false) => "EnteringOperand",
        }
    }
}

/// Canonical decimal text for a number.
///
/// Uses the shortest representation that round-trips (`7`, `2.5`,
/// `0.30000000000000004`). Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
