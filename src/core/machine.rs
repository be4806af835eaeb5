//! The calculator input state machine.
//!
//! `handle` is a pure function from (state, event) to the next state and
//! the text to display. It calls the evaluator at most once per event and
//! never mutates its input, so a failed computation leaves the caller's
//! state untouched.

use super::evaluator::{EvalError, Evaluator};
use super::input::Event;
use super::operation::OperationTag;
use super::state::{format_number, CalculatorState, PendingOperation, MAX_INPUT_DIGITS};
use serde::{Deserialize, Serialize};

/// A computation the evaluator completed during a transition.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Computation {
    pub lhs: f64,
    pub operation: OperationTag,
    pub rhs: f64,
    pub result: f64,
}

/// Outcome of handling one event.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    pub state: CalculatorState,
    pub display: String,
    pub computation: Option<Computation>,
}

impl Step {
    fn show_input(state: CalculatorState) -> Self {
        let display = state.current_input.clone();
        Self {
            state,
            display,
            computation: None,
        }
    }

    /// No-op step: state unchanged, display shows what was already shown.
    fn show_current(state: &CalculatorState) -> Self {
        let display = match (&state.pending, state.awaiting_second_operand) {
            (Some(pending), true) => format_number(pending.lhs),
            _ => state.current_input.clone(),
        };
        Self {
            state: state.clone(),
            display,
            computation: None,
        }
    }
}

/// Apply one event to `state`.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{handle, CalculatorState, Event, OperationTag, StandardEvaluator};
///
/// let eval = StandardEvaluator;
/// let mut state = CalculatorState::new();
/// let mut display = String::new();
/// for event in [
///     Event::Digit(3),
///     Event::Operator(OperationTag::Add),
///     Event::Digit(4),
///     Event::Equals,
/// ] {
///     let step = handle(&state, event, &eval).unwrap();
///     state = step.state;
///     display = step.display;
/// }
/// assert_eq!(display, "7");
/// assert!(state.pending_operation().is_none());
/// ```
pub fn handle<E>(state: &CalculatorState, event: Event, evaluator: &E) -> Result<Step, EvalError>
where
    E: Evaluator + ?Sized,
{
    match event {
        Event::Digit(d) => {
            let c = char::from_digit(u32::from(d), 10)
                .ok_or_else(|| EvalError::MalformedOperand(d.to_string()))?;
            Ok(append(state, c))
        }
        Event::DecimalPoint => Ok(append(state, '.')),
        Event::Operator(op) => operator(state, op, evaluator),
        Event::Equals => equals(state, evaluator),
        Event::Clear => Ok(Step::show_input(CalculatorState::new())),
        Event::Delete => Ok(delete(state)),
    }
}

impl CalculatorState {
    /// Method form of [`handle`].
    pub fn handle<E>(&self, event: Event, evaluator: &E) -> Result<Step, EvalError>
    where
        E: Evaluator + ?Sized,
    {
        handle(self, event, evaluator)
    }

    fn operand(&self) -> Result<f64, EvalError> {
        match self.current_input.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(EvalError::Overflow),
            Err(_) => Err(EvalError::MalformedOperand(self.current_input.clone())),
        }
    }

    fn digit_count(&self) -> usize {
        self.current_input
            .chars()
            .filter(char::is_ascii_digit)
            .count()
    }
}

fn append(state: &CalculatorState, c: char) -> Step {
    let mut next = state.clone();

    if state.awaiting_second_operand || state.current_input == "0" {
        next.current_input = if c == '.' {
            "0.".to_string()
        } else {
            c.to_string()
        };
        next.awaiting_second_operand = false;
    } else if c == '.' && state.current_input.contains('.') {
        // second decimal point is ignored
    } else if c.is_ascii_digit() && state.digit_count() >= MAX_INPUT_DIGITS {
        // input is full
    } else {
        next.current_input.push(c);
    }

    Step::show_input(next)
}

fn operator<E>(state: &CalculatorState, op: OperationTag, evaluator: &E) -> Result<Step, EvalError>
where
    E: Evaluator + ?Sized,
{
    match state.pending {
        None => {
            let lhs = state.operand()?;
            Ok(Step {
                state: awaiting(lhs, op),
                display: format_number(lhs),
                computation: None,
            })
        }
        Some(pending) if !state.awaiting_second_operand => {
            let computation = compute(pending, state.operand()?, evaluator)?;
            Ok(Step {
                state: awaiting(computation.result, op),
                display: format_number(computation.result),
                computation: Some(computation),
            })
        }
        Some(pending) => {
            let mut next = state.clone();
            next.pending = Some(PendingOperation {
                operation: op,
                ..pending
            });
            Ok(Step {
                state: next,
                display: format_number(pending.lhs),
                computation: None,
            })
        }
    }
}

fn equals<E>(state: &CalculatorState, evaluator: &E) -> Result<Step, EvalError>
where
    E: Evaluator + ?Sized,
{
    let pending = match state.pending {
        Some(pending) if !state.awaiting_second_operand => pending,
        _ => return Ok(Step::show_current(state)),
    };

    let computation = compute(pending, state.operand()?, evaluator)?;
    let next = CalculatorState {
        current_input: format_number(computation.result),
        pending: None,
        awaiting_second_operand: true,
    };

    Ok(Step {
        computation: Some(computation),
        ..Step::show_input(next)
    })
}

fn delete(state: &CalculatorState) -> Step {
    let mut next = state.clone();

    if next.current_input.chars().count() > 1 {
        next.current_input.pop();
    } else {
        next.current_input = "0".to_string();
    }
    // A computed negative result can shrink to a bare sign.
    if next.current_input == "-" {
        next.current_input = "0".to_string();
    }
    next.awaiting_second_operand = false;

    Step::show_input(next)
}

fn awaiting(lhs: f64, operation: OperationTag) -> CalculatorState {
    CalculatorState {
        current_input: "0".to_string(),
        pending: Some(PendingOperation { lhs, operation }),
        awaiting_second_operand: true,
    }
}

fn compute<E>(pending: PendingOperation, rhs: f64, evaluator: &E) -> Result<Computation, EvalError>
where
    E: Evaluator + ?Sized,
{
    let result = evaluator.compute(pending.lhs, rhs, pending.operation)?;
    Ok(Computation {
        lhs: pending.lhs,
        operation: pending.operation,
        rhs,
        result,
    })
}
