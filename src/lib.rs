//! Keycalc: a four-function calculator as a pure state machine
//!
//! Keycalc follows Stillwater's "pure core, imperative shell" philosophy.
//! The calculator's input handling is a pure function from a state and a
//! keypad event to the next state and the text to display; loading the
//! evaluator, surfacing errors and keeping history live in a thin
//! effectful shell around it.
//!
//! # Core Concepts
//!
//! - **Events**: digits, decimal point, operators, equals, clear, delete
//! - **State**: the number being typed plus at most one pending operation
//! - **Evaluator**: the arithmetic seam, called at most once per event
//! - **Session**: lifecycle-gated owner of state, display and tape
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{handle, CalculatorState, Event, OperationTag, StandardEvaluator};
//!
//! let eval = StandardEvaluator;
//! let state = CalculatorState::new();
//!
//! let step = handle(&state, Event::Digit(3), &eval).unwrap();
//! let step = handle(&step.state, Event::Operator(OperationTag::Add), &eval).unwrap();
//! let step = handle(&step.state, Event::Digit(4), &eval).unwrap();
//! let step = handle(&step.state, Event::Operator(OperationTag::Add), &eval).unwrap();
//!
//! // Chaining computes 3 + 4 when the second operator is pressed.
//! assert_eq!(step.display, "7");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use crate::builder::CalculatorBuilder;
pub use crate::config::CalculatorConfig;
pub use crate::core::{CalculatorState, EvalError, Event, Evaluator, OperationTag, State};
pub use crate::effects::{Calculator, Lifecycle, SessionError};
