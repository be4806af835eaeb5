//! Core calculator types and logic.
//!
//! This module contains the pure functional core:
//! - Operation tags and the input boundary that produces events
//! - The evaluator seam
//! - Calculator state and the `handle` transition function
//! - The immutable computation tape
//!
//! Nothing in this module performs I/O or holds mutable global state.

mod evaluator;
mod input;
mod machine;
mod operation;
mod state;
mod tape;

pub use evaluator::{EvalError, Evaluator, StandardEvaluator};
pub use input::{Event, InputError};
pub use machine::{handle, Computation, Step};
pub use operation::OperationTag;
pub use state::{format_number, CalculatorState, PendingOperation, State, MAX_INPUT_DIGITS};
pub use tape::{Tape, TapeEntry, DEFAULT_TAPE_CAPACITY};
