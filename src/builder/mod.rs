//! Builder API for ergonomic calculator construction.
//!
//! This module provides a fluent builder for calculator sessions and the
//! `state_enum!` macro for declaring simple state enums.

pub mod calculator;
pub mod error;
pub mod macros;

pub use calculator::CalculatorBuilder;
pub use error::BuildError;
