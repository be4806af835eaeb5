//! The arithmetic seam.
//!
//! The state machine never does arithmetic itself. It hands two operands
//! and a tag to an `Evaluator` and either takes the result or surfaces the
//! failure.

use super::operation::OperationTag;
use thiserror::Error;

/// Failures an evaluation can surface.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result is not a finite number")]
    Overflow,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Operand '{0}' is not a finite number")]
    MalformedOperand(String),
}

impl EvalError {
    /// Whether normal input may resume after this error.
    ///
    /// `InvalidOperation` and `MalformedOperand` point at a bug in the
    /// caller or evaluator and are not recoverable.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

/// Pure binary arithmetic.
///
/// Implementations must be deterministic and side-effect free.
pub trait Evaluator: Send + Sync {
    fn compute(&self, a: f64, b: f64, op: OperationTag) -> Result<f64, EvalError>;

    /// Name used in logs and registries.
    fn name(&self) -> &str {
        "evaluator"
    }
}

/// Plain `f64` arithmetic.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{EvalError, Evaluator, OperationTag, StandardEvaluator};
///
/// let eval = StandardEvaluator;
/// assert_eq!(eval.compute(3.0, 4.0, OperationTag::Add), Ok(7.0));
/// assert_eq!(
///     eval.compute(5.0, 0.0, OperationTag::Divide),
///     Err(EvalError::DivisionByZero)
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardEvaluator;

impl Evaluator for StandardEvaluator {
    fn compute(&self, a: f64, b: f64, op: OperationTag) -> Result<f64, EvalError> {
        let result = match op {
            OperationTag::Add => a + b,
            OperationTag::Subtract => a - b,
            OperationTag::Multiply => a * b,
            OperationTag::Divide => {
                if b == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                a / b
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::Overflow)
        }
    }

    fn name(&self) -> &str {
        "standard"
    }
}

impl<E: Evaluator + ?Sized> Evaluator for std::sync::Arc<E> {
    fn compute(&self, a: f64, b: f64, op: OperationTag) -> Result<f64, EvalError> {
        (**self).compute(a, b, op)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_operations_compute() {
        let eval = StandardEvaluator;
        assert_eq!(eval.compute(2.0, 3.0, OperationTag::Add), Ok(5.0));
        assert_eq!(eval.compute(2.0, 3.0, OperationTag::Subtract), Ok(-1.0));
        assert_eq!(eval.compute(2.5, 2.0, OperationTag::Multiply), Ok(5.0));
        assert_eq!(eval.compute(9.0, 3.0, OperationTag::Divide), Ok(3.0));
    }

    #[test]
    fn division_by_zero_fails() {
        let eval = StandardEvaluator;
        assert_eq!(
            eval.compute(5.0, 0.0, OperationTag::Divide),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            eval.compute(5.0, -0.0, OperationTag::Divide),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn non_finite_results_fail() {
        let eval = StandardEvaluator;
        assert_eq!(
            eval.compute(f64::MAX, f64::MAX, OperationTag::Multiply),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn recoverability_splits_user_errors_from_bugs() {
        assert!(EvalError::DivisionByZero.is_recoverable());
        assert!(EvalError::Overflow.is_recoverable());
        assert!(!EvalError::InvalidOperation("Modulo".into()).is_recoverable());
        assert!(!EvalError::MalformedOperand("-".into()).is_recoverable());
    }

    #[test]
    fn shared_evaluator_delegates() {
        let shared: std::sync::Arc<dyn Evaluator> = std::sync::Arc::new(StandardEvaluator);
        assert_eq!(shared.compute(1.0, 1.0, OperationTag::Add), Ok(2.0));
        assert_eq!(shared.name(), "standard");
    }
}
