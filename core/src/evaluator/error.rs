//! Evaluation error kinds.
//!
//! These are not Rust errors in the `Result` sense: the evaluator reports
//! them inside [`Value::Error`](crate::values::Value::Error) so they can
//! propagate through the fold like any other operand.

/// Classified failure of an evaluation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum EvalError {
    /// Integer division with a zero divisor.
    #[error("Division by 0")]
    DivisionByZero,

    /// Operator token outside `+ - * / %`.
    #[error("Invalid Operator")]
    BadOperator,

    /// Numeric literal that does not fit in an `i64`.
    #[error("Invalid Number")]
    BadNumber,
}
