use core::fmt;

use crate::evaluator::EvalError;

/// Outcome of evaluating a subtree or applying an operator.
///
/// Errors travel as ordinary values so that a failing operand can be folded
/// into (and short-circuit) the enclosing expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(EvalError),
}

impl Value {
    /// A successfully computed integer.
    pub fn number(value: i64) -> Self {
        Value::Number(value)
    }

    /// A classified evaluation failure.
    pub fn error(kind: EvalError) -> Self {
        Value::Error(kind)
    }

    /// The integer, if this is a number.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Error(_) => None,
        }
    }

    /// The error kind, if this is an error.
    pub fn as_error(&self) -> Option<EvalError> {
        match self {
            Value::Number(_) => None,
            Value::Error(e) => Some(*e),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<EvalError> for Value {
    fn from(kind: EvalError) -> Self {
        Value::Error(kind)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(e) => write!(f, "Error: {}", e),
        }
    }
}
