//! Binary operator implementations.

use crate::{
    evaluator::EvalError,
    parser::BinaryOp,
    values::Value,
};

/// Combine two operand values under an operator token.
///
/// An error on the left wins over an error on the right; either is
/// returned untouched. Tokens outside the operator set yield
/// [`EvalError::BadOperator`].
pub fn combine(left: Value, op: &str, right: Value) -> Value {
    let (x, y) = match (left, right) {
        (Value::Error(_), _) => return left,
        (_, Value::Error(_)) => return right,
        (Value::Number(x), Value::Number(y)) => (x, y),
    };

    match BinaryOp::from_symbol(op) {
        Some(op) => eval_binary_int(op, x, y),
        None => Value::error(EvalError::BadOperator),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow. Division
/// truncates toward zero. A zero modulus returns the dividend.
pub(super) fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Value {
    match op {
        BinaryOp::Add => Value::number(left.wrapping_add(right)),
        BinaryOp::Sub => Value::number(left.wrapping_sub(right)),
        BinaryOp::Mul => Value::number(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Value::error(EvalError::DivisionByZero)
            } else {
                // wrapping_div handles i64::MIN / -1
                Value::number(left.wrapping_div(right))
            }
        }
        BinaryOp::Rem => {
            if right == 0 {
                Value::number(left)
            } else {
                Value::number(left.wrapping_rem(right))
            }
        }
    }
}
