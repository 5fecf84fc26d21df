//! Core evaluation logic.

use crate::{evaluator::EvalError, parser::SyntaxNode, values::Value};

/// Evaluate one node, recursing into operands.
pub(super) fn eval_node<F>(node: &SyntaxNode<'_>, reducer: &F) -> Value
where
    F: Fn(Value, &str, Value) -> Value,
{
    if node.is_number() {
        return eval_number(node.contents);
    }

    // Child 0 is the opening token (`(` or start of input).
    let Some(operator) = node.children.get(1) else {
        return Value::error(EvalError::BadOperator);
    };
    let Some(first) = node.children.get(2) else {
        return Value::error(EvalError::BadNumber);
    };

    let op = operator.contents;
    let mut acc = eval_node(first, reducer);

    // Operands run until the first non-expression child (the closing token).
    for operand in node.children[3..].iter().take_while(|child| child.is_expr()) {
        let right = eval_node(operand, reducer);
        acc = reducer(acc, op, right);
        tracing::trace!(op, result = %acc, "folded operand");
    }

    acc
}

fn eval_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::number(n),
        Err(err) => {
            tracing::debug!(text, %err, "rejected numeric literal");
            Value::error(EvalError::BadNumber)
        }
    }
}
