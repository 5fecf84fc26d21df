//! Tree-walking evaluator for RyLisp syntax trees.
//!
//! The evaluator folds each expression left to right: the first operand
//! seeds an accumulator and every further operand is combined into it with
//! the expression's operator. Failures are values, so an error in any
//! operand flows through the remaining combinations unchanged.
//!
//! ## Example
//!
//! ```
//! use rylisp_core::{evaluator, parser, values::Value};
//! use bumpalo::Bump;
//!
//! let arena = Bump::new();
//! let tree = parser::parse(&arena, "- 10 2 3").unwrap();
//! assert_eq!(evaluator::evaluate(tree), Value::Number(5));
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use operators::combine;

use crate::{parser::SyntaxNode, values::Value};

/// Evaluate a syntax tree with the standard arithmetic operators.
pub fn evaluate(node: &SyntaxNode<'_>) -> Value {
    evaluate_with(node, combine)
}

/// Evaluate a syntax tree, folding operands with a custom reducer.
///
/// `reducer` receives the accumulator, the operator token and the next
/// operand's value, and returns the new accumulator.
pub fn evaluate_with<F>(node: &SyntaxNode<'_>, reducer: F) -> Value
where
    F: Fn(Value, &str, Value) -> Value,
{
    eval::eval_node(node, &reducer)
}
