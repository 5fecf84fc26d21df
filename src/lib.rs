//! RyLisp - a tiny prefix-notation arithmetic language
//!
//! # Overview
//!
//! Programs are an operator followed by one or more operands, where an
//! operand is an integer or a parenthesised expression:
//!
//! ```text
//! + 1 (* 2 3)        => 7
//! - 10 2 3           => 5
//! / 10 0             => Error: Division by 0
//! ```
//!
//! # Quick Start
//!
//! ```
//! use rylisp::{Value, interpret};
//!
//! assert_eq!(interpret("+ 1 (* 2 3)").unwrap(), Value::Number(7));
//! assert_eq!(interpret("% 7 0").unwrap().to_string(), "7");
//! ```
//!
//! Parsing and evaluation can also be driven separately, which is what the
//! REPL does so it can print the tree with `--debug-parse`:
//!
//! ```
//! use bumpalo::Bump;
//! use rylisp::{evaluate, parse};
//!
//! let arena = Bump::new();
//! let tree = parse(&arena, "- 10 2 3").unwrap();
//! assert_eq!(evaluate(tree).as_number(), Some(5));
//! ```

mod error_renderer;

use bumpalo::Bump;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_no_color, render_error_to_string,
    render_error_to_string_no_color,
};

// Re-export public API from rylisp_core
pub use rylisp_core::evaluator::{EvalError, combine, evaluate, evaluate_with};
pub use rylisp_core::parser::{
    self, DEFAULT_MAX_DEPTH, ParseError, ParseErrorKind, SyntaxNode, parse, parse_with_max_depth,
};
pub use rylisp_core::values::Value;

/// Parse and evaluate `source` in one step.
///
/// Evaluation failures (division by zero, bad numbers) come back as
/// `Ok(Value::Error(..))`; only malformed input is an `Err`.
pub fn interpret(source: &str) -> Result<Value, ParseError> {
    interpret_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Like [`interpret`], with a custom nesting limit.
pub fn interpret_with_max_depth(source: &str, max_depth: usize) -> Result<Value, ParseError> {
    let arena = Bump::new();
    let tree = parse_with_max_depth(&arena, source, max_depth)?;
    let value = evaluate(tree);
    tracing::debug!(%value, "evaluated program");
    Ok(value)
}
