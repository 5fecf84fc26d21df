use reedline::{ValidationResult, Validator};

use crate::lexer::open_depth;

/// Keeps the prompt open while parentheses are unbalanced, so expressions
/// can span several lines.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        if open_depth(line) > 0 {
            ValidationResult::Incomplete
        } else {
            ValidationResult::Complete
        }
    }
}
