use crate::parser::{Rule, Span};

/// Parser error with the source it was raised against.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub src: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Input ended inside a parenthesised expression
    #[error("Unclosed delimiter '{delimiter}'")]
    UnclosedDelimiter { delimiter: char },
    /// Maximum nesting depth exceeded
    #[error("Expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    #[error("{message}")]
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, src: String, span: Span) -> Self {
        Self { kind, src, span }
    }

    /// Stable error code shown next to rendered reports.
    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::UnclosedDelimiter { .. } => "P002",
            ParseErrorKind::MaxDepthExceeded { .. } => "P004",
            ParseErrorKind::Other { .. } => "P999",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => {
                Some("Programs look like `+ 1 (* 2 3)`: an operator followed by operands")
            }
            ParseErrorKind::UnclosedDelimiter { .. } => Some("Add the missing closing delimiter"),
            ParseErrorKind::MaxDepthExceeded { .. } => {
                Some("Reduce nesting or simplify the expression")
            }
            ParseErrorKind::Other { .. } => None,
        }
    }
}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::{ErrorVariant, InputLocation};

    let span = match err.location {
        InputLocation::Pos(pos) => Span(pos..pos),
        InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => {
            let at_end = span.0.start >= source.trim_end().len();
            if at_end && positives.contains(&Rule::close) {
                ParseErrorKind::UnclosedDelimiter { delimiter: '(' }
            } else {
                ParseErrorKind::UnexpectedToken {
                    expected: format_expected_rules(&positives),
                    found: describe_found(source, span.0.start),
                }
            }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source.to_string(), span)
}

fn rule_concept(rule: Rule) -> &'static str {
    match rule {
        Rule::number => "number",
        Rule::operator => "operator",
        Rule::open => "'('",
        Rule::close => "')'",
        Rule::EOI => "end of input",
        _ => "expression",
    }
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();
    for &rule in rules {
        let concept = rule_concept(rule);
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe the text the parser stopped at
fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}
