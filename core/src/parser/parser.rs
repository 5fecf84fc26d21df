use bumpalo::Bump;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::parser::error::convert_pest_error;
use crate::parser::{ParseError, ParseErrorKind, Span, SyntaxNode, Tag};

/// Maximum parenthesis nesting accepted by [`parse`].
///
/// Low enough that parsing and evaluating a program at the limit fits in
/// the 2 MiB stack of a default spawned thread, in debug builds too.
pub const DEFAULT_MAX_DEPTH: usize = 256;

#[derive(Parser)]
#[grammar = "parser/rylisp.pest"]
pub struct ExpressionParser;

/// Parse a top-level program into a syntax tree allocated in `arena`.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<&'a SyntaxNode<'a>, ParseError> {
    parse_with_max_depth(arena, source, DEFAULT_MAX_DEPTH)
}

/// Parse with a custom nesting limit.
///
/// The limit is checked on the raw text before the grammar runs, so neither
/// the parser nor the evaluator ever recurses deeper than `max_depth`
/// parenthesised expressions.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<&'a SyntaxNode<'a>, ParseError> {
    check_nesting_depth(source, max_depth)?;

    let mut pairs = ExpressionParser::parse(Rule::program, source)
        .map_err(|err| convert_pest_error(err, source))?;
    let program = pairs.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::Other {
                message: "missing expected pair in rule".to_string(),
            },
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;

    let root: &'a SyntaxNode<'a> = arena.alloc(build_node(arena, program));
    tracing::debug!(children = root.children.len(), "parsed program");
    Ok(root)
}

fn check_nesting_depth(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for (pos, ch) in source.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    tracing::debug!(depth, max_depth, "input nested too deeply");
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { depth, max_depth },
                        source.to_string(),
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn build_node<'a>(arena: &'a Bump, pair: Pair<'a, Rule>) -> SyntaxNode<'a> {
    let span = Span::from(pair.as_span());

    // Fold chains of single children into one node: an `expr` wrapping a
    // lone `number` becomes a single `expr|number` leaf.
    let mut rules = vec![pair.as_rule()];
    let mut current = pair;
    loop {
        let mut inner = current.clone().into_inner();
        match (inner.next(), inner.next()) {
            (Some(only), None) => {
                rules.push(only.as_rule());
                current = only;
            }
            _ => break,
        }
    }

    let tag = Tag::new(arena.alloc_slice_copy(&rules));
    let children: Vec<SyntaxNode<'a>> = current
        .clone()
        .into_inner()
        .map(|child| build_node(arena, child))
        .collect();
    let contents = if children.is_empty() {
        current.as_str()
    } else {
        ""
    };

    SyntaxNode {
        tag,
        contents,
        span,
        children: arena.alloc_slice_fill_iter(children),
    }
}
