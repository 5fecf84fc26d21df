// Syntax tree types shared by the parser and the evaluator.

use core::fmt;
use core::ops::Range;

use crate::parser::Rule;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
}

impl From<pest::Span<'_>> for Span {
    fn from(s: pest::Span<'_>) -> Self {
        Self(s.start()..s.end())
    }
}

/// Classification of a syntax node.
///
/// A tag is the chain of grammar rules that were collapsed into one node,
/// outermost first. A number operand, for instance, is tagged `expr|number`:
/// it is both an operand and a literal. Code inspecting the tree should ask
/// what a node *is* through [`Tag::contains`] rather than rely on positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a>(&'a [Rule]);

impl<'a> Tag<'a> {
    pub const fn new(rules: &'a [Rule]) -> Self {
        Self(rules)
    }

    pub fn contains(&self, rule: Rule) -> bool {
        self.0.contains(&rule)
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{:?}", rule)?;
        }
        Ok(())
    }
}

/// A node of the parsed syntax tree.
///
/// Leaves (numbers, operators, delimiters) carry their source text in
/// `contents`; composite nodes carry their parts in `children` and have
/// empty contents. Parsed trees live in a `Bump` arena, but nodes can be
/// put together by hand over ordinary slices as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode<'a> {
    pub tag: Tag<'a>,
    pub contents: &'a str,
    pub span: Span,
    pub children: &'a [SyntaxNode<'a>],
}

impl<'a> SyntaxNode<'a> {
    pub fn leaf(tag: Tag<'a>, contents: &'a str) -> Self {
        Self {
            tag,
            contents,
            span: Span::default(),
            children: &[],
        }
    }

    pub fn branch(tag: Tag<'a>, children: &'a [SyntaxNode<'a>]) -> Self {
        Self {
            tag,
            contents: "",
            span: Span::default(),
            children,
        }
    }

    pub fn is_number(&self) -> bool {
        self.tag.contains(Rule::number)
    }

    pub fn is_expr(&self) -> bool {
        self.tag.contains(Rule::expr)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, ": '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Prints the tree one node per line, children indented below their parent.
impl fmt::Display for SyntaxNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    /// Classify an operator token. Returns `None` for anything outside the
    /// fixed operator set.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "%" => Some(BinaryOp::Rem),
            _ => None,
        }
    }
}
