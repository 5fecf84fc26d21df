//! Core of the RyLisp prefix arithmetic language: grammar, syntax tree,
//! result values and the tree-walking evaluator.

pub mod evaluator;
pub mod parser;
pub mod values;
