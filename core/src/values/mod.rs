//! Result values produced by the evaluator.

mod value;


pub use value::Value;
