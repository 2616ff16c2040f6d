//! Criteria evaluation engine

mod evaluator;
pub(crate) mod operators;

pub use evaluator::{Evaluator, DEFAULT_MAX_NESTING_DEPTH};
