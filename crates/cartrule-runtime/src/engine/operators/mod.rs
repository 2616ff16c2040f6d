//! Predicate building blocks used by the evaluator

pub(crate) mod comparison;
pub(crate) mod equality;
