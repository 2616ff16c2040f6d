//! CARTRULE Core - Core types for the cart eligibility engine
//!
//! This crate provides the fundamental types used across the CARTRULE crates:
//! - Value types for records and criteria operands
//! - The criteria tree
//! - Condition kinds and the condition classifier
//! - Error types

pub mod condition;
pub mod error;
pub mod types;

pub use condition::{classify, classify_operator, Condition, ConditionKind, ConditionSet};
pub use error::CoreError;
pub use types::{Criteria, Map, Value};
