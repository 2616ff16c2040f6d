//! CARTRULE Runtime - Evaluation of criteria trees against records
//!
//! This crate resolves field paths against records and runs the classified
//! conditions produced by `cartrule-core`.

pub mod context;
pub mod engine;
pub mod result;

// Re-export main types
pub use context::{resolve_path, Candidate};
pub use engine::{Evaluator, DEFAULT_MAX_NESTING_DEPTH};
pub use result::ConditionTrace;
