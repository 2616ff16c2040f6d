//! Data model for records and criteria
//!
//! - `Value`: the closed JSON-like sum type for records and operands
//! - `Criteria`: the top-level criteria mapping

pub mod criteria;
pub mod value;

pub use criteria::Criteria;
pub use value::{Map, Value};
