//! Condition Classification Module
//!
//! Normalizes the entries of a criteria tree into typed conditions.
//!
//! # Syntax
//!
//! ## Equality
//! ```json
//! { "status": "active" }
//! ```
//!
//! ## Relational
//! ```json
//! { "price": { "gte": 100 }, "items.qty": { "gt": 4 } }
//! ```
//!
//! ## Membership
//! ```json
//! { "tags": { "in": ["sale", "clearance"] } }
//! ```
//!
//! ## Combinators
//! `and`/`or` hold at least two operator entries evaluated against the same
//! field:
//! ```json
//! { "total": { "or": { "lt": 10, "gt": 500 } } }
//! ```
//!
//! ## Supported Kinds
//! - `basic` (implicit, loose equality)
//! - `gt`, `lt`, `gte`, `lte`
//! - `in` (strict membership)
//! - `and`, `or`

mod classifier;
mod types;

pub use classifier::{classify, classify_operator, classify_spec};
pub use types::{Condition, ConditionKind, ConditionSet};
