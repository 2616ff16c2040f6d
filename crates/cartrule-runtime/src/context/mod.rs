//! Record access
//!
//! Resolution of dotted field paths into candidate values.

mod field_lookup;

pub use field_lookup::{resolve_path, Candidate};
