//! CARTRULE SDK - High-level API for cart eligibility checks
//!
//! Decides whether a record (a cart) satisfies a declarative criteria tree.
//!
//! # Example
//!
//! ```rust
//! use cartrule_sdk::{Criteria, EligibilityEngineBuilder, Value};
//! use serde_json::json;
//!
//! let engine = EligibilityEngineBuilder::new().build().unwrap();
//!
//! let cart = Value::from(json!({"items": [{"qty": 2}, {"qty": 5}]}));
//! let criteria = Criteria::try_from(json!({"items.qty": {"gt": 4}})).unwrap();
//!
//! assert!(engine.is_eligible(&cart, &criteria));
//! ```

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;

pub use builder::EligibilityEngineBuilder;
pub use config::EngineConfig;
pub use engine::{EligibilityEngine, EligibilityReport};
pub use error::{Result, SdkError};

// Re-export commonly used types from dependencies
pub use cartrule_core::{ConditionKind, Criteria, Value};
pub use cartrule_runtime::ConditionTrace;
