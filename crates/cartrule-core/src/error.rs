//! Error types for CARTRULE Core

use thiserror::Error;

/// Core error type
///
/// Evaluation itself never fails; these errors only arise when converting
/// caller input into engine types.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
