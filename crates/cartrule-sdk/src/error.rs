//! SDK error types

use thiserror::Error;

/// SDK error type
///
/// Evaluating criteria never fails. These errors come from building the
/// engine and converting caller input.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Criteria could not be turned into a criteria tree
    #[error("Criteria error: {0}")]
    CriteriaError(#[from] cartrule_core::CoreError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use cartrule_core::CoreError;

    #[test]
    fn test_config_error() {
        let error = SdkError::ConfigError("max_nesting_depth must be positive".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("max_nesting_depth"));
    }

    #[test]
    fn test_core_error_conversion() {
        let core_error = CoreError::InvalidCriteria("expected an object".to_string());
        let sdk_error: SdkError = core_error.into();
        assert!(matches!(sdk_error, SdkError::CriteriaError(_)));
        assert!(sdk_error.to_string().contains("Criteria error"));
        assert!(sdk_error.to_string().contains("expected an object"));
    }

    #[test]
    fn test_error_debug_format() {
        let error = SdkError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
    }
}
