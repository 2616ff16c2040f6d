//! Configuration types for EligibilityEngine

use crate::error::{Result, SdkError};
use cartrule_runtime::DEFAULT_MAX_NESTING_DEPTH;
use serde::{Deserialize, Serialize};

/// Main engine configuration
///
/// Every field is optional when deserializing:
///
/// ```yaml
/// max_nesting_depth: 16
/// trace_conditions: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Deepest and/or nesting evaluated before a combinator fails closed
    pub max_nesting_depth: usize,

    /// Log every top-level condition outcome at debug level
    pub trace_conditions: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            trace_conditions: false,
        }
    }

    /// Load configuration from a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("invalid YAML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)
            .map_err(|e| SdkError::ConfigError(format!("invalid JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the nesting limit
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Enable condition tracing
    pub fn trace_conditions(mut self, enable: bool) -> Self {
        self.trace_conditions = enable;
        self
    }

    /// Check the configuration is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_nesting_depth == 0 {
            return Err(SdkError::ConfigError(
                "max_nesting_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
