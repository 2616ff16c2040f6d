//! Builder pattern for EligibilityEngine

use crate::config::EngineConfig;
use crate::engine::EligibilityEngine;
use crate::error::Result;

/// Builder for EligibilityEngine
///
/// # Example
///
/// ```rust
/// use cartrule_sdk::EligibilityEngineBuilder;
///
/// let engine = EligibilityEngineBuilder::new()
///     .max_nesting_depth(8)
///     .trace_conditions(true)
///     .build()
///     .unwrap();
/// assert_eq!(engine.config().max_nesting_depth, 8);
/// ```
#[derive(Debug, Default)]
pub struct EligibilityEngineBuilder {
    config: EngineConfig,
}

impl EligibilityEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Limit and/or nesting depth
    pub fn max_nesting_depth(mut self, depth: usize) -> Self {
        self.config.max_nesting_depth = depth;
        self
    }

    /// Log each condition outcome at debug level
    pub fn trace_conditions(mut self, enable: bool) -> Self {
        self.config.trace_conditions = enable;
        self
    }

    /// Build the engine, validating the configuration
    pub fn build(self) -> Result<EligibilityEngine> {
        EligibilityEngine::new(self.config)
    }
}
