//! Common test utilities for SDK integration tests

use cartrule_sdk::{Criteria, EligibilityEngine, EligibilityEngineBuilder, EligibilityReport, Value};

/// Test helper pairing an engine with inline JSON criteria
pub struct TestEngine {
    engine: EligibilityEngine,
    criteria: Criteria,
}

impl TestEngine {
    /// Create a test engine with default configuration and the given criteria
    pub fn new(criteria: serde_json::Value) -> Self {
        Self::with_builder(EligibilityEngineBuilder::new(), criteria)
    }

    /// Create a test engine from a customized builder
    pub fn with_builder(builder: EligibilityEngineBuilder, criteria: serde_json::Value) -> Self {
        Self {
            engine: builder.build().expect("engine should build"),
            criteria: Criteria::try_from(criteria).expect("criteria should be an object"),
        }
    }

    /// Check a cart against the criteria
    pub fn check(&self, cart: serde_json::Value) -> bool {
        self.engine.is_eligible(&Value::from(cart), &self.criteria)
    }

    /// Check a cart and return the full report
    pub fn explain(&self, cart: serde_json::Value) -> EligibilityReport {
        self.engine.explain(&Value::from(cart), &self.criteria)
    }

    /// Assert the cart is eligible
    pub fn assert_eligible(&self, cart: serde_json::Value) {
        assert!(self.check(cart.clone()), "expected eligible: {}", cart);
    }

    /// Assert the cart is not eligible
    pub fn assert_ineligible(&self, cart: serde_json::Value) {
        assert!(!self.check(cart.clone()), "expected ineligible: {}", cart);
    }
}
