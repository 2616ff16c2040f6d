//! EligibilityEngine - main entry point for cart eligibility checks

use crate::config::EngineConfig;
use crate::error::Result;
use cartrule_core::{Criteria, Value};
use cartrule_runtime::{ConditionTrace, Evaluator};
use serde::{Deserialize, Serialize};

/// Outcome of an eligibility check with per-condition detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityReport {
    /// Whether the record satisfies the criteria
    pub eligible: bool,

    /// One trace per classified top-level condition
    pub conditions: Vec<ConditionTrace>,
}

impl EligibilityReport {
    /// Traces of the conditions that did not pass
    pub fn failed_conditions(&self) -> impl Iterator<Item = &ConditionTrace> {
        self.conditions.iter().filter(|trace| !trace.result)
    }
}

/// Eligibility engine
///
/// Immutable once built, so a single engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    config: EngineConfig,
    evaluator: Evaluator,
}

impl EligibilityEngine {
    /// Create an engine from a configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let evaluator = Evaluator::new().with_max_nesting_depth(config.max_nesting_depth);
        Ok(Self { config, evaluator })
    }

    /// Check whether a record satisfies a criteria tree
    pub fn is_eligible(&self, record: &Value, criteria: &Criteria) -> bool {
        if self.config.trace_conditions {
            return self.explain(record, criteria).eligible;
        }
        self.evaluator.evaluate(record, criteria)
    }

    /// Check eligibility for inputs already parsed with `serde_json`.
    ///
    /// Fails only when `criteria` is not a JSON object.
    pub fn is_eligible_json(
        &self,
        record: &serde_json::Value,
        criteria: &serde_json::Value,
    ) -> Result<bool> {
        let criteria = Criteria::try_from(criteria.clone())?;
        let record = Value::from(record.clone());
        Ok(self.is_eligible(&record, &criteria))
    }

    /// Evaluate every top-level condition and report each outcome
    pub fn explain(&self, record: &Value, criteria: &Criteria) -> EligibilityReport {
        let (eligible, conditions) = self.evaluator.evaluate_with_trace(record, criteria);

        if self.config.trace_conditions {
            for trace in &conditions {
                tracing::debug!(
                    "Condition {} on '{}' with operand {:?}: {}",
                    trace.kind,
                    trace.field,
                    trace.operand,
                    trace.result
                );
            }
        }
        tracing::debug!(
            "Eligibility check over {} condition(s): {}",
            conditions.len(),
            eligible
        );

        EligibilityReport {
            eligible,
            conditions,
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
