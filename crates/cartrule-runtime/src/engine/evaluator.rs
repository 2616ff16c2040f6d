//! Criteria evaluation logic

use super::operators::comparison::execute_compare;
use super::operators::equality::{loose_eq, strictly_contains};
use crate::context::{resolve_path, Candidate};
use crate::result::ConditionTrace;
use cartrule_core::{classify, classify_operator, ConditionKind, Criteria, Value};

/// Default limit on and/or nesting below a top-level condition
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Evaluates criteria trees against records.
///
/// Stateless apart from its limits; one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_nesting_depth: usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }

    /// Set how deep and/or operands may nest.
    ///
    /// A combinator found deeper than this fails instead of recursing.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    /// Evaluate a criteria tree against a record.
    ///
    /// The record is eligible when every classified condition passes.
    /// Entries with unrecognized shapes constrain nothing.
    pub fn evaluate(&self, record: &Value, criteria: &Criteria) -> bool {
        let conditions = classify(criteria);

        let eligible = conditions.iter().all(|(kind, condition)| {
            let candidates = resolve_path(record, condition.field);
            let result = self.dispatch(kind, &candidates, condition.operand, 0);
            tracing::debug!(
                "Condition {} on '{}' over {} candidate(s): {}",
                kind,
                condition.field,
                candidates.len(),
                result
            );
            result
        });
        eligible
    }

    /// Evaluate a criteria tree, recording a trace for every top-level
    /// condition.
    ///
    /// Unlike [`Evaluator::evaluate`] this does not stop at the first
    /// failure. The returned boolean always equals `evaluate`'s.
    pub fn evaluate_with_trace(
        &self,
        record: &Value,
        criteria: &Criteria,
    ) -> (bool, Vec<ConditionTrace>) {
        let conditions = classify(criteria);
        let mut traces = Vec::with_capacity(conditions.len());
        let mut all_true = true;

        for (kind, condition) in conditions.iter() {
            let candidates = resolve_path(record, condition.field);
            let trace = self
                .dispatch_with_trace(condition.field, kind, &candidates, condition.operand, 0)
                .with_candidates(candidates.iter().map(|slot| slot.cloned()).collect());

            if !trace.result {
                all_true = false;
            }
            traces.push(trace);
        }

        (all_true, traces)
    }

    /// Run one predicate against already-resolved candidates
    pub fn evaluate_condition(
        &self,
        kind: ConditionKind,
        candidates: &[Candidate<'_>],
        operand: &Value,
    ) -> bool {
        self.dispatch(kind, candidates, operand, 0)
    }

    fn dispatch(
        &self,
        kind: ConditionKind,
        candidates: &[Candidate<'_>],
        operand: &Value,
        depth: usize,
    ) -> bool {
        match kind {
            ConditionKind::Basic => candidates.iter().any(|c| loose_eq(*c, operand)),
            ConditionKind::Gt | ConditionKind::Lt | ConditionKind::Gte | ConditionKind::Lte => {
                candidates
                    .iter()
                    .flatten()
                    .any(|c| execute_compare(c, kind, operand))
            }
            ConditionKind::In => match operand {
                Value::Array(needles) => needles.iter().any(|n| strictly_contains(candidates, n)),
                _ => false,
            },
            ConditionKind::And | ConditionKind::Or => {
                if !self.within_depth(kind, depth) {
                    return false;
                }

                // Sub-conditions share the outer candidates; the path is not re-resolved
                let mut results = sub_conditions(operand)
                    .map(|(sub_kind, sub_operand)| {
                        self.dispatch(sub_kind, candidates, sub_operand, depth + 1)
                    });

                if kind == ConditionKind::And {
                    results.all(|r| r)
                } else {
                    results.any(|r| r)
                }
            }
        }
    }

    fn dispatch_with_trace(
        &self,
        field: &str,
        kind: ConditionKind,
        candidates: &[Candidate<'_>],
        operand: &Value,
        depth: usize,
    ) -> ConditionTrace {
        if !kind.is_combinator() {
            let result = self.dispatch(kind, candidates, operand, depth);
            return ConditionTrace::new(field, kind, operand, result);
        }

        if !self.within_depth(kind, depth) {
            return ConditionTrace::new(field, kind, operand, false)
                .with_note(format!("nesting deeper than {} levels", self.max_nesting_depth));
        }

        let nested: Vec<ConditionTrace> = sub_conditions(operand)
            .map(|(sub_kind, sub_operand)| {
                self.dispatch_with_trace(field, sub_kind, candidates, sub_operand, depth + 1)
            })
            .collect();

        let result = if kind == ConditionKind::And {
            nested.iter().all(|t| t.result)
        } else {
            nested.iter().any(|t| t.result)
        };

        ConditionTrace::group(field, kind, operand, nested, result)
    }

    fn within_depth(&self, kind: ConditionKind, depth: usize) -> bool {
        if depth < self.max_nesting_depth {
            return true;
        }
        tracing::warn!(
            "'{}' condition nested {} levels deep exceeds the limit of {}, failing it",
            kind,
            depth,
            self.max_nesting_depth
        );
        false
    }
}

/// Classified entries of an and/or operand, in key order.
///
/// Entries whose `{key: operand}` shape is not a recognized condition are
/// dropped.
fn sub_conditions<'a>(operand: &'a Value) -> impl Iterator<Item = (ConditionKind, &'a Value)> + 'a {
    operand
        .as_object()
        .into_iter()
        .flat_map(|nested| nested.iter())
        .filter_map(|(key, sub_operand)| match classify_operator(key, sub_operand) {
            Some(kind) => Some((kind, sub_operand)),
            None => {
                tracing::debug!("Skipping unrecognized nested condition '{}'", key);
                None
            }
        })
}
