//! Evaluation results

mod trace;

pub use trace::ConditionTrace;
