//! Run metrics.
//!
//! Every run records which rules fired and how often; the cost is one small
//! record per *fired* rule, so it is collected unconditionally. The public
//! API exposes it through `apply_verbose`; `apply_compiled` drops it.

use super::compiled_table::RuleId;
use std::time::Duration;

/// One rule that found its pattern during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFire {
    pub id: RuleId,
    /// Position of the rule in application order.
    pub step: usize,
    /// Non-overlapping matches replaced.
    pub occurrences: usize,
}

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    pub total: Duration,
    /// Rules that were searched for.
    pub rules_considered: usize,
    /// Rules skipped by the trigger pre-check.
    pub rules_skipped: usize,
    /// Fired rules, in the order they fired.
    pub fires: Vec<RuleFire>,
}

/// Substituter output bundled with its metrics.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub text: String,
    pub rules_fired: usize,
    /// Fired rules whose replacement differs from the pattern.
    pub rules_altering: usize,
    pub occurrences: usize,
    pub changed: bool,
    pub metrics: RunMetrics,
}
