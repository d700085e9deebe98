use crate::engine::{CompiledTable, RunResult, Substituter};
use crate::{Result, RuleTable};
use std::time::Duration;

/// Result of rewriting one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyResult {
    /// The rewritten text.
    pub text: String,
    /// Distinct rules that found their pattern when their turn came,
    /// including identity rules.
    pub rules_fired: usize,
    /// Fired rules whose replacement differs from their pattern.
    pub rules_altering: usize,
    /// Total replacements made across all fired rules.
    pub occurrences: usize,
    /// `text` differs from the input.
    pub changed: bool,
}

impl From<RunResult> for ApplyResult {
    fn from(run: RunResult) -> Self {
        ApplyResult {
            text: run.text,
            rules_fired: run.rules_fired,
            rules_altering: run.rules_altering,
            occurrences: run.occurrences,
            changed: run.changed,
        }
    }
}

/// A fired rule, as reported by [`apply_verbose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFireSummary {
    /// Position in application order.
    pub step: usize,
    /// Position in the table's declaration order.
    pub declared: usize,
    pub pattern: String,
    pub replacement: String,
    pub occurrences: usize,
    pub identity: bool,
}

/// Additional details returned by [`apply_verbose`].
#[derive(Debug, Clone)]
pub struct ApplyDetails {
    pub table: String,
    pub total: Duration,
    /// Rules that were searched for.
    pub rules_considered: usize,
    /// Rules skipped because the text lacked a character class they need.
    pub rules_skipped: usize,
    pub fires: Vec<RuleFireSummary>,
}

/// Result from [`apply_verbose`].
#[derive(Debug, Clone)]
pub struct ApplyResultVerbose {
    pub result: ApplyResult,
    pub details: ApplyDetails,
}

/// Rewrite `text` with `rules`.
///
/// Compiles the table on every call; use [`apply_compiled`] to reuse one
/// compiled table across many texts.
///
/// # Errors
///
/// [`Error::InvalidRule`](crate::Error::InvalidRule) when a pattern is empty or
/// declared twice.
///
/// # Example
/// ```
/// use locfix::{RuleTable, apply};
///
/// let rules = RuleTable::from_pairs("demo", [("ab", "X"), ("a", "Y")]);
/// let out = apply("ab", &rules).unwrap();
/// assert_eq!(out.text, "X");
/// assert!(out.changed);
/// ```
pub fn apply(text: &str, rules: &RuleTable) -> Result<ApplyResult> {
    let compiled = rules.compile()?;
    Ok(apply_compiled(text, &compiled))
}

/// Rewrite `text` with an already compiled table. Cannot fail.
pub fn apply_compiled(text: &str, compiled: &CompiledTable<'_>) -> ApplyResult {
    Substituter::new(compiled).run(text).into()
}

/// Run several tables one after another, each over the previous one's output.
///
/// Counts are summed across tables; `changed` compares the final text with the
/// original input.
pub fn apply_sequence(text: &str, tables: &[CompiledTable<'_>]) -> ApplyResult {
    let mut current = text.to_string();
    let mut total = ApplyResult::default();

    for compiled in tables {
        let run = Substituter::new(compiled).run(&current);
        total.rules_fired += run.rules_fired;
        total.rules_altering += run.rules_altering;
        total.occurrences += run.occurrences;
        if run.changed {
            current = run.text;
        }
    }

    total.changed = current != text;
    total.text = current;
    total
}

/// Rewrite `text` and return a per-rule trace alongside the result.
///
/// This is meant for debugging tables; the plain [`apply_compiled`] path does
/// not build the trace.
pub fn apply_verbose(text: &str, compiled: &CompiledTable<'_>) -> ApplyResultVerbose {
    let run = Substituter::new(compiled).run(text);

    let fires = run
        .metrics
        .fires
        .iter()
        .map(|fire| {
            let rule = compiled.rule(fire.id);
            RuleFireSummary {
                step: fire.step,
                declared: fire.id,
                pattern: rule.pattern.to_string(),
                replacement: rule.replacement.to_string(),
                occurrences: fire.occurrences,
                identity: compiled.meta(fire.id).identity,
            }
        })
        .collect();

    let details = ApplyDetails {
        table: compiled.name().to_string(),
        total: run.metrics.total,
        rules_considered: run.metrics.rules_considered,
        rules_skipped: run.metrics.rules_skipped,
        fires,
    };

    ApplyResultVerbose { result: run.into(), details }
}
