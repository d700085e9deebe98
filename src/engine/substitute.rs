//! The substitution pass.
//!
//! ```text
//! input ─▶ TriggerInfo::scan
//!            │
//!            ▼
//!   for rule in compiled.ordered():        (longest pattern first)
//!       skip if trigger mask lacks rule.needs
//!       n = occurrences of pattern in current text
//!       n == 0  ─▶ next rule
//!       n  > 0  ─▶ replace all, fired += 1, mask |= rule.yields
//!            │
//!            ▼
//!   RunResult { text, counts, changed = text != input }
//! ```
//!
//! Occurrences are counted with the same left-to-right, non-overlapping scan
//! that `str::replace` performs, so `occurrences` is exactly the number of
//! replacements made.
//!
//! Identity rules (pattern == replacement) still count as fired. Tooling that
//! consumed the old scripts' output relied on that count, and `rules_altering`
//! carries the number that excludes them.

use super::compiled_table::CompiledTable;
use super::metrics::{RuleFire, RunMetrics, RunResult};
use super::trigger::TriggerInfo;
use std::borrow::Cow;
use std::time::Instant;

/// Applies one compiled table to texts.
///
/// Holds no per-run state, so one `Substituter` can be reused for any number
/// of inputs.
#[derive(Debug, Clone, Copy)]
pub struct Substituter<'t, 'a> {
    compiled: &'t CompiledTable<'a>,
}

impl<'t, 'a> Substituter<'t, 'a> {
    pub fn new(compiled: &'t CompiledTable<'a>) -> Self {
        Substituter { compiled }
    }

    pub fn run(&self, input: &str) -> RunResult {
        let start = Instant::now();
        let mut trigger = TriggerInfo::scan(input);
        let mut text: Cow<'_, str> = Cow::Borrowed(input);
        let mut metrics = RunMetrics::default();
        let mut rules_altering = 0;
        let mut occurrences = 0;

        for (step, (rule, meta)) in self.compiled.ordered().enumerate() {
            if !trigger.admits(meta.needs) {
                metrics.rules_skipped += 1;
                continue;
            }
            metrics.rules_considered += 1;

            let pattern = rule.pattern.as_ref();
            let found = text.matches(pattern).count();
            if found == 0 {
                continue;
            }

            if !meta.identity {
                text = Cow::Owned(text.replace(pattern, &rule.replacement));
                trigger.absorb(meta.yields);
                rules_altering += 1;
            }
            occurrences += found;
            metrics.fires.push(RuleFire { id: meta.id, step, occurrences: found });

            tracing::trace!(
                table = self.compiled.name(),
                rule = meta.id,
                pattern,
                occurrences = found,
                "rule fired"
            );
        }

        let changed = text != input;
        metrics.total = start.elapsed();

        RunResult {
            text: text.into_owned(),
            rules_fired: metrics.fires.len(),
            rules_altering,
            occurrences,
            changed,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleTable;

    fn run(pairs: &[(&'static str, &'static str)], input: &str) -> RunResult {
        let table = RuleTable::from_pairs("t", pairs.iter().copied());
        let compiled = CompiledTable::new(&table).unwrap();
        Substituter::new(&compiled).run(input)
    }

    #[test]
    fn longer_pattern_wins_over_its_prefix() {
        let res = run(&[("a", "Y"), ("ab", "X")], "ab");
        assert_eq!(res.text, "X");
        assert_eq!(res.rules_fired, 1);
    }

    #[test]
    fn replacements_cascade_into_later_rules() {
        let res = run(&[("a", "b"), ("b", "c")], "a");
        assert_eq!(res.text, "c");
        assert_eq!(res.rules_fired, 2);
    }

    #[test]
    fn earlier_rules_do_not_see_later_output() {
        // "b" -> "a" runs first, so the "a" it produces is rewritten by the
        // second rule, but the "b" produced by the second rule is left alone.
        let res = run(&[("b", "a"), ("a", "b")], "b");
        assert_eq!(res.text, "b");
        assert_eq!(res.rules_fired, 2);
        assert!(!res.changed);
        assert_eq!(res.rules_altering, 2);
    }

    #[test]
    fn counts_distinct_rules_and_occurrences() {
        let res = run(&[("x", "1"), ("y", "2"), ("z", "3")], "x z x");
        assert_eq!(res.text, "1 3 1");
        assert_eq!(res.rules_fired, 2);
        assert_eq!(res.occurrences, 3);
    }

    #[test]
    fn occurrences_are_non_overlapping() {
        let res = run(&[("aa", "b")], "aaa");
        assert_eq!(res.text, "ba");
        assert_eq!(res.occurrences, 1);
    }

    #[test]
    fn identity_rule_fires_without_changing_text() {
        let res = run(&[("Token", "Token")], "Token totales");
        assert_eq!(res.rules_fired, 1);
        assert_eq!(res.rules_altering, 0);
        assert!(!res.changed);
        assert_eq!(res.text, "Token totales");
    }

    #[test]
    fn trigger_skips_rules_for_absent_scripts() {
        let res = run(&[("输入", "inputTokens"), ("Costo total", "totalCost")], "Costo total");
        assert_eq!(res.text, "totalCost");
        assert_eq!(res.metrics.rules_skipped, 1);
        assert_eq!(res.metrics.rules_considered, 1);
    }

    #[test]
    fn trigger_does_not_block_cascade_into_new_script() {
        // The input has no CJK, but the first replacement inserts some.
        let res = run(&[("a", "中"), ("中", "b")], "a");
        assert_eq!(res.text, "b");
        assert_eq!(res.metrics.rules_skipped, 0);
    }

    #[test]
    fn fire_records_follow_application_order() {
        let res = run(&[("x", "1"), ("long", "2")], "long x");
        let ids: Vec<usize> = res.metrics.fires.iter().map(|f| f.id).collect();
        let steps: Vec<usize> = res.metrics.fires.iter().map(|f| f.step).collect();
        assert_eq!(ids, [1, 0]);
        assert_eq!(steps, [0, 1]);
    }

    #[test]
    fn empty_input_is_untouched() {
        let res = run(&[("a", "b")], "");
        assert_eq!(res.text, "");
        assert!(!res.changed);
        assert_eq!(res.rules_fired, 0);
    }
}
