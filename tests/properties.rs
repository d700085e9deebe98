//! Property tests for the substitution engine.
//!
//! Patterns are drawn from `[abc]` and replacements from `[XYZ]`, so no
//! replacement can ever re-create a pattern. That is the condition under
//! which a table is idempotent; the counter-example is tested separately.

use locfix::{RuleTable, apply};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn disjoint_table() -> impl Strategy<Value = RuleTable> {
    prop::collection::btree_map("[abc]{1,3}", "[XYZ]{1,3}", 1..6)
        .prop_map(|rules: BTreeMap<String, String>| RuleTable::from_pairs("prop", rules))
}

proptest! {
    /// Re-applying a table whose replacements never contain a pattern is a no-op.
    #[test]
    fn idempotent_when_replacements_are_disjoint(table in disjoint_table(), text in "[abc ]{0,40}") {
        let once = apply(&text, &table).unwrap();
        let twice = apply(&once.text, &table).unwrap();
        prop_assert_eq!(&twice.text, &once.text);
        prop_assert!(!twice.changed);
        prop_assert_eq!(twice.rules_fired, 0);
    }

    /// Text with none of the patterns comes back untouched.
    #[test]
    fn absent_patterns_are_a_noop(table in disjoint_table(), text in "[xyz 0-9]{0,40}") {
        let res = apply(&text, &table).unwrap();
        prop_assert_eq!(&res.text, &text);
        prop_assert!(!res.changed);
        prop_assert_eq!(res.rules_fired, 0);
        prop_assert_eq!(res.occurrences, 0);
    }

    /// Counters stay consistent with each other and with `changed`.
    #[test]
    fn counters_are_consistent(table in disjoint_table(), text in "[abc ]{0,40}") {
        let res = apply(&text, &table).unwrap();
        prop_assert_eq!(res.changed, res.text != text);
        prop_assert!(res.rules_fired >= res.rules_altering);
        prop_assert!(res.occurrences >= res.rules_fired);
        prop_assert!(!res.changed || res.rules_altering > 0);
        prop_assert!(res.rules_fired <= table.len());
    }

    /// Applying the same table twice to the same text gives the same result.
    #[test]
    fn deterministic(table in disjoint_table(), text in "[abc ]{0,40}") {
        prop_assert_eq!(apply(&text, &table).unwrap(), apply(&text, &table).unwrap());
    }
}

#[test]
fn idempotence_fails_when_a_replacement_reintroduces_its_pattern() {
    let table = RuleTable::from_pairs("grow", [("a", "aa")]);
    let once = apply("a", &table).unwrap();
    let twice = apply(&once.text, &table).unwrap();
    assert_eq!(once.text, "aa");
    assert_eq!(twice.text, "aaaa");
    assert_ne!(twice.text, once.text);
}

#[test]
fn longest_match_precedence() {
    let table = RuleTable::from_pairs("t", [("ab", "X"), ("a", "Y")]);
    assert_eq!(apply("ab", &table).unwrap().text, "X");
}

#[test]
fn cascade_is_sequential() {
    let table = RuleTable::from_pairs("t", [("a", "b"), ("b", "c")]);
    assert_eq!(apply("a", &table).unwrap().text, "c");
}

#[test]
fn fired_count() {
    let table = RuleTable::from_pairs("t", [("x", "1"), ("y", "2"), ("z", "3")]);
    let res = apply("x z", &table).unwrap();
    assert_eq!(res.rules_fired, 2);
    assert_eq!(res.text, "1 3");
}

#[test]
fn rejects_empty_pattern() {
    let table = RuleTable::from_pairs("t", [("", "anything")]);
    assert!(apply("whatever", &table).unwrap_err().is_invalid_rule());
}

#[test]
fn rate_window_end_to_end() {
    let res = apply("速率窗口(分钟):", locfix::tables::object_keys()).unwrap();
    assert_eq!(res.text, "RateWindow(min):");
    assert!(res.changed);
}
