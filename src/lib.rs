extern crate self as locfix;

#[macro_use]
mod macros;
mod api;
pub mod config;
pub mod driver;
mod engine;
mod error;
pub mod tables;

pub use api::{
    ApplyDetails, ApplyResult, ApplyResultVerbose, RuleFireSummary, apply, apply_compiled, apply_sequence,
    apply_verbose,
};
pub use engine::{CharClass, CompiledTable, RuleMeta};
pub use error::{Error, Result, RuleDefect};

use serde::Deserialize;
use std::borrow::Cow;

// --- Rules ------------------------------------------------------------------

/// A literal substitution: every occurrence of `pattern` becomes `replacement`.
///
/// Built-in tables borrow `'static` strings; tables loaded from TOML own
/// theirs. In TOML a rule is written `{ from = "...", to = "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    #[serde(rename = "from")]
    pub pattern: Cow<'static, str>,
    #[serde(rename = "to")]
    pub replacement: Cow<'static, str>,
}

impl Rule {
    pub fn new(pattern: impl Into<Cow<'static, str>>, replacement: impl Into<Cow<'static, str>>) -> Self {
        Rule { pattern: pattern.into(), replacement: replacement.into() }
    }

    /// True when applying the rule can never alter text.
    pub fn is_identity(&self) -> bool {
        self.pattern == self.replacement
    }
}

/// A named list of rules in declaration order.
///
/// Storage order carries no meaning for application: the engine derives its
/// own order when the table is compiled (see [`CompiledTable`]). Declaration
/// order is only used to break ties between patterns of equal length.
///
/// Construction never fails; validation (non-empty, unique patterns) happens
/// in [`RuleTable::compile`] so that a malformed table is reported where it is
/// used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    name: String,
    rules: Vec<Rule>,
}

impl RuleTable {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        RuleTable { name: name.into(), rules }
    }

    /// Build a table from `(pattern, replacement)` pairs.
    ///
    /// ```
    /// use locfix::RuleTable;
    ///
    /// let table = RuleTable::from_pairs("demo", [("ab", "X"), ("a", "Y")]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_pairs<I, P, R>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<Cow<'static, str>>,
        R: Into<Cow<'static, str>>,
    {
        let rules = pairs.into_iter().map(|(p, r)| Rule::new(p, r)).collect();
        RuleTable::new(name, rules)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a rule after all existing ones.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Validate the table and derive its application order.
    pub fn compile(&self) -> Result<CompiledTable<'_>> {
        CompiledTable::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_rule_is_detected() {
        assert!(Rule::new("Token", "Token").is_identity());
        assert!(!Rule::new("Token", "Tokens").is_identity());
    }

    #[test]
    fn from_pairs_keeps_declaration_order() {
        let table = RuleTable::from_pairs("t", [("b", "1"), ("a", "2")]);
        let patterns: Vec<&str> = table.rules().iter().map(|r| r.pattern.as_ref()).collect();
        assert_eq!(patterns, ["b", "a"]);
        assert_eq!(table.name(), "t");
    }

    #[test]
    fn push_appends() {
        let mut table = RuleTable::new("t", Vec::new());
        assert!(table.is_empty());
        table.push(Rule::new("x", "y"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn rule_deserializes_from_toml_fields() {
        #[derive(Deserialize)]
        struct Wrapper {
            rules: Vec<Rule>,
        }
        let parsed: Wrapper = toml::from_str(r#"rules = [{ from = "旧", to = "" }]"#).unwrap();
        assert_eq!(parsed.rules, vec![Rule::new("旧", "")]);
    }
}
