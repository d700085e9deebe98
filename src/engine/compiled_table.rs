//! Table compilation.
//!
//! A [`RuleTable`] is plain data in declaration order. Compiling it checks the
//! table invariants and derives everything the substituter needs up front:
//!
//! - **Application order**: descending pattern length, measured in characters
//!   (Unicode scalar values, not bytes). A shorter pattern that is a substring
//!   of a longer one must not consume text meant for the longer rule, so
//!   `{"速率窗口(分钟):", "速率"}` always tries the first one first.
//! - **Tie-break**: declaration order. The sort is stable, so two runs over the
//!   same table always apply rules in the same sequence.
//! - **Per-rule metadata** ([`RuleMeta`]): character length, identity flag and
//!   the trigger masks of pattern and replacement.
//!
//! ## Invariants
//!
//! - `RuleId` is the declaration index into `RuleTable::rules()` and
//!   `CompiledTable::metas`. Those must stay aligned.
//! - `order` is a permutation of `0..len`.

use super::trigger::CharClass;
use crate::{Error, Result, Rule, RuleDefect, RuleTable};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Rule identifier (declaration index into the table).
pub type RuleId = usize;

/// Metadata derived from a rule at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub id: RuleId,
    /// Pattern length in characters.
    pub char_len: usize,
    /// Classes the text must contain for the pattern to occur.
    pub needs: CharClass,
    /// Classes the replacement inserts.
    pub yields: CharClass,
    pub identity: bool,
}

/// A validated rule table with its application order.
#[derive(Debug, Clone)]
pub struct CompiledTable<'a> {
    table: &'a RuleTable,
    metas: Vec<RuleMeta>,
    order: Vec<RuleId>,
}

impl<'a> CompiledTable<'a> {
    /// Validate `table` and derive its application order.
    ///
    /// Fails with [`Error::InvalidRule`] on the first empty or duplicate
    /// pattern.
    pub fn new(table: &'a RuleTable) -> Result<Self> {
        let mut first_seen: HashMap<&str, RuleId> = HashMap::with_capacity(table.len());
        let mut metas = Vec::with_capacity(table.len());

        for (id, rule) in table.rules().iter().enumerate() {
            let pattern = rule.pattern.as_ref();
            if pattern.is_empty() {
                return Err(invalid(table, id, RuleDefect::EmptyPattern));
            }
            if let Some(&first) = first_seen.get(pattern) {
                return Err(invalid(table, id, RuleDefect::DuplicatePattern { first }));
            }
            first_seen.insert(pattern, id);

            metas.push(RuleMeta {
                id,
                char_len: pattern.chars().count(),
                needs: CharClass::scan(pattern),
                yields: CharClass::scan(&rule.replacement),
                identity: rule.is_identity(),
            });
        }

        let mut order: Vec<RuleId> = (0..metas.len()).collect();
        // `sort_by_key` is stable: equal lengths keep declaration order.
        order.sort_by_key(|&id| Reverse(metas[id].char_len));

        tracing::debug!(table = table.name(), rules = metas.len(), "compiled rule table");

        Ok(CompiledTable { table, metas, order })
    }

    pub fn name(&self) -> &'a str {
        self.table.name()
    }

    pub fn table(&self) -> &'a RuleTable {
        self.table
    }

    pub fn len(&self) -> usize {
        self.metas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    pub fn rule(&self, id: RuleId) -> &'a Rule {
        &self.table.rules()[id]
    }

    pub fn meta(&self, id: RuleId) -> &RuleMeta {
        &self.metas[id]
    }

    /// Declaration indices in application order.
    pub fn order(&self) -> &[RuleId] {
        &self.order
    }

    /// Rules paired with their metadata, in application order.
    pub fn ordered(&self) -> impl Iterator<Item = (&'a Rule, &RuleMeta)> + '_ {
        let rules = self.table.rules();
        self.order.iter().map(move |&id| (&rules[id], &self.metas[id]))
    }
}

fn invalid(table: &RuleTable, index: usize, defect: RuleDefect) -> Error {
    Error::InvalidRule { table: table.name().to_string(), index, defect }
}
