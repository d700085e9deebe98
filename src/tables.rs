//! Built-in rule tables.
//!
//! Each table is constructed once, on first use, and never mutated. Look them
//! up by name with [`builtin`] or list them with [`BUILTIN`].

#[path = "tables/object_keys.rs"]
mod object_keys;
#[path = "tables/zh_es_ui.rs"]
mod zh_es_ui;

use crate::RuleTable;
use once_cell::sync::Lazy;

static OBJECT_KEYS: Lazy<RuleTable> = Lazy::new(object_keys::table);
static ZH_ES_UI: Lazy<RuleTable> = Lazy::new(zh_es_ui::table);

/// A named built-in table.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTable {
    pub name: &'static str,
    pub description: &'static str,
    get: fn() -> &'static RuleTable,
}

impl BuiltinTable {
    pub fn table(&self) -> &'static RuleTable {
        (self.get)()
    }
}

pub static BUILTIN: &[BuiltinTable] = &[
    BuiltinTable {
        name: "object-keys",
        description: "Restore object keys and literals broken by a bulk zh→es translation",
        get: object_keys,
    },
    BuiltinTable {
        name: "zh-es-ui",
        description: "Translate common Chinese UI strings to Spanish (es-MX)",
        get: zh_es_ui,
    },
];

pub fn object_keys() -> &'static RuleTable {
    &OBJECT_KEYS
}

pub fn zh_es_ui() -> &'static RuleTable {
    &ZH_ES_UI
}

/// Find a built-in table by name.
pub fn builtin(name: &str) -> Option<&'static RuleTable> {
    BUILTIN.iter().find(|b| b.name == name).map(BuiltinTable::table)
}
