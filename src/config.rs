//! TOML configuration.
//!
//! ```toml
//! [scan]
//! root = "web/admin-spa/src"
//! extensions = ["vue"]
//! exclude = ['\.spec\.vue$']
//!
//! [run]
//! count = "rules"
//!
//! [[tables]]
//! builtin = "object-keys"
//!
//! [[tables]]
//! name = "extra"
//! rules = [{ from = "旧", to = "new" }]
//!
//! [[tables]]
//! file = "tables/more.toml"
//! ```
//!
//! Relative paths (`scan.root`, `file`) are resolved against the directory
//! holding the config file. Tables run in the order they are listed.

use crate::driver::{RunOptions, ScanConfig};
use crate::{Error, Result, Rule, RuleTable, tables};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const DEFAULT_CONFIG_FILE: &str = "locfix.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub run: RunOptions,
    pub tables: Vec<TableSpec>,
}

/// One `[[tables]]` entry. Exactly one of `builtin`, `file` or `rules` must
/// be set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableSpec {
    pub name: Option<String>,
    pub builtin: Option<String>,
    pub file: Option<PathBuf>,
    pub rules: Vec<Rule>,
}

/// Shape of a standalone table file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    name: Option<String>,
    rules: Vec<Rule>,
}

impl Config {
    /// Read and parse `path`, rebasing relative paths onto its directory.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
        let mut config: Config =
            toml::from_str(&text).map_err(|source| Error::Toml { path: path.to_path_buf(), source })?;

        let base = path.parent().unwrap_or(Path::new(""));
        config.scan.root = rebase(base, &config.scan.root);
        for entry in &mut config.tables {
            if let Some(file) = &entry.file {
                entry.file = Some(rebase(base, file));
            }
        }

        tracing::debug!(path = %path.display(), tables = config.tables.len(), "loaded config");
        Ok(config)
    }

    /// Load `locfix.toml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() { Config::load(&candidate).map(Some) } else { Ok(None) }
    }

    /// Materialize every table entry, in order.
    pub fn load_tables(&self) -> Result<Vec<RuleTable>> {
        self.tables.iter().enumerate().map(|(idx, entry)| entry.resolve(idx)).collect()
    }
}

impl TableSpec {
    /// Turn this entry into a table. `idx` names anonymous inline tables.
    pub fn resolve(&self, idx: usize) -> Result<RuleTable> {
        let sources = usize::from(self.builtin.is_some())
            + usize::from(self.file.is_some())
            + usize::from(!self.rules.is_empty());
        if sources != 1 {
            return Err(Error::config(format!(
                "table entry #{idx} must set exactly one of `builtin`, `file` or `rules`"
            )));
        }

        let mut table = if let Some(name) = &self.builtin {
            tables::builtin(name).cloned().ok_or_else(|| Error::UnknownTable(name.clone()))?
        } else if let Some(file) = &self.file {
            load_table_file(file)?
        } else {
            RuleTable::new(format!("inline-{idx}"), self.rules.clone())
        };

        if let Some(name) = &self.name {
            table = RuleTable::new(name.clone(), table.rules().to_vec());
        }
        Ok(table)
    }
}

/// Read a standalone table file (`name` + `rules`).
///
/// The table is named after the file stem unless the file sets `name`.
pub fn load_table_file(path: &Path) -> Result<RuleTable> {
    let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead { path: path.to_path_buf(), source })?;
    let parsed: TableFile =
        toml::from_str(&text).map_err(|source| Error::Toml { path: path.to_path_buf(), source })?;
    let name = parsed
        .name
        .unwrap_or_else(|| path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default());
    Ok(RuleTable::new(name, parsed.rules))
}

fn rebase(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}
