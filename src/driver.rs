//! Batch driver: find files, rewrite them, report.
//!
//! The engine never touches the filesystem; this module is the thin caller
//! around it. For every discovered file it reads UTF-8 text, runs the
//! compiled tables in sequence, and writes the result back only when the
//! text changed.
//!
//! Failures are per file. A file that cannot be read or written is logged,
//! recorded in the [`BatchReport`], and the batch moves on.

use crate::{ApplyResult, CompiledTable, Error, Result, apply_sequence};
use regex::RegexSet;
use serde::Deserialize;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Which files to visit.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub root: PathBuf,
    /// Extensions to visit, without the dot. Empty means every file.
    pub extensions: Vec<String>,
    /// Directory names that are never entered.
    pub exclude_dirs: Vec<String>,
    /// Regexes matched against the path relative to `root`.
    pub exclude: Vec<String>,
    /// Skip directories whose name starts with `.`.
    pub skip_hidden: bool,
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            root: PathBuf::from("."),
            extensions: vec!["vue".to_string()],
            exclude_dirs: vec!["node_modules".to_string()],
            exclude: Vec::new(),
            skip_hidden: true,
            follow_links: false,
        }
    }
}

/// What a file's count means in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    /// Distinct rules fired per file.
    #[default]
    Rules,
    /// Individual replacements per file.
    Occurrences,
}

impl CountMode {
    pub fn count(self, result: &ApplyResult) -> usize {
        match self {
            CountMode::Rules => result.rules_fired,
            CountMode::Occurrences => result.occurrences,
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            CountMode::Rules => "fixes",
            CountMode::Occurrences => "replacements",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunOptions {
    /// Compute everything but leave files untouched.
    pub dry_run: bool,
    pub count: CountMode,
}

/// What happened to one processed file, changed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub changed: bool,
    /// False for unchanged files and in dry-run mode.
    pub written: bool,
    pub rules_fired: usize,
    pub occurrences: usize,
    /// `rules_fired` or `occurrences`, per [`CountMode`].
    pub count: usize,
}

#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Aggregate result of [`run`].
#[derive(Debug, Default)]
pub struct BatchReport {
    pub root: PathBuf,
    pub files_scanned: usize,
    /// Files whose text changed, in discovery order.
    pub changed: Vec<FileOutcome>,
    pub failures: Vec<FileFailure>,
    /// Sum of `count` over changed files.
    pub total: usize,
    pub count_mode: CountMode,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn files_changed(&self) -> usize {
        self.changed.len()
    }

    /// True when every file was processed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// List the files `config` selects, sorted by path.
///
/// Unreadable directory entries below the root are logged and skipped. A
/// missing or unreadable root is an error.
pub fn discover(config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let root = config.root.as_path();
    if !root.is_dir() {
        return Err(Error::config(format!("scan root {} is not a directory", root.display())));
    }
    let excluded = RegexSet::new(&config.exclude)?;

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e, config));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_wanted_extension(entry.path(), &config.extensions) {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if excluded.is_match(&relative.to_string_lossy()) {
            tracing::debug!(path = %relative.display(), "excluded by pattern");
            continue;
        }
        files.push(entry.into_path());
    }

    tracing::debug!(root = %root.display(), files = files.len(), "discovery finished");
    Ok(files)
}

fn is_skipped_dir(entry: &DirEntry, config: &ScanConfig) -> bool {
    // The root itself is always entered, even when it is `.`.
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    (config.skip_hidden && name.starts_with('.')) || config.exclude_dirs.iter().any(|d| *d == name)
}

fn has_wanted_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    match path.extension().and_then(OsStr::to_str) {
        Some(ext) => extensions.iter().any(|wanted| wanted.trim_start_matches('.') == ext),
        None => false,
    }
}

/// Rewrite one file with `tables`, applied in order.
///
/// The file is written only when its text changed and `options.dry_run` is
/// off.
pub fn process_file(path: &Path, tables: &[CompiledTable<'_>], options: &RunOptions) -> Result<FileOutcome> {
    let input = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let result = apply_sequence(&input, tables);

    let written = result.changed && !options.dry_run;
    if written {
        fs::write(path, &result.text).map_err(|e| Error::io(path, e))?;
    }

    Ok(FileOutcome {
        path: path.to_path_buf(),
        changed: result.changed,
        written,
        rules_fired: result.rules_fired,
        occurrences: result.occurrences,
        count: options.count.count(&result),
    })
}

/// Discover files under `config.root` and rewrite each one.
///
/// Only discovery errors abort the batch; per-file errors end up in
/// [`BatchReport::failures`].
pub fn run(config: &ScanConfig, tables: &[CompiledTable<'_>], options: &RunOptions) -> Result<BatchReport> {
    let files = discover(config)?;
    tracing::info!(
        root = %config.root.display(),
        files = files.len(),
        tables = tables.len(),
        dry_run = options.dry_run,
        "checking files"
    );

    let mut report = BatchReport {
        root: config.root.clone(),
        files_scanned: files.len(),
        count_mode: options.count,
        dry_run: options.dry_run,
        ..Default::default()
    };

    for path in files {
        match process_file(&path, tables, options) {
            Ok(outcome) if outcome.changed => {
                let shown = display_relative(&path, &config.root);
                if outcome.written {
                    tracing::info!(path = %shown, count = outcome.count, "rewrote file");
                } else {
                    tracing::info!(path = %shown, count = outcome.count, "would rewrite file");
                }
                report.total += outcome.count;
                report.changed.push(outcome);
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to process file");
                report.failures.push(FileFailure { path, error });
            }
        }
    }

    Ok(report)
}

/// `path` relative to `root` when possible.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scan_targets_vue_outside_node_modules() {
        let config = ScanConfig::default();
        assert_eq!(config.extensions, ["vue"]);
        assert_eq!(config.exclude_dirs, ["node_modules"]);
        assert!(config.skip_hidden);
    }

    #[test]
    fn extension_match_ignores_leading_dot() {
        let wanted = vec![".vue".to_string(), "js".to_string()];
        assert!(has_wanted_extension(Path::new("a/b.vue"), &wanted));
        assert!(has_wanted_extension(Path::new("a/b.js"), &wanted));
        assert!(!has_wanted_extension(Path::new("a/b.ts"), &wanted));
        assert!(!has_wanted_extension(Path::new("a/Makefile"), &wanted));
        assert!(has_wanted_extension(Path::new("a/Makefile"), &[]));
    }

    #[test]
    fn count_mode_picks_field() {
        let result = ApplyResult { rules_fired: 2, occurrences: 5, ..Default::default() };
        assert_eq!(CountMode::Rules.count(&result), 2);
        assert_eq!(CountMode::Occurrences.count(&result), 5);
    }

    #[test]
    fn count_mode_deserializes_lowercase() {
        let options: RunOptions = toml::from_str("count = \"occurrences\"\ndry_run = true").unwrap();
        assert_eq!(options.count, CountMode::Occurrences);
        assert!(options.dry_run);
    }

    #[test]
    fn missing_root_is_an_error() {
        let config = ScanConfig { root: PathBuf::from("/definitely/not/here"), ..Default::default() };
        assert!(matches!(discover(&config), Err(Error::Config(_))));
    }

    #[test]
    fn bad_exclude_pattern_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScanConfig { root: dir.path().to_path_buf(), exclude: vec!["(".into()], ..Default::default() };
        assert!(matches!(discover(&config), Err(Error::Exclude(_))));
    }
}
