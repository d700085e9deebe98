//! Error types.
//!
//! The engine itself only ever fails with [`Error::InvalidRule`]. Everything
//! else belongs to the driver and config layers, where per-file failures are
//! recorded rather than propagated (see `driver::run`).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a rule was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDefect {
    /// The pattern is the empty string (it would match everywhere).
    EmptyPattern,
    /// The pattern was already declared at index `first`.
    DuplicatePattern { first: usize },
}

impl fmt::Display for RuleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleDefect::EmptyPattern => f.write_str("pattern is empty"),
            RuleDefect::DuplicatePattern { first } => write!(f, "pattern duplicates rule #{first}"),
        }
    }
}

/// Main error type for locfix.
#[derive(Error, Debug)]
pub enum Error {
    /// A rule table is malformed. Fatal for the compile/apply call.
    #[error("invalid rule #{index} in table '{table}': {defect}")]
    InvalidRule { table: String, index: usize, defect: RuleDefect },

    /// Reading or writing a file failed.
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A config or table file named by the user could not be read.
    #[error("cannot read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scan root itself could not be read.
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// Configuration values are inconsistent.
    #[error("configuration error: {0}")]
    Config(String),

    /// A config or table file is not valid TOML for its schema.
    #[error("failed to parse {}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An `exclude` path pattern is not a valid regex.
    #[error("invalid exclude pattern: {0}")]
    Exclude(#[from] regex::Error),

    /// A table name does not match any built-in table.
    #[error("unknown built-in table '{0}'")]
    UnknownTable(String),
}

/// Result type alias for locfix operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Process exit status for this error: 2 when the arguments, config or
    /// tables are at fault, 1 when the files being processed are.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidRule { .. }
            | Error::ConfigRead { .. }
            | Error::Config(_)
            | Error::Toml { .. }
            | Error::Exclude(_)
            | Error::UnknownTable(_) => 2,
            Error::Io { .. } | Error::Walk(_) => 1,
        }
    }

    /// Returns true for errors raised by rule validation.
    pub fn is_invalid_rule(&self) -> bool {
        matches!(self, Error::InvalidRule { .. })
    }
}
