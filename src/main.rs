mod debug_report;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use locfix::config::{self, Config};
use locfix::driver::{self, CountMode, RunOptions, ScanConfig};
use locfix::{CompiledTable, Error, RuleTable, tables};
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Literal, longest-match-first text substitution over template trees.
#[derive(Parser)]
#[command(name = "locfix", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Force ANSI color output.
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite every matching file under a directory
    Run {
        /// Config file (default: ./locfix.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory to scan (overrides `scan.root`)
        #[arg(long)]
        root: Option<PathBuf>,

        /// File extension to visit; repeatable (overrides `scan.extensions`)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,

        /// Built-in table name or table file; repeatable, applied in order
        /// (overrides `[[tables]]`)
        #[arg(short, long = "table", value_name = "TABLE")]
        tables: Vec<String>,

        /// Report what would change without writing files
        #[arg(long)]
        dry_run: bool,

        /// What the per-file count means
        #[arg(long, value_enum)]
        count: Option<CountMode>,
    },
    /// Rewrite text from --input or stdin and print it to stdout
    Apply {
        /// Built-in table name or table file; repeatable, applied in order
        #[arg(short, long = "table", value_name = "TABLE", required = true)]
        tables: Vec<String>,

        /// Text to rewrite instead of stdin
        #[arg(short, long)]
        input: Option<String>,

        /// Print a rule-by-rule trace to stderr
        #[arg(long)]
        trace: bool,
    },
    /// List built-in tables
    Tables,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    match execute(cli.command, color) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "locfix=info",
        1 => "locfix=debug",
        _ => "locfix=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

/// 2 for invalid arguments, config or tables; 1 for everything else.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}

/// Flags of `locfix run` that take precedence over the config file.
#[derive(Debug, Default)]
struct RunOverrides {
    root: Option<PathBuf>,
    extensions: Vec<String>,
    dry_run: bool,
    count: Option<CountMode>,
}

impl RunOverrides {
    fn merge(self, config: &Config) -> (ScanConfig, RunOptions) {
        let mut scan = config.scan.clone();
        if let Some(root) = self.root {
            scan.root = root;
        }
        if !self.extensions.is_empty() {
            scan.extensions = self.extensions;
        }
        let mut options = config.run;
        options.dry_run |= self.dry_run;
        if let Some(count) = self.count {
            options.count = count;
        }
        (scan, options)
    }
}

fn execute(command: Command, color: bool) -> anyhow::Result<u8> {
    match command {
        Command::Run { config, root, extensions, tables, dry_run, count } => {
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::discover(Path::new("."))?.unwrap_or_default(),
            };
            let (scan, options) = RunOverrides { root, extensions, dry_run, count }.merge(&config);

            let loaded = if tables.is_empty() { config.load_tables()? } else { resolve_named(&tables)? };
            if loaded.is_empty() {
                return Err(Error::config("no tables selected (use --table or [[tables]] in the config)").into());
            }
            let compiled = compile_all(&loaded)?;

            let report = driver::run(&scan, &compiled, &options)?;
            debug_report::print_batch(&report, color);

            Ok(if report.is_clean() { 0 } else { 1 })
        }
        Command::Apply { tables, input, trace } => {
            let loaded = resolve_named(&tables)?;
            let compiled = compile_all(&loaded)?;
            let input = match input {
                Some(text) => text,
                None => read_stdin()?,
            };

            let output = if trace {
                let mut runs = Vec::with_capacity(compiled.len());
                let mut current = input;
                for table in &compiled {
                    let run = locfix::apply_verbose(&current, table);
                    current = run.result.text.clone();
                    runs.push(run);
                }
                debug_report::print_trace(&runs, color);
                current
            } else {
                locfix::apply_sequence(&input, &compiled).text
            };

            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes()).context("failed to write stdout")?;
            stdout.flush().context("failed to write stdout")?;
            Ok(0)
        }
        Command::Tables => {
            for builtin in tables::BUILTIN {
                println!("{:<14} {:>4} rules  {}", builtin.name, builtin.table().len(), builtin.description);
            }
            Ok(0)
        }
    }
}

/// Each name is a built-in table, or a path to a table file when it ends in
/// `.toml`.
fn resolve_named(names: &[String]) -> locfix::Result<Vec<RuleTable>> {
    names
        .iter()
        .map(|name| {
            if name.ends_with(".toml") {
                config::load_table_file(Path::new(name))
            } else {
                tables::builtin(name).cloned().ok_or_else(|| Error::UnknownTable(name.clone()))
            }
        })
        .collect()
}

fn compile_all(loaded: &[RuleTable]) -> locfix::Result<Vec<CompiledTable<'_>>> {
    loaded.iter().map(RuleTable::compile).collect()
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_command(config: Option<PathBuf>, root: Option<PathBuf>, tables: &[&str]) -> Command {
        Command::Run {
            config,
            root,
            extensions: Vec::new(),
            tables: tables.iter().map(|t| t.to_string()).collect(),
            dry_run: true,
            count: None,
        }
    }

    fn exit_status(command: Command) -> u8 {
        match execute(command, false) {
            Ok(code) => code,
            Err(err) => exit_code_for(&err),
        }
    }

    #[test]
    fn clean_batch_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.vue"), "输入").unwrap();
        assert_eq!(exit_status(run_command(None, Some(dir.path().into()), &["object-keys"])), 0);
    }

    #[test]
    fn failed_file_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.vue"), [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(exit_status(run_command(None, Some(dir.path().into()), &["object-keys"])), 1);
    }

    #[test]
    fn missing_config_file_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let command = run_command(Some(dir.path().join("nope.toml")), Some(dir.path().into()), &["object-keys"]);
        assert_eq!(exit_status(command), 2);
    }

    #[test]
    fn missing_table_file_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let command = run_command(None, Some(dir.path().into()), &[missing.to_str().unwrap()]);
        assert_eq!(exit_status(command), 2);
    }

    #[test]
    fn unknown_table_and_missing_root_exit_two() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(exit_status(run_command(None, Some(dir.path().into()), &["bogus"])), 2);
        assert_eq!(exit_status(run_command(None, Some(dir.path().join("absent")), &["object-keys"])), 2);
    }

    #[test]
    fn foreign_errors_exit_one() {
        assert_eq!(exit_code_for(&anyhow::anyhow!("stdout closed")), 1);
    }

    #[test]
    fn flags_override_config() {
        let config: Config = toml::from_str(
            "[scan]\nroot = \"src\"\nextensions = [\"vue\"]\n\n[run]\ncount = \"occurrences\"",
        )
        .unwrap();
        let overrides = RunOverrides {
            root: Some(PathBuf::from("other")),
            extensions: vec!["js".into()],
            dry_run: true,
            count: Some(CountMode::Rules),
        };
        let (scan, options) = overrides.merge(&config);
        assert_eq!(scan.root, PathBuf::from("other"));
        assert_eq!(scan.extensions, ["js"]);
        assert!(options.dry_run);
        assert_eq!(options.count, CountMode::Rules);
    }

    #[test]
    fn absent_flags_keep_config() {
        let config: Config = toml::from_str("[scan]\nroot = \"src\"\n\n[run]\ndry_run = true").unwrap();
        let (scan, options) = RunOverrides::default().merge(&config);
        assert_eq!(scan.root, PathBuf::from("src"));
        assert_eq!(scan.extensions, ["vue"]);
        assert!(options.dry_run);
        assert_eq!(options.count, CountMode::Rules);
    }
}
