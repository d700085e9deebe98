use locfix::ApplyResultVerbose;
use locfix::driver::{self, BatchReport};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Per-file lines plus totals, on stdout.
pub fn print_batch(report: &BatchReport, color: bool) {
    let palette = ansi::Palette::new(color);
    let noun = report.count_mode.noun();

    println!(
        "{}",
        palette.paint(format!("Checking {} files under {}", report.files_scanned, report.root.display()), ansi::GRAY)
    );

    for outcome in &report.changed {
        println!(
            "{} {}: {}",
            palette.paint("✓", ansi::GREEN),
            driver::display_relative(&outcome.path, &report.root),
            palette.paint(format!("{} {}", outcome.count, noun), ansi::CYAN)
        );
    }

    for failure in &report.failures {
        println!(
            "{} {}: {}",
            palette.paint("✗", ansi::RED),
            driver::display_relative(&failure.path, &report.root),
            palette.dim(error_chain(&failure.error))
        );
    }

    let heading = if report.dry_run { "Dry run complete (no files written)" } else { "Fix complete!" };
    println!("\n{}", palette.bold(heading));
    println!("Files processed: {}", palette.paint(report.files_changed().to_string(), ansi::GREEN));
    println!("Total {}: {}", noun, palette.paint(report.total.to_string(), ansi::GREEN));
    if !report.is_clean() {
        println!("Failed: {}", palette.paint(report.failures.len().to_string(), ansi::RED));
    }
}

/// `err` followed by each of its causes, `: `-separated.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        out.push_str(": ");
        out.push_str(&inner.to_string());
        cause = inner.source();
    }
    out
}

/// Rule-by-rule trace of one `apply_verbose` run per table, on stderr.
pub fn print_trace(runs: &[ApplyResultVerbose], color: bool) {
    let palette = ansi::Palette::new(color);

    for run in runs {
        let details = &run.details;
        eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Table: {}", details.table), ansi::CYAN)));

        eprintln!("{}", palette.paint("━━━ Fired rules ━━━", ansi::GRAY));
        if details.fires.is_empty() {
            eprintln!("{}", palette.dim("  No rule matched"));
        }
        for fire in &details.fires {
            let replacement = if fire.identity {
                palette.dim("(identity)")
            } else {
                palette.paint(format!("{:?}", fire.replacement), ansi::GREEN)
            };
            eprintln!(
                "  {} {} {} {} {}",
                palette.paint(format!("[{}]", fire.step), ansi::GRAY),
                palette.paint(format!("{:?}", fire.pattern), ansi::YELLOW),
                palette.dim("→"),
                replacement,
                palette.dim(format!("×{} (rule #{})", fire.occurrences, fire.declared)),
            );
        }

        eprintln!("{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
        eprintln!(
            "  Fired: {}  │  Altering: {}  │  Replacements: {}  │  Changed: {}",
            palette.paint(run.result.rules_fired.to_string(), ansi::GREEN),
            palette.paint(run.result.rules_altering.to_string(), ansi::GREEN),
            palette.paint(run.result.occurrences.to_string(), ansi::BLUE),
            palette.paint(run.result.changed.to_string(), ansi::CYAN),
        );
        eprintln!(
            "  Searched: {}  │  Skipped by trigger: {}  │  Time: {}",
            details.rules_considered,
            details.rules_skipped,
            palette.dim(format!("{:?}", details.total)),
        );
    }
    eprintln!();
}
