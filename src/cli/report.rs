//! Report formatting and printing utilities.
//!
//! Issues and scan candidates are displayed in cargo-style format. Kept
//! apart from the pipeline so langsweep can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, RunSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Candidate;
use crate::issues::{Issue, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues to stderr, sorted by path.
pub fn report_issues(issues: &[Issue]) {
    report_issues_to(issues, &mut io::stderr().lock());
}

/// Print issues to a custom writer.
pub fn report_issues_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(|a, b| {
        a.path()
            .cmp(b.path())
            .then_with(|| a.report_rule().cmp(&b.report_rule()))
    });

    for issue in &sorted {
        let severity = match issue.report_severity() {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };
        let _ = writeln!(
            writer,
            "{}: {}  {}",
            severity,
            issue.message(),
            issue.report_rule().to_string().dimmed().cyan()
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), issue.path());
        let _ = writeln!(writer);
    }

    print_problem_count(&sorted, writer);
}

/// Print sentence candidates with their source line.
pub fn report_candidates_to<W: Write>(candidates: &[Candidate], writer: &mut W) {
    let max_line_width = candidates
        .iter()
        .map(|c| c.literal.location.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for candidate in candidates {
        print_candidate(candidate, writer, max_line_width);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_candidate<W: Write>(candidate: &Candidate, writer: &mut W, max_line_width: usize) {
    let location = &candidate.literal.location;

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "candidate".bold().cyan(),
        candidate.literal.content,
        "sentence".dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        location.file_path,
        location.line,
        candidate.column
    );
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        location.line.to_string().blue(),
        "|".blue(),
        candidate.source_line,
        width = max_line_width
    );

    // Caret under the opening quote (column is 1-based)
    let prefix: String = candidate
        .source_line
        .chars()
        .take(candidate.column.saturating_sub(1))
        .collect();
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".cyan(),
        width = max_line_width,
        padding = UnicodeWidthStr::width(prefix.as_str())
    );
    let _ = writeln!(writer);
}

fn print_problem_count<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} problems ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        total_errors,
        if total_errors == 1 { "error" } else { "errors" }.red(),
        total_warnings,
        if total_warnings == 1 {
            "warning"
        } else {
            "warnings"
        }
        .yellow()
    );
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn print(result: &CommandResult, verbose: bool) {
    let mut stdout = io::stdout().lock();
    print_to(result, verbose, &mut stdout);
    report_issues(&result.issues);
}

fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Run(summary) => print_run(summary, verbose, writer),
        CommandSummary::Scan(summary) => print_scan(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn print_run<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    if verbose {
        for entry in summary.catalog.entries() {
            let _ = writeln!(
                writer,
                "  [{}] {}  {}",
                entry.index,
                entry.content(),
                entry.sentence.location.to_string().dimmed()
            );
        }
    }

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Cataloged {} from {}",
            plural(summary.catalog.len(), "sentence", "sentences"),
            plural(summary.files_scanned, "file", "files")
        )
        .green()
    );
    let _ = writeln!(writer, "  - prompts: {}", summary.prompts);
    let _ = writeln!(
        writer,
        "  - copied: {} into {}",
        plural(summary.files_copied, "file", "files"),
        summary.output_dir.display()
    );
    let _ = writeln!(
        writer,
        "  - rewritten: {} ({})",
        plural(summary.files_rewritten, "file", "files"),
        plural(summary.replacements, "replacement", "replacements")
    );
    if summary.binary_skipped > 0 {
        let _ = writeln!(
            writer,
            "  - skipped: {} (not UTF-8)",
            plural(summary.binary_skipped, "file", "files")
        );
    }
    let _ = writeln!(
        writer,
        "{} {}",
        "Wrote".green().bold(),
        summary.catalog_file.display()
    );
}

fn print_scan<W: Write>(summary: &ScanSummary, writer: &mut W) {
    report_candidates_to(&summary.candidates, writer);

    let msg = format!(
        "Found {} ({} distinct) in {}",
        plural(summary.candidates.len(), "candidate", "candidates"),
        summary.distinct_count,
        plural(summary.files_scanned, "file", "files")
    );
    if summary.candidates.is_empty() {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg);
    }
    if summary.binary_skipped > 0 {
        let _ = writeln!(
            writer,
            "{} {} skipped (not UTF-8)",
            "warning:".bold().yellow(),
            plural(summary.binary_skipped, "file", "files")
        );
    }
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

// ============================================================
// Tests
// ============================================================
