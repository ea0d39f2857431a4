//! Report formatting and printing utilities.
//!
//! Issues are displayed cargo-style. Kept apart from the rules so the crate
//! can be used as a library without pulling in terminal output.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, NormalizeSummary, StatsRow, StatsSummary,
};
use crate::core::CatalogScanWarning;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
///
/// Issues are expected sorted; see `compare_issues`.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize) {
    print_success_to(catalogs, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} {} - no issues found",
        catalogs,
        if catalogs == 1 { "catalog" } else { "catalogs" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print a warning about catalogs that could not be parsed.
///
/// Without `-v` only the count is shown.
pub fn print_parse_warnings(warnings: &[CatalogScanWarning], verbose: bool) {
    print_parse_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

/// Print parse warnings to a custom writer.
pub fn print_parse_warnings_to<W: Write>(
    warnings: &[CatalogScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }
    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
        return;
    }
    for warning in warnings {
        let line = warning
            .line
            .map(|line| format!(":{}", line))
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "{} {}{}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            line,
            warning.error
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalogs_checked);
            }
        }
        CommandSummary::Stats(summary) => {
            print_stats(summary, verbose);
        }
        CommandSummary::Normalize(summary) => {
            report(&result.issues);
            print_normalize(summary);
        }
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line) = loc.file_and_line();

    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line
    let _ = writeln!(writer, "  {} {}:{}", "-->".blue(), file_path, line);

    if let ReportLocation::Message(ctx) = loc {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "context:".bold(),
            ctx.context,
            width = max_line_width
        );
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
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

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().file_and_line().1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_stats(summary: &StatsSummary, verbose: bool) {
    print_stats_to(&summary.rows, &mut io::stdout().lock());
    print_parse_warnings(&summary.warnings, verbose);
}

const STATS_HEADERS: [&str; 8] = [
    "catalog",
    "language",
    "contexts",
    "messages",
    "finished",
    "unfinished",
    "vanished",
    "done",
];

/// Print the per-catalog progress table.
///
/// The first two columns are left-aligned, the counts right-aligned.
pub fn print_stats_to<W: Write>(rows: &[StatsRow], writer: &mut W) {
    if rows.is_empty() {
        let _ = writeln!(writer, "No catalogs found.");
        return;
    }

    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|row| {
            [
                row.file_path.clone(),
                row.language.clone().unwrap_or_else(|| "-".to_string()),
                row.stats.contexts.to_string(),
                row.stats.messages.to_string(),
                row.stats.finished.to_string(),
                row.stats.unfinished.to_string(),
                row.stats.vanished.to_string(),
                format!("{:.1}%", row.stats.completion_percent()),
            ]
        })
        .collect();

    let mut widths = STATS_HEADERS.map(|header| UnicodeWidthStr::width(header));
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    let header = format_row(&STATS_HEADERS, &widths);
    let _ = writeln!(writer, "{}", header.bold());
    for row in &cells {
        let _ = writeln!(writer, "{}", format_row(row, &widths));
    }
}

fn format_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            let cell = cell.as_ref();
            let padding = " ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell)));
            if i < 2 {
                format!("{}{}", cell, padding)
            } else {
                format!("{}{}", padding, cell)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn print_normalize(summary: &NormalizeSummary) {
    print_normalize_to(summary, &mut io::stdout().lock());
}

/// Print which catalogs were (or would be) rewritten.
pub fn print_normalize_to<W: Write>(summary: &NormalizeSummary, writer: &mut W) {
    if summary.changed.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("{} catalog(s) already normalized", summary.unchanged_count).green()
        );
        return;
    }

    for file in &summary.changed {
        let dropped = if file.dropped > 0 {
            format!(" ({} vanished message(s) dropped)", file.dropped)
        } else {
            String::new()
        };
        let _ = writeln!(writer, "  {} {}{}", "-".blue(), file.file_path, dropped);
    }

    if summary.is_apply {
        let _ = writeln!(
            writer,
            "{} {} catalog(s).",
            "Normalized".green().bold(),
            summary.changed.len()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {} catalog(s).",
            "Would normalize".yellow().bold(),
            summary.changed.len()
        );
        let _ = writeln!(writer, "Run with {} to rewrite them.", "--apply".cyan());
    }
}

// ============================================================
// Tests
// ============================================================
