//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format. Kept apart from the command
//! handlers so the library can be used without any terminal output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    actions::{Action, RemoveVanished},
    commands::{
        CatalogStats, CleanSummary, CommandResult, CommandSummary, InitSummary, LookupSummary,
        StatsSummary,
    },
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::pluralize;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort();

    let max_line_width = calculate_max_line_width(&sorted);

    for issue in &sorted {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(files: usize) {
    print_success_to(files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} - no issues found",
            pluralize(files, "catalog", "catalogs")
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let (file_path, line, col, source_line) = extract_location_info(&loc);

    let severity = issue.report_severity();
    let severity_str = match severity {
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

    // Clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(source_line) = source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

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
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
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

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        pluralize(issues.len(), "problem", "problems"),
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

fn extract_location_info<'a>(
    loc: &'a ReportLocation<'a>,
) -> (&'a str, usize, usize, Option<&'a str>) {
    match loc {
        ReportLocation::Message(ctx) => (
            ctx.location.file_path.as_str(),
            ctx.location.line,
            ctx.location.col,
            ctx.source_line.as_deref(),
        ),
        ReportLocation::File { path } => (*path, 0, 0, None),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.location.line),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    match &result.summary {
        CommandSummary::Check => {
            if result.issues.is_empty() {
                print_success(result.files_checked);
            } else {
                report(&result.issues);
            }
            return Ok(());
        }
        CommandSummary::Clean(summary) => print_clean(summary, result.files_checked),
        CommandSummary::Lookup(summary) => print_lookup(summary),
        CommandSummary::Stats(summary) => print_stats_to(summary, &mut io::stdout().lock())?,
        CommandSummary::Init(summary) => print_init(summary),
    }

    if verbose {
        print_parse_errors_to(&result.issues, &mut io::stderr().lock());
    } else {
        print_parse_warning(result.parse_error_count, verbose);
    }
    Ok(())
}

/// Verbose listing of unparsable files for commands that do not report issues.
fn print_parse_errors_to<W: Write>(issues: &[Issue], writer: &mut W) {
    for issue in issues {
        if let Issue::ParseError(e) = issue {
            let _ = writeln!(
                writer,
                "{} Failed to parse {}: {}",
                "warning:".bold().yellow(),
                e.file_path,
                e.error
            );
        }
    }
}

fn print_clean(summary: &CleanSummary, files_checked: usize) {
    if summary.vanished_count == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No vanished messages in {}",
                pluralize(files_checked, "catalog", "catalogs")
            )
            .green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} vanished message(s) in {} file(s).",
            "Deleted".green().bold(),
            summary.vanished_count,
            summary.file_count
        );
        if summary.context_count > 0 {
            println!("  - {} empty context(s) removed", summary.context_count);
        }
    } else {
        RemoveVanished::preview(&summary.vanished_issues);
        println!(
            "{} {} vanished message(s) in {} file(s).",
            "Would delete".yellow().bold(),
            summary.vanished_count,
            summary.file_count
        );
        if summary.context_count > 0 {
            println!(
                "  - {} context(s) would become empty",
                summary.context_count
            );
        }
        println!("Run with {} to delete these messages.", "--apply".cyan());
    }
}

fn print_lookup(summary: &LookupSummary) {
    println!("{}", summary.text);
    if !summary.found {
        eprintln!(
            "{} no translation found, printed the source text",
            "note:".bold().cyan()
        );
    }
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) -> Result<()> {
    if summary.as_json {
        let json =
            serde_json::to_string_pretty(summary).context("Failed to serialize statistics")?;
        writeln!(writer, "{}", json)?;
        return Ok(());
    }

    if summary.files.is_empty() {
        writeln!(writer, "No catalogs found")?;
        return Ok(());
    }

    for file in &summary.files {
        writeln!(
            writer,
            "{} [{}]: {}",
            file.path,
            file.language.as_deref().unwrap_or("unknown"),
            format_stats(&file.stats)
        )?;
    }
    if summary.files.len() > 1 {
        writeln!(
            writer,
            "{}: {}",
            "Total".bold(),
            format_stats(&summary.total)
        )?;
    }
    Ok(())
}

fn format_stats(stats: &CatalogStats) -> String {
    format!(
        "{}/{} finished ({:.1}%), {} unfinished, {} empty, {} vanished",
        stats.finished, stats.total, stats.coverage, stats.unfinished, stats.empty, stats.vanished
    )
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
