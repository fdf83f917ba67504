use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        files_checked,
    }
}
