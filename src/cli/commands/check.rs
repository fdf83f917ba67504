use anyhow::{Ok, Result};

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{
    context::CheckContext,
    issues::Issue,
    rules::{
        CheckRule, duplicate::check_duplicate_issues, numerus::check_numerus_issues,
        placeholder::check_placeholder_issues, unfinished::check_unfinished_issues,
        untranslated::check_untranslated_issues, vanished::check_vanished_issues,
    },
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let checks = if cmd.checks.is_empty() {
        ctx.config.checks.clone()
    } else {
        cmd.checks
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Vanished => {
                let issues = check_vanished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Vanished));
            }
            CheckRule::PlaceholderMismatch => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::PlaceholderMismatch));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::NumerusForms => {
                let issues = check_numerus_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::NumerusForms));
            }
        }
    }

    all_issues.extend(ctx.parse_errors.iter().cloned().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.files.len(),
        true,
    ))
}
