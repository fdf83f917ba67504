use anyhow::{Ok, Result};

use super::super::{
    actions::{Action, RemoveVanished},
    args::CleanCommand,
};
use super::{CleanSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    context::CheckContext,
    issues::{Issue, VanishedIssue},
    rules::vanished::check_vanished_issues,
};

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;
    let apply = args.apply;

    let vanished_issues: Vec<VanishedIssue> = check_vanished_issues(&ctx);

    // Contexts holding nothing but vanished messages disappear with them.
    let context_count = ctx
        .files
        .iter()
        .flat_map(|file| &file.catalog.contexts)
        .filter(|c| !c.messages.is_empty() && c.messages.iter().all(|m| m.is_vanished()))
        .count();

    let (vanished_count, file_count) = if apply && !vanished_issues.is_empty() {
        let stats = RemoveVanished::run(&vanished_issues)?;
        (stats.changes_applied, stats.files_modified)
    } else {
        let files = ctx
            .files
            .iter()
            .filter(|file| file.catalog.messages().any(|(_, m)| m.is_vanished()))
            .count();
        (vanished_issues.len(), files)
    };

    let issues: Vec<Issue> = ctx
        .parse_errors
        .iter()
        .cloned()
        .map(Issue::ParseError)
        .collect();

    Ok(finish(
        CommandSummary::Clean(CleanSummary {
            vanished_count,
            context_count,
            file_count,
            is_apply: apply,
            vanished_issues,
        }),
        issues,
        ctx.files.len(),
        false,
    ))
}
