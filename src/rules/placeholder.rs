//! Placeholder mismatch detection rule.
//!
//! A translation must use the same placeholders as its source: the same
//! number of `%s`-style and `{}` fields, the same `%1`..`%99` and `{0}`
//! indices, and the same `{name}` fields. `%n` is left out because Qt
//! fills it for numerus messages whether or not a form mentions it.

use crate::{
    context::{CatalogFile, CheckContext},
    issues::PlaceholderMismatchIssue,
    placeholder::signature,
};

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderMismatchIssue> {
    ctx.files.iter().flat_map(check_placeholders).collect()
}

/// One issue per message, for the first form that disagrees with the source.
pub fn check_placeholders(file: &CatalogFile) -> Vec<PlaceholderMismatchIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in file.catalog.messages() {
        if message.is_vanished() {
            continue;
        }
        let expected = signature(&message.source);
        let mismatch = message
            .translation
            .texts()
            .map(signature)
            .find(|found| !expected.corresponds(found));

        if let Some(found) = mismatch {
            issues.push(PlaceholderMismatchIssue {
                context: file.message_context(context_name, message),
                expected: expected.describe(),
                found: found.describe(),
            });
        }
    }

    issues
}
