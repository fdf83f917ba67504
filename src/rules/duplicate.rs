//! Duplicate message detection rule.
//!
//! Within one context a source string together with its disambiguation
//! comment identifies a message. A second definition is never reached by
//! lookups, so it is reported against the line of the first one.

use std::collections::HashMap;

use crate::{
    context::{CatalogFile, CheckContext},
    issues::DuplicateIssue,
};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateIssue> {
    ctx.files.iter().flat_map(check_duplicates).collect()
}

pub fn check_duplicates(file: &CatalogFile) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    // Contexts may be split across several <context> blocks with the same name.
    let mut first_seen: HashMap<(&str, &str, &str), usize> = HashMap::new();

    for (context_name, message) in file.catalog.messages() {
        if message.is_vanished() {
            continue;
        }
        let key = (context_name, message.source.as_str(), message.comment_str());
        match first_seen.get(&key) {
            Some(&first_line) => issues.push(DuplicateIssue {
                context: file.message_context(context_name, message),
                first_line,
            }),
            None => {
                first_seen.insert(key, message.span.line);
            }
        }
    }

    issues
}
