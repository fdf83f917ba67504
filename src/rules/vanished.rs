//! Vanished message detection rule.
//!
//! lupdate keeps translations whose source string disappeared from the
//! application as `type="vanished"` (or `obsolete` in old files). They
//! never take part in lookups and can be removed with `tscat clean`.

use crate::{
    context::{CatalogFile, CheckContext},
    issues::VanishedIssue,
};

pub fn check_vanished_issues(ctx: &CheckContext) -> Vec<VanishedIssue> {
    ctx.files.iter().flat_map(check_vanished).collect()
}

pub fn check_vanished(file: &CatalogFile) -> Vec<VanishedIssue> {
    file.catalog
        .messages()
        .filter(|(_, message)| message.is_vanished())
        .map(|(context_name, message)| VanishedIssue {
            context: file.message_context(context_name, message),
            location_count: message.locations.len(),
        })
        .collect()
}
