//! Untranslated text detection rule.
//!
//! Flags finished translations that are identical to their source, which
//! usually means the source was pasted in and never translated. Texts
//! without letters (`%s`, `...`, `100%`) and entries listed in
//! `ignoreTexts` are skipped.

use std::collections::HashSet;

use crate::{
    catalog::{Translation, TranslationStatus},
    context::{CatalogFile, CheckContext},
    issues::UntranslatedIssue,
    utils::contains_alphabetic,
};

pub fn check_untranslated_issues(ctx: &CheckContext) -> Vec<UntranslatedIssue> {
    ctx.files
        .iter()
        .flat_map(|file| check_untranslated(file, &ctx.ignore_texts))
        .collect()
}

pub fn check_untranslated(
    file: &CatalogFile,
    ignore_texts: &HashSet<String>,
) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for (context_name, message) in file.catalog.messages() {
        if message.status != TranslationStatus::Finished {
            continue;
        }
        let Translation::Single(text) = &message.translation else {
            continue;
        };
        if text != &message.source
            || !contains_alphabetic(&message.source)
            || ignore_texts.contains(&message.source)
        {
            continue;
        }

        issues.push(UntranslatedIssue {
            context: file.message_context(context_name, message),
            language: file.language().to_string(),
        });
    }

    issues
}
