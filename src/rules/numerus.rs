//! Numerus form count rule.
//!
//! A numerus message needs exactly as many `<numerusform>` entries as the
//! catalog language has plural forms (two for German, three for Russian).
//! Messages with no translated form at all are left to `unfinished`.

use crate::{
    catalog::Translation,
    context::{CatalogFile, CheckContext},
    issues::NumerusFormsIssue,
};

pub fn check_numerus_issues(ctx: &CheckContext) -> Vec<NumerusFormsIssue> {
    ctx.files.iter().flat_map(check_numerus_forms).collect()
}

pub fn check_numerus_forms(file: &CatalogFile) -> Vec<NumerusFormsIssue> {
    let expected = file.plural_rule().form_count();
    let mut issues = Vec::new();

    for (context_name, message) in file.catalog.messages() {
        if message.is_vanished() || message.translation.is_empty() {
            continue;
        }
        let Translation::Numerus(forms) = &message.translation else {
            continue;
        };
        if forms.len() != expected {
            issues.push(NumerusFormsIssue {
                context: file.message_context(context_name, message),
                language: file.language().to_string(),
                expected,
                found: forms.len(),
            });
        }
    }

    issues
}
