//! Unfinished translation detection rule.
//!
//! Reports every live message whose translation is still marked
//! `type="unfinished"`, whether or not translated text is present.

use crate::{
    catalog::TranslationStatus,
    context::{CatalogFile, CheckContext},
    issues::UnfinishedIssue,
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.files.iter().flat_map(check_unfinished).collect()
}

pub fn check_unfinished(file: &CatalogFile) -> Vec<UnfinishedIssue> {
    file.catalog
        .messages()
        .filter(|(_, message)| message.status == TranslationStatus::Unfinished)
        .map(|(context_name, message)| UnfinishedIssue {
            context: file.message_context(context_name, message),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rules::test_helpers::catalog_file;

    #[test]
    fn test_reports_unfinished() {
        let file = catalog_file(
            r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Draft</source>
        <translation type="unfinished"></translation>
    </message>
    <message>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
    <message>
        <source>Almost</source>
        <translation type="unfinished">Fast</translation>
    </message>
</context>
"#,
        );

        let issues = check_unfinished(&file);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].context.source, "Draft");
        assert_eq!(issues[0].context.location.line, 8);
        assert_eq!(issues[0].context.location.col, 9);
        assert_eq!(issues[1].context.source, "Almost");
        assert_eq!(issues[1].context.translation, "Fast");
    }

    #[test]
    fn test_ignores_vanished() {
        let file = catalog_file(
            r#"<context>
    <name>MainWindow</name>
    <message>
        <source>Gone</source>
        <translation type="vanished">Weg</translation>
    </message>
</context>
"#,
        );

        assert!(check_unfinished(&file).is_empty());
    }
}
