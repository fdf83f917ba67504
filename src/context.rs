use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    catalog::{Message, Translation, TranslationCatalog, parse_catalog},
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    issues::{MessageContext, MessageLocation, ParseErrorIssue},
    plural::PluralRule,
    scanner::scan_files,
};

/// One successfully parsed catalog together with its raw text.
pub struct CatalogFile {
    /// Path as scanned (e.g., "./i18n/app_de.ts").
    pub path: String,
    pub content: String,
    pub catalog: TranslationCatalog,
}

impl CatalogFile {
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, ParseErrorIssue> {
        let path = path.into();
        let content = content.into();
        match parse_catalog(&content) {
            Ok(catalog) => Ok(Self {
                path,
                content,
                catalog,
            }),
            Err(e) => Err(ParseErrorIssue {
                file_path: path,
                error: e.to_string(),
            }),
        }
    }

    pub fn load(path: &str) -> Result<Self, ParseErrorIssue> {
        let content = fs::read_to_string(path).map_err(|e| ParseErrorIssue {
            file_path: path.to_string(),
            error: format!("failed to read file: {}", e),
        })?;
        Self::new(path, content)
    }

    /// Text of a 1-indexed line, without the line terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.content
            .lines()
            .nth(line.checked_sub(1)?)
            .map(|l| l.trim_end_matches('\r'))
    }

    /// Language declared by `<TS language>`, or `"unknown"`.
    pub fn language(&self) -> &str {
        self.catalog.language.as_deref().unwrap_or("unknown")
    }

    pub fn plural_rule(&self) -> PluralRule {
        PluralRule::for_language(self.catalog.language.as_deref().unwrap_or_default())
    }

    /// Reporter view of a message. Points at the `<translation>` element
    /// when present, else at `<message>`.
    pub fn message_context(&self, context_name: &str, message: &Message) -> MessageContext {
        let span = message.translation_span.unwrap_or(message.span);
        let translation = match &message.translation {
            Translation::Single(text) => text.clone(),
            Translation::Numerus(forms) => forms.join(" | "),
        };
        let ctx = MessageContext::new(
            MessageLocation::new(&self.path, span.line, span.col),
            context_name,
            &message.source,
            translation,
        );
        match self.line_text(span.line) {
            Some(line) => ctx.with_source_line(line),
            None => ctx,
        }
    }
}

/// Everything a `check`, `clean` or `stats` run works on.
///
/// Configuration is looked up from `--path` (or the current directory)
/// upwards; catalogs are scanned under the same root and parsed in parallel.
pub struct CheckContext {
    pub config: Config,
    /// Directory the scan started from.
    pub root_dir: PathBuf,
    /// Parsed catalogs in path order.
    pub files: Vec<CatalogFile>,
    /// Source texts allowed to stay untranslated (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,
    pub verbose: bool,
    /// Catalogs that failed to load.
    pub parse_errors: Vec<ParseErrorIssue>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        if !root_dir.is_dir() {
            return Err(anyhow!("Directory not found: {}", root_dir.display()));
        }
        let path = root_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(path))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold().cyan(),
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let scan_result = scan_files(path, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "Warning: {} path(s) skipped due to access errors{}",
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let paths: Vec<String> = scan_result.files.into_iter().collect();
        let loaded: Vec<Result<CatalogFile, ParseErrorIssue>> =
            paths.par_iter().map(|p| CatalogFile::load(p)).collect();

        let mut files = Vec::new();
        let mut parse_errors = Vec::new();
        for result in loaded {
            match result {
                Ok(file) => files.push(file),
                Err(issue) => parse_errors.push(issue),
            }
        }

        if verbose {
            eprintln!(
                "{} Loaded {} catalog(s) from {}",
                "note:".bold().cyan(),
                files.len(),
                root_dir.display()
            );
        }

        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            files,
            ignore_texts,
            verbose,
            parse_errors,
        })
    }

    /// Build a context from catalogs already in memory.
    pub fn from_files(config: Config, files: Vec<CatalogFile>) -> Self {
        let ignore_texts = config.ignore_texts.iter().cloned().collect();
        Self {
            config,
            root_dir: PathBuf::from("."),
            files,
            ignore_texts,
            verbose: false,
            parse_errors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    const CATALOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="de_DE">
<context>
    <name>MainWindow</name>
    <message>
        <location filename="../main.py" line="12"/>
        <source>Close</source>
        <translation>Schließen</translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn test_message_context_points_at_translation() {
        let file = CatalogFile::new("./app_de.ts", CATALOG).unwrap();
        let (context_name, message) = file.catalog.messages().next().unwrap();
        let ctx = file.message_context(context_name, message);

        assert_eq!(ctx.location, MessageLocation::new("./app_de.ts", 9, 9));
        assert_eq!(ctx.context_name, "MainWindow");
        assert_eq!(ctx.translation, "Schließen");
        assert_eq!(
            ctx.source_line.as_deref(),
            Some("        <translation>Schließen</translation>")
        );
    }

    #[test]
    fn test_line_text_bounds() {
        let file = CatalogFile::new("./app_de.ts", CATALOG).unwrap();
        assert_eq!(file.line_text(3), Some("<TS version=\"2.1\" language=\"de_DE\">"));
        assert_eq!(file.line_text(0), None);
        assert_eq!(file.line_text(100), None);
    }

    #[test]
    fn test_parse_failure_becomes_issue() {
        let err = CatalogFile::new("./broken.ts", "<TS><context>").err().unwrap();
        assert_eq!(err.file_path, "./broken.ts");
        assert!(err.error.starts_with("malformed XML"));
    }

    #[test]
    fn test_plural_rule_from_language() {
        let file = CatalogFile::new("./app_de.ts", CATALOG).unwrap();
        assert_eq!(file.language(), "de_DE");
        assert_eq!(file.plural_rule(), PluralRule::OneOther);
    }

    #[test]
    fn test_check_context_loads_catalogs() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("app_de.ts"), CATALOG).unwrap();
        fs::write(dir.path().join("broken_fr.ts"), "<?xml version=\"1.0\"?>\n<TS>").unwrap();

        let args = CommonArgs {
            path: Some(dir.path().to_path_buf()),
            verbose: false,
        };
        let ctx = CheckContext::new(&args).unwrap();

        assert_eq!(ctx.files.len(), 1);
        assert!(ctx.files[0].path.ends_with("app_de.ts"));
        assert_eq!(ctx.parse_errors.len(), 1);
        assert!(ctx.parse_errors[0].file_path.ends_with("broken_fr.ts"));
    }

    #[test]
    fn test_check_context_missing_dir() {
        let dir = tempdir().unwrap();
        let args = CommonArgs {
            path: Some(dir.path().join("nope")),
            verbose: false,
        };
        assert!(CheckContext::new(&args).is_err());
    }
}
