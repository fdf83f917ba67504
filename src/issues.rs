//! Issue types for catalog checks.
//!
//! Each issue carries everything the reporter needs to print it: the file
//! position, the source line under the cursor and the message text.

use enum_dispatch::enum_dispatch;

use crate::utils::display_text;

/// Longest source text shown in a report header.
const MESSAGE_DISPLAY_CHARS: usize = 80;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    Vanished,
    PlaceholderMismatch,
    Duplicate,
    Untranslated,
    NumerusForms,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Vanished => write!(f, "vanished"),
            Rule::PlaceholderMismatch => write!(f, "placeholder-mismatch"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::NumerusForms => write!(f, "numerus-forms"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message position
// ============================================================

/// Position of a message inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MessageLocation {
    /// Path to the catalog (e.g., "./i18n/app_de.ts").
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A catalog message as seen by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the `<context>` holding the message.
    pub context_name: String,
    pub source: String,
    /// Translation text; numerus forms are joined with ` | `.
    pub translation: String,
    /// Catalog line at `location`, shown under the header.
    pub source_line: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            translation: translation.into(),
            source_line: None,
        }
    }

    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Message still marked `type="unfinished"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Message whose source no longer exists in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanishedIssue {
    pub context: MessageContext,
    /// `<location>` entries the message still carries.
    pub location_count: usize,
}

impl VanishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Vanished
    }
}

/// Translation uses different placeholders than its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderMismatchIssue {
    pub context: MessageContext,
    /// Placeholders of the source, e.g. `%s, {}`.
    pub expected: String,
    /// Placeholders of the offending translation.
    pub found: String,
}

impl PlaceholderMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::PlaceholderMismatch
    }
}

/// Same source and comment defined twice in one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    /// Line of the first definition, which lookups use.
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// Finished translation identical to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub context: MessageContext,
    /// Catalog language (e.g., "de_DE").
    pub language: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Numerus message with the wrong number of forms for its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumerusFormsIssue {
    pub context: MessageContext,
    pub language: String,
    pub expected: usize,
    pub found: usize,
}

impl NumerusFormsIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::NumerusForms
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Vanished(VanishedIssue),
    PlaceholderMismatch(PlaceholderMismatchIssue),
    Duplicate(DuplicateIssue),
    Untranslated(UntranslatedIssue),
    NumerusForms(NumerusFormsIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Message inside a catalog (has source_line for context display).
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by every issue type; `enum_dispatch` forwards the calls
/// on [`Issue`].
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

fn source_message(context: &MessageContext) -> String {
    display_text(&context.source, MESSAGE_DISPLAY_CHARS)
}

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in context {}", self.context.context_name))
    }
}

impl Report for VanishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("run `tscat clean --apply` to drop vanished messages")
    }

    fn details(&self) -> Option<String> {
        let mut details = format!("in context {}", self.context.context_name);
        if self.location_count > 0 {
            details.push_str(&format!(
                ", still lists {} source location(s); rerun lupdate before cleaning",
                self.location_count
            ));
        }
        Some(details)
    }
}

impl Report for PlaceholderMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "source has [{}], translation \"{}\" has [{}]",
            self.expected,
            display_text(&self.context.translation, MESSAGE_DISPLAY_CHARS),
            self.found
        ))
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "in context {}, first defined at line {}",
            self.context.context_name, self.first_line
        ))
    }
}

impl Report for UntranslatedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add the text to `ignoreTexts` if it is the same in every language")
    }

    fn details(&self) -> Option<String> {
        Some(format!("identical in {}", self.language))
    }
}

impl Report for NumerusFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        source_message(&self.context)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{} expects {} forms, found {}",
            self.language, self.expected, self.found
        ))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    fn sort_file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Message(ctx) => &ctx.location.file_path,
            ReportLocation::File { path } => path,
        }
    }

    fn sort_line(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.line,
            ReportLocation::File { .. } => 0,
        }
    }

    fn sort_col(&self) -> usize {
        match self.location() {
            ReportLocation::Message(ctx) => ctx.location.col,
            ReportLocation::File { .. } => 0,
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // file_path, line, col, rule, message
        self.sort_file_path()
            .cmp(other.sort_file_path())
            .then_with(|| self.sort_line().cmp(&other.sort_line()))
            .then_with(|| self.sort_col().cmp(&other.sort_col()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
