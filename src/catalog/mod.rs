//! Translation catalog data model.
//!
//! A catalog mirrors one Qt Linguist `.ts` file: an ordered list of contexts
//! (one per UI class), each holding an ordered list of messages. The model is
//! owned and immutable once loaded, so it is `Send + Sync` and can be shared
//! freely between threads.
//!
//! ## Module Structure
//!
//! - `parser`: `.ts` XML → [`TranslationCatalog`]
//! - `writer`: [`TranslationCatalog`] → `.ts` XML in lupdate's layout
//! - `editor`: in-place removal of messages from the original `.ts` text

pub mod editor;
pub mod parser;
pub mod writer;

use std::{fs, ops::Range, path::Path};

use thiserror::Error;

pub use parser::parse_catalog;
pub use writer::write_catalog;

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("invalid catalog at line {line}: {message}")]
    Schema { line: usize, message: String },

    #[error("translation file for locale {locale} not found: {path}")]
    LocaleNotFound { locale: String, path: String },
}

/// 1-based position inside the `.ts` file. Diagnostics only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub line: usize,
    pub col: usize,
}

impl Span {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Where a message is used in the application sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub filename: String,
    pub line: usize,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line,
        }
    }
}

/// State of a translation as recorded by the `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationStatus {
    /// No `type` attribute: reviewed and complete.
    #[default]
    Finished,
    /// `type="unfinished"`: new or changed source, not yet reviewed.
    Unfinished,
    /// `type="vanished"` (or legacy `type="obsolete"`): the source string is
    /// no longer referenced by the application.
    Vanished,
}

impl TranslationStatus {
    /// Value of the `type` attribute, `None` for finished entries.
    pub fn type_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Vanished => write!(f, "vanished"),
        }
    }
}

/// Translated text of a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Translation {
    Single(String),
    /// One entry per numerus form of the target language (`numerus="yes"`).
    Numerus(Vec<String>),
}

impl Default for Translation {
    fn default() -> Self {
        Translation::Single(String::new())
    }
}

impl Translation {
    /// True when no form carries any text.
    pub fn is_empty(&self) -> bool {
        match self {
            Translation::Single(text) => text.is_empty(),
            Translation::Numerus(forms) => forms.iter().all(String::is_empty),
        }
    }

    /// All non-empty texts, in form order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        let forms: &[String] = match self {
            Translation::Single(text) => std::slice::from_ref(text),
            Translation::Numerus(forms) => forms,
        };
        forms.iter().map(String::as_str).filter(|t| !t.is_empty())
    }
}

/// One translatable string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub source: String,
    /// Disambiguation comment, part of the lookup key.
    pub comment: Option<String>,
    pub old_source: Option<String>,
    pub extra_comment: Option<String>,
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    pub translation: Translation,
    pub status: TranslationStatus,
    /// Position of the `<message>` element.
    pub span: Span,
    /// Position of the `<translation>` element, if any.
    pub translation_span: Option<Span>,
    /// Byte range of the `<message>` element in the parsed text.
    pub range: Range<usize>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            translation: Translation::Single(translation.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: TranslationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_location(mut self, filename: impl Into<String>, line: usize) -> Self {
        self.locations.push(Location::new(filename, line));
        self
    }

    pub fn is_numerus(&self) -> bool {
        matches!(self.translation, Translation::Numerus(_))
    }

    pub fn is_vanished(&self) -> bool {
        self.status == TranslationStatus::Vanished
    }

    /// Disambiguation comment, empty when absent.
    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }
}

/// Messages owned by one UI class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub messages: Vec<Message>,
    pub span: Span,
    /// Byte range of the `<context>` element in the parsed text.
    pub range: Range<usize>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

/// Contents of one `.ts` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCatalog {
    /// `version` attribute of `<TS>`.
    pub version: String,
    /// Target language, e.g. `de_DE`.
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Default for TranslationCatalog {
    fn default() -> Self {
        Self {
            version: DEFAULT_TS_VERSION.to_string(),
            language: None,
            source_language: None,
            contexts: Vec::new(),
        }
    }
}

/// Format version written by current lupdate releases.
pub const DEFAULT_TS_VERSION: &str = "2.1";

impl TranslationCatalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.contexts.push(context);
        self
    }

    /// Read and parse a `.ts` file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        parse_catalog(&content)
    }

    /// Parse `.ts` XML held in memory.
    pub fn parse(content: &str) -> Result<Self, CatalogError> {
        parse_catalog(content)
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Iterate over every message together with its context name.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c.name.as_str(), m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Drop every vanished message, then every context left empty.
    ///
    /// Returns the number of messages removed.
    pub fn remove_vanished(&mut self) -> usize {
        self.remove_where(|_, message| message.is_vanished())
    }

    /// Drop the messages matching `predicate(context_name, message)`.
    /// A context that loses all of its messages is dropped as well.
    ///
    /// Returns the number of messages removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&str, &Message) -> bool) -> usize {
        let mut removed = 0;
        self.contexts.retain_mut(|context| {
            let before = context.messages.len();
            let name = context.name.as_str();
            context.messages.retain(|m| !predicate(name, m));
            let dropped = before - context.messages.len();
            removed += dropped;
            !(dropped > 0 && context.messages.is_empty())
        });
        removed
    }
}
