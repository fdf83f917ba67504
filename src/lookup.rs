//! Runtime lookup of translated strings.
//!
//! # Invariants
//!
//! 1. **Never fails**: an unknown context, source or comment returns the
//!    source text unchanged.
//!
//! 2. **Vanished entries are dead**: `vanished` messages and empty
//!    translations are excluded from the index and can never be returned.
//!
//! 3. **First entry wins**: duplicated (source, comment) pairs inside a
//!    context resolve to the first live occurrence in file order.
//!
//! 4. **Thread safety**: a [`Translator`] is immutable after construction and
//!    `Send + Sync`. Installed translators live for the rest of the process.
//!
//! 5. **Latest install wins**: [`tr`] asks the installed translators from the
//!    most recently installed to the first, and the first hit is returned.

use std::{
    borrow::Cow,
    collections::HashMap,
    env,
    path::Path,
    sync::{PoisonError, RwLock},
};

use crate::{
    catalog::{CatalogError, Message, Translation, TranslationCatalog, TranslationStatus},
    placeholder::{self, Arg},
    plural::{PluralRule, select_form},
};

/// Which entries take part in lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Skip `unfinished` entries even when they carry a translation.
    pub finished_only: bool,
}

/// Read-only lookup index over one catalog.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: Option<String>,
    rule: PluralRule,
    messages: Vec<Message>,
    /// context → source → indices into `messages`, in file order.
    index: HashMap<String, HashMap<String, Vec<usize>>>,
}

impl Translator {
    pub fn new(catalog: TranslationCatalog) -> Self {
        Self::with_options(catalog, LookupOptions::default())
    }

    pub fn with_options(catalog: TranslationCatalog, options: LookupOptions) -> Self {
        let rule = catalog
            .language
            .as_deref()
            .map(PluralRule::for_language)
            .unwrap_or_default();

        let mut messages = Vec::new();
        let mut index: HashMap<String, HashMap<String, Vec<usize>>> = HashMap::new();
        for context in catalog.contexts {
            for message in context.messages {
                if !is_live(&message, options) {
                    continue;
                }
                index
                    .entry(context.name.clone())
                    .or_default()
                    .entry(message.source.clone())
                    .or_default()
                    .push(messages.len());
                messages.push(message);
            }
        }

        Self {
            language: catalog.language,
            rule,
            messages,
            index,
        }
    }

    /// Load a `.ts` file and index it.
    pub fn load(path: &Path, options: LookupOptions) -> Result<Self, CatalogError> {
        Ok(Self::with_options(TranslationCatalog::load(path)?, options))
    }

    /// Load `{dir}/{prefix}_{lang}.ts`, where `lang` is the language part of
    /// `locale` (`de_DE.UTF-8` → `de`).
    ///
    /// Returns `Ok(None)` when no translation is wanted: the locale names no
    /// language (`C`, `POSIX`), or it is English and no file exists. A missing
    /// file for any other language is [`CatalogError::LocaleNotFound`].
    pub fn load_for_locale(
        dir: &Path,
        prefix: &str,
        locale: &str,
        options: LookupOptions,
    ) -> Result<Option<Self>, CatalogError> {
        let Some(language) = locale_language(locale) else {
            return Ok(None);
        };
        let path = dir.join(format!("{}_{}.ts", prefix, language));
        if path.is_file() {
            return Self::load(&path, options).map(Some);
        }
        if language == "en" {
            return Ok(None);
        }
        Err(CatalogError::LocaleNotFound {
            locale: locale.to_string(),
            path: path.display().to_string(),
        })
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Live entry for a key. A comment that matches nothing falls back to
    /// the entry without a comment.
    pub fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let candidates = self.index.get(context)?.get(source)?;
        let comment = comment.unwrap_or_default();
        let with_comment = |wanted: &str| {
            candidates
                .iter()
                .map(|&i| &self.messages[i])
                .find(|m| m.comment_str() == wanted)
        };

        with_comment(comment).or_else(|| {
            if comment.is_empty() {
                None
            } else {
                with_comment("")
            }
        })
    }

    /// Translated text for a key, `None` on a miss. Numerus entries give
    /// their first form.
    pub fn lookup(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        let message = self.find(context, source, comment)?;
        let text = match &message.translation {
            Translation::Single(text) => text.as_str(),
            Translation::Numerus(forms) => forms.first()?.as_str(),
        };
        (!text.is_empty()).then_some(text)
    }

    /// Translate `source` within `context`, or return `source` itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str) -> &'a str {
        self.translate_disambiguated(context, source, None)
    }

    /// Like [`Translator::translate`] with a disambiguation comment.
    pub fn translate_disambiguated<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: Option<&str>,
    ) -> &'a str {
        self.lookup(context, source, comment).unwrap_or(source)
    }

    /// Translate with a count: selects the numerus form for `n` and
    /// replaces `%n` with `n`, also when falling back to the source.
    pub fn translate_plural<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: Option<&str>,
        n: u64,
    ) -> Cow<'a, str> {
        let text = self
            .find(context, source, comment)
            .and_then(|message| match &message.translation {
                Translation::Single(text) => Some(text.as_str()),
                Translation::Numerus(forms) => select_form(forms, self.rule, n),
            })
            .filter(|text| !text.is_empty())
            .unwrap_or(source);
        placeholder::replace_numerus(text, n)
    }

    /// Translate, then substitute positional arguments.
    pub fn tr(&self, context: &str, source: &str, args: &[Arg<'_>]) -> String {
        placeholder::format(self.translate(context, source), args)
    }
}

fn is_live(message: &Message, options: LookupOptions) -> bool {
    match message.status {
        TranslationStatus::Vanished => false,
        TranslationStatus::Unfinished if options.finished_only => false,
        _ => !message.translation.is_empty(),
    }
}

/// Language part of a locale name: `de_DE.UTF-8@euro` → `de`.
/// `C`, `POSIX` and empty names have none.
pub fn locale_language(locale: &str) -> Option<&str> {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    let language = name.split('_').next().unwrap_or_default().trim();
    match language {
        "" | "C" | "POSIX" => None,
        language => Some(language),
    }
}

/// Locale of the running process from `LC_ALL`, `LC_MESSAGES` or `LANG`,
/// the first one set and non-empty.
pub fn system_locale() -> Option<String> {
    locale_from(|name| env::var(name).ok())
}

fn locale_from(var: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(var)
        .find(|value| !value.is_empty())
}

static INSTALLED: RwLock<Vec<&'static Translator>> = RwLock::new(Vec::new());

/// Add a translator to the process-wide list. It stays installed until the
/// process exits and takes precedence over earlier ones.
pub fn install(translator: Translator) -> &'static Translator {
    let translator: &'static Translator = Box::leak(Box::new(translator));
    INSTALLED
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .push(translator);
    translator
}

/// Installed translators in installation order.
pub fn installed() -> Vec<&'static Translator> {
    INSTALLED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Translate with the installed translators, newest first; returns `source`
/// when none of them has the string.
pub fn tr<'a>(context: &str, source: &'a str) -> &'a str {
    let installed = INSTALLED.read().unwrap_or_else(PoisonError::into_inner);
    installed
        .iter()
        .rev()
        .copied()
        .find_map(|translator| translator.lookup(context, source, None))
        .unwrap_or(source)
}

/// [`tr`] followed by argument substitution.
pub fn tr_args(context: &str, source: &str, args: &[Arg<'_>]) -> String {
    placeholder::format(tr(context, source), args)
}
