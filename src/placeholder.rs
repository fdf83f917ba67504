//! Placeholder tokenizing and argument substitution.
//!
//! Catalog strings carry the placeholder syntaxes of the code that consumes
//! them:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `%s` `%i` `%d` `%f` | next sequential argument (printf style) |
//! | `%n` `%Ln` | numerus count, filled by plural lookups |
//! | `%1` .. `%99` | 1-based positional argument |
//! | `{0}` `{1}` | 0-based positional argument |
//! | `{}` | next sequential argument |
//! | `{name}` | named argument |
//! | `%%` `{{` `}}` | literal `%`, `{`, `}` |
//!
//! Substitution is a single pass: substituted text is never rescanned.
//! Tokens without a matching argument are left verbatim.

use std::{
    borrow::Cow,
    collections::BTreeSet,
    fmt::{self, Display},
    ops::Range,
    sync::LazyLock,
};

use regex::Regex;
use thiserror::Error;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(%|L?n|[1-9][0-9]?|[sidf])|\{\{|\}\}|\{([^{}]*)\}").expect("valid regex")
});

/// A placeholder or escape found in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `%s`, `%i`, `%d`, `%f` with its conversion character.
    Sequential(char),
    /// `%n` or `%Ln`.
    Numerus,
    /// `%1`..`%99`, stored 1-based.
    QtArg(usize),
    /// `{0}`, stored 0-based.
    Positional(usize),
    /// `{}`.
    Auto,
    /// `{name}` or `{attribute[0]}`.
    Named(String),
    /// `%%`, `{{` or `}}`.
    Escape(char),
}

/// A placeholder with its byte range in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub placeholder: Placeholder,
    pub range: Range<usize>,
}

/// Scan a template for placeholders.
pub fn tokenize(template: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(template)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let placeholder = if let Some(spec) = caps.get(1) {
                match spec.as_str() {
                    "%" => Placeholder::Escape('%'),
                    "n" | "Ln" => Placeholder::Numerus,
                    s if s.starts_with(|c: char| c.is_ascii_digit()) => {
                        Placeholder::QtArg(s.parse().ok()?)
                    }
                    s => Placeholder::Sequential(s.chars().next()?),
                }
            } else if let Some(field) = caps.get(2) {
                brace_placeholder(field.as_str())
            } else if whole.as_str() == "{{" {
                Placeholder::Escape('{')
            } else {
                Placeholder::Escape('}')
            };
            Some(Token {
                placeholder,
                range: whole.range(),
            })
        })
        .collect()
}

/// Classify the inside of `{...}`. A format spec (`{0:.2f}`) or conversion
/// (`{name!r}`) does not change the field it refers to.
fn brace_placeholder(field: &str) -> Placeholder {
    let name = field.split([':', '!']).next().unwrap_or_default().trim();
    if name.is_empty() {
        Placeholder::Auto
    } else if let Ok(index) = name.parse::<usize>() {
        Placeholder::Positional(index)
    } else {
        Placeholder::Named(name.to_string())
    }
}

/// A substitution argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg<'a> {
    Str(Cow<'a, str>),
    Int(i64),
    Float(f64),
}

impl Arg<'_> {
    /// Render for a printf conversion: `%i`/`%d` truncate floats, `%f`
    /// prints six decimals.
    fn render(&self, conversion: Option<char>) -> String {
        match (self, conversion) {
            (Arg::Float(v), Some('i' | 'd')) => (v.trunc() as i64).to_string(),
            (Arg::Int(v), Some('f')) => format!("{:.6}", *v as f64),
            (Arg::Float(v), Some('f')) => format!("{:.6}", v),
            _ => self.to_string(),
        }
    }
}

impl Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(s) => f.write_str(s),
            Arg::Int(v) => write!(f, "{}", v),
            Arg::Float(v) => write!(f, "{}", v),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

macro_rules! int_arg {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg<'_> {
            fn from(value: $t) -> Self {
                Arg::Int(value as i64)
            }
        })*
    };
}

int_arg!(i32, i64, u32, usize);

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

/// Strict substitution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("template expects {expected} argument(s), got {given}")]
    ArgCount { expected: usize, given: usize },

    #[error("missing named argument `{0}`")]
    MissingNamed(String),
}

/// Substitute positional arguments. Lenient: unmatched tokens stay verbatim.
pub fn format(template: &str, args: &[Arg<'_>]) -> String {
    format_with(template, args, &[])
}

/// Substitute positional and named arguments. Lenient.
pub fn format_with(template: &str, args: &[Arg<'_>], named: &[(&str, Arg<'_>)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    let mut next = 0;

    for token in tokenize(template) {
        out.push_str(&template[last..token.range.start]);
        last = token.range.end;

        let original = &template[token.range.clone()];
        let replacement = match &token.placeholder {
            Placeholder::Escape(c) => Some(c.to_string()),
            Placeholder::Numerus => None,
            Placeholder::Sequential(conversion) => {
                let value = args.get(next).map(|a| a.render(Some(*conversion)));
                next += 1;
                value
            }
            Placeholder::Auto => {
                let value = args.get(next).map(|a| a.render(None));
                next += 1;
                value
            }
            Placeholder::QtArg(n) => args.get(n - 1).map(|a| a.render(None)),
            Placeholder::Positional(i) => args.get(*i).map(|a| a.render(None)),
            Placeholder::Named(name) => named
                .iter()
                .find(|(key, _)| *key == name.as_str())
                .map(|(_, a)| a.render(None)),
        };

        match replacement {
            Some(text) => out.push_str(&text),
            None => out.push_str(original),
        }
    }

    out.push_str(&template[last..]);
    out
}

/// Substitute arguments, failing unless the argument count matches the
/// template exactly and every named field is provided.
pub fn try_format(
    template: &str,
    args: &[Arg<'_>],
    named: &[(&str, Arg<'_>)],
) -> Result<String, FormatError> {
    let sig = signature(template);
    let expected = sig.arity();
    if expected != args.len() {
        return Err(FormatError::ArgCount {
            expected,
            given: args.len(),
        });
    }
    if let Some(missing) = sig
        .named
        .iter()
        .find(|name| !named.iter().any(|(key, _)| *key == name.as_str()))
    {
        return Err(FormatError::MissingNamed(missing.clone()));
    }
    Ok(format_with(template, args, named))
}

/// Replace `%n` / `%Ln` with a count.
pub fn replace_numerus(template: &str, n: u64) -> Cow<'_, str> {
    let tokens: Vec<Token> = tokenize(template)
        .into_iter()
        .filter(|t| t.placeholder == Placeholder::Numerus)
        .collect();
    if tokens.is_empty() {
        return Cow::Borrowed(template);
    }

    let count = n.to_string();
    let mut out = String::with_capacity(template.len());
    let mut last = 0;
    for token in tokens {
        out.push_str(&template[last..token.range.start]);
        out.push_str(&count);
        last = token.range.end;
    }
    out.push_str(&template[last..]);
    Cow::Owned(out)
}

/// Placeholder summary of a string, used to compare a source with its
/// translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    /// Number of `%s`-style tokens.
    pub sequential: usize,
    /// Number of `{}` tokens.
    pub auto: usize,
    pub numerus: bool,
    pub qt_args: BTreeSet<usize>,
    pub positional: BTreeSet<usize>,
    pub named: BTreeSet<String>,
}

impl Signature {
    /// Number of positional arguments a caller must supply.
    pub fn arity(&self) -> usize {
        let indexed = self
            .qt_args
            .iter()
            .copied()
            .chain(self.positional.iter().map(|i| i + 1))
            .max()
            .unwrap_or(0);
        (self.sequential + self.auto).max(indexed)
    }

    /// True when both strings consume the same arguments. The numerus count
    /// is ignored: a singular form may spell the number out.
    pub fn corresponds(&self, other: &Signature) -> bool {
        self.sequential == other.sequential
            && self.auto == other.auto
            && self.qt_args == other.qt_args
            && self.positional == other.positional
            && self.named == other.named
    }

    /// Short human-readable listing, e.g. `%s, {0}`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.sequential > 0 {
            parts.push(format!("{}x %s", self.sequential));
        }
        if self.auto > 0 {
            parts.push(format!("{}x {{}}", self.auto));
        }
        parts.extend(self.qt_args.iter().map(|n| format!("%{}", n)));
        parts.extend(self.positional.iter().map(|i| format!("{{{}}}", i)));
        parts.extend(self.named.iter().map(|n| format!("{{{}}}", n)));
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Summarize the placeholders of a string.
pub fn signature(text: &str) -> Signature {
    let mut sig = Signature::default();
    for token in tokenize(text) {
        match token.placeholder {
            Placeholder::Sequential(_) => sig.sequential += 1,
            Placeholder::Auto => sig.auto += 1,
            Placeholder::Numerus => sig.numerus = true,
            Placeholder::QtArg(n) => {
                sig.qt_args.insert(n);
            }
            Placeholder::Positional(i) => {
                sig.positional.insert(i);
            }
            Placeholder::Named(name) => {
                sig.named.insert(name);
            }
            Placeholder::Escape(_) => {}
        }
    }
    sig
}
