//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tscat::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("IFC Class"));
/// assert!(contains_alphabetic("Größe"));
/// assert!(!contains_alphabetic("%s"));
/// assert!(!contains_alphabetic("{0} / {1}"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    strip_placeholders(text).chars().any(|c| c.is_alphabetic())
}

/// Removes placeholder tokens so `%s` or `{name}` do not count as words.
fn strip_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for token in crate::placeholder::tokenize(text) {
        out.push_str(&text[last..token.range.start]);
        last = token.range.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Shorten a catalog string for single-line display: newlines become `\n`
/// and long texts are cut at `max_chars` with an ellipsis.
pub fn display_text(text: &str, max_chars: usize) -> String {
    let single_line = text.replace('\r', "").replace('\n', "\\n");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let cut: String = single_line.chars().take(max_chars).collect();
    format!("{}…", cut)
}

/// `"1 file"`, `"3 files"`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}
