//! In-place `.ts` editing.
//!
//! The writer only knows the fields of the model, so rewriting a file
//! through it loses length variants, `<extra-*>` data and relative
//! locations. The editor instead cuts the byte ranges of deleted elements
//! out of the original text and leaves everything else as it was.

use std::ops::Range;

use super::{CatalogError, Message, parse_catalog};

/// Remove the messages matching `predicate(context_name, message)` from
/// `content`. A context that loses all of its messages is removed as a
/// whole, `<name>` included.
///
/// Each removed element takes its own lines with it when nothing else
/// shares them. Returns the edited text and the number of messages removed.
pub fn delete_messages(
    content: &str,
    mut predicate: impl FnMut(&str, &Message) -> bool,
) -> Result<(String, usize), CatalogError> {
    let catalog = parse_catalog(content)?;

    let mut cuts: Vec<Range<usize>> = Vec::new();
    let mut removed = 0;
    for context in &catalog.contexts {
        let doomed: Vec<&Message> = context
            .messages
            .iter()
            .filter(|m| predicate(&context.name, m))
            .collect();
        if doomed.is_empty() {
            continue;
        }
        removed += doomed.len();
        if doomed.len() == context.messages.len() {
            cuts.push(whole_lines(content, context.range.clone()));
        } else {
            cuts.extend(doomed.iter().map(|m| whole_lines(content, m.range.clone())));
        }
    }

    if removed == 0 {
        return Ok((content.to_string(), 0));
    }

    cuts.sort_by_key(|r| r.start);
    let mut output = String::with_capacity(content.len());
    let mut pos = 0;
    for cut in cuts {
        if cut.start > pos {
            output.push_str(&content[pos..cut.start]);
        }
        pos = pos.max(cut.end);
    }
    output.push_str(&content[pos..]);

    Ok((output, removed))
}

/// Widen `range` to full lines when only whitespace surrounds it.
fn whole_lines(content: &str, range: Range<usize>) -> Range<usize> {
    let line_start = content[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let start = if content[line_start..range.start].trim().is_empty() {
        line_start
    } else {
        range.start
    };

    let rest = &content[range.end..];
    let (line_end, newline) = match rest.find('\n') {
        Some(i) => (i, 1),
        None => (rest.len(), 0),
    };
    let end = if rest[..line_end].trim().is_empty() {
        range.end + line_end + newline
    } else {
        range.end
    };

    start..end
}
