//! `.ts` XML writer.
//!
//! Produces the same layout lupdate writes with absolute locations, so a
//! catalog read from such a file is written back byte-for-byte. Only what the
//! model holds is written: length variants past the first, `<extra-*>` and
//! other unknown elements are not. Use [`super::editor`] to change a file
//! without losing them.

use std::fmt::Write;

use super::{Message, Translation, TranslationCatalog};

/// Serialize a catalog to `.ts` XML.
pub fn write_catalog(catalog: &TranslationCatalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    let _ = write!(out, "<TS version=\"{}\"", escape_attr(&catalog.version));
    if let Some(language) = &catalog.language {
        let _ = write!(out, " language=\"{}\"", escape_attr(language));
    }
    if let Some(source_language) = &catalog.source_language {
        let _ = write!(out, " sourcelanguage=\"{}\"", escape_attr(source_language));
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        out.push_str("<context>\n");
        let _ = writeln!(out, "    <name>{}</name>", escape(&context.name));
        for message in &context.messages {
            write_message(&mut out, message);
        }
        out.push_str("</context>\n");
    }

    out.push_str("</TS>\n");
    out
}

fn write_message(out: &mut String, message: &Message) {
    if message.is_numerus() {
        out.push_str("    <message numerus=\"yes\">\n");
    } else {
        out.push_str("    <message>\n");
    }

    for location in &message.locations {
        let _ = writeln!(
            out,
            "        <location filename=\"{}\" line=\"{}\"/>",
            escape_attr(&location.filename),
            location.line
        );
    }
    write_element(out, "source", &message.source);
    if let Some(old_source) = &message.old_source {
        write_element(out, "oldsource", old_source);
    }
    if let Some(comment) = &message.comment {
        write_element(out, "comment", comment);
    }
    if let Some(extra) = &message.extra_comment {
        write_element(out, "extracomment", extra);
    }
    if let Some(note) = &message.translator_comment {
        write_element(out, "translatorcomment", note);
    }

    let type_attr = message
        .status
        .type_attr()
        .map(|t| format!(" type=\"{}\"", t))
        .unwrap_or_default();
    match &message.translation {
        Translation::Single(text) => {
            let _ = writeln!(
                out,
                "        <translation{}>{}</translation>",
                type_attr,
                escape(text)
            );
        }
        Translation::Numerus(forms) => {
            let _ = writeln!(out, "        <translation{}>", type_attr);
            for form in forms {
                let _ = writeln!(
                    out,
                    "            <numerusform>{}</numerusform>",
                    escape(form)
                );
            }
            out.push_str("        </translation>\n");
        }
    }

    out.push_str("    </message>\n");
}

fn write_element(out: &mut String, tag: &str, text: &str) {
    let _ = writeln!(out, "        <{tag}>{}</{tag}>", escape(text));
}

/// Escape text for element content.
///
/// Control characters other than tab, newline and carriage return are not
/// representable in XML 1.0 and are written as `<byte/>` elements.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => escaped.push(c),
            c if (c as u32) < 0x20 => {
                let _ = write!(escaped, "<byte value=\"x{:x}\"/>", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Escape an attribute value. Whitespace controls become character
/// references so attribute normalization keeps them; other control
/// characters cannot appear in an attribute and are dropped.
pub fn escape_attr(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            '\t' | '\n' | '\r' => {
                let _ = write!(escaped, "&#{};", c as u32);
            }
            c if (c as u32) < 0x20 => {}
            c => escaped.push(c),
        }
    }
    escaped
}
