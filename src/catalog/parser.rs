//! `.ts` XML parser.
//!
//! Reads the Qt Linguist schema with `roxmltree` and builds an owned
//! [`TranslationCatalog`]. Unknown elements (`<dependencies>`, `<defaultcodec>`,
//! ...) are skipped so files written by newer tooling still load.

use std::collections::HashMap;

use roxmltree::{Document, Node, ParsingOptions};

use super::{
    CatalogError, Context, DEFAULT_TS_VERSION, Location, Message, Span, Translation,
    TranslationCatalog, TranslationStatus,
};

/// Parse `.ts` XML into a catalog.
pub fn parse_catalog(content: &str) -> Result<TranslationCatalog, CatalogError> {
    let mut options = ParsingOptions::default();
    // lupdate always emits `<!DOCTYPE TS>`.
    options.allow_dtd = true;
    let doc = Document::parse_with_options(content, options)?;

    let root = doc.root_element();
    if root.tag_name().name() != "TS" {
        return Err(schema_error(
            &doc,
            root,
            format!(
                "expected <TS> root element, found <{}>",
                root.tag_name().name()
            ),
        ));
    }

    let mut catalog = TranslationCatalog {
        version: root
            .attribute("version")
            .unwrap_or(DEFAULT_TS_VERSION)
            .to_string(),
        language: root.attribute("language").map(str::to_string),
        source_language: root.attribute("sourcelanguage").map(str::to_string),
        contexts: Vec::new(),
    };

    let mut locations = LocationState::default();
    for node in child_elements(root) {
        if node.tag_name().name() == "context" {
            catalog
                .contexts
                .push(parse_context(&doc, node, &mut locations)?);
        }
    }

    Ok(catalog)
}

/// Tracks the previous location so relative `<location>` entries
/// (`line="+3"`, missing `filename`) can be resolved.
#[derive(Default)]
struct LocationState {
    current_file: String,
    last_line: HashMap<String, i64>,
}

impl LocationState {
    fn resolve(&mut self, filename: Option<&str>, line: &str) -> Option<Location> {
        if let Some(filename) = filename {
            self.current_file = filename.to_string();
        }
        let file = self.current_file.clone();

        let line = line.trim();
        let value = if line.starts_with('+') || line.starts_with('-') {
            let delta: i64 = line.parse().ok()?;
            self.last_line.get(&file).copied().unwrap_or(0) + delta
        } else {
            line.parse().ok()?
        };
        if value < 0 {
            return None;
        }

        self.last_line.insert(file.clone(), value);
        Some(Location::new(file, value as usize))
    }
}

fn parse_context(
    doc: &Document,
    node: Node,
    locations: &mut LocationState,
) -> Result<Context, CatalogError> {
    let mut context = Context {
        span: span_of(doc, node),
        range: node.range(),
        ..Default::default()
    };
    let mut name = None;

    for child in child_elements(node) {
        match child.tag_name().name() {
            "name" => name = Some(element_text(child)),
            "message" => {
                if let Some(message) = parse_message(doc, child, locations)? {
                    context.messages.push(message);
                }
            }
            _ => {}
        }
    }

    context.name = name.ok_or_else(|| schema_error(doc, node, "<context> without <name>"))?;
    Ok(context)
}

/// A `<message>` without `<source>` cannot be looked up and is skipped.
fn parse_message(
    doc: &Document,
    node: Node,
    locations: &mut LocationState,
) -> Result<Option<Message>, CatalogError> {
    let numerus = node.attribute("numerus") == Some("yes");
    let mut message = Message {
        span: span_of(doc, node),
        range: node.range(),
        translation: if numerus {
            Translation::Numerus(Vec::new())
        } else {
            Translation::default()
        },
        ..Default::default()
    };
    let mut source = None;

    for child in child_elements(node) {
        match child.tag_name().name() {
            // Provenance only: an unreadable location is dropped, the
            // message itself still loads.
            "location" => {
                let line = child.attribute("line").unwrap_or("0");
                if let Some(location) = locations.resolve(child.attribute("filename"), line) {
                    message.locations.push(location);
                }
            }
            "source" => source = Some(element_text(child)),
            "oldsource" => message.old_source = Some(element_text(child)),
            "comment" => message.comment = Some(element_text(child)),
            "extracomment" => message.extra_comment = Some(element_text(child)),
            "translatorcomment" => message.translator_comment = Some(element_text(child)),
            "translation" => {
                message.status = parse_status(child.attribute("type"));
                message.translation_span = Some(span_of(doc, child));
                message.translation = if numerus {
                    Translation::Numerus(
                        child_elements(child)
                            .filter(|n| n.tag_name().name() == "numerusform")
                            .map(variant_text)
                            .collect(),
                    )
                } else {
                    Translation::Single(variant_text(child))
                };
            }
            _ => {}
        }
    }

    match source {
        Some(source) => {
            message.source = source;
            Ok(Some(message))
        }
        None => Ok(None),
    }
}

fn parse_status(kind: Option<&str>) -> TranslationStatus {
    match kind {
        Some("unfinished") => TranslationStatus::Unfinished,
        Some("vanished") | Some("obsolete") => TranslationStatus::Vanished,
        _ => TranslationStatus::Finished,
    }
}

fn child_elements<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(Node::is_element)
}

/// Text of an element that may carry `variants="yes"`; the first
/// `<lengthvariant>` is the primary form.
fn variant_text(node: Node) -> String {
    match child_elements(node).find(|n| n.tag_name().name() == "lengthvariant") {
        Some(variant) => element_text(variant),
        None => element_text(node),
    }
}

/// Concatenated text of an element. `<byte value="x1b"/>` children encode
/// control characters that XML 1.0 cannot carry.
fn element_text(node: Node) -> String {
    let mut text = String::new();
    for child in node.children() {
        if child.is_text() {
            text.push_str(child.text().unwrap_or_default());
        } else if child.is_element() && child.tag_name().name() == "byte" {
            if let Some(c) = child.attribute("value").and_then(parse_byte_value) {
                text.push(c);
            }
        }
    }
    text
}

fn parse_byte_value(value: &str) -> Option<char> {
    let code = match value.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => value.parse().ok()?,
    };
    char::from_u32(code)
}

fn span_of(doc: &Document, node: Node) -> Span {
    let pos = doc.text_pos_at(node.range().start);
    Span::new(pos.row as usize, pos.col as usize)
}

fn schema_error(doc: &Document, node: Node, message: impl Into<String>) -> CatalogError {
    CatalogError::Schema {
        line: span_of(doc, node).line,
        message: message.into(),
    }
}
