//! Serialization of catalogs back to the TS document format.
//!
//! Output follows the layout extraction tools produce: XML declaration,
//! `<!DOCTYPE TS>`, four-space indentation and message children in the order
//! `location`, `source`, `oldsource`, `comment`, `oldcomment`,
//! `extracomment`, `translatorcomment`, `translation`.

use std::{fs, mem, path::Path};

use anyhow::{Context as _, Result};
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::core::data::{Catalog, Context, Message, Translation};

const DOCUMENT_HEADER: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE TS>\n";

struct ElementBuilder(Element);

impl ElementBuilder {
    fn new(tag: &str) -> Self {
        Self(Element::new(tag))
    }

    fn build(self) -> Element {
        self.0
    }

    fn attr_opt(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.0.attributes.insert(key.to_owned(), value.to_owned());
        }
        self
    }

    fn child(mut self, child: Element) -> Self {
        self.0.children.push(XMLNode::Element(child));
        self
    }

    fn child_opt(mut self, child: Option<Element>) -> Self {
        if let Some(child) = child {
            self.0.children.push(XMLNode::Element(child));
        }
        self
    }

    fn extend<I: IntoIterator<Item = Element>>(mut self, children: I) -> Self {
        self.0
            .children
            .extend(children.into_iter().map(XMLNode::Element));
        self
    }

    /// Text content; always emits an explicit end tag, even when empty.
    fn text(mut self, text: &str) -> Self {
        self.0.children.extend(text_nodes(text));
        self
    }
}

/// Split text around characters XML 1.0 cannot carry and encode those as
/// `<byte value="x.."/>`.
///
/// Every byte element is surrounded by text nodes (possibly empty) so the
/// emitter never indents between them, which would change the text.
fn text_nodes(text: &str) -> Vec<XMLNode> {
    let mut nodes = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if is_forbidden_in_xml(ch) {
            nodes.push(XMLNode::Text(mem::take(&mut current)));
            let mut byte = Element::new("byte");
            byte.attributes
                .insert("value".to_owned(), format!("x{:x}", u32::from(ch)));
            nodes.push(XMLNode::Element(byte));
        } else {
            current.push(ch);
        }
    }
    nodes.push(XMLNode::Text(current));
    nodes
}

fn is_forbidden_in_xml(ch: char) -> bool {
    (ch < '\u{20}' && !matches!(ch, '\t' | '\n' | '\r')) || matches!(ch, '\u{fffe}' | '\u{ffff}')
}

fn text_element(tag: &str, text: &str) -> Element {
    ElementBuilder::new(tag).text(text).build()
}

fn opt_text_element(tag: &str, text: Option<&str>) -> Option<Element> {
    text.map(|text| text_element(tag, text))
}

fn message_element(message: &Message) -> Element {
    let locations = message.locations.iter().map(|location| {
        ElementBuilder::new("location")
            .attr_opt("filename", location.filename.as_deref())
            .attr_opt("line", location.line.as_deref())
            .build()
    });

    let translation = ElementBuilder::new("translation")
        .attr_opt("type", message.status.as_attribute());
    let translation = match &message.translation {
        Translation::Single(text) => translation.text(text),
        Translation::Numerus(forms) => {
            translation.extend(forms.iter().map(|form| text_element("numerusform", form)))
        }
    };

    ElementBuilder::new("message")
        .attr_opt("id", message.id.as_deref())
        .attr_opt("numerus", message.is_numerus().then_some("yes"))
        .extend(locations)
        .child(text_element("source", &message.source))
        .child_opt(opt_text_element("oldsource", message.old_source.as_deref()))
        .child_opt(opt_text_element("comment", message.comment.as_deref()))
        .child_opt(opt_text_element("oldcomment", message.old_comment.as_deref()))
        .child_opt(opt_text_element(
            "extracomment",
            message.extra_comment.as_deref(),
        ))
        .child_opt(opt_text_element(
            "translatorcomment",
            message.translator_comment.as_deref(),
        ))
        .child(translation.build())
        .build()
}

fn context_element(context: &Context) -> Element {
    ElementBuilder::new("context")
        .child(text_element("name", &context.name))
        .child_opt(opt_text_element("comment", context.comment.as_deref()))
        .extend(context.messages.iter().map(message_element))
        .build()
}

fn catalog_element(catalog: &Catalog) -> Element {
    ElementBuilder::new("TS")
        .attr_opt("version", catalog.version.as_deref())
        .attr_opt("language", catalog.language.as_deref())
        .attr_opt("sourcelanguage", catalog.source_language.as_deref())
        .extend(catalog.contexts.iter().map(context_element))
        .build()
}

/// Serialize a catalog to a TS document.
pub fn write_ts_string(catalog: &Catalog) -> Result<String> {
    let config = EmitterConfig::new()
        .perform_indent(true)
        .indent_string("    ")
        .write_document_declaration(false);

    let mut out = DOCUMENT_HEADER.as_bytes().to_vec();
    catalog_element(catalog)
        .write_with_config(&mut out, config)
        .context("Failed to serialize catalog")?;
    out.push(b'\n');

    String::from_utf8(out).context("Serialized catalog is not valid UTF-8")
}

/// Serialize a catalog and write it to `path`.
pub fn write_ts_file(catalog: &Catalog, path: &Path) -> Result<()> {
    let content = write_ts_string(catalog)?;
    fs::write(path, content).with_context(|| format!("Failed to write catalog file: {:?}", path))
}
