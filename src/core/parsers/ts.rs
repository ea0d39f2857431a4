//! Parser for XML translation source documents.
//!
//! The document is read as an event stream so every structural error can
//! point at the element it was raised for:
//!
//! ```text
//! <TS version="2.1" language="sr_RS">
//!   <context>
//!     <name>About</name>
//!     <message numerus="yes">
//!       <location filename="about.ui" line="14"/>
//!       <source>About Cppcheck</source>
//!       <translation type="unfinished">...</translation>
//!     </message>
//!   </context>
//! </TS>
//! ```
//!
//! Unknown elements are skipped so newer tooling output still loads.

use std::{fs, io::Read, path::Path};

use anyhow::{Context as _, Result};
use thiserror::Error;
use xml::{
    attribute::OwnedAttribute,
    common::{Position, TextPosition},
    reader::{EventReader, ParserConfig, XmlEvent},
};

use crate::core::data::{Catalog, Context, Location, Message, Translation, TranslationStatus};

pub const ROOT_TAG: &str = "TS";

/// A catalog document that could not be turned into a `Catalog`.
///
/// Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{line}:{column}: malformed XML: {message}")]
    Xml {
        line: u64,
        column: u64,
        message: String,
    },
    #[error("{line}:{column}: expected root element <TS>, found <{found}>")]
    UnexpectedRoot { line: u64, column: u64, found: String },
    #[error("{line}:{column}: <{element}> has no <{child}>")]
    MissingChild {
        line: u64,
        column: u64,
        element: &'static str,
        child: &'static str,
    },
    #[error("{line}:{column}: unknown translation type \"{value}\"")]
    UnknownStatus { line: u64, column: u64, value: String },
}

impl ParseError {
    /// Line the error points at.
    pub fn line(&self) -> u64 {
        match self {
            ParseError::Xml { line, .. }
            | ParseError::UnexpectedRoot { line, .. }
            | ParseError::MissingChild { line, .. }
            | ParseError::UnknownStatus { line, .. } => *line,
        }
    }

    pub fn column(&self) -> u64 {
        match self {
            ParseError::Xml { column, .. }
            | ParseError::UnexpectedRoot { column, .. }
            | ParseError::MissingChild { column, .. }
            | ParseError::UnknownStatus { column, .. } => *column,
        }
    }
}

/// Parse a catalog from its textual content.
pub fn parse_ts_str(content: &str) -> Result<Catalog, ParseError> {
    parse_ts_reader(content.as_bytes())
}

/// Parse a catalog from any byte source.
pub fn parse_ts_reader<R: Read>(source: R) -> Result<Catalog, ParseError> {
    let config = ParserConfig::new()
        .trim_whitespace(false)
        .whitespace_to_characters(true)
        .cdata_to_characters(true)
        .coalesce_characters(true)
        .ignore_comments(true);
    let mut reader = TsReader {
        events: config.create_reader(source),
    };
    reader.read_document()
}

/// Read and parse a catalog file.
pub fn parse_ts_file(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {:?}", path))?;
    parse_ts_str(&content).with_context(|| format!("Failed to parse catalog file: {:?}", path))
}

struct TsReader<R: Read> {
    events: EventReader<R>,
}

impl<R: Read> TsReader<R> {
    /// Next event together with the (0-based) position it starts at.
    fn next(&mut self) -> Result<(TextPosition, XmlEvent), ParseError> {
        match self.events.next() {
            Ok(event) => Ok((self.events.position(), event)),
            Err(err) => {
                let pos = err.position();
                Err(ParseError::Xml {
                    line: pos.row + 1,
                    column: pos.column + 1,
                    message: err.msg().to_string(),
                })
            }
        }
    }

    fn read_document(&mut self) -> Result<Catalog, ParseError> {
        loop {
            let (pos, event) = self.next()?;
            match event {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => {
                    if name.local_name != ROOT_TAG {
                        return Err(ParseError::UnexpectedRoot {
                            line: pos.row + 1,
                            column: pos.column + 1,
                            found: name.local_name,
                        });
                    }
                    let catalog = self.read_catalog(&attributes)?;
                    self.read_to_end()?;
                    return Ok(catalog);
                }
                // The reader rejects documents without a root before this.
                XmlEvent::EndDocument => return Ok(Catalog::default()),
                _ => {}
            }
        }
    }

    fn read_to_end(&mut self) -> Result<(), ParseError> {
        loop {
            if let (_, XmlEvent::EndDocument) = self.next()? {
                return Ok(());
            }
        }
    }

    fn read_catalog(&mut self, attributes: &[OwnedAttribute]) -> Result<Catalog, ParseError> {
        let mut catalog = Catalog {
            version: attribute(attributes, "version"),
            language: attribute(attributes, "language"),
            source_language: attribute(attributes, "sourcelanguage"),
            contexts: Vec::new(),
        };
        loop {
            let (pos, event) = self.next()?;
            match event {
                XmlEvent::StartElement { name, .. } if name.local_name == "context" => {
                    catalog.contexts.push(self.read_context(pos)?);
                }
                XmlEvent::StartElement { .. } => self.skip_element()?,
                XmlEvent::EndElement { .. } => return Ok(catalog),
                _ => {}
            }
        }
    }

    fn read_context(&mut self, start: TextPosition) -> Result<Context, ParseError> {
        let mut name = None;
        let mut comment = None;
        let mut messages = Vec::new();
        loop {
            let (pos, event) = self.next()?;
            match event {
                XmlEvent::StartElement {
                    name: tag,
                    attributes,
                    ..
                } => match tag.local_name.as_str() {
                    "name" => name = Some(self.read_text()?),
                    "comment" => comment = Some(self.read_text()?),
                    "message" => messages.push(self.read_message(pos, &attributes)?),
                    _ => self.skip_element()?,
                },
                XmlEvent::EndElement { .. } => break,
                _ => {}
            }
        }
        let name = name.ok_or(ParseError::MissingChild {
            line: start.row + 1,
            column: start.column + 1,
            element: "context",
            child: "name",
        })?;
        Ok(Context {
            name,
            comment,
            messages,
        })
    }

    fn read_message(
        &mut self,
        start: TextPosition,
        attributes: &[OwnedAttribute],
    ) -> Result<Message, ParseError> {
        let numerus = attribute(attributes, "numerus").as_deref() == Some("yes");
        let mut message = Message {
            id: attribute(attributes, "id"),
            line: Some(start.row as usize + 1),
            status: TranslationStatus::Unfinished,
            translation: if numerus {
                Translation::Numerus(Vec::new())
            } else {
                Translation::default()
            },
            ..Default::default()
        };
        let mut source = None;
        loop {
            let (pos, event) = self.next()?;
            match event {
                XmlEvent::StartElement {
                    name, attributes, ..
                } => match name.local_name.as_str() {
                    "location" => {
                        message.locations.push(Location {
                            filename: attribute(&attributes, "filename"),
                            line: attribute(&attributes, "line"),
                        });
                        self.skip_element()?;
                    }
                    "source" => source = Some(self.read_text()?),
                    "oldsource" => message.old_source = Some(self.read_text()?),
                    "comment" => message.comment = Some(self.read_text()?),
                    "oldcomment" => message.old_comment = Some(self.read_text()?),
                    "extracomment" => message.extra_comment = Some(self.read_text()?),
                    "translatorcomment" => message.translator_comment = Some(self.read_text()?),
                    "translation" => {
                        let kind = attribute(&attributes, "type");
                        message.status = TranslationStatus::from_attribute(kind.as_deref())
                            .ok_or_else(|| ParseError::UnknownStatus {
                                line: pos.row + 1,
                                column: pos.column + 1,
                                value: kind.unwrap_or_default(),
                            })?;
                        message.translation = if numerus {
                            Translation::Numerus(self.read_numerus_forms()?)
                        } else {
                            Translation::Single(self.read_text()?)
                        };
                    }
                    _ => self.skip_element()?,
                },
                XmlEvent::EndElement { .. } => break,
                _ => {}
            }
        }
        message.source = source.ok_or(ParseError::MissingChild {
            line: start.row + 1,
            column: start.column + 1,
            element: "message",
            child: "source",
        })?;
        Ok(message)
    }

    fn read_numerus_forms(&mut self) -> Result<Vec<String>, ParseError> {
        let mut forms = Vec::new();
        loop {
            let (_, event) = self.next()?;
            match event {
                XmlEvent::StartElement { name, .. } if name.local_name == "numerusform" => {
                    forms.push(self.read_text()?);
                }
                XmlEvent::StartElement { .. } => self.skip_element()?,
                XmlEvent::EndElement { .. } => return Ok(forms),
                _ => {}
            }
        }
    }

    /// Text content of the current element, entities and CDATA decoded.
    ///
    /// `<byte value="x1b"/>` escapes for characters XML cannot carry are
    /// decoded in place; any other child element is skipped.
    fn read_text(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            let (_, event) = self.next()?;
            match event {
                XmlEvent::Characters(chars) => text.push_str(&chars),
                XmlEvent::StartElement {
                    name, attributes, ..
                } => {
                    if name.local_name == "byte"
                        && let Some(ch) = attribute(&attributes, "value").and_then(decode_byte)
                    {
                        text.push(ch);
                    }
                    self.skip_element()?;
                }
                XmlEvent::EndElement { .. } => return Ok(text),
                _ => {}
            }
        }
    }

    /// Consume events up to and including the end of the current element.
    fn skip_element(&mut self) -> Result<(), ParseError> {
        let mut depth = 1usize;
        while depth > 0 {
            match self.next()?.1 {
                XmlEvent::StartElement { .. } => depth += 1,
                XmlEvent::EndElement { .. } => depth -= 1,
                _ => {}
            }
        }
        Ok(())
    }
}

fn attribute(attributes: &[OwnedAttribute], name: &str) -> Option<String> {
    attributes
        .iter()
        .find(|attr| attr.name.local_name == name)
        .map(|attr| attr.value.clone())
}

/// Decimal (`27`) or hexadecimal (`x1b`, `0x1b`) character code.
fn decode_byte(value: String) -> Option<char> {
    let (radix, digits) = if let Some(hex) = value.strip_prefix("0x") {
        (16, hex)
    } else if let Some(hex) = value.strip_prefix('x') {
        (16, hex)
    } else {
        (10, value.as_str())
    };
    u32::from_str_radix(digits, radix)
        .ok()
        .filter(|code| *code != 0)
        .and_then(char::from_u32)
}
