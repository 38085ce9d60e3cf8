//! Tolerant markup reader.
//!
//! Built on quick-xml's event reader with end-name checking disabled, plus the
//! handful of HTML rules a page-object generator actually meets: void
//! elements, valueless attributes, stray end tags and named entities.

use crate::document::Document;
use crate::error::DomError;
use crate::node::{ElementData, NodeId};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::{Captures, Regex};
use std::sync::LazyLock;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").unwrap());

pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(&tag_name)
}

/// Parse markup into a fresh [`Document`].
pub fn parse(markup: &str) -> Result<Document, DomError> {
    let mut doc = Document::new();
    let mut open: Vec<(NodeId, String)> = Vec::new();

    let mut reader = Reader::from_str(markup);
    reader.check_end_names(false);

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(DomError::Markup {
                    position: reader.buffer_position(),
                    source,
                });
            }
        };
        let parent = open.last().map(|(id, _)| *id).unwrap_or(doc.root());

        match event {
            Event::Start(start) => {
                let element = element_from_tag(&start);
                let tag_name = element.tag_name.clone();
                let id = doc.create_element(parent, element);

                if RAW_TEXT_ELEMENTS.contains(&tag_name.as_str()) {
                    let end = start.to_end().into_owned();
                    let text = match reader.read_text(end.name()) {
                        Ok(text) => text,
                        Err(source) => {
                            return Err(DomError::Markup {
                                position: reader.buffer_position(),
                                source,
                            });
                        }
                    };
                    if !text.is_empty() {
                        doc.append_text(id, text.into_owned());
                    }
                } else if !is_void_element(&tag_name) {
                    open.push((id, tag_name));
                }
            }
            Event::Empty(start) => {
                doc.create_element(parent, element_from_tag(&start));
            }
            Event::End(end) => {
                let name = String::from_utf8_lossy(end.name().as_ref()).to_ascii_lowercase();
                close_element(&mut open, &name);
            }
            Event::Text(text) => {
                let raw = String::from_utf8_lossy(&text);
                doc.append_text(parent, decode_entities(&raw));
            }
            Event::CData(data) => {
                doc.append_text(parent, String::from_utf8_lossy(&data).into_owned());
            }
            Event::Comment(comment) => {
                doc.append_comment(parent, String::from_utf8_lossy(&comment).into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(doc)
}

fn element_from_tag(start: &BytesStart<'_>) -> ElementData {
    let tag_name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = ElementData::new(&tag_name);

    for attr in start.html_attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = String::from_utf8_lossy(&attr.value);
        element.set_attribute(&key, decode_entities(&value));
    }

    element
}

/// Close the nearest open element named `name`, implicitly closing anything
/// opened after it. End tags with no open counterpart are ignored.
fn close_element(open: &mut Vec<(NodeId, String)>, name: &str) {
    if let Some(pos) = open.iter().rposition(|(_, tag)| tag == name) {
        open.truncate(pos);
    }
}

/// Decode character references. Unknown named references are left as-is.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    ENTITY_RE
        .replace_all(s, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body
                .strip_prefix("#x")
                .or_else(|| body.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(body)
            };
            decoded
                .map(|c| c.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "copy" => Some('\u{a9}'),
        "reg" => Some('\u{ae}'),
        "hellip" => Some('\u{2026}'),
        "mdash" => Some('\u{2014}'),
        "ndash" => Some('\u{2013}'),
        _ => None,
    }
}
