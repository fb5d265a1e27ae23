//! Tree-to-markup rendering with quick-xml.

use std::borrow::Cow;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use tracing::debug;

use tlxml_model::Document;

use crate::common::{INDENT_WIDTH, XML_ENCODING, XML_VERSION};
use crate::error::{OutputError, Result};
use crate::lower::ToXmlTree;
use crate::tree::{XmlContent, XmlElement};

/// Render a document, XML declaration included.
pub fn render_document(document: &Document) -> Result<Vec<u8>> {
    render_tree(&document.to_xml_tree())
}

/// Render any element tree as an indented XML document.
///
/// Elements without children are written on one line (`<a>text</a>`, or
/// `<a></a>` when empty). Text and attribute values are escaped, and
/// characters XML 1.0 cannot carry become U+FFFD.
pub fn render_tree(root: &XmlElement) -> Result<Vec<u8>> {
    let mut xml = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);
    emit(
        &mut xml,
        Event::Decl(BytesDecl::new(XML_VERSION, Some(XML_ENCODING), None)),
    )?;
    write_element(&mut xml, root)?;
    let bytes = xml.into_inner();
    debug!(root = %root.name, bytes = bytes.len(), "rendered xml");
    Ok(bytes)
}

fn write_element(xml: &mut Writer<Vec<u8>>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::Owned(escape_value(value, true).into_bytes()),
        });
    }
    emit(xml, Event::Start(start))?;
    match &element.content {
        XmlContent::Text(text) => {
            emit(
                xml,
                Event::Text(BytesText::from_escaped(escape_value(text, false))),
            )?;
        }
        // An empty text event keeps the closing tag on the same line.
        XmlContent::Children(children) if children.is_empty() => {
            emit(xml, Event::Text(BytesText::new("")))?;
        }
        XmlContent::Children(children) => {
            for child in children {
                write_element(xml, child)?;
            }
        }
    }
    emit(xml, Event::End(BytesEnd::new(element.name.as_str())))
}

/// Escape a text or attribute value.
///
/// `\r` is written as a character reference so parsers do not fold it into
/// `\n`; inside attributes `\n` and `\t` are too, since attribute value
/// normalization would turn them into spaces.
fn escape_value(value: &str, in_attribute: bool) -> String {
    let sanitized: String = value
        .chars()
        .map(|ch| {
            if is_xml_char(ch) {
                ch
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect();
    let escaped = escape(sanitized.as_str()).replace('\r', "&#xD;");
    if in_attribute {
        escaped.replace('\n', "&#xA;").replace('\t', "&#x9;")
    } else {
        escaped
    }
}

/// The XML 1.0 `Char` production.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn emit(xml: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    xml.write_event(event).map_err(|err| OutputError::Render {
        message: err.to_string(),
    })
}
