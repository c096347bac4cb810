//! XML deserialization: parsing an error container element into an [`ErrorMapping`].
//!
//! Each child of the container becomes one entry. The child's local name is
//! decoded with [`decode_name`] and its inner content becomes the value:
//!
//! - Text and CDATA directly inside the child are taken as text, with
//!   character and predefined entity references resolved.
//! - Nested elements are kept as markup, exactly as they appear in the input.
//! - A self-closing child reads as an empty string, the same as `<Key></Key>`.

use errwrap_model::ErrorMapping;
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, BytesStart, Event};

use crate::adapter::{ErrorXmlAdapter, XmlSerializable};
use crate::error::XmlError;
use crate::name::decode_name;

/// Deserialize an XML error document into an [`ErrorMapping`].
///
/// The container element may have any name; a leading declaration, comments
/// and whitespace are skipped.
///
/// # Errors
///
/// Returns `XmlError` if the XML is malformed or has no container element.
pub fn from_xml(xml: &[u8]) -> Result<ErrorMapping, XmlError> {
    let mut reader = Reader::from_reader(xml);
    let mut adapter = ErrorXmlAdapter::default();
    adapter.read_xml(&mut reader)?;
    Ok(adapter.into_inner())
}

/// Read a container element and append one entry per child to `mapping`.
///
/// The reader may be positioned anywhere before the container's start tag.
/// On return the container's end tag (or self-closing tag) has been consumed.
pub(crate) fn read_container(
    reader: &mut Reader<&[u8]>,
    mapping: &mut ErrorMapping,
) -> Result<(), XmlError> {
    // Skip the XML declaration and find the container element.
    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Empty(_) => {
                tracing::debug!(entries = 0, "decoded empty error container");
                return Ok(());
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                return Err(XmlError::ParseError(format!(
                    "unexpected end tag </{name}> before error container"
                )));
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                if !decoded.trim().is_empty() {
                    return Err(XmlError::ParseError(
                        "unexpected text before error container".to_owned(),
                    ));
                }
            }
            Event::CData(_) | Event::GeneralRef(_) => {
                return Err(XmlError::ParseError(
                    "unexpected text before error container".to_owned(),
                ));
            }
            Event::Eof => {
                return Err(XmlError::MissingElement("error container".to_owned()));
            }
            // Declaration, doctype, comments and processing instructions.
            _ => {}
        }
    }

    let before = mapping.len();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let key = entry_key(&e)?;
                let value = read_inner_content(reader)?;
                tracing::trace!(key = %key, "decoded error entry");
                mapping.push(key, Some(value));
            }
            Event::Empty(e) => {
                let key = entry_key(&e)?;
                tracing::trace!(key = %key, "decoded empty error entry");
                mapping.push(key, Some(String::new()));
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("error container".to_owned()));
            }
            // Whitespace, comments and processing instructions between entries.
            _ => {}
        }
    }

    tracing::debug!(entries = mapping.len() - before, "decoded error container");
    Ok(())
}

fn entry_key(start: &BytesStart<'_>) -> Result<String, XmlError> {
    let local = start.local_name();
    let name =
        std::str::from_utf8(local.as_ref()).map_err(|e| XmlError::ParseError(e.to_string()))?;
    Ok(decode_name(name))
}

/// Read everything up to the end tag of the current element.
///
/// Expects the reader to be positioned right after a `Start` event and
/// consumes through the matching `End` event.
fn read_inner_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    let mut markup = Writer::new(Vec::new());
    let mut depth: u32 = 0;

    loop {
        let event = reader.read_event()?;

        if depth > 0 {
            match &event {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => {
                    return Err(XmlError::UnexpectedEof("error entry".to_owned()));
                }
                _ => {}
            }
            markup.write_event(event)?;
            if depth == 0 {
                flush_markup(&mut markup, &mut text)?;
            }
            continue;
        }

        match event {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::GeneralRef(r) => text.push_str(&resolve_reference(&r)?),
            Event::CData(e) => {
                let raw = e.into_inner();
                let s = std::str::from_utf8(&raw)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(s);
            }
            Event::Start(e) => {
                depth = 1;
                markup.write_event(Event::Start(e))?;
            }
            Event::Empty(e) => {
                markup.write_event(Event::Empty(e))?;
                flush_markup(&mut markup, &mut text)?;
            }
            Event::End(_) => return Ok(text),
            Event::Eof => {
                return Err(XmlError::UnexpectedEof("error entry".to_owned()));
            }
            _ => {}
        }
    }
}

/// Move buffered nested markup onto the end of `text`.
fn flush_markup(markup: &mut Writer<Vec<u8>>, text: &mut String) -> Result<(), XmlError> {
    let bytes = std::mem::take(markup.get_mut());
    let s = String::from_utf8(bytes).map_err(|e| XmlError::ParseError(e.to_string()))?;
    text.push_str(&s);
    Ok(())
}

/// Resolve `&#NN;`, `&#xHH;` and the five predefined entities.
fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, XmlError> {
    if let Some(c) = reference.resolve_char_ref()? {
        return Ok(c.to_string());
    }
    let name = reference
        .decode()
        .map_err(|e| XmlError::ParseError(e.to_string()))?;
    resolve_predefined_entity(&name)
        .map(str::to_owned)
        .ok_or_else(|| XmlError::ParseError(format!("unknown entity reference: &{name};")))
}
