//! XML serialization: writing an [`ErrorMapping`] as child elements of a container.
//!
//! Each entry becomes `<EncodedKey>value</EncodedKey>`; an entry without a value
//! becomes `<EncodedKey/>`. The container element itself is only written by the
//! document-level helpers [`to_xml`] and [`mapping_to_xml`].

use std::io::{self, Write};

use errwrap_model::ErrorMapping;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use crate::adapter::XmlSerializable;
use crate::config::XmlAdapterConfig;
use crate::error::XmlError;
use crate::name::{encode_local_name, is_valid_element_name, is_xml_char};

/// Serialize a value as a complete XML error document.
///
/// Writes the optional declaration and the container element named by
/// `config.root_element`, with the value's entries as children.
///
/// # Errors
///
/// Returns `XmlError` if serialization fails.
pub fn to_xml<T: XmlSerializable>(
    config: &XmlAdapterConfig,
    value: &T,
) -> Result<Vec<u8>, XmlError> {
    let mut buf = Vec::with_capacity(256);
    write_document(&mut buf, config, |w| value.write_xml(w))?;
    Ok(buf)
}

/// Serialize a mapping as a complete XML error document.
///
/// Writing to a `Vec<u8>` does not fail in practice; if it does, the error is
/// logged and an empty buffer is returned.
#[must_use]
pub fn mapping_to_xml(config: &XmlAdapterConfig, mapping: &ErrorMapping) -> Vec<u8> {
    let mut buf = Vec::with_capacity(256);
    if let Err(e) = write_document(&mut buf, config, |w| write_entries(w, mapping)) {
        tracing::error!(error = %e, "failed to serialize error mapping XML");
        buf.clear();
    }
    buf
}

fn write_document<F>(buf: &mut Vec<u8>, config: &XmlAdapterConfig, content: F) -> io::Result<()>
where
    F: FnOnce(&mut Writer<&mut Vec<u8>>) -> io::Result<()>,
{
    if !is_valid_element_name(&config.root_element) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid root element name: {:?}", config.root_element),
        ));
    }

    let mut writer = match config.indent {
        Some(width) => Writer::new_with_indent(buf, b' ', width),
        None => Writer::new(buf),
    };

    if config.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    writer
        .create_element(config.root_element.as_str())
        .write_inner_content(content)?;

    Ok(())
}

/// Write one child element per entry, in order.
///
/// # Errors
///
/// Returns `io::Error` if writing to the underlying writer fails, or with
/// `InvalidData` if a value contains a character XML does not allow. Entries
/// before the offending one have already been written.
pub fn write_entries<W: Write>(writer: &mut Writer<W>, mapping: &ErrorMapping) -> io::Result<()> {
    for entry in mapping {
        let name = encode_local_name(&entry.key);
        match entry.value() {
            Some(value) => {
                check_text(&entry.key, value)?;
                writer
                    .create_element(name.as_str())
                    .write_text_content(BytesText::new(value))?;
            }
            None => {
                writer.create_element(name.as_str()).write_empty()?;
            }
        }
    }
    tracing::debug!(entries = mapping.len(), "encoded error mapping");
    Ok(())
}

fn check_text(key: &str, value: &str) -> io::Result<()> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "value for key {key:?} contains U+{:04X}, which XML does not allow",
                u32::from(c)
            ),
        )),
        None => Ok(()),
    }
}
