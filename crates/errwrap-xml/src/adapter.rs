//! The error-mapping XML adapter.
//!
//! [`ErrorXmlAdapter`] wraps an [`ErrorMapping`] for the duration of one
//! serialize or deserialize call. The surrounding serializer owns the
//! container element and the stream; the adapter only reads and writes the
//! entries between the container's tags.

use std::any::TypeId;
use std::io::{self, Write};

use errwrap_model::ErrorMapping;
use quick_xml::{Reader, Writer};

use crate::deserialize::read_container;
use crate::error::XmlError;
use crate::serialize::write_entries;

/// Types that read and write their own XML representation.
pub trait XmlSerializable {
    /// Populate this value from the reader.
    ///
    /// The reader is positioned at or before the start tag of the element
    /// that represents this value; on success that element has been consumed
    /// entirely.
    ///
    /// # Errors
    ///
    /// Returns `XmlError` if the XML is malformed.
    fn read_xml(&mut self, reader: &mut Reader<&[u8]>) -> Result<(), XmlError>;

    /// Write this value as child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;

    /// The XML schema describing this value, if one is published.
    fn schema(&self) -> Option<&str> {
        None
    }
}

/// Wire wrappers that hand their domain value back to a generic converter.
pub trait Unwrappable {
    /// The wrapped domain value.
    type Inner;

    /// Return the wrapped value. `declared_type` is the type the caller
    /// asked for; it does not change the result.
    fn unwrap_as(&self, declared_type: TypeId) -> &Self::Inner;
}

/// Adapter that reads and writes an [`ErrorMapping`] as XML child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorXmlAdapter {
    mapping: ErrorMapping,
}

impl ErrorXmlAdapter {
    /// Wrap a caller-supplied mapping.
    #[must_use]
    pub fn new(mapping: ErrorMapping) -> Self {
        Self { mapping }
    }

    /// The wrapped mapping.
    #[must_use]
    pub fn mapping(&self) -> &ErrorMapping {
        &self.mapping
    }

    /// Consume the adapter and return the wrapped mapping.
    #[must_use]
    pub fn into_inner(self) -> ErrorMapping {
        self.mapping
    }
}

impl From<ErrorMapping> for ErrorXmlAdapter {
    fn from(mapping: ErrorMapping) -> Self {
        Self::new(mapping)
    }
}

impl XmlSerializable for ErrorXmlAdapter {
    fn read_xml(&mut self, reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
        read_container(reader, &mut self.mapping)
    }

    fn write_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_entries(writer, &self.mapping)
    }
}

impl Unwrappable for ErrorXmlAdapter {
    type Inner = ErrorMapping;

    fn unwrap_as(&self, _declared_type: TypeId) -> &ErrorMapping {
        &self.mapping
    }
}
