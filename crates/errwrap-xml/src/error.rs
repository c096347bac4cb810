//! Error types for error-mapping XML serialization and deserialization.

use std::io;

/// Errors that can occur while reading or writing an error mapping as XML.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library, including ill-formed input.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The input contained no container element.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The input ended before the named element was closed.
    #[error("unexpected EOF in {0}")]
    UnexpectedEof(String),

    /// Text, name, or entity content could not be decoded.
    #[error("failed to parse value: {0}")]
    ParseError(String),
}
