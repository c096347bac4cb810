//! Error-mapping XML serialization/deserialization for errwrap.
//!
//! This crate converts an [`errwrap_model::ErrorMapping`] to and from an XML
//! element whose children are the mapping's entries:
//!
//! ```xml
//! <Error>
//!   <Name>Required</Name>
//!   <Age>Must be a number</Age>
//! </Error>
//! ```
//!
//! # Key components
//!
//! - [`ErrorXmlAdapter`] implementing [`XmlSerializable`] and [`Unwrappable`]
//! - [`to_xml`] / [`mapping_to_xml`] and [`from_xml`] for whole documents
//! - [`encode_local_name`] / [`decode_name`] for the reversible key encoding
//! - [`XmlAdapterConfig`] for the container name, declaration and indentation
//!
//! # Conventions
//!
//! - Keys that are not legal XML local names are escaped as `_xHHHH_`
//! - Values are written as escaped text; a missing value is an empty element
//! - Reading cannot tell a missing value from an empty one: both read back as `""`

pub mod adapter;
pub mod config;
pub mod deserialize;
pub mod error;
pub mod name;
pub mod serialize;

pub use adapter::{ErrorXmlAdapter, Unwrappable, XmlSerializable};
pub use config::{DEFAULT_ROOT_ELEMENT, XmlAdapterConfig};
pub use deserialize::from_xml;
pub use error::XmlError;
pub use name::{
    EMPTY_KEY_NAME, decode_name, encode_local_name, is_valid_element_name, is_xml_char,
};
pub use serialize::{mapping_to_xml, to_xml, write_entries};
