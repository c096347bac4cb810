//! Output configuration for error-mapping XML documents.
//!
//! Configuration can be built in code or read from environment variables.

use crate::name::is_valid_element_name;

/// Default container element name.
pub const DEFAULT_ROOT_ELEMENT: &str = "Error";

/// Settings used when writing a complete error document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XmlAdapterConfig {
    /// Name of the container element.
    pub root_element: String,
    /// Whether to emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub xml_declaration: bool,
    /// Indentation width in spaces; `None` writes everything on one line.
    pub indent: Option<usize>,
}

impl Default for XmlAdapterConfig {
    fn default() -> Self {
        Self {
            root_element: DEFAULT_ROOT_ELEMENT.to_owned(),
            xml_declaration: false,
            indent: None,
        }
    }
}

impl XmlAdapterConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `ERRWRAP_ROOT_ELEMENT`, `ERRWRAP_XML_DECLARATION` and
    /// `ERRWRAP_XML_INDENT`; unset variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("ERRWRAP_ROOT_ELEMENT") {
            if is_valid_element_name(&v) {
                config.root_element = v;
            } else {
                tracing::warn!(value = %v, "ignoring invalid ERRWRAP_ROOT_ELEMENT");
            }
        }
        if let Some(v) = lookup("ERRWRAP_XML_DECLARATION") {
            config.xml_declaration = v == "1" || v.eq_ignore_ascii_case("true");
        }
        if let Some(v) = lookup("ERRWRAP_XML_INDENT") {
            match v.parse::<usize>() {
                Ok(n) => config.indent = Some(n),
                Err(e) => {
                    tracing::warn!(value = %v, error = %e, "ignoring invalid ERRWRAP_XML_INDENT");
                }
            }
        }

        config
    }

    /// Use a different container element name.
    #[must_use]
    pub fn with_root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = name.into();
        self
    }

    /// Enable or disable the XML declaration.
    #[must_use]
    pub fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Indent nested elements by `width` spaces.
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }
}
