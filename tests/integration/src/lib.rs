//! Integration tests for errwrap (model + XML adapter).
//!
//! These tests exercise the crates together through their public APIs only.
//!
//! Run them with:
//! ```text
//! cargo test -p errwrap-integration
//! ```

use std::sync::Once;

use errwrap_model::ErrorMapping;
use errwrap_xml::{ErrorXmlAdapter, XmlAdapterConfig};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build a mapping from `(key, value)` pairs.
#[must_use]
pub fn mapping_of(pairs: &[(&str, &str)]) -> ErrorMapping {
    pairs.iter().copied().collect()
}

/// Encode with the default config, then decode.
#[must_use]
pub fn round_trip(mapping: &ErrorMapping) -> ErrorMapping {
    init_tracing();

    let adapter = ErrorXmlAdapter::new(mapping.clone());
    let xml = errwrap_xml::to_xml(&XmlAdapterConfig::default(), &adapter)
        .expect("serialization should succeed");
    errwrap_xml::from_xml(&xml).expect("deserialization should succeed")
}

/// Replace missing values with empty strings, the way a read-back mapping has them.
#[must_use]
pub fn with_empty_values(mapping: &ErrorMapping) -> ErrorMapping {
    mapping
        .iter()
        .map(|e| (e.key.clone(), e.value.clone().unwrap_or_default()))
        .collect()
}

mod test_malformed;
mod test_roundtrip;
