//! Error mapping types for errwrap.
//!
//! An [`ErrorMapping`] is the ordered list of key/value pairs produced by a
//! validation layer: each key names a field (or the whole object) and each
//! value carries the already-flattened error text. The XML and JSON layers
//! treat it purely as an appendable, ordered sequence of pairs.

mod mapping;

pub use mapping::{ErrorEntry, ErrorMapping};
