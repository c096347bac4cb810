//! Ordered key/value error mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single key/value error pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorEntry {
    /// Field name, or the sentinel the producer uses for whole-object errors.
    pub key: String,
    /// Error text. `None` is written as an empty element.
    pub value: Option<String>,
}

impl ErrorEntry {
    /// Create an entry with a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Create an entry without a value.
    #[must_use]
    pub fn empty(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// The value as a string slice, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Ordered sequence of error entries.
///
/// Keys are not deduplicated: [`ErrorMapping::push`] always appends, and
/// iteration yields entries in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ErrorMapping {
    entries: Vec<ErrorEntry>,
}

impl ErrorMapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mapping with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.push(ErrorEntry {
            key: key.into(),
            value,
        });
    }

    /// Append an entry with a value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ErrorEntry::new(key, value));
    }

    /// Value of the first entry with the given key.
    ///
    /// Returns `None` both when the key is missing and when its first entry
    /// has no value; use [`ErrorMapping::contains_key`] to tell them apart.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .and_then(ErrorEntry::value)
    }

    /// Values of every entry with the given key, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = Option<&'a str>> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.key == key)
            .map(ErrorEntry::value)
    }

    /// Whether any entry has the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Keys in insertion order, duplicates included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorEntry> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ErrorEntry] {
        &self.entries
    }
}

impl From<Vec<ErrorEntry>> for ErrorMapping {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<ErrorEntry> for ErrorMapping {
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| ErrorEntry::new(k, v))
            .collect()
    }
}

impl Extend<ErrorEntry> for ErrorMapping {
    fn extend<I: IntoIterator<Item = ErrorEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for ErrorMapping {
    type Item = ErrorEntry;
    type IntoIter = std::vec::IntoIter<ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorMapping {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// The JSON form is an object whose members keep insertion order. Duplicate
// keys are written and read back as repeated members.

impl Serialize for ErrorMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ErrorMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ErrorMappingVisitor)
    }
}

struct ErrorMappingVisitor;

impl<'de> Visitor<'de> for ErrorMappingVisitor {
    type Value = ErrorMapping;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of error keys to messages")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut mapping = ErrorMapping::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
            mapping.push(key, value);
        }
        Ok(mapping)
    }
}
