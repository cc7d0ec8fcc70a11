// Parse results

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Tag fields read from a file, keyed by field name.
///
/// Numeric fields are kept as their decimal string form. Iteration is in key
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a named property.
    /// If the property does not exist, then an error is returned.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.field(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    /// Like [`get`](Self::get), but returns `None` for a missing property.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.fields.iter())
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.fields
    }

    /// Store a field, replacing any earlier value under the same name.
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }
}

/// Iterator over `(name, value)` pairs of a [`Metadata`].
pub struct Iter<'a>(btree_map::Iter<'a, String, String>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl From<Metadata> for BTreeMap<String, String> {
    fn from(metadata: Metadata) -> Self {
        metadata.fields
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_field() {
        let metadata = Metadata::new();
        match metadata.get("Title") {
            Err(Error::MissingField(name)) => assert_eq!(name, "Title"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(metadata.field("Title"), None);
    }

    #[test]
    fn test_later_insert_overwrites() {
        let mut metadata = Metadata::new();
        metadata.insert("SampleRate", "8000");
        metadata.insert("SampleRate", "44100");
        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata.get("SampleRate").unwrap(), "44100");
    }

    #[test]
    fn test_iterates_in_key_order() {
        let mut metadata = Metadata::new();
        metadata.insert("b", "2");
        metadata.insert("a", "1");
        let keys: Vec<_> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(metadata.to_string(), "a: 1\nb: 2\n");
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut metadata = Metadata::new();
        metadata.insert("NumChannels", "2");
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"NumChannels":"2"}"#);
    }
}
