//! Key-value tag blobs attached to item stacks and block entities.
//!
//! A [`DataTag`] is the mod's view of the host's persisted data attachment:
//! a flat string-keyed map of primitive values. Readers are typed and
//! tolerant — a missing key or a value of the wrong type reads as `None` —
//! while writers overwrite unconditionally. Nested structures (the grid
//! filter list, for instance) are stored as postcard bytes under a single
//! key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TagValue
// ---------------------------------------------------------------------------

/// A single value stored in a [`DataTag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TagValue {
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// UTF-8 string.
    Str(String),
    /// Raw bytes (embedded postcard payloads, icon data, …).
    Bytes(Vec<u8>),
}

// ---------------------------------------------------------------------------
// DataTag
// ---------------------------------------------------------------------------

/// A string-keyed blob of [`TagValue`]s.
///
/// The host serializes tags alongside the stack or block entity that owns
/// them; this type only provides the in-memory view plus a compact binary
/// round-trip ([`to_bytes`](DataTag::to_bytes) /
/// [`from_bytes`](DataTag::from_bytes)) for embedding one tag inside
/// another value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTag {
    entries: HashMap<String, TagValue>,
}

/// Errors from the binary tag round-trip.
#[derive(Debug, thiserror::Error)]
pub enum TagCodecError {
    /// Postcard serialization failed.
    #[error("failed to encode tag: {0}")]
    Encode(#[source] postcard::Error),
    /// Postcard deserialization failed.
    #[error("failed to decode tag: {0}")]
    Decode(#[source] postcard::Error),
}

impl DataTag {
    /// Creates an empty tag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the tag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the tag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if `key` is present, regardless of value type.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        self.entries.remove(key)
    }

    /// Reads an `Int` value. Missing key or wrong type reads as `None`.
    pub fn int(&self, key: &str) -> Option<i32> {
        match self.entries.get(key) {
            Some(TagValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    /// Writes an `Int` value, replacing any previous value under `key`.
    pub fn put_int(&mut self, key: &str, value: i32) {
        self.entries.insert(key.to_string(), TagValue::Int(value));
    }

    /// Reads a `Long` value. Missing key or wrong type reads as `None`.
    pub fn long(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(TagValue::Long(v)) => Some(*v),
            _ => None,
        }
    }

    /// Writes a `Long` value.
    pub fn put_long(&mut self, key: &str, value: i64) {
        self.entries.insert(key.to_string(), TagValue::Long(value));
    }

    /// Reads a `Str` value. Missing key or wrong type reads as `None`.
    pub fn str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(TagValue::Str(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Writes a `Str` value.
    pub fn put_str(&mut self, key: &str, value: impl Into<String>) {
        self.entries
            .insert(key.to_string(), TagValue::Str(value.into()));
    }

    /// Reads a `Bytes` value. Missing key or wrong type reads as `None`.
    pub fn bytes(&self, key: &str) -> Option<&[u8]> {
        match self.entries.get(key) {
            Some(TagValue::Bytes(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Writes a `Bytes` value.
    pub fn put_bytes(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), TagValue::Bytes(value));
    }

    /// Serializes the tag to compact postcard bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TagCodecError> {
        postcard::to_allocvec(self).map_err(TagCodecError::Encode)
    }

    /// Deserializes a tag from postcard bytes produced by
    /// [`to_bytes`](DataTag::to_bytes).
    pub fn from_bytes(data: &[u8]) -> Result<Self, TagCodecError> {
        postcard::from_bytes(data).map_err(TagCodecError::Decode)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let tag = DataTag::new();
        assert_eq!(tag.int("SortingType"), None);
        assert_eq!(tag.str("Name"), None);
        assert!(tag.is_empty());
    }

    #[test]
    fn test_wrong_type_reads_none() {
        let mut tag = DataTag::new();
        tag.put_str("Size", "large");
        assert_eq!(tag.int("Size"), None);
        assert_eq!(tag.str("Size"), Some("large"));
    }

    #[test]
    fn test_overwrite_replaces_value_and_type() {
        let mut tag = DataTag::new();
        tag.put_int("TabPage", 3);
        tag.put_long("TabPage", 9);
        assert_eq!(tag.int("TabPage"), None);
        assert_eq!(tag.long("TabPage"), Some(9));
        assert_eq!(tag.len(), 1);
    }

    #[test]
    fn test_remove_returns_previous_value() {
        let mut tag = DataTag::new();
        tag.put_int("X", 17);
        assert_eq!(tag.remove("X"), Some(TagValue::Int(17)));
        assert_eq!(tag.remove("X"), None);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let mut tag = DataTag::new();
        tag.put_bytes("Filters", vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(tag.bytes("Filters"), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
    }

    #[test]
    fn test_binary_roundtrip() {
        let mut tag = DataTag::new();
        tag.put_int("SortingDirection", 1);
        tag.put_long("World", -7);
        tag.put_str("Name", "base");
        tag.put_bytes("Filters", vec![1, 2, 3]);

        let bytes = tag.to_bytes().unwrap();
        let decoded = DataTag::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, tag);
    }

    #[test]
    fn test_corrupt_bytes_decode_fails() {
        let result = DataTag::from_bytes(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
        assert!(matches!(result, Err(TagCodecError::Decode(_))));
    }

    #[test]
    fn test_serde_json_roundtrip() {
        // Hosts that persist tags as JSON must get the same entries back.
        let mut tag = DataTag::new();
        tag.put_int("ViewType", 2);
        tag.put_str("Name", "mining");

        let json = serde_json::to_string(&tag).unwrap();
        let decoded: DataTag = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, tag);
    }
}
