//! Ordered label/value record and its JSON rendering.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

/// Indentation for the emitted JSON object.
const JSON_INDENT: &[u8] = b"    ";

/// The label/value pairs extracted from the status table.
///
/// Order is row order in the source document, and duplicate labels are kept
/// as-is: the record is a transcription of table rows, not a dictionary.
/// That is also why serialization drives `serialize_map` directly instead of
/// going through `serde_json::Map`, which would merge duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusRecord {
    pairs: Vec<(String, String)>,
}

impl StatusRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Create an empty record sized for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Append a pair, preserving insertion order.
    pub fn push(&mut self, label: &str, value: &str) {
        self.pairs.push((label.to_string(), value.to_string()));
    }

    /// Number of pairs in the record.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the record holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a pretty-printed JSON object with four-space indentation.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits UTF-8"))
    }
}

impl Serialize for StatusRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (label, value) in &self.pairs {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}
