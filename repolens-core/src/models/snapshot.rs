//! Raw repository snapshot
//!
//! The snapshot mirrors what a repository host returns: a free-form metadata
//! object, README text, a flat file listing, release and contributor lists,
//! a language byte histogram and the text of a handful of well-known config
//! files. Nothing here is trusted; every field tolerates absence and wrong
//! types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Complete raw input describing one repository
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSnapshot {
    #[serde(deserialize_with = "lenient::string")]
    pub owner: String,
    #[serde(deserialize_with = "lenient::string")]
    pub repo: String,
    /// Repository metadata object as returned by the host API
    pub meta: Value,
    #[serde(deserialize_with = "lenient::string")]
    pub readme: String,
    #[serde(alias = "fileTree", deserialize_with = "lenient::tree_entries")]
    pub file_tree: Vec<TreeEntry>,
    #[serde(deserialize_with = "lenient::list")]
    pub releases: Vec<Value>,
    #[serde(deserialize_with = "lenient::list")]
    pub contributors: Vec<Value>,
    /// Language name -> byte count, in the order the host reported them
    #[serde(deserialize_with = "lenient::object")]
    pub languages: Map<String, Value>,
    /// Well-known config file name -> file text
    #[serde(alias = "configContents", deserialize_with = "lenient::string_map")]
    pub config_contents: BTreeMap<String, String>,
}

impl RawSnapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot JSON file
    pub fn from_path(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json_str(&content)?;
        tracing::debug!(
            "loaded snapshot {}/{} ({} tree entries) from {}",
            snapshot.owner,
            snapshot.repo,
            snapshot.file_tree.len(),
            path.display()
        );
        Ok(snapshot)
    }

    /// Typed view over the metadata object
    pub fn meta(&self) -> MetaReader<'_> {
        MetaReader::new(&self.meta)
    }

    /// Text of a config file, `None` when absent or blank
    pub fn config(&self, name: &str) -> Option<&str> {
        self.config_contents
            .get(name)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// All tree paths in listing order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.file_tree.iter().map(|entry| entry.path.as_str())
    }

    /// All tree paths lower-cased
    pub fn lowercase_paths(&self) -> Vec<String> {
        self.paths().map(str::to_lowercase).collect()
    }
}

/// Kind of a file-tree entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Blob,
    Tree,
}

impl EntryKind {
    /// Map a host-reported type string (`blob`, `file`, `tree`, `dir`)
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "tree" | "dir" => EntryKind::Tree,
            _ => EntryKind::Blob,
        }
    }
}

/// One file-tree entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn blob(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::Blob }
    }

    pub fn tree(path: impl Into<String>) -> Self {
        Self { path: path.into(), kind: EntryKind::Tree }
    }
}

/// Typed accessor over a free-form metadata object
///
/// Reads coalesce to defaults: missing or blank strings become `None`,
/// counts become 0 unless numeric (numeric strings are parsed), flags
/// become `false` and string lists drop non-string items.
#[derive(Debug, Clone, Copy)]
pub struct MetaReader<'a> {
    value: &'a Value,
}

impl<'a> MetaReader<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key)
    }

    /// Non-blank string field
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.field(key)
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// String field or `fallback`
    pub fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or(fallback).to_string()
    }

    /// Non-blank string inside a nested object (`license.name`)
    pub fn nested_text(&self, outer: &str, inner: &str) -> Option<&'a str> {
        self.field(outer)
            .and_then(|nested| nested.get(inner))
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Non-negative count; anything non-numeric reads as 0
    pub fn count(&self, key: &str) -> u64 {
        match self.field(key) {
            Some(value) => coerce_count(value),
            None => 0,
        }
    }

    /// Boolean flag; anything but `true` reads as false
    pub fn flag(&self, key: &str) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// List of strings, skipping non-string items
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.field(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Coerce a JSON value into a count (numbers and numeric strings only)
pub fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().filter(|n| n.is_finite() && *n > 0.0).map(|n| n as u64))
            .unwrap_or(0),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| {
                    text.parse::<f64>()
                        .ok()
                        .filter(|n| n.is_finite() && *n > 0.0)
                        .map(|n| n as u64)
                })
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Deserializers that coerce wrongly-typed fields to empty values
mod lenient {
    use super::*;

    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            _ => String::new(),
        })
    }

    pub fn list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Value>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            _ => Vec::new(),
        })
    }

    pub fn object<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Map<String, Value>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Object(map) => map,
            _ => Map::new(),
        })
    }

    pub fn string_map<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<String, String>, D::Error> {
        let map = object(deserializer)?;
        Ok(map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => None,
            })
            .collect())
    }

    /// Entries without a string `path` are dropped
    pub fn tree_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<TreeEntry>, D::Error> {
        Ok(list(deserializer)?
            .iter()
            .filter_map(|node| {
                let path = node.get("path").and_then(Value::as_str)?;
                let kind = node
                    .get("type")
                    .and_then(Value::as_str)
                    .map(EntryKind::from_type)
                    .unwrap_or_default();
                Some(TreeEntry { path: path.to_string(), kind })
            })
            .collect())
    }
}
