//! Hierarchical configuration documents.
//!
//! A [`Document`] is a tree of mappings and scalar leaves rooted at a
//! mapping. It is read from JSON or YAML text and supports path-addressed
//! reads ([`Document::node`]) and writes ([`Document::set`]).

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::path::KeyPath;
use crate::value::Value;

/// Text format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// JSON text.
    Json,
    /// YAML text.
    Yaml,
}

impl Format {
    /// Picks a format from a file extension; anything other than
    /// `.yaml`/`.yml` is treated as JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use conflib::document::Format;
    /// use std::path::Path;
    ///
    /// assert_eq!(Format::from_path(Path::new("conf/coderrect.json")), Format::Json);
    /// assert_eq!(Format::from_path(Path::new("local.YML")), Format::Yaml);
    /// assert_eq!(Format::from_path(Path::new(".coderrect")), Format::Json);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// An in-memory configuration tree.
///
/// # Examples
///
/// ```
/// use conflib::{Document, KeyPath, Value};
///
/// let mut doc = Document::new();
/// doc.set(&KeyPath::parse("a.b").unwrap(), Value::Integer(1));
/// doc.set(&KeyPath::parse("a.c").unwrap(), Value::Integer(2));
///
/// assert_eq!(doc.value(&KeyPath::parse("a.b").unwrap()), Some(Value::Integer(1)));
/// assert_eq!(doc.value(&KeyPath::parse("a.c").unwrap()), Some(Value::Integer(2)));
/// assert!(doc.node(&KeyPath::parse("a.d").unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Map<String, JsonValue>,
}

impl Document {
    /// Creates an empty document (a root mapping with no entries).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a document from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns the parser's message if the text is malformed or its root is
    /// not a mapping.
    pub fn parse(text: &str, format: Format) -> std::result::Result<Self, String> {
        match format {
            Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        }
    }

    /// Returns the node at `path`, or `None` if any segment is absent or an
    /// intermediate node is not a mapping.
    #[must_use]
    pub fn node(&self, path: &KeyPath) -> Option<&JsonValue> {
        let (first, rest) = path.segments().split_first()?;
        let mut node = self.root.get(first)?;
        for segment in rest {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Returns the scalar at `path`, or `None` if the path is absent or
    /// names a mapping, array or null.
    #[must_use]
    pub fn value(&self, path: &KeyPath) -> Option<Value> {
        self.node(path).and_then(Value::from_node)
    }

    /// Returns true if `path` names any node.
    #[must_use]
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.node(path).is_some()
    }

    /// Sets the leaf at `path`, creating intermediate mappings as needed.
    ///
    /// Existing intermediate mappings are reused, so siblings written
    /// earlier survive. An intermediate node holding a scalar is replaced by
    /// an empty mapping.
    pub fn set(&mut self, path: &KeyPath, value: Value) {
        insert_at(&mut self.root, path.parents(), path.leaf(), value.into());
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns true if the root mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The root mapping.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.root
    }

    /// Renders the document as compact JSON.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        JsonValue::Object(self.root.clone()).to_string()
    }

    /// Renders the document as indented JSON.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        // A map of JSON values always serializes.
        serde_json::to_string_pretty(&self.root).unwrap_or_default()
    }
}

/// Inserts `value` under `leaf` in the mapping reached through `parents`,
/// creating each missing level as an empty mapping.
fn insert_at(map: &mut Map<String, JsonValue>, parents: &[String], leaf: &str, value: JsonValue) {
    let Some((head, rest)) = parents.split_first() else {
        map.insert(leaf.to_string(), value);
        return;
    };

    let slot = map
        .entry(head.clone())
        .or_insert_with(|| JsonValue::Object(Map::new()));
    if let JsonValue::Object(child) = slot {
        insert_at(child, rest, leaf, value);
    } else {
        log::debug!("replacing scalar at '{head}' with a mapping");
        let mut child = Map::new();
        insert_at(&mut child, rest, leaf, value);
        *slot = JsonValue::Object(child);
    }
}
