//! Dotted key paths.
//!
//! A key path addresses a node in a [`Document`](crate::Document) by
//! descending through mappings, one `.`-separated segment at a time. Keys
//! may be written bare (`racedetector.threshold`) or carry the document root
//! marker (`$.racedetector.threshold`); both forms parse to the same path.

use std::fmt;

/// Prefix marking a key as anchored at the document root.
pub const ROOT_MARKER: &str = "$.";

/// A parsed, normalized dotted key path.
///
/// Always holds at least one segment, and no segment is empty.
///
/// # Examples
///
/// ```
/// use conflib::KeyPath;
///
/// let bare = KeyPath::parse("a.b.c").unwrap();
/// let rooted = KeyPath::parse("$.a.b.c").unwrap();
/// assert_eq!(bare, rooted);
/// assert_eq!(bare.segments(), ["a", "b", "c"]);
/// assert_eq!(rooted.to_string(), "a.b.c");
///
/// assert!(KeyPath::parse("").is_none());
/// assert!(KeyPath::parse("a..b").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parses a key, stripping the root marker if present.
    ///
    /// Returns `None` when the key is malformed: empty, the bare root marker,
    /// or containing an empty segment (`a..b`, `.a`, `a.`).
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let body = key.strip_prefix(ROOT_MARKER).unwrap_or(key);
        if body.is_empty() {
            return None;
        }

        let segments: Vec<String> = body.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return None;
        }

        Some(Self { segments })
    }

    /// The path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; a key path holds at least one segment.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment naming the leaf.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// The segments naming intermediate mappings (all but the leaf).
    #[must_use]
    pub fn parents(&self) -> &[String] {
        self.segments
            .split_last()
            .map_or(&[][..], |(_, parents)| parents)
    }

    /// Renders the path with the root marker, e.g. `$.a.b`.
    #[must_use]
    pub fn to_rooted_string(&self) -> String {
        format!("{ROOT_MARKER}{self}")
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}
