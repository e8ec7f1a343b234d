//! Key paths and the selector abstraction
//!
//! A [`KeyPath`] is the ordered list of keys leading from the root of a
//! message tree to one node. Anything implementing [`Selector`] can be
//! handed to the translator; the selector only names a path and never
//! inspects the tree, so the same selector can be replayed against every
//! locale.

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Separator used by the dotted notation (`nested.keyWithName`).
pub const KEY_SEPARATOR: char = '.';

/// Ordered sequence of keys into a message tree
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// The empty path, which addresses the root of a tree.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from individual segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse dotted notation, rejecting empty segments such as `a..b`.
    pub fn parse(dotted: &str) -> I18nResult<Self> {
        if dotted.is_empty() {
            return Err(I18nError::InvalidKeyPath(dotted.to_string()));
        }

        let segments: Vec<String> = dotted.split(KEY_SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(I18nError::InvalidKeyPath(dotted.to_string()));
        }

        Ok(Self { segments })
    }

    /// Path segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// A new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Last segment, if any.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether `self` is `other` or lies beneath it.
    pub fn starts_with(&self, other: &KeyPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                write!(f, "{KEY_SEPARATOR}")?;
            }
            f.write_str(segment)?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for KeyPath {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Lenient conversion: splits on the separator and keeps empty segments,
/// which simply never match a tree key.
impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self::from_segments(dotted.split(KEY_SEPARATOR))
    }
}

impl From<String> for KeyPath {
    fn from(dotted: String) -> Self {
        Self::from(dotted.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_segments(iter)
    }
}

impl Serialize for KeyPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for KeyPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dotted = String::deserialize(deserializer)?;
        Self::parse(&dotted).map_err(serde::de::Error::custom)
    }
}

/// Something that names a message inside the reference shape.
pub trait Selector {
    /// The key path this selector points at.
    fn key_path(&self) -> KeyPath;
}

impl Selector for KeyPath {
    fn key_path(&self) -> KeyPath {
        self.clone()
    }
}

impl Selector for &KeyPath {
    fn key_path(&self) -> KeyPath {
        (*self).clone()
    }
}

impl Selector for &str {
    fn key_path(&self) -> KeyPath {
        KeyPath::from(*self)
    }
}

impl Selector for String {
    fn key_path(&self) -> KeyPath {
        KeyPath::from(self.as_str())
    }
}

impl Selector for &String {
    fn key_path(&self) -> KeyPath {
        KeyPath::from(self.as_str())
    }
}

impl Selector for &[&str] {
    fn key_path(&self) -> KeyPath {
        KeyPath::from_segments(self.iter().copied())
    }
}

impl<const N: usize> Selector for [&str; N] {
    fn key_path(&self) -> KeyPath {
        KeyPath::from_segments(self.iter().copied())
    }
}
