//! Recursive message trees

use crate::key_path::KeyPath;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One node of a locale's messages: a template string or a map of children
///
/// Deserializes from any self-describing format where strings are leaves
/// and maps are branches, so `{"nested": {"key": "Deep nested key"}}`
/// parses as a branch holding a branch holding a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTree {
    /// A template, possibly containing `{{name}}` placeholders
    Leaf(String),
    /// Named children
    Branch(BTreeMap<String, MessageTree>),
}

impl Default for MessageTree {
    fn default() -> Self {
        Self::Branch(BTreeMap::new())
    }
}

impl MessageTree {
    /// An empty branch.
    pub fn new() -> Self {
        Self::default()
    }

    /// A leaf holding `template`.
    pub fn leaf(template: impl Into<String>) -> Self {
        Self::Leaf(template.into())
    }

    /// Builder-style insertion of a child under `key`.
    ///
    /// Turns a leaf into a branch if called on one.
    pub fn with(mut self, key: impl Into<String>, child: impl Into<MessageTree>) -> Self {
        self.insert(key, child);
        self
    }

    /// Insert a child under `key`, replacing any previous child.
    pub fn insert(&mut self, key: impl Into<String>, child: impl Into<MessageTree>) {
        if let Self::Leaf(_) = self {
            *self = Self::new();
        }
        if let Self::Branch(children) = self {
            children.insert(key.into(), child.into());
        }
    }

    /// Walk `path` from this node. The root path returns `self`.
    pub fn get(&self, path: &KeyPath) -> Option<&MessageTree> {
        path.segments()
            .iter()
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// The template at `path`, only when that node is a leaf.
    pub fn get_leaf(&self, path: &KeyPath) -> Option<&str> {
        self.get(path).and_then(MessageTree::as_leaf)
    }

    /// Direct child named `key`.
    pub fn child(&self, key: &str) -> Option<&MessageTree> {
        match self {
            Self::Branch(children) => children.get(key),
            Self::Leaf(_) => None,
        }
    }

    /// Template text if this node is a leaf.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(template) => Some(template),
            Self::Branch(_) => None,
        }
    }

    /// Children if this node is a branch.
    pub fn as_branch(&self) -> Option<&BTreeMap<String, MessageTree>> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// An empty branch. Leaves are never empty, even `""`.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Branch(children) if children.is_empty())
    }

    /// Every leaf below this node with its path, depth first in key order.
    pub fn leaves(&self) -> Vec<(KeyPath, &str)> {
        let mut out = Vec::new();
        collect_leaves(self, &KeyPath::root(), &mut out);
        out
    }

    /// Number of leaves below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Branch(children) => children.values().map(MessageTree::leaf_count).sum(),
        }
    }
}

fn collect_leaves<'a>(node: &'a MessageTree, prefix: &KeyPath, out: &mut Vec<(KeyPath, &'a str)>) {
    match node {
        MessageTree::Leaf(template) => out.push((prefix.clone(), template)),
        MessageTree::Branch(children) => {
            for (key, child) in children {
                collect_leaves(child, &prefix.child(key.as_str()), out);
            }
        }
    }
}

impl From<&str> for MessageTree {
    fn from(template: &str) -> Self {
        Self::Leaf(template.to_string())
    }
}

impl From<String> for MessageTree {
    fn from(template: String) -> Self {
        Self::Leaf(template)
    }
}

impl From<BTreeMap<String, MessageTree>> for MessageTree {
    fn from(children: BTreeMap<String, MessageTree>) -> Self {
        Self::Branch(children)
    }
}
