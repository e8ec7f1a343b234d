//! Reference shape of a dictionary
//!
//! The default locale's tree defines which key paths exist and which
//! placeholders each message expects. Other locales may omit anything but
//! must not invent keys, change a message into a group (or back), or use
//! placeholders the reference message does not declare.

use crate::error::{I18nError, I18nResult};
use crate::key_path::KeyPath;
use crate::template::placeholders;
use crate::tree::MessageTree;
use crate::variables::Variables;
use crate::Dictionary;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Leaf paths of the reference locale and their placeholder sets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSchema {
    messages: BTreeMap<KeyPath, BTreeSet<String>>,
    groups: BTreeSet<KeyPath>,
}

/// One way a locale departs from the reference shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaViolation {
    /// The key does not exist in the reference locale
    UnknownKey {
        /// Locale the key was found in
        locale: String,
        /// Path absent from the reference locale
        key: KeyPath,
    },
    /// A message where the reference has a group, or the reverse
    ShapeMismatch {
        /// Locale the mismatch was found in
        locale: String,
        /// Path whose kind differs from the reference
        key: KeyPath,
        /// Whether the reference has a message (rather than a group) here
        expected_leaf: bool,
    },
    /// The translation uses a placeholder the reference does not declare
    UnknownPlaceholder {
        /// Locale the placeholder was found in
        locale: String,
        /// Message using the placeholder
        key: KeyPath,
        /// Placeholder name without braces
        placeholder: String,
    },
}

impl SchemaViolation {
    /// Locale the violation was found in.
    pub fn locale(&self) -> &str {
        match self {
            Self::UnknownKey { locale, .. }
            | Self::ShapeMismatch { locale, .. }
            | Self::UnknownPlaceholder { locale, .. } => locale,
        }
    }

    /// Offending key path.
    pub fn key(&self) -> &KeyPath {
        match self {
            Self::UnknownKey { key, .. }
            | Self::ShapeMismatch { key, .. }
            | Self::UnknownPlaceholder { key, .. } => key,
        }
    }
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey { locale, key } => {
                write!(f, "{locale}: extra message key '{key}'")
            }
            Self::ShapeMismatch {
                locale,
                key,
                expected_leaf: true,
            } => write!(f, "{locale}: '{key}' should be a message, found a group"),
            Self::ShapeMismatch {
                locale,
                key,
                expected_leaf: false,
            } => write!(f, "{locale}: '{key}' should be a group, found a message"),
            Self::UnknownPlaceholder {
                locale,
                key,
                placeholder,
            } => write!(f, "{locale}: '{key}' uses undeclared placeholder '{{{{{placeholder}}}}}'"),
        }
    }
}

impl MessageSchema {
    /// Derive the schema from the reference tree.
    pub fn from_tree(reference: &MessageTree) -> Self {
        let mut schema = Self::default();
        schema.collect(reference, &KeyPath::root());
        schema
    }

    /// Derive the schema from `default_locale` of `dictionary`.
    pub fn for_dictionary(dictionary: &Dictionary, default_locale: &str) -> I18nResult<Self> {
        dictionary
            .locale(default_locale)
            .map(Self::from_tree)
            .ok_or_else(|| I18nError::UnknownLocale {
                locale: default_locale.to_string(),
            })
    }

    fn collect(&mut self, node: &MessageTree, path: &KeyPath) {
        match node {
            MessageTree::Leaf(template) => {
                let names = placeholders(template).into_iter().map(str::to_string).collect();
                self.messages.insert(path.clone(), names);
            }
            MessageTree::Branch(children) => {
                self.groups.insert(path.clone());
                for (key, child) in children {
                    self.collect(child, &path.child(key.as_str()));
                }
            }
        }
    }

    /// Placeholders declared by the message at `path`.
    pub fn entry(&self, path: &KeyPath) -> Option<&BTreeSet<String>> {
        self.messages.get(path)
    }

    /// Whether `path` names a message of the reference shape.
    pub fn contains(&self, path: &KeyPath) -> bool {
        self.messages.contains_key(path)
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the reference locale has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &KeyPath> {
        self.messages.keys()
    }

    /// Compare one locale's tree against the reference shape.
    ///
    /// Missing keys are allowed and never reported.
    pub fn check_locale(&self, locale: &str, tree: &MessageTree) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();
        self.check_node(locale, tree, &KeyPath::root(), &mut violations);
        violations
    }

    fn check_node(
        &self,
        locale: &str,
        node: &MessageTree,
        path: &KeyPath,
        violations: &mut Vec<SchemaViolation>,
    ) {
        let is_group = self.groups.contains(path);
        let declared = self.messages.get(path);

        match node {
            MessageTree::Leaf(template) => match declared {
                Some(declared) => {
                    for name in placeholders(template) {
                        if !declared.contains(name) {
                            violations.push(SchemaViolation::UnknownPlaceholder {
                                locale: locale.to_string(),
                                key: path.clone(),
                                placeholder: name.to_string(),
                            });
                        }
                    }
                }
                None if is_group => violations.push(SchemaViolation::ShapeMismatch {
                    locale: locale.to_string(),
                    key: path.clone(),
                    expected_leaf: false,
                }),
                None => violations.push(SchemaViolation::UnknownKey {
                    locale: locale.to_string(),
                    key: path.clone(),
                }),
            },
            MessageTree::Branch(children) => {
                if declared.is_some() {
                    violations.push(SchemaViolation::ShapeMismatch {
                        locale: locale.to_string(),
                        key: path.clone(),
                        expected_leaf: true,
                    });
                } else if !is_group {
                    violations.push(SchemaViolation::UnknownKey {
                        locale: locale.to_string(),
                        key: path.clone(),
                    });
                } else {
                    for (key, child) in children {
                        self.check_node(locale, child, &path.child(key.as_str()), violations);
                    }
                }
            }
        }
    }

    /// Ensure every placeholder declared for `path` has a value.
    ///
    /// Extra variables are accepted.
    pub fn check_variables(&self, path: &KeyPath, variables: Option<&Variables>) -> I18nResult<()> {
        let declared = self.entry(path).ok_or_else(|| I18nError::UnknownKey {
            key: path.to_string(),
        })?;

        let missing: Vec<String> = declared
            .iter()
            .filter(|name| !variables.is_some_and(|vars| vars.contains(name)))
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(I18nError::MissingVariables {
                key: path.to_string(),
                missing,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars;

    fn reference() -> MessageTree {
        MessageTree::new()
            .with("hello", "Hello")
            .with("helloName", "Hello, {{name}}")
            .with(
                "nested",
                MessageTree::new().with("keyWithName", "Deep nested key with name {{name}}"),
            )
    }

    #[test]
    fn test_schema_collects_placeholders() {
        let schema = MessageSchema::from_tree(&reference());
        assert_eq!(schema.len(), 3);
        let declared = schema.entry(&KeyPath::from("nested.keyWithName")).unwrap();
        assert!(declared.contains("name"));
        assert!(schema.entry(&KeyPath::from("hello")).unwrap().is_empty());
        assert!(!schema.contains(&KeyPath::from("nested")));
    }

    #[test]
    fn test_partial_locale_has_no_violations() {
        let schema = MessageSchema::from_tree(&reference());
        let fr = MessageTree::new().with("hello", "Bonjour");
        assert!(schema.check_locale("fr", &fr).is_empty());
        assert!(schema.check_locale("fr", &MessageTree::new()).is_empty());
    }

    #[test]
    fn test_extra_key_is_reported() {
        let schema = MessageSchema::from_tree(&reference());
        let fr = MessageTree::new()
            .with("bonus", "Bonus")
            .with("nested", MessageTree::new().with("deeper", MessageTree::new().with("x", "y")));
        let violations = schema.check_locale("fr", &fr);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().all(|v| matches!(v, SchemaViolation::UnknownKey { .. })));
        assert_eq!(violations[0].key(), &KeyPath::from("bonus"));
        assert_eq!(violations[1].key(), &KeyPath::from("nested.deeper"));
    }

    #[test]
    fn test_shape_mismatch_both_ways() {
        let schema = MessageSchema::from_tree(&reference());
        let fr = MessageTree::new()
            .with("hello", MessageTree::new().with("x", "y"))
            .with("nested", "flat");
        let violations = schema.check_locale("fr", &fr);
        assert_eq!(
            violations,
            vec![
                SchemaViolation::ShapeMismatch {
                    locale: "fr".into(),
                    key: KeyPath::from("hello"),
                    expected_leaf: true,
                },
                SchemaViolation::ShapeMismatch {
                    locale: "fr".into(),
                    key: KeyPath::from("nested"),
                    expected_leaf: false,
                },
            ]
        );
    }

    #[test]
    fn test_undeclared_placeholder_is_reported() {
        let schema = MessageSchema::from_tree(&reference());
        let fr = MessageTree::new().with("helloName", "Bonjour, {{nom}}");
        let violations = schema.check_locale("fr", &fr);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "fr: 'helloName' uses undeclared placeholder '{{nom}}'"
        );
    }

    #[test]
    fn test_translation_may_drop_placeholders() {
        let schema = MessageSchema::from_tree(&reference());
        let fr = MessageTree::new().with("helloName", "Bonjour");
        assert!(schema.check_locale("fr", &fr).is_empty());
    }

    #[test]
    fn test_check_variables() {
        let schema = MessageSchema::from_tree(&reference());
        let path = KeyPath::from("helloName");

        assert!(schema.check_variables(&path, Some(&vars!["name" => "John"])).is_ok());
        assert!(schema
            .check_variables(&path, Some(&vars!["name" => "John", "age" => 30]))
            .is_ok());
        assert!(matches!(
            schema.check_variables(&path, None),
            Err(I18nError::MissingVariables { missing, .. }) if missing == vec!["name".to_string()]
        ));
        assert!(matches!(
            schema.check_variables(&KeyPath::from("nope"), None),
            Err(I18nError::UnknownKey { .. })
        ));
    }
}
