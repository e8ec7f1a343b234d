//! Locale -> message tree mapping

use crate::error::{I18nError, I18nResult};
use crate::schema::MessageSchema;
use crate::tree::MessageTree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Every locale's messages, keyed by locale identifier
///
/// One locale (the default) defines the reference shape; the others are
/// partial copies of it. A dictionary is built once and shared behind an
/// `Arc` by all translators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    locales: BTreeMap<String, MessageTree>,
}

impl Dictionary {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a locale tree.
    pub fn with_locale(mut self, locale: impl Into<String>, tree: MessageTree) -> Self {
        self.insert(locale, tree);
        self
    }

    /// Insert or replace the tree for `locale`.
    pub fn insert(&mut self, locale: impl Into<String>, tree: MessageTree) {
        let locale = locale.into();
        if self.locales.insert(locale.clone(), tree).is_some() {
            debug!("Replaced messages for locale: {}", locale);
        }
    }

    /// Tree for `locale`.
    pub fn locale(&self, locale: &str) -> Option<&MessageTree> {
        self.locales.get(locale)
    }

    /// Whether `locale` is present.
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Locale identifiers in sorted order.
    pub fn locales(&self) -> Vec<&str> {
        self.locales.keys().map(String::as_str).collect()
    }

    /// Iterate over `(locale, tree)` pairs in locale order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageTree)> {
        self.locales.iter().map(|(locale, tree)| (locale.as_str(), tree))
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Whether no locale is present.
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Check every locale against the shape of `default_locale`.
    ///
    /// Returns the reference schema on success so callers can reuse it for
    /// per-call variable checks.
    pub fn validate(&self, default_locale: &str) -> I18nResult<MessageSchema> {
        let reference = self.locale(default_locale).ok_or_else(|| I18nError::UnknownLocale {
            locale: default_locale.to_string(),
        })?;

        let schema = MessageSchema::from_tree(reference);
        let violations: Vec<_> = self
            .iter()
            .filter(|(locale, _)| *locale != default_locale)
            .flat_map(|(locale, tree)| schema.check_locale(locale, tree))
            .collect();

        if violations.is_empty() {
            debug!(
                "Dictionary matches reference locale {} ({} messages, {} locales)",
                default_locale,
                schema.len(),
                self.len()
            );
            Ok(schema)
        } else {
            for violation in &violations {
                warn!("{}", violation);
            }
            Err(I18nError::SchemaViolations { violations })
        }
    }

    /// Parse `{ "<locale>": { ... } }` from JSON.
    pub fn from_json_str(source: &str) -> I18nResult<Self> {
        serde_json::from_str(source).map_err(|e| parse_error("<json>", e))
    }

    /// Parse `{ "<locale>": { ... } }` from YAML.
    pub fn from_yaml_str(source: &str) -> I18nResult<Self> {
        serde_yaml::from_str(source).map_err(|e| parse_error("<yaml>", e))
    }

    /// Parse `[<locale>]` tables from TOML.
    pub fn from_toml_str(source: &str) -> I18nResult<Self> {
        toml::from_str(source).map_err(|e| parse_error("<toml>", e))
    }
}

pub(crate) fn parse_error(path: &str, err: impl std::fmt::Display) -> I18nError {
    I18nError::ParseError {
        path: path.to_string(),
        message: err.to_string(),
    }
}

impl FromIterator<(String, MessageTree)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, MessageTree)>>(iter: I) -> Self {
        Self {
            locales: iter.into_iter().collect(),
        }
    }
}
