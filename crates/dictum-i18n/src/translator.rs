//! Message resolution with default-locale fallback
//!
//! A [`Translator`] binds a shared [`Dictionary`] to an active locale and a
//! default locale. Resolution walks the key path in the active locale and,
//! if any segment is missing, replays the same path against the default
//! locale. Fallback never cascades further and is triggered only by
//! absence: an empty string in the active locale is returned as-is.

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::key_path::{KeyPath, Selector};
use crate::template::{interpolate, missing_variables};
use crate::tree::MessageTree;
use crate::variables::Variables;
use std::sync::Arc;
use tracing::{debug, trace};

/// Inputs for building a [`Translator`]
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Shared, immutable messages for every locale
    pub dictionary: Arc<Dictionary>,
    /// Locale to translate into
    pub locale: String,
    /// Reference locale used when the active one lacks a key path
    pub default_locale: String,
}

impl TranslatorConfig {
    /// Bundle the three construction inputs.
    pub fn new(
        dictionary: impl Into<Arc<Dictionary>>,
        locale: impl Into<String>,
        default_locale: impl Into<String>,
    ) -> Self {
        Self {
            dictionary: dictionary.into(),
            locale: locale.into(),
            default_locale: default_locale.into(),
        }
    }
}

/// Where a resolved template came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionSource {
    /// Found in the active locale
    Active,
    /// Missing in the active locale, found in the default locale
    Fallback,
    /// Missing everywhere; the template is empty
    Missing,
}

/// Outcome of looking up a key path before substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Candidate template, empty when [`ResolutionSource::Missing`]
    pub template: &'a str,
    /// Which locale supplied the template
    pub source: ResolutionSource,
}

impl Resolution<'_> {
    /// Whether a template was found in some locale.
    pub fn is_found(&self) -> bool {
        self.source != ResolutionSource::Missing
    }
}

/// Stateless translator over a shared dictionary
///
/// Cloning is cheap and every method takes `&self`, so one instance can be
/// used from many threads at once.
///
/// # Example
///
/// ```rust
/// use dictum_i18n::{vars, Dictionary, Translator, TranslatorConfig};
///
/// let dictionary = Dictionary::from_json_str(
///     r#"{"en": {"helloName": "Hello, {{name}}", "goodbye": "Goodbye"},
///         "fr": {"helloName": "Bonjour, {{name}}"}}"#,
/// )
/// .unwrap();
/// let translate = Translator::new(TranslatorConfig::new(dictionary, "fr", "en"));
///
/// assert_eq!(translate.translate("helloName", Some(&vars!["name" => "John"])), "Bonjour, John");
/// assert_eq!(translate.translate_plain("goodbye"), "Goodbye");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Arc<Dictionary>,
    locale: String,
    default_locale: String,
}

/// Build a translator from its configuration.
pub fn create_translator(config: TranslatorConfig) -> Translator {
    Translator::new(config)
}

impl Translator {
    /// Create a translator. Never fails and performs no I/O.
    ///
    /// A locale missing from the dictionary behaves like an empty tree, so
    /// every lookup falls back to the default locale.
    pub fn new(config: TranslatorConfig) -> Self {
        let TranslatorConfig {
            dictionary,
            locale,
            default_locale,
        } = config;

        if !dictionary.contains_locale(&locale) {
            debug!(
                "Locale {} not in dictionary, every message will use {}",
                locale, default_locale
            );
        }
        if !dictionary.contains_locale(&default_locale) {
            debug!("Default locale {} not in dictionary", default_locale);
        }

        Self {
            dictionary,
            locale,
            default_locale,
        }
    }

    /// A translator for another locale sharing the same dictionary.
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self::new(TranslatorConfig {
            dictionary: Arc::clone(&self.dictionary),
            locale: locale.into(),
            default_locale: self.default_locale.clone(),
        })
    }

    /// Active locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Fallback locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Shared dictionary.
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    fn lookup<'a>(&'a self, locale: &str, path: &KeyPath) -> Option<&'a str> {
        self.dictionary
            .locale(locale)
            .and_then(|tree: &MessageTree| tree.get_leaf(path))
    }

    /// Locate the template for `selector` without substituting anything.
    pub fn resolve(&self, selector: impl Selector) -> Resolution<'_> {
        self.resolve_path(&selector.key_path())
    }

    fn resolve_path(&self, path: &KeyPath) -> Resolution<'_> {
        if let Some(template) = self.lookup(&self.locale, path) {
            trace!("Resolved '{}' in locale {}", path, self.locale);
            return Resolution {
                template,
                source: ResolutionSource::Active,
            };
        }

        if self.locale != self.default_locale {
            if let Some(template) = self.lookup(&self.default_locale, path) {
                debug!(
                    "Message '{}' not found in locale {}, falling back to default locale {}",
                    path, self.locale, self.default_locale
                );
                return Resolution {
                    template,
                    source: ResolutionSource::Fallback,
                };
            }
        }

        debug!(
            "Message '{}' not found in locale {} or default locale {}",
            path, self.locale, self.default_locale
        );
        Resolution {
            template: "",
            source: ResolutionSource::Missing,
        }
    }

    /// Resolve `selector` and substitute `variables`.
    ///
    /// Never fails: unknown paths give `""`, unbound placeholders stay in
    /// the output verbatim, extra variables are ignored.
    pub fn translate(&self, selector: impl Selector, variables: Option<&Variables>) -> String {
        let resolution = self.resolve(selector);
        interpolate(resolution.template, variables).into_owned()
    }

    /// [`Translator::translate`] without variables.
    pub fn translate_plain(&self, selector: impl Selector) -> String {
        self.translate(selector, None)
    }

    /// Strict translation for callers that want the contract checked.
    ///
    /// Fails with [`I18nError::UnknownKey`] when the path is absent from
    /// both locales and with [`I18nError::MissingVariables`] when the
    /// resolved template has unbound placeholders.
    pub fn try_translate(
        &self,
        selector: impl Selector,
        variables: Option<&Variables>,
    ) -> I18nResult<String> {
        let path = selector.key_path();
        let resolution = self.resolve_path(&path);

        if !resolution.is_found() {
            return Err(I18nError::UnknownKey {
                key: path.to_string(),
            });
        }

        let missing = missing_variables(resolution.template, variables);
        if !missing.is_empty() {
            return Err(I18nError::MissingVariables {
                key: path.to_string(),
                missing,
            });
        }

        Ok(interpolate(resolution.template, variables).into_owned())
    }
}
