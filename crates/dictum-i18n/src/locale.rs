//! Locale identifier checks

use crate::error::{I18nError, I18nResult};
use unic_langid::LanguageIdentifier;

/// Parse a BCP 47 tag such as `en`, `fr-CA` or `zh-Hant-TW`.
///
/// Dictionaries keep the tag exactly as written; this only rejects tags
/// that are not language identifiers at all.
pub fn parse_locale(tag: &str) -> I18nResult<LanguageIdentifier> {
    tag.parse()
        .map_err(|_| I18nError::InvalidLanguageId(tag.to_string()))
}

/// Whether `tag` parses as a language identifier.
pub fn is_valid_locale(tag: &str) -> bool {
    !tag.is_empty() && parse_locale(tag).is_ok()
}
