//! Translation coverage against the reference locale

use crate::dictionary::Dictionary;
use crate::error::{I18nError, I18nResult};
use crate::key_path::KeyPath;
use serde::Serialize;
use std::fmt;

/// Coverage of every locale relative to the default locale's messages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    /// Reference locale
    pub default_locale: String,
    /// Number of messages in the reference locale
    pub total_messages: usize,
    /// Per-locale coverage, sorted by locale
    pub locales: Vec<LocaleCoverage>,
}

/// Coverage of one locale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocaleCoverage {
    /// Locale identifier
    pub locale: String,
    /// Reference messages present in this locale
    pub present: usize,
    /// Reference messages served by fallback, sorted
    pub missing: Vec<KeyPath>,
    /// `present / total * 100`, or 100 for an empty reference
    pub coverage_percent: f64,
}

impl LocaleCoverage {
    /// Whether nothing falls back.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

impl CoverageReport {
    /// Measure every locale of `dictionary` against `default_locale`.
    pub fn build(dictionary: &Dictionary, default_locale: &str) -> I18nResult<Self> {
        let reference = dictionary
            .locale(default_locale)
            .ok_or_else(|| I18nError::UnknownLocale {
                locale: default_locale.to_string(),
            })?;

        let reference_paths: Vec<KeyPath> =
            reference.leaves().into_iter().map(|(path, _)| path).collect();
        let total = reference_paths.len();

        let locales = dictionary
            .iter()
            .map(|(locale, tree)| {
                let missing: Vec<KeyPath> = reference_paths
                    .iter()
                    .filter(|path| tree.get_leaf(path).is_none())
                    .cloned()
                    .collect();
                let present = total - missing.len();
                let coverage_percent = if total == 0 {
                    100.0
                } else {
                    present as f64 / total as f64 * 100.0
                };

                LocaleCoverage {
                    locale: locale.to_string(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        Ok(Self {
            default_locale: default_locale.to_string(),
            total_messages: total,
            locales,
        })
    }

    /// Coverage entry for `locale`.
    pub fn locale(&self, locale: &str) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|coverage| coverage.locale == locale)
    }

    /// Whether every locale has every reference message.
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(LocaleCoverage::is_complete)
    }
}

impl fmt::Display for CoverageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} messages in reference locale {}",
            self.total_messages, self.default_locale
        )?;
        for coverage in &self.locales {
            writeln!(
                f,
                "{}: {}/{} ({:.1}%)",
                coverage.locale, coverage.present, self.total_messages, coverage.coverage_percent
            )?;
            for path in &coverage.missing {
                writeln!(f, "  missing {path}")?;
            }
        }
        Ok(())
    }
}
