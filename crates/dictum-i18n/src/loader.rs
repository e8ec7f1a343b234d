//! Dictionary loading from JSON, YAML or TOML files

use crate::dictionary::{parse_error, Dictionary};
use crate::error::{I18nError, I18nResult};
use crate::locale::parse_locale;
use crate::tree::MessageTree;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Serialization format of a dictionary file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DictionaryFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl DictionaryFormat {
    /// Format implied by the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Deserialize `content`, reporting failures against `origin`.
    pub fn parse<T: DeserializeOwned>(self, content: &str, origin: &str) -> I18nResult<T> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| parse_error(origin, e)),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(origin, e)),
            Self::Toml => toml::from_str(content).map_err(|e| parse_error(origin, e)),
        }
    }
}

/// Loads a [`Dictionary`] from disk
///
/// The path is either one file holding `{ "<locale>": { ... } }`, or a
/// directory with one `<locale>.<ext>` file per locale.
#[derive(Debug, Clone)]
pub struct DictionaryLoader {
    path: PathBuf,
}

impl DictionaryLoader {
    /// Create a loader for `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every locale.
    pub fn load(&self) -> I18nResult<Dictionary> {
        let metadata = fs::metadata(&self.path).map_err(|source| {
            warn!("Dictionary path is not readable: {:?}", self.path);
            I18nError::ResourceLoadError {
                path: self.path.to_string_lossy().to_string(),
                source,
            }
        })?;

        let dictionary = if metadata.is_dir() {
            self.load_directory()?
        } else {
            self.load_file()?
        };

        if dictionary.is_empty() {
            return Err(I18nError::NoLocales {
                path: self.path.to_string_lossy().to_string(),
            });
        }

        info!(
            "Loaded dictionary from {:?} with locales: {:?}",
            self.path,
            dictionary.locales()
        );
        Ok(dictionary)
    }

    fn load_file(&self) -> I18nResult<Dictionary> {
        let format = DictionaryFormat::from_path(&self.path)
            .ok_or_else(|| I18nError::UnsupportedFormat(self.path.to_string_lossy().to_string()))?;
        let content = read(&self.path)?;
        let dictionary: Dictionary = format.parse(&content, &self.path.to_string_lossy())?;

        for locale in dictionary.locales() {
            parse_locale(locale)?;
        }
        Ok(dictionary)
    }

    fn load_directory(&self) -> I18nResult<Dictionary> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.path)? {
            let path = entry?.path();
            if path.is_file() {
                entries.push(path);
            }
        }
        entries.sort();

        let mut dictionary = Dictionary::new();
        for path in entries {
            let Some(format) = DictionaryFormat::from_path(&path) else {
                warn!("Skipping file with unsupported extension: {:?}", path);
                continue;
            };
            let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!("Skipping file with non UTF-8 name: {:?}", path);
                continue;
            };
            parse_locale(locale)?;

            if dictionary.contains_locale(locale) {
                warn!("Locale {} defined by more than one file, keeping {:?}", locale, path);
            }

            debug!("Loading locale file: {:?}", path);
            let content = read(&path)?;
            let tree: MessageTree = format.parse(&content, &path.to_string_lossy())?;
            dictionary.insert(locale, tree);
        }

        Ok(dictionary)
    }
}

fn read(path: &Path) -> I18nResult<String> {
    fs::read_to_string(path).map_err(|source| I18nError::ResourceLoadError {
        path: path.to_string_lossy().to_string(),
        source,
    })
}
