//! # Dictum I18n
//!
//! Translation lookup over nested message trees with default-locale
//! fallback and `{{placeholder}}` interpolation.
//!
//! - [`Dictionary`] maps locale identifiers to [`MessageTree`]s
//! - [`Translator`] resolves a [`KeyPath`] in the active locale, falling
//!   back to the default locale when any segment is missing
//! - [`MessageSchema`] checks that every locale fits the default locale's
//!   shape and that required variables are supplied
//! - [`CoverageReport`] lists messages each locale leaves to fallback
//!
//! # Example
//!
//! ```rust
//! use dictum_i18n::{vars, Dictionary, MessageTree, Translator, TranslatorConfig};
//!
//! let dictionary = Dictionary::new()
//!     .with_locale(
//!         "en",
//!         MessageTree::new()
//!             .with("youHaveManyMessages", "You have {{count}} messages")
//!             .with("goodbye", "Goodbye"),
//!     )
//!     .with_locale(
//!         "fr",
//!         MessageTree::new().with("youHaveManyMessages", "Vous avez {{count}} messages"),
//!     );
//!
//! let translate = Translator::new(TranslatorConfig::new(dictionary, "fr", "en"));
//! let message = translate.translate("youHaveManyMessages", Some(&vars!["count" => 2]));
//! assert_eq!(message, "Vous avez 2 messages");
//! assert_eq!(translate.translate_plain("goodbye"), "Goodbye");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod coverage;
pub mod dictionary;
pub mod error;
pub mod key_path;
pub mod loader;
pub mod locale;
pub mod schema;
pub mod template;
pub mod translator;
pub mod tree;
pub mod variables;

pub use coverage::{CoverageReport, LocaleCoverage};
pub use dictionary::Dictionary;
pub use error::{I18nError, I18nResult};
pub use key_path::{KeyPath, Selector, KEY_SEPARATOR};
pub use loader::{DictionaryFormat, DictionaryLoader};
pub use locale::{is_valid_locale, parse_locale};
pub use schema::{MessageSchema, SchemaViolation};
pub use template::{has_placeholders, interpolate, placeholders};
pub use translator::{
    create_translator, Resolution, ResolutionSource, Translator, TranslatorConfig,
};
pub use tree::MessageTree;
pub use variables::{VarValue, Variables};
