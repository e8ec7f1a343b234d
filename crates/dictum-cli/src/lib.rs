//! # Dictum CLI
//!
//! Command-line front end for Dictum dictionaries.
//!
//! The binary resolves settings from flags, `DICTUM_*` variables and an
//! optional settings file, loads the dictionary, then translates a key,
//! checks every locale against the default locale, or prints coverage.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
