//! # Dictum Config
//!
//! Typed settings for Dictum processes.
//!
//! This crate loads settings from YAML, TOML or JSON files, applies
//! `DICTUM_*` environment overrides, validates the result and keeps the
//! current settings in a lock-free cache.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cache::*;
pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validation::*;
