//! # Dictum Common
//!
//! Shared error type, logging setup, and test utilities for Dictum.
//!
//! This crate provides the foundational pieces used across all other crates
//! in the Dictum workspace. It deliberately knows nothing about dictionaries
//! or translators so that every other crate can depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{DictumError, Result};
pub use logging::{init_default_logging, init_dev_logging, init_logging, LoggingConfig, LOG_ENV_VAR};
