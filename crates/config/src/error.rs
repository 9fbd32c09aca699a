//! Error types for configuration loading and lookup.
//!
//! Responsibilities:
//! - Define error variants for store construction, required keys, and typed conversions.
//! - Wrap settings file failures (`SourceError`) for unified error handling.
//!
//! Does NOT handle:
//! - Recovering from missing settings files (see `store.rs`).
//!
//! Invariants:
//! - Every variant carries the offending key or path.
//! - `RequiredKeyMissing` and `TypeConversion` stay distinct so callers can tell
//!   "not configured" apart from "configured wrong".
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur while building or reading a [`crate::ConfigStore`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required key [{key}] not found in config")]
    RequiredKeyMissing { key: String },

    #[error("Invalid value for {key}: cannot convert {value:?} to {target}")]
    TypeConversion {
        key: String,
        value: String,
        target: &'static str,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Returns the key this error is about, when it concerns a single key.
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::RequiredKeyMissing { key } | ConfigError::TypeConversion { key, .. } => {
                Some(key.as_str())
            }
            _ => None,
        }
    }
}
