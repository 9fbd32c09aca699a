//! Environment variable resolution for configuration keys.
//!
//! Responsibilities:
//! - Resolve a dotted configuration key against the live process environment.
//! - Derive the uppercase/underscore alias for hosts that reject `.` in variable names.
//! - Optionally populate the environment from a `.env` file once, at startup.
//!
//! Does NOT handle:
//! - Settings files (see source.rs and store.rs).
//!
//! Invariants:
//! - The environment is read on every call and never cached.
//! - Empty and non-UTF-8 variables are treated as unset. Values are not trimmed.
//! - The literal key is consulted before its alias.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.

use std::path::Path;

use crate::constants::{DOTENV_DISABLED_ENV, ENV_ALIAS_SEPARATOR, KEY_SEPARATOR};
use crate::error::ConfigError;

/// Uppercase/underscore alias of a dotted key: `top_level.sub_key` -> `TOP_LEVEL_SUB_KEY`.
pub fn env_alias(key: &str) -> String {
    key.to_uppercase().replace(KEY_SEPARATOR, ENV_ALIAS_SEPARATOR)
}

/// Read an environment variable, returning None if unset, empty, or not valid UTF-8.
pub fn env_var_or_none(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Resolve `key` from the environment, trying the literal key and then its alias.
pub fn env_value(key: &str) -> Option<String> {
    env_var_or_none(key).or_else(|| env_var_or_none(&env_alias(key)))
}

/// Like [`env_value`] but falls back to `default`.
pub fn env_value_or(key: &str, default: &str) -> String {
    env_value(key).unwrap_or_else(|| default.to_string())
}

/// Load a `.env` file from the working directory (or a parent) into the process environment.
///
/// This is the only place the crate writes to the environment. Call it once at
/// startup, before any threads are spawned and before [`crate::ConfigStore::new`];
/// after that the environment is treated as read-only. Variables that are
/// already set are never overwritten.
///
/// Nothing is loaded when `DOTENV_DISABLED` is `1` or `true`, and a missing
/// `.env` file is not an error.
///
/// # Errors
///
/// - `ConfigError::DotenvParse` if the file has invalid syntax.
/// - `ConfigError::DotenvIo` if the file exists but cannot be read.
pub fn load_dotenv() -> Result<(), ConfigError> {
    apply_dotenv(|| dotenvy::dotenv().map(drop))
}

/// Load the `.env` file at `path`. Same rules and startup ordering as [`load_dotenv`].
pub fn load_dotenv_from(path: &Path) -> Result<(), ConfigError> {
    apply_dotenv(|| dotenvy::from_path(path))
}

fn apply_dotenv(load: impl FnOnce() -> Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    if env_var_or_none(DOTENV_DISABLED_ENV).is_some_and(|v| v == "1" || v == "true") {
        tracing::debug!("Skipping .env loading ({} is set)", DOTENV_DISABLED_ENV);
        return Ok(());
    }

    match load() {
        Ok(()) => Ok(()),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(dotenvy::Error::Io(err)) => Err(ConfigError::DotenvIo { kind: err.kind() }),
        // The offending line is dropped so secrets never reach the error.
        Err(dotenvy::Error::LineParse(_, error_index)) => {
            Err(ConfigError::DotenvParse { error_index })
        }
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}
