//! Layered configuration store.
//!
//! Responsibilities:
//! - Load `application.yml` and `application-<profile>.yml` from a resource directory
//!   and merge them into one flat, lowercased key space.
//! - Answer lookups with environment-first precedence.
//! - Provide typed accessors, required-key enforcement, and profile helpers.
//!
//! Does NOT handle:
//! - YAML parsing (see source.rs) or key flattening (see flatten.rs).
//! - Installing a tracing subscriber; the application owns logging setup.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over every settings file, for every key.
//! - The profile file is merged after the base file, so it wins on identical keys.
//! - File values are snapshotted at construction; the environment is read on every lookup.
//! - The store is never mutated after `new` returns, so `&ConfigStore` can be shared
//!   across threads without locking.
//! - A missing settings file is never fatal; a malformed one always is.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::{
    BASE_FILE_NAME, DEFAULT_DATASET_BASE_NAME, DEFAULT_RESOURCE_DIR, FEATURE_KEY_PREFIX,
    FEATURE_KEY_SUFFIX, LOCAL_PROFILE, RESOURCE_DIR_ENV,
};
use crate::env;
use crate::error::ConfigError;
use crate::flatten::flatten_mapping;
use crate::profile::{active_profile, dataset_name_for, profile_file_name};
use crate::source::{SourceError, load_yaml_mapping, resolve_source_path};
use crate::value::ConfigValue;

#[cfg(test)]
mod tests;

/// Configuration resolved from the environment, a profile file, and a base file.
///
/// Build one per process at startup and hand out references (or an `Arc`).
#[derive(Debug, Clone)]
pub struct ConfigStore {
    resource_dir: PathBuf,
    values: HashMap<String, ConfigValue>,
}

impl ConfigStore {
    /// Load the base and profile settings files from `resource_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Source` if a settings file exists but cannot be read
    /// or parsed. Missing files are logged and skipped.
    pub fn new(resource_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let mut store = Self {
            resource_dir: resource_dir.into(),
            values: HashMap::new(),
        };

        store.populate_from(BASE_FILE_NAME)?;

        let profile = active_profile();
        tracing::debug!(profile = %profile, "Resolved configuration profile");
        store.populate_from(&profile_file_name(&profile))?;

        Ok(store)
    }

    /// Load from the resource directory named by `config.resource_dir` /
    /// `CONFIG_RESOURCE_DIR`, or `./resources` when unset.
    pub fn from_default_dir() -> Result<Self, ConfigError> {
        Self::new(env::env_value_or(RESOURCE_DIR_ENV, DEFAULT_RESOURCE_DIR))
    }

    fn populate_from(&mut self, file_name: &str) -> Result<(), ConfigError> {
        let path = resolve_source_path(file_name, &self.resource_dir);

        let mapping = match load_yaml_mapping(&path) {
            Ok(mapping) => mapping,
            Err(SourceError::NotFound { path }) => {
                // Local overrides are optional and usually untracked.
                if file_name != profile_file_name(LOCAL_PROFILE) {
                    tracing::warn!(path = %path.display(), "Config file not found");
                }
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let entries = flatten_mapping(&mapping);
        tracing::info!(
            path = %path.display(),
            entries = entries.len(),
            "Populating config"
        );
        for (key, value) in entries {
            self.values.insert(key.to_lowercase(), value);
        }
        Ok(())
    }

    /// Directory the settings files were loaded from.
    pub fn resource_dir(&self) -> &Path {
        &self.resource_dir
    }

    /// Number of keys loaded from settings files.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve `key` from the environment only (literal key, then its alias).
    pub fn env_value(key: &str) -> Option<String> {
        env::env_value(key)
    }

    /// The value loaded from settings files for `key`, ignoring the environment.
    ///
    /// Unlike [`ConfigStore::get`] this also returns falsy values.
    pub fn file_value(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(&key.to_lowercase())
    }

    /// Look up `key`: environment first, then the merged settings files.
    ///
    /// Empty strings, `false` and zero from settings files count as unset.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        if let Some(value) = env::env_value(key) {
            return Some(ConfigValue::String(value));
        }
        self.file_value(key).filter(|v| v.is_truthy()).cloned()
    }

    /// Like [`ConfigStore::get`] but falls back to `default`.
    pub fn get_or(&self, key: &str, default: impl Into<ConfigValue>) -> ConfigValue {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// String form of the value for `key`.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }

    /// Look up a key that deployment configuration must supply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RequiredKeyMissing` if no source provides a value.
    pub fn get_required(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::RequiredKeyMissing {
            key: key.to_string(),
        })
    }

    /// Boolean value for `key`, or `default` if unset.
    ///
    /// Never fails: any value other than a boolean `true` or a case-insensitive
    /// `"true"` string reads as `false`.
    pub fn get_boolean(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, |v| v.to_bool())
    }

    pub fn get_boolean_required(&self, key: &str) -> Result<bool, ConfigError> {
        Ok(self.get_required(key)?.to_bool())
    }

    /// Integer value for `key`, or `default` if unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TypeConversion` if the value is not an integer.
    pub fn get_int(&self, key: &str, default: i64) -> Result<i64, ConfigError> {
        match self.get(key) {
            Some(value) => to_int(key, &value),
            None => Ok(default),
        }
    }

    pub fn get_int_required(&self, key: &str) -> Result<i64, ConfigError> {
        to_int(key, &self.get_required(key)?)
    }

    /// Floating point value for `key`, or `default` if unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TypeConversion` if the value is not a number.
    pub fn get_float(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        match self.get(key) {
            Some(value) => value.to_f64().ok_or_else(|| conversion_error(key, &value, "float")),
            None => Ok(default),
        }
    }

    pub fn is_enabled(&self, key: &str) -> bool {
        self.get_boolean(key, false)
    }

    /// Whether `feature.<name>.enabled` is on.
    pub fn has_feature(&self, name: &str) -> bool {
        self.is_enabled(&format!("{}.{}.{}", FEATURE_KEY_PREFIX, name, FEATURE_KEY_SUFFIX))
    }

    /// The active profile, read from the environment on every call.
    pub fn profile(&self) -> String {
        active_profile()
    }

    /// Dataset name for `base_name` under the active profile.
    pub fn dataset_name(&self, base_name: &str) -> String {
        dataset_name_for(&self.profile(), base_name)
    }

    pub fn default_dataset_name(&self) -> String {
        self.dataset_name(DEFAULT_DATASET_BASE_NAME)
    }
}

fn to_int(key: &str, value: &ConfigValue) -> Result<i64, ConfigError> {
    value.to_i64().ok_or_else(|| conversion_error(key, value, "integer"))
}

fn conversion_error(key: &str, value: &ConfigValue, target: &'static str) -> ConfigError {
    ConfigError::TypeConversion {
        key: key.to_string(),
        value: value.to_string(),
        target,
    }
}
