//! Centralized constants for profile-aware configuration loading.
//!
//! This module contains the file names, environment keys, and profile tiers
//! shared by the loader, the environment resolver, and the store.

// =============================================================================
// Source Files
// =============================================================================

/// Base settings file, loaded first from the resource directory.
pub const BASE_FILE_NAME: &str = "application.yml";

/// Prefix of the profile-specific settings file (`application-<profile>.yml`).
pub const PROFILE_FILE_PREFIX: &str = "application-";

/// Extension shared by every settings file.
pub const SOURCE_FILE_EXTENSION: &str = "yml";

/// Resource directory used when none is supplied (relative to the working directory).
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// Environment key that overrides the default resource directory.
pub const RESOURCE_DIR_ENV: &str = "config.resource_dir";

// =============================================================================
// Keys
// =============================================================================

/// Separator between nested key segments.
pub const KEY_SEPARATOR: &str = ".";

/// Replacement for [`KEY_SEPARATOR`] in environment variable aliases.
pub const ENV_ALIAS_SEPARATOR: &str = "_";

/// Prefix of feature flag keys (`feature.<name>.enabled`).
pub const FEATURE_KEY_PREFIX: &str = "feature";

/// Suffix of feature flag keys (`feature.<name>.enabled`).
pub const FEATURE_KEY_SUFFIX: &str = "enabled";

// =============================================================================
// Profiles
// =============================================================================

/// Environment key selecting the active profile.
pub const PROFILE_KEY: &str = "application.profile";

/// Profile used when [`PROFILE_KEY`] is unset.
pub const LOCAL_PROFILE: &str = "local";

/// Profiles whose dataset names carry no suffix.
pub const UNTIERED_PROFILES: &[&str] = &["prod", "staging", "ci"];

/// Dataset suffix used by the local profile.
pub const LOCAL_DATASET_SUFFIX: &str = "_qa";

/// Base dataset name used by [`crate::ConfigStore::default_dataset_name`].
pub const DEFAULT_DATASET_BASE_NAME: &str = "network_intel";

// =============================================================================
// Dotenv
// =============================================================================

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV: &str = "DOTENV_DISABLED";
