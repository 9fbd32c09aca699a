//! Deployment profile resolution and per-profile naming.
//!
//! Responsibilities:
//! - Resolve the active profile from the environment.
//! - Derive the profile-specific settings file name.
//! - Derive dataset names namespaced by deployment tier.
//!
//! Invariants:
//! - The profile comes from the environment only; settings files cannot select it.
//! - The profile is re-read on every call.

use crate::constants::{
    LOCAL_DATASET_SUFFIX, LOCAL_PROFILE, PROFILE_FILE_PREFIX, PROFILE_KEY, SOURCE_FILE_EXTENSION,
    UNTIERED_PROFILES,
};
use crate::env::env_value;

/// Active profile: `application.profile` / `APPLICATION_PROFILE` lowercased, or `"local"`.
pub fn active_profile() -> String {
    env_value(PROFILE_KEY)
        .map(|p| p.to_lowercase())
        .unwrap_or_else(|| LOCAL_PROFILE.to_string())
}

/// Settings file name for `profile`, e.g. `application-dev.yml`.
pub fn profile_file_name(profile: &str) -> String {
    format!("{}{}.{}", PROFILE_FILE_PREFIX, profile, SOURCE_FILE_EXTENSION)
}

/// Dataset name for `base_name` under `profile`.
///
/// `prod`, `staging` and `ci` use the base name unchanged, `local` maps to the
/// `_qa` dataset, and any other profile is appended as a suffix.
pub fn dataset_name_for(profile: &str, base_name: &str) -> String {
    if UNTIERED_PROFILES.contains(&profile) {
        base_name.to_string()
    } else if profile == LOCAL_PROFILE {
        format!("{}{}", base_name, LOCAL_DATASET_SUFFIX)
    } else {
        format!("{}_{}", base_name, profile)
    }
}
