//! Construction tests for the configuration store.
//!
//! Responsibilities:
//! - Test merging of the base and profile settings files.
//! - Test tolerance of missing files and rejection of malformed ones.

use serial_test::serial;

use super::{load, resource_dir, with_profile};
use crate::error::ConfigError;
use crate::source::SourceError;
use crate::store::ConfigStore;
use crate::value::ConfigValue;

const BASE: &str = "\
top_level_key:
  some_sub_key: a value
  key_to_be_overwritten: original
  Mixed_Case: kept
";

const TEST_PROFILE: &str = "\
top_level_key:
  key_to_be_overwritten: I have been overwritten
  profile_only: only here
";

#[test]
#[serial]
fn test_base_file_values_are_loaded() {
    let dir = resource_dir(&[("application.yml", BASE)]);
    let store = load(dir.path(), None);

    assert_eq!(
        store.get("top_level_key.some_sub_key"),
        Some(ConfigValue::from("a value"))
    );
    assert_eq!(store.len(), 3);
    assert_eq!(store.resource_dir(), dir.path());
}

#[test]
#[serial]
fn test_profile_file_overrides_base() {
    let dir = resource_dir(&[
        ("application.yml", BASE),
        ("application-test.yml", TEST_PROFILE),
    ]);
    let store = load(dir.path(), Some("test"));

    assert_eq!(
        store.get("top_level_key.key_to_be_overwritten"),
        Some(ConfigValue::from("I have been overwritten"))
    );
    assert_eq!(
        store.get("top_level_key.some_sub_key"),
        Some(ConfigValue::from("a value"))
    );
    assert_eq!(
        store.get("top_level_key.profile_only"),
        Some(ConfigValue::from("only here"))
    );
}

#[test]
#[serial]
fn test_profile_name_is_lowercased_when_selecting_file() {
    let dir = resource_dir(&[
        ("application.yml", BASE),
        ("application-test.yml", TEST_PROFILE),
    ]);
    let store = load(dir.path(), Some("TEST"));

    assert_eq!(
        store.get_string("top_level_key.key_to_be_overwritten").as_deref(),
        Some("I have been overwritten")
    );
}

#[test]
#[serial]
fn test_other_profile_files_are_ignored() {
    let dir = resource_dir(&[
        ("application.yml", BASE),
        ("application-test.yml", TEST_PROFILE),
    ]);
    let store = load(dir.path(), Some("dev"));

    assert_eq!(
        store.get_string("top_level_key.key_to_be_overwritten").as_deref(),
        Some("original")
    );
    assert!(store.get("top_level_key.profile_only").is_none());
}

#[test]
#[serial]
fn test_merge_is_per_key_not_structural() {
    let dir = resource_dir(&[
        ("application.yml", "db:\n  host: base-host\n  port: 5432\n"),
        ("application-dev.yml", "db:\n  host: dev-host\n"),
    ]);
    let store = load(dir.path(), Some("dev"));

    assert_eq!(store.get_string("db.host").as_deref(), Some("dev-host"));
    assert_eq!(store.get("db.port"), Some(ConfigValue::Integer(5432)));
}

#[test]
#[serial]
fn test_stored_keys_are_lowercased() {
    let dir = resource_dir(&[("application.yml", BASE)]);
    let store = load(dir.path(), None);

    assert_eq!(
        store.get_string("top_level_key.mixed_case").as_deref(),
        Some("kept")
    );
    assert_eq!(
        store.get_string("TOP_LEVEL_KEY.Mixed_Case").as_deref(),
        Some("kept")
    );
}

#[test]
#[serial]
fn test_missing_files_are_not_fatal() {
    let dir = resource_dir(&[]);

    let local = load(dir.path(), None);
    assert!(local.is_empty());

    let dev = load(dir.path(), Some("dev"));
    assert!(dev.is_empty());
}

#[test]
#[serial]
fn test_local_profile_file_is_loaded_when_present() {
    let dir = resource_dir(&[
        ("application.yml", BASE),
        ("application-local.yml", "top_level_key:\n  some_sub_key: local value\n"),
    ]);
    let store = load(dir.path(), None);

    assert_eq!(
        store.get_string("top_level_key.some_sub_key").as_deref(),
        Some("local value")
    );
}

#[test]
#[serial]
fn test_malformed_base_file_is_fatal() {
    let dir = resource_dir(&[("application.yml", "key: [unterminated\n")]);

    let result = with_profile(None, || ConfigStore::new(dir.path()));
    match result {
        Err(ConfigError::Source(SourceError::Parse { path, .. })) => {
            assert!(path.ends_with("application.yml"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
#[serial]
fn test_malformed_profile_file_is_fatal() {
    let dir = resource_dir(&[
        ("application.yml", BASE),
        ("application-dev.yml", "- just\n- a list\n"),
    ]);

    let result = with_profile(Some("dev"), || ConfigStore::new(dir.path()));
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Source(SourceError::NotAMapping { .. })
    ));
    assert!(err.to_string().contains("application-dev.yml"));
}

#[test]
#[serial]
fn test_profile_cannot_be_selected_from_a_file() {
    let dir = resource_dir(&[
        ("application.yml", "application:\n  profile: test\n"),
        ("application-test.yml", TEST_PROFILE),
    ]);
    let store = load(dir.path(), None);

    assert!(store.get("top_level_key.profile_only").is_none());
    with_profile(None, || assert_eq!(store.profile(), "local"));
}

#[test]
#[serial]
fn test_from_default_dir_uses_resource_dir_variable() {
    let dir = resource_dir(&[("application.yml", BASE)]);
    let dir_str = dir.path().to_string_lossy().to_string();

    let store = temp_env::with_vars(
        [
            ("config.resource_dir", None),
            ("CONFIG_RESOURCE_DIR", Some(dir_str.as_str())),
            ("application.profile", None),
            ("APPLICATION_PROFILE", None),
        ],
        || ConfigStore::from_default_dir().unwrap(),
    );

    assert_eq!(
        store.get_string("top_level_key.some_sub_key").as_deref(),
        Some("a value")
    );
}
