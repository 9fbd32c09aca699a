//! Flattening of nested settings into dot-joined keys.
//!
//! Responsibilities:
//! - Turn a nested YAML mapping into `(key, value)` pairs keyed by dotted paths.
//!
//! Does NOT handle:
//! - Key normalization (the store lowercases on merge).
//!
//! Invariants:
//! - Sequences are flattened by index (`servers.0.host`).
//! - Null leaves produce no entry.

use crate::constants::KEY_SEPARATOR;
use crate::value::ConfigValue;

/// Flattens `mapping` into dot-joined keys in document order.
pub fn flatten_mapping(mapping: &serde_yaml::Mapping) -> Vec<(String, ConfigValue)> {
    let mut entries = Vec::new();
    for (key, value) in mapping {
        if let Some(segment) = key_segment(key) {
            flatten_into(segment, value, &mut entries);
        }
    }
    entries
}

fn flatten_into(prefix: String, value: &serde_yaml::Value, out: &mut Vec<(String, ConfigValue)>) {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            for (key, child) in mapping {
                if let Some(segment) = key_segment(key) {
                    flatten_into(join(&prefix, &segment), child, out);
                }
            }
        }
        serde_yaml::Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(join(&prefix, &index.to_string()), child, out);
            }
        }
        serde_yaml::Value::Tagged(tagged) => flatten_into(prefix, &tagged.value, out),
        scalar => {
            if let Some(value) = ConfigValue::from_yaml_scalar(scalar) {
                out.push((prefix, value));
            }
        }
    }
}

fn join(prefix: &str, segment: &str) -> String {
    format!("{}{}{}", prefix, KEY_SEPARATOR, segment)
}

/// Renders a mapping key as a path segment. Null and nested keys are dropped.
fn key_segment(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::Tagged(tagged) => key_segment(&tagged.value),
        other => ConfigValue::from_yaml_scalar(other).map(|v| v.to_string()),
    }
}
