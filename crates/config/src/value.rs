//! Typed configuration values.
//!
//! Responsibilities:
//! - Model a settings value as a tagged scalar (`String | Bool | Integer | Float`).
//! - Convert YAML scalars into that model.
//! - Provide the truthiness rule and the typed conversions used by the store accessors.
//!
//! Invariants:
//! - Boolean conversion never fails: anything other than `Bool(true)` or a
//!   case-insensitive `"true"` decays to `false`.
//! - Numeric conversions return `None` instead of guessing; the store turns that
//!   into `ConfigError::TypeConversion`.

use std::fmt;

/// A single flattened configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl ConfigValue {
    /// Whether the value counts as present for lookups.
    ///
    /// Empty strings, `false`, `0` and `0.0` are treated as absent. This keeps
    /// existing deployments working but means an empty string cannot be
    /// configured explicitly.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConfigValue::String(s) => !s.is_empty(),
            ConfigValue::Bool(b) => *b,
            ConfigValue::Integer(i) => *i != 0,
            ConfigValue::Float(f) => *f != 0.0,
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean view of the value.
    ///
    /// Booleans are returned as-is; everything else is compared to `"true"`
    /// after lowercasing its string form.
    pub fn to_bool(&self) -> bool {
        match self {
            ConfigValue::Bool(b) => *b,
            ConfigValue::String(s) => s.eq_ignore_ascii_case("true"),
            other => other.to_string().eq_ignore_ascii_case("true"),
        }
    }

    /// Integer view of the value, or `None` if it cannot be represented.
    ///
    /// Strings are trimmed before parsing and finite floats truncate toward zero.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            ConfigValue::Bool(b) => Some(i64::from(*b)),
            ConfigValue::Float(f) => {
                if f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64 {
                    Some(f.trunc() as i64)
                } else {
                    None
                }
            }
            ConfigValue::String(s) => s.trim().parse().ok(),
        }
    }

    /// Floating point view of the value, or `None` if it cannot be parsed.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            ConfigValue::Integer(i) => Some(*i as f64),
            ConfigValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            ConfigValue::String(s) => s.trim().parse().ok(),
        }
    }

    /// Converts a YAML scalar. Returns `None` for null and for non-scalars.
    ///
    /// Integers that do not fit in `i64` are kept as their decimal string.
    pub(crate) fn from_yaml_scalar(value: &serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::String(s) => Some(ConfigValue::String(s.clone())),
            serde_yaml::Value::Bool(b) => Some(ConfigValue::Bool(*b)),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(ConfigValue::Integer(i))
                } else if n.is_f64() {
                    n.as_f64().map(ConfigValue::Float)
                } else {
                    // Unsigned beyond i64::MAX: keep the exact digits.
                    Some(ConfigValue::String(n.to_string()))
                }
            }
            serde_yaml::Value::Tagged(tagged) => Self::from_yaml_scalar(&tagged.value),
            serde_yaml::Value::Null
            | serde_yaml::Value::Sequence(_)
            | serde_yaml::Value::Mapping(_) => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}
