//! Settings file loading.
//!
//! Responsibilities:
//! - Resolve a settings file name against the resource directory.
//! - Read a YAML settings file into a nested mapping.
//! - Distinguish a missing file from an unreadable or malformed one.
//!
//! Does NOT handle:
//! - Flattening nested mappings (see flatten.rs).
//! - Deciding whether a missing file is an error (see store.rs).
//!
//! Invariants:
//! - `SourceError::NotFound` is only returned for an io `NotFound`.
//! - An empty document is an empty mapping, not an error.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a settings file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Config file at {path} must contain a mapping at the top level")]
    NotAMapping { path: PathBuf },
}

impl SourceError {
    /// Path of the settings file that failed.
    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path }
            | SourceError::Read { path, .. }
            | SourceError::Parse { path, .. }
            | SourceError::NotAMapping { path } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Joins `file_name` onto `root`.
///
/// The name is normalized first (`.` segments and repeated separators removed,
/// `..` folded into its parent). A single leading `/` or `\` is then dropped
/// unless the name already starts with `root`, so `"/application.yml"` still
/// lands inside the resource directory.
pub fn resolve_source_path(file_name: &str, root: &Path) -> PathBuf {
    let normalized_path = normalize_file_name(file_name);
    let normalized = normalized_path.to_string_lossy();
    let root_str = root.to_string_lossy();

    let relative: &str = if !root_str.is_empty() && normalized.starts_with(root_str.as_ref()) {
        &normalized
    } else {
        normalized.strip_prefix(['/', '\\']).unwrap_or(&normalized)
    };
    root.join(relative)
}

/// Lexical normalization; never touches the filesystem.
fn normalize_file_name(file_name: &str) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in Path::new(file_name).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    if normalized.as_os_str().is_empty() {
        normalized.push(".");
    }
    normalized
}

/// Reads the YAML file at `path` into its top-level mapping.
pub fn load_yaml_mapping(path: &Path) -> Result<serde_yaml::Mapping, SourceError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if content.trim().is_empty() {
        return Ok(serde_yaml::Mapping::new());
    }

    let document: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| SourceError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        serde_yaml::Value::Null => Ok(serde_yaml::Mapping::new()),
        _ => Err(SourceError::NotAMapping {
            path: path.to_path_buf(),
        }),
    }
}
