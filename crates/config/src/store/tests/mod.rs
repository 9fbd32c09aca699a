//! Tests for the configuration store.
//!
//! Responsibilities:
//! - Test construction from base and profile settings files.
//! - Test lookup precedence and key normalization.
//! - Test typed accessors, required keys, and profile helpers.
//! - Test the warnings emitted for missing settings files.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - The active profile is always pinned via `temp_env` before a store is built.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

use super::ConfigStore;

pub mod construction_tests;

/// Writes `files` (name, contents) into a fresh resource directory.
pub fn resource_dir(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, contents) in files {
        std::fs::write(temp_dir.path().join(name), contents).unwrap();
    }
    temp_dir
}

/// Runs `f` with the profile variables set to `profile` (or unset for `None`).
pub fn with_profile<R>(profile: Option<&str>, f: impl FnOnce() -> R) -> R {
    temp_env::with_vars(
        [
            ("application.profile", None),
            ("APPLICATION_PROFILE", profile),
        ],
        f,
    )
}

/// Builds a store from `dir` under `profile`.
pub fn load(dir: &Path, profile: Option<&str>) -> ConfigStore {
    with_profile(profile, || ConfigStore::new(dir).unwrap())
}

/// In-memory log sink for a scoped `tracing` subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Runs `f` with every event formatted into this sink.
    pub fn capture<R>(&self, f: impl FnOnce() -> R) -> R {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
