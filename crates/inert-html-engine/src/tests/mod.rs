//! Shared helpers for filesystem-backed tests.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A fresh, empty temporary directory, removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Writes `content` to `name` (which may contain subdirectories) under `dir`.
pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Reads a file the code under test produced.
pub fn read_output(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
}
