//! Shared test utilities.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    temp_file("config.toml", content)
}

pub fn temp_script(lines: &[&str]) -> (TempDir, PathBuf) {
    temp_file("actions.jsonl", &lines.join("\n"))
}
