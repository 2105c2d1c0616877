#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use rememberit::domain::{codec, Entry};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn rememberit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rememberit").unwrap();
    cmd.env_remove("REMEMBERIT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Temp directory holding an initialized list
pub fn init_list() -> TempDir {
    let temp = TempDir::new().unwrap();
    rememberit_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

pub fn entries_path(root: &Path) -> std::path::PathBuf {
    root.join(".rememberit").join("entries.json")
}

/// Entries as currently stored in the slot, storage order
pub fn stored_entries(root: &Path) -> Vec<Entry> {
    let text = fs::read_to_string(entries_path(root)).unwrap();
    codec::import_state(&text).unwrap()
}

/// Overwrite the slot with raw text
pub fn write_slot(root: &Path, text: &str) {
    fs::write(entries_path(root), text).unwrap();
}
