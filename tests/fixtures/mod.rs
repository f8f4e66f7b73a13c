//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use keycat::config::Config;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keycat binary
pub fn keycat_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keycat")
}

/// Runs keycat with `--config` pointing at `config_dir/config.toml`.
///
/// The config file does not have to exist; keycat falls back to defaults.
pub fn run_in(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(keycat_bin())
        .arg("--config")
        .arg(config_dir.join("config.toml"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs keycat with an empty, isolated config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run_in(temp_dir.path(), args)
}

/// Asserts a successful exit and parses stdout as JSON.
pub fn json_output(output: &Output) -> serde_json::Value {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Writes a device byte table and returns its path.
pub fn write_byte_table(dir: &Path, entries: &[(&str, u16)]) -> PathBuf {
    let table: BTreeMap<&str, u16> = entries.iter().copied().collect();
    let path = dir.join("table.json");
    fs::write(&path, serde_json::to_string_pretty(&table).unwrap())
        .expect("Failed to write byte table");
    path
}

/// A small device table: two basic keys, one vendor key and the MO range.
pub fn vendor_table_entries() -> Vec<(&'static str, u16)> {
    vec![
        ("KC_A", 0x04),
        ("KC_B", 0x05),
        ("KC_VENDOR_X", 0x00f0),
        ("_QK_MOMENTARY", 0x5220),
        ("_QK_MOMENTARY_MAX", 0x523f),
    ]
}

/// Writes a keyboard definition and returns its path.
pub fn write_definition(dir: &Path, json: &str) -> PathBuf {
    let path = dir.join("definition.json");
    fs::write(&path, json).expect("Failed to write keyboard definition");
    path
}

/// Saves `config` as `dir/config.toml` and returns its path.
pub fn write_config(dir: &Path, config: &Config) -> PathBuf {
    let path = dir.join("config.toml");
    config.save_to(&path).expect("Failed to save config");
    path
}
