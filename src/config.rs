//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_BINARY_NAME;
use crate::keycode_db::display::DEFAULT_LABEL_SIZE;

/// Keycode conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Device byte table (JSON) used instead of the embedded one
    #[serde(default)]
    pub byte_table: Option<PathBuf>,
    /// Translate modifier, mod-tap and layer-tap codes
    #[serde(default = "default_advanced")]
    pub advanced: bool,
}

fn default_advanced() -> bool {
    true
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            byte_table: None,
            advanced: default_advanced(),
        }
    }
}

/// Key cap display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Render size used when a command does not pass `--size`
    #[serde(default = "default_label_size")]
    pub label_size: u32,
}

fn default_label_size() -> u32 {
    DEFAULT_LABEL_SIZE
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            label_size: default_label_size(),
        }
    }
}

/// Keyboard selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct KeyboardConfig {
    /// Keyboard definition used to filter keycodes
    #[serde(default)]
    pub definition: Option<PathBuf>,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/keycat/config.toml`
/// - macOS: `~/Library/Application Support/keycat/config.toml`
/// - Windows: `%APPDATA%\keycat\config.toml`
///
/// # Validation
///
/// - `label_size` must be positive
/// - `byte_table` and `definition` must exist if set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Conversion settings
    #[serde(default)]
    pub codec: CodecConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Keyboard settings
    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_BINARY_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate().context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))?;

        Ok(config)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `label_size` is positive
    /// - `byte_table` exists (if set)
    /// - `definition` exists (if set)
    pub fn validate(&self) -> Result<()> {
        if self.display.label_size == 0 {
            anyhow::bail!("display.label_size must be greater than 0");
        }

        if let Some(table) = &self.codec.byte_table {
            if !table.exists() {
                anyhow::bail!("Byte table does not exist: {}", table.display());
            }
        }

        if let Some(definition) = &self.keyboard.definition {
            if !definition.exists() {
                anyhow::bail!(
                    "Keyboard definition does not exist: {}",
                    definition.display()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.codec.byte_table, None);
        assert!(config.codec.advanced);
        assert_eq!(config.display.label_size, 100);
        assert_eq!(config.keyboard.definition, None);
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::new();
        assert!(config.validate().is_ok());

        config.display.label_size = 0;
        assert!(config.validate().is_err());

        config.display.label_size = 120;
        config.codec.byte_table = Some(PathBuf::from("/nonexistent/table.json"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Byte table does not exist"));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\nlabel_size = 150\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.display.label_size, 150);
        assert!(config.codec.advanced);
    }

    #[test]
    fn test_invalid_toml_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display\nlabel_size = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let table = temp_dir.path().join("table.json");
        fs::write(&table, "{}").unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::new();
        config.codec.byte_table = Some(table);
        config.codec.advanced = false;
        config.save_to(&config_file).unwrap();

        assert!(!config_file.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&config_file).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_rejects_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.display.label_size = 0;
        assert!(config.save_to(&config_file).is_err());
        assert!(!config_file.exists());
    }
}
