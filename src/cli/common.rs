//! Shared CLI plumbing: error type, exit codes, config and codec setup.

use crate::codec::{AdvancedKeycodes, ByteTable, Codec, NoAdvancedKeycodes, QmkAdvancedKeycodes};
use crate::config::Config;
use crate::keycode_db::KeycodeDb;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad input: unknown keycode, malformed byte, invalid option
    ValidationError = 1,
    /// File could not be read, parsed or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error reported by a CLI command.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Bad user input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File or parse failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Numeric process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// State shared by all commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    config_path: PathBuf,
}

impl CliContext {
    /// Uses `config_path` if given, else the platform config file.
    pub fn new(config_path: Option<PathBuf>) -> CliResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate config file: {e}")))?,
        };
        Ok(Self { config_path })
    }

    /// Config file this run reads and writes.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config file, or defaults if it does not exist.
    pub fn config(&self) -> CliResult<Config> {
        Config::load_from(&self.config_path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
    }
}

/// Loads the process-wide keycode catalog.
pub fn load_catalog() -> CliResult<&'static KeycodeDb> {
    KeycodeDb::global()
        .map_err(|e| CliError::io(format!("Failed to load keycode database: {e:#}")))
}

/// Codec with a translator chosen at runtime.
pub type CliCodec = Codec<'static, Box<dyn AdvancedKeycodes + Send + Sync>>;

/// Options for commands that convert keycodes.
#[derive(Debug, Clone, Args)]
pub struct CodecArgs {
    /// Device byte table (JSON); defaults to the configured or embedded table
    #[arg(long, value_name = "FILE")]
    pub table: Option<PathBuf>,

    /// Disable modifier, mod-tap and layer-tap translation
    #[arg(long)]
    pub no_advanced: bool,
}

impl CodecArgs {
    /// Builds the codec from these options and the config.
    pub fn build(&self, config: &Config) -> CliResult<CliCodec> {
        let catalog = load_catalog()?;

        let table = match self.table.as_ref().or(config.codec.byte_table.as_ref()) {
            Some(path) => ByteTable::load(path, catalog),
            None => ByteTable::builtin(catalog),
        }
        .map_err(|e| CliError::io(format!("{e:#}")))?;

        let advanced: Box<dyn AdvancedKeycodes + Send + Sync> =
            if self.no_advanced || !config.codec.advanced {
                Box::new(NoAdvancedKeycodes)
            } else {
                Box::new(QmkAdvancedKeycodes)
            };

        Ok(Codec::new(catalog, table, advanced))
    }
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
