//! Protocol byte tables: string code to 16-bit value and back.

use super::family::LayerFamily;
use crate::keycode_db::KeycodeDb;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Suffix marking the last byte of a `_QK_*` range.
const MAX_SUFFIX: &str = "_MAX";

/// Errors found while validating a byte table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// A range's base lies above its maximum.
    #[error("range {name} is inverted: base 0x{base:04x} > max 0x{max:04x}")]
    InvertedRange {
        /// Base key of the range
        name: String,
        /// Value of the base key
        base: u16,
        /// Value of the `_MAX` key
        max: u16,
    },
}

/// A bidirectional keycode table for one protocol version.
///
/// The forward map keeps the order codes were listed in, and the reverse
/// map is built in that order: the first code seen for a byte claims it,
/// and a later code takes over only when the catalog knows that code.
#[derive(Debug, Clone)]
pub struct ByteTable {
    key_to_byte: IndexMap<String, u16>,
    byte_to_key: HashMap<u16, String>,
}

impl ByteTable {
    /// Builds a table, preferring catalog codes when several codes share a byte.
    pub fn new(key_to_byte: IndexMap<String, u16>, catalog: &KeycodeDb) -> Result<Self, TableError> {
        for (key, &max) in &key_to_byte {
            let Some(base_key) = key.strip_suffix(MAX_SUFFIX) else {
                continue;
            };
            if let Some(&base) = key_to_byte.get(base_key) {
                if base > max {
                    return Err(TableError::InvertedRange {
                        name: base_key.to_string(),
                        base,
                        max,
                    });
                }
            }
        }

        let mut byte_to_key: HashMap<u16, String> = HashMap::new();
        for (code, &byte) in &key_to_byte {
            match byte_to_key.get_mut(&byte) {
                None => {
                    byte_to_key.insert(byte, code.clone());
                }
                Some(existing) if catalog.contains(code) => {
                    debug!(byte, from = %existing, to = %code, "Reverse entry replaced by catalog code");
                    *existing = code.clone();
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            key_to_byte,
            byte_to_key,
        })
    }

    /// Parses a table from a JSON object of `"CODE": number` pairs.
    pub fn from_json_str(json: &str, catalog: &KeycodeDb) -> Result<Self> {
        let key_to_byte: IndexMap<String, u16> =
            serde_json::from_str(json).context("Failed to parse byte table JSON")?;
        Ok(Self::new(key_to_byte, catalog)?)
    }

    /// Loads a table from a JSON file.
    pub fn load(path: &Path, catalog: &KeycodeDb) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read byte table: {}", path.display()))?;
        let table = Self::from_json_str(&content, catalog)
            .with_context(|| format!("Invalid byte table: {}", path.display()))?;
        debug!(path = %path.display(), entries = table.len(), "Loaded byte table");
        Ok(table)
    }

    /// The embedded table for protocol version 12.
    pub fn builtin(catalog: &KeycodeDb) -> Result<Self> {
        Self::from_json_str(include_str!("qmk_v12.json"), catalog)
            .context("Failed to load embedded byte table")
    }

    /// Value of a code.
    #[must_use]
    pub fn byte(&self, code: &str) -> Option<u16> {
        self.key_to_byte.get(code).copied()
    }

    /// Code chosen to represent a byte. May be an internal `_QK*` key.
    #[must_use]
    pub fn code(&self, byte: u16) -> Option<&str> {
        self.byte_to_key.get(&byte).map(String::as_str)
    }

    /// All codes, in table order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.key_to_byte.keys().map(String::as_str)
    }

    /// Number of codes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.key_to_byte.len()
    }

    /// Returns true if the table has no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_to_byte.is_empty()
    }

    /// Inclusive byte range stored under `base_key` and `base_key` + `_MAX`.
    #[must_use]
    pub fn range(&self, base_key: &str) -> Option<(u16, u16)> {
        let base = self.byte(base_key)?;
        let max = self.byte(&format!("{base_key}{MAX_SUFFIX}"))?;
        Some((base, max))
    }

    /// Inclusive byte range of a layer family.
    #[must_use]
    pub fn family_bounds(&self, family: LayerFamily) -> Option<(u16, u16)> {
        Some((self.byte(family.base_key())?, self.byte(family.max_key())?))
    }
}
