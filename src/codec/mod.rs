//! Conversion between string keycodes and 16-bit protocol bytes.
//!
//! Encoding tries, in order: the byte table, the `FAMILY(n)` layer
//! families, then the advanced translator. Decoding mirrors that order and
//! falls back to a hex literal, so it never fails.

pub mod advanced;
pub mod byte_table;
pub mod family;

pub use advanced::{AdvancedKeycodes, NoAdvancedKeycodes, QmkAdvancedKeycodes};
pub use byte_table::{ByteTable, TableError};
pub use family::LayerFamily;

use crate::keycode_db::display::short_name_for_keycode;
use crate::keycode_db::KeycodeDb;
use crate::models::KeycodeMenu;
use thiserror::Error;
use tracing::debug;

/// Errors from encoding a string keycode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Nothing could encode the code.
    #[error("keycode not found: {code}")]
    NotFound {
        /// The code that was looked up
        code: String,
    },
    /// The code looks like `NAME(n)` but NAME is not a known family.
    #[error("unknown keycode family '{family}' in {code}")]
    UnknownFamily {
        /// The unrecognized family name
        family: String,
        /// The full code
        code: String,
    },
    /// The byte table lacks the range for a family.
    #[error("byte table has no range for {family:?} (needs {base_key} and {max_key})")]
    MissingFamilyBounds {
        /// The family whose bounds are missing
        family: LayerFamily,
        /// Table key of the range start
        base_key: &'static str,
        /// Table key of the range end
        max_key: &'static str,
    },
}

/// Keycode converter for one byte table and catalog.
#[derive(Debug, Clone)]
pub struct Codec<'db, A = QmkAdvancedKeycodes> {
    catalog: &'db KeycodeDb,
    table: ByteTable,
    advanced: A,
}

impl Codec<'static, QmkAdvancedKeycodes> {
    /// The global catalog with the embedded table and QMK composite codes.
    pub fn builtin() -> anyhow::Result<Self> {
        let catalog = KeycodeDb::global()?;
        Ok(Self::new(catalog, ByteTable::builtin(catalog)?, QmkAdvancedKeycodes))
    }
}

impl<'db, A: AdvancedKeycodes> Codec<'db, A> {
    /// Creates a codec.
    pub const fn new(catalog: &'db KeycodeDb, table: ByteTable, advanced: A) -> Self {
        Self {
            catalog,
            table,
            advanced,
        }
    }

    /// The byte table in use.
    #[must_use]
    pub const fn table(&self) -> &ByteTable {
        &self.table
    }

    /// The catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> &'db KeycodeDb {
        self.catalog
    }

    /// Encodes a string keycode.
    ///
    /// # Errors
    ///
    /// Fails if no table entry, family or composite form matches.
    pub fn byte_for_code(&self, code: &str) -> Result<u16, CodecError> {
        if let Some(byte) = self.table.byte(code) {
            return Ok(byte);
        }

        if let Some((name, index)) = family::parse_family_code(code) {
            let family = LayerFamily::from_prefix(name).ok_or_else(|| CodecError::UnknownFamily {
                family: name.to_string(),
                code: code.to_string(),
            })?;
            let (base, max) =
                self.table
                    .family_bounds(family)
                    .ok_or(CodecError::MissingFamilyBounds {
                        family,
                        base_key: family.base_key(),
                        max_key: family.max_key(),
                    })?;
            // Digits only, so a parse failure means overflow
            let index: u16 = index.parse().unwrap_or(u16::MAX);
            let unclamped = base.saturating_add(index);
            if unclamped > max {
                debug!(code, max, "Family index clamped to range max");
            }
            return Ok(unclamped.min(max));
        }

        self.advanced
            .encode(code, &self.table)
            .ok_or_else(|| CodecError::NotFound {
                code: code.to_string(),
            })
    }

    /// Decodes a byte. Unknown bytes come back as `0x` + lowercase hex.
    #[must_use]
    pub fn code_for_byte(&self, byte: u16) -> String {
        if let Some(code) = self.table.code(byte).filter(|c| !c.starts_with("_QK")) {
            return code.to_string();
        }

        if let Some(code) = self.family_code_for_byte(byte) {
            return code;
        }

        if let Some(code) = self.advanced.decode(byte, &self.table) {
            return code;
        }

        debug!(byte, "No keycode for byte, using hex");
        format!("0x{byte:x}")
    }

    /// Rebuilds `FAMILY(n)` for a byte inside any family range.
    fn family_code_for_byte(&self, byte: u16) -> Option<String> {
        LayerFamily::ALL.into_iter().find_map(|family| {
            let (base, max) = self.table.family_bounds(family)?;
            (base..=max)
                .contains(&byte)
                .then(|| family.code(byte - base))
        })
    }

    /// Returns true if the code can be encoded with this table.
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.table.byte(code).is_some()
            || family::is_family_code(code)
            || self.advanced.encode(code, &self.table).is_some()
    }

    /// Returns true if the byte is a `CUSTOM(n)` keycode.
    #[must_use]
    pub fn is_custom_keycode_byte(&self, byte: u16) -> bool {
        self.family_contains(LayerFamily::Custom, byte)
    }

    /// Index n of a `CUSTOM(n)` byte, counted from the family base.
    #[must_use]
    pub fn custom_keycode_index(&self, byte: u16) -> Option<u16> {
        self.family_offset(LayerFamily::Custom, byte)
    }

    /// Returns true if the byte is a `MACRO(n)` keycode.
    #[must_use]
    pub fn is_macro_keycode_byte(&self, byte: u16) -> bool {
        self.family_contains(LayerFamily::Macro, byte)
    }

    /// Index n of a `MACRO(n)` byte, counted from the family base.
    #[must_use]
    pub fn macro_keycode_index(&self, byte: u16) -> Option<u16> {
        self.family_offset(LayerFamily::Macro, byte)
    }

    fn family_contains(&self, family: LayerFamily, byte: u16) -> bool {
        self.table
            .family_bounds(family)
            .is_some_and(|(base, max)| (base..=max).contains(&byte))
    }

    fn family_offset(&self, family: LayerFamily, byte: u16) -> Option<u16> {
        let (base, _) = self.table.family_bounds(family)?;
        byte.checked_sub(base)
    }

    /// Key cap label for a byte at the given render size.
    ///
    /// Catalog keycodes get their display name; anything else shows the
    /// decoded code.
    #[must_use]
    pub fn label_for_byte(&self, byte: u16, size: u32) -> String {
        let code = self.code_for_byte(byte);
        match self.catalog.get(&code) {
            Some(keycode) => short_name_for_keycode(keycode, size),
            None => code,
        }
    }

    /// Table codes the catalog does not list.
    #[must_use]
    pub fn other_menu(&self) -> KeycodeMenu {
        self.catalog.other_menu(self.table.codes())
    }
}
