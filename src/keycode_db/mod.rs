//! Keycode catalog, label classification and display names.
//!
//! This module provides access to the embedded keycode catalog, the
//! per-keyboard menu filter, and ranked search for the keycode picker.

pub mod display;
pub mod labels;

use crate::models::{KeyboardCapabilities, Keycode, KeycodeMenu, MenuWidth};
use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Number of layer keycodes generated from each layer template.
pub const LAYER_TEMPLATE_COUNT: u8 = 10;

/// Placeholder replaced by the layer index in layer templates.
const LAYER_PLACEHOLDER: &str = "layer";

/// Menu schema from catalog.json.
#[derive(Debug, Deserialize)]
struct MenuSource {
    id: String,
    label: String,
    #[serde(default)]
    width: Option<MenuWidth>,
    #[serde(default)]
    detailed: Option<String>,
    keycodes: Vec<Keycode>,
    /// Entries like `MO(layer)` expanded into `MO(0)`..`MO(9)`
    #[serde(default)]
    layer_templates: Vec<Keycode>,
}

/// Catalog schema from catalog.json. The top-level `version` is not read.
#[derive(Debug, Deserialize)]
struct CatalogSource {
    menus: Vec<MenuSource>,
}

static CATALOG: OnceCell<KeycodeDb> = OnceCell::new();

/// The keycode catalog with fast lookup and search.
///
/// The catalog is embedded in the binary at compile time. [`KeycodeDb::global`]
/// builds it once per process; [`KeycodeDb::load`] builds a fresh copy.
#[derive(Debug, Clone)]
pub struct KeycodeDb {
    /// Menus in picker order
    menus: Vec<KeycodeMenu>,
    /// First occurrence of each code as (menu index, keycode index)
    lookup: HashMap<String, (usize, usize)>,
}

impl KeycodeDb {
    /// Loads the catalog from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("catalog.json");
        let source: CatalogSource =
            serde_json::from_str(json_data).context("Failed to parse embedded catalog.json")?;
        Self::from_menus(source.menus.into_iter().map(expand_menu).collect())
    }

    /// Returns the process-wide catalog, loading it on first use.
    pub fn global() -> Result<&'static Self> {
        CATALOG.get_or_try_init(Self::load)
    }

    /// Builds a catalog from already-expanded menus.
    ///
    /// Fails if a code appears twice within one menu.
    pub fn from_menus(menus: Vec<KeycodeMenu>) -> Result<Self> {
        let mut lookup = HashMap::new();

        for (menu_idx, menu) in menus.iter().enumerate() {
            if let Some(code) = menu.duplicate_code() {
                anyhow::bail!("Duplicate keycode '{}' in menu '{}'", code, menu.id);
            }
            for (key_idx, keycode) in menu.keycodes.iter().enumerate() {
                lookup
                    .entry(keycode.code.clone())
                    .or_insert((menu_idx, key_idx));
            }
        }

        debug!(
            menus = menus.len(),
            keycodes = lookup.len(),
            "Loaded keycode catalog"
        );

        Ok(Self { menus, lookup })
    }

    /// All menus in picker order.
    #[must_use]
    pub fn menus(&self) -> &[KeycodeMenu] {
        &self.menus
    }

    /// Gets a menu by id.
    #[must_use]
    pub fn menu(&self, id: &str) -> Option<&KeycodeMenu> {
        self.menus.iter().find(|m| m.id == id)
    }

    /// Every keycode of every menu, flattened in picker order.
    ///
    /// Codes shared between menus appear once per menu.
    pub fn keycodes(&self) -> impl Iterator<Item = &Keycode> {
        self.menus.iter().flat_map(|m| m.keycodes.iter())
    }

    /// Gets the first keycode with the given code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Keycode> {
        let (menu_idx, key_idx) = self.lookup.get(code)?;
        self.menus.get(*menu_idx)?.keycodes.get(*key_idx)
    }

    /// Returns true if the code appears in any menu.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.lookup.contains_key(code)
    }

    /// Gets the total number of distinct codes.
    #[must_use]
    pub fn keycode_count(&self) -> usize {
        self.lookup.len()
    }

    /// Searches keycodes by code, name or title (case-insensitive).
    ///
    /// Each distinct code is returned once, ranked as in [`search_keycodes`].
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Keycode> {
        let unique = self
            .keycodes()
            .filter(|k| self.get(&k.code).is_some_and(|first| std::ptr::eq(first, *k)));
        search_keycodes(unique, query)
    }

    /// Searches within a single menu.
    #[must_use]
    pub fn search_in_menu(&self, query: &str, menu_id: &str) -> Vec<&Keycode> {
        let Some(menu) = self.menu(menu_id) else {
            return Vec::new();
        };
        self.search(query)
            .into_iter()
            .filter(|k| menu.get(&k.code).is_some())
            .collect()
    }

    /// Selects the keycodes a keyboard supports, sorted by code.
    ///
    /// Menus are chosen from the keyboard's modules. When the keyboard
    /// declares a macro count, only `MACRO(n)` with `n < count` are kept.
    /// When it names custom keycodes, that many `CUSTOM(n)` entries are kept
    /// and renamed.
    #[must_use]
    pub fn keycodes_for_keyboard(&self, capabilities: &KeyboardCapabilities) -> Vec<Keycode> {
        let menu_ids = capabilities.menu_ids();

        let mut keycodes: Vec<Keycode> = self
            .menus
            .iter()
            .filter(|menu| menu_ids.contains(&menu.id.as_str()))
            .flat_map(|menu| match menu.id.as_str() {
                "macro" => filter_macros(menu, capabilities.macro_count),
                "custom" => rename_custom(menu, capabilities),
                _ => menu.keycodes.clone(),
            })
            .collect();

        keycodes.sort_by(|a, b| a.code.cmp(&b.code));
        keycodes
    }

    /// Builds the "Other" menu: codes a device table knows about that the
    /// catalog does not, skipping internal `_QK*` entries.
    pub fn other_menu<'a>(&self, table_codes: impl IntoIterator<Item = &'a str>) -> KeycodeMenu {
        let keycodes = table_codes
            .into_iter()
            .filter(|code| !code.starts_with("_QK"))
            .filter(|code| !self.contains(code))
            .map(|code| Keycode::new(code.replacen("KC_", "", 1).replace('_', " "), code))
            .collect();

        KeycodeMenu {
            id: "other".to_string(),
            label: "Other".to_string(),
            width: None,
            detailed: None,
            keycodes,
        }
    }
}

/// Ranks keycodes against a case-insensitive query.
///
/// Results are ordered by relevance: exact match, prefix match,
/// substring match in code or name, then substring match in the title.
/// Input order is kept within a tier. An empty query returns everything.
pub fn search_keycodes<'a>(
    keycodes: impl IntoIterator<Item = &'a Keycode>,
    query: &str,
) -> Vec<&'a Keycode> {
    if query.is_empty() {
        return keycodes.into_iter().collect();
    }

    let query_lower = query.to_lowercase();
    let mut results: Vec<(&Keycode, i32)> = keycodes
        .into_iter()
        .filter_map(|keycode| {
            let code_lower = keycode.code.to_lowercase();
            let name_lower = keycode.name.to_lowercase();
            let title_lower = keycode
                .title
                .as_ref()
                .map(|t| t.to_lowercase())
                .unwrap_or_default();

            if code_lower == query_lower || name_lower == query_lower {
                return Some((keycode, 100));
            }

            if code_lower.starts_with(&query_lower) || name_lower.starts_with(&query_lower) {
                return Some((keycode, 50));
            }

            if code_lower.contains(&query_lower) || name_lower.contains(&query_lower) {
                return Some((keycode, 10));
            }

            if title_lower.contains(&query_lower) {
                return Some((keycode, 5));
            }

            None
        })
        .collect();

    // Stable sort keeps input order within a relevance tier
    results.sort_by(|a, b| b.1.cmp(&a.1));

    results.into_iter().map(|(keycode, _)| keycode).collect()
}

/// Expands the layer templates of a menu source and appends them after the
/// menu's literal keycodes.
fn expand_menu(source: MenuSource) -> KeycodeMenu {
    let mut keycodes = source.keycodes;

    for template in &source.layer_templates {
        for idx in 0..LAYER_TEMPLATE_COUNT {
            let mut keycode = template.clone();
            keycode.name = format!("{}({})", template.name, idx);
            keycode.code = template
                .code
                .replacen(LAYER_PLACEHOLDER, &idx.to_string(), 1);
            keycode.title = Some(
                template
                    .title
                    .as_deref()
                    .unwrap_or_default()
                    .replacen(LAYER_PLACEHOLDER, &format!("layer {idx}"), 1),
            );
            keycode.layer = Some(idx);
            keycodes.push(keycode);
        }
    }

    KeycodeMenu {
        id: source.id,
        label: source.label,
        width: source.width,
        detailed: source.detailed,
        keycodes,
    }
}

/// Parses the index of a `MACRO(n)` code.
fn macro_index(code: &str) -> Option<u32> {
    code.strip_prefix("MACRO(")?.strip_suffix(')')?.parse().ok()
}

fn filter_macros(menu: &KeycodeMenu, macro_count: Option<u8>) -> Vec<Keycode> {
    let Some(count) = macro_count else {
        return menu.keycodes.clone();
    };
    menu.keycodes
        .iter()
        .filter(|k| macro_index(&k.code).map_or(true, |idx| idx < u32::from(count)))
        .cloned()
        .collect()
}

fn rename_custom(menu: &KeycodeMenu, capabilities: &KeyboardCapabilities) -> Vec<Keycode> {
    menu.keycodes
        .iter()
        .zip(&capabilities.custom_keycodes)
        .map(|(keycode, custom)| Keycode {
            name: custom.name.clone(),
            title: custom.title.clone().or_else(|| keycode.title.clone()),
            short_name: custom.short_name.clone(),
            ..keycode.clone()
        })
        .collect()
}
