//! Keycode records and the menus that group them.

use serde::{Deserialize, Serialize};

/// Rendering/behavior tag for a keycode entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeycodeKind {
    /// Wraps another keycode, e.g. `LSFT(kc)`
    Container,
    /// Free-text entry
    Text,
    /// Parameterized layer keycode, e.g. `MO(2)`
    Layer,
}

/// Width hint for a whole menu in the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuWidth {
    /// Size keys to fit their label rather than a fixed key unit
    Label,
}

/// A single keycode in the catalog.
///
/// Records are constructed once when the catalog loads and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keycode {
    /// Display label (may contain `\n` for two-legend keys, e.g. "!\n1")
    pub name: String,
    /// Canonical keycode identifier (e.g. "KC_A", "MO(2)")
    pub code: String,
    /// Tooltip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Precomputed short label for small key caps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Physical key hint used by key testers (e.g. "backspace")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<String>,
    /// Relative key width, 1000 = 1u
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Entry kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<KeycodeKind>,
    /// Layer index for parameterized layer keycodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer: Option<u8>,
}

impl Keycode {
    /// Creates a keycode with only a name and code set.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            title: None,
            short_name: None,
            keys: None,
            width: None,
            kind: None,
            layer: None,
        }
    }

    /// Sets the tooltip.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the short name.
    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }
}

/// A named group of keycodes presented together in the configurator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeMenu {
    /// Stable menu identifier (e.g. "basic", "qmk_lighting")
    pub id: String,
    /// Display label (e.g. "Basic", "QMK Lighting")
    pub label: String,
    /// Width hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<MenuWidth>,
    /// Extra help line shown under the menu label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed: Option<String>,
    /// Ordered keycodes
    pub keycodes: Vec<Keycode>,
}

impl KeycodeMenu {
    /// Returns the first keycode with the given code.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Keycode> {
        self.keycodes.iter().find(|k| k.code == code)
    }

    /// Returns the first code that appears more than once in this menu.
    #[must_use]
    pub fn duplicate_code(&self) -> Option<&str> {
        let mut seen = std::collections::HashSet::new();
        self.keycodes
            .iter()
            .map(|k| k.code.as_str())
            .find(|code| !seen.insert(*code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_builder() {
        let keycode = Keycode::new("Backspace", "KC_BSPC")
            .with_short_name("Bksp")
            .with_title("Delete backwards");
        assert_eq!(keycode.code, "KC_BSPC");
        assert_eq!(keycode.short_name.as_deref(), Some("Bksp"));
        assert_eq!(keycode.title.as_deref(), Some("Delete backwards"));
        assert!(keycode.kind.is_none());
    }

    #[test]
    fn test_keycode_serde_skips_empty_fields() {
        let json = serde_json::to_value(Keycode::new("A", "KC_A")).unwrap();
        assert_eq!(json["name"], "A");
        assert_eq!(json["code"], "KC_A");
        assert!(json.get("title").is_none());
        assert!(json.get("layer").is_none());
    }

    #[test]
    fn test_keycode_kind_deserialize() {
        let keycode: Keycode =
            serde_json::from_str(r#"{"name":"MO","code":"MO(layer)","kind":"layer","layer":0}"#)
                .unwrap();
        assert_eq!(keycode.kind, Some(KeycodeKind::Layer));
        assert_eq!(keycode.layer, Some(0));
    }

    #[test]
    fn test_menu_duplicate_code() {
        let mut menu = KeycodeMenu {
            id: "test".to_string(),
            label: "Test".to_string(),
            width: None,
            detailed: None,
            keycodes: vec![Keycode::new("A", "KC_A"), Keycode::new("B", "KC_B")],
        };
        assert_eq!(menu.duplicate_code(), None);
        assert_eq!(menu.get("KC_B").map(|k| k.name.as_str()), Some("B"));

        menu.keycodes.push(Keycode::new("A again", "KC_A"));
        assert_eq!(menu.duplicate_code(), Some("KC_A"));
    }
}
