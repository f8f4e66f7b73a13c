//! Keyboard capability descriptors used to select catalog menus.

use serde::{Deserialize, Serialize};

/// Built-in keycode module a keyboard can declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeycodeModule {
    /// Basic, media, macro, layer and special keycodes
    #[serde(alias = "via/keycodes/default")]
    Default,
    /// WT (Wilba Tech) lighting keycodes
    #[serde(alias = "via/keycodes/wt_lighting")]
    WtLighting,
    /// Stock QMK backlight/RGB keycodes
    #[serde(alias = "via/keycodes/qmk_lighting")]
    QmkLighting,
}

impl KeycodeModule {
    /// Menu ids this module contributes to the picker.
    #[must_use]
    pub const fn menu_ids(self) -> &'static [&'static str] {
        match self {
            Self::Default => &["basic", "media", "macro", "layers", "special"],
            Self::WtLighting => &["lighting"],
            Self::QmkLighting => &["qmk_lighting"],
        }
    }

    /// Parses a module name as written in keyboard definitions or on the CLI.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        let name = name.strip_prefix("via/keycodes/").unwrap_or(name);
        match name {
            "default" => Some(Self::Default),
            "wt_lighting" => Some(Self::WtLighting),
            "qmk_lighting" => Some(Self::QmkLighting),
            _ => None,
        }
    }
}

/// Which lighting keycodes a v2 keyboard definition exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingKeycodes {
    /// No lighting keycodes
    None,
    /// Stock QMK lighting keycodes
    Qmk,
    /// WT lighting keycodes
    Wt,
}

/// Keyboard-specific name for one of the `CUSTOM(n)` keycodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomKeycode {
    /// Display label
    pub name: String,
    /// Tooltip
    #[serde(default)]
    pub title: Option<String>,
    /// Short label for small key caps
    #[serde(default)]
    pub short_name: Option<String>,
}

/// What a particular keyboard supports, as far as the keycode picker cares.
///
/// An empty descriptor (no modules, no custom keycodes) selects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardCapabilities {
    /// Declared keycode modules
    pub modules: Vec<KeycodeModule>,
    /// Number of dynamic macros on the device; `None` keeps all catalog macros
    #[serde(default)]
    pub macro_count: Option<u8>,
    /// Names for the keyboard's `CUSTOM(n)` keycodes, in index order
    #[serde(default)]
    pub custom_keycodes: Vec<CustomKeycode>,
}

impl KeyboardCapabilities {
    /// Capabilities of a plain keyboard: the default module only.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_modules([KeycodeModule::Default])
    }

    /// Builds capabilities from a list of modules.
    pub fn from_modules(modules: impl IntoIterator<Item = KeycodeModule>) -> Self {
        Self {
            modules: modules.into_iter().collect(),
            macro_count: None,
            custom_keycodes: Vec::new(),
        }
    }

    /// Builds capabilities the way v2 definitions imply them: the default
    /// module plus whichever lighting module the lighting preset selects.
    #[must_use]
    pub fn from_lighting(lighting: LightingKeycodes) -> Self {
        let mut modules = vec![KeycodeModule::Default];
        match lighting {
            LightingKeycodes::None => {}
            LightingKeycodes::Qmk => modules.push(KeycodeModule::QmkLighting),
            LightingKeycodes::Wt => modules.push(KeycodeModule::WtLighting),
        }
        Self::from_modules(modules)
    }

    /// Sets the device macro count.
    #[must_use]
    pub fn with_macro_count(mut self, count: u8) -> Self {
        self.macro_count = Some(count);
        self
    }

    /// Sets the custom keycode names.
    #[must_use]
    pub fn with_custom_keycodes(mut self, custom: Vec<CustomKeycode>) -> Self {
        self.custom_keycodes = custom;
        self
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.custom_keycodes.is_empty()
    }

    /// Menu ids selected by these capabilities, in module order, without repeats.
    #[must_use]
    pub fn menu_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = Vec::new();
        for module in &self.modules {
            for id in module.menu_ids() {
                if !ids.contains(id) {
                    ids.push(id);
                }
            }
        }
        if !self.custom_keycodes.is_empty() {
            ids.push("custom");
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_parse() {
        assert_eq!(KeycodeModule::parse("default"), Some(KeycodeModule::Default));
        assert_eq!(
            KeycodeModule::parse("via/keycodes/qmk_lighting"),
            Some(KeycodeModule::QmkLighting)
        );
        assert_eq!(KeycodeModule::parse(" wt_lighting "), Some(KeycodeModule::WtLighting));
        assert_eq!(KeycodeModule::parse("rgb"), None);
    }

    #[test]
    fn test_module_deserialize_alias() {
        let modules: Vec<KeycodeModule> =
            serde_json::from_str(r#"["default", "via/keycodes/wt_lighting"]"#).unwrap();
        assert_eq!(modules, vec![KeycodeModule::Default, KeycodeModule::WtLighting]);
    }

    #[test]
    fn test_from_lighting() {
        assert_eq!(
            KeyboardCapabilities::from_lighting(LightingKeycodes::None).menu_ids(),
            vec!["basic", "media", "macro", "layers", "special"]
        );
        assert!(KeyboardCapabilities::from_lighting(LightingKeycodes::Qmk)
            .menu_ids()
            .contains(&"qmk_lighting"));
        assert!(KeyboardCapabilities::from_lighting(LightingKeycodes::Wt)
            .menu_ids()
            .contains(&"lighting"));
    }

    #[test]
    fn test_empty_capabilities() {
        let caps = KeyboardCapabilities::default();
        assert!(caps.is_empty());
        assert!(caps.menu_ids().is_empty());
    }

    #[test]
    fn test_menu_ids_deduplicated() {
        let caps =
            KeyboardCapabilities::from_modules([KeycodeModule::Default, KeycodeModule::Default]);
        assert_eq!(caps.menu_ids().len(), 5);
    }

    #[test]
    fn test_custom_keycodes_add_custom_menu() {
        let caps = KeyboardCapabilities::default().with_custom_keycodes(vec![CustomKeycode {
            name: "Knob".to_string(),
            title: None,
            short_name: None,
        }]);
        assert!(!caps.is_empty());
        assert_eq!(caps.menu_ids(), vec!["custom"]);
    }
}
