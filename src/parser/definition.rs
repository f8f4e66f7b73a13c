//! Keyboard definition reader.
//!
//! Reads the subset of a VIA-style keyboard definition that decides which
//! keycodes the picker offers: the lighting preset (v2), the keycode module
//! list (v3) and custom keycode names.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::{CustomKeycode, KeyboardCapabilities, KeycodeModule, LightingKeycodes};

/// Keyboard definition (simplified for our needs)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardDefinition {
    /// Keyboard name
    #[serde(default)]
    pub name: Option<String>,
    /// v2 lighting preset
    #[serde(default)]
    pub lighting: Option<LightingDefinition>,
    /// v3 keycode modules
    #[serde(default)]
    pub keycodes: Option<Vec<String>>,
    /// Names for `CUSTOM(n)` keycodes
    #[serde(default)]
    pub custom_keycodes: Vec<CustomKeycode>,
}

/// v2 lighting entry: a preset name, or a preset with overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LightingDefinition {
    /// e.g. `"qmk_rgblight"`
    Preset(String),
    /// e.g. `{ "extends": "qmk_backlight", "keycodes": "qmk" }`
    Custom {
        /// Preset the entry starts from
        extends: Option<String>,
        /// Overrides the preset's lighting keycodes (`qmk`, `wt`, `none`)
        keycodes: Option<String>,
    },
}

impl LightingDefinition {
    /// Lighting keycodes this entry selects.
    #[must_use]
    pub fn keycodes(&self) -> LightingKeycodes {
        match self {
            Self::Preset(preset) => preset_keycodes(preset),
            Self::Custom { extends, keycodes } => keycodes
                .as_deref()
                .map(lighting_keycodes_override)
                .or_else(|| extends.as_deref().map(preset_keycodes))
                .unwrap_or(LightingKeycodes::None),
        }
    }
}

/// Lighting keycodes implied by a preset name.
///
/// `qmk_*` presets expose QMK lighting keycodes and `wt_*` presets expose
/// WT lighting keycodes. Everything else, `none` included, exposes none.
#[must_use]
pub fn preset_keycodes(preset: &str) -> LightingKeycodes {
    if preset.starts_with("qmk_") {
        LightingKeycodes::Qmk
    } else if preset.starts_with("wt_") {
        LightingKeycodes::Wt
    } else {
        LightingKeycodes::None
    }
}

fn lighting_keycodes_override(value: &str) -> LightingKeycodes {
    match value {
        "qmk" => LightingKeycodes::Qmk,
        "wt" => LightingKeycodes::Wt,
        _ => LightingKeycodes::None,
    }
}

impl KeyboardDefinition {
    /// Capabilities described by this definition.
    ///
    /// A v3 module list wins over a v2 lighting entry. The default module
    /// is always included. A definition with neither gets the default
    /// module alone.
    #[must_use]
    pub fn capabilities(&self) -> KeyboardCapabilities {
        let capabilities = if let Some(names) = &self.keycodes {
            let mut modules = vec![KeycodeModule::Default];
            for name in names {
                match KeycodeModule::parse(name) {
                    Some(module) if !modules.contains(&module) => modules.push(module),
                    Some(_) => {}
                    None => warn!(module = %name, "Ignoring unknown keycode module"),
                }
            }
            KeyboardCapabilities::from_modules(modules)
        } else if let Some(lighting) = &self.lighting {
            KeyboardCapabilities::from_lighting(lighting.keycodes())
        } else {
            KeyboardCapabilities::standard()
        };

        capabilities.with_custom_keycodes(self.custom_keycodes.clone())
    }
}

/// Parses a keyboard definition from a JSON string.
pub fn parse_definition_str(json: &str) -> Result<KeyboardDefinition> {
    serde_json::from_str(json).context("Failed to parse keyboard definition")
}

/// Parses a keyboard definition file.
pub fn parse_definition(path: &Path) -> Result<KeyboardDefinition> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read keyboard definition: {}", path.display()))?;

    let definition = parse_definition_str(&content)
        .context(format!("Invalid keyboard definition: {}", path.display()))?;

    debug!(
        path = %path.display(),
        name = definition.name.as_deref().unwrap_or("<unnamed>"),
        "Parsed keyboard definition"
    );

    Ok(definition)
}

/// Reads a definition file and returns its capabilities.
pub fn load_capabilities(path: &Path) -> Result<KeyboardCapabilities> {
    Ok(parse_definition(path)?.capabilities())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_preset_keycodes() {
        assert_eq!(preset_keycodes("qmk_rgblight"), LightingKeycodes::Qmk);
        assert_eq!(preset_keycodes("qmk_backlight"), LightingKeycodes::Qmk);
        assert_eq!(preset_keycodes("wt_rgb_backlight"), LightingKeycodes::Wt);
        assert_eq!(preset_keycodes("none"), LightingKeycodes::None);
    }

    #[test]
    fn test_v2_lighting_string() {
        let def = parse_definition_str(r#"{"name": "Pad", "lighting": "wt_mono_backlight"}"#)
            .unwrap();
        assert_eq!(def.name.as_deref(), Some("Pad"));
        let ids = def.capabilities().menu_ids();
        assert!(ids.contains(&"basic"));
        assert!(ids.contains(&"lighting"));
        assert!(!ids.contains(&"qmk_lighting"));
    }

    #[test]
    fn test_v2_lighting_object() {
        let def = parse_definition_str(
            r#"{"lighting": {"extends": "none", "keycodes": "qmk"}}"#,
        )
        .unwrap();
        assert!(def.capabilities().menu_ids().contains(&"qmk_lighting"));

        let def = parse_definition_str(r#"{"lighting": {"extends": "wt_rgb_backlight"}}"#)
            .unwrap();
        assert!(def.capabilities().menu_ids().contains(&"lighting"));
    }

    #[test]
    fn test_v3_keycodes_win() {
        let def = parse_definition_str(
            r#"{"lighting": "wt_rgb_backlight", "keycodes": ["qmk_lighting", "via/keycodes/qmk_lighting", "bogus"]}"#,
        )
        .unwrap();
        let caps = def.capabilities();
        assert_eq!(
            caps.modules,
            vec![KeycodeModule::Default, KeycodeModule::QmkLighting]
        );
    }

    #[test]
    fn test_custom_keycodes() {
        let def = parse_definition_str(
            r#"{"customKeycodes": [{"name": "Knob", "title": "Knob press", "shortName": "Kn"}]}"#,
        )
        .unwrap();
        let caps = def.capabilities();
        assert_eq!(caps.custom_keycodes.len(), 1);
        assert_eq!(caps.custom_keycodes[0].short_name.as_deref(), Some("Kn"));
        assert!(caps.menu_ids().contains(&"custom"));
    }

    #[test]
    fn test_no_lighting_is_standard() {
        let def = parse_definition_str("{}").unwrap();
        assert_eq!(def.capabilities(), KeyboardCapabilities::standard());
    }

    #[test]
    fn test_parse_definition_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.json");
        fs::write(&path, r#"{"name": "Board", "lighting": "qmk_rgblight"}"#).unwrap();

        let caps = load_capabilities(&path).unwrap();
        assert!(caps.menu_ids().contains(&"qmk_lighting"));
    }

    #[test]
    fn test_parse_definition_errors_name_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = parse_definition(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.json"));

        let missing = temp_dir.path().join("missing.json");
        assert!(parse_definition(&missing).is_err());
    }
}
