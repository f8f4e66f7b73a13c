//! Parameterized keycode families such as `MO(n)` and `MACRO(n)`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Matches `NAME(digits)` anywhere in a code.
static FAMILY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z]+)\((\d+)\)").expect("family pattern is valid"));

/// A keycode family: a run of bytes starting at a base offset and capped
/// at a maximum, addressed as `PREFIX(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerFamily {
    /// `TO(n)`: switch to layer n
    To,
    /// `MO(n)`: momentary layer n
    Momentary,
    /// `DF(n)`: set default layer
    DefaultLayer,
    /// `TG(n)`: toggle layer
    Toggle,
    /// `OSL(n)`: one-shot layer
    OneShot,
    /// `TT(n)`: layer tap-toggle
    TapToggle,
    /// `CUSTOM(n)`: keyboard-defined keycode
    Custom,
    /// `MACRO(n)`: dynamic macro
    Macro,
}

impl LayerFamily {
    /// All families, in the order byte ranges are tested when decoding.
    pub const ALL: [Self; 8] = [
        Self::To,
        Self::Momentary,
        Self::DefaultLayer,
        Self::Toggle,
        Self::OneShot,
        Self::TapToggle,
        Self::Custom,
        Self::Macro,
    ];

    /// Function-style prefix used in string codes.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::To => "TO",
            Self::Momentary => "MO",
            Self::DefaultLayer => "DF",
            Self::Toggle => "TG",
            Self::OneShot => "OSL",
            Self::TapToggle => "TT",
            Self::Custom => "CUSTOM",
            Self::Macro => "MACRO",
        }
    }

    /// Byte table key holding the family's first byte.
    #[must_use]
    pub const fn base_key(self) -> &'static str {
        match self {
            Self::To => "_QK_TO",
            Self::Momentary => "_QK_MOMENTARY",
            Self::DefaultLayer => "_QK_DEF_LAYER",
            Self::Toggle => "_QK_TOGGLE_LAYER",
            Self::OneShot => "_QK_ONE_SHOT_LAYER",
            Self::TapToggle => "_QK_LAYER_TAP_TOGGLE",
            Self::Custom => "_QK_KB",
            Self::Macro => "_QK_MACRO",
        }
    }

    /// Byte table key holding the family's last byte.
    #[must_use]
    pub const fn max_key(self) -> &'static str {
        match self {
            Self::To => "_QK_TO_MAX",
            Self::Momentary => "_QK_MOMENTARY_MAX",
            Self::DefaultLayer => "_QK_DEF_LAYER_MAX",
            Self::Toggle => "_QK_TOGGLE_LAYER_MAX",
            Self::OneShot => "_QK_ONE_SHOT_LAYER_MAX",
            Self::TapToggle => "_QK_LAYER_TAP_TOGGLE_MAX",
            Self::Custom => "_QK_KB_MAX",
            Self::Macro => "_QK_MACRO_MAX",
        }
    }

    /// Looks up a family by its code prefix (case-sensitive).
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.prefix() == prefix)
    }

    /// Formats the string code for index `n`.
    #[must_use]
    pub fn code(self, n: u16) -> String {
        format!("{}({})", self.prefix(), n)
    }
}

/// Splits a `NAME(digits)` code into its raw name and index text.
///
/// The match is unanchored: the first `NAME(digits)` run anywhere in the
/// code is used.
#[must_use]
pub fn parse_family_code(code: &str) -> Option<(&str, &str)> {
    let caps = FAMILY_PATTERN.captures(code)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Returns true if the code contains a `NAME(digits)` run.
#[must_use]
pub fn is_family_code(code: &str) -> bool {
    FAMILY_PATTERN.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for family in LayerFamily::ALL {
            assert_eq!(LayerFamily::from_prefix(family.prefix()), Some(family));
            assert!(family.max_key().starts_with(family.base_key()));
        }
        assert_eq!(LayerFamily::from_prefix("mo"), None);
        assert_eq!(LayerFamily::from_prefix("LT"), None);
    }

    #[test]
    fn test_parse_family_code() {
        assert_eq!(parse_family_code("MO(3)"), Some(("MO", "3")));
        assert_eq!(parse_family_code("MACRO(12)"), Some(("MACRO", "12")));
        assert_eq!(parse_family_code("FOO(7)"), Some(("FOO", "7")));
        assert_eq!(parse_family_code("LT(1,KC_SPC)"), None);
        assert_eq!(parse_family_code("S(KC_1)"), None);
        assert_eq!(parse_family_code("KC_A"), None);
    }

    #[test]
    fn test_family_code_format() {
        assert_eq!(LayerFamily::OneShot.code(4), "OSL(4)");
        assert!(is_family_code("TT(0)"));
        assert!(!is_family_code("TT(x)"));
    }
}
