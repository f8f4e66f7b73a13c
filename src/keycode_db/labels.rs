//! Character-class tests for key-cap labels.
//!
//! Renderers use these to pick fonts and legend placement. Lengths are
//! counted in chars, so `"÷"` is a single-character label.

use serde::Serialize;

const ARROW_GLYPHS: &[char] = &['🠗', '🠕', '🠖', '🠔', '←', '↑', '→', '↓'];
const CENTERED_SYMBOLS: &[char] = &['-', '+', '.', '÷', '×'];
const TOP_LEGENDS: &str = "~!@#$%^&*()_+|{}:\"<>?";
const SHIFTED_SYMBOLS: &str = "!@#$%^&*()_+|~{}:\"<>?";

fn single_char(label: &str) -> Option<char> {
    let mut chars = label.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn is_single_char(label: &str) -> bool {
    single_char(label).is_some()
}

/// Single ASCII letter.
#[must_use]
pub fn is_alpha(label: &str) -> bool {
    single_char(label).is_some_and(|c| c.is_ascii_alphabetic())
}

/// Single digit (or apostrophe) as printed on numpad keys.
#[must_use]
pub fn is_numpad_number(label: &str) -> bool {
    single_char(label).is_some_and(|c| c.is_ascii_digit() || c == '\'')
}

/// Label ending in an arrow glyph.
#[must_use]
pub fn is_arrow_key(label: &str) -> bool {
    label.chars().last().is_some_and(|c| ARROW_GLYPHS.contains(&c))
}

/// Single centered numpad operator.
#[must_use]
pub fn is_numpad_symbol(label: &str) -> bool {
    single_char(label).is_some_and(|c| CENTERED_SYMBOLS.contains(&c))
}

/// Two-legend label such as `"!\n1"`: more than one char, led by a shifted symbol.
#[must_use]
pub fn is_multi_legend(label: &str) -> bool {
    !is_single_char(label) && label.chars().next().is_some_and(|c| TOP_LEGENDS.contains(c))
}

/// Single digit or shifted symbol.
#[must_use]
pub fn is_numeric_or_shifted_symbol(label: &str) -> bool {
    single_char(label).is_some_and(|c| SHIFTED_SYMBOLS.contains(c) || c.is_ascii_digit())
}

/// More than one char, led by a shifted symbol.
#[must_use]
pub fn is_numeric_symbol(label: &str) -> bool {
    !is_single_char(label)
        && label
            .chars()
            .next()
            .is_some_and(|c| SHIFTED_SYMBOLS.contains(c))
}

/// Coarse class of a label, for callers that want a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelClass {
    /// See [`is_alpha`]
    Alpha,
    /// See [`is_numpad_number`]
    NumpadNumber,
    /// See [`is_arrow_key`]
    Arrow,
    /// See [`is_numpad_symbol`]
    NumpadSymbol,
    /// See [`is_multi_legend`]
    MultiLegend,
    /// See [`is_numeric_or_shifted_symbol`]
    NumericOrShiftedSymbol,
    /// See [`is_numeric_symbol`]
    NumericSymbol,
    /// None of the above
    Other,
}

impl LabelClass {
    /// Snake-case name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::NumpadNumber => "numpad_number",
            Self::Arrow => "arrow",
            Self::NumpadSymbol => "numpad_symbol",
            Self::MultiLegend => "multi_legend",
            Self::NumericOrShiftedSymbol => "numeric_or_shifted_symbol",
            Self::NumericSymbol => "numeric_symbol",
            Self::Other => "other",
        }
    }
}

/// Returns the first class `label` belongs to, testing in declaration order.
#[must_use]
pub fn classify(label: &str) -> LabelClass {
    if is_alpha(label) {
        LabelClass::Alpha
    } else if is_numpad_number(label) {
        LabelClass::NumpadNumber
    } else if is_arrow_key(label) {
        LabelClass::Arrow
    } else if is_numpad_symbol(label) {
        LabelClass::NumpadSymbol
    } else if is_multi_legend(label) {
        LabelClass::MultiLegend
    } else if is_numeric_or_shifted_symbol(label) {
        LabelClass::NumericOrShiftedSymbol
    } else if is_numeric_symbol(label) {
        LabelClass::NumericSymbol
    } else {
        LabelClass::Other
    }
}
