//! Composite keycodes: modifier wrappers, mod-taps and layer-taps.
//!
//! These codes take another keycode as an argument (`LCTL(KC_A)`,
//! `LT(1,KC_SPC)`) and are packed QMK style: flags in the high byte, the
//! basic keycode in the low byte.

use super::byte_table::ByteTable;

/// Encodes and decodes codes the byte table cannot express directly.
///
/// The codec consults the translator after direct lookups and layer
/// families have failed, in both directions.
pub trait AdvancedKeycodes {
    /// Encodes a composite code, or `None` if the code is not one.
    fn encode(&self, code: &str, table: &ByteTable) -> Option<u16>;

    /// Decodes a byte into a composite code, or `None` if it is not one.
    fn decode(&self, byte: u16, table: &ByteTable) -> Option<String>;
}

impl<T: AdvancedKeycodes + ?Sized> AdvancedKeycodes for Box<T> {
    fn encode(&self, code: &str, table: &ByteTable) -> Option<u16> {
        (**self).encode(code, table)
    }

    fn decode(&self, byte: u16, table: &ByteTable) -> Option<String> {
        (**self).decode(byte, table)
    }
}

/// Translator that knows no composite codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdvancedKeycodes;

impl AdvancedKeycodes for NoAdvancedKeycodes {
    fn encode(&self, _code: &str, _table: &ByteTable) -> Option<u16> {
        None
    }

    fn decode(&self, _byte: u16, _table: &ByteTable) -> Option<String> {
        None
    }
}

/// Translator for QMK modifier, mod-tap and layer-tap codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct QmkAdvancedKeycodes;

const MODS_RANGE: &str = "_QK_MODS";
const MOD_TAP_RANGE: &str = "_QK_MOD_TAP";
const LAYER_TAP_RANGE: &str = "_QK_LAYER_TAP";

const MOD_MASK: u8 = 0x1f;
const MOD_RIGHT: u8 = 0x10;
const LAYER_TAP_MAX_LAYER: u8 = 0x0f;

/// Modifier bits in nesting order, per side.
const MOD_BITS: [u8; 4] = [0x01, 0x02, 0x04, 0x08];
const LEFT_MODS: [&str; 4] = ["LCTL", "LSFT", "LALT", "LGUI"];
const RIGHT_MODS: [&str; 4] = ["RCTL", "RSFT", "RALT", "RGUI"];

/// Modifier wrapper functions. Decoding uses the first name listed for a
/// mask, so canonical names come before aliases.
const MOD_FUNCTIONS: &[(&str, u8)] = &[
    ("LCTL", 0x01),
    ("S", 0x02),
    ("LALT", 0x04),
    ("LGUI", 0x08),
    ("RCTL", 0x11),
    ("RSFT", 0x12),
    ("RALT", 0x14),
    ("RGUI", 0x18),
    ("HYPR", 0x0f),
    ("MEH", 0x07),
    ("LCAG", 0x0d),
    ("SCMD", 0x0a),
    ("LCA", 0x05),
    ("ALTG", 0x15),
    ("LSFT", 0x02),
    ("C", 0x01),
    ("A", 0x04),
    ("G", 0x08),
    ("LOPT", 0x04),
    ("LCMD", 0x08),
    ("LWIN", 0x08),
    ("ROPT", 0x14),
    ("ALGR", 0x14),
    ("RCMD", 0x18),
    ("RWIN", 0x18),
    ("SGUI", 0x0a),
];

/// Named mod-tap functions, canonical names first.
const MOD_TAP_FUNCTIONS: &[(&str, u8)] = &[
    ("LCTL_T", 0x01),
    ("LSFT_T", 0x02),
    ("LALT_T", 0x04),
    ("LGUI_T", 0x08),
    ("RCTL_T", 0x11),
    ("RSFT_T", 0x12),
    ("RALT_T", 0x14),
    ("RGUI_T", 0x18),
    ("C_S_T", 0x03),
    ("ALL_T", 0x0f),
    ("MEH_T", 0x07),
    ("LCAG_T", 0x0d),
    ("RCAG_T", 0x1d),
    ("SCMD_T", 0x0a),
    ("LCA_T", 0x05),
    ("HYPR_T", 0x0f),
    ("SGUI_T", 0x0a),
    ("LOPT_T", 0x04),
    ("LCMD_T", 0x08),
    ("LWIN_T", 0x08),
    ("ROPT_T", 0x14),
    ("ALGR_T", 0x14),
    ("RCMD_T", 0x18),
    ("RWIN_T", 0x18),
];

/// `MOD_*` constants accepted inside `MT(...)`.
const MOD_CONSTANTS: &[(&str, u8)] = &[
    ("MOD_LCTL", 0x01),
    ("MOD_LSFT", 0x02),
    ("MOD_LALT", 0x04),
    ("MOD_LGUI", 0x08),
    ("MOD_RCTL", 0x11),
    ("MOD_RSFT", 0x12),
    ("MOD_RALT", 0x14),
    ("MOD_RGUI", 0x18),
    ("MOD_HYPR", 0x0f),
    ("MOD_MEH", 0x07),
];

fn mask_for(names: &[(&str, u8)], name: &str) -> Option<u8> {
    names.iter().find(|(n, _)| *n == name).map(|(_, mask)| *mask)
}

fn name_for(names: &[(&'static str, u8)], mask: u8) -> Option<&'static str> {
    names.iter().find(|(_, m)| *m == mask).map(|(name, _)| *name)
}

/// Single-modifier names set in `mask`, in nesting order.
fn single_mod_names(mask: u8) -> Vec<&'static str> {
    let side = if mask & MOD_RIGHT == 0 {
        &LEFT_MODS
    } else {
        &RIGHT_MODS
    };
    MOD_BITS
        .iter()
        .zip(side)
        .filter(|(bit, _)| mask & **bit != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Splits `NAME(inner)` into name and inner text.
fn split_call(expr: &str) -> Option<(&str, &str)> {
    let expr = expr.trim();
    let open = expr.find('(')?;
    let name = expr.get(..open)?;
    let inner = expr.strip_suffix(')')?.get(open + 1..)?;
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, inner))
}

/// Splits arguments on top-level commas.
fn split_args(inner: &str) -> Vec<&str> {
    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                args.push(inner[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    args.push(inner[start..].trim());
    args
}

fn basic_byte(code: &str, table: &ByteTable) -> Option<u8> {
    table.byte(code.trim()).and_then(|b| u8::try_from(b).ok())
}

fn basic_code(byte: u8, table: &ByteTable) -> Option<&str> {
    table
        .code(u16::from(byte))
        .filter(|code| !code.starts_with("_QK"))
}

fn pack(base: u16, high: u8, basic: u8) -> u16 {
    base | u16::from_be_bytes([high, basic])
}

fn in_range(table: &ByteTable, key: &str, byte: u16) -> Option<u16> {
    let (base, max) = table.range(key)?;
    (base..=max).contains(&byte).then_some(base)
}

fn checked_in_range(table: &ByteTable, key: &str, byte: u16) -> Option<u16> {
    in_range(table, key, byte).map(|_| byte)
}

impl QmkAdvancedKeycodes {
    /// Peels nested modifier wrappers off `expr`, returning the combined
    /// mask and the basic keycode inside.
    fn unwrap_mods(expr: &str, table: &ByteTable) -> Option<(u8, u8)> {
        if let Some(basic) = basic_byte(expr, table) {
            return Some((0, basic));
        }
        let (name, inner) = split_call(expr)?;
        let mask = mask_for(MOD_FUNCTIONS, name)?;
        let (inner_mask, basic) = Self::unwrap_mods(inner, table)?;
        Some((mask | inner_mask, basic))
    }

    fn encode_mods(code: &str, table: &ByteTable) -> Option<u16> {
        let (mask, basic) = Self::unwrap_mods(code, table)?;
        if mask == 0 {
            return None;
        }
        checked_in_range(table, MODS_RANGE, pack(0, mask, basic))
    }

    fn encode_mod_tap(mask: u8, kc: &str, table: &ByteTable) -> Option<u16> {
        let basic = basic_byte(kc, table)?;
        let (base, _) = table.range(MOD_TAP_RANGE)?;
        checked_in_range(table, MOD_TAP_RANGE, pack(base, mask & MOD_MASK, basic))
    }

    fn encode_mt(inner: &str, table: &ByteTable) -> Option<u16> {
        let args = split_args(inner);
        let &[mods, kc] = args.as_slice() else {
            return None;
        };
        let mask = mods
            .split('|')
            .map(|m| mask_for(MOD_CONSTANTS, m.trim()))
            .try_fold(0u8, |acc, m| m.map(|m| acc | m))?;
        if mask == 0 {
            return None;
        }
        Self::encode_mod_tap(mask, kc, table)
    }

    fn encode_layer_tap(inner: &str, table: &ByteTable) -> Option<u16> {
        let args = split_args(inner);
        let &[layer, kc] = args.as_slice() else {
            return None;
        };
        let layer: u8 = layer.parse().ok().filter(|l| *l <= LAYER_TAP_MAX_LAYER)?;
        let basic = basic_byte(kc, table)?;
        let (base, _) = table.range(LAYER_TAP_RANGE)?;
        checked_in_range(table, LAYER_TAP_RANGE, pack(base, layer, basic))
    }

    fn mods_name(mask: u8, basic: &str) -> Option<String> {
        if let Some(name) = name_for(MOD_FUNCTIONS, mask) {
            return Some(format!("{name}({basic})"));
        }
        let names = single_mod_names(mask);
        if names.is_empty() {
            return None;
        }
        Some(
            names
                .iter()
                .rev()
                .fold(basic.to_string(), |acc, name| format!("{name}({acc})")),
        )
    }

    fn mod_tap_name(mask: u8, basic: &str) -> Option<String> {
        if let Some(name) = name_for(MOD_TAP_FUNCTIONS, mask) {
            return Some(format!("{name}({basic})"));
        }
        let names = single_mod_names(mask);
        if names.is_empty() {
            return None;
        }
        let mods: Vec<String> = names.iter().map(|n| format!("MOD_{n}")).collect();
        Some(format!("MT({}, {basic})", mods.join(" | ")))
    }
}

impl AdvancedKeycodes for QmkAdvancedKeycodes {
    fn encode(&self, code: &str, table: &ByteTable) -> Option<u16> {
        let (name, inner) = split_call(code)?;
        match name {
            "LT" => Self::encode_layer_tap(inner, table),
            "MT" => Self::encode_mt(inner, table),
            _ => match mask_for(MOD_TAP_FUNCTIONS, name) {
                Some(mask) => Self::encode_mod_tap(mask, inner, table),
                None => Self::encode_mods(code, table),
            },
        }
    }

    fn decode(&self, byte: u16, table: &ByteTable) -> Option<String> {
        let [_, low] = byte.to_be_bytes();
        let basic = basic_code(low, table)?;

        if in_range(table, MODS_RANGE, byte).is_some() {
            let [high, _] = byte.to_be_bytes();
            return Self::mods_name(high & MOD_MASK, basic);
        }
        if let Some(base) = in_range(table, MOD_TAP_RANGE, byte) {
            let [high, _] = (byte - base).to_be_bytes();
            return Self::mod_tap_name(high & MOD_MASK, basic);
        }
        if let Some(base) = in_range(table, LAYER_TAP_RANGE, byte) {
            let [high, _] = (byte - base).to_be_bytes();
            return Some(format!("LT({},{basic})", high & LAYER_TAP_MAX_LAYER));
        }
        None
    }
}
