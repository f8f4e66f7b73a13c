//! Display names for key caps.
//!
//! Key caps come in different render sizes. Small caps get the
//! precomputed short name; the default size gets a vowel-stripped
//! abbreviation of long names; everything else shows the full name.

use crate::models::Keycode;

/// Render size used when the caller does not specify one.
pub const DEFAULT_LABEL_SIZE: u32 = 100;

/// Largest size at which a precomputed short name is preferred.
pub const SHORT_NAME_MAX_SIZE: u32 = 150;

/// Names longer than this (in chars) are abbreviated at the default size.
const ABBREVIATE_OVER: usize = 5;

/// Abbreviates text by keeping each word's first char and dropping the
/// vowels from the rest, then joining the words without spaces.
///
/// ```
/// use keycat::keycode_db::display::shorten;
///
/// assert_eq!(shorten("Print Screen"), "PrntScrn");
/// assert_eq!(shorten("Backspace"), "Bckspc");
/// ```
#[must_use]
pub fn shorten(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            let mut out = String::new();
            if let Some(first) = chars.next() {
                out.push(first);
            }
            out.extend(
                chars.filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')),
            );
            out
        })
        .collect()
}

/// Picks the label to print on a key cap of the given render size.
///
/// ```
/// use keycat::keycode_db::display::short_name_for_keycode;
/// use keycat::models::Keycode;
///
/// let bspc = Keycode::new("Backspace", "KC_BSPC").with_short_name("Bksp");
/// assert_eq!(short_name_for_keycode(&bspc, 100), "Bksp");
/// assert_eq!(short_name_for_keycode(&bspc, 200), "Backspace");
/// ```
#[must_use]
pub fn short_name_for_keycode(keycode: &Keycode, size: u32) -> String {
    if size <= SHORT_NAME_MAX_SIZE {
        if let Some(short_name) = keycode.short_name.as_deref().filter(|s| !s.is_empty()) {
            return short_name.to_string();
        }
    }

    if size == DEFAULT_LABEL_SIZE && keycode.name.chars().count() > ABBREVIATE_OVER {
        let shortened = shorten(&keycode.name);
        if keycode.code.is_empty() {
            return shortened;
        }

        // "KC_PSCR" -> "PSCR", "KC_MS_UP" -> "MS UP"
        let short_code = keycode.code.replacen("KC_", "", 1).replacen('_', " ", 1);
        let shortened_len = shortened.chars().count();
        return if shortened_len > 4 && short_code.chars().count() < shortened_len {
            short_code
        } else {
            shortened
        };
    }

    keycode.name.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("Scroll Lock"), "ScrllLck");
        assert_eq!(shorten("Alt Erase"), "AltErs");
        assert_eq!(shorten("Eject"), "Ejct");
        assert_eq!(shorten(""), "");
        assert_eq!(shorten("a  b"), "ab");
    }

    #[test]
    fn test_short_name_preferred_when_small() {
        let keycode = Keycode::new("Backspace", "KC_BSPC").with_short_name("Bksp");
        assert_eq!(short_name_for_keycode(&keycode, 100), "Bksp");
        assert_eq!(short_name_for_keycode(&keycode, 150), "Bksp");
        assert_eq!(short_name_for_keycode(&keycode, 151), "Backspace");
    }

    #[test]
    fn test_short_code_wins_when_shorter() {
        // "Print Screen" -> "PrntScrn" (8 chars); "PSCR" is shorter
        let keycode = Keycode::new("Print Screen", "KC_PSCR");
        assert_eq!(short_name_for_keycode(&keycode, 100), "PSCR");
    }

    #[test]
    fn test_abbreviation_edge_cases() {
        // "Locking Caps Lock" -> "LckngCpsLck" (11); "LCAP" (4) wins
        let keycode = Keycode::new("Locking Caps Lock", "KC_LCAP");
        assert_eq!(short_name_for_keycode(&keycode, 100), "LCAP");

        // "Again" is not long enough to abbreviate
        let keycode = Keycode::new("Again", "KC_AGAIN");
        assert_eq!(short_name_for_keycode(&keycode, 100), "Again");

        // "Mouse Btn6" -> "MsBtn6" (6); "MS BTN6" (7) is longer
        let keycode = Keycode::new("Mouse Btn6", "KC_MS_BTN6");
        assert_eq!(short_name_for_keycode(&keycode, 100), "MsBtn6");
    }

    #[test]
    fn test_abbreviation_only_at_default_size() {
        let keycode = Keycode::new("Print Screen", "KC_PSCR");
        assert_eq!(short_name_for_keycode(&keycode, 120), "Print Screen");
    }

    #[test]
    fn test_empty_code_uses_shortened_name() {
        let keycode = Keycode::new("Browser Home", "");
        assert_eq!(short_name_for_keycode(&keycode, 100), "BrwsrHm");
    }
}
