//! End-to-end tests for `keycat encode`, `keycat decode` and `keycat other`.

mod fixtures;
use fixtures::*;

use keycat::config::Config;
use tempfile::TempDir;

// ============================================================================
// Encode Tests
// ============================================================================

#[test]
fn test_encode_basic_keycode() {
    let result = json_output(&run(&["encode", "KC_A", "--json"]));
    assert_eq!(result["code"], "KC_A");
    assert_eq!(result["byte"], 4);
    assert_eq!(result["hex"], "0x0004");
}

#[test]
fn test_encode_human_readable() {
    let output = run(&["encode", "KC_SPC"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "KC_SPC = 0x002c (44)");
}

#[test]
fn test_encode_layer_families() {
    assert_eq!(json_output(&run(&["encode", "MO(3)", "--json"]))["byte"], 0x5223);
    assert_eq!(json_output(&run(&["encode", "TO(0)", "--json"]))["byte"], 0x5200);
    assert_eq!(json_output(&run(&["encode", "MACRO(7)", "--json"]))["byte"], 0x7707);
    // Clamped to the family max
    assert_eq!(json_output(&run(&["encode", "MO(99)", "--json"]))["byte"], 0x523f);
}

#[test]
fn test_encode_composite_keycodes() {
    assert_eq!(json_output(&run(&["encode", "LCTL(KC_A)", "--json"]))["byte"], 0x0104);
    assert_eq!(json_output(&run(&["encode", "LT(1,KC_SPC)", "--json"]))["byte"], 0x412c);
    assert_eq!(json_output(&run(&["encode", "LSFT_T(KC_A)", "--json"]))["byte"], 0x2204);
}

#[test]
fn test_encode_no_advanced() {
    let output = run(&["encode", "LCTL(KC_A)", "--no-advanced"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_encode_unknown_keycode() {
    let output = run(&["encode", "KC_NOPE"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("keycode not found: KC_NOPE"), "stderr: {stderr}");
}

#[test]
fn test_encode_unknown_family() {
    let output = run(&["encode", "FOO(1)"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown keycode family 'FOO'"), "stderr: {stderr}");
}

// ============================================================================
// Decode Tests
// ============================================================================

#[test]
fn test_decode_basic_byte() {
    let result = json_output(&run(&["decode", "0x2a", "--json"]));
    assert_eq!(result["byte"], 42);
    assert_eq!(result["code"], "KC_BSPC");
    assert_eq!(result["label"], "Bksp");
    assert!(result.get("macro_index").is_none());
}

#[test]
fn test_decode_decimal_and_size() {
    let result = json_output(&run(&["decode", "42", "--size", "200", "--json"]));
    assert_eq!(result["code"], "KC_BSPC");
    assert_eq!(result["label"], "Backspace");
}

#[test]
fn test_decode_families() {
    assert_eq!(json_output(&run(&["decode", "0x5223", "--json"]))["code"], "MO(3)");

    let result = json_output(&run(&["decode", "0x7703", "--json"]));
    assert_eq!(result["code"], "MACRO(3)");
    assert_eq!(result["macro_index"], 3);

    let result = json_output(&run(&["decode", "0x7e02", "--json"]));
    assert_eq!(result["code"], "CUSTOM(2)");
    assert_eq!(result["custom_index"], 2);
}

#[test]
fn test_decode_composite() {
    let result = json_output(&run(&["decode", "0x021e", "--json"]));
    assert_eq!(result["code"], "S(KC_1)");
    assert_eq!(result["label"], "!");

    assert_eq!(json_output(&run(&["decode", "0x412c", "--json"]))["code"], "LT(1,KC_SPC)");
}

#[test]
fn test_decode_hex_fallback() {
    let result = json_output(&run(&["decode", "0x6000", "--json"]));
    assert_eq!(result["code"], "0x6000");
    assert_eq!(result["label"], "0x6000");

    let result = json_output(&run(&["decode", "0x021e", "--no-advanced", "--json"]));
    assert_eq!(result["code"], "0x21e");
}

#[test]
fn test_decode_invalid_byte() {
    for bad in ["KC_A", "0x10000", "70000"] {
        let output = run(&["decode", bad]);
        assert_eq!(output.status.code(), Some(1), "{bad} should be rejected");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Invalid byte"), "stderr: {stderr}");
    }
}

// ============================================================================
// Device Table Tests
// ============================================================================

#[test]
fn test_custom_table() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_byte_table(temp_dir.path(), &vendor_table_entries());
    let table = table.to_str().unwrap();

    let result = json_output(&run_in(
        temp_dir.path(),
        &["encode", "MO(2)", "--table", table, "--json"],
    ));
    assert_eq!(result["byte"], 0x5222);

    let result = json_output(&run_in(
        temp_dir.path(),
        &["decode", "0xf0", "--table", table, "--json"],
    ));
    assert_eq!(result["code"], "KC_VENDOR_X");
    assert_eq!(result["label"], "KC_VENDOR_X");

    // Family without bounds in this table
    let output = run_in(temp_dir.path(), &["encode", "TG(1)", "--table", table]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("_QK_TOGGLE_LAYER"), "stderr: {stderr}");
}

#[test]
fn test_table_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = Config::new();
    config.codec.byte_table = Some(write_byte_table(temp_dir.path(), &vendor_table_entries()));
    config.codec.advanced = false;
    write_config(temp_dir.path(), &config);

    let result = json_output(&run_in(temp_dir.path(), &["encode", "KC_VENDOR_X", "--json"]));
    assert_eq!(result["byte"], 0xf0);

    let output = run_in(temp_dir.path(), &["encode", "LCTL(KC_A)"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_table() {
    let output = run(&["encode", "KC_A", "--table", "/nonexistent/table.json"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read byte table"), "stderr: {stderr}");
}

#[test]
fn test_malformed_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("table.json");
    std::fs::write(&path, r#"{"KC_A": "four"}"#).unwrap();

    let output = run_in(temp_dir.path(), &["decode", "4", "--table", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
}

// ============================================================================
// Other Menu Tests
// ============================================================================

#[test]
fn test_other_builtin_table() {
    let result = json_output(&run(&["other", "--json"]));
    let keycodes = result["keycodes"].as_array().unwrap();
    assert!(keycodes.iter().any(|k| k["code"] == "QK_BOOT" && k["name"] == "QK BOOT"));
    assert!(!keycodes
        .iter()
        .any(|k| k["code"].as_str().unwrap().starts_with("_QK")));
    assert!(!keycodes.iter().any(|k| k["code"] == "KC_A"));
}

#[test]
fn test_other_custom_table() {
    let temp_dir = TempDir::new().unwrap();
    let table = write_byte_table(temp_dir.path(), &vendor_table_entries());

    let result = json_output(&run_in(
        temp_dir.path(),
        &["other", "--table", table.to_str().unwrap(), "--json"],
    ));
    assert_eq!(result["count"], 1);
    assert_eq!(result["keycodes"][0]["code"], "KC_VENDOR_X");
    assert_eq!(result["keycodes"][0]["name"], "VENDOR X");
}
