//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Corne-style base layer: three rows of 12 keys plus a thumb row where
/// the 6 real thumb keys sit between gap markers, Vial-style.
pub fn base_layer() -> Value {
    json!([
        [
            "KC_TAB", "KC_Q", "KC_W", "KC_E", "KC_R", "KC_T",
            "KC_Y", "KC_U", "KC_I", "KC_O", "KC_P", "KC_BSPACE"
        ],
        [
            "KC_ESC", "KC_A", "KC_S", "KC_D", "KC_F", "KC_G",
            "KC_H", "KC_J", "KC_K", "KC_L", "KC_SCOLON", "KC_QUOTE"
        ],
        [
            "KC_LSHIFT", "KC_Z", "KC_X", "KC_C", "KC_V", "KC_B",
            "KC_N", "KC_M", "KC_COMMA", "KC_DOT", "KC_SLASH", "KC_RSHIFT"
        ],
        [
            -1, -1, -1,
            "KC_LGUI", "MO(1)", "KC_SPACE",
            "KC_ENTER", "LT1(KC_BSPACE)", "LCTL(KC_A)",
            -1, -1, -1
        ]
    ])
}

/// Layer of nothing but transparent keys, same grid shape as the base.
pub fn transparent_layer() -> Value {
    let main_row: Vec<Value> = (0..12).map(|_| json!("KC_TRNS")).collect();
    let mut thumb_row: Vec<Value> = vec![json!(-1); 3];
    thumb_row.extend((0..6).map(|_| json!("KC_TRNS")));
    thumb_row.extend(vec![json!(-1); 3]);

    json!([main_row.clone(), main_row.clone(), main_row, thumb_row])
}

/// Complete two-layer Vial document as written by the Vial GUI.
pub fn sample_vial_document() -> String {
    json!({
        "version": 1,
        "uid": 123456789u64,
        "layout": [base_layer(), transparent_layer()],
        "encoder_layout": [],
        "vial_protocol": 6
    })
    .to_string()
}

/// Writes a `.vil` document into a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn create_temp_vil(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("layout.vil");
    fs::write(&path, content).expect("Failed to write .vil fixture");
    (path, dir)
}

/// Hand-written keymap document with one full 42-token layer and one
/// short, comment-bearing layer.
pub fn sample_keymap_text() -> String {
    let full_row = "&kp A ".repeat(12);
    let thumbs = "&trans ".repeat(6);
    format!(
        "/ {{\n        keymap {{\n                compatible = \"zmk,keymap\";\n\
         layer_0 {{\n bindings = <\n{full_row}\n{full_row}\n{full_row}\n{thumbs}\n>;\n}};\n\
         layer_1 {{\n bindings = <\n&kp B /* short layer ) ( */ &lt 2 SPACE &mo 1\n>;\n}};\n\
         }};\n}};\n"
    )
}

/// Writes a keymap document into a fresh temp dir.
pub fn create_temp_keymap(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("corne.keymap");
    fs::write(&path, content).expect("Failed to write keymap fixture");
    (path, dir)
}
