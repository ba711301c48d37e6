//! ZMK keymap text emission.
//!
//! Each layer's grid is flattened in row-major order with gaps dropped,
//! translated, and written as one `layer_<index>` block. Binding lines
//! are grouped positionally (12/12/12/remainder) to match the target
//! grammar's convention - the grouping never consults the input row
//! boundaries.

use crate::constants::{MAIN_ROWS, MAIN_ROW_KEYS};
use crate::keycode_db::KeycodeDb;
use crate::models::{KeyToken, VialLayout};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Fixed keymap preamble: ZMK boilerplate and the keymap container.
const KEYMAP_HEADER: &str = r#"/*
 * Copyright (c) 2020 The ZMK Contributors
 *
 * SPDX-License-Identifier: MIT
 */

#include <behaviors.dtsi>
#include <dt-bindings/zmk/keys.h>
#include <dt-bindings/zmk/bt.h>
#include <dt-bindings/zmk/outputs.h>
#include <dt-bindings/zmk/pointing.h>

/ {
        keymap {
                compatible = "zmk,keymap";
"#;

/// Closes the keymap container opened by the header.
const KEYMAP_FOOTER: &str = "        };\n};\n";

/// Flattens one layer's grid and translates every key.
///
/// Rows are concatenated in order; gap sentinels are dropped before
/// translation, so the result holds only real bindings.
#[must_use]
pub fn convert_layer(db: &KeycodeDb, layer: &[Vec<KeyToken>]) -> Vec<String> {
    layer
        .iter()
        .flatten()
        .filter(|token| !token.is_gap())
        .map(|token| db.translate(token))
        .collect()
}

/// Formats one layer block with positionally grouped binding lines.
///
/// Groups are taken by position: three lines of 12, then the remainder
/// as the thumb line. Short layers produce short (possibly empty)
/// trailing groups.
#[must_use]
pub fn format_layer_block(index: usize, bindings: &[String]) -> String {
    let mut block = format!(
        "                layer_{index} {{\n                        bindings = <\n"
    );

    for row in 0..MAIN_ROWS {
        let group = group_slice(bindings, row * MAIN_ROW_KEYS, (row + 1) * MAIN_ROW_KEYS);
        block.push_str("   ");
        block.push_str(&group.join(" "));
        block.push('\n');
    }

    let thumbs = group_slice(bindings, MAIN_ROWS * MAIN_ROW_KEYS, bindings.len());
    block.push_str("                    ");
    block.push_str(&thumbs.join(" "));
    block.push('\n');

    block.push_str("                        >;\n                };\n");
    block
}

/// Clamped slice: whatever of `start..end` the bindings actually cover.
fn group_slice(bindings: &[String], start: usize, end: usize) -> &[String] {
    let len = bindings.len();
    &bindings[start.min(len)..end.min(len)]
}

/// Generates the complete keymap document for a layout.
#[must_use]
pub fn generate_keymap(db: &KeycodeDb, doc: &VialLayout) -> String {
    let mut output = String::from(KEYMAP_HEADER);

    for (index, layer) in doc.layout.iter().enumerate() {
        let bindings = convert_layer(db, layer);
        output.push_str(&format_layer_block(index, &bindings));
    }

    output.push_str(KEYMAP_FOOTER);
    output
}

/// Writes a keymap document to disk.
///
/// Uses a temp-file-then-rename write so the target is never left in a
/// half-written state.
///
/// # Errors
///
/// Returns errors for file I/O failures and atomic rename failures.
pub fn save_keymap(content: &str, path: &Path) -> Result<()> {
    let temp_path = path.with_extension("keymap.tmp");

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    info!(file = %path.display(), "wrote keymap");
    Ok(())
}
