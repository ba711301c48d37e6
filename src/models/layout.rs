//! Vial layout document model.
//!
//! A `.vil` file stores one grid of keycodes per layer under a top-level
//! `layout` array. Grid cells are either QMK keycode strings or raw
//! integers; the integer `-1` marks a visual gap with no physical key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer cell value marking a grid position with no physical key.
pub const GAP_SENTINEL: i64 = -1;

/// One cell of a layer grid: a QMK keycode or a raw integer.
///
/// Keycodes are plain identifiers (`KC_A`, `KC_SPC`) or a single
/// function-call composition (`LCTL(KC_A)`, `LT1(KC_SPC)`). Raw integers
/// other than the gap sentinel do not appear in normal Vial exports but
/// are preserved for the translator's fallback path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyToken {
    /// Raw integer cell (`-1` = gap).
    Raw(i64),
    /// QMK keycode string.
    Code(String),
}

impl KeyToken {
    /// Returns true if this cell is the gap sentinel.
    #[must_use]
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Raw(GAP_SENTINEL))
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(n) => write!(f, "{n}"),
            Self::Code(s) => write!(f, "{s}"),
        }
    }
}

/// Parsed Vial layout document.
///
/// Only the `layout` field is interpreted; Vial writes additional fields
/// (`encoder_layout`, `vial_protocol`, macros, ...) which are ignored.
/// The document is read-only after parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VialLayout {
    /// Layers, each a grid of rows of key tokens.
    #[serde(default)]
    pub layout: Vec<Vec<Vec<KeyToken>>>,
}

impl VialLayout {
    /// Number of layers in the document.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layout.len()
    }
}
