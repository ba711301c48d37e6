//! QMK to ZMK keycode translation database.
//!
//! This module provides access to the embedded translation table and the
//! total translation function mapping Vial/QMK keycode tokens to ZMK
//! binding strings. Translation never fails: unrecognized input produces
//! a `&none` binding carrying the original token as an inline comment.

pub mod display;

use crate::models::{KeyToken, GAP_SENTINEL};
use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Individual translation entry from the embedded database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeycodeMapping {
    /// QMK keycode (e.g., "`KC_ENTER`")
    pub code: String,
    /// Alternative QMK names for the same key (e.g., "`KC_ENT`")
    #[serde(default)]
    pub aliases: Vec<String>,
    /// ZMK binding emitted for this key (e.g., "&kp RET")
    pub binding: String,
}

/// Database schema from zmk_keycodes.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KeycodeDatabase {
    version: String,
    keycodes: Vec<KeycodeMapping>,
}

/// Modifier composition mnemonics: QMK wrapper name to ZMK short form.
const MOD_MNEMONICS: &[(&str, &str)] = &[
    ("LCTL", "LC"),
    ("RCTL", "RC"),
    ("LSFT", "LS"),
    ("RSFT", "RS"),
    ("LALT", "LA"),
    ("RALT", "RA"),
    ("LGUI", "LG"),
    ("RGUI", "RG"),
];

/// Maximum composition nesting resolved before falling through to the
/// diagnostic passthrough. Valid input nests one level at most.
const MAX_COMPOSITION_DEPTH: usize = 2;

/// QMK to ZMK translation table with composition parsing.
///
/// The table is embedded in the binary at compile time and parsed on
/// load. The database holds no mutable state, so one instance can be
/// shared freely across independent translations.
#[derive(Debug, Clone)]
pub struct KeycodeDb {
    /// All translation entries
    keycodes: Vec<KeycodeMapping>,
    /// Fast lookup by QMK code or alias
    lookup: HashMap<String, usize>,
    /// Composition syntax: FUNC(ARG)
    composition: Regex,
    /// Function-row suffix: F followed by digits
    function_row: Regex,
}

impl KeycodeDb {
    /// Loads the translation table from the embedded JSON file.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("zmk_keycodes.json");
        let db: KeycodeDatabase = serde_json::from_str(json_data)
            .context("Failed to parse embedded zmk_keycodes.json")?;

        let mut lookup = HashMap::new();
        for (idx, mapping) in db.keycodes.iter().enumerate() {
            lookup.insert(mapping.code.clone(), idx);
            for alias in &mapping.aliases {
                lookup.insert(alias.clone(), idx);
            }
        }

        let composition = Regex::new(r"^([A-Z0-9_]+)\((.+)\)$")
            .context("Failed to compile composition pattern")?;
        let function_row =
            Regex::new(r"^F\d+").context("Failed to compile function-row pattern")?;

        Ok(Self {
            keycodes: db.keycodes,
            lookup,
            composition,
            function_row,
        })
    }

    /// Number of known translation entries (aliases included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    /// Returns true if the table contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    /// Translates one layout cell to a ZMK binding string.
    ///
    /// Total over all tokens: the gap sentinel yields an empty string,
    /// other integers a numeric fallback binding, and every string some
    /// well-formed binding (unrecognized codes become a `&none` binding
    /// with the original code in an inline comment).
    ///
    /// # Examples
    ///
    /// ```
    /// use lazyzmk::keycode_db::KeycodeDb;
    /// use lazyzmk::models::KeyToken;
    ///
    /// let db = KeycodeDb::load().unwrap();
    /// assert_eq!(db.translate(&KeyToken::Raw(-1)), "");
    /// assert_eq!(db.translate(&KeyToken::Code("KC_TRNS".into())), "&trans");
    /// ```
    #[must_use]
    pub fn translate(&self, token: &KeyToken) -> String {
        match token {
            KeyToken::Raw(GAP_SENTINEL) => String::new(),
            KeyToken::Raw(n) => format!("&kp {n}"),
            KeyToken::Code(code) => self.translate_code(code),
        }
    }

    /// Translates one QMK keycode string to a ZMK binding string.
    #[must_use]
    pub fn translate_code(&self, code: &str) -> String {
        self.resolve(code, 0)
    }

    /// Resolution order: exact table match, KC_ prefix classification,
    /// composition syntax, diagnostic passthrough. `depth` bounds
    /// re-entry through composition arguments.
    fn resolve(&self, code: &str, depth: usize) -> String {
        if let Some(&idx) = self.lookup.get(code) {
            return self.keycodes[idx].binding.clone();
        }

        if let Some(suffix) = code.strip_prefix("KC_") {
            let mut chars = suffix.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_ascii_alphanumeric() {
                    return format!("&kp {suffix}");
                }
            }
            if self.function_row.is_match(suffix) {
                return format!("&kp {suffix}");
            }
            if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
                return format!("&kp N{suffix}");
            }
        }

        if depth < MAX_COMPOSITION_DEPTH {
            if let Some(caps) = self.composition.captures(code) {
                let func = caps.get(1).map_or("", |m| m.as_str());
                let arg = caps.get(2).map_or("", |m| m.as_str());

                // Momentary layer: MO(1) -> &mo 1
                if func == "MO" {
                    return format!("&mo {arg}");
                }

                // Layer tap: LT2(KC_SPACE) -> &lt 2 SPACE
                if let Some(layer) = func.strip_prefix("LT") {
                    let inner = self.resolve(arg, depth + 1).replace("&kp ", "");
                    if layer.is_empty() {
                        // Resilience path: the argument encodes both layer and key.
                        return format!("&lt {inner}");
                    }
                    return format!("&lt {layer} {inner}");
                }

                // Modifier wrappers: LCTL(KC_X) -> &kp LC(X)
                for (mnemonic, short) in MOD_MNEMONICS {
                    if func == *mnemonic {
                        let inner = self.resolve(arg, depth + 1).replace("&kp ", "");
                        return format!("&kp {short}({inner})");
                    }
                }

                // Default layer switch: DF(1) -> &to 1
                if func == "DF" {
                    return format!("&to {arg}");
                }
            }
        }

        format!("&none /* {code} */")
    }
}
