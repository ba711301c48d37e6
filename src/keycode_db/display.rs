//! ZMK binding display labels for diagram rendering.
//!
//! Maps emitted binding strings back to short human-readable key labels.
//! Bindings with internal structure (layer-tap, momentary layer, layer
//! switch, modifier wrappers) get bespoke handling ahead of the generic
//! replacement table.

/// Visual category of a binding, used to pick the key's color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `&trans` - pass-through to the layer below
    Transparent,
    /// `&none` - dead key
    NoOp,
    /// Layer-referencing key (momentary or layer-tap)
    LayerRef,
    /// Layer switch (`&to`)
    LayerSwitch,
    /// Everything else
    Plain,
}

/// Display label for one key, with an optional second stacked line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDisplay {
    /// Main label (may be empty for dead keys)
    pub primary: String,
    /// Second line below the main label (layer-tap inner key)
    pub secondary: Option<String>,
    /// Color category
    pub kind: BindingKind,
}

/// Action prefix to label prefix (the `&kp` prefix simply disappears).
const ACTION_PREFIXES: &[(&str, &str)] = &[
    ("&kp ", ""),
    ("&mkp ", "Mouse "),
    ("&msc ", "Scroll "),
    ("&mmv ", "Move "),
    ("&bt ", "BT "),
];

/// Modifier wrapper to short prefix; the closing paren is dropped.
const MOD_WRAPPERS: &[(&str, &str)] = &[
    ("LC(", "C+"),
    ("RC(", "C+"),
    ("LS(", "S+"),
    ("RS(", "S+"),
    ("LA(", "A+"),
    ("RA(", "A+"),
    ("LG(", "G+"),
    ("RG(", "G+"),
];

/// Raw ZMK key names to short display labels.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("LSHIFT", "Shift"),
    ("RSHIFT", "Shift"),
    ("LCTRL", "Ctrl"),
    ("RCTRL", "Ctrl"),
    ("LALT", "Alt"),
    ("RALT", "Alt"),
    ("LGUI", "Gui"),
    ("RGUI", "Gui"),
    ("BSPC", "Bksp"),
    ("SPACE", "Spc"),
    ("RET", "Ent"),
    ("ESC", "Esc"),
    ("TAB", "Tab"),
    ("SQT", "'"),
    ("SEMI", ";"),
    ("COMMA", ","),
    ("DOT", "."),
    ("FSLH", "/"),
    ("BSLH", "\\"),
    ("LBKT", "["),
    ("RBKT", "]"),
    ("MINUS", "-"),
    ("EQUAL", "="),
    ("GRAVE", "`"),
    ("TILDE", "~"),
    ("PG_UP", "PgUp"),
    ("PG_DN", "PgDn"),
    ("PSCRN", "PrtSc"),
    ("CAPS", "Caps"),
    ("C_VOL_UP", "Vol+"),
    ("C_VOL_DN", "Vol-"),
    ("C_MUTE", "Mute"),
    ("C_PP", "Play"),
    ("C_NEXT", "Next"),
    ("C_PREV", "Prev"),
    ("C_BRI_UP", "Bri+"),
    ("C_BRI_DN", "Bri-"),
    ("SCRL_UP", "Up"),
    ("SCRL_DOWN", "Down"),
    ("SCRL_LEFT", "Left"),
    ("SCRL_RIGHT", "Right"),
    ("MOVE_UP", "Up"),
    ("MOVE_DOWN", "Down"),
    ("MOVE_LEFT", "Left"),
    ("MOVE_RIGHT", "Right"),
    ("LCLK", "L"),
    ("RCLK", "R"),
    ("MCLK", "M"),
    ("BT_SEL", "Sel"),
    ("BT_CLR", "Clr"),
];

/// Placeholder glyph for transparent keys.
const TRANSPARENT_GLYPH: &str = "▽";

/// Computes the display label and color category for one binding token.
///
/// Deterministic: the same binding always yields the same display.
///
/// # Examples
///
/// ```
/// use lazyzmk::keycode_db::display::display_binding;
///
/// let d = display_binding("&lt 1 SPACE");
/// assert_eq!(d.primary, "L1");
/// assert_eq!(d.secondary.as_deref(), Some("Spc"));
/// ```
#[must_use]
pub fn display_binding(binding: &str) -> KeyDisplay {
    // Inline comments never label anything
    let token = match binding.find("/*") {
        Some(idx) => binding[..idx].trim(),
        None => binding.trim(),
    };

    if token == "&trans" {
        return KeyDisplay {
            primary: TRANSPARENT_GLYPH.to_string(),
            secondary: None,
            kind: BindingKind::Transparent,
        };
    }
    if token == "&none" {
        return KeyDisplay {
            primary: String::new(),
            secondary: None,
            kind: BindingKind::NoOp,
        };
    }

    if let Some(rest) = token.strip_prefix("&lt ") {
        let rest = rest.trim();
        let (layer, inner) = match rest.split_once(char::is_whitespace) {
            Some((layer, inner)) => (layer, inner.trim()),
            None => (rest, ""),
        };
        let primary = format!("L{layer}");
        let secondary = if inner.is_empty() {
            None
        } else {
            Some(label_text(inner))
        };
        return KeyDisplay {
            kind: kind_for_label(&primary),
            primary,
            secondary,
        };
    }

    if let Some(layer) = token.strip_prefix("&mo ") {
        let primary = format!("L{}", layer.trim());
        return KeyDisplay {
            kind: kind_for_label(&primary),
            primary,
            secondary: None,
        };
    }

    if let Some(layer) = token.strip_prefix("&to ") {
        let primary = format!("TO {}", layer.trim());
        return KeyDisplay {
            kind: kind_for_label(&primary),
            primary,
            secondary: None,
        };
    }

    let primary = strip_action_prefix(token);
    KeyDisplay {
        kind: kind_for_label(&primary),
        primary,
        secondary: None,
    }
}

/// Strips the leading action prefix and labels the remainder.
fn strip_action_prefix(token: &str) -> String {
    for (prefix, label_prefix) in ACTION_PREFIXES {
        if let Some(rest) = token.strip_prefix(prefix) {
            return format!("{label_prefix}{}", label_text(rest.trim()));
        }
    }
    // Unknown action: show it as-is, without the delimiter
    token.trim_start_matches('&').to_string()
}

/// Labels a bare key name: modifier wrappers first, then the table.
fn label_text(name: &str) -> String {
    for (wrapper, short) in MOD_WRAPPERS {
        if let Some(rest) = name.strip_prefix(wrapper) {
            let inner = rest.strip_suffix(')').unwrap_or(rest);
            return format!("{short}{}", apply_replacements(inner));
        }
    }
    apply_replacements(name)
}

fn apply_replacements(name: &str) -> String {
    let mut label = name.to_string();
    for (raw, short) in REPLACEMENTS {
        label = label.replace(raw, short);
    }
    label
}

/// Layer-ish labels get a distinguishing tint.
fn kind_for_label(label: &str) -> BindingKind {
    if label.len() <= 4 {
        if let Some(digits) = label.strip_prefix('L') {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                return BindingKind::LayerRef;
            }
        }
    }
    if label.contains("TO") {
        return BindingKind::LayerSwitch;
    }
    BindingKind::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_and_none() {
        let trans = display_binding("&trans");
        assert_eq!(trans.primary, "▽");
        assert_eq!(trans.kind, BindingKind::Transparent);

        let none = display_binding("&none");
        assert_eq!(none.primary, "");
        assert_eq!(none.kind, BindingKind::NoOp);
    }

    #[test]
    fn test_diagnostic_comment_is_ignored() {
        let d = display_binding("&none /* KC_BOGUS */");
        assert_eq!(d.primary, "");
        assert_eq!(d.kind, BindingKind::NoOp);
    }

    #[test]
    fn test_simple_key_send() {
        assert_eq!(display_binding("&kp A").primary, "A");
        assert_eq!(display_binding("&kp SPACE").primary, "Spc");
        assert_eq!(display_binding("&kp SEMI").primary, ";");
        assert_eq!(display_binding("&kp PG_UP").primary, "PgUp");
    }

    #[test]
    fn test_layer_tap_stacks_two_lines() {
        let d = display_binding("&lt 2 RET");
        assert_eq!(d.primary, "L2");
        assert_eq!(d.secondary.as_deref(), Some("Ent"));
        assert_eq!(d.kind, BindingKind::LayerRef);
    }

    #[test]
    fn test_momentary_layer() {
        let d = display_binding("&mo 1");
        assert_eq!(d.primary, "L1");
        assert!(d.secondary.is_none());
        assert_eq!(d.kind, BindingKind::LayerRef);
    }

    #[test]
    fn test_layer_switch() {
        let d = display_binding("&to 1");
        assert_eq!(d.primary, "TO 1");
        assert_eq!(d.kind, BindingKind::LayerSwitch);
    }

    #[test]
    fn test_modifier_wrapper_drops_paren() {
        assert_eq!(display_binding("&kp LC(A)").primary, "C+A");
        assert_eq!(display_binding("&kp LS(COMMA)").primary, "S+,");
    }

    #[test]
    fn test_mouse_actions() {
        assert_eq!(display_binding("&mkp LCLK").primary, "Mouse L");
        assert_eq!(display_binding("&msc SCRL_UP").primary, "Scroll Up");
        assert_eq!(display_binding("&mmv MOVE_LEFT").primary, "Move Left");
    }

    #[test]
    fn test_modifier_names_shorten() {
        assert_eq!(display_binding("&kp LSHIFT").primary, "Shift");
        assert_eq!(display_binding("&kp RGUI").primary, "Gui");
    }

    #[test]
    fn test_label_stability() {
        for binding in ["&kp A", "&lt 1 SPACE", "&trans", "&mo 3", "&msc SCRL_DOWN"] {
            assert_eq!(display_binding(binding), display_binding(binding));
        }
    }
}
