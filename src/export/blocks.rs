//! Layer block extraction and binding tokenization.
//!
//! The keymap grammar is re-parsed here rather than shared with the
//! generator: the renderer must also accept hand-written keymaps with
//! arbitrary whitespace and `/* ... */` comments inside binding lists.

use anyhow::{Context, Result};
use regex::Regex;

/// One extracted `layer_<name> { bindings = < ... >; }` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerBlock {
    /// Block identifier including the `layer_` prefix (names the output file).
    pub name: String,
    /// Raw text between `<` and `>;`, comments included.
    pub bindings: String,
}

/// Compiled patterns for keymap parsing.
#[derive(Debug, Clone)]
pub struct KeymapParser {
    block: Regex,
    comment: Regex,
}

impl KeymapParser {
    /// Compiles the block and comment patterns.
    pub fn new() -> Result<Self> {
        // Bounded scan: `.*?` up to the first `>;` terminator.
        let block = Regex::new(r"(?s)(layer_[0-9A-Za-z_]+)\s*\{\s*bindings\s*=\s*<(.*?)>;")
            .context("Failed to compile layer block pattern")?;
        let comment =
            Regex::new(r"(?s)/\*.*?\*/").context("Failed to compile comment pattern")?;

        Ok(Self { block, comment })
    }

    /// Extracts every layer block in document order.
    ///
    /// Text between blocks is ignored; a block that does not match the
    /// pattern is simply never produced.
    #[must_use]
    pub fn extract_layer_blocks(&self, content: &str) -> Vec<LayerBlock> {
        self.block
            .captures_iter(content)
            .map(|caps| LayerBlock {
                name: caps[1].to_string(),
                bindings: caps[2].to_string(),
            })
            .collect()
    }

    /// Splits a block's binding list into discrete binding tokens.
    ///
    /// Comment spans are stripped first so their content never
    /// contributes tokens. The remainder is split on the `&` action
    /// delimiter (not on whitespace), which keeps multi-word
    /// parameterized bindings like `&lt 2 SPACE` intact; the delimiter
    /// is reattached to each fragment.
    #[must_use]
    pub fn tokenize_bindings(&self, raw: &str) -> Vec<String> {
        let cleaned = self.comment.replace_all(raw, " ");

        cleaned
            .split('&')
            .filter_map(|fragment| {
                let fragment = fragment.trim();
                if fragment.is_empty() {
                    None
                } else {
                    Some(format!("&{fragment}"))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> KeymapParser {
        KeymapParser::new().unwrap()
    }

    #[test]
    fn test_extract_single_block() {
        let content = r#"
/ {
        keymap {
                compatible = "zmk,keymap";
                layer_0 {
                        bindings = <
   &kp A &kp B
                        >;
                };
        };
};
"#;
        let blocks = parser().extract_layer_blocks(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "layer_0");
        assert!(blocks[0].bindings.contains("&kp A"));
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let content = "layer_base { bindings = <&kp A>; };\n\
                       layer_nav { bindings = <&kp B>; };\n\
                       layer_2 { bindings = <&kp C>; };";
        let names: Vec<String> = parser()
            .extract_layer_blocks(content)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["layer_base", "layer_nav", "layer_2"]);
    }

    #[test]
    fn test_extract_ignores_malformed_blocks() {
        // Truncated block without a terminator yields nothing
        let content = "layer_0 { bindings = < &kp A &kp B";
        assert!(parser().extract_layer_blocks(content).is_empty());
    }

    #[test]
    fn test_tokenize_simple() {
        let tokens = parser().tokenize_bindings("  &kp A\n   &kp B  &trans ");
        assert_eq!(tokens, vec!["&kp A", "&kp B", "&trans"]);
    }

    #[test]
    fn test_tokenize_keeps_parameterized_bindings_whole() {
        let tokens = parser().tokenize_bindings("&lt 2 SPACE &kp LC(A) &mo 1");
        assert_eq!(tokens, vec!["&lt 2 SPACE", "&kp LC(A)", "&mo 1"]);
    }

    #[test]
    fn test_tokenize_comment_robustness() {
        let tokens = parser().tokenize_bindings("&kp A /* weird ) ( stuff */ &kp B");
        assert_eq!(tokens, vec!["&kp A", "&kp B"]);
    }

    #[test]
    fn test_tokenize_multiline_comment() {
        let tokens = parser().tokenize_bindings("&kp A /* spans\nlines & lines */ &kp B");
        assert_eq!(tokens, vec!["&kp A", "&kp B"]);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(parser().tokenize_bindings("   \n  ").is_empty());
    }

    #[test]
    fn test_roundtrip_42_tokens() {
        let bindings = "&trans ".repeat(42);
        let content = format!("layer_0 {{ bindings = < {bindings} >; }};");
        let parser = parser();

        let blocks = parser.extract_layer_blocks(&content);
        assert_eq!(blocks.len(), 1);

        let tokens = parser.tokenize_bindings(&blocks[0].bindings);
        assert_eq!(tokens.len(), 42);
        assert!(tokens.iter().all(|t| t == "&trans"));
    }
}
