//! Keymap rendering: layer block extraction and PNG diagram export.
//!
//! The renderer consumes a ZMK keymap document, extracts every
//! `layer_<name> { bindings = < ... >; }` block, tokenizes its bindings,
//! and writes one labeled PNG diagram per layer. Rendering is
//! best-effort: a block that fails to parse contributes nothing, short
//! layers leave trailing slots blank, and a missing label font degrades
//! to a built-in fallback.

pub mod blocks;
pub mod diagram;
pub mod geometry;

// Re-export commonly used types
pub use blocks::{KeymapParser, LayerBlock};
pub use diagram::LabelFont;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::constants::SLOT_COUNT;

/// Renders every layer block in a keymap document to PNG files.
///
/// Creates `output_dir` if absent. Returns the generated filenames in
/// document order, one per successfully parsed layer block. Malformed
/// blocks are skipped rather than failing the batch.
///
/// Concurrent renders into the same directory collide on filenames
/// (names derive only from the block identifier); callers must use
/// distinct directories or serialize.
///
/// # Errors
///
/// Returns an error only for output I/O failures (directory creation,
/// image encoding/writing), never for malformed keymap content.
pub fn render_keymap(
    content: &str,
    output_dir: &Path,
    font_path: Option<&Path>,
) -> Result<Vec<String>> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let parser = KeymapParser::new()?;
    let font = LabelFont::discover(font_path);
    let mut generated = Vec::new();

    for block in parser.extract_layer_blocks(content) {
        let tokens = parser.tokenize_bindings(&block.bindings);
        if tokens.len() < SLOT_COUNT {
            debug!(
                layer = %block.name,
                tokens = tokens.len(),
                "short layer, trailing slots left blank"
            );
        }

        let image = diagram::render_layer_image(&block.name, &tokens, &font);
        let filename = format!("{}.png", block.name);
        let path = output_dir.join(&filename);
        image
            .save(&path)
            .with_context(|| format!("Failed to write diagram: {}", path.display()))?;

        info!(layer = %block.name, file = %path.display(), "rendered layer diagram");
        generated.push(filename);
    }

    Ok(generated)
}

/// Renders every layer of a keymap file to PNG files.
///
/// # Errors
///
/// Returns an error if the keymap file cannot be read, plus the output
/// failures of [`render_keymap`].
pub fn render_keymap_file(
    path: &Path,
    output_dir: &Path,
    font_path: Option<&Path>,
) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    render_keymap(&content, output_dir, font_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keymap_with_tokens(tokens: &str) -> String {
        format!(
            "/ {{ keymap {{ compatible = \"zmk,keymap\";\n\
             layer_0 {{\n bindings = <\n{tokens}\n>;\n}};\n}}; }};\n"
        )
    }

    #[test]
    fn test_render_creates_one_file_per_block() {
        let dir = tempfile::tempdir().unwrap();
        let content = keymap_with_tokens(&"&trans ".repeat(42));

        let files = render_keymap(&content, dir.path(), None).unwrap();

        assert_eq!(files, vec!["layer_0.png".to_string()]);
        assert!(dir.path().join("layer_0.png").exists());
    }

    #[test]
    fn test_render_skips_unparseable_content() {
        let dir = tempfile::tempdir().unwrap();
        let files = render_keymap("no layer blocks here", dir.path(), None).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_render_tolerates_short_layers() {
        let dir = tempfile::tempdir().unwrap();
        let content = keymap_with_tokens("&kp A &kp B &kp C");

        let files = render_keymap(&content, dir.path(), None).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_render_creates_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let content = keymap_with_tokens("&kp A");

        render_keymap(&content, &nested, None).unwrap();
        assert!(nested.join("layer_0.png").exists());
    }
}
