//! Vial `.vil` layout file parsing.
//!
//! Vial exports are plain JSON documents. Only the top-level `layout`
//! array is interpreted here; everything else in the file is ignored.

use crate::models::VialLayout;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parses a Vial layout from a `.vil` file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid Vial JSON.
pub fn parse_vial_layout(path: &Path) -> Result<VialLayout> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_vial_layout_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}

/// Parses a Vial layout from an in-memory JSON string.
///
/// # Errors
///
/// Returns an error if the string is not valid Vial JSON.
pub fn parse_vial_layout_str(content: &str) -> Result<VialLayout> {
    serde_json::from_str(content).context("Invalid .vil document")
}
