//! Parsing for input file formats.
//!
//! This module handles reading Vial `.vil` layout exports.

pub mod vial;

// Re-export commonly used functions
pub use vial::{parse_vial_layout, parse_vial_layout_str};
