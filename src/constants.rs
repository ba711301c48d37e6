//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed key layout of the
//! target board.

/// The binary name of the application (used for the config directory and
/// in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "lazyzmk";

/// Total number of key slots on the target split board (36 main + 6 thumbs).
pub const SLOT_COUNT: usize = 42;

/// Keys per main row (6 left + 6 right).
pub const MAIN_ROW_KEYS: usize = 12;

/// Number of main rows above the thumb cluster.
pub const MAIN_ROWS: usize = 3;

/// Keys in the thumb cluster (3 left + 3 right).
pub const THUMB_KEYS: usize = 6;
