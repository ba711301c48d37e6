//! Pixel geometry for the fixed 42-key split layout.
//!
//! Maps a flat slot index (keymap order: three rows of 12, then 6
//! thumbs) to the pixel origin of its key rectangle. Columns 0-5 of a
//! main row are the left half, 6-11 the right half, with a wider gap
//! between the halves; each row carries a small cosmetic stagger. The
//! constants describe one specific board shape - a different physical
//! layout is a different geometry table, not a parameter of this one.

use crate::constants::{MAIN_ROWS, MAIN_ROW_KEYS};

/// Key rectangle width in pixels.
pub const KEY_WIDTH: u32 = 60;
/// Key rectangle height in pixels.
pub const KEY_HEIGHT: u32 = 60;
/// Gap between adjacent keys in pixels.
pub const KEY_GAP: u32 = 5;
/// Canvas margin in pixels.
pub const MARGIN: u32 = 10;
/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 900;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 350;

/// Horizontal key pitch (key plus gap).
const PITCH: f32 = (KEY_WIDTH + KEY_GAP) as f32;
/// Vertical key pitch (key plus gap).
const ROW_PITCH: f32 = (KEY_HEIGHT + KEY_GAP) as f32;
/// Per-row vertical stagger, top to bottom.
const ROW_STAGGER: [f32; MAIN_ROWS] = [0.0, 15.0, 20.0];
/// Extra horizontal gap between the two halves.
const HALF_GAP: f32 = 40.0;
/// X offset where the right half's column grid starts.
const LEFT_HALF_WIDTH: f32 = 6.0 * PITCH + HALF_GAP;
/// Left thumb cluster start, measured in key pitches from the margin.
const LEFT_THUMB_START: f32 = 3.5 * PITCH;
/// Right thumb cluster offset relative to the right half's origin.
const RIGHT_THUMB_START: f32 = -0.5 * PITCH;
/// Vertical drop of the thumb row below the bottom main row.
const THUMB_DROP: f32 = 10.0;

/// Pixel origin of the key rectangle for a slot index.
///
/// Pure function of the slot index: slots 0-35 are the three main rows
/// in row-major order, 36-41 the thumb cluster (three left of center,
/// three right of center).
#[must_use]
pub fn slot_origin(slot: usize) -> (i32, i32) {
    let margin = MARGIN as f32;

    let (x, y) = if slot < MAIN_ROWS * MAIN_ROW_KEYS {
        let row = slot / MAIN_ROW_KEYS;
        let col = slot % MAIN_ROW_KEYS;
        let x = if col < MAIN_ROW_KEYS / 2 {
            margin + col as f32 * PITCH
        } else {
            margin + LEFT_HALF_WIDTH + (col - MAIN_ROW_KEYS / 2) as f32 * PITCH
        };
        (x, margin + row as f32 * ROW_PITCH + ROW_STAGGER[row])
    } else {
        let col = slot - MAIN_ROWS * MAIN_ROW_KEYS;
        let x = if col < 3 {
            margin + LEFT_THUMB_START + col as f32 * PITCH
        } else {
            margin + LEFT_HALF_WIDTH + RIGHT_THUMB_START + (col - 3) as f32 * PITCH
        };
        (x, margin + MAIN_ROWS as f32 * ROW_PITCH + THUMB_DROP)
    };

    (x.round() as i32, y.round() as i32)
}
