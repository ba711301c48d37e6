//! PNG diagram drawing for keymap layers.
//!
//! Draws one labeled rectangle per key slot onto a fixed-size canvas.
//! Labels use a TrueType font when one can be found and fall back to a
//! built-in 8x8 bitmap font otherwise; the fallback is silent because a
//! missing font must never abort rendering.

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::geometry::{slot_origin, CANVAS_HEIGHT, CANVAS_WIDTH, KEY_HEIGHT, KEY_WIDTH, MARGIN};
use crate::constants::SLOT_COUNT;
use crate::keycode_db::display::{display_binding, BindingKind};
use crate::models::RgbColor;

/// Label height in pixels.
const LABEL_HEIGHT: f32 = 16.0;

/// Canvas background.
const BACKGROUND: RgbColor = RgbColor::new(30, 30, 30);
/// Key rectangle outline.
const OUTLINE: RgbColor = RgbColor::new(100, 100, 100);
/// Layer title text.
const TITLE_COLOR: RgbColor = RgbColor::new(255, 255, 255);

/// Fill/text color pair per binding kind.
const DEFAULT_PAIR: (RgbColor, RgbColor) = (RgbColor::new(240, 240, 240), RgbColor::new(0, 0, 0));
const TRANSPARENT_PAIR: (RgbColor, RgbColor) =
    (RgbColor::new(60, 60, 60), RgbColor::new(150, 150, 150));
const NOOP_PAIR: (RgbColor, RgbColor) =
    (RgbColor::new(50, 50, 50), RgbColor::new(100, 100, 100));
const LAYER_PAIR: (RgbColor, RgbColor) =
    (RgbColor::new(170, 190, 230), RgbColor::new(20, 35, 70));
const SWITCH_PAIR: (RgbColor, RgbColor) =
    (RgbColor::new(230, 195, 150), RgbColor::new(80, 50, 10));

/// TrueType candidates probed when no explicit font is configured.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Label font: a loaded TrueType face, or the built-in bitmap fallback.
pub enum LabelFont {
    /// TrueType face loaded from disk.
    TrueType(FontVec),
    /// Built-in 8x8 bitmap font.
    Bitmap,
}

impl LabelFont {
    /// Loads the first usable font: the explicit path if given, then the
    /// system candidates, then the built-in bitmap fallback. Never fails.
    #[must_use]
    pub fn discover(explicit: Option<&Path>) -> Self {
        let candidates = explicit
            .map(Path::to_path_buf)
            .into_iter()
            .chain(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));

        for path in candidates {
            if let Some(font) = Self::try_load(&path) {
                debug!(font = %path.display(), "loaded label font");
                return Self::TrueType(font);
            }
        }

        debug!("no TrueType font found, using built-in bitmap font");
        Self::Bitmap
    }

    fn try_load(path: &Path) -> Option<FontVec> {
        let data = fs::read(path).ok()?;
        FontVec::try_from_vec(data).ok()
    }

    /// Pixel extent of a label at the given height.
    #[must_use]
    pub fn measure(&self, text: &str, height: f32) -> (i32, i32) {
        match self {
            Self::TrueType(font) => {
                let (w, h) = text_size(PxScale::from(height), font, text);
                (w as i32, h as i32)
            }
            Self::Bitmap => {
                let scale = bitmap_scale(height);
                (text.chars().count() as i32 * 8 * scale, 8 * scale)
            }
        }
    }

    /// Draws a label with its top-left corner at (x, y). Out-of-bounds
    /// pixels are clipped.
    pub fn draw(&self, image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, height: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        match self {
            Self::TrueType(font) => {
                draw_text_mut(image, color, x, y, PxScale::from(height), font, text);
            }
            Self::Bitmap => draw_bitmap_text(image, color, x, y, bitmap_scale(height), text),
        }
    }
}

/// Integer upscale factor for the 8px bitmap font.
fn bitmap_scale(height: f32) -> i32 {
    ((height / 8.0).round() as i32).max(1)
}

/// Draws text using the built-in 8x8 glyphs. Characters without a glyph
/// (non-ASCII) are skipped.
fn draw_bitmap_text(image: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, scale: i32, text: &str) {
    let glyph_px = 8 * scale;

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch) else {
            continue;
        };
        let origin_x = x + i as i32 * glyph_px;

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..8u32 {
                if bits >> col & 1 == 1 {
                    let px = origin_x + col as i32 * scale;
                    let py = y + row as i32 * scale;
                    draw_filled_rect_mut(
                        image,
                        Rect::at(px, py).of_size(scale as u32, scale as u32),
                        color,
                    );
                }
            }
        }
    }
}

/// Renders one layer's tokens to a fresh canvas.
///
/// Draws at most [`SLOT_COUNT`] keys; surplus tokens are ignored and
/// missing ones leave their slots blank. The layer title is drawn last,
/// uppercased with underscores spaced out.
#[must_use]
pub fn render_layer_image(name: &str, tokens: &[String], font: &LabelFont) -> RgbImage {
    let mut image = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, pixel(BACKGROUND));

    for (slot, token) in tokens.iter().take(SLOT_COUNT).enumerate() {
        draw_key(&mut image, slot, token, font);
    }

    let title = name.to_uppercase().replace('_', " ");
    font.draw(
        &mut image,
        pixel(TITLE_COLOR),
        MARGIN as i32,
        MARGIN as i32,
        LABEL_HEIGHT,
        &title,
    );

    image
}

/// Draws one key rectangle with its label(s).
fn draw_key(image: &mut RgbImage, slot: usize, token: &str, font: &LabelFont) {
    let (x, y) = slot_origin(slot);
    let display = display_binding(token);
    let (fill, text) = color_pair(display.kind);

    let rect = Rect::at(x, y).of_size(KEY_WIDTH, KEY_HEIGHT);
    draw_filled_rect_mut(image, rect, pixel(fill));
    draw_hollow_rect_mut(image, rect, pixel(OUTLINE));

    let key_h = KEY_HEIGHT as i32;
    match display.secondary {
        Some(ref secondary) => {
            // Layer-tap keys stack the layer over the inner key
            draw_centered(image, font, pixel(text), &display.primary, x, y + key_h / 3);
            draw_centered(image, font, pixel(text), secondary, x, y + 2 * key_h / 3);
        }
        None => {
            draw_centered(image, font, pixel(text), &display.primary, x, y + key_h / 2);
        }
    }
}

/// Draws a label horizontally centered in a key, vertically centered on
/// `center_y`.
fn draw_centered(
    image: &mut RgbImage,
    font: &LabelFont,
    color: Rgb<u8>,
    label: &str,
    key_x: i32,
    center_y: i32,
) {
    if label.is_empty() {
        return;
    }
    let (w, h) = font.measure(label, LABEL_HEIGHT);
    let x = key_x + (KEY_WIDTH as i32 - w) / 2;
    let y = center_y - h / 2;
    font.draw(image, color, x, y, LABEL_HEIGHT, label);
}

/// Fill/text pair for a binding kind.
fn color_pair(kind: BindingKind) -> (RgbColor, RgbColor) {
    match kind {
        BindingKind::Transparent => TRANSPARENT_PAIR,
        BindingKind::NoOp => NOOP_PAIR,
        BindingKind::LayerRef => LAYER_PAIR,
        BindingKind::LayerSwitch => SWITCH_PAIR,
        BindingKind::Plain => DEFAULT_PAIR,
    }
}

fn pixel(color: RgbColor) -> Rgb<u8> {
    Rgb(color.channels())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(n: usize) -> Vec<String> {
        (0..n).map(|_| "&kp A".to_string()).collect()
    }

    #[test]
    fn test_canvas_dimensions() {
        let image = render_layer_image("layer_0", &tokens(42), &LabelFont::Bitmap);
        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_surplus_tokens_are_capped() {
        // 60 tokens must not panic or draw outside the canvas
        let image = render_layer_image("layer_0", &tokens(60), &LabelFont::Bitmap);
        assert_eq!(image.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    }

    #[test]
    fn test_short_layers_leave_background() {
        let image = render_layer_image("layer_0", &tokens(3), &LabelFont::Bitmap);
        // Slot 41 was never drawn: its origin still shows background
        let (x, y) = slot_origin(41);
        let p = image.get_pixel(x as u32 + 2, y as u32 + 2);
        assert_eq!(p.0, BACKGROUND.channels());
    }

    #[test]
    fn test_key_fill_reflects_binding_kind() {
        // Slots 0-1 sit under the title text; start the probes at slot 2
        let bindings: Vec<String> = ["&kp A", "&kp A", "&trans", "&none", "&mo 1"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let image = render_layer_image("layer_0", &bindings, &LabelFont::Bitmap);

        for (slot, pair) in [TRANSPARENT_PAIR, NOOP_PAIR, LAYER_PAIR].iter().enumerate() {
            let (x, y) = slot_origin(slot + 2);
            // Sample inside the rect, away from the outline and label
            let p = image.get_pixel(x as u32 + 3, y as u32 + 3);
            assert_eq!(p.0, pair.0.channels(), "slot {}", slot + 2);
        }
    }

    #[test]
    fn test_bitmap_measure() {
        let font = LabelFont::Bitmap;
        assert_eq!(font.measure("AB", 16.0), (32, 16));
        assert_eq!(font.measure("", 16.0), (0, 16));
    }

    #[test]
    fn test_bitmap_draw_clips_at_edges() {
        let mut image = RgbImage::from_pixel(20, 20, Rgb([0, 0, 0]));
        let font = LabelFont::Bitmap;
        // Partially and fully out of bounds: must not panic
        font.draw(&mut image, Rgb([255, 255, 255]), 15, 15, 16.0, "XY");
        font.draw(&mut image, Rgb([255, 255, 255]), -30, -30, 16.0, "XY");
    }
}
