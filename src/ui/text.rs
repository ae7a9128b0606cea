//! Text rasterization for overlay labels
//!
//! Draws short labels (the delete badge caption) straight into a pixmap
//! using ab_glyph outlines. The crate bundles no font: hosts hand in TTF
//! or OTF bytes at runtime, and callers fall back to vector glyphs when
//! no font was provided.

use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use thiserror::Error;
use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

/// Label rendering errors
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("font data could not be parsed: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

/// A host-supplied font used for badge labels
pub struct LabelFont {
    font: FontVec,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont").finish_non_exhaustive()
    }
}

impl LabelFont {
    /// Parses font bytes (TTF/OTF) supplied by the host
    pub fn from_vec(data: Vec<u8>) -> Result<Self, LabelError> {
        Ok(Self {
            font: FontVec::try_from_vec(data)?,
        })
    }

    /// Returns the advance width of `text` at `px_size`
    pub fn text_width(&self, text: &str, px_size: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px_size));
        let mut width = 0.0;
        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            previous = Some(id);
        }
        width
    }

    /// Draws `text` centered on (`center_x`, `center_y`)
    ///
    /// Glyph coverage is blended over whatever the pixmap already holds,
    /// so the badge background must be drawn first.
    pub fn draw_centered(
        &self,
        pixmap: &mut Pixmap,
        text: &str,
        center_x: f32,
        center_y: f32,
        px_size: f32,
        color: Color,
    ) {
        let scaled = self.font.as_scaled(PxScale::from(px_size));
        let width = self.text_width(text, px_size);
        let baseline = center_y + (scaled.ascent() + scaled.descent()) / 2.0;
        let mut caret = point(center_x - width / 2.0, baseline);

        let mut previous: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret.x += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(PxScale::from(px_size), caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, coverage| {
                    blend_pixel(
                        pixmap,
                        bounds.min.x as i32 + gx as i32,
                        bounds.min.y as i32 + gy as i32,
                        color,
                        coverage,
                    );
                });
            }
        }
    }
}

/// Source-over blend of one covered pixel, in premultiplied space
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color, coverage: f32) {
    if coverage <= 0.0 {
        return;
    }
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let src_alpha = (color.alpha() * coverage.min(1.0)).clamp(0.0, 1.0);
    let index = (y * width + x) as usize;
    let pixels = pixmap.pixels_mut();
    let dst = pixels[index];

    let inv = 1.0 - src_alpha;
    let out_r = color.red() * src_alpha + f32::from(dst.red()) / 255.0 * inv;
    let out_g = color.green() * src_alpha + f32::from(dst.green()) / 255.0 * inv;
    let out_b = color.blue() * src_alpha + f32::from(dst.blue()) / 255.0 * inv;
    let out_a = src_alpha + f32::from(dst.alpha()) / 255.0 * inv;

    let a = (out_a * 255.0).round() as u8;
    let r = ((out_r * 255.0).round() as u8).min(a);
    let g = ((out_g * 255.0).round() as u8).min(a);
    let b = ((out_b * 255.0).round() as u8).min(a);
    if let Some(pixel) = PremultipliedColorU8::from_rgba(r, g, b, a) {
        pixels[index] = pixel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_font_data_is_rejected() {
        let result = LabelFont::from_vec(vec![0, 1, 2, 3, 4]);
        assert!(matches!(result, Err(LabelError::InvalidFont(_))));
    }

    #[test]
    fn empty_font_data_is_rejected() {
        assert!(LabelFont::from_vec(Vec::new()).is_err());
    }

    #[test]
    fn blend_full_coverage_replaces_pixel() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 255, 255, 255));

        blend_pixel(&mut pixmap, 0, 0, Color::from_rgba8(255, 0, 0, 255), 1.0);
        let pixel = pixmap.pixel(0, 0).unwrap();
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.green(), 0);
        assert_eq!(pixel.blue(), 0);
    }

    #[test]
    fn blend_partial_coverage_mixes_with_background() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 255, 255, 255));

        blend_pixel(&mut pixmap, 1, 1, Color::from_rgba8(0, 0, 0, 255), 0.5);
        let pixel = pixmap.pixel(1, 1).unwrap();
        assert!(pixel.red() > 0 && pixel.red() < 255);
        assert_eq!(pixel.red(), pixel.green());
    }

    #[test]
    fn zero_coverage_and_out_of_bounds_are_noops() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 255, 255, 255));

        blend_pixel(&mut pixmap, 0, 0, Color::from_rgba8(0, 0, 0, 255), 0.0);
        blend_pixel(&mut pixmap, -1, 0, Color::from_rgba8(0, 0, 0, 255), 1.0);
        blend_pixel(&mut pixmap, 5, 5, Color::from_rgba8(0, 0, 0, 255), 1.0);

        let pixel = pixmap.pixel(0, 0).unwrap();
        assert_eq!(pixel.red(), 255);
        assert_eq!(pixel.alpha(), 255);
    }
}
