//! Scene rasterization using tiny-skia
//!
//! Turns a [`Scene`](crate::ui::scene::Scene) into pixels: background
//! fill, one round-capped stroke per line, and the delete badge on top.
//! All layout and color decisions happen during scene construction; this
//! module only draws.

use tiny_skia::{
    FillRule, LineCap, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform,
};

use crate::ui::scene::{Badge, Scene, SceneStroke};
use crate::ui::text::LabelFont;

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("failed to create a {width}x{height} pixmap")]
    PixmapCreation { width: u32, height: u32 },
}

/// Rasterizes scenes into pixmaps
///
/// Holds the optional badge label font; without one the badge falls back
/// to a vector glyph.
#[derive(Debug, Default)]
pub struct SceneRenderer {
    label_font: Option<LabelFont>,
}

impl SceneRenderer {
    /// Creates a renderer with no label font
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a host-supplied font for badge labels
    pub fn set_label_font(&mut self, font: LabelFont) {
        self.label_font = Some(font);
    }

    /// Renders the scene into a freshly allocated pixmap
    pub fn render(&self, scene: &Scene) -> Result<Pixmap, RendererError> {
        let mut pixmap =
            Pixmap::new(scene.width, scene.height).ok_or(RendererError::PixmapCreation {
                width: scene.width,
                height: scene.height,
            })?;

        pixmap.fill(scene.background);

        for stroke in &scene.strokes {
            draw_stroke(&mut pixmap, stroke);
        }

        if let Some(badge) = &scene.badge {
            self.draw_badge(&mut pixmap, badge);
        }

        Ok(pixmap)
    }

    fn draw_badge(&self, pixmap: &mut Pixmap, badge: &Badge) {
        let radius = badge.height / 2.0;
        let center_y = badge.y + radius;

        // Pill shape: a circle at each end joined by a rectangle.
        let mut builder = PathBuilder::new();
        builder.push_circle(badge.x + radius, center_y, radius);
        builder.push_circle(badge.x + badge.width - radius, center_y, radius);
        if let Some(rect) = SkiaRect::from_xywh(
            badge.x + radius,
            badge.y,
            badge.width - 2.0 * radius,
            badge.height,
        ) {
            builder.push_rect(rect);
        }

        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.set_color(badge.fill);
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }

        let center_x = badge.x + badge.width / 2.0;
        match &self.label_font {
            Some(font) => {
                font.draw_centered(
                    pixmap,
                    &badge.label,
                    center_x,
                    center_y,
                    badge.height * 0.55,
                    badge.label_color,
                );
            }
            None => draw_cross_glyph(pixmap, badge, center_x, center_y),
        }
    }
}

fn draw_stroke(pixmap: &mut Pixmap, stroke: &SceneStroke) {
    let mut paint = Paint::default();
    paint.set_color(stroke.color);
    paint.anti_alias = true;

    // A zero-length line has no path to stroke; with round caps it reads
    // as a dot of the stroke's width.
    if stroke.line.length() == 0.0 {
        let mut builder = PathBuilder::new();
        builder.push_circle(
            stroke.line.begin.x,
            stroke.line.begin.y,
            stroke.thickness / 2.0,
        );
        if let Some(path) = builder.finish() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        return;
    }

    let mut builder = PathBuilder::new();
    builder.move_to(stroke.line.begin.x, stroke.line.begin.y);
    builder.line_to(stroke.line.end.x, stroke.line.end.y);

    if let Some(path) = builder.finish() {
        let pen = Stroke {
            width: stroke.thickness,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &pen, Transform::identity(), None);
    }
}

/// Vector fallback for the badge caption when no font is installed
fn draw_cross_glyph(pixmap: &mut Pixmap, badge: &Badge, center_x: f32, center_y: f32) {
    let arm = badge.height * 0.22;
    let mut paint = Paint::default();
    paint.set_color(badge.label_color);
    paint.anti_alias = true;
    let pen = Stroke {
        width: (badge.height * 0.14).max(2.0),
        line_cap: LineCap::Round,
        ..Stroke::default()
    };

    for (from, to) in [
        ((center_x - arm, center_y - arm), (center_x + arm, center_y + arm)),
        ((center_x - arm, center_y + arm), (center_x + arm, center_y - arm)),
    ] {
        let mut builder = PathBuilder::new();
        builder.move_to(from.0, from.1);
        builder.line_to(to.0, to.1);
        if let Some(path) = builder.finish() {
            pixmap.stroke_path(&path, &paint, &pen, Transform::identity(), None);
        }
    }
}

/// Returns the pixmap's pixels as tightly packed RGBA bytes
///
/// Suitable for hosts that upload the frame to a texture or blit it into
/// a native surface.
pub fn pixmap_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap.data().to_vec()
}
