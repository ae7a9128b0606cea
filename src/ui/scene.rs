//! Scene construction for the drawing surface
//!
//! Builds a pure description of everything to draw — strokes with
//! resolved colors plus the optional delete badge — from the line store
//! and the appearance configuration. Separating this from rasterization
//! keeps the draw-order and color rules testable without touching
//! pixels.

use tiny_skia::Color;

use crate::config::Appearance;
use crate::domain::geometry::Line;
use crate::domain::store::LineStore;

/// Role of a stroke within the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    Finished,
    InProgress,
    Selected,
}

/// One stroke ready for rasterization
#[derive(Debug, Clone, Copy)]
pub struct SceneStroke {
    pub line: Line,
    pub color: Color,
    pub thickness: f32,
    pub kind: StrokeKind,
}

/// The delete badge, positioned and styled for drawing
#[derive(Debug, Clone)]
pub struct Badge {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
    pub label_color: Color,
    pub label: String,
}

impl Badge {
    /// Returns true if `x`/`y` in canvas units falls on the badge
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Everything the renderer needs for one frame
///
/// Stroke order encodes z-order: finished lines in draw order, then
/// in-progress lines, then the selected line re-stroked on top. The
/// badge, when present, draws above all strokes.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub strokes: Vec<SceneStroke>,
    pub badge: Option<Badge>,
}

impl Scene {
    /// Builds the scene for the store's current state
    pub fn from_store(
        store: &LineStore,
        appearance: &Appearance,
        width: u32,
        height: u32,
    ) -> Self {
        let mut strokes = Vec::with_capacity(store.finished().len() + store.in_progress_count() + 1);

        for line in store.finished() {
            strokes.push(SceneStroke {
                line: *line,
                color: finished_color(line, appearance),
                thickness: appearance.thickness,
                kind: StrokeKind::Finished,
            });
        }

        for line in store.in_progress_lines() {
            strokes.push(SceneStroke {
                line: *line,
                color: appearance.in_progress_color,
                thickness: appearance.thickness,
                kind: StrokeKind::InProgress,
            });
        }

        if let Some(line) = store.selected_line() {
            strokes.push(SceneStroke {
                line: *line,
                color: appearance.selected_color,
                thickness: appearance.thickness,
                kind: StrokeKind::Selected,
            });
        }

        Self {
            width,
            height,
            background: appearance.background,
            strokes,
            badge: None,
        }
    }
}

/// Resolves the color of a finished line
///
/// With angle shading on, the gray level is the stroke angle in degrees
/// divided by 360, drawn at half opacity; otherwise the flat configured
/// color is used.
fn finished_color(line: &Line, appearance: &Appearance) -> Color {
    if appearance.angle_shading {
        let level = (line.angle_degrees() / 360.0 * 255.0).round() as u8;
        Color::from_rgba8(level, level, level, 128)
    } else {
        appearance.finished_color
    }
}
