use tiny_skia::Color;

/// Presentation parameters for the drawing surface
///
/// None of these affect the core line state; hosts may swap them at any
/// time and simply repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub background: Color,
    /// Flat color for finished lines when angle shading is off
    pub finished_color: Color,
    pub in_progress_color: Color,
    pub selected_color: Color,
    pub badge_fill: Color,
    pub badge_label: Color,
    pub thickness: f32,
    /// Shade each finished line by its stroke angle instead of the flat
    /// finished color
    pub angle_shading: bool,
}

impl Appearance {
    pub const MIN_THICKNESS: f32 = 1.0;
    pub const MAX_THICKNESS: f32 = 64.0;
    pub const DEFAULT_THICKNESS: f32 = 10.0;

    /// Returns a copy with out-of-range values clamped
    ///
    /// Non-finite thickness falls back to the default rather than
    /// clamping, since `NaN` survives `clamp`.
    pub fn sanitized(mut self) -> Self {
        self.thickness = if self.thickness.is_finite() {
            self.thickness
                .clamp(Self::MIN_THICKNESS, Self::MAX_THICKNESS)
        } else {
            Self::DEFAULT_THICKNESS
        };
        self
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(255, 255, 255, 255),
            finished_color: Color::from_rgba8(0, 0, 0, 255),
            in_progress_color: Color::from_rgba8(220, 30, 30, 255),
            selected_color: Color::from_rgba8(30, 160, 60, 255),
            badge_fill: Color::from_rgba8(40, 40, 40, 230),
            badge_label: Color::from_rgba8(255, 255, 255, 255),
            thickness: Self::DEFAULT_THICKNESS,
            angle_shading: true,
        }
    }
}
