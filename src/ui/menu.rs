//! Delete affordance overlay
//!
//! The stock [`DeleteAffordance`] implementation: a small "Delete" badge
//! anchored above the tap that selected a line. The overlay only tracks
//! position and visibility; the scene/renderer pair draws it, and the
//! host decides activation by testing presses against [`MenuOverlay::hit`]
//! before routing them to the controller.

use crate::app::controller::DeleteAffordance;
use crate::config::Appearance;
use crate::domain::geometry::Point;
use crate::ui::scene::Badge;

/// Tracks where (and whether) the delete badge is showing
#[derive(Debug, Default)]
pub struct MenuOverlay {
    anchor: Option<Point>,
}

impl MenuOverlay {
    pub const BADGE_WIDTH: f32 = 96.0;
    pub const BADGE_HEIGHT: f32 = 28.0;
    /// Gap between the anchor point and the badge's bottom edge
    pub const ANCHOR_GAP: f32 = 14.0;

    const LABEL: &'static str = "Delete";

    /// Creates a hidden overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the badge is showing
    pub fn is_visible(&self) -> bool {
        self.anchor.is_some()
    }

    /// Returns the anchor the badge is attached to, if showing
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns the badge for the scene, if showing
    pub fn badge(&self, appearance: &Appearance) -> Option<Badge> {
        let origin = self.origin()?;
        Some(Badge {
            x: origin.x,
            y: origin.y,
            width: Self::BADGE_WIDTH,
            height: Self::BADGE_HEIGHT,
            fill: appearance.badge_fill,
            label_color: appearance.badge_label,
            label: Self::LABEL.to_string(),
        })
    }

    /// Returns true if `point` presses the visible badge
    pub fn hit(&self, point: Point) -> bool {
        let Some(origin) = self.origin() else {
            return false;
        };
        point.x >= origin.x
            && point.x < origin.x + Self::BADGE_WIDTH
            && point.y >= origin.y
            && point.y < origin.y + Self::BADGE_HEIGHT
    }

    /// Top-left corner of the badge: centered on the anchor, floating
    /// above it
    fn origin(&self) -> Option<Point> {
        self.anchor.map(|anchor| {
            Point::new(
                anchor.x - Self::BADGE_WIDTH / 2.0,
                anchor.y - Self::ANCHOR_GAP - Self::BADGE_HEIGHT,
            )
        })
    }
}

impl DeleteAffordance for MenuOverlay {
    fn show_delete_at(&mut self, at: Point) {
        self.anchor = Some(at);
    }

    fn hide(&mut self) {
        self.anchor = None;
    }
}
