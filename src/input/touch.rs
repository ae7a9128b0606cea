//! Touch-phase events delivered by the host
//!
//! Hosts translate their native pointer/touch events into this small
//! vocabulary before handing them to the controller. Mouse-driven hosts
//! typically synthesize a single touch identity for the primary button.

use crate::domain::geometry::Point;
use crate::domain::store::TouchId;

/// Phase of a touch within its gesture
///
/// Every touch follows `Began → Moved* → Ended` or is cut short by
/// `Cancelled` when the host revokes the whole sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    Cancelled,
}

/// One touch event as reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub id: TouchId,
    pub position: Point,
    pub phase: TouchPhase,
}

impl TouchEvent {
    /// Creates a touch-began event
    pub fn began(id: TouchId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: TouchPhase::Began,
        }
    }

    /// Creates a touch-moved event
    pub fn moved(id: TouchId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: TouchPhase::Moved,
        }
    }

    /// Creates a touch-ended event
    pub fn ended(id: TouchId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: TouchPhase::Ended,
        }
    }

    /// Creates a touch-cancelled event
    pub fn cancelled(id: TouchId, position: Point) -> Self {
        Self {
            id,
            position,
            phase: TouchPhase::Cancelled,
        }
    }
}
