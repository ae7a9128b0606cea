//! Tap recognition over raw touch events
//!
//! Turns press/release sequences into the two gestures the controller
//! consumes: a single tap (select a line) and a double tap (clear the
//! canvas). Because a single tap must not fire while a double tap is
//! still possible, the first tap is held pending until the double-tap
//! window closes; recognition is therefore driven both by events and by
//! [`TapRecognizer::poll`], which hosts call from their timer/idle hook.
//!
//! All entry points take `now` explicitly so tests can script time
//! instead of sleeping.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use log::trace;

use crate::domain::geometry::Point;
use crate::domain::store::TouchId;

/// Maximum distance a press may stray from its origin and still count as
/// a tap; anything farther is an ordinary drawing drag
pub const TAP_SLOP: f32 = 8.0;

/// Longest a finger may rest before the press stops being a tap
pub const TAP_MAX_HOLD: Duration = Duration::from_millis(350);

/// Window after a tap's release in which a second tap forms a double tap
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Maximum distance between two taps that form a double tap
pub const DOUBLE_TAP_RADIUS: f32 = 40.0;

/// A recognized tap gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tap {
    /// An isolated tap, carrying its release position
    Single(Point),
    /// Two qualifying taps in quick succession, close together
    Double,
}

/// What a touch release turned out to be
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReleaseOutcome {
    /// The release was claimed as a tap; the touch's in-progress stroke
    /// should be cancelled rather than finished
    pub claimed: bool,
    /// A gesture that resolved as a result of this release
    pub resolved: Option<Tap>,
}

impl ReleaseOutcome {
    fn stroke(resolved: Option<Tap>) -> Self {
        Self {
            claimed: false,
            resolved,
        }
    }

    fn claimed(resolved: Option<Tap>) -> Self {
        Self {
            claimed: true,
            resolved,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Press {
    origin: Point,
    pressed_at: Instant,
    /// Still a tap candidate: sole finger so far, within the slop
    eligible: bool,
    /// Pressed while a first tap was pending, close enough to chain into
    /// a double tap
    chained: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingTap {
    position: Point,
    released_at: Instant,
}

/// Recognizes single and double taps from touch phases
///
/// Feed every touch event through the matching `on_*` method and call
/// [`poll`](Self::poll) whenever time passes; a pending single tap only
/// fires once the double-tap window has closed without a second tap.
#[derive(Debug, Default)]
pub struct TapRecognizer {
    active: HashMap<TouchId, Press>,
    pending: Option<PendingTap>,
}

impl TapRecognizer {
    /// Creates a recognizer with no taps in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a touch landing
    ///
    /// May resolve a previously pending single tap: a new press that
    /// lands after the double-tap window, or too far from the first tap,
    /// proves the double tap can no longer happen.
    pub fn on_began(&mut self, touch: TouchId, position: Point, now: Instant) -> Option<Tap> {
        let mut resolved = None;
        let mut chained = false;
        if let Some(pending) = self.pending {
            let in_window = now.duration_since(pending.released_at) <= DOUBLE_TAP_WINDOW;
            let in_reach = position.distance_to(pending.position) <= DOUBLE_TAP_RADIUS;
            if in_window && in_reach {
                chained = true;
            } else {
                trace!("pending tap resolves single: next press out of reach");
                resolved = Some(Tap::Single(pending.position));
                self.pending = None;
            }
        }

        let solo = self.active.is_empty();
        // A second finger disqualifies every candidate, including itself.
        for press in self.active.values_mut() {
            press.eligible = false;
        }
        self.active.insert(
            touch,
            Press {
                origin: position,
                pressed_at: now,
                eligible: solo,
                chained,
            },
        );
        resolved
    }

    /// Records touch movement
    ///
    /// Crossing the slop disqualifies the candidate; if that press was
    /// chained to a pending tap, the pending single tap fires because the
    /// double tap just failed.
    pub fn on_moved(&mut self, touch: TouchId, position: Point) -> Option<Tap> {
        let Some(press) = self.active.get_mut(&touch) else {
            return None;
        };
        if press.eligible && position.distance_to(press.origin) > TAP_SLOP {
            press.eligible = false;
            if press.chained {
                if let Some(pending) = self.pending.take() {
                    trace!("pending tap resolves single: second press became a drag");
                    return Some(Tap::Single(pending.position));
                }
            }
        }
        None
    }

    /// Records a touch lifting and classifies the release
    pub fn on_ended(&mut self, touch: TouchId, position: Point, now: Instant) -> ReleaseOutcome {
        let Some(press) = self.active.remove(&touch) else {
            return ReleaseOutcome::stroke(None);
        };

        let is_tap = press.eligible
            && now.duration_since(press.pressed_at) <= TAP_MAX_HOLD
            && position.distance_to(press.origin) <= TAP_SLOP;
        if !is_tap {
            let resolved = if press.chained {
                self.pending.take().map(|pending| {
                    trace!("pending tap resolves single: second press was no tap");
                    Tap::Single(pending.position)
                })
            } else {
                None
            };
            return ReleaseOutcome::stroke(resolved);
        }

        match self.pending.take() {
            Some(pending) => {
                let in_window = now.duration_since(pending.released_at) <= DOUBLE_TAP_WINDOW;
                let in_reach = position.distance_to(pending.position) <= DOUBLE_TAP_RADIUS;
                if in_window && in_reach {
                    trace!("double tap recognized");
                    ReleaseOutcome::claimed(Some(Tap::Double))
                } else {
                    // The window lapsed while the second finger was down;
                    // the first tap fires alone and this one starts a new
                    // chain.
                    self.pending = Some(PendingTap {
                        position,
                        released_at: now,
                    });
                    ReleaseOutcome::claimed(Some(Tap::Single(pending.position)))
                }
            }
            None => {
                trace!("tap held pending until the double-tap window closes");
                self.pending = Some(PendingTap {
                    position,
                    released_at: now,
                });
                ReleaseOutcome::claimed(None)
            }
        }
    }

    /// Resolves a pending single tap once its double-tap window closes
    ///
    /// Hosts call this from their timer or idle hook;
    /// [`pending_deadline`](Self::pending_deadline) says when the next
    /// call is due.
    pub fn poll(&mut self, now: Instant) -> Option<Tap> {
        let pending = self.pending?;
        if now.duration_since(pending.released_at) > DOUBLE_TAP_WINDOW {
            self.pending = None;
            trace!("pending tap resolves single: window closed");
            Some(Tap::Single(pending.position))
        } else {
            None
        }
    }

    /// Returns when the pending single tap will resolve, if one is held
    pub fn pending_deadline(&self) -> Option<Instant> {
        self.pending
            .map(|pending| pending.released_at + DOUBLE_TAP_WINDOW)
    }

    /// Forgets all presses and any pending tap
    ///
    /// Called when the host cancels the touch sequence.
    pub fn reset(&mut self) {
        self.active.clear();
        self.pending = None;
    }
}
