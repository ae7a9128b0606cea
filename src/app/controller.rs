//! Canvas controller and coordination layer
//!
//! The controller is the single mutator of the line store: it routes
//! host touch events through the tap recognizer, applies the resulting
//! store operations, and drives the two injected collaborators — the
//! delete affordance and the repaint handle. Everything runs on the
//! host's event thread; there is no locking and no background work.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use log::debug;

use crate::domain::geometry::Point;
use crate::domain::hit::hit_test;
use crate::domain::store::LineStore;
use crate::input::taps::{Tap, TapRecognizer};
use crate::input::touch::{TouchEvent, TouchPhase};

/// External delete-affordance collaborator
///
/// Shown when a tap selects a line; activating it is the host's job and
/// ends in a call to [`CanvasController::delete_selected`]. Implemented
/// by [`MenuOverlay`](crate::ui::menu::MenuOverlay), or by anything a
/// host prefers. Deliberately not a global: the controller owns exactly
/// one handle.
pub trait DeleteAffordance {
    fn show_delete_at(&mut self, at: Point);
    fn hide(&mut self);
}

/// External repaint collaborator
///
/// Requests are idempotent; hosts may coalesce any number of them into
/// one paint, then pull fresh state via [`CanvasController::store`].
pub trait RepaintHandle {
    fn request_repaint(&mut self);
}

impl<T: DeleteAffordance> DeleteAffordance for Rc<RefCell<T>> {
    fn show_delete_at(&mut self, at: Point) {
        self.borrow_mut().show_delete_at(at);
    }

    fn hide(&mut self) {
        self.borrow_mut().hide();
    }
}

impl<T: RepaintHandle> RepaintHandle for Rc<RefCell<T>> {
    fn request_repaint(&mut self) {
        self.borrow_mut().request_repaint();
    }
}

struct NoopAffordance;

impl DeleteAffordance for NoopAffordance {
    fn show_delete_at(&mut self, _at: Point) {}

    fn hide(&mut self) {}
}

struct NoopRepaint;

impl RepaintHandle for NoopRepaint {
    fn request_repaint(&mut self) {}
}

/// Main controller for the drawing surface
///
/// Feed it touch events via [`handle_touch`](Self::handle_touch) (plus
/// [`tick`](Self::tick) so pending taps can time out), or call the
/// gesture methods directly when the host runs its own recognizers.
pub struct CanvasController {
    store: LineStore,
    taps: TapRecognizer,
    affordance: Box<dyn DeleteAffordance>,
    repaint: Box<dyn RepaintHandle>,
}

impl CanvasController {
    /// Creates a controller with an empty canvas and no-op collaborators
    pub fn new() -> Self {
        Self {
            store: LineStore::new(),
            taps: TapRecognizer::new(),
            affordance: Box::new(NoopAffordance),
            repaint: Box::new(NoopRepaint),
        }
    }

    /// Installs the delete-affordance collaborator
    pub fn set_affordance(&mut self, affordance: Box<dyn DeleteAffordance>) {
        self.affordance = affordance;
    }

    /// Installs the repaint collaborator
    pub fn set_repaint_handle(&mut self, repaint: Box<dyn RepaintHandle>) {
        self.repaint = repaint;
    }

    /// Returns the current canvas state for rendering
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Routes one host touch event
    ///
    /// `now` is passed explicitly so hosts replaying recorded input (and
    /// tests) control the clock. A release that the recognizer claims as
    /// a tap cancels that touch's line instead of finishing it, so taps
    /// never leave dot-sized strokes behind.
    pub fn handle_touch(&mut self, event: TouchEvent, now: Instant) {
        // A tap whose double-tap window lapsed before this event resolves
        // first, in its original order.
        if let Some(tap) = self.taps.poll(now) {
            self.apply_tap(tap);
        }

        match event.phase {
            TouchPhase::Began => {
                let resolved = self.taps.on_began(event.id, event.position, now);
                self.store.begin_line(event.id, event.position);
                debug!(
                    "touch {} begins a line at ({:.1}, {:.1})",
                    event.id.raw(),
                    event.position.x,
                    event.position.y
                );
                if let Some(tap) = resolved {
                    self.apply_tap(tap);
                }
            }
            TouchPhase::Moved => {
                let resolved = self.taps.on_moved(event.id, event.position);
                self.store.update_line(event.id, event.position);
                if let Some(tap) = resolved {
                    self.apply_tap(tap);
                }
            }
            TouchPhase::Ended => {
                let outcome = self.taps.on_ended(event.id, event.position, now);
                if outcome.claimed {
                    self.store.cancel_line(event.id);
                } else {
                    self.store.end_line(event.id, event.position);
                    debug!(
                        "touch {} finished a line, {} total",
                        event.id.raw(),
                        self.store.finished().len()
                    );
                }
                if let Some(tap) = outcome.resolved {
                    self.apply_tap(tap);
                }
            }
            TouchPhase::Cancelled => {
                debug!(
                    "host cancelled the touch sequence, dropping {} in-progress lines",
                    self.store.in_progress_count()
                );
                self.store.cancel_all();
                self.taps.reset();
            }
        }

        self.repaint.request_repaint();
    }

    /// Resolves time-based gestures; call from the host's timer/idle hook
    ///
    /// [`next_deadline`](Self::next_deadline) says when the next call is
    /// actually needed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(tap) = self.taps.poll(now) {
            self.apply_tap(tap);
        }
    }

    /// Returns when [`tick`](Self::tick) next has work to do, if ever
    pub fn next_deadline(&self) -> Option<Instant> {
        self.taps.pending_deadline()
    }

    /// Applies a single tap: select the hit line or clear the selection
    ///
    /// Also an entry point for hosts with their own gesture recognizers.
    pub fn single_tap(&mut self, at: Point) {
        match hit_test(self.store.finished(), at) {
            Some(index) => {
                self.store.select(index);
                debug!("tap at ({:.1}, {:.1}) selected line {index}", at.x, at.y);
                self.affordance.show_delete_at(at);
            }
            None => {
                self.store.deselect();
                self.affordance.hide();
            }
        }
        self.repaint.request_repaint();
    }

    /// Applies a double tap: clear the whole canvas
    ///
    /// Also an entry point for hosts with their own gesture recognizers.
    pub fn double_tap(&mut self) {
        debug!(
            "double tap clears {} finished lines",
            self.store.finished().len()
        );
        self.store.clear_all();
        self.affordance.hide();
        self.repaint.request_repaint();
    }

    /// Deletes the selected line; bound to the delete affordance
    pub fn delete_selected(&mut self) {
        if self.store.delete_selected().is_some() {
            debug!("deleted the selected line, {} left", self.store.finished().len());
        }
        self.affordance.hide();
        self.repaint.request_repaint();
    }

    fn apply_tap(&mut self, tap: Tap) {
        match tap {
            Tap::Single(at) => self.single_tap(at),
            Tap::Double => self.double_tap(),
        }
    }
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::domain::store::TouchId;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Records every affordance call for inspection through an Rc handle
    #[derive(Default)]
    struct RecordingAffordance {
        shown_at: Vec<Point>,
        hides: u32,
    }

    impl DeleteAffordance for RecordingAffordance {
        fn show_delete_at(&mut self, at: Point) {
            self.shown_at.push(at);
        }

        fn hide(&mut self) {
            self.hides += 1;
        }
    }

    #[derive(Default)]
    struct CountingRepaint {
        requests: u32,
    }

    impl RepaintHandle for CountingRepaint {
        fn request_repaint(&mut self) {
            self.requests += 1;
        }
    }

    fn controller_with_recorders() -> (
        CanvasController,
        Rc<RefCell<RecordingAffordance>>,
        Rc<RefCell<CountingRepaint>>,
    ) {
        let mut controller = CanvasController::new();
        let affordance = Rc::new(RefCell::new(RecordingAffordance::default()));
        let repaint = Rc::new(RefCell::new(CountingRepaint::default()));
        controller.set_affordance(Box::new(Rc::clone(&affordance)));
        controller.set_repaint_handle(Box::new(Rc::clone(&repaint)));
        (controller, affordance, repaint)
    }

    /// Drags well past the tap slop so the release finishes a stroke
    fn drag(controller: &mut CanvasController, id: u64, from: Point, to: Point, at: Instant) {
        let touch = TouchId::new(id);
        controller.handle_touch(TouchEvent::began(touch, from), at);
        controller.handle_touch(TouchEvent::moved(touch, to), at + ms(40));
        controller.handle_touch(TouchEvent::ended(touch, to), at + ms(120));
    }

    fn tap(controller: &mut CanvasController, id: u64, at_point: Point, at: Instant) {
        let touch = TouchId::new(id);
        controller.handle_touch(TouchEvent::began(touch, at_point), at);
        controller.handle_touch(TouchEvent::ended(touch, at_point), at + ms(40));
    }

    #[test]
    fn drag_draws_a_finished_line() {
        let mut controller = CanvasController::new();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        let finished = controller.store().finished();
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].begin, p(0.0, 0.0));
        assert_eq!(finished[0].end, p(100.0, 0.0));
        assert_eq!(controller.store().in_progress_count(), 0);
    }

    #[test]
    fn two_fingers_draw_two_lines() {
        let mut controller = CanvasController::new();
        let t0 = Instant::now();
        let a = TouchId::new(1);
        let b = TouchId::new(2);

        controller.handle_touch(TouchEvent::began(a, p(0.0, 0.0)), t0);
        controller.handle_touch(TouchEvent::began(b, p(0.0, 100.0)), t0 + ms(10));
        controller.handle_touch(TouchEvent::moved(a, p(80.0, 0.0)), t0 + ms(50));
        controller.handle_touch(TouchEvent::moved(b, p(80.0, 100.0)), t0 + ms(60));
        controller.handle_touch(TouchEvent::ended(a, p(120.0, 0.0)), t0 + ms(150));
        controller.handle_touch(TouchEvent::ended(b, p(120.0, 100.0)), t0 + ms(160));

        assert_eq!(controller.store().finished().len(), 2);
    }

    #[test]
    fn cancelled_sequence_leaves_no_lines() {
        let (mut controller, _, _) = controller_with_recorders();
        let t0 = Instant::now();
        let touch = TouchId::new(1);

        controller.handle_touch(TouchEvent::began(touch, p(0.0, 0.0)), t0);
        controller.handle_touch(TouchEvent::moved(touch, p(50.0, 0.0)), t0 + ms(30));
        controller.handle_touch(TouchEvent::cancelled(touch, p(50.0, 0.0)), t0 + ms(60));

        assert!(controller.store().finished().is_empty());
        assert_eq!(controller.store().in_progress_count(), 0);
    }

    #[test]
    fn tap_selects_line_without_leaving_a_dot() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        tap(&mut controller, 2, p(50.0, 5.0), t0 + ms(1000));
        controller.tick(t0 + ms(1500));

        assert_eq!(controller.store().finished().len(), 1);
        assert_eq!(controller.store().selected_index(), Some(0));
        assert_eq!(affordance.borrow().shown_at, vec![p(50.0, 5.0)]);
    }

    #[test]
    fn tap_on_empty_space_deselects_and_hides_affordance() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        tap(&mut controller, 2, p(50.0, 5.0), t0 + ms(1000));
        controller.tick(t0 + ms(1500));
        assert_eq!(controller.store().selected_index(), Some(0));

        tap(&mut controller, 3, p(400.0, 400.0), t0 + ms(2000));
        controller.tick(t0 + ms(2500));

        assert!(controller.store().selected_index().is_none());
        assert!(affordance.borrow().hides >= 1);
        assert_eq!(controller.store().finished().len(), 1);
    }

    #[test]
    fn double_tap_clears_everything() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);
        drag(&mut controller, 2, p(0.0, 50.0), p(100.0, 50.0), t0 + ms(500));

        tap(&mut controller, 3, p(200.0, 200.0), t0 + ms(2000));
        tap(&mut controller, 4, p(200.0, 200.0), t0 + ms(2150));

        assert!(controller.store().finished().is_empty());
        assert_eq!(controller.store().in_progress_count(), 0);
        assert!(controller.store().selected_index().is_none());
        assert!(affordance.borrow().hides >= 1);
    }

    #[test]
    fn delete_selected_removes_line_and_hides_affordance() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        tap(&mut controller, 2, p(50.0, 5.0), t0 + ms(1000));
        controller.tick(t0 + ms(1500));
        controller.delete_selected();

        assert!(controller.store().finished().is_empty());
        assert!(controller.store().selected_index().is_none());
        assert!(affordance.borrow().hides >= 1);
    }

    #[test]
    fn delete_without_selection_is_harmless() {
        let (mut controller, _, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        controller.delete_selected();
        assert_eq!(controller.store().finished().len(), 1);
    }

    #[test]
    fn direct_gesture_entry_points_work_without_the_recognizer() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        controller.single_tap(p(50.0, 5.0));
        assert_eq!(controller.store().selected_index(), Some(0));
        assert_eq!(affordance.borrow().shown_at.len(), 1);

        controller.double_tap();
        assert!(controller.store().finished().is_empty());
        assert!(controller.store().selected_index().is_none());
    }

    #[test]
    fn pending_tap_resolves_while_the_next_stroke_draws() {
        let (mut controller, affordance, _) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);

        // Tap the line, then immediately start another stroke nearby; the
        // moment the stroke crosses the slop the pending tap must fire.
        tap(&mut controller, 2, p(50.0, 5.0), t0 + ms(1000));
        let touch = TouchId::new(3);
        controller.handle_touch(TouchEvent::began(touch, p(60.0, 8.0)), t0 + ms(1100));
        controller.handle_touch(TouchEvent::moved(touch, p(160.0, 8.0)), t0 + ms(1140));

        assert_eq!(controller.store().selected_index(), Some(0));
        assert_eq!(affordance.borrow().shown_at, vec![p(50.0, 5.0)]);

        controller.handle_touch(TouchEvent::ended(touch, p(200.0, 8.0)), t0 + ms(1250));
        assert_eq!(controller.store().finished().len(), 2);
        assert_eq!(controller.store().selected_index(), Some(0));
    }

    #[test]
    fn repaint_is_requested_for_every_event() {
        let (mut controller, _, repaint) = controller_with_recorders();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);
        assert!(repaint.borrow().requests >= 3);
    }

    #[test]
    fn deadline_is_exposed_while_a_tap_is_pending() {
        let mut controller = CanvasController::new();
        let t0 = Instant::now();
        drag(&mut controller, 1, p(0.0, 0.0), p(100.0, 0.0), t0);
        assert!(controller.next_deadline().is_none());

        tap(&mut controller, 2, p(50.0, 5.0), t0 + ms(1000));
        assert!(controller.next_deadline().is_some());

        controller.tick(t0 + ms(1500));
        assert!(controller.next_deadline().is_none());
    }
}
