//! Line store: the drawing surface's state
//!
//! Tracks every stroke on the canvas through its lifecycle: while a touch
//! is down its line lives in an in-progress map keyed by touch identity;
//! when the touch lifts the line is promoted to an ordered finished
//! sequence, which also carries the current selection.
//!
//! All operations are total: lookups on absent touches and selections are
//! no-ops rather than errors, because input events can outlive the state
//! they refer to (a move may arrive for a touch that was already
//! cancelled).

use std::collections::HashMap;

use crate::domain::geometry::{Line, Point};

/// Opaque identity of one active touch
///
/// The host input layer mints the inner value (hardware slot, pointer id,
/// or a synthetic counter) and it stays stable from touch-begin until the
/// matching end or cancel. The store uses it purely as a map key and
/// attaches no meaning to the number itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TouchId(u64);

impl TouchId {
    /// Wraps a host-provided touch identity
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw host value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// State of all lines on the drawing surface
///
/// `finished` preserves insertion order: the index of a line doubles as
/// its z-order for rendering and as the handle used by selection and
/// deletion. `selected`, when present, is always a valid index into
/// `finished`; every mutation of `finished` that could invalidate it
/// clears it instead of re-mapping.
///
/// # Example
///
/// ```
/// use tracepad::domain::geometry::Point;
/// use tracepad::domain::store::{LineStore, TouchId};
///
/// let mut store = LineStore::new();
/// let touch = TouchId::new(1);
/// store.begin_line(touch, Point::new(0.0, 0.0));
/// store.update_line(touch, Point::new(40.0, 0.0));
/// store.end_line(touch, Point::new(80.0, 0.0));
///
/// assert_eq!(store.finished().len(), 1);
/// assert_eq!(store.finished()[0].end, Point::new(80.0, 0.0));
/// ```
#[derive(Debug, Clone)]
pub struct LineStore {
    in_progress: HashMap<TouchId, Line>,
    finished: Vec<Line>,
    selected: Option<usize>,
}

impl LineStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            in_progress: HashMap::new(),
            finished: Vec::new(),
            selected: None,
        }
    }

    /// Starts a new line for `touch` anchored at `point`
    ///
    /// The line starts zero-length with both endpoints at `point`. If the
    /// touch already had an in-progress line it is overwritten; the host
    /// re-issuing an identity means the previous gesture is gone.
    pub fn begin_line(&mut self, touch: TouchId, point: Point) {
        self.in_progress.insert(touch, Line::anchored_at(point));
    }

    /// Moves the free end of the in-progress line for `touch`
    ///
    /// No-op when the touch is unknown.
    pub fn update_line(&mut self, touch: TouchId, point: Point) {
        if let Some(line) = self.in_progress.get_mut(&touch) {
            line.end = point;
        }
    }

    /// Finishes the line for `touch` at `point`
    ///
    /// The line's end is set to `point` and the line moves to the tail of
    /// the finished sequence. No-op when the touch is unknown.
    pub fn end_line(&mut self, touch: TouchId, point: Point) {
        if let Some(mut line) = self.in_progress.remove(&touch) {
            line.end = point;
            self.finished.push(line);
        }
        self.debug_validate();
    }

    /// Discards the in-progress line for `touch` without finishing it
    ///
    /// No-op when the touch is unknown. Other touches keep drawing.
    pub fn cancel_line(&mut self, touch: TouchId) {
        self.in_progress.remove(&touch);
    }

    /// Discards every in-progress line
    ///
    /// Nothing is promoted to the finished sequence.
    pub fn cancel_all(&mut self) {
        self.in_progress.clear();
    }

    /// Removes all lines, in progress and finished, and clears selection
    pub fn clear_all(&mut self) {
        self.in_progress.clear();
        self.finished.clear();
        self.selected = None;
        self.debug_validate();
    }

    /// Selects the finished line at `index`
    ///
    /// Returns `true` if the index was in range and the selection was
    /// applied; out-of-range indices are ignored and leave the previous
    /// selection untouched.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.finished.len() {
            self.selected = Some(index);
            self.debug_validate();
            true
        } else {
            false
        }
    }

    /// Clears the selection
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Deletes the selected finished line, if any
    ///
    /// Lines after the deleted index shift down by one, and the selection
    /// is always cleared rather than re-mapped. Returns the removed line,
    /// or `None` when nothing was selected.
    pub fn delete_selected(&mut self) -> Option<Line> {
        let index = self.selected.take()?;
        let removed = self.finished.remove(index);
        self.debug_validate();
        Some(removed)
    }

    /// Returns the finished lines in draw order
    pub fn finished(&self) -> &[Line] {
        &self.finished
    }

    /// Returns the in-progress line for `touch`, if any
    pub fn in_progress_line(&self, touch: TouchId) -> Option<&Line> {
        self.in_progress.get(&touch)
    }

    /// Iterates over all in-progress lines in no particular order
    pub fn in_progress_lines(&self) -> impl Iterator<Item = &Line> {
        self.in_progress.values()
    }

    /// Returns the number of currently active touches
    pub fn in_progress_count(&self) -> usize {
        self.in_progress.len()
    }

    /// Returns the index of the selected finished line, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected finished line, if any
    pub fn selected_line(&self) -> Option<&Line> {
        self.selected.map(|index| &self.finished[index])
    }

    fn debug_validate(&self) {
        debug_assert!(
            self.selected.is_none_or(|index| index < self.finished.len()),
            "selection must point into the finished sequence"
        );
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}
