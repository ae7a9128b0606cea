//! Multi-touch line drawing surface
//!
//! tracepad tracks touch gestures on a 2D canvas: each active touch
//! draws a line segment, finished segments accumulate in draw order, and
//! tap gestures select (single tap) or clear (double tap) what was
//! drawn. The crate is host-agnostic — any event loop that can deliver
//! touch phases and timestamps can drive it.
//!
//! The pieces:
//!
//! - [`domain`]: pure state and geometry — [`domain::store::LineStore`],
//!   hit-testing in [`domain::hit`].
//! - [`input`]: the touch-event vocabulary and a tap recognizer for
//!   hosts without native gesture recognition.
//! - [`app`]: [`app::controller::CanvasController`], the single mutator
//!   tying events to state and collaborators.
//! - [`ui`]: scene construction and tiny-skia rasterization, plus the
//!   delete-badge overlay.
//! - [`config`]: presentation parameters.
//!
//! ```
//! use std::time::Instant;
//! use tracepad::app::CanvasController;
//! use tracepad::config::Appearance;
//! use tracepad::domain::{Point, TouchId};
//! use tracepad::input::TouchEvent;
//! use tracepad::ui::{Scene, SceneRenderer};
//!
//! let mut controller = CanvasController::new();
//! let touch = TouchId::new(1);
//! let now = Instant::now();
//! controller.handle_touch(TouchEvent::began(touch, Point::new(10.0, 10.0)), now);
//! controller.handle_touch(TouchEvent::moved(touch, Point::new(120.0, 80.0)), now);
//! controller.handle_touch(TouchEvent::ended(touch, Point::new(200.0, 120.0)), now);
//! assert_eq!(controller.store().finished().len(), 1);
//!
//! let scene = Scene::from_store(controller.store(), &Appearance::default(), 320, 240);
//! let pixmap = SceneRenderer::new().render(&scene).unwrap();
//! assert_eq!(pixmap.width(), 320);
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod ui;

pub use app::{CanvasController, DeleteAffordance, RepaintHandle};
pub use config::Appearance;
pub use domain::{Line, LineStore, Point, TouchId};
pub use input::{Tap, TapRecognizer, TouchEvent, TouchPhase};
pub use ui::{MenuOverlay, Scene, SceneRenderer};
