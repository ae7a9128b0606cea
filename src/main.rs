//! Headless demo for the drawing surface
//!
//! Scripts a short multi-touch session against the public API — two
//! simultaneous strokes, a tap-select, a delete via the badge, more
//! drawing — then renders the final frame to `tracepad.png`.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use log::info;

use tracepad::app::CanvasController;
use tracepad::config::Appearance;
use tracepad::domain::{Point, TouchId};
use tracepad::input::TouchEvent;
use tracepad::ui::{MenuOverlay, Scene, SceneRenderer};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let menu = Rc::new(RefCell::new(MenuOverlay::new()));
    let mut controller = CanvasController::new();
    controller.set_affordance(Box::new(Rc::clone(&menu)));

    let start = Instant::now();

    // Two fingers draw crossing strokes at the same time.
    let a = TouchId::new(1);
    let b = TouchId::new(2);
    controller.handle_touch(TouchEvent::began(a, Point::new(80.0, 120.0)), at(start, 0));
    controller.handle_touch(TouchEvent::began(b, Point::new(120.0, 60.0)), at(start, 20));
    controller.handle_touch(TouchEvent::moved(a, Point::new(250.0, 130.0)), at(start, 80));
    controller.handle_touch(TouchEvent::moved(b, Point::new(140.0, 240.0)), at(start, 90));
    controller.handle_touch(TouchEvent::ended(a, Point::new(420.0, 140.0)), at(start, 180));
    controller.handle_touch(TouchEvent::ended(b, Point::new(160.0, 420.0)), at(start, 200));

    stroke(&mut controller, 3, (100.0, 300.0), (500.0, 320.0), at(start, 400));

    // Tap the first stroke; the selection lands once the double-tap
    // window has passed.
    tap(&mut controller, 4, Point::new(250.0, 130.0), at(start, 1500));
    controller.tick(at(start, 2000));
    info!(
        "selection after tap: {:?}, badge visible: {}",
        controller.store().selected_index(),
        menu.borrow().is_visible()
    );

    // A host routes presses on the visible badge to the controller
    // instead of treating them as drawing input.
    let badge_press = Point::new(
        250.0,
        130.0 - MenuOverlay::ANCHOR_GAP - MenuOverlay::BADGE_HEIGHT / 2.0,
    );
    if menu.borrow().hit(badge_press) {
        controller.delete_selected();
        info!("deleted the selected line via the badge");
    }

    stroke(&mut controller, 5, (480.0, 80.0), (560.0, 400.0), at(start, 2500));

    // Leave the frame with a line selected and the badge showing.
    tap(&mut controller, 6, Point::new(300.0, 310.0), at(start, 4000));
    controller.tick(at(start, 4500));

    info!(
        "final canvas: {} finished lines, selection at {:?}",
        controller.store().finished().len(),
        controller.store().selected_index()
    );

    let appearance = Appearance::default();
    let mut scene = Scene::from_store(controller.store(), &appearance, WIDTH, HEIGHT);
    scene.badge = menu.borrow().badge(&appearance);

    let pixmap = SceneRenderer::new().render(&scene)?;
    pixmap.save_png("tracepad.png")?;
    info!("wrote tracepad.png");

    Ok(())
}

fn at(start: Instant, offset_ms: u64) -> Instant {
    start + Duration::from_millis(offset_ms)
}

/// Drags one finger from `from` to `to` over 120 ms
fn stroke(
    controller: &mut CanvasController,
    id: u64,
    from: (f32, f32),
    to: (f32, f32),
    begin: Instant,
) {
    let touch = TouchId::new(id);
    let midpoint = Point::new((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
    controller.handle_touch(TouchEvent::began(touch, Point::new(from.0, from.1)), begin);
    controller.handle_touch(
        TouchEvent::moved(touch, midpoint),
        begin + Duration::from_millis(60),
    );
    controller.handle_touch(
        TouchEvent::ended(touch, Point::new(to.0, to.1)),
        begin + Duration::from_millis(120),
    );
}

/// Presses and releases in place, quickly enough to read as a tap
fn tap(controller: &mut CanvasController, id: u64, at_point: Point, begin: Instant) {
    let touch = TouchId::new(id);
    controller.handle_touch(TouchEvent::began(touch, at_point), begin);
    controller.handle_touch(
        TouchEvent::ended(touch, at_point),
        begin + Duration::from_millis(40),
    );
}
