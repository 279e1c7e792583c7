//! Pointer coordinate helpers.

use surface::geom::Point;
use web_sys::HtmlCanvasElement;

/// Position of a pointer event relative to the canvas's bounding box.
///
/// The bounding rect is re-read on every event, so scrolling or layout
/// changes between events cannot skew stroke coordinates.
pub fn pointer_point(ev: &leptos::ev::PointerEvent, canvas: &HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}
