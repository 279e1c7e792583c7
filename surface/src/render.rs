//! Rendering: the only module that touches [`web_sys::CanvasRenderingContext2d`].
//!
//! It receives a configured context and produces pixels — it does not mutate
//! any gesture state. Stroke appearance is configured once at surface
//! construction; every segment after that reuses the same context settings.

use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND_COLOR, LINE_ROUND, STROKE_COLOR, STROKE_WIDTH};
use crate::geom::Point;

/// Apply the pad's stroke settings: color, width, round joins and caps.
pub fn configure(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(STROKE_COLOR);
    ctx.set_line_width(STROKE_WIDTH);
    ctx.set_line_join(LINE_ROUND);
    ctx.set_line_cap(LINE_ROUND);
}

/// Fill the whole surface with the background color, discarding all strokes.
///
/// An opaque full-surface fill, so repeated calls are idempotent.
pub fn clear_to_background(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style_str(BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Stroke one straight segment between two sampled pointer positions.
///
/// Consecutive segments re-based on the previous sample approximate the true
/// pointer path as a polyline; round caps hide the joints.
pub fn stroke_segment(ctx: &CanvasRenderingContext2d, from: Point, to: Point) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
}
