//! The drawing surface and its testable core.
//!
//! [`PadCore`] is the gesture state machine: pointer handlers return a
//! [`StrokeCommand`] describing what to draw, and never touch the DOM, so
//! stroke semantics are unit-tested without a browser. [`Surface`] binds a
//! core to a real canvas element and turns commands into pixels.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::SurfaceError;
use crate::geom::Point;
use crate::gesture::GestureState;
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Drawing work returned from a pointer handler for the owner to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeCommand {
    /// Nothing to draw.
    None,
    /// Stroke one straight segment between two sampled positions.
    Segment {
        /// Previous sample of the active gesture.
        from: Point,
        /// Current sample; becomes the gesture's new last point.
        to: Point,
    },
}

/// Core gesture state machine — all logic that doesn't depend on the canvas
/// element.
///
/// Separated from [`Surface`] so it can be tested without WASM/browser
/// dependencies.
#[derive(Debug, Default)]
pub struct PadCore {
    gesture: GestureState,
}

impl PadCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a gesture at `point`. Nothing is drawn yet; the first segment
    /// appears on the next move.
    pub fn on_pointer_down(&mut self, point: Point) -> StrokeCommand {
        self.gesture = GestureState::Drawing { last: point };
        StrokeCommand::None
    }

    /// Advance the gesture to `point`.
    ///
    /// While idle this is a no-op, so hover-only movement leaves no marks.
    /// While drawing it emits one segment from the previous sample and
    /// re-bases the gesture on `point`.
    pub fn on_pointer_move(&mut self, point: Point) -> StrokeCommand {
        match self.gesture {
            GestureState::Idle => StrokeCommand::None,
            GestureState::Drawing { last } => {
                self.gesture = GestureState::Drawing { last: point };
                StrokeCommand::Segment { from: last, to: point }
            }
        }
    }

    /// End the gesture. Subsequent moves are ignored until the next
    /// pointer-down, so strokes are never implicitly connected.
    pub fn on_pointer_up(&mut self) -> StrokeCommand {
        self.gesture = GestureState::Idle;
        StrokeCommand::None
    }

    /// Whether a gesture is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }
}

/// The full drawing surface. Wraps a [`PadCore`] and owns the browser canvas
/// element and its configured 2D context.
pub struct Surface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: PadCore,
}

impl Surface {
    /// Bind a new surface to `canvas`: acquire the 2D context, configure the
    /// stroke settings, and clear to the background.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the 2D context cannot be acquired. The pad
    /// cannot function without one, so callers should treat this as fatal.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::NotA2dContext)?;
        render::configure(&ctx);

        let surface = Self { canvas, ctx, core: PadCore::new() };
        surface.clear();
        Ok(surface)
    }

    // --- Pointer events ---

    pub fn on_pointer_down(&mut self, point: Point) {
        let command = self.core.on_pointer_down(point);
        self.apply(command);
    }

    pub fn on_pointer_move(&mut self, point: Point) {
        let command = self.core.on_pointer_move(point);
        self.apply(command);
    }

    pub fn on_pointer_up(&mut self) {
        let command = self.core.on_pointer_up();
        self.apply(command);
    }

    // --- Surface-wide operations ---

    /// Fill the surface with the background color, discarding all strokes.
    /// Idempotent; does not end an active gesture.
    pub fn clear(&self) {
        render::clear_to_background(
            &self.ctx,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Encode the current raster content as a self-contained
    /// `data:image/jpeg` URI. Pure read; mutates neither pixels nor gesture
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Js`] if the canvas refuses to encode (e.g. a
    /// tainted canvas).
    pub fn to_jpeg_data_url(&self) -> Result<String, SurfaceError> {
        Ok(self.canvas.to_data_url_with_type("image/jpeg")?)
    }

    fn apply(&self, command: StrokeCommand) {
        match command {
            StrokeCommand::None => {}
            StrokeCommand::Segment { from, to } => render::stroke_segment(&self.ctx, from, to),
        }
    }
}
