//! Shared constants for the drawing surface.

// ── Stroke ──────────────────────────────────────────────────────

/// Pen color for freehand strokes.
pub const STROKE_COLOR: &str = "#000000";

/// Stroke width in CSS pixels. Wide enough that a drawn digit survives
/// downsampling on the classifier side.
pub const STROKE_WIDTH: f64 = 15.0;

/// Line join and cap style. Round ends keep sampled polylines looking like
/// one continuous stroke.
pub const LINE_ROUND: &str = "round";

// ── Surface ─────────────────────────────────────────────────────

/// Background fill for a cleared surface.
pub const BACKGROUND_COLOR: &str = "rgb(255,255,255)";

/// Pad edge length in CSS pixels. The surface is square.
pub const PAD_SIZE_PX: u32 = 280;
