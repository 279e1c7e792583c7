//! Gesture state machine data.
//!
//! One gesture is a pointer-down-to-pointer-up interaction producing a
//! stroke. The last sampled point exists only while a gesture is active, so
//! it lives inside the `Drawing` variant rather than beside a boolean flag.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::geom::Point;

/// State of the current gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// A stroke is being drawn.
    Drawing {
        /// Surface position of the previous pointer sample. The next move
        /// event draws a segment from here and re-bases it.
        last: Point,
    },
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl GestureState {
    /// Whether a gesture is active.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}
