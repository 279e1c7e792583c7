#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in surface coordinates: CSS pixels relative to the top-left
/// corner of the pad's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
