//! Viewport containment test.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Bounding rectangle in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Whether `rect` lies entirely inside a `width` x `height` viewport.
/// Edges touching the viewport boundary count as inside.
#[must_use]
pub fn is_in_viewport(rect: Rect, width: f64, height: f64) -> bool {
    rect.top >= 0.0 && rect.left >= 0.0 && rect.bottom <= height && rect.right <= width
}
