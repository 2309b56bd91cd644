//! Distance from a point to an infinite line in the plane.
//!
//! The line through `(x1, y1)` and `(x2, y2)` is written as
//! `(y2 − y1)·x + (x1 − x2)·y + x2·y1 − x1·y2 = 0`, i.e. `a·x + b·y + c = 0`,
//! and the distance is `|a·px + b·py + c| / hypot(a, b)`.

use nalgebra::Vector2;

/// Perpendicular distance from `(px, py)` to the line through `(x1, y1)` and
/// `(x2, y2)`. Coincident line points divide by zero (infinity or NaN).
#[inline]
pub fn distance_to_line(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let num = (y2 - y1) * px + (x1 - x2) * py + x2 * y1 - x1 * y2;
    num.abs() / (x1 - x2).hypot(y1 - y2)
}

/// [`distance_to_line`] over nalgebra points.
#[inline]
pub fn distance_to_line_pts(p: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    distance_to_line(p.x, p.y, a.x, a.y, b.x, b.y)
}
