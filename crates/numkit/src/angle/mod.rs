//! Angle helpers: degree trig, signed range reduction, rotation deltas and
//! angles between 2D vectors.
//!
//! Conventions
//! - Degree ranges are closed: `[-180, 180]`.
//! - Radian ranges are half-open: `(−π, π]`.
//! - Degenerate inputs (zero vectors) give NaN rather than an error.

use nalgebra::Vector2;

use crate::cfg::{DEGREES_PER_TURN, HALF_TURN_DEGREES, HALF_TURN_RADIANS, RADIANS_PER_TURN};

#[inline]
fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / HALF_TURN_DEGREES
}

/// Sine of an angle given in degrees.
#[inline]
pub fn sin_deg(degrees: f64) -> f64 {
    deg_to_rad(degrees).sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos_deg(degrees: f64) -> f64 {
    deg_to_rad(degrees).cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tan_deg(degrees: f64) -> f64 {
    deg_to_rad(degrees).tan()
}

/// Map `degrees` into `[-180, 180]`, keeping it congruent modulo 360.
///
/// Only magnitudes above a full turn are reduced with `%`, so `±360` itself
/// goes through the ±360 shift and lands on `0`. `±180` is returned unchanged,
/// which makes the map idempotent.
pub fn reduce_angle_to_signed_range(degrees: f64) -> f64 {
    let mut d = degrees;
    if d > DEGREES_PER_TURN || d < -DEGREES_PER_TURN {
        d %= DEGREES_PER_TURN;
    }
    if d > HALF_TURN_DEGREES {
        d -= DEGREES_PER_TURN;
    } else if d < -HALF_TURN_DEGREES {
        d += DEGREES_PER_TURN;
    }
    d
}

/// Map `radians` into `(−π, π]`.
pub fn wrap_angle_to_pi_range(radians: f64) -> f64 {
    let mut a = radians;
    if a >= RADIANS_PER_TURN || a <= -RADIANS_PER_TURN {
        a %= RADIANS_PER_TURN;
    }
    if a > HALF_TURN_RADIANS {
        a -= RADIANS_PER_TURN;
    } else if a <= -HALF_TURN_RADIANS {
        a += RADIANS_PER_TURN;
    }
    a
}

/// Signed rotation from bearing `last` to bearing `current` (radians).
///
/// A bearing crossing ±π flips sign (e.g. 178° -> -179°), so the raw delta is
/// pulled back by one turn whenever it leaves `(−π, π]`. For bearings already
/// in `[−π, π]` the result is the shortest signed rotation.
pub fn shortest_rotation(last: f64, current: f64) -> f64 {
    let delta = current - last;
    if delta > HALF_TURN_RADIANS {
        delta - RADIANS_PER_TURN
    } else if delta <= -HALF_TURN_RADIANS {
        delta + RADIANS_PER_TURN
    } else {
        delta
    }
}

/// Unsigned angle in degrees between `(x1, y1)` and `(x2, y2)`, in `[0, 180]`.
///
/// Uses `u·v = |u||v| cos θ`. The cosine is clamped to `[-1, 1]` so rounding on
/// (anti)parallel inputs cannot push `acos` out of its domain. A zero vector
/// yields NaN.
pub fn angle_between_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dot = x1 * x2 + y1 * y2;
    let u = x1.hypot(y1);
    let v = x2.hypot(y2);
    let cos = (dot / u / v).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// [`angle_between_vectors`] over nalgebra vectors.
#[inline]
pub fn angle_between(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    angle_between_vectors(u.x, u.y, v.x, v.y)
}
