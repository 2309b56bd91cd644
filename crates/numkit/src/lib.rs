//! Pure numeric and 2D geometric helpers.
//!
//! Every function here is stateless and side-effect free. Floating-point edge
//! cases (division by zero, zero-length vectors, coincident line points) are
//! not reported as errors; they surface as infinity or NaN and are left to the
//! caller to detect. The only reported failure is asking for the extremum of an
//! empty sequence, see [`MathError`].
//!
//! Module map
//! - `extrema`: min/max over a non-empty slice.
//! - `pow`: binary exponentiation for `i32`, `i64`, `f32`, `f64`.
//! - `angle`: degree trig, range reduction, rotation deltas, vector angles.
//! - `range`: normalization and clamping.
//! - `line`: point-to-line distance.
//! - `bits`, `convert`: bit checks and lenient string parsing.

pub mod angle;
pub mod bits;
pub mod cfg;
pub mod convert;
mod error;
pub mod extrema;
pub mod line;
pub mod pow;
pub mod range;

pub use error::MathError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{
        angle_between, angle_between_vectors, cos_deg, reduce_angle_to_signed_range,
        shortest_rotation, sin_deg, tan_deg, wrap_angle_to_pi_range,
    };
    pub use crate::extrema::{max, min};
    pub use crate::line::{distance_to_line, distance_to_line_pts};
    pub use crate::pow::{fast_pow, FastPow};
    pub use crate::range::{clamp, normalize};
    pub use crate::MathError;
    pub use nalgebra::Vector2 as Vec2;
}
