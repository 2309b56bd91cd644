//! Fixed numeric constants shared by the angle helpers.
//!
//! These are plain constants rather than a runtime config; nothing here is
//! expected to change between call sites.

use std::f64::consts::{PI, TAU};

/// Degrees in a full turn.
pub const DEGREES_PER_TURN: f64 = 360.0;
/// Degrees in a half turn; bound of the signed degree range.
pub const HALF_TURN_DEGREES: f64 = 180.0;
/// Radians in a full turn (2π).
pub const RADIANS_PER_TURN: f64 = TAU;
/// Radians in a half turn (π); bound of the signed radian range.
pub const HALF_TURN_RADIANS: f64 = PI;
