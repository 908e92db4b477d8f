//! Constants shared across the geometry types

use std::f64::consts::PI;

// Unit conversions
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Turns
/// Degrees in a complete turn
pub const FULL_TURN_DEG: f64 = 360.0;
/// Degrees in a half turn
pub const HALF_TURN_DEG: f64 = 180.0;

// Comparison
/// Default tolerance for approximate equality, in degrees for angles and
/// in coordinate units for vectors
pub const DEFAULT_EPSILON: f64 = 1e-4;
