//! # Polar Vector Module
//!
//! This module provides [`Polar`], the magnitude-and-heading representation
//! of a planar vector. The stored pair is exactly what the caller supplied:
//! the magnitude may be negative and the heading may sit outside [0, 360)
//! until one of the wrap operations is invoked. Preserving the original
//! representation keeps constructed values legible (a sensor reporting
//! `-3 ∠ 180°` reads back as it was reported) and makes canonicalization an
//! explicit step.
//!
//! ## Coordinate Convention
//!
//! Headings are navigation style, zero pointing along +Y and growing
//! clockwise, so the cartesian projection is `x = m·sin(θ)` and
//! `y = m·cos(θ)`.
//!
//! ## Examples
//!
//! ```rust
//! use rhumb::{Polar, Vector};
//!
//! let leg = Polar::from_degrees(-3.0, 180.0);
//! assert_eq!(leg.magnitude(), -3.0);
//!
//! let canonical = leg.wrap();
//! assert!((canonical.magnitude() - 3.0).abs() < 1e-9);
//! assert!(canonical.angle().to_degrees().abs() < 1e-9);
//! ```

use crate::constants::{DEFAULT_EPSILON, HALF_TURN_DEG};
use crate::coordinates::angle::Angle;
use crate::coordinates::xy::XY;
use crate::coordinates::Vector;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;

/// A planar vector stored as magnitude and heading
///
/// Derived `PartialEq` compares the stored magnitude and angle exactly; the
/// [`approx`] impls compare the cartesian projections within 1e-4 per
/// component and also accept an [`XY`] on the right-hand side, so
/// `-3 ∠ 180°` is approximately equal to `3 ∠ 0°` even though the stored
/// fields differ.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Polar {
    /// Length of the vector; negative values point away from `angle`
    pub magnitude: f64,
    /// Heading of the vector, kept unwrapped as constructed
    pub angle: Angle,
}

impl Polar {
    /// Creates a polar vector from a magnitude and a heading
    pub fn new(magnitude: f64, angle: Angle) -> Self {
        Polar { magnitude, angle }
    }

    /// Creates a polar vector from a magnitude and a heading in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::{Polar, Vector};
    ///
    /// let v = Polar::from_degrees(5.0, 30.0);
    /// assert!((v.x() - 2.5).abs() < 1e-3);
    /// assert!((v.y() - 4.3301).abs() < 1e-3);
    /// ```
    pub fn from_degrees(magnitude: f64, degrees: f64) -> Self {
        Polar {
            magnitude,
            angle: Angle::from_degrees(degrees),
        }
    }

    /// Canonicalizes to a non-negative magnitude and a heading in [0, 360)
    ///
    /// A negative magnitude is negated and the heading rotated by a half
    /// turn, pointing the vector the same way; the heading then folds into
    /// [0, 360).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::{Polar, Vector};
    ///
    /// let canonical = Polar::from_degrees(54.0, -64.0).wrap();
    /// assert!((canonical.magnitude() - 54.0).abs() < 1e-9);
    /// assert!((canonical.angle().to_degrees() - 296.0).abs() < 1e-9);
    /// ```
    pub fn wrap(&self) -> Polar {
        let (magnitude, angle) = if self.magnitude < 0.0 {
            (
                -self.magnitude,
                self.angle + Angle::from_degrees(HALF_TURN_DEG),
            )
        } else {
            (self.magnitude, self.angle)
        };
        Polar::new(magnitude, angle.wrap())
    }

    /// Folds only the heading into [0, 360), leaving the magnitude alone
    ///
    /// Unlike [`Polar::wrap`], a negative magnitude stays negative.
    pub fn wrap_angle(&self) -> Polar {
        Polar::new(self.magnitude, self.angle.wrap())
    }
}

impl Vector for Polar {
    fn x(&self) -> f64 {
        self.magnitude * self.angle.to_radians().sin()
    }

    fn y(&self) -> f64 {
        self.magnitude * self.angle.to_radians().cos()
    }

    /// Stored magnitude, returned as constructed (may be negative)
    fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Stored heading, returned as constructed (may lie outside [0, 360))
    fn angle(&self) -> Angle {
        self.angle
    }

    /// Scales the magnitude; a negative scalar leaves a negative magnitude
    /// rather than flipping the heading
    fn scale(&self, scalar: f64) -> Polar {
        Polar::new(self.magnitude * scalar, self.angle)
    }

    /// Unit vector at the stored heading, regardless of the stored
    /// magnitude's size or sign
    fn normalize(&self) -> Polar {
        Polar::new(1.0, self.angle)
    }
}

impl std::ops::Mul<f64> for Polar {
    type Output = Polar;

    fn mul(self, scalar: f64) -> Polar {
        Polar::new(self.magnitude * scalar, self.angle)
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ∠ {}", self.magnitude, self.angle)
    }
}

// Cross-representation equality compares the cartesian projections.
impl PartialEq<XY> for Polar {
    fn eq(&self, other: &XY) -> bool {
        self.x() == other.x && self.y() == other.y
    }
}

impl AbsDiffEq for Polar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Polar, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x(), &other.x(), epsilon)
            && f64::abs_diff_eq(&self.y(), &other.y(), epsilon)
    }
}

impl RelativeEq for Polar {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Polar, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x(), &other.x(), epsilon, max_relative)
            && f64::relative_eq(&self.y(), &other.y(), epsilon, max_relative)
    }
}

impl AbsDiffEq<XY> for Polar {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &XY, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x(), &other.x, epsilon)
            && f64::abs_diff_eq(&self.y(), &other.y, epsilon)
    }
}

impl RelativeEq<XY> for Polar {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &XY, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x(), &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y(), &other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversions() {
        let v1 = Polar::from_degrees(5.0, 30.0);
        let v2 = Polar::from_degrees(-3.0, 180.0);
        let v3 = Polar::from_degrees(54.0, -64.0);

        assert_relative_eq!(v1.x(), 2.5, epsilon = 1e-3);
        assert_relative_eq!(v1.y(), 4.3301, epsilon = 1e-3);
        assert_relative_eq!(v1.magnitude(), 5.0, epsilon = 1e-3);
        assert_relative_eq!(v1.angle().to_degrees(), 30.0, epsilon = 1e-3);

        // Negative magnitude and out-of-range headings read back untouched.
        assert_relative_eq!(v2.x(), 0.0, epsilon = 1e-3);
        assert_relative_eq!(v2.y(), 3.0, epsilon = 1e-3);
        assert_relative_eq!(v2.magnitude(), -3.0, epsilon = 1e-3);
        assert_relative_eq!(v2.angle().to_degrees(), 180.0, epsilon = 1e-3);

        assert_relative_eq!(v3.x(), -48.5349, epsilon = 1e-3);
        assert_relative_eq!(v3.y(), 23.6720, epsilon = 1e-3);
        assert_relative_eq!(v3.magnitude(), 54.0, epsilon = 1e-3);
        assert_relative_eq!(v3.angle().to_degrees(), -64.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wrap() {
        let v1 = Polar::from_degrees(-3.0, 180.0).wrap();
        assert_relative_eq!(v1.magnitude(), 3.0, epsilon = 1e-3);
        assert_relative_eq!(v1.angle().to_degrees(), 0.0, epsilon = 1e-3);

        let v2 = Polar::from_degrees(54.0, -64.0).wrap();
        assert_relative_eq!(v2.magnitude(), 54.0, epsilon = 1e-3);
        assert_relative_eq!(v2.angle().to_degrees(), 296.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wrap_angle_keeps_magnitude_sign() {
        let v = Polar::from_degrees(-54.0, -64.0).wrap_angle();
        assert_relative_eq!(v.magnitude(), -54.0, epsilon = 1e-3);
        assert_relative_eq!(v.angle().to_degrees(), 296.0, epsilon = 1e-3);
    }

    #[test]
    fn test_scale_keeps_sign_and_heading() {
        let scaled = Polar::from_degrees(5.0, 30.0).scale(-2.0);
        assert_relative_eq!(scaled.magnitude(), -10.0, epsilon = 1e-9);
        assert_relative_eq!(scaled.angle().to_degrees(), 30.0, epsilon = 1e-9);

        assert_eq!(Polar::from_degrees(5.0, 30.0) * -2.0, scaled);
    }

    #[test]
    fn test_normalize_ignores_magnitude() {
        let unit = Polar::from_degrees(-7.5, 45.0).normalize();
        assert_relative_eq!(unit.magnitude(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(unit.angle().to_degrees(), 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_display() {
        let v = Polar::from_degrees(54.0, 296.0);
        assert_eq!(v.to_string(), "54 ∠ 296°");
    }
}
