//! # Cartesian Vector Module
//!
//! This module provides [`XY`], the cartesian representation of a planar
//! vector. The two components are stored directly; magnitude and heading
//! are derived on demand so the stored values never drift through repeated
//! conversion.
//!
//! ## Coordinate Convention
//!
//! Headings are navigation style: zero degrees points along +Y
//! ("forward") and headings grow clockwise. The heading of a cartesian
//! vector is therefore `atan2(x, y)`, with the arguments in that order,
//! folded into [0, 360). This differs from the mathematical convention of
//! measuring counterclockwise from the +X axis.
//!
//! ## Examples
//!
//! ```rust
//! use rhumb::{Vector, XY};
//!
//! let v = XY::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert!((v.angle().to_degrees() - 36.8699).abs() < 1e-3);
//! ```

use crate::constants::DEFAULT_EPSILON;
use crate::coordinates::angle::Angle;
use crate::coordinates::polar::Polar;
use crate::coordinates::Vector;
use approx::{AbsDiffEq, RelativeEq};
use nalgebra::Vector2;
use std::fmt;

/// A planar vector stored as cartesian components
///
/// Either a position or a displacement; the interpretation is up to the
/// caller. Approximate equality (the [`approx`] impls, default epsilon
/// 1e-4 per component) also accepts a [`Polar`] on the right-hand side and
/// compares the cartesian projections.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct XY {
    /// Rightward component
    pub x: f64,
    /// Forward component
    pub y: f64,
}

impl XY {
    /// Creates a cartesian vector from its components
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::XY;
    ///
    /// let v = XY::new(3.0, 4.0);
    /// assert_eq!(v.x, 3.0);
    /// assert_eq!(v.y, 4.0);
    /// ```
    pub fn new(x: f64, y: f64) -> Self {
        XY { x, y }
    }

    /// Converts to a nalgebra `Vector2` for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nalgebra::Vector2;
    /// use rhumb::XY;
    ///
    /// let vec: Vector2<f64> = XY::new(1.0, 2.0).to_vector2();
    /// assert_eq!(vec.x, 1.0);
    /// assert_eq!(vec.y, 2.0);
    /// ```
    pub fn to_vector2(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Creates from a nalgebra `Vector2`
    pub fn from_vector2(vec: Vector2<f64>) -> Self {
        XY { x: vec.x, y: vec.y }
    }
}

impl Vector for XY {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    /// Length of the vector, `sqrt(x² + y²)`, always non-negative
    fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Heading of the vector in the navigation convention, folded into
    /// [0, 360)
    fn angle(&self) -> Angle {
        Angle::from_radians(self.x.atan2(self.y)).wrap()
    }

    fn scale(&self, scalar: f64) -> XY {
        XY::new(self.x * scalar, self.y * scalar)
    }

    /// Unit vector in the same direction
    ///
    /// The components divide by the magnitude without a zero guard: the
    /// zero vector normalizes to NaN components per IEEE-754 division.
    fn normalize(&self) -> XY {
        let magnitude = self.magnitude();
        XY::new(self.x / magnitude, self.y / magnitude)
    }
}

// Arithmetic operators over the cartesian components.
impl std::ops::Add for XY {
    type Output = XY;

    fn add(self, other: XY) -> XY {
        XY::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for XY {
    type Output = XY;

    fn sub(self, other: XY) -> XY {
        XY::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Mul<f64> for XY {
    type Output = XY;

    fn mul(self, scalar: f64) -> XY {
        XY::new(self.x * scalar, self.y * scalar)
    }
}

impl std::ops::Div<f64> for XY {
    type Output = XY;

    fn div(self, scalar: f64) -> XY {
        XY::new(self.x / scalar, self.y / scalar)
    }
}

impl fmt::Display for XY {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// Cross-representation equality compares the cartesian projections.
impl PartialEq<Polar> for XY {
    fn eq(&self, other: &Polar) -> bool {
        self.x == other.x() && self.y == other.y()
    }
}

impl AbsDiffEq for XY {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &XY, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x, epsilon) && f64::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for XY {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &XY, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

impl AbsDiffEq<Polar> for XY {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Polar, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &other.x(), epsilon)
            && f64::abs_diff_eq(&self.y, &other.y(), epsilon)
    }
}

impl RelativeEq<Polar> for XY {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Polar, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &other.x(), epsilon, max_relative)
            && f64::relative_eq(&self.y, &other.y(), epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_conversions() {
        let v1 = XY::new(3.0, 4.0);
        let v2 = XY::new(0.0, -3.0);
        let v3 = XY::new(54.0, -64.0);

        assert_relative_eq!(v1.x(), 3.0, epsilon = 1e-3);
        assert_relative_eq!(v1.y(), 4.0, epsilon = 1e-3);
        assert_relative_eq!(v1.magnitude(), 5.0, epsilon = 1e-3);
        assert_relative_eq!(v1.angle().to_degrees(), 36.8699, epsilon = 1e-3);

        assert_relative_eq!(v2.magnitude(), 3.0, epsilon = 1e-3);
        assert_relative_eq!(v2.angle().to_degrees(), 180.0, epsilon = 1e-3);

        assert_relative_eq!(v3.magnitude(), 83.737685, epsilon = 1e-3);
        assert_relative_eq!(v3.angle().to_degrees(), 139.844, epsilon = 1e-3);
    }

    #[rstest]
    #[case(1.0, 1.0, 45.0)]
    #[case(1.0, -1.0, 135.0)]
    #[case(-1.0, -1.0, 225.0)]
    #[case(-1.0, 1.0, 315.0)]
    fn test_angle_quadrants(#[case] x: f64, #[case] y: f64, #[case] expected: f64) {
        let angle = XY::new(x, y).angle();
        assert_relative_eq!(angle.to_degrees(), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_math_operations() {
        let a1 = XY::new(34.32, 14.53);
        let a2 = XY::new(24.54, -124.632);

        let sum = a1.add(&a2);
        assert_relative_eq!(sum.x, 34.32 + 24.54, epsilon = 1e-3);
        assert_relative_eq!(sum.y, 14.53 - 124.632, epsilon = 1e-3);

        let difference = a2.subtract(&a1);
        assert_relative_eq!(difference.x, 24.54 - 34.32, epsilon = 1e-3);
        assert_relative_eq!(difference.y, -124.632 - 14.53, epsilon = 1e-3);

        let scaled = a1.scale(2.5);
        assert_relative_eq!(scaled.x, 34.32 * 2.5, epsilon = 1e-3);
        assert_relative_eq!(scaled.y, 14.53 * 2.5, epsilon = 1e-3);

        let normalized = a2.normalize();
        let magnitude = a2.magnitude();
        assert_relative_eq!(normalized.x, a2.x / magnitude, epsilon = 1e-3);
        assert_relative_eq!(normalized.y, a2.y / magnitude, epsilon = 1e-3);
        assert_relative_eq!(normalized.magnitude(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_normalize_zero_vector_yields_nan() {
        let normalized = XY::new(0.0, 0.0).normalize();
        assert!(normalized.x.is_nan());
        assert!(normalized.y.is_nan());
    }

    #[test]
    fn test_operators_match_named_operations() {
        let a = XY::new(1.5, -2.0);
        let b = XY::new(0.5, 4.0);

        assert_eq!(a + b, a.add(&b));
        assert_eq!(a - b, a.subtract(&b));
        assert_eq!(a * 3.0, a.scale(3.0));

        let halved = a / 2.0;
        assert_relative_eq!(halved.x, 0.75, epsilon = 1e-9);
        assert_relative_eq!(halved.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_vector2_roundtrip() {
        let v = XY::new(1.0, 2.0);
        let back = XY::from_vector2(v.to_vector2());
        assert_eq!(v, back);
    }

    #[test]
    fn test_display() {
        assert_eq!(XY::new(3.0, -4.5).to_string(), "(3, -4.5)");
    }
}
