//! # Coordinates Module
//!
//! Planar navigation geometry: the [`Angle`] type with explicit wrapping,
//! the two vector representations [`XY`] and [`Polar`], and the [`Vector`]
//! capability both representations implement.

pub mod angle;
pub mod polar;
pub mod xy;

pub use angle::{Angle, AngleUnit};
pub use polar::Polar;
pub use xy::XY;

/// Capability shared by the planar vector representations
///
/// Both [`XY`] and [`Polar`] expose the same read surface (components,
/// magnitude, heading) and the same shape-preserving operations (scale,
/// normalize). The binary operations are provided methods computed from the
/// cartesian components, so they accept any mix of representations and are
/// dispatched statically; sums and differences come back as [`XY`] because
/// componentwise arithmetic lands there naturally.
pub trait Vector: Sized {
    /// Rightward cartesian component
    fn x(&self) -> f64;

    /// Forward cartesian component
    fn y(&self) -> f64;

    /// Length of the vector
    fn magnitude(&self) -> f64;

    /// Heading of the vector
    fn angle(&self) -> Angle;

    /// Multiplies the length by `scalar`, keeping the representation
    fn scale(&self, scalar: f64) -> Self;

    /// Vector of length one at the same heading, keeping the representation
    fn normalize(&self) -> Self;

    /// Componentwise sum with any other vector
    fn add<V: Vector>(&self, other: &V) -> XY {
        XY::new(self.x() + other.x(), self.y() + other.y())
    }

    /// Componentwise difference with any other vector
    fn subtract<V: Vector>(&self, other: &V) -> XY {
        XY::new(self.x() - other.x(), self.y() - other.y())
    }

    /// Dot product with any other vector
    fn dot<V: Vector>(&self, other: &V) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    /// Planar cross product magnitude with any other vector
    ///
    /// Both headings are folded into [0, 360) and the product uses the sine
    /// of their absolute difference. That difference is not reduced to the
    /// shorter way around, so once the headings sit more than a half turn
    /// apart in fold order the sine, and with it the sign of the result,
    /// flips.
    fn cross<V: Vector>(&self, other: &V) -> f64 {
        let a1 = self.angle().wrap();
        let a2 = other.angle().wrap();
        let between = (a1.to_radians() - a2.to_radians()).abs();
        self.magnitude() * other.magnitude() * between.sin()
    }
}
