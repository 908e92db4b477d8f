//! # Angle Representation Module
//!
//! This module provides the unwrapped [`Angle`] type used throughout the
//! crate for headings and vector directions.
//!
//! ## Design Philosophy
//!
//! An `Angle` keeps exactly the value it was constructed with. Arithmetic is
//! unbounded, so summing headings across several turns accumulates past 360
//! degrees instead of silently folding back. Callers pick the moment of
//! normalization by invoking one of the wrap operations, which keeps the
//! point of truncation visible in the calling code.
//!
//! ## Internal Storage
//!
//! The canonical representation is degrees (`f64`). Radian inputs convert
//! once at construction via `value * (180/π)`; [`Angle::to_radians`]
//! converts back on demand. Degrees were chosen because wrap ranges and
//! navigation headings are specified in degrees throughout this crate, and
//! a single canonical unit keeps the arithmetic paths free of unit checks.
//!
//! ## Wrapping
//!
//! [`Angle::wrap_range`] folds an angle into a caller-supplied half-open
//! window at least one full turn wide, stepping by whole turns so the
//! result stays congruent to the input modulo 360 degrees.
//! [`Angle::wrap`] and [`Angle::wrap_navigation`] are the two common
//! windows, [0, 360) and [-180, 180).
//!
//! ## Examples
//!
//! ```rust
//! use rhumb::Angle;
//!
//! // Headings accumulate freely...
//! let spun = Angle::from_degrees(270.0) + Angle::from_degrees(107.0);
//! assert_eq!(spun.to_degrees(), 377.0);
//!
//! // ...and fold back only on request.
//! let compass = spun.wrap();
//! assert!((compass.to_degrees() - 17.0).abs() < 1e-9);
//! ```

use crate::constants::{DEFAULT_EPSILON, DEG2RAD, FULL_TURN_DEG, HALF_TURN_DEG, RAD2DEG};
use crate::{ConfigurationError, Result};
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;

/// Unit tag for the value handed to [`Angle::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    /// Angle measure given in degrees
    Degrees,
    /// Angle measure given in radians
    Radians,
}

/// An unwrapped angular measure stored canonically in degrees
///
/// The value is never folded into a range on its own: constructing an angle
/// of 725 degrees keeps 725 degrees until a wrap operation is called.
/// Angles are plain `Copy` value objects; every operation returns a new
/// instance.
///
/// # Equality
///
/// The derived `PartialEq` compares degree values exactly. The tolerance
/// contract of this crate lives in the [`approx`] trait impls: two angles
/// are approximately equal when their degree values differ by less than
/// 1e-4.
///
/// ```rust
/// use approx::{abs_diff_eq, abs_diff_ne};
/// use std::f64::consts::PI;
/// use rhumb::{Angle, AngleUnit};
///
/// assert!(abs_diff_eq!(Angle::from_degrees(180.0), Angle::new(AngleUnit::Radians, PI)));
/// assert!(abs_diff_ne!(Angle::from_degrees(180.0), Angle::from_degrees(540.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// The zero angle, pointing forward in the navigation convention
    ///
    /// Useful as a starting value when accumulating headings; `Default`
    /// returns the same angle.
    pub const ZERO: Angle = Angle { degrees: 0.0 };

    /// Creates an angle from a value tagged with its unit
    ///
    /// Radian values convert to the canonical degree representation
    /// immediately; degree values are stored as given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::f64::consts::PI;
    /// use rhumb::{Angle, AngleUnit};
    ///
    /// let half_turn = Angle::new(AngleUnit::Radians, PI);
    /// assert!((half_turn.to_degrees() - 180.0).abs() < 1e-9);
    /// ```
    pub fn new(unit: AngleUnit, value: f64) -> Self {
        match unit {
            AngleUnit::Degrees => Angle::from_degrees(value),
            AngleUnit::Radians => Angle::from_radians(value),
        }
    }

    /// Creates an angle from a value in degrees
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::Angle;
    ///
    /// let heading = Angle::from_degrees(73.5);
    /// assert_eq!(heading.to_degrees(), 73.5);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle { degrees }
    }

    /// Creates an angle from a value in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::f64::consts::PI;
    /// use rhumb::Angle;
    ///
    /// let quarter = Angle::from_radians(PI / 2.0);
    /// assert!((quarter.to_degrees() - 90.0).abs() < 1e-12);
    /// ```
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            degrees: radians * RAD2DEG,
        }
    }

    /// Returns the angle value in degrees
    pub fn to_degrees(&self) -> f64 {
        self.degrees
    }

    /// Returns the angle value in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::f64::consts::PI;
    /// use rhumb::Angle;
    ///
    /// let half_turn = Angle::from_degrees(180.0);
    /// assert!((half_turn.to_radians() - PI).abs() < 1e-12);
    /// ```
    pub fn to_radians(&self) -> f64 {
        self.degrees * DEG2RAD
    }

    /// Folds this angle into the half-open window `[min, max)`
    ///
    /// The window must be at least one full turn wide. The result is
    /// congruent to this angle modulo 360 degrees: the fold steps by whole
    /// turns, adding 360 while below `min` and subtracting 360 while at or
    /// above `max`. A value landing exactly on `max` therefore wraps to
    /// `min`. Windows wider than one turn admit several congruent
    /// representatives; the stepping picks the first one reached from the
    /// original value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NegativeRange`] when `max < min` and
    /// [`ConfigurationError::RangeTooSmall`] when the window spans less
    /// than 360 degrees. Both signal a caller mistake in how the window was
    /// specified and are meant to propagate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::Angle;
    ///
    /// let folded = Angle::from_degrees(810.0)
    ///     .wrap_range(Angle::from_degrees(-180.0), Angle::from_degrees(540.0))
    ///     .unwrap();
    /// assert!((folded.to_degrees() - 450.0).abs() < 1e-9);
    /// ```
    ///
    /// Wrapping into a window narrower than a full turn is rejected:
    ///
    /// ```rust
    /// use rhumb::{Angle, ConfigurationError};
    ///
    /// let err = Angle::from_degrees(160.0)
    ///     .wrap_range(Angle::ZERO, Angle::from_degrees(1.0))
    ///     .unwrap_err();
    /// assert!(matches!(err, ConfigurationError::RangeTooSmall { .. }));
    /// ```
    pub fn wrap_range(&self, min: Angle, max: Angle) -> Result<Angle> {
        let min_deg = min.to_degrees();
        let max_deg = max.to_degrees();
        let span = max_deg - min_deg;

        if span < 0.0 {
            return Err(ConfigurationError::NegativeRange {
                min: min_deg,
                max: max_deg,
            });
        }
        if span < FULL_TURN_DEG {
            return Err(ConfigurationError::RangeTooSmall {
                min: min_deg,
                max: max_deg,
                span,
            });
        }

        Ok(self.wrap_into(min_deg, max_deg))
    }

    /// Folds this angle into [0, 360), the compass window
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::Angle;
    ///
    /// assert!((Angle::from_degrees(377.0).wrap().to_degrees() - 17.0).abs() < 1e-9);
    ///
    /// // A full turn lands back on zero.
    /// assert_eq!(Angle::from_degrees(360.0).wrap().to_degrees(), 0.0);
    /// ```
    pub fn wrap(&self) -> Angle {
        self.wrap_into(0.0, FULL_TURN_DEG)
    }

    /// Folds this angle into [-180, 180), the signed navigation window
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rhumb::Angle;
    ///
    /// let relative = Angle::from_degrees(330.0).wrap_navigation();
    /// assert!((relative.to_degrees() - (-30.0)).abs() < 1e-9);
    /// ```
    pub fn wrap_navigation(&self) -> Angle {
        self.wrap_into(-HALF_TURN_DEG, HALF_TURN_DEG)
    }

    // Both bounds are trusted here; the public entry points either validate
    // them or pass fixed windows. NaN degrees fail every comparison and fall
    // through unchanged.
    fn wrap_into(&self, min_deg: f64, max_deg: f64) -> Angle {
        let mut degrees = self.degrees;
        while degrees < min_deg {
            degrees += FULL_TURN_DEG;
        }
        while degrees >= max_deg {
            degrees -= FULL_TURN_DEG;
        }
        Angle::from_degrees(degrees)
    }
}

// Arithmetic stays in degrees and is unbounded; no wrap is applied.
impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle::from_degrees(self.degrees + other.degrees)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle::from_degrees(self.degrees - other.degrees)
    }
}

impl std::ops::Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, scalar: f64) -> Angle {
        Angle::from_degrees(self.degrees * scalar)
    }
}

// Division by zero is not special-cased; the quotient carries the IEEE-754
// infinity or NaN.
impl std::ops::Div<f64> for Angle {
    type Output = Angle;

    fn div(self, divisor: f64) -> Angle {
        Angle::from_degrees(self.degrees / divisor)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

impl AbsDiffEq for Angle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Angle, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.degrees, &other.degrees, epsilon)
    }
}

impl RelativeEq for Angle {
    fn default_max_relative() -> f64 {
        DEFAULT_EPSILON
    }

    fn relative_eq(&self, other: &Angle, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.degrees, &other.degrees, epsilon, max_relative)
    }
}
