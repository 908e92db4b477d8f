//! Rhumb: planar navigation geometry for heading-oriented robotics and mapping
//!
//! This crate provides an [`Angle`] type that stays exactly where arithmetic
//! puts it until explicitly wrapped, and two interchangeable planar vector
//! representations, [`XY`] and [`Polar`], joined by the [`Vector`]
//! capability. Headings follow the navigation convention: zero points along
//! +Y (forward) and angles grow clockwise.
//!
//! ```rust
//! use rhumb::{Angle, Polar, Vector, XY};
//!
//! let heading = Angle::from_degrees(270.0) + Angle::from_degrees(180.0);
//! assert_eq!(heading.to_degrees(), 450.0);
//! assert_eq!(heading.wrap().to_degrees(), 90.0);
//!
//! let leg = Polar::new(5.0, heading.wrap());
//! let total = leg.add(&XY::new(0.0, 2.0));
//! assert!((total.x - 5.0).abs() < 1e-9);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;

// Re-export commonly used types
pub use coordinates::{Angle, AngleUnit, Polar, Vector, XY};

/// Main error type for the rhumb library
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("wrap range is negative: [{min}, {max}) degrees")]
    NegativeRange { min: f64, max: f64 },

    #[error("wrap range too small: [{min}, {max}) spans {span} degrees, need a full 360")]
    RangeTooSmall { min: f64, max: f64, span: f64 },
}

/// Result type for rhumb operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_window() {
        let negative = ConfigurationError::NegativeRange {
            min: 10.0,
            max: 0.0,
        };
        assert_eq!(
            negative.to_string(),
            "wrap range is negative: [10, 0) degrees"
        );

        let small = ConfigurationError::RangeTooSmall {
            min: 0.0,
            max: 90.0,
            span: 90.0,
        };
        assert_eq!(
            small.to_string(),
            "wrap range too small: [0, 90) spans 90 degrees, need a full 360"
        );
    }
}
