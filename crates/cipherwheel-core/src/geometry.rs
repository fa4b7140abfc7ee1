//! Geometric primitives for wheel layout.
//!
//! # Coordinate System
//!
//! Cipherwheel uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! Because Y increases downward, an angle of `-π/2` in the standard
//! `(cos, sin)` parameterization points straight up (12 o'clock), and
//! increasing angles sweep clockwise on screen. Ring layout relies on
//! this: sector angles carry a `-π/2` offset so sector 0 starts at
//! 12 o'clock.

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f64` coordinates so that millimeter-scale print output
/// keeps full precision through the trigonometric projections.
///
/// # Examples
///
/// ```
/// # use cipherwheel_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// assert_eq!(p.x(), 10.0);
/// assert_eq!(p.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Projects a polar coordinate onto the Cartesian plane.
///
/// Returns `(center.x + radius·cos(angle), center.y + radius·sin(angle))`.
/// `angle` is in radians; callers are responsible for the `-π/2` offset
/// that places angle 0 at 12 o'clock (see the
/// [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use cipherwheel_core::geometry::{Point, project};
/// use std::f64::consts::FRAC_PI_2;
///
/// let center = Point::new(100.0, 100.0);
/// let top = project(center, 50.0, -FRAC_PI_2);
/// assert!((top.x() - 100.0).abs() < 1e-9);
/// assert!((top.y() - 50.0).abs() < 1e-9);
/// ```
pub fn project(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        radius.mul_add(angle.cos(), center.x()), // center.x + radius * cos(angle)
        radius.mul_add(angle.sin(), center.y()), // center.y + radius * sin(angle)
    )
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f64, actual.x(), expected.x(), epsilon = 1e-9);
        assert_approx_eq!(f64, actual.y(), expected.y(), epsilon = 1e-9);
    }

    #[test]
    fn test_project_cardinal_points() {
        let center = Point::new(100.0, 100.0);

        // -π/2 is 12 o'clock in screen coordinates
        assert_point_eq(project(center, 50.0, -FRAC_PI_2), Point::new(100.0, 50.0));
        // 0 is 3 o'clock
        assert_point_eq(project(center, 50.0, 0.0), Point::new(150.0, 100.0));
        // π/2 is 6 o'clock
        assert_point_eq(project(center, 50.0, FRAC_PI_2), Point::new(100.0, 150.0));
        // π is 9 o'clock
        assert_point_eq(project(center, 50.0, PI), Point::new(50.0, 100.0));
    }

    #[test]
    fn test_project_zero_radius_is_center() {
        let center = Point::new(12.5, -3.0);
        assert_point_eq(project(center, 0.0, 1.234), center);
    }
}

#[cfg(test)]
mod proptest_tests {
    use std::f64::consts::TAU;

    use proptest::prelude::*;

    use super::*;

    fn angle_strategy() -> impl Strategy<Value = f64> {
        -10.0f64..10.0
    }

    /// Projecting an angle and recovering it with `atan2` reproduces the
    /// angle modulo 2π.
    fn check_angle_round_trip(center: Point, radius: f64, angle: f64) -> Result<(), TestCaseError> {
        let p = project(center, radius, angle);
        let recovered = (p.y() - center.y()).atan2(p.x() - center.x());

        let diff = (recovered - angle).rem_euclid(TAU);
        let wrapped = diff.min(TAU - diff);
        prop_assert!(
            wrapped < 1e-6,
            "angle {angle} recovered as {recovered} (wrapped diff {wrapped})"
        );
        Ok(())
    }

    /// A projected point lies exactly `radius` away from the center.
    fn check_distance_preserved(
        center: Point,
        radius: f64,
        angle: f64,
    ) -> Result<(), TestCaseError> {
        let p = project(center, radius, angle);
        let dist = (p.x() - center.x()).hypot(p.y() - center.y());
        prop_assert!(
            (dist - radius).abs() < 1e-6,
            "distance {dist} differs from radius {radius}"
        );
        Ok(())
    }

    proptest! {
        #[test]
        fn angle_round_trip(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            radius in 0.001f64..1000.0,
            angle in angle_strategy(),
        ) {
            check_angle_round_trip(Point::new(x, y), radius, angle)?;
        }

        #[test]
        fn distance_preserved(
            x in -1000.0f64..1000.0,
            y in -1000.0f64..1000.0,
            radius in 0.0f64..1000.0,
            angle in angle_strategy(),
        ) {
            check_distance_preserved(Point::new(x, y), radius, angle)?;
        }
    }
}
