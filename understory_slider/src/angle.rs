// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angles and angle unwrapping.
//!
//! Circular dragging accumulates rotation one pointer sample at a time. The
//! raw `atan2` angle of the pointer jumps by a full turn whenever it crosses
//! the negative x axis, so every per-sample delta is wrapped into
//! `(-180°, 180°]` with [`Angle::normalized`] before it is added to the
//! running total. Wrapping the absolute angle instead would alias a full turn
//! back to zero.
//!
//! ```
//! use understory_slider::Angle;
//!
//! let previous = Angle::from_degrees(170.0);
//! let current = Angle::from_degrees(-170.0);
//!
//! // The raw difference is -340°, the pointer actually moved +20°.
//! let delta = (current - previous).normalized();
//! assert!((delta.degrees() - 20.0).abs() < 1e-9);
//! ```

use core::f64::consts::{PI, TAU};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `atan2`, `abs`
use kurbo::Vec2;

/// A planar angle, stored in radians.
///
/// Angles follow the screen convention of the pointer translation they are
/// derived from: `0` points along +x and positive angles turn towards +y.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// One full turn.
    pub const FULL_TURN: Self = Self { radians: TAU };

    /// Creates an angle from radians.
    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Direction of a vector, `atan2(y, x)`.
    ///
    /// The zero vector yields [`Angle::ZERO`].
    #[must_use]
    pub fn of_vector(v: Vec2) -> Self {
        Self {
            radians: v.y.atan2(v.x),
        }
    }

    /// The angle in radians.
    #[must_use]
    pub const fn radians(self) -> f64 {
        self.radians
    }

    /// The angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    /// Fraction of a full turn; `1.0` is 360°.
    #[must_use]
    pub fn turns(self) -> f64 {
        self.radians / TAU
    }

    /// Absolute value of the angle.
    #[must_use]
    pub fn abs(self) -> Self {
        Self {
            radians: self.radians.abs(),
        }
    }

    /// Wraps the angle into `(-180°, 180°]`.
    ///
    /// Non-finite angles normalize to zero.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            radians: wrap_half_turn(self.radians, PI),
        }
    }
}

/// Wraps an angle given in degrees into `(-180, 180]`.
///
/// This is [`Angle::normalized`] for callers that keep raw degree values.
/// Non-finite input yields `0.0`.
///
/// ```
/// use understory_slider::normalize_degrees;
///
/// assert_eq!(normalize_degrees(190.0), -170.0);
/// assert_eq!(normalize_degrees(-180.0), 180.0);
/// assert_eq!(normalize_degrees(720.0), 0.0);
/// ```
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    wrap_half_turn(degrees, 180.0)
}

fn wrap_half_turn(value: f64, half_turn: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let full_turn = half_turn * 2.0;
    // `%` keeps the sign of the dividend, so this lands in (-full, full).
    let mut wrapped = value % full_turn;
    if wrapped > half_turn {
        wrapped -= full_turn;
    } else if wrapped <= -half_turn {
        wrapped += full_turn;
    }
    wrapped
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl SubAssign for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn values_inside_range_are_unchanged() {
        for d in [-179.5, -90.0, 0.0, 45.0, 180.0] {
            assert_eq!(normalize_degrees(d), d);
        }
    }

    #[test]
    fn lower_bound_is_exclusive() {
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(-540.0), 180.0);
    }

    #[test]
    fn large_angles_wrap_in_one_step() {
        assert!(approx(normalize_degrees(3600.0 + 30.0), 30.0));
        assert!(approx(normalize_degrees(-3600.0 - 30.0), -30.0));
        assert!(approx(normalize_degrees(360.0 * 2.0e9 + 90.0), 90.0));
        // 1e12 is 280 past a multiple of 360.
        assert!(approx(normalize_degrees(1.0e12 + 90.0), 10.0));
    }

    #[test]
    fn non_finite_normalizes_to_zero() {
        assert_eq!(normalize_degrees(f64::NAN), 0.0);
        assert_eq!(normalize_degrees(f64::INFINITY), 0.0);
        assert_eq!(Angle::from_radians(f64::NEG_INFINITY).normalized(), Angle::ZERO);
    }

    #[test]
    fn radian_normalization_matches_degrees() {
        for d in [-725.0, -181.0, -10.0, 10.0, 181.0, 359.0, 725.0] {
            let a = Angle::from_degrees(d).normalized();
            assert!(approx(a.degrees(), normalize_degrees(d)), "{d}");
        }
    }

    #[test]
    fn wrap_across_negative_x_axis() {
        let previous = Angle::of_vector(Vec2::new(-1.0, 0.01));
        let current = Angle::of_vector(Vec2::new(-1.0, -0.01));
        let delta = (current - previous).normalized();
        assert!(delta.degrees() > 0.0 && delta.degrees() < 2.0);
    }

    #[test]
    fn of_vector_follows_screen_axes() {
        assert!(approx(Angle::of_vector(Vec2::new(1.0, 0.0)).degrees(), 0.0));
        assert!(approx(Angle::of_vector(Vec2::new(0.0, 1.0)).degrees(), 90.0));
        assert!(approx(Angle::of_vector(Vec2::new(-1.0, 0.0)).degrees(), 180.0));
        assert_eq!(Angle::of_vector(Vec2::ZERO), Angle::ZERO);
    }

    #[test]
    fn turns_are_fractions_of_tau() {
        assert!(approx(Angle::FULL_TURN.turns(), 1.0));
        assert!(approx(Angle::from_degrees(-90.0).turns(), -0.25));
    }
}
