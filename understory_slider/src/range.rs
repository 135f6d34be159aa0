// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mapping between host units and relative slider values.
//!
//! A relative value of `0.0` is the range minimum and `1.0` the maximum.
//! Values outside `[0, 1]` are representable and pass through unclamped.

use core::fmt;

/// The host-facing numeric range of a slider.
///
/// A zero span (`minimum == maximum`) is allowed: every host value then maps
/// to relative `0.0`, and increments are ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderRange {
    /// Host value at relative `0.0`.
    pub minimum: f64,
    /// Host value at relative `1.0`.
    pub maximum: f64,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::UNIT
    }
}

impl SliderRange {
    /// The identity range `0.0..=1.0`.
    pub const UNIT: Self = Self {
        minimum: 0.0,
        maximum: 1.0,
    };

    /// Creates a range. Any pair of bounds is accepted.
    #[must_use]
    pub const fn new(minimum: f64, maximum: f64) -> Self {
        Self { minimum, maximum }
    }

    /// Creates a range, rejecting non-finite bounds.
    pub fn checked(minimum: f64, maximum: f64) -> Result<Self, RangeError> {
        if !minimum.is_finite() {
            return Err(RangeError::NonFiniteMinimum(minimum));
        }
        if !maximum.is_finite() {
            return Err(RangeError::NonFiniteMaximum(maximum));
        }
        Ok(Self { minimum, maximum })
    }

    /// `maximum - minimum`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.maximum - self.minimum
    }

    /// Returns `true` when the span is zero and relative mapping collapses.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    /// Converts a host value into a relative value.
    #[must_use]
    pub fn to_relative(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value - self.minimum) / self.span()
    }

    /// Converts a relative value into a host value.
    #[must_use]
    pub fn to_external(&self, relative: f64) -> f64 {
        relative * self.span() + self.minimum
    }

    /// Relative position of host value zero, used to anchor the filled bar.
    #[must_use]
    pub fn relative_zero(&self) -> f64 {
        self.to_relative(0.0)
    }

    /// Converts a host step size into a relative one.
    ///
    /// Returns `None` for a degenerate range.
    #[must_use]
    pub fn relative_increment(&self, increment: f64) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(increment / self.span())
    }
}

/// Error returned by [`SliderRange::checked`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RangeError {
    /// The minimum was NaN or infinite.
    NonFiniteMinimum(f64),
    /// The maximum was NaN or infinite.
    NonFiniteMaximum(f64),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteMinimum(v) => write!(f, "slider minimum must be finite, got {v}"),
            Self::NonFiniteMaximum(v) => write!(f, "slider maximum must be finite, got {v}"),
        }
    }
}

impl core::error::Error for RangeError {}
