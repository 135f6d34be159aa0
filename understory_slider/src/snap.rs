// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Increment snapping for normalized slider positions.
//!
//! A slider with a step of `1 / n` has `n + 1` step boundaries at
//! `0, 1/n, 2/n, …, 1`. A position strictly within [`SNAP_RADIUS`] of a
//! boundary snaps to it; anywhere else the position is used as is.
//!
//! ```
//! use understory_slider::snap::{find_snap_index, increment_count};
//!
//! let count = increment_count(Some(0.25));
//! assert_eq!(count, 4);
//! assert_eq!(find_snap_index(0.24, count), Some(1));
//! assert_eq!(find_snap_index(0.251, count), Some(1));
//! assert_eq!(find_snap_index(0.276, count), None);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`, `floor`

/// Half-width of the window around each step boundary that snaps.
pub const SNAP_RADIUS: f64 = 0.025;

/// Number of increments for a relative step size.
///
/// `round(1 / increment)`, never less than one. A missing, zero, negative or
/// non-finite increment yields a single increment spanning the whole track.
#[must_use]
pub fn increment_count(relative_increment: Option<f64>) -> usize {
    let Some(increment) = relative_increment else {
        return 1;
    };
    if !increment.is_finite() || increment <= 0.0 {
        return 1;
    }
    let count = (1.0 / increment).round();
    if !count.is_finite() || count < 1.0 {
        return 1;
    }
    to_index(count)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "callers pass non-negative whole numbers; the cast saturates for absurd step sizes"
)]
fn to_index(value: f64) -> usize {
    value as usize
}

/// Relative position of step boundary `index`.
#[must_use]
pub fn increment_value(index: usize, count: usize) -> f64 {
    let count = count.max(1);
    index as f64 / count as f64
}

/// Finds the step boundary that `value` snaps to, using [`SNAP_RADIUS`].
#[must_use]
pub fn find_snap_index(value: f64, count: usize) -> Option<usize> {
    find_snap_index_within(value, count, SNAP_RADIUS)
}

/// Finds the step boundary that `value` snaps to.
///
/// Candidates `0..=count` are scanned in ascending order and the first one
/// with `candidate - radius < value < candidate + radius` wins, so
/// overlapping windows resolve towards the lower index.
#[must_use]
pub fn find_snap_index_within(value: f64, count: usize, radius: f64) -> Option<usize> {
    let count = count.max(1);
    // Every candidate below `start` ends at least one step before `value`,
    // so the scan only ever touches the few boundaries around it.
    let lowest = ((value - radius) * count as f64).floor() - 1.0;
    let start = if lowest > 0.0 {
        to_index(lowest).min(count)
    } else {
        0
    };
    (start..=count)
        .take_while(|&index| increment_value(index, count) - radius < value)
        .find(|&index| value < increment_value(index, count) + radius)
}
