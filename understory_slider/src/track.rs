// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal track geometry for the incremental slider.
//!
//! The handle center travels between `handle_width / 2` and
//! `track_width - handle_width / 2`, so the usable span is
//! `track_width - handle_width`. Offsets returned here are measured from the
//! left end of that span.

use core::ops::Range;

use crate::IncrementalMetrics;

/// Width of a slider track and of its handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Full width of the control.
    pub track_width: f64,
    /// Diameter of the handle.
    pub handle_width: f64,
}

impl TrackGeometry {
    /// Creates track geometry.
    #[must_use]
    pub const fn new(track_width: f64, handle_width: f64) -> Self {
        Self {
            track_width,
            handle_width,
        }
    }

    /// Track geometry using the handle size from `metrics`.
    #[must_use]
    pub fn from_metrics(track_width: f64, metrics: &IncrementalMetrics) -> Self {
        Self::new(track_width, metrics.handle_width())
    }

    /// Distance the handle can travel; zero when the track is too narrow.
    #[must_use]
    pub fn usable_width(&self) -> f64 {
        let usable = self.track_width - self.handle_width;
        if usable > 0.0 { usable } else { 0.0 }
    }

    /// Normalized `[0, 1]` position for a pointer at `pointer_x`.
    ///
    /// The pointer is taken to grab the handle at its center. A degenerate
    /// track or a NaN pointer maps to `0.0`.
    #[must_use]
    pub fn normalized_x(&self, pointer_x: f64) -> f64 {
        let usable = self.usable_width();
        if usable == 0.0 {
            return 0.0;
        }
        clamp_unit((pointer_x - self.handle_width / 2.0) / usable)
    }

    /// Left offset of the handle for a relative value.
    #[must_use]
    pub fn handle_offset(&self, relative: f64) -> f64 {
        clamp_unit(relative) * self.usable_width()
    }

    /// Horizontal extent of the filled bar between `relative_zero` and
    /// `relative`, both clamped to the track.
    #[must_use]
    pub fn fill_span(&self, relative_zero: f64, relative: f64) -> Range<f64> {
        let a = clamp_unit(relative_zero);
        let b = clamp_unit(relative);
        let usable = self.usable_width();
        a.min(b) * usable..a.max(b) * usable
    }

    /// Extents of `count` equal bar segments separated by `spacing`.
    pub fn segments(
        &self,
        count: usize,
        spacing: f64,
    ) -> impl Iterator<Item = Range<f64>> + use<> {
        let count = count.max(1);
        let step = self.usable_width() / count as f64;
        let inset = spacing / 2.0;
        (0..count).map(move |i| {
            let start = i as f64 * step;
            start + inset..start + step - inset
        })
    }
}

/// Clamps into `[0, 1]`, mapping NaN to `0.0`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
