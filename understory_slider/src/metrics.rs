// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing for the slider surfaces.
//!
//! Pointer-driven platforms use the tighter [`compact`](CircleMetrics::compact)
//! presets, touch platforms the larger [`touch`](CircleMetrics::touch) ones.
//! Hosts pick a preset or fill the fields themselves.

/// Sizing of a circular slider handle and its overlay ring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleMetrics {
    /// Outer radius of the overlay ring.
    pub radius: f64,
    /// Width of the ring band, also the handle diameter.
    pub thickness: f64,
}

impl CircleMetrics {
    /// Sizes for mouse and trackpad platforms.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            radius: 40.0,
            thickness: 20.0,
        }
    }

    /// Sizes for touch platforms.
    #[must_use]
    pub const fn touch() -> Self {
        Self {
            radius: 60.0,
            thickness: 40.0,
        }
    }

    /// Distance from the ring center to the center of a knob riding the band.
    #[must_use]
    pub fn knob_orbit(&self) -> f64 {
        self.radius - self.thickness / 2.0
    }

    /// Inner radius of the ring band.
    #[must_use]
    pub fn inner_radius(&self) -> f64 {
        self.radius - self.thickness
    }

    /// Inset of the white core inside an idle handle.
    #[must_use]
    pub fn handle_ring_inset(&self, hovered: bool) -> f64 {
        if hovered {
            self.thickness / 6.0
        } else {
            self.thickness / 4.0
        }
    }
}

impl Default for CircleMetrics {
    fn default() -> Self {
        Self::touch()
    }
}

/// Sizing of an incremental slider track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IncrementalMetrics {
    /// Height of the track bar.
    pub bar_height: f64,
    /// Radius of the round handle.
    pub handle_radius: f64,
    /// Horizontal travel before a gesture counts as a drag.
    pub activation_distance: f64,
}

impl IncrementalMetrics {
    /// Sizes for mouse and trackpad platforms.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            bar_height: 4.0,
            handle_radius: 10.0,
            activation_distance: 10.0,
        }
    }

    /// Sizes for touch platforms.
    #[must_use]
    pub const fn touch() -> Self {
        Self {
            bar_height: 5.0,
            handle_radius: 15.0,
            activation_distance: 10.0,
        }
    }

    /// Handle diameter.
    #[must_use]
    pub fn handle_width(&self) -> f64 {
        self.handle_radius * 2.0
    }

    /// Gap between neighboring increment segments.
    #[must_use]
    pub fn increment_spacing(&self) -> f64 {
        self.bar_height * 0.75
    }
}

impl Default for IncrementalMetrics {
    fn default() -> Self {
        Self::touch()
    }
}
