// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout of the circular slider overlay ring.
//!
//! The overlay is drawn above the handles and is offset so that its center
//! sits on the active handle's published anchor point. While a drag is live
//! it shows the band swept since the drag started, a knob at the start
//! direction and a knob at the current direction.
//!
//! ```
//! use kurbo::{Point, Rect, Vec2};
//! use understory_slider::{
//!     CircleMetrics, CircleOverlay, CircleSliderHandle, CircleSliderMetadata, OverlayContent,
//! };
//!
//! let mut metadata = CircleSliderMetadata::inactive();
//! let mut handle = CircleSliderHandle::new(0_u32);
//! handle.on_layout_changed(&mut metadata, Rect::new(90.0, 90.0, 110.0, 110.0));
//!
//! let overlay = CircleOverlay::new(CircleMetrics::compact());
//! let frame = Rect::from_center_size(Point::new(50.0, 50.0), overlay.size());
//! assert!(overlay.layout(&metadata, frame).is_none());
//!
//! let mut value = 0.0;
//! handle.on_drag_changed(&mut metadata, &mut value, Vec2::new(1.0, 0.0));
//! let layout = overlay.layout(&metadata, frame).unwrap();
//! assert_eq!(layout.offset, Vec2::new(50.0, 50.0));
//! assert!(matches!(layout.content, OverlayContent::Dragging(_)));
//! ```

use core::f64::consts::TAU;
use core::hash::Hash;

use kurbo::{Arc, BezPath, Point, Rect, Size, Vec2};

use crate::{Angle, CircleMetrics, CircleSession, CircleSliderMetadata};

/// Lays out the overlay ring for a [`CircleSliderMetadata`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CircleOverlay {
    /// Ring sizing.
    pub metrics: CircleMetrics,
}

/// Where and what the overlay draws.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayLayout {
    /// Translation from the overlay frame center to the active anchor.
    pub offset: Vec2,
    /// What to draw.
    pub content: OverlayContent,
}

/// Overlay content for the current interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum OverlayContent {
    /// A handle is pressed but not dragged: draw the empty band.
    Pressed,
    /// A drag is live.
    Dragging(ArcGeometry),
}

/// Geometry of the swept band, relative to the overlay center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcGeometry {
    /// Pointer direction at drag start.
    pub start_angle: Angle,
    /// Pointer direction now, `start_angle` plus the accumulated rotation.
    pub end_angle: Angle,
    /// Direction of the middle of the band, wrapped into `(-180°, 180°]`.
    pub mid_angle: Angle,
    /// Angular length of the band; the absolute accumulated rotation.
    pub sweep: Angle,
    /// Inner radius of the band.
    pub inner_radius: f64,
    /// Outer radius of the band.
    pub outer_radius: f64,
    /// Center of the start knob.
    pub start_knob: Vec2,
    /// Center of the current knob.
    pub current_knob: Vec2,
    /// Diameter of both knobs.
    pub knob_diameter: f64,
}

impl CircleOverlay {
    /// Creates an overlay with the given sizing.
    #[must_use]
    pub const fn new(metrics: CircleMetrics) -> Self {
        Self { metrics }
    }

    /// Size of the overlay frame.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.metrics.radius * 2.0, self.metrics.radius * 2.0)
    }

    /// Lays out the overlay placed at `frame`.
    ///
    /// Returns `None` when nothing is active or the active handle has not
    /// published an anchor yet.
    #[must_use]
    pub fn layout<K: Clone + Eq + Hash>(
        &self,
        metadata: &CircleSliderMetadata<K>,
        frame: Rect,
    ) -> Option<OverlayLayout> {
        let anchor = metadata.anchor_point()?;
        let content = match metadata.session() {
            Some(session) => OverlayContent::Dragging(self.arc(session)),
            None => OverlayContent::Pressed,
        };
        Some(OverlayLayout {
            offset: anchor - frame.center(),
            content,
        })
    }

    /// Band geometry for a live session.
    #[must_use]
    pub fn arc<K>(&self, session: &CircleSession<K>) -> ArcGeometry {
        let start_angle = session.start_angle;
        let end_angle = session.end_angle();
        let orbit = self.metrics.knob_orbit();
        ArcGeometry {
            start_angle,
            end_angle,
            mid_angle: ((start_angle + end_angle) / 2.0).normalized(),
            sweep: session.current_angle.abs(),
            inner_radius: self.metrics.inner_radius(),
            outer_radius: self.metrics.radius,
            start_knob: Vec2::from_angle(start_angle.radians()) * orbit,
            current_knob: Vec2::from_angle(end_angle.radians()) * orbit,
            knob_diameter: self.metrics.thickness,
        }
    }
}

impl ArcGeometry {
    /// Outline of the band centered on `center`, as a closed path.
    ///
    /// Sweeps beyond a full turn draw the whole ring.
    #[must_use]
    pub fn to_path(&self, center: Point, tolerance: f64) -> BezPath {
        let sweep = self.sweep.radians().min(TAU);
        let first = self.mid_angle.radians() - sweep / 2.0;
        let last = first + sweep;
        let outer = Arc {
            center,
            radii: Vec2::new(self.outer_radius, self.outer_radius),
            start_angle: first,
            sweep_angle: sweep,
            x_rotation: 0.0,
        };
        let inner = Arc {
            center,
            radii: Vec2::new(self.inner_radius, self.inner_radius),
            start_angle: last,
            sweep_angle: -sweep,
            x_rotation: 0.0,
        };

        let mut path = BezPath::new();
        path.move_to(center + Vec2::from_angle(first) * self.outer_radius);
        path.extend(outer.append_iter(tolerance));
        path.line_to(center + Vec2::from_angle(last) * self.inner_radius);
        path.extend(inner.append_iter(tolerance));
        path.close_path();
        path
    }
}
