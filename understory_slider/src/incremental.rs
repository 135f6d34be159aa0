// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal slider with optional snapping increments.
//!
//! [`IncrementalSlider`] converts pointer x positions into a relative value,
//! snapping to increment boundaries when the pointer comes close to one. The
//! bound value stays owned by the host and is passed in on every call, in
//! host units; the slider maps it through its [`SliderRange`].
//!
//! Relative values outside `[0, 1]` are valid. They are only clamped for
//! display, and [`IncrementalSlider::indicator`] reports the overshoot
//! direction.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::{
//!     IncrementalSlider, SliderEvent, SliderRange, TrackGeometry,
//! };
//!
//! let mut slider = IncrementalSlider::new(SliderRange::new(0.0, 10.0), 5.0)
//!     .with_increment(2.5);
//! let track = TrackGeometry::new(220.0, 20.0);
//! let mut value = 5.0;
//!
//! slider.on_drag_start(value);
//! // Pointer near the 25% mark snaps and asks for a haptic pulse.
//! let events = slider.on_drag_changed(&mut value, 62.0, track);
//! assert_eq!(events.as_slice(), &[SliderEvent::Feedback]);
//! assert_eq!(value, 2.5);
//!
//! let events = slider.on_drag_end(value);
//! assert_eq!(events.as_slice(), &[SliderEvent::DidChange { old: 5.0, new: 2.5 }]);
//! ```

use core::ops::Range;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`
use kurbo::Rect;
use log::{debug, trace};

use crate::snap::{find_snap_index, increment_count, increment_value};
use crate::track::clamp_unit;
use crate::{IncrementalMetrics, SliderEvent, SliderEvents, SliderRange, TrackGeometry};

/// Tolerance for treating the current value as the default.
const DEFAULT_EPSILON: f64 = 1e-9;

/// Which value a double activation resets to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ResetTarget {
    /// The configured default.
    #[default]
    Default,
    /// The range minimum (relative `0.0`).
    Minimum,
    /// The range maximum (relative `1.0`).
    Maximum,
    /// Host value zero.
    Zero,
}

/// Glyph the handle shows for the current value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleIndicator {
    /// The value equals the default.
    AtDefault,
    /// The value is below the range minimum.
    BelowRange,
    /// The value is above the range maximum.
    AboveRange,
    /// Nothing to show.
    Plain,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { relative_start: f64 },
}

/// Horizontal slider state machine: `Idle → Dragging → Idle`.
#[derive(Clone, Debug)]
pub struct IncrementalSlider {
    range: SliderRange,
    relative_default: f64,
    relative_zero: f64,
    relative_increment: Option<f64>,
    metrics: IncrementalMetrics,
    phase: DragPhase,
    at_increment_index: Option<usize>,
}

impl IncrementalSlider {
    /// Creates a slider over `range` with `default` in host units.
    #[must_use]
    pub fn new(range: SliderRange, default: f64) -> Self {
        Self {
            range,
            relative_default: range.to_relative(default),
            relative_zero: range.relative_zero(),
            relative_increment: None,
            metrics: IncrementalMetrics::default(),
            phase: DragPhase::Idle,
            at_increment_index: None,
        }
    }

    /// Creates a slider whose bound value already is relative.
    #[must_use]
    pub fn relative(relative_default: f64) -> Self {
        Self::new(SliderRange::UNIT, relative_default)
    }

    /// Sets the step size in host units.
    ///
    /// Ignored for a zero-span range.
    #[must_use]
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.relative_increment = self.range.relative_increment(increment);
        self
    }

    /// Overrides the relative position the filled bar grows from.
    #[must_use]
    pub fn with_relative_zero(mut self, relative_zero: f64) -> Self {
        self.relative_zero = relative_zero;
        self
    }

    /// Sets the sizing.
    #[must_use]
    pub fn with_metrics(mut self, metrics: IncrementalMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The host range.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// The sizing.
    #[must_use]
    pub fn metrics(&self) -> &IncrementalMetrics {
        &self.metrics
    }

    /// Default value, relative.
    #[must_use]
    pub fn relative_default(&self) -> f64 {
        self.relative_default
    }

    /// Where the filled bar is anchored, relative. May lie outside `[0, 1]`.
    #[must_use]
    pub fn relative_zero(&self) -> f64 {
        self.relative_zero
    }

    /// Step size, relative.
    #[must_use]
    pub fn relative_increment(&self) -> Option<f64> {
        self.relative_increment
    }

    /// Number of increments across the track; at least one.
    #[must_use]
    pub fn increment_count(&self) -> usize {
        increment_count(self.relative_increment)
    }

    /// Returns `true` between drag start and drag end.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Increment the current drag last snapped to.
    #[must_use]
    pub fn at_increment_index(&self) -> Option<usize> {
        self.at_increment_index
    }

    /// The host value converted to a relative one.
    #[must_use]
    pub fn relative_value(&self, value: f64) -> f64 {
        self.range.to_relative(value)
    }

    /// Track geometry for a control of the given width.
    #[must_use]
    pub fn track(&self, track_width: f64) -> TrackGeometry {
        TrackGeometry::from_metrics(track_width, &self.metrics)
    }

    /// Begins a drag, capturing the current value.
    ///
    /// Reports [`SliderEvent::WillChange`]. Does nothing if already dragging.
    pub fn on_drag_start(&mut self, value: f64) -> SliderEvents {
        let mut events = SliderEvents::new();
        if self.is_dragging() {
            trace!("incremental slider: drag start while dragging");
            return events;
        }
        let relative_start = self.relative_value(value);
        self.phase = DragPhase::Dragging { relative_start };
        debug!("incremental slider: drag began at {relative_start}");
        events.push(SliderEvent::WillChange);
        events
    }

    /// Moves the drag to a pointer at `pointer_x` on `track`.
    ///
    /// Snaps to an increment boundary within the snap radius, reporting
    /// [`SliderEvent::Feedback`] when a new boundary is reached; otherwise
    /// follows the pointer. If no drag is in progress one is started first.
    pub fn on_drag_changed(
        &mut self,
        value: &mut f64,
        pointer_x: f64,
        track: TrackGeometry,
    ) -> SliderEvents {
        let mut events = if self.is_dragging() {
            SliderEvents::new()
        } else {
            self.on_drag_start(*value)
        };

        let normalized = track.normalized_x(pointer_x);
        let count = self.increment_count();
        match find_snap_index(normalized, count) {
            Some(index) => {
                if self.at_increment_index != Some(index) {
                    self.at_increment_index = Some(index);
                    *value = self.range.to_external(increment_value(index, count));
                    events.push(SliderEvent::Feedback);
                }
            }
            None => {
                self.at_increment_index = None;
                *value = self.range.to_external(normalized);
            }
        }
        events
    }

    /// Gesture entry point for raw drag updates.
    ///
    /// Until a drag is in progress, updates whose horizontal travel does not
    /// exceed the activation distance are ignored, so taps and vertical
    /// scrolls do not grab the slider. A NaN translation never activates.
    pub fn on_gesture_changed(
        &mut self,
        value: &mut f64,
        translation_x: f64,
        location_x: f64,
        track: TrackGeometry,
    ) -> SliderEvents {
        let activated = translation_x.abs() > self.metrics.activation_distance;
        if !self.is_dragging() && !activated {
            trace!("incremental slider: gesture below activation distance");
            return SliderEvents::new();
        }
        self.on_drag_changed(value, location_x, track)
    }

    /// Ends the drag, reporting the start and end value in host units.
    ///
    /// Without a drag in progress this is a no-op.
    pub fn on_drag_end(&mut self, value: f64) -> SliderEvents {
        let mut events = SliderEvents::new();
        let DragPhase::Dragging { relative_start } = self.phase else {
            trace!("incremental slider: drag end without start");
            return events;
        };
        let relative_end = self.relative_value(value);
        debug!("incremental slider: drag ended, {relative_start} -> {relative_end}");
        events.push(SliderEvent::DidChange {
            old: self.range.to_external(relative_start),
            new: self.range.to_external(relative_end),
        });
        self.phase = DragPhase::Idle;
        self.at_increment_index = None;
        events
    }

    /// Jumps straight to `target`, as for a double tap or an accessibility
    /// action.
    ///
    /// Reports a full `WillChange`, `Feedback`, `DidChange` sequence even
    /// though no drag happened.
    pub fn on_double_activate(&mut self, value: &mut f64, target: ResetTarget) -> SliderEvents {
        let relative_old = self.relative_value(*value);
        let relative_new = match target {
            ResetTarget::Default => self.relative_default,
            ResetTarget::Minimum => 0.0,
            ResetTarget::Maximum => 1.0,
            ResetTarget::Zero => self.relative_zero,
        };
        let old = self.range.to_external(relative_old);
        let new = self.range.to_external(relative_new);
        *value = new;
        debug!("incremental slider: reset to {target:?}, {old} -> {new}");

        let mut events = SliderEvents::new();
        events.push(SliderEvent::WillChange);
        events.push(SliderEvent::Feedback);
        events.push(SliderEvent::DidChange { old, new });
        events
    }

    /// Glyph for the handle at `value`.
    #[must_use]
    pub fn indicator(&self, value: f64) -> HandleIndicator {
        let relative = self.relative_value(value);
        if (relative - self.relative_default).abs() < DEFAULT_EPSILON {
            HandleIndicator::AtDefault
        } else if relative < 0.0 {
            HandleIndicator::BelowRange
        } else if relative > 1.0 {
            HandleIndicator::AboveRange
        } else {
            HandleIndicator::Plain
        }
    }

    /// Left offset of the handle on `track`.
    #[must_use]
    pub fn handle_offset(&self, value: f64, track: TrackGeometry) -> f64 {
        track.handle_offset(self.relative_value(value))
    }

    /// Extent of the filled bar on `track`.
    #[must_use]
    pub fn fill_span(&self, value: f64, track: TrackGeometry) -> Range<f64> {
        track.fill_span(self.relative_zero, self.relative_value(value))
    }

    /// Handle position clamped to the track, relative.
    #[must_use]
    pub fn display_value(&self, value: f64) -> f64 {
        clamp_unit(self.relative_value(value))
    }

    /// Increment segments of the bar on `track`, `bar_height` tall.
    pub fn segments(&self, track: TrackGeometry) -> impl Iterator<Item = Rect> + use<> {
        let height = self.metrics.bar_height;
        track
            .segments(self.increment_count(), self.metrics.increment_spacing())
            .map(move |span| Rect::new(span.start, 0.0, span.end, height))
    }
}
