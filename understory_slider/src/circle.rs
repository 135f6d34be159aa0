// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Circular (knob) slider handle: turn pointer drags into rotation.
//!
//! ## Usage
//!
//! 1) The parent owns one [`CircleSliderMetadata`] shared by all handles and
//!    the overlay.
//! 2) Each handle publishes its on-screen frame with
//!    [`CircleSliderHandle::on_layout_changed`] whenever layout changes.
//! 3) Feed drag translations (pointer position relative to where the drag
//!    started) into [`CircleSliderHandle::on_drag_changed`], and the end of
//!    the gesture into [`CircleSliderHandle::on_drag_ended`].
//! 4) Feed press start/end into [`CircleSliderHandle::on_press_changed`] and
//!    [`CircleSliderHandle::on_press_ended`] for the pressed look.
//!
//! One full turn of the pointer around the drag origin moves the bound value
//! by exactly `value_scale`. Rotation keeps accumulating past a full turn and
//! the value is never clamped.
//!
//! Only one drag session exists per metadata. While one handle owns it,
//! drag events delivered to other handles are ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_slider::{CircleSliderHandle, CircleSliderMetadata, SliderEvent};
//!
//! let mut metadata = CircleSliderMetadata::inactive();
//! let mut handle = CircleSliderHandle::new("gain");
//! let mut value = 0.0;
//!
//! // First event starts the session.
//! let events = handle.on_drag_changed(&mut metadata, &mut value, Vec2::new(10.0, 0.0));
//! assert_eq!(events.as_slice(), &[SliderEvent::WillChange]);
//!
//! // A quarter turn clockwise on screen.
//! handle.on_drag_changed(&mut metadata, &mut value, Vec2::new(10.0, 10.0));
//! handle.on_drag_changed(&mut metadata, &mut value, Vec2::new(0.0, 10.0));
//! assert!((value - 0.25).abs() < 1e-9);
//!
//! let events = handle.on_drag_ended(&mut metadata);
//! assert!(matches!(events[0], SliderEvent::DidChange { old, .. } if old == 0.0));
//! assert!(!metadata.is_dragging());
//! ```

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Vec2};
use log::{debug, trace};

use crate::{Angle, CircleSliderMetadata, SliderEvent, SliderEvents};

/// How a handle should draw itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandleAppearance {
    /// This handle owns the drag; the overlay draws the knob instead.
    Hidden,
    /// The pointer is down on this handle.
    Pressed,
    /// Resting state.
    Idle {
        /// The pointer hovers the handle.
        hovered: bool,
    },
}

/// One draggable knob handle.
#[derive(Clone, Debug)]
pub struct CircleSliderHandle<K> {
    id: K,
    value_scale: f64,
    is_pressing: bool,
    is_hovering: bool,
    start_value: Option<f64>,
    previous_angle: Option<Angle>,
}

impl<K: Clone + Eq + Hash + Debug> CircleSliderHandle<K> {
    /// Creates a handle with a value scale of `1.0` per turn.
    #[must_use]
    pub fn new(id: K) -> Self {
        Self {
            id,
            value_scale: 1.0,
            is_pressing: false,
            is_hovering: false,
            start_value: None,
            previous_angle: None,
        }
    }

    /// Sets how much the bound value changes per full turn.
    #[must_use]
    pub fn with_value_scale(mut self, value_scale: f64) -> Self {
        self.value_scale = value_scale;
        self
    }

    /// This handle's id.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Value change per full turn.
    #[must_use]
    pub fn value_scale(&self) -> f64 {
        self.value_scale
    }

    /// Bound value captured when this handle's drag started.
    #[must_use]
    pub fn start_value(&self) -> Option<f64> {
        self.start_value
    }

    /// Returns `true` while the pointer is down on this handle.
    #[must_use]
    pub fn is_pressing(&self) -> bool {
        self.is_pressing
    }

    /// Returns `true` while the pointer hovers this handle.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }

    /// Handles a drag update.
    ///
    /// `translation` is the pointer offset from where the gesture started.
    /// The first update while no session exists starts one owned by this
    /// handle and reports [`SliderEvent::WillChange`]. Later updates from the
    /// owner add the wrapped angular delta to the session and write
    /// `start + turns * value_scale` into `value`. Updates from any other
    /// handle are ignored.
    pub fn on_drag_changed(
        &mut self,
        metadata: &mut CircleSliderMetadata<K>,
        value: &mut f64,
        translation: Vec2,
    ) -> SliderEvents {
        let angle = Angle::of_vector(translation);
        let mut events = SliderEvents::new();
        match metadata.session_mut() {
            None => {
                metadata.begin_session(self.id.clone(), angle);
                self.start_value = Some(*value);
                self.previous_angle = Some(angle);
                debug!(
                    "circle slider {:?}: drag began at {:.1}°",
                    self.id,
                    angle.degrees()
                );
                events.push(SliderEvent::WillChange);
            }
            Some(session) if session.owner == self.id => {
                if let (Some(previous), Some(start)) = (self.previous_angle, self.start_value) {
                    session.current_angle += (angle - previous).normalized();
                    *value = start + session.current_angle.turns() * self.value_scale;
                }
                self.previous_angle = Some(angle);
            }
            Some(session) => {
                trace!(
                    "circle slider {:?}: ignoring drag, session owned by {:?}",
                    self.id, session.owner
                );
            }
        }
        events
    }

    /// Handles the end of a drag.
    ///
    /// Ends the session if this handle owns it and reports
    /// [`SliderEvent::DidChange`] with the value at drag start and the change
    /// the rotation produced, `turns * value_scale`. The bound value itself
    /// already holds `start + change` from the last update. Without a
    /// matching session this is a no-op.
    pub fn on_drag_ended(&mut self, metadata: &mut CircleSliderMetadata<K>) -> SliderEvents {
        let mut events = SliderEvents::new();
        if !metadata.is_owned_by(&self.id) {
            trace!("circle slider {:?}: drag end without session", self.id);
            return events;
        }
        if let Some(session) = metadata.take_session() {
            if let Some(start) = self.start_value {
                let new = session.current_angle.turns() * self.value_scale;
                debug!(
                    "circle slider {:?}: drag ended after {:.1}°, {start} changed by {new}",
                    self.id,
                    session.current_angle.degrees()
                );
                events.push(SliderEvent::DidChange { old: start, new });
            }
        }
        self.start_value = None;
        self.previous_angle = None;
        events
    }

    /// Abandons any drag or press held by this handle without notifying.
    ///
    /// Use for gesture cancellation or when the handle leaves the view. The
    /// bound value keeps whatever the last drag update wrote.
    pub fn cancel(&mut self, metadata: &mut CircleSliderMetadata<K>) {
        if metadata.is_owned_by(&self.id) {
            metadata.take_session();
            debug!("circle slider {:?}: drag cancelled", self.id);
        }
        metadata.release_press(&self.id);
        self.is_pressing = false;
        self.start_value = None;
        self.previous_angle = None;
    }

    /// Handles the pointer going down (or moving while down) on this handle.
    ///
    /// The first call of a press marks this handle pressed locally and claims
    /// the shared press slot if no other handle holds it.
    pub fn on_press_changed(&mut self, metadata: &mut CircleSliderMetadata<K>) {
        if self.is_pressing {
            return;
        }
        self.is_pressing = true;
        if !metadata.claim_press(&self.id) {
            trace!("circle slider {:?}: press slot already taken", self.id);
        }
    }

    /// Handles the pointer going up; releases the press slot if held.
    pub fn on_press_ended(&mut self, metadata: &mut CircleSliderMetadata<K>) {
        self.is_pressing = false;
        metadata.release_press(&self.id);
    }

    /// Tracks pointer hover.
    pub fn on_hover_changed(&mut self, hovering: bool) {
        self.is_hovering = hovering;
    }

    /// Publishes the midpoint of this handle's frame for the overlay.
    ///
    /// `frame` must be in the coordinate space the overlay lays out in.
    pub fn on_layout_changed(&self, metadata: &mut CircleSliderMetadata<K>, frame: Rect) {
        metadata.publish_anchor(self.id.clone(), frame.center());
    }

    /// How this handle should currently draw.
    #[must_use]
    pub fn appearance(&self, metadata: &CircleSliderMetadata<K>) -> HandleAppearance {
        if metadata.is_owned_by(&self.id) {
            HandleAppearance::Hidden
        } else if self.is_pressing {
            HandleAppearance::Pressed
        } else {
            HandleAppearance::Idle {
                hovered: self.is_hovering,
            }
        }
    }
}
