// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: gesture-to-value state machines for slider controls.
//!
//! This crate holds the interaction logic of two slider controls and none of
//! their drawing. Each control is a small state machine that consumes pointer
//! events, writes a host-owned value, and returns notifications. Drawing code
//! reads the geometry the state machines expose and renders it however it
//! likes.
//!
//! - [`CircleSliderHandle`]: a knob. Dragging the pointer around the point
//!   where the drag started turns the value; one full turn is one
//!   `value_scale`. Several handles share a [`CircleSliderMetadata`], and a
//!   separate [`CircleOverlay`] draws the active drag on top of everything.
//! - [`IncrementalSlider`]: a horizontal track with optional snapping
//!   increments and a double-activate reset.
//!
//! ## Shared drag state
//!
//! The knob handle is small and clipped; the ring that shows the drag is large
//! and drawn above sibling content. They are separate elements, so the
//! parent owns one [`CircleSliderMetadata`] and lends it to both: handles
//! receive `&mut` while handling input, the overlay receives `&` during
//! layout. The metadata records which handle owns the single live drag
//! session, which handle is pressed, and where every handle sits on screen.
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use understory_slider::{
//!     CircleOverlay, CircleSliderHandle, CircleSliderMetadata, SliderEvent,
//! };
//!
//! let mut metadata = CircleSliderMetadata::inactive();
//! let mut left = CircleSliderHandle::new("left");
//! let mut right = CircleSliderHandle::new("right").with_value_scale(10.0);
//! left.on_layout_changed(&mut metadata, Rect::new(0.0, 0.0, 20.0, 20.0));
//! right.on_layout_changed(&mut metadata, Rect::new(100.0, 0.0, 120.0, 20.0));
//!
//! let (mut left_value, mut right_value) = (0.0, 0.0);
//!
//! // The right handle grabs the session.
//! right.on_drag_changed(&mut metadata, &mut right_value, Vec2::new(10.0, 0.0));
//! // The left handle cannot steal it.
//! left.on_drag_changed(&mut metadata, &mut left_value, Vec2::new(0.0, 10.0));
//! right.on_drag_changed(&mut metadata, &mut right_value, Vec2::new(0.0, 10.0));
//!
//! assert_eq!(left_value, 0.0);
//! assert!((right_value - 2.5).abs() < 1e-9);
//!
//! // The overlay follows the handle that owns the drag.
//! let overlay = CircleOverlay::default();
//! let frame = Rect::from_center_size(Point::ZERO, overlay.size());
//! let layout = overlay.layout(&metadata, frame).unwrap();
//! assert_eq!(layout.offset, Vec2::new(110.0, 10.0));
//!
//! let events = right.on_drag_ended(&mut metadata);
//! assert!(matches!(events[0], SliderEvent::DidChange { old, new } if old == 0.0 && new > 2.4));
//! ```
//!
//! ## Incremental slider
//!
//! ```rust
//! use understory_slider::{IncrementalSlider, ResetTarget, SliderEvent, SliderRange};
//!
//! let mut slider = IncrementalSlider::new(SliderRange::new(0.0, 100.0), 50.0)
//!     .with_increment(25.0);
//! let track = slider.track(230.0);
//! let mut volume = 80.0;
//!
//! slider.on_drag_changed(&mut volume, 130.0, track);
//! slider.on_drag_end(volume);
//!
//! let events = slider.on_double_activate(&mut volume, ResetTarget::Default);
//! assert_eq!(volume, 50.0);
//! assert_eq!(events.len(), 3);
//! ```
//!
//! ## Notifications
//!
//! Operations return [`SliderEvents`]: [`SliderEvent::WillChange`] once when
//! an edit starts, [`SliderEvent::DidChange`] once when it ends, and
//! [`SliderEvent::Feedback`] when a haptic pulse would help. `DidChange`
//! values are in host units; a knob reports its start value and the change
//! its rotation made. Route them yourself or through a [`SliderObserver`].
//!
//! Input that does not apply is ignored rather than reported: drag updates
//! from a handle that does not own the session, and end events without a
//! start. An abandoned gesture simply leaves the value where the last update
//! put it.
//!
//! ## Features
//!
//! - `std` (default): forward `std` to Kurbo.
//! - `libm`: use `libm` for floating point math in `no_std` builds.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod angle;
mod circle;
mod event;
mod incremental;
mod metadata;
mod metrics;
mod overlay;
mod range;
pub mod snap;
mod track;

pub use angle::{Angle, normalize_degrees};
pub use circle::{CircleSliderHandle, HandleAppearance};
pub use event::{SliderEvent, SliderEvents, SliderObserver};
pub use incremental::{HandleIndicator, IncrementalSlider, ResetTarget};
pub use metadata::{CircleSession, CircleSliderMetadata};
pub use metrics::{CircleMetrics, IncrementalMetrics};
pub use overlay::{ArcGeometry, CircleOverlay, OverlayContent, OverlayLayout};
pub use range::{RangeError, SliderRange};
pub use track::TrackGeometry;
