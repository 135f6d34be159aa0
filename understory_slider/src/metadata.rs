// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state shared between circular slider handles and their overlay.
//!
//! The small handle a user grabs and the large ring that shows the drag are
//! separate elements: the ring is drawn above sibling content, outside the
//! handle's bounds. The parent scope owns one [`CircleSliderMetadata`] and
//! lends it to both. Handles mutate it through `&mut` while handling input;
//! the overlay reads it through `&` when laying out.
//!
//! The metadata holds:
//! - at most one [`CircleSession`], the live rotation of the handle that
//!   owns the current drag,
//! - the id of the handle currently pressed, if any,
//! - every handle's latest on-screen midpoint, so the overlay can follow
//!   whichever handle is active.

use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;

use crate::Angle;

/// The live state of a circular drag, exclusive to one handle.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleSession<K> {
    /// Id of the handle that started the drag.
    pub owner: K,
    /// Pointer direction at drag start.
    pub start_angle: Angle,
    /// Rotation accumulated since the start. May exceed a full turn.
    pub current_angle: Angle,
}

impl<K> CircleSession<K> {
    /// Absolute direction of the pointer, `start_angle + current_angle`.
    #[must_use]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.current_angle
    }
}

/// Shared state threaded between circular slider handles and the overlay.
#[derive(Clone, Debug)]
pub struct CircleSliderMetadata<K> {
    session: Option<CircleSession<K>>,
    press_id: Option<K>,
    anchor_points: HashMap<K, Point>,
}

impl<K> Default for CircleSliderMetadata<K> {
    fn default() -> Self {
        Self {
            session: None,
            press_id: None,
            anchor_points: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> CircleSliderMetadata<K> {
    /// Metadata with no drag, no press and no anchors.
    #[must_use]
    pub fn inactive() -> Self {
        Self::default()
    }

    /// Metadata showing `id` as pressed. Useful for previews.
    #[must_use]
    pub fn press(id: K) -> Self {
        Self {
            press_id: Some(id),
            ..Self::default()
        }
    }

    /// The live drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&CircleSession<K>> {
        self.session.as_ref()
    }

    /// Returns `true` while some handle owns a drag session.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns `true` if `id` owns the live session.
    #[must_use]
    pub fn is_owned_by(&self, id: &K) -> bool {
        self.session.as_ref().is_some_and(|s| &s.owner == id)
    }

    /// Id of the pressed handle, if any.
    #[must_use]
    pub fn press_id(&self) -> Option<&K> {
        self.press_id.as_ref()
    }

    /// Returns `true` while some handle is pressed.
    #[must_use]
    pub fn is_pressing(&self) -> bool {
        self.press_id.is_some()
    }

    /// The handle the overlay should follow: the session owner, else the
    /// pressed handle.
    #[must_use]
    pub fn active_id(&self) -> Option<&K> {
        self.session
            .as_ref()
            .map(|s| &s.owner)
            .or(self.press_id.as_ref())
    }

    /// Midpoint of the active handle, if it has published one.
    #[must_use]
    pub fn anchor_point(&self) -> Option<Point> {
        self.active_id().and_then(|id| self.anchor_of(id))
    }

    /// Latest published midpoint of `id`.
    #[must_use]
    pub fn anchor_of(&self, id: &K) -> Option<Point> {
        self.anchor_points.get(id).copied()
    }

    /// Records the on-screen midpoint of handle `id`.
    pub fn publish_anchor(&mut self, id: K, point: Point) {
        self.anchor_points.insert(id, point);
    }

    /// Forgets the midpoint of a handle that left the layout.
    pub fn remove_anchor(&mut self, id: &K) -> Option<Point> {
        self.anchor_points.remove(id)
    }

    pub(crate) fn session_mut(&mut self) -> Option<&mut CircleSession<K>> {
        self.session.as_mut()
    }

    pub(crate) fn begin_session(&mut self, owner: K, start_angle: Angle) {
        self.session = Some(CircleSession {
            owner,
            start_angle,
            current_angle: Angle::ZERO,
        });
    }

    pub(crate) fn take_session(&mut self) -> Option<CircleSession<K>> {
        self.session.take()
    }

    /// Claims the press slot for `id` unless another handle holds it.
    pub(crate) fn claim_press(&mut self, id: &K) -> bool {
        if self.press_id.is_some() {
            return false;
        }
        self.press_id = Some(id.clone());
        true
    }

    /// Releases the press slot if `id` holds it.
    pub(crate) fn release_press(&mut self, id: &K) -> bool {
        if self.press_id.as_ref() == Some(id) {
            self.press_id = None;
            true
        } else {
            false
        }
    }
}
