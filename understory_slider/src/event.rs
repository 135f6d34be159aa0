// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications produced by slider controllers.
//!
//! Controllers never call back into the host. Each operation writes the bound
//! value in place and returns the notifications it produced, in order. Hosts
//! either match on [`SliderEvent`] directly or route the list through a
//! [`SliderObserver`].
//!
//! ```
//! use understory_slider::{SliderEvent, SliderObserver};
//!
//! #[derive(Default)]
//! struct History {
//!     edits: Vec<(f64, f64)>,
//! }
//!
//! impl SliderObserver for History {
//!     fn did_change(&mut self, old: f64, new: f64) {
//!         self.edits.push((old, new));
//!     }
//! }
//!
//! let mut history = History::default();
//! SliderEvent::deliver_all(
//!     [SliderEvent::WillChange, SliderEvent::DidChange { old: 0.0, new: 0.5 }],
//!     &mut history,
//! );
//! assert_eq!(history.edits, vec![(0.0, 0.5)]);
//! ```

use smallvec::SmallVec;

/// A notification for the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SliderEvent {
    /// An edit is starting. Emitted once per drag or activation.
    WillChange,
    /// An edit finished, in host units.
    DidChange {
        /// Value captured when the edit started.
        old: f64,
        /// Value when the edit finished. For a circular drag this is the
        /// change the rotation produced, not the resulting value.
        new: f64,
    },
    /// Request a short haptic pulse. Fire and forget.
    Feedback,
}

/// Notifications produced by one controller operation.
pub type SliderEvents = SmallVec<[SliderEvent; 3]>;

impl SliderEvent {
    /// Routes this event to the matching observer method.
    pub fn deliver<O: SliderObserver + ?Sized>(self, observer: &mut O) {
        match self {
            Self::WillChange => observer.will_change(),
            Self::DidChange { old, new } => observer.did_change(old, new),
            Self::Feedback => observer.pulse(),
        }
    }

    /// Routes every event, in order.
    pub fn deliver_all<O, I>(events: I, observer: &mut O)
    where
        O: SliderObserver + ?Sized,
        I: IntoIterator<Item = Self>,
    {
        for event in events {
            event.deliver(observer);
        }
    }
}

/// Host callbacks for slider notifications. All methods default to no-ops.
pub trait SliderObserver {
    /// An edit is starting.
    fn will_change(&mut self) {}

    /// An edit finished; values are in host units.
    fn did_change(&mut self, old: f64, new: f64) {
        let _ = (old, new);
    }

    /// Haptic or other tactile feedback. Must not block.
    fn pulse(&mut self) {}
}

impl SliderObserver for () {}
