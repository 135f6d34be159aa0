// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `IncrementalSlider` drag, snap and reset flows.

use understory_slider::{
    HandleIndicator, IncrementalSlider, ResetTarget, SliderEvent, SliderObserver, SliderRange,
    TrackGeometry,
};

// Usable width 200, so pointer x = 15 + 200 * normalized.
const TRACK: TrackGeometry = TrackGeometry::new(230.0, 30.0);

fn pointer_at(normalized: f64) -> f64 {
    15.0 + 200.0 * normalized
}

#[derive(Default)]
struct Recorder {
    will: usize,
    did: Vec<(f64, f64)>,
    pulses: usize,
}

impl SliderObserver for Recorder {
    fn will_change(&mut self) {
        self.will += 1;
    }

    fn did_change(&mut self, old: f64, new: f64) {
        self.did.push((old, new));
    }

    fn pulse(&mut self) {
        self.pulses += 1;
    }
}

#[test]
fn drag_snaps_then_follows_pointer() {
    let mut slider = IncrementalSlider::new(SliderRange::new(0.0, 1.0), 0.5).with_increment(0.25);
    let mut recorder = Recorder::default();
    let mut value = 0.5;

    SliderEvent::deliver_all(slider.on_drag_start(value), &mut recorder);

    SliderEvent::deliver_all(
        slider.on_drag_changed(&mut value, pointer_at(0.26), TRACK),
        &mut recorder,
    );
    assert_eq!(value, 0.25);
    assert_eq!(slider.relative_value(value), 0.25);

    SliderEvent::deliver_all(
        slider.on_drag_changed(&mut value, pointer_at(0.40), TRACK),
        &mut recorder,
    );
    assert!((value - 0.40).abs() < 1e-12);

    SliderEvent::deliver_all(slider.on_drag_end(value), &mut recorder);

    assert_eq!(recorder.will, 1);
    assert_eq!(recorder.pulses, 1);
    assert_eq!(recorder.did.len(), 1);
    let (old, new) = recorder.did[0];
    assert_eq!(old, 0.5);
    assert!((new - 0.40).abs() < 1e-12);
}

#[test]
fn did_change_is_reported_in_host_units() {
    let mut slider =
        IncrementalSlider::new(SliderRange::new(100.0, 300.0), 200.0).with_increment(50.0);
    let mut value = 200.0;

    slider.on_drag_start(value);
    slider.on_drag_changed(&mut value, pointer_at(0.40), TRACK);
    assert!((value - 180.0).abs() < 1e-9);
    slider.on_drag_changed(&mut value, pointer_at(0.74), TRACK);
    assert_eq!(value, 250.0);

    let events = slider.on_drag_end(value);
    assert_eq!(
        events.as_slice(),
        &[SliderEvent::DidChange {
            old: 200.0,
            new: 250.0
        }]
    );
}

#[test]
fn leaving_and_reentering_a_window_pulses_again() {
    let mut slider = IncrementalSlider::relative(0.0).with_increment(0.5);
    let mut value = 0.0;
    let mut recorder = Recorder::default();

    for x in [0.49, 0.51, 0.6, 0.5, 0.99, 1.0] {
        SliderEvent::deliver_all(
            slider.on_drag_changed(&mut value, pointer_at(x), TRACK),
            &mut recorder,
        );
    }

    // 0.49 snaps to 1, 0.51 stays there, 0.6 leaves, 0.5 re-enters,
    // 0.99 snaps to 2 and 1.0 stays there.
    assert_eq!(recorder.pulses, 3);
    assert_eq!(slider.at_increment_index(), Some(2));
    assert_eq!(value, 1.0);
}

#[test]
fn pointer_beyond_track_clamps_but_stored_values_may_overshoot() {
    let mut slider = IncrementalSlider::relative(0.5);
    let mut value = 1.7;

    assert_eq!(slider.indicator(value), HandleIndicator::AboveRange);
    assert_eq!(slider.handle_offset(value, TRACK), 200.0);

    slider.on_drag_changed(&mut value, 10_000.0, TRACK);
    assert_eq!(value, 1.0);
    slider.on_drag_changed(&mut value, -10_000.0, TRACK);
    assert_eq!(value, 0.0);

    let events = slider.on_drag_end(value);
    assert_eq!(
        events.as_slice(),
        &[SliderEvent::DidChange { old: 1.7, new: 0.0 }]
    );
}

#[test]
fn degenerate_range_never_divides_by_zero() {
    let slider = IncrementalSlider::new(SliderRange::new(5.0, 5.0), 5.0).with_increment(0.1);
    for value in [5.0, -1.0, 0.0, 1e300, f64::MIN] {
        assert_eq!(slider.relative_value(value), 0.0);
    }
    assert_eq!(slider.relative_default(), 0.0);
    assert_eq!(slider.relative_zero(), 0.0);
    assert_eq!(slider.increment_count(), 1);
}

#[test]
fn reset_fires_exactly_one_edit_pair() {
    let mut slider = IncrementalSlider::new(SliderRange::new(0.0, 1.0), 0.5);
    let mut value = 0.9;
    let mut recorder = Recorder::default();

    SliderEvent::deliver_all(
        slider.on_double_activate(&mut value, ResetTarget::Default),
        &mut recorder,
    );

    assert_eq!(value, 0.5);
    assert_eq!(recorder.will, 1);
    assert_eq!(recorder.did, [(0.9, 0.5)]);
    assert_eq!(recorder.pulses, 1);
    assert!(!slider.is_dragging());
    assert_eq!(slider.indicator(value), HandleIndicator::AtDefault);
}

#[test]
fn reset_to_zero_uses_host_zero() {
    let mut slider = IncrementalSlider::new(SliderRange::new(-2.0, 6.0), 4.0);
    let mut value = 5.0;
    slider.on_double_activate(&mut value, ResetTarget::Zero);
    assert_eq!(value, 0.0);
    assert_eq!(slider.relative_zero(), 0.25);
}

#[test]
fn custom_relative_zero_moves_fill_anchor() {
    let slider = IncrementalSlider::relative(0.0).with_relative_zero(0.5);
    assert_eq!(slider.fill_span(0.25, TRACK), 50.0..100.0);
    assert_eq!(slider.fill_span(0.75, TRACK), 100.0..150.0);

    let mut slider = slider;
    let mut value = 0.9;
    slider.on_double_activate(&mut value, ResetTarget::Zero);
    assert_eq!(value, 0.5);
}
