// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Vec2;
use understory_slider::snap::find_snap_index;
use understory_slider::{
    CircleSliderHandle, CircleSliderMetadata, IncrementalSlider, SliderRange, TrackGeometry,
};

fn bench_circle_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/circle_sweep");

    // One drag event per sample; a full turn is split into `samples` deltas.
    for samples in [64_usize, 512, 4_096] {
        let translations: Vec<Vec2> = (0..=samples)
            .map(|i| Vec2::from_angle(i as f64 / samples as f64 * core::f64::consts::TAU) * 80.0)
            .collect();
        group.throughput(Throughput::Elements(translations.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("on_drag_changed", samples),
            &translations,
            |b, translations| {
                b.iter_batched(
                    || {
                        (
                            CircleSliderMetadata::<u32>::inactive(),
                            CircleSliderHandle::new(0_u32),
                        )
                    },
                    |(mut metadata, mut handle)| {
                        let mut value = 0.0;
                        for &t in translations {
                            black_box(handle.on_drag_changed(&mut metadata, &mut value, t));
                        }
                        black_box(handle.on_drag_ended(&mut metadata));
                        black_box(value);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_incremental_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/incremental_sweep");
    let track = TrackGeometry::new(430.0, 30.0);
    let pointers: Vec<f64> = (0..=400).map(|x| 15.0 + f64::from(x)).collect();
    group.throughput(Throughput::Elements(pointers.len() as u64));

    for increment in [None, Some(0.25), Some(0.01)] {
        let label = increment.map_or_else(|| "none".to_owned(), |i: f64| i.to_string());
        group.bench_with_input(
            BenchmarkId::new("on_drag_changed", label),
            &pointers,
            |b, pointers| {
                b.iter_batched(
                    || {
                        let slider = IncrementalSlider::new(SliderRange::new(-1.0, 1.0), 0.0);
                        match increment {
                            Some(i) => slider.with_increment(i * 2.0),
                            None => slider,
                        }
                    },
                    |mut slider| {
                        let mut value = 0.0;
                        for &x in pointers {
                            black_box(slider.on_drag_changed(&mut value, x, track));
                        }
                        black_box(slider.on_drag_end(value));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_snap_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("slider/snap");
    let values: Vec<f64> = (0..1_000).map(|i| f64::from(i) / 999.0).collect();
    group.throughput(Throughput::Elements(values.len() as u64));

    for count in [4_usize, 100, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("find_snap_index", count), &values, |b, values| {
            b.iter(|| {
                for &v in values {
                    black_box(find_snap_index(black_box(v), count));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circle_sweep,
    bench_incremental_sweep,
    bench_snap_search
);
criterion_main!(benches);
