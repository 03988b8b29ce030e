// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_slider::{
    DragSample, PolarPoint, Progress, Slider, SliderConfig, SliderLayout, SliderOptions, Step,
    ValueRange, WheelEvent,
};

const TICKS: usize = 256;

fn translations(n: usize, span: f64) -> Vec<Vec2> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Vec2::new(span * (t - 0.5), span * 0.05 * (t * 7.0).sin())
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_tick");
    group.throughput(Throughput::Elements(TICKS as u64));
    let size = Size::new(400.0, 24.0);
    let moves = translations(TICKS, 400.0);

    for (name, options, progress) in [
        ("single", SliderOptions::default(), Progress::single(0.5)),
        (
            "single_snapped",
            SliderOptions::default() | SliderOptions::SNAP_TO_STEPS,
            Progress::single(0.5),
        ),
        (
            "multi_8",
            SliderOptions::default(),
            Progress::multi((0..8).map(|i| i as f64 / 8.0)),
        ),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let config = SliderConfig::default().with_options(options);
                    let step = Step::linear(ValueRange::new(0.0, 100.0), 1.0);
                    let mut s = Slider::new(config, progress.clone(), step).unwrap();
                    s.set_size(size);
                    s
                },
                |mut s| {
                    let press = Point::new(200.0, 12.0);
                    for &t in &moves {
                        black_box(s.drag_changed(DragSample::new(
                            press + t,
                            t,
                            Duration::from_millis(300),
                        )));
                    }
                    black_box(s.progress().progress())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("wheel_tick");
    group.throughput(Throughput::Elements(TICKS as u64));
    let deltas = translations(TICKS, 40.0);

    for (name, layout, progress) in [
        ("linear", SliderLayout::default(), Progress::single(0.5)),
        ("grid", SliderLayout::Grid, Progress::grid(Point::new(0.5, 0.5))),
    ] {
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let mut s =
                        Slider::new(SliderConfig::new(layout), progress.clone(), None).unwrap();
                    s.set_size(Size::new(200.0, 200.0));
                    s.set_hovering(true);
                    s
                },
                |mut s| {
                    for &d in &deltas {
                        black_box(s.wheel(WheelEvent::new(Point::new(100.0, 100.0), d)));
                    }
                    black_box(s.wheel(WheelEvent::ended(Point::new(100.0, 100.0))))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_polar_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_mapping");
    group.throughput(Throughput::Elements(TICKS as u64));
    let size = Size::new(300.0, 300.0);
    let locations: Vec<Point> = (0..TICKS)
        .map(|i| {
            let angle = i as f64 * 360.0 / TICKS as f64;
            PolarPoint::new(angle, 0.8).to_location(size)
        })
        .collect();

    group.bench_function("from_location", |b| {
        b.iter(|| {
            for &p in &locations {
                black_box(PolarPoint::from_location(black_box(p), size));
            }
        });
    });
    group.bench_function("drag_snapped", |b| {
        b.iter_batched(
            || {
                let config = SliderConfig::new(SliderLayout::CircularGrid)
                    .with_options(SliderOptions::SNAP_TO_STEPS);
                let start = Progress::polar(PolarPoint::new(0.0, 0.8));
                let step = Step::polar(PolarPoint::new(5.0, 0.1));
                let mut s = Slider::new(config, start, step).unwrap();
                s.set_size(size);
                s
            },
            |mut s| {
                let anchor = PolarPoint::new(0.0, 0.8).to_location(size);
                for &p in &locations {
                    black_box(s.drag_changed(DragSample::new(
                        p,
                        p - anchor,
                        Duration::from_millis(300),
                    )));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_drag, bench_wheel, bench_polar_mapping);
criterion_main!(benches);
