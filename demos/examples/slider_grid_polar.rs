// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid and circular grid sliders.
//!
//! A grid drag rounds both axes at release; a circular drag pulses when it lands on a
//! cardinal angle.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_grid_polar`

use core::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use understory_slider::{
    DragSample, HapticKind, PolarPoint, Progress, RecordingHaptics, Slider, SliderConfig,
    SliderLayout, SliderOptions, Step, ValueRange,
};

fn main() {
    let area = Size::new(100.0, 100.0);

    // Grid over (0,0)-(100,100) in steps of 10; the handle starts at the bottom-left corner.
    let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut grid = Slider::new(
        SliderConfig::new(SliderLayout::Grid),
        Progress::grid(Point::ZERO),
        Step::point(bounds, Vec2::new(10.0, 10.0)),
    )
    .unwrap();
    grid.set_size(area);
    let sample = DragSample::new(
        Point::new(47.0, 47.0),
        Vec2::new(47.0, -53.0),
        Duration::from_millis(400),
    );
    grid.drag_changed(sample);
    grid.drag_ended(sample);
    let p = grid.progress().point_progress();
    let (x, y) = (
        ValueRange::horizontal(bounds).value_of(p.x),
        ValueRange::vertical(bounds).value_of(p.y),
    );
    println!("grid value: ({x:.3}, {y:.3})");
    assert!(
        (x - 50.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9,
        "(47, 53) rounds to (50, 50)"
    );

    // Circular grid snapping to whole degrees.
    let config = SliderConfig::new(SliderLayout::CircularGrid)
        .with_options(SliderOptions::SNAP_TO_STEPS | SliderOptions::HAPTIC_FEEDBACK);
    let start = PolarPoint::new(45.0, 0.5);
    let mut dial = Slider::with_haptics(
        config,
        Progress::polar(start),
        Step::polar(PolarPoint::new(1.0, 0.01)),
        RecordingHaptics::new(),
    )
    .unwrap();
    dial.set_size(area);
    let anchor = start.to_location(area);
    for angle in [60.0, 91.0, 90.0] {
        let target = PolarPoint::new(angle, 0.5).to_location(area);
        dial.drag_changed(DragSample::new(
            target,
            target - anchor,
            Duration::from_millis(300),
        ));
        println!(
            "dial at {:?}, pulses so far: {:?}",
            dial.progress().polar_point(),
            dial.haptics().pulses
        );
    }
    assert_eq!(
        dial.haptics().pulses,
        [HapticKind::Cardinal],
        "only the 90 degree landing pulses"
    );
}
