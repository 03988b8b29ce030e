// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider basics.
//!
//! Drag a horizontal slider, release to round onto a step, then tap to jump.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_basics`

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use understory_slider::{
    DragSample, Progress, RecordingHaptics, Slider, SliderConfig, SliderOptions, Step, ValueRange,
};

fn main() {
    let bounds = ValueRange::new(0.0, 10.0);
    let config = SliderConfig::default().with_options(
        SliderOptions::DRAG_GESTURE_MINIMUM_DISTANCE
            | SliderOptions::TAP_TO_SLIDE
            | SliderOptions::HAPTIC_FEEDBACK,
    );
    let mut slider = Slider::with_haptics(
        config,
        Progress::single(bounds.progress_of(5.0)),
        Step::linear(bounds, 1.0),
        RecordingHaptics::new(),
    )
    .unwrap();
    slider.set_size(Size::new(200.0, 24.0));

    // Press on the handle at x = 100 and drag 33 px to the right.
    let press = Point::new(100.0, 12.0);
    for dx in [4.0, 18.0, 33.0] {
        let t = Vec2::new(dx, 0.0);
        let commit = slider.drag_changed(DragSample::new(press + t, t, Duration::from_millis(200)));
        println!(
            "dx={dx:>4}: value={:.3} commit={commit:?}",
            bounds.value_of(slider.progress().progress())
        );
    }
    let t = Vec2::new(33.0, 0.0);
    let end = slider.drag_ended(DragSample::new(press + t, t, Duration::from_millis(400)));
    let value = bounds.value_of(slider.progress().progress());
    println!("released: value={value:.3} commit={end:?}");
    assert!(
        (value - 7.0).abs() < 1e-9,
        "release should round 6.65 onto the step at 7"
    );

    // A quick tap near the start jumps there.
    let tap = DragSample::new(Point::new(4.0, 12.0), Vec2::ZERO, Duration::from_millis(60));
    slider.drag_ended(tap);
    let value = bounds.value_of(slider.progress().progress());
    println!("tapped: value={value:.3}");
    assert_eq!(value, 0.0, "tap should land on the lower bound");
    println!("haptic pulses: {:?}", slider.haptics().pulses);
    assert_eq!(
        slider.haptics().pulses.len(),
        1,
        "only the boundary landing should pulse"
    );
}
