// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range and multi-value sliders.
//!
//! Shows nearest-handle selection for drags and wheel input, and that a range stays ordered.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_range`

use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use understory_slider::{DragSample, Progress, Slider, SliderConfig, WheelEvent};

fn main() {
    let track = Size::new(100.0, 20.0);

    // Three independent handles; a press at 55% picks the middle one.
    let mut multi =
        Slider::new(SliderConfig::default(), Progress::multi([0.2, 0.5, 0.8]), None).unwrap();
    multi.set_size(track);
    let t = Vec2::new(10.0, 0.0);
    multi.drag_changed(DragSample::new(
        Point::new(55.0, 10.0) + t,
        t,
        Duration::from_millis(120),
    ));
    println!(
        "multi: active={:?} values={:?}",
        multi.active_index(),
        multi.progress().values()
    );
    assert_eq!(multi.active_index(), Some(1), "middle handle is nearest");

    // A range cannot cross: dragging the lower handle past the upper one stops at it.
    let mut range = Slider::new(SliderConfig::default(), Progress::range(0.2, 0.6), None).unwrap();
    range.set_size(track);
    let t = Vec2::new(70.0, 0.0);
    range.drag_changed(DragSample::new(
        Point::new(20.0, 10.0) + t,
        t,
        Duration::from_millis(300),
    ));
    println!(
        "range: lower={} upper={}",
        range.progress().lower_progress(),
        range.progress().upper_progress()
    );
    assert_eq!(range.progress().lower_progress(), 0.6, "lower stops at upper");
    range.drag_ended(DragSample::new(
        Point::new(90.0, 10.0),
        t,
        Duration::from_millis(320),
    ));

    // Wheel input moves the handle under the pointer while hovered.
    range.set_hovering(true);
    range.wheel(WheelEvent::new(Point::new(65.0, 10.0), Vec2::new(20.0, 0.0)));
    range.wheel(WheelEvent::ended(Point::new(65.0, 10.0)));
    println!("after wheel: {:?}", range.progress().values());
    assert!(
        (range.progress().upper_progress() - 0.8).abs() < 1e-9,
        "wheel should move the upper handle by 20%"
    );
    assert!(!range.is_wheel_scrolling(), "terminal event ends the session");
}
