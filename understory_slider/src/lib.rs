// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless interaction and progress engine for slider controls.
//!
//! Understory Slider turns pointer drags, taps, and scroll wheel input into normalized
//! progress values. It owns no rendering: the host draws from [`Slider::progress`] and maps
//! haptic pulses onto its platform.
//!
//! - Linear tracks with one value, an ordered range, or any number of independent handles.
//! - 2D grids and circular (angle + radius) pickers.
//! - Optional quantization, continuous or deferred to the end of a gesture.
//! - Looping single values, tap-to-slide, movement slop, and off-axis rejection.
//! - Right-to-left mirroring, alignments, and scrollable scales.
//!
//! ## API overview
//!
//! - [`Slider`]: the engine. Feed it [`DragSample`]s and [`WheelEvent`]s; read [`Progress`].
//! - [`SliderConfig`]: layout, direction, [`SliderOptions`], and the movement slop.
//! - [`Progress`]: normalized values, one variant per [`ProgressMode`].
//! - [`Step`]: quantization built from bounds and a step size.
//! - [`Haptics`]: the capability the host injects to play pulses.
//!   [`NoHaptics`] and [`RecordingHaptics`] cover headless use.
//! - [`mapper`]: the pure location ↔ progress conversions and the sign tables.
//!
//! Every write reports whether anything changed as a [`Commit`]. Writing the current value
//! again is silent and fires no haptics.
//!
//! ## Coordinates
//!
//! Locations are in the control's local space with y growing downward, as in [`kurbo`].
//! Vertical and grid progress grows upward. Set the control's size with [`Slider::set_size`]
//! after layout.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use understory_slider::{
//!     DragSample, Progress, RecordingHaptics, Slider, SliderConfig, SliderOptions, Step,
//!     ValueRange,
//! };
//!
//! let config = SliderConfig::default()
//!     .with_options(SliderOptions::TAP_TO_SLIDE | SliderOptions::HAPTIC_FEEDBACK);
//! let step = Step::linear(ValueRange::new(0.0, 100.0), 25.0);
//! let mut slider =
//!     Slider::with_haptics(config, Progress::single(0.0), step, RecordingHaptics::new()).unwrap();
//! slider.set_size(Size::new(200.0, 24.0));
//!
//! // A quick tap near the end jumps there, rounded to the nearest step.
//! let tap = DragSample::new(Point::new(190.0, 12.0), Vec2::ZERO, Duration::from_millis(60));
//! let commit = slider.drag_ended(tap).unwrap();
//! assert!(commit.changed());
//! assert_eq!(slider.progress().progress(), 1.0);
//! assert_eq!(slider.haptics().pulses.len(), 1);
//!
//! // Bound values come back through the same range.
//! assert_eq!(ValueRange::new(0.0, 100.0).value_of(slider.progress().progress()), 100.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default) or the `libm`
//! feature for float math.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod math;

pub mod drag;
pub mod haptics;
pub mod mapper;
pub mod polar;
pub mod progress;
pub mod slider;
pub mod step;
pub mod types;
pub mod wheel;

pub use drag::{DragSample, TAP_DURATION};
pub use haptics::{Commit, HapticKind, Haptics, NoHaptics, RecordingHaptics};
pub use polar::PolarPoint;
pub use progress::{Progress, ProgressError, ProgressMode};
pub use slider::{Slider, SliderError};
pub use step::{LinearStep, PointStep, PolarStep, Step, StepError};
pub use types::{
    Axis, GesturePriority, HorizontalAlignment, LayoutDirection, SliderConfig, SliderLayout,
    SliderOptions, ValueRange, VerticalAlignment,
};
pub use wheel::WheelEvent;
