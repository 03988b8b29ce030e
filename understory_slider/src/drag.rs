// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: pointer movement, handle selection, and taps.
//!
//! ## Lifecycle
//!
//! The host forwards every pointer move of a press as [`Slider::drag_changed`] and the
//! release as [`Slider::drag_ended`]. Both take a [`DragSample`] whose translation and
//! elapsed time are measured from the press.
//!
//! - Idle: samples inside the movement slop are ignored. For linear layouts, a first sample
//!   that moves more across the slider than along it is ignored too, so a slider inside a
//!   perpendicular scroll container lets those gestures through.
//! - Dragging: the first accepted sample picks the handle nearest the press location and
//!   records that handle's pixel anchor. Every sample then maps `anchor + translation` to a
//!   candidate and commits it, rounded when [`SNAP_TO_STEPS`](SliderOptions::SNAP_TO_STEPS)
//!   is set.
//! - Release: a quick press-release on a single-value track is a tap and jumps to the
//!   release location. Otherwise a session that did not snap rounds once. The session ends
//!   either way.
//!
//! `drag_ended` does not apply the release sample's movement; hosts send the last move
//! through `drag_changed` first.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use understory_slider::drag::DragSample;
//! use understory_slider::{Progress, Slider, SliderConfig};
//!
//! let mut slider = Slider::new(SliderConfig::default(), Progress::single(0.5), None).unwrap();
//! slider.set_size(Size::new(100.0, 20.0));
//!
//! let sample = DragSample::new(Point::new(75.0, 10.0), Vec2::new(25.0, 0.0), Duration::from_millis(80));
//! slider.drag_changed(sample);
//! assert_eq!(slider.progress().progress(), 0.75);
//!
//! slider.drag_ended(sample);
//! assert!(!slider.is_dragging());
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::haptics::{Commit, Haptics};
use crate::mapper::{
    Direction, grid_location_to_progress, grid_progress_to_location, is_off_axis,
    location_to_progress, progress_to_location,
};
use crate::polar::PolarPoint;
use crate::progress::Progress;
use crate::slider::Slider;
use crate::types::{SliderLayout, SliderOptions};

/// Press-release sequences shorter than this can be taps.
pub const TAP_DURATION: Duration = Duration::from_millis(250);

/// One pointer sample of a press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSample {
    /// Pointer location within the control.
    pub location: Point,
    /// Movement since the press.
    pub translation: Vec2,
    /// Time since the press.
    pub elapsed: Duration,
}

impl DragSample {
    /// Create a sample.
    pub const fn new(location: Point, translation: Vec2, elapsed: Duration) -> Self {
        Self {
            location,
            translation,
            elapsed,
        }
    }

    /// Where the press started.
    pub fn press_location(&self) -> Point {
        self.location - self.translation
    }
}

/// State of an accepted drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct DragSession {
    /// Pixel location of the moved handle when the drag was accepted.
    pub(crate) anchor: Point,
    /// Index of the moved value.
    pub(crate) index: usize,
}

impl<H: Haptics> Slider<H> {
    /// Feed one pointer move. Returns the commit, or `None` when the sample was ignored.
    pub fn drag_changed(&mut self, sample: DragSample) -> Option<Commit> {
        let session = match self.drag {
            Some(session) => session,
            None => {
                let session = self.begin_drag(&sample)?;
                self.drag = Some(session);
                session
            }
        };
        let location = session.anchor + sample.translation;
        let round = self.snapping();
        Some(match self.config.layout {
            SliderLayout::Grid => {
                self.commit_point(grid_location_to_progress(location, self.size), round)
            }
            SliderLayout::CircularGrid => {
                self.commit_polar(PolarPoint::from_location(location, self.size), round)
            }
            _ => {
                let (axis, direction) = self.linear_mapping()?;
                let raw = direction.apply(location_to_progress(location, self.size, axis));
                self.commit_linear(session.index, raw, round)
            }
        })
    }

    /// Feed the release. Returns the tap or final rounding commit, if any.
    pub fn drag_ended(&mut self, sample: DragSample) -> Option<Commit> {
        let session = self.drag.take();
        if self.is_tap(&sample) {
            let (axis, direction) = self.linear_mapping()?;
            let raw = direction.apply(location_to_progress(sample.location, self.size, axis));
            log::debug!("tap at {:?}", sample.location);
            return Some(self.commit_linear(0, raw, true));
        }
        let session = session?;
        log::debug!("drag ended on index {}", session.index);
        if self.snapping() {
            None
        } else {
            self.commit_rounded(session.index)
        }
    }

    fn begin_drag(&self, sample: &DragSample) -> Option<DragSession> {
        let slop = self.config.has(SliderOptions::DRAG_GESTURE_MINIMUM_DISTANCE)
            && !self.config.has(SliderOptions::TAP_TO_SLIDE);
        if slop && sample.translation.hypot() < self.config.minimum_drag_distance {
            return None;
        }
        let session = match self.config.layout {
            SliderLayout::Grid => DragSession {
                anchor: grid_progress_to_location(self.progress.point_progress(), self.size),
                index: 0,
            },
            SliderLayout::CircularGrid => DragSession {
                anchor: self.progress.polar_point().to_location(self.size),
                index: 0,
            },
            _ => {
                let (axis, direction) = self.linear_mapping()?;
                if is_off_axis(sample.translation, axis) {
                    log::debug!("off-axis drag ignored");
                    return None;
                }
                let index = self.press_index(sample.press_location(), direction);
                let anchor = direction.apply(self.progress.value(index));
                DragSession {
                    anchor: progress_to_location(anchor, self.size, axis),
                    index,
                }
            }
        };
        log::debug!("drag started on index {}", session.index);
        Some(session)
    }

    /// Index of the handle nearest `location` on a linear layout.
    pub(crate) fn press_index(&self, location: Point, direction: Direction) -> usize {
        if !self.progress.has_handles() {
            return 0;
        }
        let Some(key) = self.linear_key() else {
            return 0;
        };
        let candidate = direction.apply(location_to_progress(location, self.size, key.axis));
        self.progress.nearest_index(candidate)
    }

    fn is_tap(&self, sample: &DragSample) -> bool {
        let layout = self.config.layout;
        let travel = sample.translation.hypot();
        let short = travel == 0.0 || travel < self.config.minimum_drag_distance;
        self.config.has(SliderOptions::TAP_TO_SLIDE)
            && sample.elapsed < TAP_DURATION
            && short
            && layout.is_linear()
            && !layout.is_scrollable()
            && matches!(self.progress, Progress::Single(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haptics::{HapticKind, RecordingHaptics};
    use crate::step::Step;
    use crate::types::{HorizontalAlignment, SliderConfig, ValueRange, VerticalAlignment};
    use kurbo::{Rect, Size};

    const EPS: f64 = 1e-9;
    const TRACK: Size = Size::new(100.0, 20.0);

    fn near(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn slider(
        config: SliderConfig,
        progress: Progress,
        step: Option<Step>,
        size: Size,
    ) -> Slider<RecordingHaptics> {
        let mut s = Slider::with_haptics(config, progress, step, RecordingHaptics::new()).unwrap();
        s.set_size(size);
        s
    }

    /// Drag by `dx` from the handle of a horizontal single-value slider.
    fn drag_by(s: &mut Slider<RecordingHaptics>, press: Point, dx: f64) -> Option<Commit> {
        let t = Vec2::new(dx, 0.0);
        s.drag_changed(DragSample::new(press + t, t, ms(300)))
    }

    #[test]
    fn drag_clamps_at_the_ends() {
        let mut s = slider(SliderConfig::default(), Progress::single(0.5), None, TRACK);
        let c = drag_by(&mut s, Point::new(50.0, 10.0), 80.0).unwrap();
        assert!(c.changed());
        assert_eq!(s.progress().progress(), 1.0);
        assert_eq!(s.haptics().pulses, [HapticKind::Boundary]);
        assert!(s.is_dragging());
        // Saturated: further movement is silent.
        let c = drag_by(&mut s, Point::new(50.0, 10.0), 90.0).unwrap();
        assert!(!c.changed());
        assert_eq!(s.haptics().pulses.len(), 1);
    }

    #[test]
    fn loop_drag_wraps_around() {
        let config = SliderConfig::default().with_options(SliderOptions::LOOP_VALUES);
        let mut s = slider(config.clone(), Progress::single(0.5), None, TRACK);
        drag_by(&mut s, Point::new(50.0, 10.0), 70.0);
        assert!(near(s.progress().progress(), 0.2));

        let mut s = slider(config, Progress::single(0.5), None, TRACK);
        drag_by(&mut s, Point::new(50.0, 10.0), -80.0);
        assert!(near(s.progress().progress(), 0.7));
    }

    #[test]
    fn slop_and_off_axis_samples_are_ignored() {
        let mut s = slider(SliderConfig::default(), Progress::single(0.5), None, TRACK);
        assert_eq!(drag_by(&mut s, Point::new(50.0, 10.0), 0.5), None);
        assert!(!s.is_dragging());

        let t = Vec2::new(1.0, 8.0);
        let sample = DragSample::new(Point::new(51.0, 18.0), t, ms(20));
        assert_eq!(s.drag_changed(sample), None);
        assert!(!s.is_dragging());
        assert_eq!(s.progress().progress(), 0.5);
    }

    #[test]
    fn drag_moves_the_nearest_handle() {
        let mut s = slider(
            SliderConfig::default(),
            Progress::multi([0.2, 0.5, 0.8]),
            None,
            TRACK,
        );
        // Pressed at 0.55: index 1 is 0.05 away, index 2 is 0.25 away.
        drag_by(&mut s, Point::new(55.0, 10.0), 5.0);
        assert_eq!(s.active_index(), Some(1));
        assert!(near(s.progress().value(1), 0.55));
        assert_eq!(s.progress().value(0), 0.2);
        assert_eq!(s.progress().value(2), 0.8);
    }

    #[test]
    fn coincident_range_handles_split_with_the_drag() {
        let mut s = slider(SliderConfig::default(), Progress::range(0.5, 0.5), None, TRACK);
        drag_by(&mut s, Point::new(50.0, 10.0), 20.0);
        assert_eq!(s.active_index(), Some(1));
        assert!(near(s.progress().upper_progress(), 0.7));
        assert_eq!(s.progress().lower_progress(), 0.5);
    }

    #[test]
    fn tap_commits_the_release_location() {
        let config = SliderConfig::default().with_options(SliderOptions::TAP_TO_SLIDE);
        let mut s = slider(config.clone(), Progress::single(0.2), None, TRACK);
        let release = DragSample::new(Point::new(70.0, 10.0), Vec2::new(0.5, 0.0), ms(100));
        let c = s.drag_ended(release).unwrap();
        assert!(c.changed());
        assert!(near(s.progress().progress(), 0.7));

        // Too slow for a tap and never dragged: nothing to do.
        let mut s = slider(config.clone(), Progress::single(0.2), None, TRACK);
        let slow = DragSample::new(Point::new(70.0, 10.0), Vec2::ZERO, ms(400));
        assert_eq!(s.drag_ended(slow), None);
        assert_eq!(s.progress().progress(), 0.2);

        // Scrollable layouts do not tap.
        let scrollable = SliderConfig {
            layout: SliderLayout::ScrollableHorizontal,
            ..config
        };
        let mut s = slider(scrollable, Progress::single(0.2), None, TRACK);
        assert_eq!(s.drag_ended(release), None);
    }

    #[test]
    fn tap_rounds_to_the_step() {
        let config = SliderConfig::default().with_options(SliderOptions::TAP_TO_SLIDE);
        let step = Step::linear(ValueRange::new(0.0, 10.0), 1.0);
        let mut s = slider(config, Progress::single(0.0), step, TRACK);
        s.drag_ended(DragSample::new(Point::new(67.0, 10.0), Vec2::ZERO, ms(50)));
        assert!(near(s.progress().progress(), 0.7));
    }

    #[test]
    fn release_rounds_unsnapped_drags() {
        let step = Step::linear(ValueRange::new(0.0, 10.0), 1.0);
        let mut s = slider(SliderConfig::default(), Progress::single(0.5), step, TRACK);
        drag_by(&mut s, Point::new(50.0, 10.0), 13.0);
        assert!(near(s.progress().progress(), 0.63));
        let release = DragSample::new(Point::new(63.0, 10.0), Vec2::new(13.0, 0.0), ms(600));
        let c = s.drag_ended(release).unwrap();
        assert!(c.changed());
        assert!(near(s.progress().progress(), 0.6));
        assert!(!s.is_dragging());
    }

    #[test]
    fn snapped_drags_round_every_sample() {
        let config = SliderConfig::default().with_options(SliderOptions::SNAP_TO_STEPS);
        let step = Step::linear(ValueRange::new(0.0, 10.0), 1.0);
        let mut s = slider(config, Progress::single(0.5), step, TRACK);
        drag_by(&mut s, Point::new(50.0, 10.0), 13.0);
        assert!(near(s.progress().progress(), 0.6));
        let release = DragSample::new(Point::new(63.0, 10.0), Vec2::new(13.0, 0.0), ms(600));
        assert_eq!(s.drag_ended(release), None);
    }

    #[test]
    fn grid_rounds_at_gesture_end() {
        let step = Step::point(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(10.0, 10.0));
        let mut s = slider(
            SliderConfig::new(SliderLayout::Grid),
            Progress::grid(Point::ZERO),
            step,
            Size::new(100.0, 100.0),
        );
        // The origin handle sits at the bottom-left corner; move it to (47, 53).
        let t = Vec2::new(47.0, -53.0);
        let sample = DragSample::new(Point::new(47.0, 47.0), t, ms(400));
        s.drag_changed(sample);
        let raw = s.progress().point_progress();
        assert!(near(raw.x, 0.47) && near(raw.y, 0.53));

        s.drag_ended(sample);
        let done = s.progress().point_progress();
        assert!(near(done.x, 0.5) && near(done.y, 0.5));
    }

    #[test]
    fn polar_cardinal_angles_fire() {
        let size = Size::new(100.0, 100.0);
        let config = SliderConfig::new(SliderLayout::CircularGrid)
            .with_options(SliderOptions::SNAP_TO_STEPS | SliderOptions::HAPTIC_FEEDBACK);
        let drag_to = |angle: f64| {
            let step = Step::polar(PolarPoint::new(1.0, 0.01));
            let start = PolarPoint::new(45.0, 0.5);
            let mut s = slider(config.clone(), Progress::polar(start), step, size);
            let target = PolarPoint::new(angle, 0.5).to_location(size);
            let t = target - start.to_location(size);
            s.drag_changed(DragSample::new(target, t, ms(300)));
            s
        };

        let s = drag_to(90.0);
        assert_eq!(s.progress().polar_point(), PolarPoint::new(90.0, 0.5));
        assert_eq!(s.haptics().pulses, [HapticKind::Cardinal]);

        let s = drag_to(91.0);
        assert!(near(s.progress().polar_point().angle_degrees, 91.0));
        assert!(s.haptics().pulses.is_empty());
    }

    #[test]
    fn polar_drag_through_center_parks() {
        let size = Size::new(100.0, 100.0);
        let start = PolarPoint::new(0.0, 0.5);
        let mut s = slider(
            SliderConfig::new(SliderLayout::CircularGrid),
            Progress::polar(start),
            None,
            size,
        );
        // Anchor is (75, 50); move to one pixel from the center.
        let sample = DragSample::new(Point::new(51.0, 50.0), Vec2::new(-24.0, 0.0), ms(300));
        s.drag_changed(sample);
        assert_eq!(s.progress().polar_point(), PolarPoint::ZERO);
        assert_eq!(s.haptics().pulses, [HapticKind::Boundary]);
    }

    #[test]
    fn trailing_alignment_reverses_drag() {
        let leading = SliderConfig::default();
        let trailing = SliderConfig::new(SliderLayout::Horizontal(HorizontalAlignment::Trailing));
        for (dx, lead_delta) in [(10.0, 0.1), (-10.0, -0.1)] {
            let mut l = slider(leading.clone(), Progress::single(0.5), None, TRACK);
            drag_by(&mut l, Point::new(50.0, 10.0), dx);
            let mut t = slider(trailing.clone(), Progress::single(0.5), None, TRACK);
            drag_by(&mut t, Point::new(50.0, 10.0), dx);
            assert!(near(l.progress().progress() - 0.5, lead_delta), "leading dx={dx}");
            assert!(near(t.progress().progress() - 0.5, -lead_delta), "trailing dx={dx}");
        }
    }

    #[test]
    fn vertical_drag_grows_upward() {
        let config = SliderConfig::new(SliderLayout::Vertical(VerticalAlignment::Bottom));
        let mut s = slider(config, Progress::single(0.5), None, Size::new(20.0, 100.0));
        let t = Vec2::new(0.0, -10.0);
        s.drag_changed(DragSample::new(Point::new(10.0, 40.0), t, ms(300)));
        assert!(near(s.progress().progress(), 0.6));
    }

    #[test]
    fn right_to_left_mirrors_drag() {
        let config = SliderConfig::default()
            .with_layout_direction(crate::types::LayoutDirection::RightToLeft);
        let mut s = slider(config, Progress::single(0.25), None, TRACK);
        // Progress 0.25 sits at x = 75 when mirrored; moving left increases it.
        drag_by(&mut s, Point::new(75.0, 10.0), -25.0);
        assert!(near(s.progress().progress(), 0.5));
    }
}
