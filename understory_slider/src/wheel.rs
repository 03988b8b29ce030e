// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel sessions: scroll wheel and trackpad input while hovered.
//!
//! Wheel events only apply while the pointer hovers the control (see
//! [`Slider::set_hovering`]) and [`SCROLL_WHEEL`](SliderOptions::SCROLL_WHEEL) is set. The
//! first accepted event opens a session, which [`Slider::is_wheel_scrolling`] reports so the
//! host can emphasize the control.
//!
//! Linear layouts advance the value nearest the wheel location by each event's on-axis delta,
//! scaled by the track length and signed by [`wheel_sign`]. With
//! [`SNAP_TO_STEPS`](SliderOptions::SNAP_TO_STEPS) every event moves exactly one step.
//! Events that move more across the slider than along it are ignored.
//!
//! Grid and circular grid layouts accumulate deltas and treat the sum like a drag
//! translation from the value's location at the start of the session.
//!
//! A terminal event, or leaving hover, ends the session and rounds once when the session did
//! not snap. The terminal event's own delta is not applied.

use kurbo::{Point, Vec2};

use crate::haptics::{Commit, Haptics};
use crate::mapper::{
    axis_length, grid_location_to_progress, grid_progress_to_location, is_off_axis, on_axis,
    wheel_sign,
};
use crate::math::signum0;
use crate::polar::PolarPoint;
use crate::slider::Slider;
use crate::step::Step;
use crate::types::{SliderLayout, SliderOptions};

/// One scroll wheel or trackpad event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelEvent {
    /// Pointer location within the control.
    pub location: Point,
    /// Scroll delta in pixels.
    pub delta: Vec2,
    /// The scroll gesture ended with this event.
    pub is_ended: bool,
}

impl WheelEvent {
    /// A scroll event.
    pub const fn new(location: Point, delta: Vec2) -> Self {
        Self {
            location,
            delta,
            is_ended: false,
        }
    }

    /// The event that ends a scroll gesture.
    pub const fn ended(location: Point) -> Self {
        Self {
            location,
            delta: Vec2::ZERO,
            is_ended: true,
        }
    }
}

/// State of an active wheel session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct WheelSession {
    /// Pixel location of the value when the session started (grid and polar).
    pub(crate) anchor: Point,
    /// Sum of applied deltas (grid and polar).
    pub(crate) accumulated: Vec2,
    /// Index of the moved value.
    pub(crate) index: usize,
}

impl<H: Haptics> Slider<H> {
    /// Feed one wheel event. Returns the commit, or `None` when the event was ignored.
    ///
    /// Events are ignored while a drag session is active.
    pub fn wheel(&mut self, event: WheelEvent) -> Option<Commit> {
        if !self.hovering || !self.config.has(SliderOptions::SCROLL_WHEEL) {
            return None;
        }
        if self.drag.is_some() {
            log::debug!("wheel event ignored during a drag");
            return None;
        }
        if event.is_ended {
            return self.end_wheel();
        }
        match self.config.layout {
            SliderLayout::Grid | SliderLayout::CircularGrid => {
                let mut session = self.wheel.unwrap_or_else(|| self.begin_wheel(0));
                session.accumulated += event.delta;
                self.wheel = Some(session);
                let location = session.anchor + session.accumulated;
                let round = self.snapping();
                Some(if self.config.layout == SliderLayout::Grid {
                    self.commit_point(grid_location_to_progress(location, self.size), round)
                } else {
                    self.commit_polar(PolarPoint::from_location(location, self.size), round)
                })
            }
            _ => self.wheel_linear(event),
        }
    }

    /// Report whether the pointer hovers the control.
    ///
    /// Leaving ends an active wheel session, rounding like a terminal event.
    pub fn set_hovering(&mut self, hovering: bool) -> Option<Commit> {
        self.hovering = hovering;
        if hovering { None } else { self.end_wheel() }
    }

    fn wheel_linear(&mut self, event: WheelEvent) -> Option<Commit> {
        let key = self.linear_key()?;
        if is_off_axis(event.delta, key.axis) {
            return None;
        }
        let session = match self.wheel {
            Some(session) => session,
            None => {
                let (_, direction) = self.linear_mapping()?;
                let index = self.press_index(event.location, direction);
                let session = self.begin_wheel(index);
                self.wheel = Some(session);
                session
            }
        };
        let delta = on_axis(event.delta, key.axis);
        let sign = wheel_sign(key);
        let current = self.progress.value(session.index);
        let step = self.step.as_ref().and_then(Step::as_linear);
        let snapped = self.snapping();
        let increment = match step {
            Some(step) if snapped => sign * signum0(delta) * step.progress_step,
            _ => {
                let length = axis_length(self.size, key.axis);
                if length > 0.0 {
                    sign * delta / length
                } else {
                    0.0
                }
            }
        };
        Some(self.commit_linear(session.index, current + increment, snapped))
    }

    fn begin_wheel(&self, index: usize) -> WheelSession {
        let anchor = match self.config.layout {
            SliderLayout::Grid => {
                grid_progress_to_location(self.progress.point_progress(), self.size)
            }
            SliderLayout::CircularGrid => self.progress.polar_point().to_location(self.size),
            _ => Point::ZERO,
        };
        log::debug!("wheel session started on index {index}");
        WheelSession {
            anchor,
            accumulated: Vec2::ZERO,
            index,
        }
    }

    /// End an active wheel session. Returns the rounding commit, if any.
    pub fn end_wheel(&mut self) -> Option<Commit> {
        let session = self.wheel.take()?;
        log::debug!("wheel session ended on index {}", session.index);
        if self.snapping() {
            None
        } else {
            self.commit_rounded(session.index)
        }
    }
}
