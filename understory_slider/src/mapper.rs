// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate mapping between pixel locations and progress.
//!
//! ## Overview
//!
//! The 1D mapper is pure and alignment-free: horizontally progress is `x / width`, vertically
//! it is `1 - y / height` so that it grows upward. Alignment, scrolling, and right-to-left
//! adjustments are applied around the mapper through two lookup tables:
//!
//! - [`drag_direction`]: whether pointer-driven progress runs with the mapper
//!   ([`Direction::Forward`]) or against it ([`Direction::Reversed`]). Used for drags, taps,
//!   and handle anchors.
//! - [`wheel_sign`]: the multiplier applied to the on-axis wheel delta.
//!
//! Both tables are keyed by [`LinearKey`], which normalizes range and multi-value layouts to
//! the leading/top anchor before lookup. Every combination is a separate match arm so each
//! can be tested on its own.
//!
//! Grid locations map each axis independently with the same alignment-free convention,
//! clamped per axis. Polar locations are handled by [`PolarPoint`](crate::PolarPoint).

use kurbo::{Point, Size, Vec2};

use crate::math::{abs, clamp_unit};
use crate::types::{Axis, HorizontalAlignment, LayoutDirection, SliderLayout, VerticalAlignment};

/// Map a location to progress along `axis`.
///
/// The result is not clamped. A zero-length axis yields `0`.
pub fn location_to_progress(location: Point, size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal if size.width > 0.0 => location.x / size.width,
        Axis::Vertical if size.height > 0.0 => 1.0 - location.y / size.height,
        _ => 0.0,
    }
}

/// Pixel location of `progress` along `axis`, centered on the cross axis.
pub fn progress_to_location(progress: f64, size: Size, axis: Axis) -> Point {
    match axis {
        Axis::Horizontal => Point::new(progress * size.width, size.height / 2.0),
        Axis::Vertical => Point::new(size.width / 2.0, (1.0 - progress) * size.height),
    }
}

/// Map a location to grid progress: `x / width` and `1 - y / height`, each clamped.
///
/// Zero-length axes yield `0` on that axis.
pub fn grid_location_to_progress(location: Point, size: Size) -> Point {
    Point::new(
        clamp_unit(location_to_progress(location, size, Axis::Horizontal)),
        clamp_unit(location_to_progress(location, size, Axis::Vertical)),
    )
}

/// Pixel location of a grid progress point.
pub fn grid_progress_to_location(progress: Point, size: Size) -> Point {
    Point::new(progress.x * size.width, (1.0 - progress.y) * size.height)
}

/// True when `translation` moves more across `axis` than along it.
pub fn is_off_axis(translation: Vec2, axis: Axis) -> bool {
    match axis {
        Axis::Horizontal => abs(translation.y) > abs(translation.x),
        Axis::Vertical => abs(translation.x) > abs(translation.y),
    }
}

/// The component of `v` along `axis`.
pub fn on_axis(v: Vec2, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => v.x,
        Axis::Vertical => v.y,
    }
}

/// Length of the region along `axis`.
pub fn axis_length(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => size.width,
        Axis::Vertical => size.height,
    }
}

/// Whether pointer-driven progress runs with or against the 1D mapper.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Progress follows the mapper.
    Forward,
    /// Progress is `1 -` the mapper's.
    Reversed,
}

impl Direction {
    /// Convert between mapper progress and slider progress (the conversion is its own inverse).
    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Self::Forward => progress,
            Self::Reversed => 1.0 - progress,
        }
    }
}

/// Where a linear layout anchors its progress, with scrolling as its own case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Leading (horizontal) or top (vertical).
    Start,
    /// Center.
    Center,
    /// Trailing (horizontal) or bottom (vertical).
    End,
    /// Scale moves under a fixed handle.
    Scrollable,
}

/// Lookup key for the sign tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinearKey {
    /// Primary axis.
    pub axis: Axis,
    /// Anchor, already normalized for range and multi values.
    pub anchor: Anchor,
    /// Right-to-left layout.
    pub rtl: bool,
}

impl LinearKey {
    /// Build the key for a linear `layout`, or `None` for grid and circular grid.
    ///
    /// With `has_handles` (range or multi values), non-scrollable layouts use the
    /// leading/top anchor regardless of their configured alignment.
    pub fn new(
        layout: SliderLayout,
        direction: LayoutDirection,
        has_handles: bool,
    ) -> Option<Self> {
        let (axis, anchor) = match layout {
            SliderLayout::Horizontal(alignment) => (
                Axis::Horizontal,
                match alignment {
                    HorizontalAlignment::Leading => Anchor::Start,
                    HorizontalAlignment::Center => Anchor::Center,
                    HorizontalAlignment::Trailing => Anchor::End,
                },
            ),
            SliderLayout::Vertical(alignment) => (
                Axis::Vertical,
                match alignment {
                    VerticalAlignment::Top => Anchor::Start,
                    VerticalAlignment::Center => Anchor::Center,
                    VerticalAlignment::Bottom => Anchor::End,
                },
            ),
            SliderLayout::ScrollableHorizontal => (Axis::Horizontal, Anchor::Scrollable),
            SliderLayout::ScrollableVertical => (Axis::Vertical, Anchor::Scrollable),
            SliderLayout::Grid | SliderLayout::CircularGrid => return None,
        };
        let anchor = if has_handles && anchor != Anchor::Scrollable {
            Anchor::Start
        } else {
            anchor
        };
        Some(Self {
            axis,
            anchor,
            rtl: direction.is_rtl(),
        })
    }
}

/// Direction of pointer-driven progress for a linear layout.
pub fn drag_direction(key: LinearKey) -> Direction {
    use Anchor::*;
    use Axis::*;
    use Direction::*;
    match (key.axis, key.anchor, key.rtl) {
        (Horizontal, Start, false) => Forward,
        (Horizontal, Start, true) => Reversed,
        (Horizontal, Center, false) => Forward,
        (Horizontal, Center, true) => Reversed,
        (Horizontal, End, false) => Reversed,
        (Horizontal, End, true) => Forward,
        (Horizontal, Scrollable, false) => Reversed,
        (Horizontal, Scrollable, true) => Forward,
        // Vertical layouts ignore right-to-left.
        (Vertical, Start, _) => Reversed,
        (Vertical, Center, _) => Forward,
        (Vertical, End, _) => Forward,
        (Vertical, Scrollable, _) => Reversed,
    }
}

/// Multiplier for the on-axis wheel delta of a linear layout.
pub fn wheel_sign(key: LinearKey) -> f64 {
    use Anchor::*;
    use Axis::*;
    match (key.axis, key.anchor, key.rtl) {
        (Horizontal, Start, false) => 1.0,
        (Horizontal, Start, true) => -1.0,
        (Horizontal, Center, false) => 1.0,
        (Horizontal, Center, true) => -1.0,
        (Horizontal, End, false) => -1.0,
        (Horizontal, End, true) => 1.0,
        (Horizontal, Scrollable, false) => -1.0,
        (Horizontal, Scrollable, true) => 1.0,
        (Vertical, Start, _) => 1.0,
        (Vertical, Center, _) => 1.0,
        (Vertical, End, _) => -1.0,
        (Vertical, Scrollable, _) => -1.0,
    }
}
