// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polar points: an angle in degrees plus a radius normalized to the region.

use core::f64::consts::PI;

use kurbo::{Point, Size, Vec2};

use crate::math::{atan2, round, sin_cos};
use crate::step::{PolarStep, snap_unit};

/// Pointer distances (in pixels) from the center below which a location parks at the center.
pub const CENTER_DEAD_ZONE: f64 = 2.0;

/// An angle + normalized radius pair.
///
/// Angles are in degrees, measured with `atan2(dy, dx)` in the region's coordinate space
/// (y down), and normalized into `[0, 360)` when derived from a location.
/// A radius of `1` touches the edge of the largest circle inscribed in the region.
///
/// Ordering is lexicographic: angle first, then radius.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct PolarPoint {
    /// Angle in degrees.
    pub angle_degrees: f64,
    /// Radius in units of half the region's shorter side.
    pub normalized_radius: f64,
}

impl PolarPoint {
    /// The center of the region.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a polar point.
    pub const fn new(angle_degrees: f64, normalized_radius: f64) -> Self {
        Self {
            angle_degrees,
            normalized_radius,
        }
    }

    /// Round angle and radius to the given step.
    ///
    /// The radius is clamped to [0,1] after rounding; the angle is left unclamped.
    #[must_use]
    pub fn rounded(self, step: &PolarStep) -> Self {
        let angle = round_to(self.angle_degrees, step.value_step.angle_degrees);
        let radius = round_to(self.normalized_radius, step.value_step.normalized_radius);
        Self::new(angle, snap_unit(radius))
    }

    /// Derive a polar point from a location within a region of `size`.
    ///
    /// The radius is not clamped. Locations closer than [`CENTER_DEAD_ZONE`] pixels to the
    /// center, and regions with no area, yield [`PolarPoint::ZERO`].
    pub fn from_location(location: Point, size: Size) -> Self {
        let half = size.min_side() / 2.0;
        if half.is_nan() || half <= 0.0 {
            return Self::ZERO;
        }
        let v: Vec2 = location - center_of(size);
        let distance = v.hypot();
        if distance < CENTER_DEAD_ZONE {
            return Self::ZERO;
        }
        let mut angle = atan2(v.y, v.x) * 180.0 / PI;
        if angle < 0.0 {
            angle += 360.0;
        }
        Self::new(angle, distance / half)
    }

    /// Pixel location of this point within a region of `size`.
    pub fn to_location(self, size: Size) -> Point {
        let half = size.min_side() / 2.0;
        let (sin, cos) = sin_cos(self.angle_degrees * PI / 180.0);
        center_of(size) + Vec2::new(cos, sin) * (self.normalized_radius * half)
    }
}

fn center_of(size: Size) -> Point {
    Point::new(size.width / 2.0, size.height / 2.0)
}

fn round_to(value: f64, step: f64) -> f64 {
    if step > 0.0 {
        round(value / step) * step
    } else {
        value
    }
}
