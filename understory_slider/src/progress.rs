// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canonical value state of a slider.
//!
//! ## Overview
//!
//! [`Progress`] holds one or more values normalized to [0,1], tagged by the shape of value
//! the slider manages. Each shape carries exactly the storage it needs, so a grid always
//! has two axes and a range always has an ordered pair.
//!
//! ## Mutation
//!
//! All writes go through the `update*` methods. They clamp into [0,1] and report whether
//! anything actually changed: writing the current value again is silent, which lets callers
//! skip downstream work and haptics for no-op commits.
//!
//! ## Defensive reads
//!
//! Reads never panic. Out-of-range indices and accessors that do not apply to the current
//! mode (for example [`Progress::upper_progress`] on a single value) return `0`.

use alloc::vec::Vec;

use kurbo::Point;

use crate::math::{abs, clamp_unit};
use crate::polar::PolarPoint;
use crate::step::PointStep;

/// The shape of value a [`Progress`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProgressMode {
    /// One value.
    Single,
    /// An ordered `lower <= upper` pair.
    Range,
    /// Any number of independent values.
    Multi,
    /// A 2D point as `[x, y]`.
    Grid,
    /// A polar point as `[angle / 360, radius]`.
    Polar,
}

/// Why values could not be turned into a [`Progress`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    /// No values were supplied.
    #[error("at least one value is required")]
    Empty,
    /// The number of values does not fit the mode.
    #[error("{mode:?} progress takes {expected} values, found {found}")]
    WrongArity {
        /// Requested mode.
        mode: ProgressMode,
        /// Values the mode takes.
        expected: usize,
        /// Values supplied.
        found: usize,
    },
}

/// Normalized slider values.
#[derive(Clone, Debug, PartialEq)]
pub enum Progress {
    /// One value.
    Single(f64),
    /// `[lower, upper]` with `lower <= upper`.
    Range([f64; 2]),
    /// Independent values in caller order.
    Multi(Vec<f64>),
    /// `[x, y]`; `y` grows upward.
    Grid([f64; 2]),
    /// `[angle / 360, radius]`.
    Polar([f64; 2]),
}

impl Default for Progress {
    fn default() -> Self {
        Self::Single(0.0)
    }
}

impl Progress {
    /// A single value.
    pub fn single(progress: f64) -> Self {
        Self::Single(clamp_unit(progress))
    }

    /// A range; the pair is sorted after clamping.
    pub fn range(lower: f64, upper: f64) -> Self {
        let (a, b) = (clamp_unit(lower), clamp_unit(upper));
        Self::Range(if a <= b { [a, b] } else { [b, a] })
    }

    /// Independent values.
    pub fn multi(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Multi(values.into_iter().map(clamp_unit).collect())
    }

    /// A 2D point, each axis clamped.
    pub fn grid(point: Point) -> Self {
        Self::Grid([clamp_unit(point.x), clamp_unit(point.y)])
    }

    /// A polar point, normalized the way [`Progress::update_polar_point`] normalizes.
    pub fn polar(point: PolarPoint) -> Self {
        let mut p = Self::Polar([0.0, 0.0]);
        let _ = p.update_polar_point(point);
        p
    }

    /// Build progress of `mode` from raw values, checking arity.
    pub fn try_from_values(mode: ProgressMode, values: &[f64]) -> Result<Self, ProgressError> {
        let arity = |expected: usize| {
            if values.len() == expected {
                Ok(())
            } else if values.is_empty() {
                Err(ProgressError::Empty)
            } else {
                Err(ProgressError::WrongArity {
                    mode,
                    expected,
                    found: values.len(),
                })
            }
        };
        Ok(match mode {
            ProgressMode::Single => {
                arity(1)?;
                Self::single(values[0])
            }
            ProgressMode::Range => {
                arity(2)?;
                Self::range(values[0], values[1])
            }
            ProgressMode::Multi => {
                if values.is_empty() {
                    return Err(ProgressError::Empty);
                }
                Self::multi(values.iter().copied())
            }
            ProgressMode::Grid => {
                arity(2)?;
                Self::grid(Point::new(values[0], values[1]))
            }
            ProgressMode::Polar => {
                arity(2)?;
                Self::polar(PolarPoint::new(values[0] * 360.0, values[1]))
            }
        })
    }

    /// The mode tag.
    pub fn mode(&self) -> ProgressMode {
        match self {
            Self::Single(_) => ProgressMode::Single,
            Self::Range(_) => ProgressMode::Range,
            Self::Multi(_) => ProgressMode::Multi,
            Self::Grid(_) => ProgressMode::Grid,
            Self::Polar(_) => ProgressMode::Polar,
        }
    }

    /// True for range and multi progress, where a gesture first picks a handle.
    pub fn has_handles(&self) -> bool {
        matches!(self, Self::Range(_) | Self::Multi(_))
    }

    /// All stored values in order.
    pub fn values(&self) -> &[f64] {
        match self {
            Self::Single(v) => core::slice::from_ref(v),
            Self::Range(v) | Self::Grid(v) | Self::Polar(v) => v,
            Self::Multi(v) => v,
        }
    }

    fn values_mut(&mut self) -> &mut [f64] {
        match self {
            Self::Single(v) => core::slice::from_mut(v),
            Self::Range(v) | Self::Grid(v) | Self::Polar(v) => v,
            Self::Multi(v) => v,
        }
    }

    /// Value at `index`, or `0` when out of range.
    pub fn value(&self, index: usize) -> f64 {
        self.values().get(index).copied().unwrap_or(0.0)
    }

    /// The first value.
    pub fn progress(&self) -> f64 {
        self.value(0)
    }

    /// Lower bound of a range, otherwise `0`.
    pub fn lower_progress(&self) -> f64 {
        match self {
            Self::Range([lower, _]) => *lower,
            _ => 0.0,
        }
    }

    /// Upper bound of a range, otherwise `0`.
    pub fn upper_progress(&self) -> f64 {
        match self {
            Self::Range([_, upper]) => *upper,
            _ => 0.0,
        }
    }

    /// Grid point (`y` grows upward), otherwise the origin.
    pub fn point_progress(&self) -> Point {
        match self {
            Self::Grid([x, y]) => Point::new(*x, *y),
            _ => Point::ZERO,
        }
    }

    /// Polar point in degrees, otherwise [`PolarPoint::ZERO`].
    pub fn polar_point(&self) -> PolarPoint {
        match self {
            Self::Polar([angle, radius]) => PolarPoint::new(*angle * 360.0, *radius),
            _ => PolarPoint::ZERO,
        }
    }

    /// Write `value` at `index`, clamped to [0,1]. Returns whether the stored value changed.
    ///
    /// In range mode the pair stays ordered: the lower value cannot pass the upper one and
    /// vice versa. Out-of-range indices are ignored.
    pub fn update(&mut self, value: f64, index: usize) -> bool {
        let mut value = clamp_unit(value);
        if let Self::Range([lower, upper]) = self {
            match index {
                0 => value = value.min(*upper),
                1 => value = value.max(*lower),
                _ => {}
            }
        }
        match self.values_mut().get_mut(index) {
            Some(slot) if *slot != value => {
                *slot = value;
                true
            }
            _ => false,
        }
    }

    /// Write the lower bound of a range.
    pub fn update_lower_progress(&mut self, value: f64) -> bool {
        matches!(self, Self::Range(_)) && self.update(value, 0)
    }

    /// Write the upper bound of a range.
    pub fn update_upper_progress(&mut self, value: f64) -> bool {
        matches!(self, Self::Range(_)) && self.update(value, 1)
    }

    /// Write both grid axes. Returns `(x_changed, y_changed)`.
    pub fn update_point(&mut self, point: Point) -> (bool, bool) {
        if !matches!(self, Self::Grid(_)) {
            return (false, false);
        }
        (self.update(point.x, 0), self.update(point.y, 1))
    }

    /// Round both grid axes to `step` and write them. Returns `(x_changed, y_changed)`.
    pub fn update_point_rounded(&mut self, step: &PointStep) -> (bool, bool) {
        let rounded = step.round(self.point_progress().to_vec2());
        self.update_point(rounded.to_point())
    }

    /// Write a polar point. Returns `(angle_changed, radius_changed)`.
    ///
    /// The radius is clamped to [0,1] first. A zero radius forces the angle to `0`;
    /// otherwise the angle is clamped to [0,360].
    pub fn update_polar_point(&mut self, point: PolarPoint) -> (bool, bool) {
        if !matches!(self, Self::Polar(_)) {
            return (false, false);
        }
        let radius = clamp_unit(point.normalized_radius);
        let angle = if radius == 0.0 || point.angle_degrees.is_nan() {
            0.0
        } else {
            point.angle_degrees.clamp(0.0, 360.0)
        };
        (self.update(angle / 360.0, 0), self.update(radius, 1))
    }

    /// Index of the stored value nearest to `candidate`.
    ///
    /// Equal distances resolve toward the candidate: a tied value at or below the candidate
    /// yields to a later index, one above it keeps the earlier index. Coincident range handles
    /// therefore split in the direction of travel. Returns `0` for single-valued progress.
    pub fn nearest_index(&self, candidate: f64) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for (i, &v) in self.values().iter().enumerate() {
            let d = abs(v - candidate);
            if d < best_distance || (d == best_distance && v <= candidate) {
                best = i;
                best_distance = d;
            }
        }
        best
    }

    /// Copy values from `other` when it has the same mode and arity. Returns whether any
    /// stored value changed.
    ///
    /// The incoming values replace the stored ones as a whole, so a range may move past its
    /// current pair in one call.
    pub fn assign(&mut self, other: &Self) -> bool {
        if self.mode() != other.mode() || self.values().len() != other.values().len() {
            return false;
        }
        let ordered;
        let incoming = match *other {
            Self::Range([a, b]) => {
                ordered = [a.min(b), a.max(b)];
                &ordered[..]
            }
            _ => other.values(),
        };
        let mut changed = false;
        for (slot, &v) in self.values_mut().iter_mut().zip(incoming) {
            let v = clamp_unit(v);
            if *slot != v {
                *slot = v;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn update_reports_change_once() {
        let mut p = Progress::single(0.2);
        assert!(p.update(0.4, 0));
        assert!(!p.update(0.4, 0));
        assert_eq!(p.progress(), 0.4);
    }

    #[test]
    fn update_clamps() {
        let mut p = Progress::multi([0.5, 0.5]);
        assert!(p.update(1.7, 1));
        assert!(p.update(-0.2, 0));
        assert_eq!(p.values(), &[0.0, 1.0]);
        // Clamped writes of an already-saturated value are silent.
        assert!(!p.update(3.0, 1));
    }

    #[test]
    fn out_of_range_reads_and_writes_are_defined() {
        let mut p = Progress::single(0.3);
        assert_eq!(p.upper_progress(), 0.0);
        assert_eq!(p.lower_progress(), 0.0);
        assert_eq!(p.value(5), 0.0);
        assert!(!p.update(0.9, 5));
        assert!(!p.update_upper_progress(0.9));
        assert_eq!(p.point_progress(), Point::ZERO);
        assert_eq!(p.polar_point(), PolarPoint::ZERO);
    }

    #[test]
    fn range_stays_ordered() {
        let mut p = Progress::range(0.8, 0.2);
        assert_eq!(p.values(), &[0.2, 0.8]);
        assert!(p.update_lower_progress(0.9));
        assert_eq!(p.lower_progress(), 0.8);
        // The upper bound cannot drop below the lower one, so this write is a no-op.
        assert!(!p.update_upper_progress(0.1));
        assert!(p.update_upper_progress(0.95));
        assert!(p.update_upper_progress(0.5));
        assert_eq!(p.values(), &[0.8, 0.8]);
    }

    #[test]
    fn nearest_index_picks_minimum_distance() {
        let p = Progress::multi([0.2, 0.5, 0.8]);
        assert_eq!(p.nearest_index(0.55), 1);
        assert_eq!(p.nearest_index(0.0), 0);
        assert_eq!(p.nearest_index(0.95), 2);
    }

    #[test]
    fn nearest_index_ties_follow_the_candidate() {
        let coincident = Progress::range(0.5, 0.5);
        assert_eq!(coincident.nearest_index(0.7), 1);
        assert_eq!(coincident.nearest_index(0.3), 0);
        let split = Progress::multi([0.25, 0.75]);
        assert_eq!(split.nearest_index(0.5), 0);
    }

    #[test]
    fn polar_zero_radius_forces_zero_angle() {
        let mut p = Progress::polar(PolarPoint::new(45.0, 0.5));
        assert_eq!(p.update_polar_point(PolarPoint::new(120.0, -0.3)), (true, true));
        assert_eq!(p.polar_point(), PolarPoint::ZERO);
    }

    #[test]
    fn polar_reports_axes_independently() {
        let mut p = Progress::polar(PolarPoint::new(45.0, 0.5));
        assert_eq!(p.update_polar_point(PolarPoint::new(90.0, 0.5)), (true, false));
        assert_eq!(p.update_polar_point(PolarPoint::new(90.0, 1.4)), (false, true));
        assert_eq!(p.polar_point(), PolarPoint::new(90.0, 1.0));
        assert_eq!(p.update_polar_point(PolarPoint::new(400.0, 1.0)), (true, false));
        assert_eq!(p.polar_point().angle_degrees, 360.0);
    }

    #[test]
    fn grid_rounding_writes_both_axes() {
        use crate::step::Step;
        use kurbo::{Rect, Vec2};
        let step = Step::point(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(10.0, 10.0))
            .and_then(|s| s.as_point().copied())
            .unwrap();
        let mut p = Progress::grid(Point::new(0.47, 0.53));
        assert_eq!(p.update_point_rounded(&step), (true, true));
        let pt = p.point_progress();
        assert!((pt.x - 0.5).abs() < 1e-12 && (pt.y - 0.5).abs() < 1e-12);
        assert_eq!(p.update_point_rounded(&step), (false, false));
    }

    #[test]
    fn try_from_values_checks_arity() {
        assert_eq!(
            Progress::try_from_values(ProgressMode::Grid, &[0.1]),
            Err(ProgressError::WrongArity {
                mode: ProgressMode::Grid,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Progress::try_from_values(ProgressMode::Multi, &[]),
            Err(ProgressError::Empty)
        );
        assert_eq!(
            Progress::try_from_values(ProgressMode::Polar, &[0.25, 0.5]),
            Ok(Progress::polar(PolarPoint::new(90.0, 0.5)))
        );
        assert_eq!(
            Progress::try_from_values(ProgressMode::Multi, &[0.1, 0.2, 0.3]),
            Ok(Progress::Multi(vec![0.1, 0.2, 0.3]))
        );
    }

    #[test]
    fn assign_requires_matching_shape() {
        let mut p = Progress::range(0.1, 0.9);
        assert!(!p.assign(&Progress::single(0.5)));
        assert!(p.assign(&Progress::range(0.2, 0.9)));
        assert!(!p.assign(&Progress::range(0.2, 0.9)));
    }

    #[test]
    fn assign_moves_a_range_past_its_current_pair() {
        let mut p = Progress::range(0.1, 0.2);
        assert!(p.assign(&Progress::range(0.95, 0.99)));
        assert_eq!(p.values(), &[0.95, 0.99]);
        assert!(p.assign(&Progress::range(0.05, 0.1)));
        assert_eq!(p.values(), &[0.05, 0.1]);
        // Hand-built unordered pairs are stored ordered.
        assert!(p.assign(&Progress::Range([0.7, 0.3])));
        assert_eq!(p.values(), &[0.3, 0.7]);
    }
}
