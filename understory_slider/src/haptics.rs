// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic trigger policy and the capability the host injects to play pulses.
//!
//! ## Policy
//!
//! [`trigger`] is a pure predicate over a [`Commit`]: it fires only when a value that
//! actually changed lands on a boundary of its mode.
//!
//! - Linear values and grid axes: exactly `0` or `1` ([`HapticKind::Boundary`]).
//! - Polar angles: exactly 0°, 90°, 180°, 270°, or 360° ([`HapticKind::Cardinal`]).
//! - Polar radii: exactly `0` or `1` ([`HapticKind::Boundary`]).
//!
//! Interior values never fire, even when they sit on a step.
//!
//! ## Example
//!
//! ```
//! use understory_slider::haptics::{Commit, HapticKind, trigger};
//!
//! let landed = Commit::Linear { index: 0, changed: true, value: 1.0 };
//! assert_eq!(trigger(&landed), Some(HapticKind::Boundary));
//!
//! // Rewriting the same boundary value is silent.
//! let again = Commit::Linear { index: 0, changed: false, value: 1.0 };
//! assert_eq!(trigger(&again), None);
//! ```

use alloc::vec::Vec;

use kurbo::Point;

use crate::polar::PolarPoint;

/// Angles (degrees) that fire [`HapticKind::Cardinal`].
pub const CARDINAL_ANGLES: [f64; 5] = [0.0, 90.0, 180.0, 270.0, 360.0];

/// Which boundary a pulse confirms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HapticKind {
    /// A value reached 0 or 1.
    Boundary,
    /// A polar angle reached a cardinal direction.
    Cardinal,
}

/// Plays tactile pulses. The host maps this onto its platform haptics API.
pub trait Haptics {
    /// Play one pulse.
    fn pulse(&mut self, kind: HapticKind);
}

impl<H: Haptics + ?Sized> Haptics for &mut H {
    fn pulse(&mut self, kind: HapticKind) {
        (**self).pulse(kind);
    }
}

/// Haptics that do nothing, for headless use.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn pulse(&mut self, _kind: HapticKind) {}
}

/// Haptics that record every pulse, for tests and diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordingHaptics {
    /// Pulses in the order they were played.
    pub pulses: Vec<HapticKind>,
}

impl RecordingHaptics {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded pulses.
    pub fn take(&mut self) -> Vec<HapticKind> {
        core::mem::take(&mut self.pulses)
    }
}

impl Haptics for RecordingHaptics {
    fn pulse(&mut self, kind: HapticKind) {
        self.pulses.push(kind);
    }
}

/// The outcome of one write into [`Progress`](crate::Progress).
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Commit {
    /// A 1D value was written.
    Linear {
        /// Index of the written value.
        index: usize,
        /// Whether the stored value changed.
        changed: bool,
        /// The stored value after the write.
        value: f64,
    },
    /// A grid point was written.
    Point {
        /// `(x_changed, y_changed)`.
        changed: (bool, bool),
        /// The stored point after the write.
        value: Point,
    },
    /// A polar point was written.
    Polar {
        /// `(angle_changed, radius_changed)`.
        changed: (bool, bool),
        /// The stored polar point after the write.
        value: PolarPoint,
    },
}

impl Commit {
    /// Whether any stored value changed.
    pub fn changed(&self) -> bool {
        match *self {
            Self::Linear { changed, .. } => changed,
            Self::Point { changed, .. } | Self::Polar { changed, .. } => changed.0 || changed.1,
        }
    }
}

fn is_unit_boundary(v: f64) -> bool {
    v == 0.0 || v == 1.0
}

/// Decide whether `commit` fires a pulse, and which.
pub fn trigger(commit: &Commit) -> Option<HapticKind> {
    let fired = match *commit {
        Commit::Linear { changed, value, .. } => {
            return (changed && is_unit_boundary(value)).then_some(HapticKind::Boundary);
        }
        Commit::Point { changed, value } => {
            (changed.0 && is_unit_boundary(value.x)) || (changed.1 && is_unit_boundary(value.y))
        }
        Commit::Polar { changed, value } => {
            if changed.0 && CARDINAL_ANGLES.contains(&value.angle_degrees) {
                return Some(HapticKind::Cardinal);
            }
            changed.1 && is_unit_boundary(value.normalized_radius)
        }
    };
    fired.then_some(HapticKind::Boundary)
}
