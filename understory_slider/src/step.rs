// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantization descriptors for 1D values, 2D points, and polar points.
//!
//! A [`Step`] is built once from the slider's bounds and a caller-supplied step size.
//! Construction fails closed: the infallible constructors return `None` (no quantization)
//! for non-positive steps and degenerate bounds, and the `try_*` variants report why.

use kurbo::{Rect, Vec2};

use crate::math::{abs, floor, round};
use crate::polar::PolarPoint;
use crate::types::ValueRange;

/// Distance from 0 or 1 within which a rounded progress snaps onto the boundary.
const BOUNDARY_SNAP: f64 = 1e-9;

/// Why a [`Step`] could not be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// The step size is zero or negative.
    #[error("step size must be positive")]
    NonPositiveStep,
    /// The bounds have zero (or negative) width on some axis.
    #[error("bounds must span a positive range on every axis")]
    DegenerateBounds,
    /// A step or bound is NaN or infinite.
    #[error("step and bounds must be finite")]
    NonFinite,
}

/// Linear quantization.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearStep {
    /// Step in bound units.
    pub value_step: f64,
    /// Step as a fraction of the full range.
    pub progress_step: f64,
    /// Whole steps that fit in the range.
    pub step_count: u32,
}

/// Per-axis quantization for 2D points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointStep {
    /// Step in bound units, per axis.
    pub value_step: Vec2,
    /// Step as a fraction of each axis range.
    pub progress_step: Vec2,
    /// Whole steps per axis as `(x, y)`.
    pub step_count: (u32, u32),
}

/// Angle and radius quantization for polar points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolarStep {
    /// Step as `(angle in degrees, normalized radius)`.
    pub value_step: PolarPoint,
    /// Step as `(fraction of 360°, normalized radius)`.
    pub progress_step: PolarPoint,
    /// Whole steps as `(angle steps, radius steps)`.
    pub step_count: (u32, u32),
}

/// A quantization descriptor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Step {
    /// For single, range, and multi values.
    Linear(LinearStep),
    /// For grid values.
    Point(PointStep),
    /// For circular grid values.
    Polar(PolarStep),
}

impl Step {
    /// Linear step over `bounds`, or `None` when no quantization applies.
    pub fn linear(bounds: ValueRange, value_step: f64) -> Option<Self> {
        Self::try_linear(bounds, value_step).ok()
    }

    /// Linear step over `bounds`.
    pub fn try_linear(bounds: ValueRange, value_step: f64) -> Result<Self, StepError> {
        Ok(Self::Linear(axis_step(bounds, value_step)?))
    }

    /// Point step over the `x0..x1` / `y0..y1` bounds, or `None` when no quantization applies.
    pub fn point(bounds: Rect, value_step: Vec2) -> Option<Self> {
        Self::try_point(bounds, value_step).ok()
    }

    /// Point step over the `x0..x1` / `y0..y1` bounds.
    pub fn try_point(bounds: Rect, value_step: Vec2) -> Result<Self, StepError> {
        let x = axis_step(ValueRange::new(bounds.x0, bounds.x1), value_step.x)?;
        let y = axis_step(ValueRange::new(bounds.y0, bounds.y1), value_step.y)?;
        Ok(Self::Point(PointStep {
            value_step,
            progress_step: Vec2::new(x.progress_step, y.progress_step),
            step_count: (x.step_count, y.step_count),
        }))
    }

    /// Polar step from an angle step in degrees and a radius step, or `None` when no
    /// quantization applies.
    pub fn polar(value_step: PolarPoint) -> Option<Self> {
        Self::try_polar(value_step).ok()
    }

    /// Polar step from an angle step in degrees and a radius step.
    ///
    /// The angle spans 360° and the radius spans the unit range.
    pub fn try_polar(value_step: PolarPoint) -> Result<Self, StepError> {
        let angle = axis_step(ValueRange::new(0.0, 360.0), value_step.angle_degrees)?;
        let radius = axis_step(ValueRange::UNIT, value_step.normalized_radius)?;
        Ok(Self::Polar(PolarStep {
            value_step,
            progress_step: PolarPoint::new(angle.progress_step, radius.progress_step),
            step_count: (angle.step_count, radius.step_count),
        }))
    }

    /// The linear descriptor, if this is one.
    pub fn as_linear(&self) -> Option<&LinearStep> {
        match self {
            Self::Linear(s) => Some(s),
            _ => None,
        }
    }

    /// The point descriptor, if this is one.
    pub fn as_point(&self) -> Option<&PointStep> {
        match self {
            Self::Point(s) => Some(s),
            _ => None,
        }
    }

    /// The polar descriptor, if this is one.
    pub fn as_polar(&self) -> Option<&PolarStep> {
        match self {
            Self::Polar(s) => Some(s),
            _ => None,
        }
    }
}

impl LinearStep {
    /// Round `progress` to this step, clamped to [0,1].
    pub fn round(&self, progress: f64) -> f64 {
        round_unit(progress, self.progress_step)
    }
}

impl PointStep {
    /// Round both axes of `progress` to their steps, each clamped to [0,1].
    pub fn round(&self, progress: Vec2) -> Vec2 {
        Vec2::new(
            round_unit(progress.x, self.progress_step.x),
            round_unit(progress.y, self.progress_step.y),
        )
    }
}

fn axis_step(bounds: ValueRange, value_step: f64) -> Result<LinearStep, StepError> {
    if !value_step.is_finite() || !bounds.lower.is_finite() || !bounds.upper.is_finite() {
        return Err(StepError::NonFinite);
    }
    if value_step <= 0.0 {
        return Err(StepError::NonPositiveStep);
    }
    if bounds.is_degenerate() {
        return Err(StepError::DegenerateBounds);
    }
    let span = bounds.span();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "Step counts are non-negative and saturate on overflow."
    )]
    let step_count = floor(span / value_step) as u32;
    Ok(LinearStep {
        value_step,
        progress_step: value_step / span,
        step_count,
    })
}

/// Round a progress value to `step` and clamp it to [0,1], snapping float noise
/// at the ends onto the exact boundary.
pub(crate) fn round_unit(progress: f64, step: f64) -> f64 {
    let rounded = if step > 0.0 {
        round(progress / step) * step
    } else {
        progress
    };
    snap_unit(rounded)
}

/// Clamp to [0,1] and snap values within [`BOUNDARY_SNAP`] of an end onto it.
pub(crate) fn snap_unit(value: f64) -> f64 {
    let clamped = crate::math::clamp_unit(value);
    if abs(clamped) < BOUNDARY_SNAP {
        0.0
    } else if abs(1.0 - clamped) < BOUNDARY_SNAP {
        1.0
    } else {
        clamped
    }
}
