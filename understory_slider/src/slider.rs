// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine: configuration, progress, quantization, and the commit path.
//!
//! ## Overview
//!
//! A [`Slider`] owns one [`Progress`] for the lifetime of a control. Input arrives through
//! the drag methods (see [`drag`](crate::drag)) and the wheel methods (see
//! [`wheel`](crate::wheel)); both funnel every write through the same commit path, which
//! applies loop wrapping, clamps, records whether anything changed, and asks the
//! [haptic policy](crate::haptics::trigger) whether to pulse.
//!
//! ## External values
//!
//! When the host's bound value changes from outside, call [`Slider::sync_external`]. It is
//! rejected while a drag or wheel session is active and is silent when nothing differs. All
//! mutation goes through `&mut self`, so a host reacting to a commit cannot write back into
//! the slider until that commit has returned.

use core::fmt;

use kurbo::{Point, Size};

use crate::drag::DragSession;
use crate::haptics::{Commit, Haptics, NoHaptics, trigger};
use crate::mapper::{Direction, LinearKey, drag_direction};
use crate::math::wrap_unit;
use crate::polar::PolarPoint;
use crate::progress::{Progress, ProgressMode};
use crate::step::Step;
use crate::types::{Axis, SliderConfig, SliderLayout, SliderOptions};
use crate::wheel::WheelSession;

/// Why a [`Slider`] could not be built or reconfigured.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SliderError {
    /// The progress shape does not fit the layout.
    #[error("{mode:?} progress cannot drive a {layout:?} slider")]
    ModeMismatch {
        /// Configured layout.
        layout: SliderLayout,
        /// Supplied progress mode.
        mode: ProgressMode,
    },
    /// The step shape does not fit the layout.
    #[error("step does not fit a {layout:?} slider")]
    StepMismatch {
        /// Configured layout.
        layout: SliderLayout,
    },
    /// Multi-value progress without any values.
    #[error("progress holds no values")]
    Empty,
}

/// Interaction and progress engine for one slider control.
pub struct Slider<H: Haptics = NoHaptics> {
    pub(crate) config: SliderConfig,
    pub(crate) progress: Progress,
    pub(crate) step: Option<Step>,
    pub(crate) size: Size,
    pub(crate) haptics: H,
    pub(crate) drag: Option<DragSession>,
    pub(crate) wheel: Option<WheelSession>,
    pub(crate) hovering: bool,
}

impl<H: Haptics> fmt::Debug for Slider<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("config", &self.config)
            .field("progress", &self.progress)
            .field("step", &self.step)
            .field("size", &self.size)
            .field("dragging", &self.drag.is_some())
            .field("wheel_scrolling", &self.wheel.is_some())
            .field("hovering", &self.hovering)
            .finish_non_exhaustive()
    }
}

impl Slider<NoHaptics> {
    /// Create a slider without haptics.
    pub fn new(
        config: SliderConfig,
        progress: Progress,
        step: Option<Step>,
    ) -> Result<Self, SliderError> {
        Self::with_haptics(config, progress, step, NoHaptics)
    }
}

impl<H: Haptics> Slider<H> {
    /// Create a slider that plays pulses through `haptics`.
    ///
    /// Linear layouts take single, range, or multi progress with a linear step; grids take
    /// grid progress with a point step; circular grids take polar progress with a polar step.
    pub fn with_haptics(
        config: SliderConfig,
        progress: Progress,
        step: Option<Step>,
        haptics: H,
    ) -> Result<Self, SliderError> {
        check_shapes(config.layout, &progress, step.as_ref())?;
        Ok(Self {
            config,
            progress,
            step,
            size: Size::ZERO,
            haptics,
            drag: None,
            wheel: None,
            hovering: false,
        })
    }

    /// Current progress. Read this on every render.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Quantization, if any.
    pub fn step(&self) -> Option<&Step> {
        self.step.as_ref()
    }

    /// Size of the interactive region.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The injected haptics.
    pub fn haptics(&self) -> &H {
        &self.haptics
    }

    /// The injected haptics, mutably.
    pub fn haptics_mut(&mut self) -> &mut H {
        &mut self.haptics
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether a wheel session is active.
    pub fn is_wheel_scrolling(&self) -> bool {
        self.wheel.is_some()
    }

    /// Whether the pointer hovers the control.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Index of the value the active drag or wheel session moves.
    pub fn active_index(&self) -> Option<usize> {
        self.drag
            .as_ref()
            .map(|d| d.index)
            .or_else(|| self.wheel.as_ref().map(|w| w.index))
    }

    /// Set the size of the interactive region, in the same units as pointer locations.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Replace the configuration. Active sessions end without committing.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), SliderError> {
        check_shapes(config.layout, &self.progress, self.step.as_ref())?;
        self.end_sessions();
        self.config = config;
        Ok(())
    }

    /// Replace the quantization. Active sessions end without committing.
    pub fn set_step(&mut self, step: Option<Step>) -> Result<(), SliderError> {
        check_shapes(self.config.layout, &self.progress, step.as_ref())?;
        self.end_sessions();
        self.step = step;
        Ok(())
    }

    /// Apply a value that changed outside the slider.
    ///
    /// Returns whether the stored progress changed. Writes are rejected while a drag or
    /// wheel session is active, and ignored when `progress` has a different shape.
    pub fn sync_external(&mut self, progress: &Progress) -> bool {
        if self.drag.is_some() || self.wheel.is_some() {
            log::debug!("external progress ignored during an active session");
            return false;
        }
        self.progress.assign(progress)
    }

    fn end_sessions(&mut self) {
        self.drag = None;
        self.wheel = None;
    }

    pub(crate) fn linear_key(&self) -> Option<LinearKey> {
        LinearKey::new(
            self.config.layout,
            self.config.layout_direction,
            self.progress.has_handles(),
        )
    }

    /// Axis and pointer direction of a linear layout.
    pub(crate) fn linear_mapping(&self) -> Option<(Axis, Direction)> {
        self.linear_key().map(|key| (key.axis, drag_direction(key)))
    }

    pub(crate) fn snapping(&self) -> bool {
        self.config.has(SliderOptions::SNAP_TO_STEPS) && self.step.is_some()
    }

    fn loops(&self) -> bool {
        self.config.has(SliderOptions::LOOP_VALUES)
            && self.config.layout.is_linear()
            && matches!(self.progress, Progress::Single(_))
    }

    /// Write a 1D value, wrapping in loop mode and rounding when `round` is set.
    pub(crate) fn commit_linear(&mut self, index: usize, raw: f64, round: bool) -> Commit {
        let mut value = if self.loops() { wrap_unit(raw) } else { raw };
        if round && let Some(step) = self.step.as_ref().and_then(Step::as_linear) {
            value = step.round(value);
        }
        let changed = self.progress.update(value, index);
        self.emit(Commit::Linear {
            index,
            changed,
            value: self.progress.value(index),
        })
    }

    /// Write a grid point, rounding each axis when `round` is set.
    pub(crate) fn commit_point(&mut self, point: Point, round: bool) -> Commit {
        let point = match self.step.as_ref().and_then(Step::as_point) {
            Some(step) if round => step.round(point.to_vec2()).to_point(),
            _ => point,
        };
        let changed = self.progress.update_point(point);
        self.emit(Commit::Point {
            changed,
            value: self.progress.point_progress(),
        })
    }

    /// Write a polar point, rounding angle and radius when `round` is set.
    pub(crate) fn commit_polar(&mut self, point: PolarPoint, round: bool) -> Commit {
        let point = match self.step.as_ref().and_then(Step::as_polar) {
            Some(step) if round => point.rounded(step),
            _ => point,
        };
        let changed = self.progress.update_polar_point(point);
        self.emit(Commit::Polar {
            changed,
            value: self.progress.polar_point(),
        })
    }

    /// Round the current value(s) to the step once, as at the end of an unsnapped gesture.
    ///
    /// `index` selects the linear value; grid and polar progress round as a whole.
    pub(crate) fn commit_rounded(&mut self, index: usize) -> Option<Commit> {
        match (self.step, self.progress.mode()) {
            (
                Some(Step::Linear(_)),
                ProgressMode::Single | ProgressMode::Range | ProgressMode::Multi,
            ) => {
                let current = self.progress.value(index);
                Some(self.commit_linear(index, current, true))
            }
            (Some(Step::Point(step)), ProgressMode::Grid) => {
                let changed = self.progress.update_point_rounded(&step);
                Some(self.emit(Commit::Point {
                    changed,
                    value: self.progress.point_progress(),
                }))
            }
            (Some(Step::Polar(_)), ProgressMode::Polar) => {
                let current = self.progress.polar_point();
                Some(self.commit_polar(current, true))
            }
            _ => None,
        }
    }

    fn emit(&mut self, commit: Commit) -> Commit {
        log::trace!("commit {commit:?}");
        if self.config.has(SliderOptions::HAPTIC_FEEDBACK)
            && let Some(kind) = trigger(&commit)
        {
            self.haptics.pulse(kind);
        }
        commit
    }
}

fn check_shapes(
    layout: SliderLayout,
    progress: &Progress,
    step: Option<&Step>,
) -> Result<(), SliderError> {
    let mode = progress.mode();
    let mode_fits = match layout {
        SliderLayout::Grid => mode == ProgressMode::Grid,
        SliderLayout::CircularGrid => mode == ProgressMode::Polar,
        _ => matches!(
            mode,
            ProgressMode::Single | ProgressMode::Range | ProgressMode::Multi
        ),
    };
    if !mode_fits {
        return Err(SliderError::ModeMismatch { layout, mode });
    }
    if progress.values().is_empty() {
        return Err(SliderError::Empty);
    }
    let step_fits = match (layout, step) {
        (_, None) => true,
        (SliderLayout::Grid, Some(s)) => s.as_point().is_some(),
        (SliderLayout::CircularGrid, Some(s)) => s.as_polar().is_some(),
        (_, Some(s)) => s.as_linear().is_some(),
    };
    if !step_fits {
        return Err(SliderError::StepMismatch { layout });
    }
    Ok(())
}
