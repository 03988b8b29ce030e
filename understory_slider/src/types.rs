// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration types: layouts, alignments, options, and value ranges.

use kurbo::Rect;

use crate::math::clamp_unit;

/// Primary axis of a linear slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Progress runs along x.
    Horizontal,
    /// Progress runs along y.
    Vertical,
}

/// Where a horizontal slider anchors its progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// Progress grows from the leading edge.
    #[default]
    Leading,
    /// Progress grows outward from the center.
    Center,
    /// Progress grows from the trailing edge.
    Trailing,
}

/// Where a vertical slider anchors its progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Progress grows downward from the top edge.
    Top,
    /// Progress grows outward from the center.
    Center,
    /// Progress grows upward from the bottom edge.
    #[default]
    Bottom,
}

/// Layout mode of a slider.
///
/// Linear layouts (`Horizontal`, `Vertical`, and the two scrollable variants) drive
/// one or more 1D values. `Grid` drives a 2D point and `CircularGrid` drives a
/// [`PolarPoint`](crate::PolarPoint).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliderLayout {
    /// A horizontal track where the handle moves under the pointer.
    Horizontal(HorizontalAlignment),
    /// A vertical track where the handle moves under the pointer.
    Vertical(VerticalAlignment),
    /// A horizontal scale that moves under a fixed handle.
    ScrollableHorizontal,
    /// A vertical scale that moves under a fixed handle.
    ScrollableVertical,
    /// A 2D point picker.
    Grid,
    /// An angle + radius picker over a square region.
    CircularGrid,
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self::Horizontal(HorizontalAlignment::Leading)
    }
}

impl SliderLayout {
    /// The primary axis of a linear layout, or `None` for grid and circular grid.
    pub const fn axis(self) -> Option<Axis> {
        match self {
            Self::Horizontal(_) | Self::ScrollableHorizontal => Some(Axis::Horizontal),
            Self::Vertical(_) | Self::ScrollableVertical => Some(Axis::Vertical),
            Self::Grid | Self::CircularGrid => None,
        }
    }

    /// True for the scrollable layouts.
    pub const fn is_scrollable(self) -> bool {
        matches!(self, Self::ScrollableHorizontal | Self::ScrollableVertical)
    }

    /// True for layouts driving 1D values.
    pub const fn is_linear(self) -> bool {
        self.axis().is_some()
    }
}

/// Text direction of the surrounding layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutDirection {
    /// Leading is left.
    #[default]
    LeftToRight,
    /// Leading is right; horizontal motion is mirrored.
    RightToLeft,
}

impl LayoutDirection {
    /// True for [`LayoutDirection::RightToLeft`].
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }
}

bitflags::bitflags! {
    /// Behavior options for a slider.
    ///
    /// `DELAYED_GESTURE` and `HIGH_PRIORITY_GESTURE` are consumed by the host when it
    /// attaches its recognizer (see [`SliderConfig::gesture_priority`]); every other bit
    /// changes how the engine interprets input.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderOptions: u16 {
        /// Ignore movement below [`SliderConfig::minimum_drag_distance`] before a drag starts.
        const DRAG_GESTURE_MINIMUM_DISTANCE = 0b0000_0000_0001;
        /// The host should delay recognition (e.g. inside a scroll view).
        const DELAYED_GESTURE               = 0b0000_0000_0010;
        /// The host should give the drag recognizer priority over its ancestors.
        const HIGH_PRIORITY_GESTURE         = 0b0000_0000_0100;
        /// Quantize continuously while interacting instead of once at gesture end.
        const SNAP_TO_STEPS                 = 0b0000_0000_1000;
        /// Wrap single values around instead of saturating at the ends.
        const LOOP_VALUES                   = 0b0000_0001_0000;
        /// A quick press-release jumps to the pressed location.
        const TAP_TO_SLIDE                  = 0b0000_0010_0000;
        /// React to scroll wheel / trackpad scroll while hovered.
        const SCROLL_WHEEL                  = 0b0000_0100_0000;
        /// Pulse the haptic engine on boundary landings.
        const HAPTIC_FEEDBACK               = 0b0000_1000_0000;
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::DRAG_GESTURE_MINIMUM_DISTANCE | Self::SCROLL_WHEEL | Self::HAPTIC_FEEDBACK
    }
}

/// How the host should attach its drag recognizer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePriority {
    /// Attach normally.
    #[default]
    Normal,
    /// Attach with priority over ancestor recognizers.
    High,
    /// Delay recognition until the host's ancestors decline the gesture.
    Delayed,
}

/// Static configuration of a slider.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Layout mode.
    pub layout: SliderLayout,
    /// Text direction; mirrors horizontal linear layouts when right-to-left.
    pub layout_direction: LayoutDirection,
    /// Behavior options.
    pub options: SliderOptions,
    /// Movement slop in pixels. Also the upper bound of travel for a tap.
    pub minimum_drag_distance: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            layout: SliderLayout::default(),
            layout_direction: LayoutDirection::default(),
            options: SliderOptions::default(),
            minimum_drag_distance: 1.0,
        }
    }
}

impl SliderConfig {
    /// Configuration for `layout` with default options.
    pub fn new(layout: SliderLayout) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Replace the options.
    #[must_use]
    pub fn with_options(mut self, options: SliderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the layout direction.
    #[must_use]
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = direction;
        self
    }

    /// Replace the minimum drag distance.
    #[must_use]
    pub fn with_minimum_drag_distance(mut self, distance: f64) -> Self {
        self.minimum_drag_distance = distance;
        self
    }

    /// Whether `option` is set.
    pub fn has(&self, option: SliderOptions) -> bool {
        self.options.contains(option)
    }

    /// How the host should attach its drag recognizer.
    ///
    /// `DELAYED_GESTURE` wins over `HIGH_PRIORITY_GESTURE` when both are set.
    pub fn gesture_priority(&self) -> GesturePriority {
        if self.has(SliderOptions::DELAYED_GESTURE) {
            GesturePriority::Delayed
        } else if self.has(SliderOptions::HIGH_PRIORITY_GESTURE) {
            GesturePriority::High
        } else {
            GesturePriority::Normal
        }
    }
}

/// A closed range of bound values, `lower..=upper`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueRange {
    /// Value at progress `0`.
    pub lower: f64,
    /// Value at progress `1`.
    pub upper: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::UNIT
    }
}

impl ValueRange {
    /// The unit range `0..=1`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Create a range.
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// The horizontal range `x0..=x1` of a grid's bounds.
    pub const fn horizontal(bounds: Rect) -> Self {
        Self::new(bounds.x0, bounds.x1)
    }

    /// The vertical range `y0..=y1` of a grid's bounds.
    pub const fn vertical(bounds: Rect) -> Self {
        Self::new(bounds.y0, bounds.y1)
    }

    /// `upper - lower`.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// True when the span is not a positive finite number.
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        !(span.is_finite() && span > 0.0)
    }

    /// Normalize `value` into progress, clamped to [0,1]. Degenerate ranges yield `0`.
    pub fn progress_of(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        clamp_unit((value - self.lower) / self.span())
    }

    /// Map progress back into the range.
    pub fn value_of(&self, progress: f64) -> f64 {
        self.lower + progress * self.span()
    }
}
