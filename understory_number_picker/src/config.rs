// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants and visual style for a number picker.

use core::time::Duration;

use peniko::Color;

use crate::animation::{DecaySpec, SpringSpec};

/// Behavioural configuration of one picker instance.
///
/// All distances are in device pixels and all velocities in pixels per second.
/// The defaults describe an 80 px tall column whose rows are half of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerConfig {
    /// Pixel distance of one value step.
    pub row_height: f64,
    /// Friction multiplier of the fling projection.
    pub friction_multiplier: f64,
    /// Speed at or below which a release does not coast.
    pub decay_velocity_threshold: f64,
    /// Spring used to settle onto the snapped row.
    pub settle_spring: SpringSpec,
    /// Lowest opacity a visible row fades to.
    pub minimum_alpha: f64,
    /// Pointer travel before a press turns into a drag.
    pub touch_slop: f64,
    /// Hold time after which a press is a long press.
    pub long_press_timeout: Duration,
    /// Maximum gap between two clicks of a double click.
    pub double_tap_timeout: Duration,
    /// Release velocities are clamped to this magnitude.
    pub max_fling_velocity: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            row_height: 40.0,
            friction_multiplier: 20.0,
            decay_velocity_threshold: 0.1,
            settle_spring: SpringSpec::default(),
            minimum_alpha: 0.3,
            touch_slop: 8.0,
            long_press_timeout: Duration::from_millis(500),
            double_tap_timeout: Duration::from_millis(300),
            max_fling_velocity: 8_000.0,
        }
    }
}

impl PickerConfig {
    /// Sets the row height.
    #[must_use]
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Sets the fling friction multiplier.
    #[must_use]
    pub fn with_friction_multiplier(mut self, multiplier: f64) -> Self {
        self.friction_multiplier = multiplier;
        self
    }

    /// Sets the settle spring.
    #[must_use]
    pub fn with_settle_spring(mut self, spring: SpringSpec) -> Self {
        self.settle_spring = spring;
        self
    }

    /// Sets the minimum row opacity, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_minimum_alpha(mut self, alpha: f64) -> Self {
        self.minimum_alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Sets the touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, slop: f64) -> Self {
        self.touch_slop = slop.max(0.0);
        self
    }

    /// The decay used to project fling targets.
    #[must_use]
    pub fn decay(&self) -> DecaySpec {
        DecaySpec::new(self.friction_multiplier)
            .with_velocity_threshold(self.decay_velocity_threshold)
    }
}

/// Colours and chrome metrics handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickerStyle {
    /// Colour of the two divider lines around the centre row.
    pub dividers_color: Color,
    /// Colour of the row labels before opacity is applied.
    pub text_color: Color,
    /// Thickness of each divider.
    pub divider_thickness: f64,
    /// Space between a divider and the label column.
    pub vertical_margin: f64,
    /// Horizontal padding of the label column.
    pub horizontal_padding: f64,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            dividers_color: Color::from_rgb8(0x62, 0x00, 0xee),
            text_color: Color::from_rgb8(0x00, 0x00, 0x00),
            divider_thickness: 2.0,
            vertical_margin: 8.0,
            horizontal_padding: 20.0,
        }
    }
}

impl PickerStyle {
    /// Sets the divider colour.
    #[must_use]
    pub fn with_dividers_color(mut self, color: Color) -> Self {
        self.dividers_color = color;
        self
    }

    /// Sets the label colour.
    #[must_use]
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }
}
