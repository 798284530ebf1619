// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between a continuous pixel offset and discrete value changes.
//!
//! One row quantum of offset is one unit of value. Positive offsets (dragging
//! down) reveal lower values; negative offsets reveal higher ones.
//!
//! ```
//! use understory_number_picker::{BoundedValue, RowMapping};
//!
//! let rows = RowMapping::new(40.0).unwrap();
//! let hours = BoundedValue::new(5, 0..=23).unwrap();
//!
//! // Two rows up shows 7.
//! assert_eq!(rows.candidate_value(hours.current(), -80.0), 7);
//! // Most of the way to the next row still shows the current one.
//! assert_eq!(rows.candidate_value(hours.current(), -39.0), 5);
//!
//! let bounds = rows.offset_bounds(&hours);
//! assert_eq!(bounds.lower, -18.0 * 40.0);
//! assert_eq!(bounds.upper, 5.0 * 40.0);
//! ```

use core::fmt;

use crate::value::BoundedValue;

/// Error returned for a row quantum that is not a positive finite number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuantumError {
    /// The rejected quantum.
    pub quantum: f64,
}

impl fmt::Display for QuantumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row quantum must be positive and finite, got {}",
            self.quantum
        )
    }
}

impl core::error::Error for QuantumError {}

/// Closed interval of legal animated offsets for a given value and range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetBounds {
    /// Offset at which the last value of the range is centred.
    pub lower: f64,
    /// Offset at which the first value of the range is centred.
    pub upper: f64,
}

impl OffsetBounds {
    /// Clamps `offset` into the interval.
    #[must_use]
    pub fn clamp(self, offset: f64) -> f64 {
        offset.clamp(self.lower, self.upper)
    }

    /// Returns `true` if `offset` lies inside the interval.
    #[must_use]
    pub fn contains(self, offset: f64) -> bool {
        self.lower <= offset && offset <= self.upper
    }
}

/// Pixel-to-value mapping with a fixed row height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowMapping {
    quantum: f64,
}

impl RowMapping {
    /// Creates a mapping where `quantum` pixels correspond to one value step.
    pub fn new(quantum: f64) -> Result<Self, QuantumError> {
        if quantum.is_finite() && quantum > 0.0 {
            Ok(Self { quantum })
        } else {
            Err(QuantumError { quantum })
        }
    }

    /// Pixel distance of one value step.
    #[must_use]
    pub fn quantum(self) -> f64 {
        self.quantum
    }

    /// Whole rows covered by `offset`, truncated toward zero.
    ///
    /// `1.5` rows count as one; `-0.9` rows count as none.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the picker range, which fits in i32"
    )]
    pub fn delta_value(self, offset: f64) -> i32 {
        libm::trunc(offset / self.quantum) as i32
    }

    /// The value shown at the centre row while the column is displaced by `offset`.
    #[must_use]
    pub fn candidate_value(self, current: i32, offset: f64) -> i32 {
        current.saturating_sub(self.delta_value(offset))
    }

    /// The value committed for a row-aligned `offset`.
    ///
    /// Settled offsets are exact row multiples up to floating-point error, so
    /// this rounds rather than truncates; for aligned offsets both agree.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are bounded by the picker range, which fits in i32"
    )]
    pub fn settled_value(self, current: i32, offset: f64) -> i32 {
        current.saturating_sub(libm::round(offset / self.quantum) as i32)
    }

    /// Fractional position within the current row, carrying the sign of `offset`.
    #[must_use]
    pub fn row_remainder(self, offset: f64) -> f64 {
        offset % self.quantum
    }

    /// Legal offsets for `value`: dragging can never reveal a value outside its range.
    ///
    /// The interval always contains `0`, so a value outside its range still
    /// rests centred and can only be dragged back toward the range.
    #[must_use]
    pub fn offset_bounds(self, value: &BoundedValue) -> OffsetBounds {
        let current = i64::from(value.current());
        let above = (current - i64::from(value.last())).min(0);
        let below = (current - i64::from(value.first())).max(0);
        OffsetBounds {
            lower: above as f64 * self.quantum,
            upper: below as f64 * self.quantum,
        }
    }

    /// Moves `target` onto the nearest row boundary.
    ///
    /// The target is split into a whole-row base (truncated toward zero) and
    /// a remainder of the same sign; the remainder snaps to the closest of
    /// `-quantum`, `0` and `+quantum`, preferring the earlier anchor on ties.
    #[must_use]
    pub fn snap(self, target: f64) -> f64 {
        if !target.is_finite() {
            return target;
        }
        let q = self.quantum;
        let base = libm::trunc(target / q);
        let remainder = target % q;
        let mut best = -1.0;
        let mut best_distance = f64::INFINITY;
        for anchor in [-1.0, 0.0, 1.0] {
            let distance = libm::fabs(anchor * q - remainder);
            if distance < best_distance {
                best = anchor;
                best_distance = distance;
            }
        }
        (base + best) * q
    }
}
