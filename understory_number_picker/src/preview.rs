// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three label rows shown while a picker is displaced.
//!
//! Everything here is derived from `(value, range, offset)` on demand and is
//! never cached: a renderer asks for a fresh [`Preview`] every frame.

use alloc::string::String;

use peniko::Color;

use crate::mapping::RowMapping;
use crate::value::{BoundedValue, Label};

/// Which of the three rows a [`RowPreview`] occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowSlot {
    /// The row one quantum above the centre, showing `candidate - 1`.
    Above,
    /// The centre row, showing the candidate value.
    Center,
    /// The row one quantum below the centre, showing `candidate + 1`.
    Below,
}

/// One visible label row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPreview {
    /// Row position.
    pub slot: RowSlot,
    /// The value this row shows.
    pub value: i32,
    /// Display text for `value`.
    pub label: String,
    /// Vertical position relative to the centre row: `-quantum`, `0` or `+quantum`.
    pub y: f64,
    /// Opacity in `minimum_alpha..=1.0`.
    pub alpha: f64,
    /// Text colour with `alpha` applied.
    pub color: Color,
}

/// Snapshot of what a picker column shows for a given offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Preview {
    /// Vertical shift of the whole label column, `offset % quantum`.
    pub shift: f64,
    /// The candidate value at the centre.
    pub candidate: i32,
    /// Row above, absent when `candidate - 1` is outside the range.
    pub above: Option<RowPreview>,
    /// Centre row.
    pub center: RowPreview,
    /// Row below, absent when `candidate + 1` is outside the range.
    pub below: Option<RowPreview>,
}

impl Preview {
    /// Computes the rows for `value` displaced by `offset`.
    ///
    /// Rows fade with the distance travelled toward the neighbouring row but
    /// never below `minimum_alpha`.
    #[must_use]
    pub fn compute(
        rows: RowMapping,
        value: &BoundedValue,
        offset: f64,
        label: &Label,
        text_color: Color,
        minimum_alpha: f64,
    ) -> Self {
        let q = rows.quantum();
        let shift = rows.row_remainder(offset);
        let fraction = shift / q;
        let candidate = rows.candidate_value(value.current(), offset);

        let row = |slot, value: i32, y, alpha: f64| {
            let alpha = alpha.max(minimum_alpha).min(1.0);
            #[expect(
                clippy::cast_possible_truncation,
                reason = "alpha is in 0..=1 and colour channels are f32"
            )]
            let color = text_color.multiply_alpha(alpha as f32);
            RowPreview {
                slot,
                value,
                label: label.text(value),
                y,
                alpha,
                color,
            }
        };

        let above = candidate
            .checked_sub(1)
            .filter(|v| value.contains(*v))
            .map(|v| row(RowSlot::Above, v, -q, fraction));
        let center = row(
            RowSlot::Center,
            candidate,
            0.0,
            1.0 - libm::fabs(fraction),
        );
        let below = candidate
            .checked_add(1)
            .filter(|v| value.contains(*v))
            .map(|v| row(RowSlot::Below, v, q, -fraction));

        Self {
            shift,
            candidate,
            above,
            center,
            below,
        }
    }

    /// The visible rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &RowPreview> {
        self.above
            .iter()
            .chain(core::iter::once(&self.center))
            .chain(self.below.iter())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    const Q: f64 = 40.0;

    fn preview(current: i32, range: core::ops::RangeInclusive<i32>, offset: f64) -> Preview {
        Preview::compute(
            RowMapping::new(Q).unwrap(),
            &BoundedValue::new(current, range).unwrap(),
            offset,
            &Label::default(),
            Color::from_rgb8(0, 0, 0),
            0.3,
        )
    }

    #[test]
    fn at_rest_shows_neighbours_faintly() {
        let p = preview(5, 0..=23, 0.0);
        assert_eq!(p.shift, 0.0);
        let values: Vec<_> = p.rows().map(|r| r.value).collect();
        assert_eq!(values, [4, 5, 6]);
        assert_eq!(p.center.alpha, 1.0);
        assert_eq!(p.above.as_ref().unwrap().alpha, 0.3);
        assert_eq!(p.below.as_ref().unwrap().y, Q);
        assert_eq!(p.above.as_ref().unwrap().label, "4");
    }

    #[test]
    fn rows_outside_the_range_are_omitted() {
        let p = preview(0, 0..=59, 0.0);
        assert!(p.above.is_none());
        assert_eq!(p.below.as_ref().unwrap().value, 1);

        let p = preview(12, 1..=12, 0.0);
        assert!(p.below.is_none());
        assert_eq!(p.above.as_ref().unwrap().value, 11);
    }

    #[test]
    fn dragging_down_fades_in_the_row_above() {
        let p = preview(5, 0..=23, 0.75 * Q);
        assert_eq!(p.candidate, 5);
        assert_eq!(p.shift, 0.75 * Q);
        assert!(libm::fabs(p.above.as_ref().unwrap().alpha - 0.75) < 1e-12);
        assert!(libm::fabs(p.center.alpha - 0.3) < 1e-12);
        assert_eq!(p.below.as_ref().unwrap().alpha, 0.3);
    }

    #[test]
    fn dragging_up_fades_in_the_row_below() {
        let p = preview(5, 0..=23, -1.5 * Q);
        assert_eq!(p.candidate, 6);
        assert_eq!(p.shift, -0.5 * Q);
        assert!(libm::fabs(p.below.as_ref().unwrap().alpha - 0.5) < 1e-12);
        assert!(libm::fabs(p.center.alpha - 0.5) < 1e-12);
        assert_eq!(p.above.as_ref().unwrap().alpha, 0.3);
    }

    #[test]
    fn colour_carries_alpha() {
        let p = preview(5, 0..=23, 0.0);
        assert_eq!(p.center.color, Color::from_rgb8(0, 0, 0));
        assert_eq!(
            p.above.as_ref().unwrap().color,
            Color::from_rgb8(0, 0, 0).multiply_alpha(0.3)
        );
    }

    #[test]
    fn custom_labels_are_applied() {
        let p = Preview::compute(
            RowMapping::new(Q).unwrap(),
            &BoundedValue::new(0, 0..=1).unwrap(),
            0.0,
            &Label::new(|v| if v == 0 { "AM".into() } else { "PM".into() }),
            Color::from_rgb8(0, 0, 0),
            0.3,
        );
        assert_eq!(p.center.label, "AM");
        assert_eq!(p.below.as_ref().unwrap().label, "PM");
        assert!(p.above.is_none());
    }
}
