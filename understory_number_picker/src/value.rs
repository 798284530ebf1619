// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded integer value and its display labels.
//!
//! A [`BoundedValue`] is the owner-supplied half of a picker: the committed
//! value plus the inclusive range it lives in. The picker never stores it
//! across interaction cycles; the owner hands it back on every update.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;
use core::ops::RangeInclusive;

/// Error returned when a picker is given a range with no values in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeError {
    /// First value of the rejected range.
    pub first: i32,
    /// Last value of the rejected range.
    pub last: i32,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "picker range {}..={} is empty", self.first, self.last)
    }
}

impl core::error::Error for RangeError {}

/// A committed integer value together with its inclusive legal range.
///
/// `current` is expected to lie inside `range`. This is the caller's
/// responsibility: the value is never clamped, and a value outside the range
/// is only reported with a warning. The edit dialog can produce such values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedValue {
    current: i32,
    range: RangeInclusive<i32>,
}

impl BoundedValue {
    /// Creates a bounded value.
    ///
    /// Returns [`RangeError`] if `range` is empty.
    pub fn new(current: i32, range: RangeInclusive<i32>) -> Result<Self, RangeError> {
        if range.is_empty() {
            return Err(RangeError {
                first: *range.start(),
                last: *range.end(),
            });
        }
        if !range.contains(&current) {
            log::warn!("value {current} lies outside {range:?}");
        }
        Ok(Self { current, range })
    }

    /// The committed value.
    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// The inclusive legal range.
    #[must_use]
    pub fn range(&self) -> &RangeInclusive<i32> {
        &self.range
    }

    /// Lowest legal value.
    #[must_use]
    pub fn first(&self) -> i32 {
        *self.range.start()
    }

    /// Highest legal value.
    #[must_use]
    pub fn last(&self) -> i32 {
        *self.range.end()
    }

    /// Returns `true` if `value` is a legal value for this domain.
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        self.range.contains(&value)
    }
}

/// Maps a picker value to the text shown for it.
///
/// The default renders the decimal representation. Custom labels let a
/// two-value range read as `"AM"`/`"PM"`, for instance.
///
/// ```
/// use understory_number_picker::Label;
///
/// assert_eq!(Label::default().text(7), "7");
///
/// let day_time = Label::new(|v| if v == 0 { "AM".into() } else { "PM".into() });
/// assert_eq!(day_time.text(1), "PM");
/// ```
#[derive(Default)]
pub struct Label {
    custom: Option<Box<dyn Fn(i32) -> String>>,
}

impl Label {
    /// Decimal labels.
    #[must_use]
    pub fn decimal() -> Self {
        Self { custom: None }
    }

    /// Labels produced by `f`.
    pub fn new(f: impl Fn(i32) -> String + 'static) -> Self {
        Self {
            custom: Some(Box::new(f)),
        }
    }

    /// The text for `value`.
    #[must_use]
    pub fn text(&self, value: i32) -> String {
        match &self.custom {
            Some(f) => f(value),
            None => value.to_string(),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_range_is_rejected() {
        #[expect(clippy::reversed_empty_ranges, reason = "testing the empty case")]
        let err = BoundedValue::new(3, 5..=2).unwrap_err();
        assert_eq!(err, RangeError { first: 5, last: 2 });
        assert_eq!(err.to_string(), "picker range 5..=2 is empty");
    }

    #[test]
    fn accessors_report_range_ends() {
        let v = BoundedValue::new(5, 0..=23).unwrap();
        assert_eq!(v.current(), 5);
        assert_eq!(v.first(), 0);
        assert_eq!(v.last(), 23);
        assert!(v.contains(23));
        assert!(!v.contains(24));
    }

    #[test]
    fn value_outside_the_range_is_kept_as_is() {
        let v = BoundedValue::new(-1, 0..=23).unwrap();
        assert_eq!(v.current(), -1);
        assert!(!v.contains(v.current()));
    }

    #[test]
    fn single_value_range_is_legal() {
        let v = BoundedValue::new(4, 4..=4).unwrap();
        assert_eq!(v.first(), v.last());
    }

    #[test]
    fn decimal_label_handles_negatives() {
        assert_eq!(Label::decimal().text(-12), "-12");
    }

    #[test]
    fn custom_label_is_used() {
        let label = Label::new(|v| alloc::format!("{v:02}"));
        assert_eq!(label.text(5), "05");
    }
}
