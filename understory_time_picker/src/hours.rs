// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time values edited by the composite pickers.

use core::ops::RangeInclusive;

/// Hours of a 24-hour clock.
pub const FULL_HOURS_RANGE: RangeInclusive<i32> = 0..=23;

/// Hours of a 12-hour clock.
pub const AM_PM_HOURS_RANGE: RangeInclusive<i32> = 1..=12;

/// Minutes of an hour.
pub const MINUTES_RANGE: RangeInclusive<i32> = 0..=59;

/// Picker values of the AM/PM column.
pub const DAY_TIME_RANGE: RangeInclusive<i32> = 0..=1;

/// Half of a 12-hour day.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DayTime {
    /// Before noon.
    #[default]
    Am,
    /// After noon.
    Pm,
}

impl DayTime {
    /// The picker value for this half: `0` for AM, `1` for PM.
    #[must_use]
    pub fn index(self) -> i32 {
        match self {
            Self::Am => 0,
            Self::Pm => 1,
        }
    }

    /// The half for a picker value; anything but `0` is PM.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        match index {
            0 => Self::Am,
            _ => Self::Pm,
        }
    }

    /// Display text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

/// A time on a 24-hour clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FullHours {
    /// Hour, `0..=23` by default.
    pub hours: i32,
    /// Minute, `0..=59`.
    pub minutes: i32,
}

/// A time on a 12-hour clock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AmPmHours {
    /// Hour, `1..=12` by default.
    pub hours: i32,
    /// Minute, `0..=59`.
    pub minutes: i32,
    /// Morning or afternoon.
    pub day_time: DayTime,
}

/// Either kind of time a [`HoursPicker`](crate::HoursPicker) edits.
///
/// ```
/// use understory_time_picker::{AmPmHours, DayTime, Hours};
///
/// let t = Hours::from(AmPmHours { hours: 9, minutes: 41, day_time: DayTime::Pm });
/// assert_eq!(t.hours(), 9);
/// assert_eq!(t.day_time(), Some(DayTime::Pm));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Hours {
    /// 24-hour time.
    Full(FullHours),
    /// 12-hour time with AM/PM.
    AmPm(AmPmHours),
}

impl Hours {
    /// The hour.
    #[must_use]
    pub fn hours(&self) -> i32 {
        match self {
            Self::Full(t) => t.hours,
            Self::AmPm(t) => t.hours,
        }
    }

    /// The minute.
    #[must_use]
    pub fn minutes(&self) -> i32 {
        match self {
            Self::Full(t) => t.minutes,
            Self::AmPm(t) => t.minutes,
        }
    }

    /// AM or PM for 12-hour times.
    #[must_use]
    pub fn day_time(&self) -> Option<DayTime> {
        match self {
            Self::Full(_) => None,
            Self::AmPm(t) => Some(t.day_time),
        }
    }

    /// The default hour range for this kind of time.
    #[must_use]
    pub fn default_hours_range(&self) -> RangeInclusive<i32> {
        match self {
            Self::Full(_) => FULL_HOURS_RANGE,
            Self::AmPm(_) => AM_PM_HOURS_RANGE,
        }
    }

    /// A copy with the hour replaced.
    #[must_use]
    pub fn with_hours(self, hours: i32) -> Self {
        match self {
            Self::Full(t) => Self::Full(FullHours { hours, ..t }),
            Self::AmPm(t) => Self::AmPm(AmPmHours { hours, ..t }),
        }
    }

    /// A copy with the minute replaced.
    #[must_use]
    pub fn with_minutes(self, minutes: i32) -> Self {
        match self {
            Self::Full(t) => Self::Full(FullHours { minutes, ..t }),
            Self::AmPm(t) => Self::AmPm(AmPmHours { minutes, ..t }),
        }
    }

    /// A copy with AM/PM replaced. 24-hour times are returned unchanged.
    #[must_use]
    pub fn with_day_time(self, day_time: DayTime) -> Self {
        match self {
            Self::Full(_) => self,
            Self::AmPm(t) => Self::AmPm(AmPmHours { day_time, ..t }),
        }
    }

    /// Returns `true` if both values are the same kind of time.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl From<FullHours> for Hours {
    fn from(value: FullHours) -> Self {
        Self::Full(value)
    }
}

impl From<AmPmHours> for Hours {
    fn from(value: AmPmHours) -> Self {
        Self::AmPm(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_time_round_trips_through_its_index() {
        assert_eq!(DayTime::from_index(DayTime::Am.index()), DayTime::Am);
        assert_eq!(DayTime::from_index(DayTime::Pm.index()), DayTime::Pm);
        assert_eq!(DayTime::from_index(7), DayTime::Pm);
    }

    #[test]
    fn copies_replace_one_field() {
        let t = Hours::from(FullHours {
            hours: 5,
            minutes: 30,
        });
        assert_eq!(
            t.with_hours(7),
            Hours::Full(FullHours {
                hours: 7,
                minutes: 30
            })
        );
        assert_eq!(t.with_minutes(0).hours(), 5);
        assert_eq!(t.with_day_time(DayTime::Pm), t);
    }

    #[test]
    fn am_pm_copies_keep_day_time() {
        let t = Hours::from(AmPmHours {
            hours: 12,
            minutes: 5,
            day_time: DayTime::Pm,
        });
        assert_eq!(t.with_hours(11).day_time(), Some(DayTime::Pm));
        assert_eq!(t.with_day_time(DayTime::Am).day_time(), Some(DayTime::Am));
        assert_eq!(t.default_hours_range(), AM_PM_HOURS_RANGE);
    }

    #[test]
    fn kinds_are_compared_by_variant() {
        let full = Hours::from(FullHours::default());
        let am_pm = Hours::from(AmPmHours::default());
        assert!(full.same_kind(&full.with_hours(3)));
        assert!(!full.same_kind(&am_pm));
    }
}
