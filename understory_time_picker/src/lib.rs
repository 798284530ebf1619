// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_time_picker --heading-base-level=0

//! Understory Time Picker: hours/minutes pickers built from number pickers.
//!
//! [`HoursPicker`] lays out independent
//! [`NumberPicker`](understory_number_picker::NumberPicker) columns side by
//! side:
//!
//! - 24-hour times ([`FullHours`]): hours `0..=23` and minutes `0..=59`.
//! - 12-hour times ([`AmPmHours`]): hours `1..=12`, minutes, and an AM/PM
//!   column backed by a `0..=1` picker with custom labels.
//!
//! Columns know nothing about each other. When one commits a value, the
//! composite copies the current [`Hours`] with that one field replaced and
//! reports it as [`TimePickerEvent::Changed`]. The owner stores the new time
//! and passes it back through [`HoursPicker::set_value`].
//!
//! ```rust
//! use understory_time_picker::{AmPmHours, Column, DayTime, Hours, HoursPicker, TimePickerEvent};
//!
//! let time = Hours::from(AmPmHours { hours: 12, minutes: 0, day_time: DayTime::Am });
//! let mut picker = HoursPicker::new(time).unwrap().with_dividers(true, false);
//!
//! // Dragging the hour column down by one row shows 11, never 13.
//! picker.drag_by(Column::Hours, 40.0);
//! let Some(TimePickerEvent::Changed(time)) = picker.release(Column::Hours, 0.0) else {
//!     unreachable!();
//! };
//! assert_eq!(time.hours(), 11);
//! assert_eq!(time.day_time(), Some(DayTime::Am));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hours;
mod picker;

pub use hours::{
    AM_PM_HOURS_RANGE, AmPmHours, DAY_TIME_RANGE, DayTime, FULL_HOURS_RANGE, FullHours, Hours,
    MINUTES_RANGE,
};
pub use picker::{Column, HoursPicker, Slot, TimePickerEvent};
