// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composite hours/minutes(/AM-PM) picker.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::ops::RangeInclusive;
use core::time::Duration;

use kurbo::Point;
use understory_number_picker::{
    EditorGesture, Label, NumberPicker, PickerConfig, PickerError, PickerEvent, PickerStyle,
    TextChange,
};

use crate::hours::{DAY_TIME_RANGE, DayTime, Hours, MINUTES_RANGE};

/// One column of a [`HoursPicker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// The hour column.
    Hours,
    /// The minute column.
    Minutes,
    /// The AM/PM column of 12-hour pickers.
    DayTime,
}

/// An item of the horizontal layout, from left to right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// A picker column.
    Column(Column),
    /// The optional divider after the hour column.
    HoursDivider,
    /// The optional divider after the minute column.
    MinutesDivider,
}

/// Notification for the owner of a [`HoursPicker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TimePickerEvent {
    /// A column shows a new value mid-gesture.
    Previewed {
        /// The column being moved.
        column: Column,
        /// Its centre value.
        value: i32,
    },
    /// A column committed a value; this is the resulting time.
    Changed(Hours),
    /// A column opened its edit dialog.
    EditorOpened(Column, EditorGesture),
    /// A column's edit dialog was dismissed.
    EditorClosed(Column),
}

/// Hours and minutes side by side, plus AM/PM for 12-hour times.
///
/// Like its columns, the composite is controlled: it reports
/// [`TimePickerEvent::Changed`] and waits for the owner to pass the new time
/// back through [`HoursPicker::set_value`], which re-renders every column.
/// Columns never see each other; a gesture on one cannot move another.
///
/// ```
/// use understory_time_picker::{Column, FullHours, Hours, HoursPicker, TimePickerEvent};
///
/// let mut time = Hours::from(FullHours { hours: 5, minutes: 30 });
/// let mut picker = HoursPicker::new(time).unwrap();
///
/// picker.drag_by(Column::Minutes, -80.0);
/// if let Some(TimePickerEvent::Changed(new_time)) = picker.release(Column::Minutes, 0.0) {
///     time = new_time;
///     picker.set_value(time).unwrap();
/// }
/// assert_eq!(time.minutes(), 32);
/// assert_eq!(time.hours(), 5);
/// ```
#[derive(Debug)]
pub struct HoursPicker {
    value: Hours,
    hours_range: RangeInclusive<i32>,
    config: PickerConfig,
    style: PickerStyle,
    hours: NumberPicker,
    minutes: NumberPicker,
    day_time: Option<NumberPicker>,
    hours_divider: bool,
    minutes_divider: bool,
}

impl HoursPicker {
    /// Creates a picker for `value` with the default hour range of its kind.
    pub fn new(value: Hours) -> Result<Self, PickerError> {
        let range = value.default_hours_range();
        Self::with_hours_range(value, range)
    }

    /// Creates a picker for `value` whose hour column spans `hours_range`.
    pub fn with_hours_range(
        value: Hours,
        hours_range: RangeInclusive<i32>,
    ) -> Result<Self, PickerError> {
        Self::build(
            value,
            hours_range,
            PickerConfig::default(),
            PickerStyle::default(),
        )
    }

    fn build(
        value: Hours,
        hours_range: RangeInclusive<i32>,
        config: PickerConfig,
        style: PickerStyle,
    ) -> Result<Self, PickerError> {
        let hours = NumberPicker::with_config(value.hours(), hours_range.clone(), config)?
            .with_style(style);
        let minutes =
            NumberPicker::with_config(value.minutes(), MINUTES_RANGE, config)?.with_style(style);
        let day_time = match value.day_time() {
            Some(day_time) => Some(day_time_column(day_time, config, style)?),
            None => None,
        };
        Ok(Self {
            value,
            hours_range,
            config,
            style,
            hours,
            minutes,
            day_time,
            hours_divider: false,
            minutes_divider: false,
        })
    }

    /// Rebuilds every column with `config`, dropping any gesture in progress.
    pub fn with_config(self, config: PickerConfig) -> Result<Self, PickerError> {
        let mut rebuilt = Self::build(self.value, self.hours_range, config, self.style)?;
        rebuilt.hours_divider = self.hours_divider;
        rebuilt.minutes_divider = self.minutes_divider;
        Ok(rebuilt)
    }

    /// Applies `style` to every column.
    #[must_use]
    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self.hours = self.hours.with_style(style);
        self.minutes = self.minutes.with_style(style);
        self.day_time = self.day_time.map(|c| c.with_style(style));
        self
    }

    /// Shows dividers after the hour and/or minute column.
    #[must_use]
    pub fn with_dividers(mut self, after_hours: bool, after_minutes: bool) -> Self {
        self.hours_divider = after_hours;
        self.minutes_divider = after_minutes;
        self
    }

    /// The owner-supplied time.
    #[must_use]
    pub fn value(&self) -> Hours {
        self.value
    }

    /// Hour range of the hour column.
    #[must_use]
    pub fn hours_range(&self) -> &RangeInclusive<i32> {
        &self.hours_range
    }

    /// Supplies the owner's current time and re-renders every column.
    ///
    /// Switching between 24-hour and 12-hour times resets the hour range to
    /// the default of the new kind and adds or removes the AM/PM column.
    pub fn set_value(&mut self, value: Hours) -> Result<(), PickerError> {
        if !value.same_kind(&self.value) {
            self.hours_range = value.default_hours_range();
        }
        self.hours
            .set_value(value.hours(), self.hours_range.clone())?;
        self.minutes.set_value(value.minutes(), MINUTES_RANGE)?;
        match value.day_time() {
            Some(day_time) => {
                if let Some(column) = self.day_time.as_mut() {
                    column.set_value(day_time.index(), DAY_TIME_RANGE)?;
                } else {
                    self.day_time = Some(day_time_column(day_time, self.config, self.style)?);
                }
            }
            None => self.day_time = None,
        }
        self.value = value;
        Ok(())
    }

    /// Columns and dividers from left to right.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(5);
        slots.push(Slot::Column(Column::Hours));
        if self.hours_divider {
            slots.push(Slot::HoursDivider);
        }
        slots.push(Slot::Column(Column::Minutes));
        if self.minutes_divider {
            slots.push(Slot::MinutesDivider);
        }
        if self.day_time.is_some() {
            slots.push(Slot::Column(Column::DayTime));
        }
        slots
    }

    /// The picker behind `column`, if this picker has it.
    #[must_use]
    pub fn column(&self, column: Column) -> Option<&NumberPicker> {
        match column {
            Column::Hours => Some(&self.hours),
            Column::Minutes => Some(&self.minutes),
            Column::DayTime => self.day_time.as_ref(),
        }
    }

    fn column_mut(&mut self, column: Column) -> Option<&mut NumberPicker> {
        match column {
            Column::Hours => Some(&mut self.hours),
            Column::Minutes => Some(&mut self.minutes),
            Column::DayTime => self.day_time.as_mut(),
        }
    }

    /// Translates a column's event into a composite event.
    #[must_use]
    pub fn translate(&self, column: Column, event: PickerEvent) -> TimePickerEvent {
        match event {
            PickerEvent::Previewed(value) => TimePickerEvent::Previewed { column, value },
            PickerEvent::Committed(value) => {
                let changed = match column {
                    Column::Hours => self.value.with_hours(value),
                    Column::Minutes => self.value.with_minutes(value),
                    Column::DayTime => self.value.with_day_time(DayTime::from_index(value)),
                };
                log::debug!("{column:?} committed {value}: {changed:?}");
                TimePickerEvent::Changed(changed)
            }
            PickerEvent::EditorOpened(gesture) => TimePickerEvent::EditorOpened(column, gesture),
            PickerEvent::EditorClosed => TimePickerEvent::EditorClosed(column),
        }
    }

    fn route(
        &mut self,
        column: Column,
        f: impl FnOnce(&mut NumberPicker) -> Option<PickerEvent>,
    ) -> Option<TimePickerEvent> {
        let event = f(self.column_mut(column)?)?;
        Some(self.translate(column, event))
    }

    /// Moves `column` by `delta` pixels.
    pub fn drag_by(&mut self, column: Column, delta: f64) -> Option<TimePickerEvent> {
        self.route(column, |c| c.drag_by(delta))
    }

    /// Releases a drag on `column`.
    pub fn release(&mut self, column: Column, velocity: f64) -> Option<TimePickerEvent> {
        self.route(column, |c| c.release(velocity))
    }

    /// Pointer pressed on `column`.
    pub fn pointer_down(&mut self, column: Column, pos: Point, time: Duration) {
        if let Some(c) = self.column_mut(column) {
            c.pointer_down(pos, time);
        }
    }

    /// Pointer moved over a press that started on `column`.
    pub fn pointer_move(
        &mut self,
        column: Column,
        pos: Point,
        time: Duration,
    ) -> Option<TimePickerEvent> {
        self.route(column, |c| c.pointer_move(pos, time))
    }

    /// Pointer released after a press on `column`.
    pub fn pointer_up(
        &mut self,
        column: Column,
        pos: Point,
        time: Duration,
    ) -> Option<TimePickerEvent> {
        self.route(column, |c| c.pointer_up(pos, time))
    }

    /// Opens `column`'s edit dialog.
    pub fn open_editor(
        &mut self,
        column: Column,
        gesture: EditorGesture,
    ) -> Option<TimePickerEvent> {
        self.route(column, |c| c.open_editor(gesture))
    }

    /// Feeds dialog text to `column`.
    pub fn edit_text(&mut self, column: Column, text: &str) -> TextChange {
        self.column_mut(column)
            .map_or(TextChange::Ignored, |c| c.edit_text(text))
    }

    /// Confirms `column`'s edit dialog.
    pub fn confirm_editor(&mut self, column: Column) -> Option<TimePickerEvent> {
        self.route(column, NumberPicker::confirm_editor)
    }

    /// Dismisses `column`'s edit dialog.
    pub fn dismiss_editor(&mut self, column: Column) -> Option<TimePickerEvent> {
        self.route(column, NumberPicker::dismiss_editor)
    }

    /// Advances every column to frame time `now`.
    pub fn tick(&mut self, now: Duration) -> Vec<TimePickerEvent> {
        [Column::Hours, Column::Minutes, Column::DayTime]
            .into_iter()
            .filter_map(|column| self.route(column, |c| c.tick(now)))
            .collect()
    }

    /// Returns `true` while any column needs [`HoursPicker::tick`] calls.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.hours.needs_frames()
            || self.minutes.needs_frames()
            || self.day_time.as_ref().is_some_and(NumberPicker::needs_frames)
    }
}

fn day_time_column(
    day_time: DayTime,
    config: PickerConfig,
    style: PickerStyle,
) -> Result<NumberPicker, PickerError> {
    Ok(
        NumberPicker::with_config(day_time.index(), DAY_TIME_RANGE, config)?
            .with_style(style)
            .with_label(Label::new(|v| DayTime::from_index(v).label().to_string())),
    )
}

#[cfg(test)]
mod tests {
    use understory_number_picker::InteractionMode;

    use super::*;
    use crate::hours::{AmPmHours, FullHours};

    const Q: f64 = 40.0;
    const FRAME: Duration = Duration::from_millis(16);

    fn full(hours: i32, minutes: i32) -> Hours {
        Hours::from(FullHours { hours, minutes })
    }

    fn am_pm(hours: i32, minutes: i32, day_time: DayTime) -> Hours {
        Hours::from(AmPmHours {
            hours,
            minutes,
            day_time,
        })
    }

    fn changed(events: impl IntoIterator<Item = TimePickerEvent>) -> Option<Hours> {
        events.into_iter().find_map(|e| match e {
            TimePickerEvent::Changed(t) => Some(t),
            _ => None,
        })
    }

    fn settle(picker: &mut HoursPicker) -> Vec<TimePickerEvent> {
        let mut events = Vec::new();
        let mut now = Duration::ZERO;
        for _ in 0..10_000 {
            if !picker.needs_frames() {
                return events;
            }
            events.extend(picker.tick(now));
            now += FRAME;
        }
        panic!("picker never settled");
    }

    #[test]
    fn full_hours_layout() {
        let p = HoursPicker::new(full(5, 30)).unwrap();
        assert_eq!(
            p.slots(),
            [Slot::Column(Column::Hours), Slot::Column(Column::Minutes)]
        );
        assert_eq!(p.column(Column::Hours).unwrap().range(), &(0..=23));
        assert!(p.column(Column::DayTime).is_none());
    }

    #[test]
    fn am_pm_layout_with_dividers() {
        let p = HoursPicker::new(am_pm(12, 0, DayTime::Am))
            .unwrap()
            .with_dividers(true, true);
        assert_eq!(
            p.slots(),
            [
                Slot::Column(Column::Hours),
                Slot::HoursDivider,
                Slot::Column(Column::Minutes),
                Slot::MinutesDivider,
                Slot::Column(Column::DayTime),
            ]
        );
        assert_eq!(p.column(Column::Hours).unwrap().range(), &(1..=12));
        let day_time = p.column(Column::DayTime).unwrap();
        assert_eq!(day_time.preview().center.label, "AM");
        assert_eq!(day_time.preview().below.unwrap().label, "PM");
    }

    #[test]
    fn minute_change_keeps_hours() {
        let mut p = HoursPicker::new(full(5, 30)).unwrap();
        p.drag_by(Column::Minutes, -2.0 * Q);
        let t = changed(p.release(Column::Minutes, 0.0)).unwrap();
        assert_eq!(t, full(5, 32));
        // Not adopted until the owner passes it back.
        assert_eq!(p.value(), full(5, 30));
        p.set_value(t).unwrap();
        assert_eq!(p.column(Column::Minutes).unwrap().value(), 32);
    }

    #[test]
    fn twelve_hour_top_moves_to_eleven() {
        let mut p = HoursPicker::new(am_pm(12, 15, DayTime::Pm)).unwrap();
        p.drag_by(Column::Hours, Q);
        let t = changed(p.release(Column::Hours, 0.0)).unwrap();
        assert_eq!(t, am_pm(11, 15, DayTime::Pm));
    }

    #[test]
    fn day_time_column_switches_half() {
        let mut p = HoursPicker::new(am_pm(7, 45, DayTime::Am)).unwrap();
        p.drag_by(Column::DayTime, -0.8 * Q);
        p.release(Column::DayTime, 0.0);
        let t = changed(settle(&mut p)).unwrap();
        assert_eq!(t, am_pm(7, 45, DayTime::Pm));
    }

    #[test]
    fn columns_are_independent() {
        let mut p = HoursPicker::new(full(5, 30)).unwrap();
        p.drag_by(Column::Hours, -1.5 * Q);
        p.release(Column::Hours, -600.0);
        p.tick(Duration::ZERO);
        let minutes = p.column(Column::Minutes).unwrap();
        assert_eq!(minutes.offset(), 0.0);
        assert_eq!(minutes.mode(), InteractionMode::Idle);
        assert_eq!(minutes.value(), 30);

        let t = changed(settle(&mut p)).unwrap();
        assert_eq!(t.minutes(), 30);
        assert!(t.hours() > 5);
    }

    #[test]
    fn missing_column_is_ignored() {
        let mut p = HoursPicker::new(full(5, 30)).unwrap();
        assert_eq!(p.drag_by(Column::DayTime, Q), None);
        assert_eq!(p.edit_text(Column::DayTime, "1"), TextChange::Ignored);
    }

    #[test]
    fn dialog_confirm_changes_the_column() {
        let mut p = HoursPicker::new(full(5, 30)).unwrap();
        assert_eq!(
            p.open_editor(Column::Hours, EditorGesture::Click),
            Some(TimePickerEvent::EditorOpened(
                Column::Hours,
                EditorGesture::Click
            ))
        );
        p.edit_text(Column::Hours, "9");
        let t = changed(p.confirm_editor(Column::Hours)).unwrap();
        assert_eq!(t, full(9, 30));
        assert_eq!(p.dismiss_editor(Column::Hours), None);
    }

    #[test]
    fn cleared_hour_field_rests_centred_after_rerender() {
        let mut p = HoursPicker::new(full(5, 30)).unwrap();
        p.open_editor(Column::Hours, EditorGesture::Click);
        assert_eq!(p.edit_text(Column::Hours, ""), TextChange::Cleared);
        let t = changed(p.confirm_editor(Column::Hours)).unwrap();
        assert_eq!(t, full(-1, 30));

        p.set_value(t).unwrap();
        let hours = p.column(Column::Hours).unwrap();
        assert_eq!(hours.value(), -1);
        assert_eq!(hours.offset(), 0.0);
        assert_eq!(hours.mode(), InteractionMode::Idle);
        assert!(!p.needs_frames());

        // Only dragging back toward the range is possible.
        p.drag_by(Column::Hours, Q);
        assert_eq!(p.column(Column::Hours).unwrap().offset(), 0.0);
        p.drag_by(Column::Hours, -Q);
        let t = changed(p.release(Column::Hours, 0.0)).unwrap();
        assert_eq!(t, full(0, 30));
    }

    #[test]
    fn out_of_band_hour_from_the_dialog_rests_centred() {
        let mut p = HoursPicker::new(am_pm(3, 0, DayTime::Am)).unwrap();
        p.open_editor(Column::Hours, EditorGesture::LongPress);
        p.edit_text(Column::Hours, "99");
        let t = changed(p.confirm_editor(Column::Hours)).unwrap();
        assert_eq!(t.hours(), 99);

        p.set_value(t).unwrap();
        let hours = p.column(Column::Hours).unwrap();
        assert_eq!(hours.offset(), 0.0);
        assert_eq!(hours.preview().candidate, 99);
        assert!(hours.preview().above.is_none());
    }

    #[test]
    fn switching_kind_rebuilds_columns() {
        let mut p = HoursPicker::new(full(17, 30)).unwrap();
        p.set_value(am_pm(5, 30, DayTime::Pm)).unwrap();
        assert_eq!(p.hours_range(), &(1..=12));
        assert!(p.column(Column::DayTime).is_some());
        assert_eq!(p.column(Column::DayTime).unwrap().value(), 1);

        p.set_value(full(17, 30)).unwrap();
        assert_eq!(p.hours_range(), &(0..=23));
        assert!(p.column(Column::DayTime).is_none());
    }

    #[test]
    fn custom_hour_range_is_kept() {
        let mut p = HoursPicker::with_hours_range(full(9, 0), 8..=18).unwrap();
        p.drag_by(Column::Hours, 5.0 * Q);
        assert_eq!(p.column(Column::Hours).unwrap().candidate_value(), 8);
        p.set_value(full(10, 0)).unwrap();
        assert_eq!(p.hours_range(), &(8..=18));
    }

    #[test]
    fn config_applies_to_every_column() {
        let p = HoursPicker::new(am_pm(1, 0, DayTime::Am))
            .unwrap()
            .with_dividers(true, false)
            .with_config(PickerConfig::default().with_row_height(60.0))
            .unwrap();
        assert_eq!(p.column(Column::DayTime).unwrap().config().row_height, 60.0);
        assert_eq!(p.slots().len(), 4);
    }
}
