// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time picker, headless.
//!
//! Build a 12-hour picker, scroll its columns with synthetic drags, and feed
//! every changed time back as the owner of the value would.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example time_picker_headless`

use std::time::Duration;

use understory_time_picker::{
    AmPmHours, Column, DayTime, FullHours, Hours, HoursPicker, Slot, TimePickerEvent,
};

fn describe(time: Hours) -> String {
    match time.day_time() {
        Some(day_time) => format!(
            "{:02}:{:02} {}",
            time.hours(),
            time.minutes(),
            day_time.label()
        ),
        None => format!("{:02}:{:02}", time.hours(), time.minutes()),
    }
}

fn layout(picker: &HoursPicker) -> String {
    picker
        .slots()
        .into_iter()
        .map(|slot| match slot {
            Slot::Column(Column::Hours) => "[hh]",
            Slot::Column(Column::Minutes) => "[mm]",
            Slot::Column(Column::DayTime) => "[am/pm]",
            Slot::HoursDivider | Slot::MinutesDivider => ":",
        })
        .collect()
}

fn apply(picker: &mut HoursPicker, event: TimePickerEvent) {
    match event {
        TimePickerEvent::Changed(time) => {
            log::info!("changed to {}", describe(time));
            picker.set_value(time).expect("changed times stay in range");
        }
        other => log::debug!("{other:?}"),
    }
}

fn settle(picker: &mut HoursPicker, now: &mut Duration) {
    while picker.needs_frames() {
        *now += Duration::from_millis(16);
        for event in picker.tick(*now) {
            apply(picker, event);
        }
    }
}

/// Drag a column by `rows` rows in small steps and let it go at rest.
fn scroll(picker: &mut HoursPicker, column: Column, rows: f64, now: &mut Duration) {
    let step = rows * 40.0 / 8.0;
    for _ in 0..8 {
        if let Some(event) = picker.drag_by(column, step) {
            apply(picker, event);
        }
    }
    if let Some(event) = picker.release(column, 0.0) {
        apply(picker, event);
    }
    settle(picker, now);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Hours::from(AmPmHours {
        hours: 11,
        minutes: 58,
        day_time: DayTime::Am,
    });
    let mut picker = HoursPicker::new(start)
        .expect("11:58 AM is a valid time")
        .with_dividers(true, false);
    let mut now = Duration::ZERO;

    println!("layout {}", layout(&picker));
    println!("start  {}", describe(picker.value()));

    // Negative drags move to larger values.
    scroll(&mut picker, Column::Minutes, -1.0, &mut now);
    scroll(&mut picker, Column::Hours, -1.0, &mut now);
    scroll(&mut picker, Column::DayTime, -1.0, &mut now);
    println!("now    {}", describe(picker.value()));

    // Switching to a 24-hour value rebuilds the columns.
    picker
        .set_value(Hours::from(FullHours {
            hours: 23,
            minutes: 0,
        }))
        .expect("23:00 is a valid time");
    println!("layout {}", layout(&picker));

    // Past the last hour the drag is clamped.
    scroll(&mut picker, Column::Hours, -3.0, &mut now);
    println!("end    {}", describe(picker.value()));
}
