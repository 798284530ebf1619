// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number picker basics.
//!
//! Drive a single headless picker with synthetic pointer input and print the
//! rows a renderer would draw on every frame.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example number_picker_basics`

use std::time::Duration;

use kurbo::Point;
use understory_number_picker::{EditorGesture, Label, NumberPicker, PickerEvent};

fn print_rows(picker: &NumberPicker) {
    let preview = picker.preview();
    let rows: Vec<String> = preview
        .rows()
        .map(|row| format!("{:>4} @ {:+6.1} (alpha {:.2})", row.label, row.y, row.alpha))
        .collect();
    println!("  candidate {:>3} | {}", preview.candidate, rows.join(" | "));
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut picker = NumberPicker::new(50, 0..=100)
        .expect("50 lies in 0..=100")
        .with_label(Label::new(|v| format!("{v}%")));
    let ms = Duration::from_millis;

    // A quick upward flick: about two rows of travel in 80 ms.
    println!("fling:");
    picker.pointer_down(Point::new(10.0, 200.0), ms(0));
    let mut now = ms(0);
    for y in [190.0, 175.0, 155.0, 135.0, 120.0] {
        now += ms(16);
        picker.pointer_move(Point::new(10.0, y), now);
        print_rows(&picker);
    }
    picker.pointer_up(Point::new(10.0, 120.0), now);

    while picker.needs_frames() {
        now += ms(16);
        match picker.tick(now) {
            Some(PickerEvent::Committed(value)) => {
                println!("committed {value}");
                picker
                    .set_value(value, 0..=100)
                    .expect("committed values stay in range");
            }
            Some(_) => print_rows(&picker),
            None => {}
        }
    }

    // The text fallback.
    println!("dialog:");
    if let Some(event) = picker.open_editor(EditorGesture::DoubleClick) {
        println!("  {event:?}, seeded with {:?}", picker.dialog().text());
    }
    for text in ["", "7", "75x", "75"] {
        let change = picker.edit_text(text);
        println!(
            "  typed {text:?}: {change:?}, invalid = {}",
            picker.dialog().is_invalid()
        );
    }
    if let Some(PickerEvent::Committed(value)) = picker.confirm_editor() {
        println!("committed {value}");
    }
}
