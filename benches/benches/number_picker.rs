// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use std::time::Duration;
use understory_number_picker::mapping::RowMapping;
use understory_number_picker::{NumberPicker, PickerEvent};
use understory_time_picker::{Column, FullHours, Hours, HoursPicker};

const FRAME: Duration = Duration::from_millis(16);

fn settle(picker: &mut NumberPicker) -> Option<i32> {
    let mut now = Duration::ZERO;
    let mut committed = None;
    while picker.needs_frames() {
        if let Some(PickerEvent::Committed(v)) = picker.tick(now) {
            committed = Some(v);
        }
        now += FRAME;
    }
    committed
}

fn bench_mapping(c: &mut Criterion) {
    let rows = RowMapping::new(40.0).unwrap();
    let mut group = c.benchmark_group("number_picker/mapping");

    group.bench_function("snap", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            let mut target = -2_000.0;
            while target < 2_000.0 {
                acc += rows.snap(black_box(target));
                target += 3.3;
            }
            black_box(acc)
        });
    });

    group.bench_function("candidate_value", |b| {
        b.iter(|| {
            let mut acc = 0_i64;
            let mut offset = -2_000.0;
            while offset < 2_000.0 {
                acc += i64::from(rows.candidate_value(black_box(500), offset));
                offset += 3.3;
            }
            black_box(acc)
        });
    });

    group.finish();
}

fn bench_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("number_picker/settle");

    // Hypothesis: settle cost scales with the number of frames the spring
    // needs, which grows slowly with release velocity.
    for velocity in [0.0_f64, 1_000.0, 4_000.0, 8_000.0] {
        group.bench_with_input(
            BenchmarkId::new("fling", velocity as u64),
            &velocity,
            |b, &velocity| {
                b.iter_batched(
                    || {
                        let mut picker = NumberPicker::new(500, 0..=1_000).unwrap();
                        picker.drag_by(-27.0);
                        picker
                    },
                    |mut picker| {
                        picker.release(-velocity);
                        black_box(settle(&mut picker));
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.bench_function("pointer_drag_60_moves", |b| {
        b.iter_batched(
            || NumberPicker::new(500, 0..=1_000).unwrap(),
            |mut picker| {
                picker.pointer_down(Point::new(0.0, 1_000.0), Duration::ZERO);
                for i in 1..=60_u32 {
                    let time = Duration::from_millis(u64::from(i) * 8);
                    black_box(picker.pointer_move(Point::new(0.0, 1_000.0 - f64::from(i) * 7.0), time));
                }
                picker.pointer_up(Point::new(0.0, 580.0), Duration::from_millis(488));
                black_box(settle(&mut picker));
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_preview(c: &mut Criterion) {
    let mut picker = NumberPicker::new(30, 0..=59).unwrap();
    picker.drag_by(-57.0);
    c.bench_function("number_picker/preview", |b| {
        b.iter(|| black_box(picker.preview()));
    });
}

fn bench_time_picker(c: &mut Criterion) {
    c.bench_function("time_picker/minute_fling", |b| {
        b.iter_batched(
            || HoursPicker::new(Hours::from(FullHours { hours: 5, minutes: 30 })).unwrap(),
            |mut picker| {
                picker.drag_by(Column::Minutes, -33.0);
                picker.release(Column::Minutes, -2_500.0);
                let mut now = Duration::ZERO;
                while picker.needs_frames() {
                    black_box(picker.tick(now));
                    now += FRAME;
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_mapping,
    bench_settle,
    bench_preview,
    bench_time_picker
);
criterion_main!(benches);
