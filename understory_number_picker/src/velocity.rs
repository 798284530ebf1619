// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity estimation from timestamped pointer positions.
//!
//! The estimate is the slope of a least-squares line through the recent
//! samples. Samples older than [`HORIZON`] relative to the newest one are
//! ignored, and a pause longer than [`ASSUME_STOPPED`] between two samples
//! means the pointer came to rest before release.

use core::time::Duration;

/// Samples older than this, relative to the newest, do not contribute.
pub const HORIZON: Duration = Duration::from_millis(100);

/// A gap this long between samples means the pointer had stopped.
pub const ASSUME_STOPPED: Duration = Duration::from_millis(40);

const CAPACITY: usize = 20;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time: Duration,
    position: f64,
}

/// Ring buffer of recent positions along one axis.
///
/// ```
/// use core::time::Duration;
/// use understory_number_picker::velocity::VelocityTracker;
///
/// let mut tracker = VelocityTracker::default();
/// for i in 0..5_u32 {
///     // 2 px every 10 ms is 200 px/s.
///     tracker.add_position(Duration::from_millis(u64::from(i) * 10), f64::from(i) * 2.0);
/// }
/// assert!((tracker.velocity() - 200.0).abs() < 1e-6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: [Sample; CAPACITY],
    len: usize,
    next: usize,
}

impl VelocityTracker {
    /// Records the position at `time`.
    ///
    /// Times are expected to be non-decreasing.
    pub fn add_position(&mut self, time: Duration, position: f64) {
        self.samples[self.next] = Sample { time, position };
        self.next = (self.next + 1) % CAPACITY;
        self.len = (self.len + 1).min(CAPACITY);
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.len = 0;
        self.next = 0;
    }

    /// Number of retained samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no samples are retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Estimated velocity in position units per second; `0.0` without enough data.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        if self.len < 2 {
            return 0.0;
        }
        let newest = self.samples[(self.next + CAPACITY - 1) % CAPACITY];

        let mut n = 0.0;
        let (mut sx, mut sy, mut sxx, mut sxy) = (0.0, 0.0, 0.0, 0.0);
        let mut previous = newest.time;
        for i in 0..self.len {
            let sample = self.samples[(self.next + CAPACITY - 1 - i) % CAPACITY];
            let age = newest.time.saturating_sub(sample.time);
            if age > HORIZON || previous.saturating_sub(sample.time) > ASSUME_STOPPED {
                break;
            }
            previous = sample.time;
            // Times relative to the newest sample keep the sums small.
            let x = -age.as_secs_f64();
            let y = sample.position - newest.position;
            n += 1.0;
            sx += x;
            sy += y;
            sxx += x * x;
            sxy += x * y;
        }
        if n < 2.0 {
            return 0.0;
        }
        let denominator = n * sxx - sx * sx;
        if libm::fabs(denominator) < f64::EPSILON * 1e-6 {
            return 0.0;
        }
        (n * sxy - sx * sy) / denominator
    }
}
