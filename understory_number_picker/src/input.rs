// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw pointer routing for a vertical picker.
//!
//! [`PointerRouter`] turns pointer down/move/up events into the two input
//! paths a picker understands:
//!
//! - a stream of vertical drag deltas, ended by a release velocity, once the
//!   pointer has travelled further than the touch slop;
//! - an [`EditorGesture`] (click, double click, long press) when it has not.
//!
//! ## Usage
//!
//! 1) Call [`PointerRouter::down`] on press.
//! 2) Call [`PointerRouter::moved`] for each move and forward any
//!    [`RouterEvent::Dragged`] delta.
//! 3) Call [`PointerRouter::poll`] on every frame while pressed, or while a
//!    click is pending, so long presses and held-back clicks fire on time.
//! 4) Call [`PointerRouter::up`] on release.
//!
//! A click is only known to be a single click once the double-tap timeout
//! has passed, so it comes out of `poll` rather than `up`.
//!
//! ```
//! use core::time::Duration;
//! use kurbo::Point;
//! use understory_number_picker::input::{EditorGesture, PointerRouter, RouterEvent};
//! use understory_number_picker::PickerConfig;
//!
//! let mut router = PointerRouter::new(&PickerConfig::default());
//! let ms = Duration::from_millis;
//!
//! router.down(Point::new(10.0, 100.0), ms(0));
//! assert_eq!(router.up(Point::new(10.0, 101.0), ms(80)), None);
//! assert!(router.has_pending_click());
//! assert_eq!(router.poll(ms(200)), None);
//! assert_eq!(
//!     router.poll(ms(400)),
//!     Some(RouterEvent::Gesture(EditorGesture::Click))
//! );
//!
//! router.down(Point::new(10.0, 100.0), ms(1_000));
//! assert_eq!(
//!     router.moved(Point::new(10.0, 130.0), ms(1_016)),
//!     Some(RouterEvent::Dragged(22.0))
//! );
//! ```

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::config::PickerConfig;
use crate::velocity::VelocityTracker;

/// The raw gestures that open the edit dialog.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditorGesture {
    /// A press and release without dragging, with no second press within
    /// the double-tap timeout.
    Click,
    /// A second press within the double-tap timeout of a click, released
    /// without dragging.
    DoubleClick,
    /// A press held past the long-press timeout.
    LongPress,
}

/// Decides which raw gestures open the edit dialog.
///
/// Every gesture kind opens it and they all behave the same; the mapping is
/// spelled out so each kind is visibly accounted for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenEditorPolicy;

impl OpenEditorPolicy {
    /// Returns `true` if `gesture` opens the editor.
    #[must_use]
    pub fn opens_editor(self, gesture: EditorGesture) -> bool {
        match gesture {
            EditorGesture::Click | EditorGesture::DoubleClick | EditorGesture::LongPress => true,
        }
    }
}

/// Output of the [`PointerRouter`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RouterEvent {
    /// The pointer moved vertically by this many pixels while dragging.
    Dragged(f64),
    /// The drag ended with this vertical release velocity, in pixels per second.
    DragEnded {
        /// Release velocity, clamped to the configured maximum.
        velocity: f64,
    },
    /// A non-drag gesture was recognised.
    Gesture(EditorGesture),
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Pressed {
        origin: Point,
        at: Duration,
        long_press_fired: bool,
        /// The pointer left the slop sideways; the press is no longer a click.
        wandered: bool,
    },
    Dragging {
        last: Point,
    },
}

/// Routes pointer events of one picker into drag deltas or editor gestures.
///
/// A click is held back until the double-tap timeout has passed without a
/// second press, and is then reported by [`PointerRouter::poll`]. A second
/// press within the timeout turns the pair into a double click on release.
#[derive(Clone, Debug)]
pub struct PointerRouter {
    phase: Phase,
    tracker: VelocityTracker,
    pending_click: Option<Duration>,
    touch_slop: f64,
    long_press_timeout: Duration,
    double_tap_timeout: Duration,
    max_fling_velocity: f64,
}

impl PointerRouter {
    /// Creates a router using the thresholds in `config`.
    #[must_use]
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            phase: Phase::Idle,
            tracker: VelocityTracker::default(),
            pending_click: None,
            touch_slop: config.touch_slop,
            long_press_timeout: config.long_press_timeout,
            double_tap_timeout: config.double_tap_timeout,
            max_fling_velocity: config.max_fling_velocity,
        }
    }

    /// Returns `true` while the pointer is down.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Returns `true` once the press has turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns `true` while a click waits to see whether a second one follows.
    #[must_use]
    pub fn has_pending_click(&self) -> bool {
        self.pending_click.is_some()
    }

    /// Pointer pressed at `pos`.
    pub fn down(&mut self, pos: Point, time: Duration) {
        self.tracker.reset();
        self.tracker.add_position(time, pos.y);
        self.phase = Phase::Pressed {
            origin: pos,
            at: time,
            long_press_fired: false,
            wandered: false,
        };
    }

    /// Pointer moved to `pos`.
    ///
    /// Returns the vertical delta once dragging. The first delta is the
    /// travel beyond the touch slop. Sideways travel past the slop does not
    /// drag but turns the press into nothing.
    pub fn moved(&mut self, pos: Point, time: Duration) -> Option<RouterEvent> {
        match &mut self.phase {
            Phase::Idle => None,
            Phase::Pressed {
                origin, wandered, ..
            } => {
                self.tracker.add_position(time, pos.y);
                let travel: Vec2 = pos - *origin;
                if libm::fabs(travel.x) > self.touch_slop {
                    *wandered = true;
                }
                if libm::fabs(travel.y) <= self.touch_slop {
                    return None;
                }
                self.phase = Phase::Dragging { last: pos };
                self.pending_click = None;
                let overflow = travel.y - libm::copysign(self.touch_slop, travel.y);
                Some(RouterEvent::Dragged(overflow))
            }
            Phase::Dragging { last } => {
                self.tracker.add_position(time, pos.y);
                let delta: Vec2 = pos - *last;
                *last = pos;
                (delta.y != 0.0).then_some(RouterEvent::Dragged(delta.y))
            }
        }
    }

    /// Fires a long press once the pointer has been held long enough, and a
    /// held-back click once no second press came in time.
    pub fn poll(&mut self, now: Duration) -> Option<RouterEvent> {
        if let Phase::Pressed {
            at,
            long_press_fired,
            wandered: false,
            ..
        } = &mut self.phase
            && !*long_press_fired
            && now.saturating_sub(*at) >= self.long_press_timeout
        {
            *long_press_fired = true;
            self.pending_click = None;
            return Some(RouterEvent::Gesture(EditorGesture::LongPress));
        }
        let first = self.pending_click?;
        let second_press_in_time = match self.phase {
            Phase::Pressed { at, .. } => at.saturating_sub(first) <= self.double_tap_timeout,
            Phase::Idle | Phase::Dragging { .. } => false,
        };
        if second_press_in_time || now.saturating_sub(first) <= self.double_tap_timeout {
            return None;
        }
        self.pending_click = None;
        Some(RouterEvent::Gesture(EditorGesture::Click))
    }

    /// Pointer released at `pos`.
    ///
    /// A plain click is not returned here; it is held back for
    /// [`PointerRouter::poll`]. A click left over from an earlier release
    /// that was never polled is returned instead.
    pub fn up(&mut self, pos: Point, time: Duration) -> Option<RouterEvent> {
        let phase = core::mem::replace(&mut self.phase, Phase::Idle);
        match phase {
            Phase::Idle => None,
            Phase::Dragging { .. } => {
                self.tracker.add_position(time, pos.y);
                let max = self.max_fling_velocity;
                let velocity = self.tracker.velocity().clamp(-max, max);
                self.tracker.reset();
                Some(RouterEvent::DragEnded { velocity })
            }
            Phase::Pressed {
                at,
                long_press_fired,
                wandered,
                ..
            } => {
                if long_press_fired || wandered {
                    self.pending_click = None;
                    return None;
                }
                if time.saturating_sub(at) >= self.long_press_timeout {
                    self.pending_click = None;
                    return Some(RouterEvent::Gesture(EditorGesture::LongPress));
                }
                match self.pending_click.replace(time) {
                    Some(first) if at.saturating_sub(first) <= self.double_tap_timeout => {
                        self.pending_click = None;
                        Some(RouterEvent::Gesture(EditorGesture::DoubleClick))
                    }
                    Some(_) => Some(RouterEvent::Gesture(EditorGesture::Click)),
                    None => None,
                }
            }
        }
    }

    /// Abandons the current press and any held-back click.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.pending_click = None;
        self.tracker.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn router() -> PointerRouter {
        PointerRouter::new(&PickerConfig::default())
    }

    #[test]
    fn every_gesture_opens_the_editor() {
        let policy = OpenEditorPolicy;
        assert!(policy.opens_editor(EditorGesture::Click));
        assert!(policy.opens_editor(EditorGesture::DoubleClick));
        assert!(policy.opens_editor(EditorGesture::LongPress));
    }

    #[test]
    fn small_jitter_is_still_a_click() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        assert_eq!(r.moved(Point::new(3.0, 5.0), ms(10)), None);
        assert!(!r.is_dragging());
        assert_eq!(r.up(Point::new(3.0, 5.0), ms(20)), None);
        assert!(!r.is_pressed());
        assert!(r.has_pending_click());
        assert_eq!(r.poll(ms(320)), None);
        assert_eq!(
            r.poll(ms(321)),
            Some(RouterEvent::Gesture(EditorGesture::Click))
        );
        assert!(!r.has_pending_click());
        assert_eq!(r.poll(ms(400)), None);
    }

    #[test]
    fn horizontal_travel_does_not_start_a_drag() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        assert_eq!(r.moved(Point::new(50.0, 2.0), ms(10)), None);
        assert!(!r.is_dragging());
    }

    #[test]
    fn sideways_travel_cancels_the_click() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        r.moved(Point::new(50.0, 2.0), ms(10));
        // Coming back inside the slop does not restore it.
        r.moved(Point::new(1.0, 0.0), ms(20));
        assert_eq!(r.up(Point::new(1.0, 0.0), ms(30)), None);
        assert!(!r.has_pending_click());
        assert_eq!(r.poll(ms(1_000)), None);
    }

    #[test]
    fn sideways_travel_cancels_the_long_press() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        r.moved(Point::new(-20.0, 0.0), ms(10));
        assert_eq!(r.poll(ms(600)), None);
        assert_eq!(r.up(Point::new(-20.0, 0.0), ms(900)), None);
    }

    #[test]
    fn vertical_travel_after_wandering_still_drags() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        r.moved(Point::new(20.0, 0.0), ms(10));
        assert_eq!(
            r.moved(Point::new(20.0, 18.0), ms(20)),
            Some(RouterEvent::Dragged(10.0))
        );
        assert!(matches!(
            r.up(Point::new(20.0, 18.0), ms(30)),
            Some(RouterEvent::DragEnded { .. })
        ));
    }

    #[test]
    fn drag_deltas_follow_the_pointer() {
        let mut r = router();
        r.down(Point::new(0.0, 100.0), ms(0));
        assert_eq!(
            r.moved(Point::new(0.0, 88.0), ms(8)),
            Some(RouterEvent::Dragged(-4.0))
        );
        assert!(r.is_dragging());
        assert_eq!(
            r.moved(Point::new(0.0, 80.0), ms(16)),
            Some(RouterEvent::Dragged(-8.0))
        );
        assert_eq!(r.moved(Point::new(5.0, 80.0), ms(24)), None);
    }

    #[test]
    fn release_reports_velocity() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        for i in 1..=5_u32 {
            r.moved(Point::new(0.0, f64::from(i) * 20.0), ms(u64::from(i) * 10));
        }
        let Some(RouterEvent::DragEnded { velocity }) = r.up(Point::new(0.0, 120.0), ms(60)) else {
            panic!("expected drag end");
        };
        assert!(libm::fabs(velocity - 2_000.0) < 1e-6, "{velocity}");
    }

    #[test]
    fn release_velocity_is_clamped() {
        let mut r = router();
        r.down(Point::new(0.0, 0.0), ms(0));
        r.moved(Point::new(0.0, 500.0), ms(1));
        let Some(RouterEvent::DragEnded { velocity }) = r.up(Point::new(0.0, 1_000.0), ms(2)) else {
            panic!("expected drag end");
        };
        assert_eq!(velocity, 8_000.0);
    }

    #[test]
    fn second_click_in_time_is_a_double_click() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        assert_eq!(r.up(Point::ZERO, ms(50)), None);
        assert_eq!(r.poll(ms(100)), None);
        r.down(Point::ZERO, ms(150));
        // Held past the first click's timeout, still waiting on this press.
        assert_eq!(r.poll(ms(400)), None);
        assert_eq!(
            r.up(Point::ZERO, ms(420)),
            Some(RouterEvent::Gesture(EditorGesture::DoubleClick))
        );
        assert!(!r.has_pending_click());
        // The pair is consumed; a third click starts over.
        r.down(Point::ZERO, ms(460));
        assert_eq!(r.up(Point::ZERO, ms(500)), None);
        assert_eq!(
            r.poll(ms(900)),
            Some(RouterEvent::Gesture(EditorGesture::Click))
        );
    }

    #[test]
    fn drag_after_a_click_drops_it() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        r.up(Point::ZERO, ms(50));
        r.down(Point::ZERO, ms(120));
        r.moved(Point::new(0.0, 30.0), ms(130));
        assert!(!r.has_pending_click());
        assert_eq!(r.poll(ms(1_000)), None);
    }

    #[test]
    fn slow_second_click_is_a_click() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        r.up(Point::ZERO, ms(50));
        // The host never polled: the stale click comes out on the next release.
        r.down(Point::ZERO, ms(600));
        assert_eq!(
            r.up(Point::ZERO, ms(650)),
            Some(RouterEvent::Gesture(EditorGesture::Click))
        );
        assert!(r.has_pending_click());
        assert_eq!(
            r.poll(ms(1_000)),
            Some(RouterEvent::Gesture(EditorGesture::Click))
        );
    }

    #[test]
    fn held_press_fires_long_press_once() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        assert_eq!(r.poll(ms(300)), None);
        assert_eq!(
            r.poll(ms(500)),
            Some(RouterEvent::Gesture(EditorGesture::LongPress))
        );
        assert_eq!(r.poll(ms(700)), None);
        assert_eq!(r.up(Point::ZERO, ms(800)), None);
    }

    #[test]
    fn late_release_without_polling_is_a_long_press() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        assert_eq!(
            r.up(Point::ZERO, ms(900)),
            Some(RouterEvent::Gesture(EditorGesture::LongPress))
        );
    }

    #[test]
    fn cancel_drops_the_press() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        r.moved(Point::new(0.0, 40.0), ms(10));
        r.cancel();
        assert_eq!(r.up(Point::new(0.0, 60.0), ms(20)), None);
    }

    #[test]
    fn cancel_drops_a_pending_click() {
        let mut r = router();
        r.down(Point::ZERO, ms(0));
        r.up(Point::ZERO, ms(20));
        r.cancel();
        assert!(!r.has_pending_click());
        assert_eq!(r.poll(ms(1_000)), None);
    }
}
