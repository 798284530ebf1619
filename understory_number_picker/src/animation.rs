// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven scalar animation: exponential decay and springs.
//!
//! [`Animatable`] holds a single `f64` (the picker's offset) and advances it
//! when the host calls [`Animatable::tick`] with the current frame time. It
//! never schedules anything itself. An animation starts on the first tick
//! after it was requested and can be cancelled at any point with
//! [`Animatable::stop`] or [`Animatable::snap_to`].
//!
//! ## Minimal example
//!
//! ```
//! use core::time::Duration;
//! use understory_number_picker::animation::{Animatable, Frame, SpringSpec};
//!
//! let mut offset = Animatable::new(0.0);
//! offset.animate_to(40.0, SpringSpec::default(), 0.0);
//!
//! let mut now = Duration::ZERO;
//! loop {
//!     match offset.tick(now) {
//!         Frame::Running => now += Duration::from_millis(16),
//!         Frame::Ended(_) | Frame::Idle => break,
//!     }
//! }
//! assert_eq!(offset.value(), 40.0);
//! ```

use core::time::Duration;

/// Friction coefficient applied per unit of decay friction multiplier.
const EXPONENTIAL_DECAY_FRICTION: f64 = 4.2;

/// Exponential velocity decay, used to project where a fling would coast to.
///
/// Velocities are in units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecaySpec {
    friction: f64,
    velocity_threshold: f64,
}

impl Default for DecaySpec {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DecaySpec {
    /// Creates a decay with the given friction multiplier.
    ///
    /// Higher multipliers stop sooner. Values below `0.0001` are raised to it.
    #[must_use]
    pub fn new(friction_multiplier: f64) -> Self {
        Self {
            friction: EXPONENTIAL_DECAY_FRICTION * friction_multiplier.max(0.0001),
            velocity_threshold: 0.1,
        }
    }

    /// Sets the speed below which the motion counts as stopped.
    #[must_use]
    pub fn with_velocity_threshold(mut self, threshold: f64) -> Self {
        self.velocity_threshold = libm::fabs(threshold).max(1e-7);
        self
    }

    /// Effective friction coefficient.
    #[must_use]
    pub fn friction(&self) -> f64 {
        self.friction
    }

    /// Where a motion starting at `initial` with `velocity` comes to rest.
    #[must_use]
    pub fn target(&self, initial: f64, velocity: f64) -> f64 {
        if libm::fabs(velocity) <= self.velocity_threshold {
            initial
        } else {
            initial + velocity / self.friction
        }
    }

    /// Position `elapsed` seconds into the motion.
    #[must_use]
    pub fn value_at(&self, initial: f64, velocity: f64, elapsed: f64) -> f64 {
        let coast = velocity / self.friction;
        initial + coast - coast * libm::exp(-self.friction * elapsed)
    }

    /// Velocity `elapsed` seconds into the motion.
    #[must_use]
    pub fn velocity_at(&self, velocity: f64, elapsed: f64) -> f64 {
        velocity * libm::exp(-self.friction * elapsed)
    }

    /// Seconds until the velocity falls to the stop threshold.
    #[must_use]
    pub fn duration(&self, velocity: f64) -> f64 {
        let speed = libm::fabs(velocity);
        if speed <= self.velocity_threshold {
            0.0
        } else {
            libm::log(speed / self.velocity_threshold) / self.friction
        }
    }
}

/// Damped spring pulling a value toward a target, with unit mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    damping_ratio: f64,
    stiffness: f64,
    visibility_threshold: f64,
}

impl Default for SpringSpec {
    /// Critically damped, medium stiffness, settling within a hundredth of a pixel.
    fn default() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            visibility_threshold: 0.01,
        }
    }
}

impl SpringSpec {
    /// Creates a spring. Non-positive parameters fall back to the defaults.
    #[must_use]
    pub fn new(damping_ratio: f64, stiffness: f64) -> Self {
        let defaults = Self::default();
        Self {
            damping_ratio: if damping_ratio > 0.0 {
                damping_ratio
            } else {
                defaults.damping_ratio
            },
            stiffness: if stiffness > 0.0 {
                stiffness
            } else {
                defaults.stiffness
            },
            visibility_threshold: defaults.visibility_threshold,
        }
    }

    /// Sets the distance and speed under which the spring counts as settled.
    #[must_use]
    pub fn with_visibility_threshold(mut self, threshold: f64) -> Self {
        self.visibility_threshold = libm::fabs(threshold).max(1e-9);
        self
    }

    /// Damping ratio; `1.0` is critical damping.
    #[must_use]
    pub fn damping_ratio(&self) -> f64 {
        self.damping_ratio
    }

    /// Spring constant.
    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    /// Settle threshold.
    #[must_use]
    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    /// Displacement from the target and velocity `elapsed` seconds after
    /// starting at `displacement` with `velocity`.
    #[must_use]
    pub fn state_at(&self, displacement: f64, velocity: f64, elapsed: f64) -> (f64, f64) {
        let omega = libm::sqrt(self.stiffness);
        let zeta = self.damping_ratio;
        let t = elapsed;
        if libm::fabs(zeta - 1.0) < 1e-9 {
            let c1 = displacement;
            let c2 = velocity + omega * displacement;
            let decay = libm::exp(-omega * t);
            let x = (c1 + c2 * t) * decay;
            let v = (c2 - omega * (c1 + c2 * t)) * decay;
            (x, v)
        } else if zeta > 1.0 {
            let root = libm::sqrt(zeta * zeta - 1.0);
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (velocity - r1 * displacement) / (r2 - r1);
            let c1 = displacement - c2;
            let e1 = libm::exp(r1 * t);
            let e2 = libm::exp(r2 * t);
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else {
            let damped = omega * libm::sqrt(1.0 - zeta * zeta);
            let a = displacement;
            let b = (velocity + zeta * omega * displacement) / damped;
            let envelope = libm::exp(-zeta * omega * t);
            let (sin, cos) = (libm::sin(damped * t), libm::cos(damped * t));
            let x = envelope * (a * cos + b * sin);
            let v = envelope * (-zeta * omega * (a * cos + b * sin) + damped * (b * cos - a * sin));
            (x, v)
        }
    }

    fn is_settled(&self, displacement: f64, velocity: f64) -> bool {
        libm::fabs(displacement) < self.visibility_threshold
            && libm::fabs(velocity) < self.visibility_threshold
    }
}

/// Why an animation stopped on its own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The animation reached its natural end value.
    Finished,
    /// The value hit one of the bounds and was clamped there.
    BoundReached,
}

/// Result of advancing an [`Animatable`] by one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Nothing is animating.
    Idle,
    /// The animation advanced and needs another frame.
    Running,
    /// The animation ended during this frame.
    Ended(AnimationEnd),
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Spring {
        spec: SpringSpec,
        target: f64,
        displacement: f64,
        velocity: f64,
    },
    Decay {
        spec: DecaySpec,
        initial: f64,
        velocity: f64,
    },
}

#[derive(Clone, Copy, Debug)]
struct Running {
    motion: Motion,
    started: Option<Duration>,
}

/// A bounded `f64` that can be snapped or animated.
#[derive(Clone, Debug)]
pub struct Animatable {
    value: f64,
    velocity: f64,
    lower: f64,
    upper: f64,
    running: Option<Running>,
}

impl Animatable {
    /// Creates an unbounded animatable at `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            velocity: 0.0,
            lower: f64::NEG_INFINITY,
            upper: f64::INFINITY,
            running: None,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Current velocity, zero when idle.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Lower and upper bound.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// Replaces the bounds and clamps the current value into them.
    ///
    /// Swapped bounds are reordered.
    pub fn update_bounds(&mut self, lower: f64, upper: f64) {
        let (lower, upper) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };
        self.lower = lower;
        self.upper = upper;
        self.value = self.value.clamp(lower, upper);
    }

    /// Cancels any animation and jumps to `value`, clamped to the bounds.
    pub fn snap_to(&mut self, value: f64) {
        self.stop();
        self.value = value.clamp(self.lower, self.upper);
    }

    /// Cancels any animation in flight, leaving the value where it is.
    ///
    /// Returns `true` if an animation was cancelled.
    pub fn stop(&mut self) -> bool {
        self.velocity = 0.0;
        self.running.take().is_some()
    }

    /// Springs toward `target`, starting with `initial_velocity`.
    ///
    /// Replaces any animation in flight.
    pub fn animate_to(&mut self, target: f64, spec: SpringSpec, initial_velocity: f64) {
        self.velocity = initial_velocity;
        self.running = Some(Running {
            motion: Motion::Spring {
                spec,
                target,
                displacement: self.value - target,
                velocity: initial_velocity,
            },
            started: None,
        });
    }

    /// Coasts from the current value with `initial_velocity` until it decays away.
    ///
    /// Replaces any animation in flight.
    pub fn animate_decay(&mut self, spec: DecaySpec, initial_velocity: f64) {
        self.velocity = initial_velocity;
        self.running = Some(Running {
            motion: Motion::Decay {
                spec,
                initial: self.value,
                velocity: initial_velocity,
            },
            started: None,
        });
    }

    /// Advances the animation to frame time `now`.
    ///
    /// The first tick after an animation was requested fixes its start time.
    pub fn tick(&mut self, now: Duration) -> Frame {
        let Some(running) = self.running.as_mut() else {
            return Frame::Idle;
        };
        let started = *running.started.get_or_insert(now);
        let elapsed = now.saturating_sub(started).as_secs_f64();

        let (value, velocity, finished) = match running.motion {
            Motion::Spring {
                spec,
                target,
                displacement,
                velocity,
            } => {
                let (x, v) = spec.state_at(displacement, velocity, elapsed);
                if spec.is_settled(x, v) {
                    (target, 0.0, true)
                } else {
                    (target + x, v, false)
                }
            }
            Motion::Decay {
                spec,
                initial,
                velocity,
            } => {
                if elapsed >= spec.duration(velocity) {
                    (spec.target(initial, velocity), 0.0, true)
                } else {
                    (
                        spec.value_at(initial, velocity, elapsed),
                        spec.velocity_at(velocity, elapsed),
                        false,
                    )
                }
            }
        };

        if value < self.lower || value > self.upper {
            self.value = value.clamp(self.lower, self.upper);
            self.velocity = 0.0;
            self.running = None;
            return Frame::Ended(AnimationEnd::BoundReached);
        }

        self.value = value;
        self.velocity = velocity;
        if finished {
            self.running = None;
            Frame::Ended(AnimationEnd::Finished)
        } else {
            Frame::Running
        }
    }
}
