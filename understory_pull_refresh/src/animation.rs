// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-driven animations with named end handlers.
//!
//! The container never sleeps or spawns timers. The host advances time by
//! calling [`SwipeRefresh::tick`](crate::SwipeRefresh::tick) once per frame;
//! each running [`OffsetAnimation`] turns the elapsed time into an
//! interpolated fraction, and when it finishes the container dispatches its
//! [`Transition`].

use core::time::Duration;

/// Maps linear time progress in `[0, 1]` to animation progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Interpolator {
    /// Progress equals time.
    Linear,
    /// Starts fast and slows down: `1 - (1 - t)^(2 * factor)`.
    Decelerate(f64),
}

impl Interpolator {
    /// Interpolates `t`, which is clamped to `[0, 1]` first.
    #[must_use]
    pub fn interpolate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Decelerate(factor) => {
                let rest = 1.0 - t;
                if factor == 1.0 {
                    1.0 - rest * rest
                } else {
                    1.0 - rest.powf(2.0 * factor)
                }
            }
        }
    }
}

/// What an animation drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Moves the target from its current offset to the refreshing offset.
    ToCorrectPosition,
    /// Moves the target back to its rest offset.
    ToStartPosition,
    /// Reveals the header for a refresh started without a gesture.
    HeaderAlphaIn,
    /// Shrinks the header away after a pull that did not trigger.
    HeaderScaleDown,
}

impl AnimationKind {
    /// Returns `true` for kinds that move the target.
    #[must_use]
    pub fn moves_target(self) -> bool {
        matches!(self, Self::ToCorrectPosition | Self::ToStartPosition)
    }
}

/// Handler dispatched when an animation ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Settle the refresh: show the refreshing label and notify the listener
    /// if still refreshing, otherwise reset the header and snap the target
    /// back to rest.
    Refresh,
    /// Start the header scale-down.
    ScaleDownHeader,
    /// Hide and reset the header.
    HideHeader,
}

/// A running animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetAnimation {
    kind: AnimationKind,
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    interpolator: Interpolator,
    on_end: Option<Transition>,
}

impl OffsetAnimation {
    /// Creates an animation of `kind` lasting `duration`.
    ///
    /// The animation interpolates linearly and covers `0.0..1.0` until
    /// configured otherwise.
    #[must_use]
    pub fn new(kind: AnimationKind, duration: Duration) -> Self {
        Self {
            kind,
            from: 0.0,
            to: 1.0,
            duration,
            elapsed: Duration::ZERO,
            interpolator: Interpolator::Linear,
            on_end: None,
        }
    }

    /// Sets the start and end values.
    #[must_use]
    pub fn between(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Sets the interpolator.
    #[must_use]
    pub fn with_interpolator(mut self, interpolator: Interpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Sets the handler dispatched when the animation ends.
    #[must_use]
    pub fn then(mut self, transition: Transition) -> Self {
        self.on_end = Some(transition);
        self
    }

    /// The animation kind.
    #[must_use]
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// The end handler, if any.
    #[must_use]
    pub fn on_end(&self) -> Option<Transition> {
        self.on_end
    }

    /// Advances by `dt` and returns the new interpolated progress.
    pub fn advance(&mut self, dt: Duration) -> f64 {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        self.progress()
    }

    /// Jumps to the end and returns the final progress.
    pub fn finish(&mut self) -> f64 {
        self.elapsed = self.duration;
        self.progress()
    }

    /// Linear time fraction in `[0, 1]`.
    #[must_use]
    pub fn time_fraction(&self) -> f64 {
        if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Interpolated progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.interpolator.interpolate(self.time_fraction())
    }

    /// Current value between `from` and `to`.
    ///
    /// Lands exactly on `to` once finished.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            self.to
        } else {
            self.from + (self.to - self.from) * self.progress()
        }
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
