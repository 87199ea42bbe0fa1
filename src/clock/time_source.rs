// SPDX-License-Identifier: MPL-2.0
//! Where clocks get "now" from, and how often they ask.
//!
//! The tick cadence itself is an iced subscription (see
//! [`tick_subscription`]). Each clock view owns one, identified by its clock
//! id, so dropping the view from the subscription set stops its timer.

use crate::dashboard::ClockId;
use chrono::{DateTime, Utc};
use iced::{time, Subscription};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Interval between two ticks of a clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Supplies the current instant.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A hand-driven clock. Clones share the same instant, so a test can keep
/// one handle while the application owns another.
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    current: Rc<Cell<DateTime<Utc>>>,
}

impl ManualTimeSource {
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Rc::new(Cell::new(start)),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.current.set(instant);
    }

    /// Moves the shared instant forward by `step`.
    pub fn advance(&self, step: Duration) {
        let step = chrono::Duration::from_std(step).unwrap_or(chrono::Duration::zero());
        self.current.set(self.current.get() + step);
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

/// Repeating timer for a single clock.
///
/// The clock id is folded into the subscription identity, so every clock
/// gets its own timer and removing one leaves the others running.
pub fn tick_subscription(id: ClockId) -> Subscription<(ClockId, Instant)> {
    time::every(TICK_INTERVAL).with(id)
}

/// Whether a tick fired at `fired_at` is being handled more than one
/// interval late.
#[must_use]
pub fn is_overrun(fired_at: Instant, handled_at: Instant) -> bool {
    handled_at.saturating_duration_since(fired_at) > TICK_INTERVAL
}
