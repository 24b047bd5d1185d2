// SPDX-License-Identifier: MPL-2.0
//! Cooperative timer facility for notification lifecycle events.
//!
//! Timers carry plain data ([`TimerEvent`]) instead of callbacks. The host
//! event loop drains due events with [`Timer::drain_due`] and hands them back
//! to the center, which checks the current state before acting on them.
//! Deadlines are lower bounds: an event is never delivered before
//! `scheduled_at + delay`, but it may be delivered later.

use super::notification::NotificationId;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Monotonic system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Lifecycle event delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Display window elapsed; start fading out.
    Expire(NotificationId),
    /// Fade-out elapsed; detach the node.
    Detach(NotificationId),
}

impl TimerEvent {
    #[must_use]
    pub fn target(self) -> NotificationId {
        match self {
            TimerEvent::Expire(id) | TimerEvent::Detach(id) => id,
        }
    }
}

/// Cancellation token for a scheduled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Host timer facility: "deliver this event after at least `delay`".
pub trait Timer {
    /// Schedules `event` to become due after at least `delay`.
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken;

    /// Cancels a pending event. Returns `false` if it already fired or was
    /// cancelled.
    fn cancel(&mut self, token: TimerToken) -> bool;

    /// Removes and returns every event due at `now`, earliest first.
    fn drain_due(&mut self, now: Instant) -> Vec<TimerEvent>;

    /// Whether any event is still pending.
    fn has_pending(&self) -> bool;

    /// Current instant according to this timer's clock.
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone)]
struct Entry {
    token: TimerToken,
    deadline: Instant,
    event: TimerEvent,
}

/// Deadline-ordered timer queue over an injected clock.
#[derive(Debug)]
pub struct TimerQueue<C: Clock = SystemClock> {
    clock: C,
    entries: Vec<Entry>,
    next_token: u64,
}

impl TimerQueue<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimerQueue<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerQueue<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            entries: Vec::new(),
            next_token: 0,
        }
    }
}

impl<C: Clock> Timer for TimerQueue<C> {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        let deadline = self.clock.now() + delay;

        // Stable insert keeps scheduling order among equal deadlines.
        let pos = self.entries.partition_point(|e| e.deadline <= deadline);
        self.entries.insert(
            pos,
            Entry {
                token,
                deadline,
                event,
            },
        );
        token
    }

    fn cancel(&mut self, token: TimerToken) -> bool {
        match self.entries.iter().position(|e| e.token == token) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn drain_due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let due = self.entries.partition_point(|e| e.deadline <= now);
        self.entries.drain(..due).map(|e| e.event).collect()
    }

    fn has_pending(&self) -> bool {
        !self.entries.is_empty()
    }

    fn now(&self) -> Instant {
        self.clock.now()
    }
}
