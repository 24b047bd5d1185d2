// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debounce driven by the caller's clock.

use crate::app::config::DEFAULT_SEARCH_DEBOUNCE_MS;
use std::time::{Duration, Instant};

/// Holds the latest value until no new call has arrived for `wait`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS))
    }
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Replaces any pending value and restarts the wait.
    pub fn call(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Returns the pending value once `wait` has passed since the last call.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, called_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*called_at) < self.wait {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drops the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}
