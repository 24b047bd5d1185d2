// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::app::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick, active only while something is waiting on the
/// clock: toast timers, dashboard animations or a debounced search.
pub fn create_tick_subscription(
    has_pending_timers: bool,
    animating: bool,
    search_pending: bool,
) -> Subscription<Message> {
    if has_pending_timers || animating || search_pending {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
