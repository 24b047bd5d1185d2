// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Center` owns the ordered sequence of live notifications, renders them
//! onto an injected [`Surface`], and drives their lifecycle through an
//! injected [`Timer`]. Each notification goes `Visible -> Dismissing ->
//! Removed` on its own timers, or straight to `Removed` on manual dismissal.

use super::markup;
use super::notification::{Lifecycle, Notification, NotificationId, Severity};
use super::surface::{RenderError, Surface, ToastLayer, ToastNode};
use super::timer::{Timer, TimerEvent, TimerQueue, TimerToken};
use crate::app::config::{
    DEFAULT_NOTIFICATION_DISPLAY_MS, DEFAULT_NOTIFICATION_FADE_MS, NotificationsConfig,
};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Deliver due timer events.
    Tick(Instant),
}

/// Timing and rendering policy for a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSettings {
    /// How long a toast stays fully visible.
    pub display: Duration,
    /// Length of the fade-out phase. Zero removes the toast as soon as it expires.
    pub fade: Duration,
    /// Escape markup-significant characters in messages.
    pub escape_markup: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            display: Duration::from_millis(DEFAULT_NOTIFICATION_DISPLAY_MS),
            fade: Duration::from_millis(DEFAULT_NOTIFICATION_FADE_MS),
            escape_markup: true,
        }
    }
}

impl From<&NotificationsConfig> for NotificationSettings {
    fn from(config: &NotificationsConfig) -> Self {
        let defaults = Self::default();
        Self {
            display: config
                .display_ms
                .map_or(defaults.display, Duration::from_millis),
            fade: config.fade_ms.map_or(defaults.fade, Duration::from_millis),
            escape_markup: config.escape_markup.unwrap_or(defaults.escape_markup),
        }
    }
}

/// Handle returned by `notify`, used for manual dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(NotificationId);

impl NotificationHandle {
    #[must_use]
    pub fn id(self) -> NotificationId {
        self.0
    }
}

impl From<NotificationId> for NotificationHandle {
    fn from(id: NotificationId) -> Self {
        Self(id)
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    timer: Option<TimerToken>,
}

/// Owns the toasts of one page and their container.
#[derive(Debug)]
pub struct Center<S: Surface = ToastLayer, T: Timer = TimerQueue> {
    settings: NotificationSettings,
    surface: S,
    timer: T,
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for Center {
    fn default() -> Self {
        Self::new(ToastLayer::new(), TimerQueue::new())
    }
}

impl<S: Surface, T: Timer> Center<S, T> {
    /// Creates a center with default timing over the given surface and timer.
    pub fn new(surface: S, timer: T) -> Self {
        Self::with_settings(surface, timer, NotificationSettings::default())
    }

    pub fn with_settings(surface: S, timer: T, settings: NotificationSettings) -> Self {
        Self {
            settings,
            surface,
            timer,
            entries: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub fn settings(&self) -> NotificationSettings {
        self.settings
    }

    /// Replaces the policy. Already scheduled timers keep their deadlines.
    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Shows a toast. Rendering failures drop the notification and are logged;
    /// they never reach the caller.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> Option<NotificationHandle> {
        match self.try_notify(message, severity) {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(%err, %severity, "dropping notification");
                None
            }
        }
    }

    /// Like [`notify`](Self::notify) with the severity given by name.
    /// Unknown names fall back to info.
    pub fn notify_named(
        &mut self,
        message: impl Into<String>,
        severity: &str,
    ) -> Option<NotificationHandle> {
        self.notify(message, Severity::from_name_or_default(severity))
    }

    /// Shows a toast, reporting rendering failures.
    pub fn try_notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
    ) -> Result<NotificationHandle, RenderError> {
        let message = message.into();
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let body = if self.settings.escape_markup {
            markup::escape(&message)
        } else {
            message.clone()
        };

        self.surface.ensure_container()?;
        self.surface
            .append(ToastNode::new(id, severity, body).with_text(message.as_str()))?;

        let created_at = self.timer.now();
        let token = self
            .timer
            .schedule(self.settings.display, TimerEvent::Expire(id));
        self.entries.push(Entry {
            notification: Notification::new(id, severity, message, created_at),
            timer: Some(token),
        });

        tracing::debug!(%id, %severity, "notification shown");
        Ok(NotificationHandle(id))
    }

    /// Removes a notification immediately.
    ///
    /// Returns `false` (and does nothing) if it is already removed.
    pub fn dismiss(&mut self, handle: NotificationHandle) -> bool {
        let id = handle.id();
        let Some(pos) = self.position(id) else {
            return false;
        };
        let mut entry = self.entries.remove(pos);
        entry.notification.apply(Lifecycle::dismiss);
        if let Some(token) = entry.timer.take() {
            self.timer.cancel(token);
        }
        self.surface.remove(id);
        tracing::debug!(%id, "notification dismissed");
        true
    }

    /// Dismisses every live notification.
    pub fn clear(&mut self) {
        let ids: Vec<NotificationId> = self.entries.iter().map(|e| e.notification.id()).collect();
        for id in ids {
            self.dismiss(NotificationHandle(id));
        }
    }

    /// Delivers every timer event due at `now`.
    ///
    /// Returns how many events changed a notification's state.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        for event in self.timer.drain_due(now) {
            if self.handle_timer(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Applies one timer event. Events for notifications that have moved on
    /// (for example after a manual dismissal) are ignored.
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        let id = event.target();
        let Some(pos) = self.position(id) else {
            return false;
        };

        match event {
            TimerEvent::Expire(_) => {
                if !self.entries[pos].notification.apply(Lifecycle::expire) {
                    return false;
                }
                if self.settings.fade.is_zero() {
                    self.detach(pos);
                } else {
                    self.surface.mark_fading(id);
                    let token = self
                        .timer
                        .schedule(self.settings.fade, TimerEvent::Detach(id));
                    self.entries[pos].timer = Some(token);
                    tracing::debug!(%id, "notification fading");
                }
                true
            }
            TimerEvent::Detach(_) => {
                if self.entries[pos].notification.state() != Lifecycle::Dismissing {
                    return false;
                }
                self.detach(pos);
                true
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(NotificationHandle(*id));
            }
            Message::Tick(now) => {
                self.tick(*now);
            }
        }
    }

    /// Current lifecycle state, or `None` for a handle this center never issued.
    #[must_use]
    pub fn state(&self, handle: NotificationHandle) -> Option<Lifecycle> {
        let id = handle.id();
        match self.position(id) {
            Some(pos) => Some(self.entries[pos].notification.state()),
            None if id.raw() < self.next_id => Some(Lifecycle::Removed),
            None => None,
        }
    }

    /// Live notifications in display order (oldest first).
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter().map(|e| &e.notification)
    }

    pub fn get(&self, handle: NotificationHandle) -> Option<&Notification> {
        self.position(handle.id())
            .map(|pos| &self.entries[pos].notification)
    }

    /// Number of live notifications (visible or fading).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a timer is still pending, i.e. the host should keep ticking.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.timer.has_pending()
    }

    fn position(&self, id: NotificationId) -> Option<usize> {
        self.entries.iter().position(|e| e.notification.id() == id)
    }

    fn detach(&mut self, pos: usize) {
        let mut entry = self.entries.remove(pos);
        let id = entry.notification.id();
        if entry.notification.state() == Lifecycle::Visible {
            entry.notification.apply(Lifecycle::expire);
        }
        entry.notification.apply(Lifecycle::detach);
        self.surface.remove(id);
        tracing::debug!(%id, "notification removed");
    }
}
