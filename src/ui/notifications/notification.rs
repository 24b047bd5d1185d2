// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, the `Severity` enum and the
//! per-notification `Lifecycle` state machine.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Unique identifier for a notification.
///
/// Identifiers are issued by a [`Center`](super::Center) in increasing order,
/// so a center can tell apart notifications it has removed from ones it never
/// issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw numeric value of this ID.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification-{}", self.0)
    }
}

/// Severity level selects the icon and color of a toast. It has no other
/// semantic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

/// Returned when a severity name is not one of the four known values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSeverity(pub String);

impl fmt::Display for UnknownSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown notification severity: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSeverity {}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the lowercase name used in CSS class names and on the CLI.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Parses a severity name, falling back to [`Severity::Info`] for
    /// anything unrecognized.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownSeverity| {
            tracing::warn!(%err, "falling back to info severity");
            Severity::Info
        })
    }

    /// Font Awesome icon class for this severity.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Severity::Success => "fa-check-circle",
            Severity::Error => "fa-exclamation-circle",
            Severity::Warning => "fa-exclamation-triangle",
            Severity::Info => "fa-info-circle",
        }
    }

    /// Glyph drawn by the desktop toast in place of the icon font.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "\u{2714}",
            Severity::Error => "\u{2716}",
            Severity::Warning => "\u{26A0}",
            Severity::Info => "\u{2139}",
        }
    }

    /// Accent color as a CSS hex string.
    #[must_use]
    pub fn color_hex(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Warning => "#f59e0b",
            Severity::Info => "#0ea5e9",
        }
    }

    /// Accent color for the desktop toast.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Info => palette::INFO_500,
        }
    }
}

impl FromStr for Severity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Severity::Success),
            "error" => Ok(Severity::Error),
            "warning" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of a single notification.
///
/// `Removed` is terminal. Each transition returns `None` when it is not
/// permitted from the current state, so callers can treat late timer events
/// as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Visible,
    Dismissing,
    Removed,
}

impl Lifecycle {
    /// Display window elapsed.
    #[must_use]
    pub fn expire(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Visible => Some(Lifecycle::Dismissing),
            Lifecycle::Dismissing | Lifecycle::Removed => None,
        }
    }

    /// Fade-out elapsed.
    #[must_use]
    pub fn detach(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Dismissing => Some(Lifecycle::Removed),
            Lifecycle::Visible | Lifecycle::Removed => None,
        }
    }

    /// Manual dismissal from any live state.
    #[must_use]
    pub fn dismiss(self) -> Option<Lifecycle> {
        match self {
            Lifecycle::Visible | Lifecycle::Dismissing => Some(Lifecycle::Removed),
            Lifecycle::Removed => None,
        }
    }

    /// Whether a node for this notification belongs on the surface.
    #[must_use]
    pub fn is_live(self) -> bool {
        !matches!(self, Lifecycle::Removed)
    }
}

/// A notification owned by a center.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
    state: Lifecycle,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        severity: Severity,
        message: impl Into<String>,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            severity,
            message: message.into(),
            created_at,
            state: Lifecycle::Visible,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The message exactly as passed to `notify`, before any escaping.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// Applies a transition, returning whether it was permitted.
    pub(crate) fn apply(&mut self, transition: fn(Lifecycle) -> Option<Lifecycle>) -> bool {
        match transition(self.state) {
            Some(next) => {
                self.state = next;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors: Vec<Color> = Severity::ALL.iter().map(|s| s.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn success_and_error_pairings_match_legacy_styles() {
        assert_eq!(Severity::Success.icon_class(), "fa-check-circle");
        assert_eq!(Severity::Success.color_hex(), "#10b981");
        assert_eq!(Severity::Error.icon_class(), "fa-exclamation-circle");
        assert_eq!(Severity::Error.color_hex(), "#ef4444");
        assert_eq!(Severity::Warning.icon_class(), "fa-exclamation-triangle");
        assert_eq!(Severity::Info.color_hex(), "#0ea5e9");
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        assert_eq!("success".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!(" Error ".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARNING".parse::<Severity>(), Ok(Severity::Warning));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn unknown_name_falls_back_to_info() {
        assert_eq!(Severity::from_name_or_default("critical"), Severity::Info);
        assert_eq!(Severity::from_name_or_default(""), Severity::Info);
        assert_eq!(Severity::from_name_or_default("error"), Severity::Error);
    }

    #[test]
    fn default_severity_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn lifecycle_follows_two_phase_dismissal() {
        let dismissing = Lifecycle::Visible.expire().unwrap();
        assert_eq!(dismissing, Lifecycle::Dismissing);
        assert_eq!(dismissing.detach(), Some(Lifecycle::Removed));
    }

    #[test]
    fn removed_is_terminal() {
        let removed = Lifecycle::Removed;
        assert_eq!(removed.expire(), None);
        assert_eq!(removed.detach(), None);
        assert_eq!(removed.dismiss(), None);
        assert!(!removed.is_live());
    }

    #[test]
    fn detach_requires_dismissing() {
        assert_eq!(Lifecycle::Visible.detach(), None);
        assert_eq!(Lifecycle::Dismissing.expire(), None);
    }

    #[test]
    fn manual_dismiss_from_any_live_state() {
        assert_eq!(Lifecycle::Visible.dismiss(), Some(Lifecycle::Removed));
        assert_eq!(Lifecycle::Dismissing.dismiss(), Some(Lifecycle::Removed));
    }

    #[test]
    fn apply_reports_whether_transition_happened() {
        let mut n = Notification::new(
            NotificationId::from_raw(1),
            Severity::Info,
            "hi",
            Instant::now(),
        );
        assert!(!n.apply(Lifecycle::detach));
        assert!(n.apply(Lifecycle::expire));
        assert_eq!(n.state(), Lifecycle::Dismissing);
    }
}
