// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications appear temporarily to report the outcome of an action
//! without blocking interaction, and are always removed eventually without
//! caller intervention.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Severity` and the `Lifecycle` state machine
//! - [`center`] - `Center`, which owns live notifications and drives their timers
//! - [`surface`] - `Surface` trait and the retained `ToastLayer`
//! - [`timer`] - `Timer` trait and the cooperative `TimerQueue`
//! - [`markup`] - HTML rendering and escaping of toast nodes
//! - [`toast`] - iced widget drawing the toast layer
//!
//! # Usage
//!
//! ```
//! use learnhub::ui::notifications::{Center, Lifecycle, Severity};
//!
//! let mut center = Center::default();
//! let handle = center.notify("Course saved", Severity::Success).unwrap();
//! assert_eq!(center.state(handle), Some(Lifecycle::Visible));
//!
//! center.dismiss(handle);
//! assert_eq!(center.state(handle), Some(Lifecycle::Removed));
//! ```
//!
//! # Timing
//!
//! A toast stays visible for 5 s, fades for 300 ms, then is detached. Both
//! durations come from the `[notifications]` config section.

pub mod center;
pub mod markup;
pub mod notification;
pub mod surface;
pub mod timer;
mod toast;

pub use center::{Center, Message as NotificationMessage, NotificationHandle, NotificationSettings};
pub use notification::{Lifecycle, Notification, NotificationId, Severity, UnknownSeverity};
pub use surface::{Container, RenderError, Surface, ToastLayer, ToastNode, UnavailableSurface};
pub use timer::{Clock, ManualClock, SystemClock, Timer, TimerEvent, TimerQueue, TimerToken};
pub use toast::Toast;
