// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::dashboard;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SwitchScreen(Screen),
    Navbar(navbar::Message),
    Login(login::Message),
    Dashboard(dashboard::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick driving toast timers, animations and the search debounce.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Theme override (`light`, `dark` or `system`).
    pub theme: Option<String>,
    /// Toast to show at startup.
    pub notify: Option<String>,
    /// Severity name for the startup toast. Unknown names fall back to info.
    pub severity: Option<String>,
    /// Optional data directory override (for `storage.cbor`).
    /// Takes precedence over `LEARNHUB_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for `settings.toml`).
    /// Takes precedence over `LEARNHUB_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
