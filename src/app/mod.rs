// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together the session, the notification center and
//! the screen components, and translates their events into side effects
//! such as storage writes, toasts or screen switches.

pub mod config;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::animation::AnimationTiming;
use crate::debounce::Debouncer;
use crate::session::{Session, User};
use crate::storage::LocalStorage;
use crate::ui::dashboard;
use crate::ui::login;
use crate::ui::navbar;
use crate::ui::notifications::{Center, NotificationSettings, Severity, TimerQueue, ToastLayer};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    screen: Screen,
    /// Effective light or dark mode. `System` is resolved before it lands here.
    theme_mode: ThemeMode,
    session: Session,
    /// Signed-in user, refreshed from the session after every update.
    user: Option<User>,
    center: Center,
    navbar: navbar::State,
    login: login::State,
    /// Query applied to the course list once the debounce settles.
    course_filter: String,
    search_debounce: Debouncer<String>,
    animation_timing: AnimationTiming,
    animations: dashboard::Animations,
    /// Time of the latest tick; views render animations at this instant.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("logged_in", &self.session.is_logged_in())
            .field("toasts", &self.center.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            theme_mode: ThemeMode::Light,
            session: Session::default(),
            user: None,
            center: Center::default(),
            navbar: navbar::State::default(),
            login: login::State::default(),
            course_filter: String::new(),
            search_debounce: Debouncer::default(),
            animation_timing: AnimationTiming::default(),
            animations: dashboard::Animations::default(),
            now: Instant::now(),
        }
    }
}

impl App {
    /// Builds the initial state from config, local storage and CLI flags.
    ///
    /// Load problems never abort startup; they surface as warning toasts.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (storage, storage_warning) = LocalStorage::load();
        let session = Session::new(storage);

        let notification_settings = NotificationSettings::from(&config.notifications);
        let center = Center::with_settings(
            ToastLayer::new(),
            TimerQueue::new(),
            notification_settings,
        );

        // CLI flag, then the last toggle, then settings.toml
        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(|raw| {
                let parsed = ThemeMode::parse(raw);
                if parsed.is_none() {
                    tracing::warn!(theme = raw, "unknown theme; ignoring");
                }
                parsed
            })
            .or_else(|| session.saved_theme())
            .unwrap_or(config.general.theme_mode)
            .resolved();

        let debounce_ms = config
            .search
            .debounce_ms
            .unwrap_or(config::DEFAULT_SEARCH_DEBOUNCE_MS);

        let mut app = App {
            theme_mode,
            user: session.user(),
            session,
            center,
            search_debounce: Debouncer::new(Duration::from_millis(debounce_ms)),
            animation_timing: AnimationTiming::from(&config.animations),
            ..Self::default()
        };

        for warning in [config_warning, storage_warning].into_iter().flatten() {
            app.center.notify(warning, Severity::Warning);
        }

        if let Some(message) = flags.notify {
            let severity = flags.severity.as_deref().unwrap_or(Severity::Info.name());
            app.center.notify_named(message, severity);
        }

        tracing::info!(theme = %app.theme_mode, logged_in = app.session.is_logged_in(), "started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.screen {
            Screen::Home => "LearnHub".to_string(),
            screen => format!("{} - LearnHub", screen.label()),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.center.has_pending_timers(),
            self.animations.is_running_at(self.now),
            self.search_debounce.is_pending(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            session: &mut self.session,
            center: &mut self.center,
            navbar: &mut self.navbar,
            login: &mut self.login,
            course_filter: &mut self.course_filter,
            search_debounce: &mut self.search_debounce,
            animation_timing: &self.animation_timing,
            animations: &mut self.animations,
            now: &mut self.now,
        };

        let task = match message {
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Login(login_message) => update::handle_login_message(&mut ctx, login_message),
            Message::Dashboard(dashboard_message) => {
                update::handle_dashboard_message(&mut ctx, dashboard_message)
            }
            Message::Notification(notification_message) => {
                ctx.center.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        };

        self.user = self.session.user();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            theme_mode: self.theme_mode,
            user: self.user.as_ref(),
            navbar: &self.navbar,
            login: &self.login,
            course_filter: &self.course_filter,
            animations: &self.animations,
            toasts: self.center.surface(),
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Lifecycle;
    use crate::validation::ValidationError;

    fn app() -> App {
        App {
            session: Session::new(LocalStorage::in_memory()),
            ..App::default()
        }
    }

    fn toast_texts(app: &App) -> Vec<String> {
        app.center
            .notifications()
            .map(|n| n.message().to_string())
            .collect()
    }

    fn sign_in(app: &mut App, email: &str, password: &str) {
        let _ = app.update(Message::Login(login::Message::EmailChanged(email.into())));
        let _ = app.update(Message::Login(login::Message::PasswordChanged(
            password.into(),
        )));
        let _ = app.update(Message::Login(login::Message::Submit));
    }

    #[test]
    fn protected_screen_redirects_to_login() {
        let mut app = app();
        let _ = app.update(Message::SwitchScreen(Screen::Dashboard));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn successful_sign_in_opens_dashboard() {
        let mut app = app();
        sign_in(&mut app, "ada@example.com", "correct horse");

        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.session.is_logged_in());
        assert_eq!(
            app.session.user().map(|u| u.name),
            Some("ada".to_string())
        );
        assert!(app.center.notifications().any(|n| n.severity() == Severity::Success));
        assert!(!app.animations.counters.is_empty());
    }

    #[test]
    fn invalid_sign_in_shows_each_error() {
        let mut app = app();
        sign_in(&mut app, "nope", "short");

        assert_eq!(app.screen, Screen::Home);
        assert!(!app.session.is_logged_in());
        assert_eq!(
            toast_texts(&app),
            vec![
                ValidationError::InvalidEmail.to_string(),
                ValidationError::PasswordTooShort.to_string(),
            ]
        );
        assert!(app
            .center
            .notifications()
            .all(|n| n.severity() == Severity::Error));
    }

    #[test]
    fn bell_shows_info_toast() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Bell));
        assert_eq!(toast_texts(&app), vec!["You have 3 new notifications!"]);
    }

    #[test]
    fn search_submit_shows_quoted_term() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::SearchChanged(
            " rust ".into(),
        )));
        let _ = app.update(Message::Navbar(navbar::Message::SearchSubmitted));
        assert_eq!(toast_texts(&app), vec!["Searching for: \"rust\""]);
    }

    #[test]
    fn typing_filters_after_debounce() {
        let mut app = app();
        let start = app.now;
        let _ = app.update(Message::Navbar(navbar::Message::SearchChanged(
            "data".into(),
        )));
        assert!(app.course_filter.is_empty());

        let _ = app.update(Message::Tick(start + Duration::from_secs(1)));
        assert_eq!(app.course_filter, "data");
    }

    #[test]
    fn logout_returns_to_login() {
        let mut app = app();
        sign_in(&mut app, "ada@example.com", "correct horse");
        app.course_filter = "data".into();
        let _ = app.update(Message::Navbar(navbar::Message::SearchChanged(
            "rust".into(),
        )));
        let _ = app.update(Message::Navbar(navbar::Message::Logout));

        assert!(!app.session.is_logged_in());
        assert_eq!(app.screen, Screen::Login);
        assert!(app.course_filter.is_empty());
        assert!(!app.search_debounce.is_pending());
    }

    #[test]
    fn theme_toggle_is_remembered() {
        let mut app = App {
            theme_mode: ThemeMode::Light,
            ..app()
        };
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert_eq!(app.session.saved_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn theme_follows_stored_mode() {
        let mut app = App {
            theme_mode: ThemeMode::Dark,
            ..app()
        };
        assert_eq!(app.theme(), Theme::Dark);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme(), Theme::Light);
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn copy_certificate_confirms_with_toast() {
        let mut app = app();
        let _ = app.update(Message::Dashboard(dashboard::Message::CopyCertificate(
            "CERT-1".into(),
        )));
        assert_eq!(toast_texts(&app), vec!["Copied to clipboard!"]);
        assert!(app
            .center
            .notifications()
            .all(|n| n.severity() == Severity::Success));
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Bell));
        let id = app.center.notifications().next().map(|n| n.id());
        let Some(id) = id else {
            panic!("expected a toast");
        };

        let _ = app.update(Message::Notification(
            crate::ui::notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(app.center.is_empty());
        assert_eq!(app.center.state(id.into()), Some(Lifecycle::Removed));
    }

    #[test]
    fn toasts_expire_through_ticks() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::Bell));
        let later = Instant::now() + Duration::from_secs(6);

        // expire, then detach after the fade
        let _ = app.update(Message::Tick(later));
        let _ = app.update(Message::Tick(later + Duration::from_secs(1)));
        assert!(app.center.is_empty());
    }
}
