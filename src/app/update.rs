// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch, so the handlers stay testable one by one.

use super::{Message, Screen};
use crate::animation::{AnimationTiming, CounterAnimation, ProgressAnimation};
use crate::debounce::Debouncer;
use crate::session::{AuthDecision, Session, User};
use crate::ui::dashboard::{self, Animations, CATALOG, STAT_LABELS};
use crate::ui::login::{self, Event as LoginEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{Center, Severity};
use crate::ui::theming::ThemeMode;
use crate::validation::{validate_sign_in, FormData};
use iced::Task;
use std::time::Instant;

/// Role recorded for accounts created through the sign-in form.
const DEFAULT_ROLE: &str = "student";

pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub session: &'a mut Session,
    pub center: &'a mut Center,
    pub navbar: &'a mut navbar::State,
    pub login: &'a mut login::State,
    pub course_filter: &'a mut String,
    pub search_debounce: &'a mut Debouncer<String>,
    pub animation_timing: &'a AnimationTiming,
    pub animations: &'a mut Animations,
    pub now: &'a mut Instant,
}

/// Switches screens through the access guard. Protected screens without a
/// session land on the sign-in form instead.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    let destination = match ctx.session.check_auth(target.page()) {
        AuthDecision::Allow => target,
        AuthDecision::RedirectToLogin => {
            tracing::info!(page = target.page(), "not signed in; redirecting");
            Screen::Login
        }
    };

    if destination == Screen::Dashboard && *ctx.screen != Screen::Dashboard {
        start_dashboard_animations(ctx);
    }
    *ctx.screen = destination;
    ctx.navbar.menu_open = false;
    Task::none()
}

fn start_dashboard_animations(ctx: &mut UpdateContext<'_>) {
    let now = Instant::now();
    *ctx.now = now;
    let timing = ctx.animation_timing;
    let bars_begin = now + timing.progress_start;

    ctx.animations.counters = STAT_LABELS
        .iter()
        .map(|(_, label)| CounterAnimation::from_text(label, timing, now))
        .collect();
    ctx.animations.progress = CATALOG
        .iter()
        .map(|course| ProgressAnimation::new(course.progress, timing, bars_begin))
        .collect();
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(screen) => handle_screen_switch(ctx, screen),
        NavbarEvent::SearchInput(text) => {
            ctx.search_debounce.call(text, Instant::now());
            Task::none()
        }
        NavbarEvent::Search(term) => {
            tracing::info!(term = %term, "search");
            ctx.center
                .notify(format!("Searching for: \"{term}\""), Severity::Info);
            Task::none()
        }
        NavbarEvent::Bell => {
            ctx.center
                .notify("You have 3 new notifications!", Severity::Info);
            Task::none()
        }
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.session.toggle_theme(*ctx.theme_mode);
            tracing::debug!(theme = %ctx.theme_mode, "theme toggled");
            Task::none()
        }
        NavbarEvent::Logout => {
            ctx.session.logout();
            ctx.search_debounce.cancel();
            ctx.course_filter.clear();
            ctx.animations.counters.clear();
            ctx.animations.progress.clear();
            handle_screen_switch(ctx, Screen::Login)
        }
    }
}

pub fn handle_login_message(ctx: &mut UpdateContext<'_>, message: login::Message) -> Task<Message> {
    match login::update(message, ctx.login) {
        LoginEvent::None => Task::none(),
        LoginEvent::Submitted(form) => sign_in(ctx, &form),
    }
}

fn sign_in(ctx: &mut UpdateContext<'_>, form: &FormData) -> Task<Message> {
    let errors = validate_sign_in(form);
    if !errors.is_empty() {
        for error in errors {
            ctx.center.notify(error.to_string(), Severity::Error);
        }
        return Task::none();
    }

    let email = form.email.clone().unwrap_or_default();
    let name = email
        .split('@')
        .next()
        .filter(|local| !local.is_empty())
        .unwrap_or("learner")
        .to_string();
    let user = User {
        name,
        email,
        role: DEFAULT_ROLE.to_string(),
    };

    if !ctx.session.login(&user) {
        ctx.center.notify(
            "Signed in, but the session could not be saved",
            Severity::Warning,
        );
    }
    ctx.login.reset_password();
    ctx.center
        .notify(format!("Welcome back, {}!", user.name), Severity::Success);
    handle_screen_switch(ctx, Screen::Dashboard)
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match message {
        dashboard::Message::CopyCertificate(id) => {
            ctx.center.notify("Copied to clipboard!", Severity::Success);
            iced::clipboard::write(id)
        }
    }
}

/// Advances toast timers and applies a settled search filter.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.center.tick(now);
    if let Some(query) = ctx.search_debounce.poll(now) {
        tracing::debug!(query = %query, "course filter applied");
        *ctx.course_filter = query;
    }
    Task::none()
}
