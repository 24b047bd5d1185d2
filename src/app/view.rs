// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The active screen sits under the navbar; the toast layer is stacked on
//! top of everything.

use super::{Message, Screen};
use crate::session::User;
use crate::ui::dashboard::{self, Animations, ViewContext as DashboardViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::login;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Toast, ToastLayer};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, mouse_area, Column, Container, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub user: Option<&'a User>,
    pub navbar: &'a navbar::State,
    pub login: &'a login::State,
    pub course_filter: &'a str,
    pub animations: &'a Animations,
    pub toasts: &'a ToastLayer,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        state: ctx.navbar,
        screen: ctx.screen,
        user: ctx.user,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let user_name = ctx.user.map_or("learner", |user| user.name.as_str());
    let body: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(ctx.user.is_some()),
        Screen::Login => login::view(ctx.login).map(Message::Login),
        Screen::Dashboard => dashboard::view_dashboard(DashboardViewContext {
            user_name,
            animations: ctx.animations,
            filter: ctx.course_filter,
            now: ctx.now,
        })
        .map(Message::Dashboard),
        Screen::Courses => dashboard::view_courses(DashboardViewContext {
            user_name,
            animations: ctx.animations,
            filter: ctx.course_filter,
            now: ctx.now,
        })
        .map(Message::Dashboard),
    };

    let body = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill);

    // A click anywhere below the navbar closes open menus
    let body: Element<'_, Message> = if ctx.navbar.has_open_overlay() {
        mouse_area(body)
            .on_press(Message::Navbar(navbar::Message::CloseOverlays))
            .into()
    } else {
        body.into()
    };

    let page = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(body);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(Toast::view_overlay(ctx.toasts).map(Message::Notification))
        .into()
}

fn view_home<'a>(logged_in: bool) -> Element<'a, Message> {
    let (label, target) = if logged_in {
        ("Go to dashboard", Screen::Dashboard)
    } else {
        ("Sign in to start learning", Screen::Login)
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("Learn anything, at your own pace").size(typography::TITLE_LG))
        .push(
            Text::new("Courses, progress tracking and certificates in one place.")
                .size(typography::BODY_LG),
        )
        .push(
            button(Text::new(label))
                .on_press(Message::SwitchScreen(target))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new("Browse courses"))
                .on_press(Message::SwitchScreen(Screen::Courses))
                .style(styles::button::ghost),
        );

    Container::new(content).center(Length::Fill).into()
}
