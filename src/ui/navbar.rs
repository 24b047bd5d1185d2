// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! Holds the mobile menu toggle, the search box, the notification bell, the
//! theme toggle and the user dropdown. The navbar owns only its open/closed
//! flags and the search text; everything else is reported to the app as an
//! [`Event`].

use crate::app::Screen;
use crate::session::User;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Navbar-owned state.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub menu_open: bool,
    pub dropdown_open: bool,
    pub search: String,
}

impl State {
    #[must_use]
    pub fn has_open_overlay(&self) -> bool {
        self.menu_open || self.dropdown_open
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub screen: Screen,
    pub user: Option<&'a User>,
    /// Resolved mode; never `System`.
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ToggleDropdown,
    CloseOverlays,
    Navigate(Screen),
    SearchChanged(String),
    SearchSubmitted,
    Bell,
    ToggleTheme,
    Logout,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
    /// Search text changed; feeds the debounced live filter.
    SearchInput(String),
    /// Enter pressed with a non-empty term (already trimmed).
    Search(String),
    Bell,
    ToggleTheme,
    Logout,
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::ToggleDropdown => {
            state.dropdown_open = !state.dropdown_open;
            Event::None
        }
        Message::CloseOverlays => {
            state.menu_open = false;
            state.dropdown_open = false;
            Event::None
        }
        Message::Navigate(screen) => {
            state.menu_open = false;
            Event::Navigate(screen)
        }
        Message::SearchChanged(value) => {
            state.search = value.clone();
            Event::SearchInput(value)
        }
        Message::SearchSubmitted => {
            let term = state.search.trim();
            if term.is_empty() {
                Event::None
            } else {
                Event::Search(term.to_string())
            }
        }
        Message::Bell => Event::Bell,
        Message::ToggleTheme => Event::ToggleTheme,
        Message::Logout => {
            state.dropdown_open = false;
            state.menu_open = false;
            Event::Logout
        }
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(top_bar(&ctx));

    if ctx.state.menu_open {
        content = content.push(menu(ctx.screen, ctx.user.is_some()));
    }

    content.into()
}

fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu_button = button(Text::new("\u{2630}").size(typography::TITLE_SM))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let brand = Text::new("LearnHub").size(typography::TITLE_MD);

    let search = text_input("Search courses...", &ctx.state.search)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SearchSubmitted)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH));

    let theme_label = if ctx.theme_mode == ThemeMode::Dark {
        "\u{2600}"
    } else {
        "\u{263E}"
    };
    let theme_button = button(Text::new(theme_label))
        .on_press(Message::ToggleTheme)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(menu_button)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(search)
        .push(theme_button);

    row = match ctx.user {
        Some(user) => row
            .push(
                button(Text::new("\u{1F514}"))
                    .on_press(Message::Bell)
                    .padding(spacing::XS)
                    .style(styles::button::ghost),
            )
            .push(user_menu(user, ctx.state.dropdown_open)),
        None => row.push(
            button(Text::new("Sign in"))
                .on_press(Message::Navigate(Screen::Login))
                .style(styles::button::primary),
        ),
    };

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

fn user_menu<'a>(user: &'a User, open: bool) -> Element<'a, Message> {
    let toggle = button(Text::new(user.name.as_str()))
        .on_press(Message::ToggleDropdown)
        .padding(spacing::XS)
        .style(styles::button::ghost);

    if !open {
        return toggle.into();
    }

    let panel = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(user.email.as_str()).size(typography::CAPTION))
        .push(Text::new(user.role.as_str()).size(typography::CAPTION))
        .push(
            button(Text::new("Log out"))
                .on_press(Message::Logout)
                .width(Length::Fill)
                .style(styles::button::ghost),
        );

    Column::new()
        .align_x(Horizontal::Right)
        .push(toggle)
        .push(
            Container::new(panel)
                .padding(spacing::XS)
                .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
                .style(styles::container::dropdown),
        )
        .into()
}

fn menu<'a>(current: Screen, logged_in: bool) -> Element<'a, Message> {
    let items = Screen::ALL
        .into_iter()
        .filter(|screen| logged_in || screen.is_public())
        .fold(Column::new().spacing(spacing::XXS), |column, screen| {
            let style = if screen == current {
                styles::button::selected
            } else {
                styles::button::ghost
            };
            column.push(
                button(Text::new(screen.label()))
                    .on_press(Message::Navigate(screen))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(style),
            )
        });

    Container::new(items)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::DROPDOWN_WIDTH))
        .style(styles::container::dropdown)
        .into()
}
