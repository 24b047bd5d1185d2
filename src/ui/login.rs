// SPDX-License-Identifier: MPL-2.0
//! Sign-in form.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::validation::FormData;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text_input, Column, Container, Row, Text},
    Element, Length,
};

#[derive(Debug, Clone, Default)]
pub struct State {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
}

impl State {
    /// Snapshot of the fields for validation.
    pub fn form_data(&self) -> FormData {
        FormData {
            email: Some(self.email.trim().to_string()),
            password: Some(self.password.clone()),
            confirm_password: None,
        }
    }

    /// Clears the password after an attempt.
    pub fn reset_password(&mut self) {
        self.password.clear();
        self.password_visible = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(FormData),
}

pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::PasswordChanged(password) => {
            state.password = password;
            Event::None
        }
        Message::TogglePasswordVisibility => {
            state.password_visible = !state.password_visible;
            Event::None
        }
        Message::Submit => Event::Submitted(state.form_data()),
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let email = text_input("you@example.com", &state.email)
        .on_input(Message::EmailChanged)
        .on_submit(Message::Submit)
        .padding(spacing::XS)
        .size(typography::BODY_LG);

    let password = text_input("Password", &state.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::Submit)
        .secure(!state.password_visible)
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    let visibility_label = if state.password_visible { "Hide" } else { "Show" };
    let password_row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(password)
        .push(
            button(Text::new(visibility_label).size(typography::CAPTION))
                .on_press(Message::TogglePasswordVisibility)
                .style(styles::button::ghost),
        );

    let form = Column::new()
        .spacing(spacing::SM)
        .push(Text::new("Sign in").size(typography::TITLE_LG))
        .push(Text::new("Email").size(typography::CAPTION))
        .push(email)
        .push(Text::new("Password").size(typography::CAPTION))
        .push(password_row)
        .push(
            button(Text::new("Sign in").align_x(Horizontal::Center))
                .on_press(Message::Submit)
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::button::primary),
        );

    Container::new(
        Container::new(form)
            .padding(spacing::LG)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .style(styles::container::card),
    )
    .center(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_password_visibility() {
        let mut state = State::default();
        update(Message::TogglePasswordVisibility, &mut state);
        assert!(state.password_visible);
        update(Message::TogglePasswordVisibility, &mut state);
        assert!(!state.password_visible);
    }

    #[test]
    fn submit_reports_trimmed_email() {
        let mut state = State::default();
        update(Message::EmailChanged(" ada@example.com ".into()), &mut state);
        update(Message::PasswordChanged("hunter22".into()), &mut state);

        let Event::Submitted(form) = update(Message::Submit, &mut state) else {
            panic!("expected submission");
        };
        assert_eq!(form.email.as_deref(), Some("ada@example.com"));
        assert_eq!(form.password.as_deref(), Some("hunter22"));
        assert_eq!(form.confirm_password, None);
    }

    #[test]
    fn reset_password_hides_and_clears() {
        let mut state = State {
            password: "secret".into(),
            password_visible: true,
            ..State::default()
        };
        state.reset_password();
        assert!(state.password.is_empty());
        assert!(!state.password_visible);
    }
}
