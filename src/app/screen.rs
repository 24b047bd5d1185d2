// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::session::{check_auth, AuthDecision};

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Dashboard,
    Courses,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Home,
        Screen::Login,
        Screen::Dashboard,
        Screen::Courses,
    ];

    /// Page name checked by the access guard.
    #[must_use]
    pub fn page(self) -> &'static str {
        match self {
            Screen::Home => "index.html",
            Screen::Login => "login.html",
            Screen::Dashboard => "dashboard.html",
            Screen::Courses => "courses.html",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Login => "Sign in",
            Screen::Dashboard => "Dashboard",
            Screen::Courses => "Courses",
        }
    }

    /// Reachable without a session.
    #[must_use]
    pub fn is_public(self) -> bool {
        check_auth(self.page(), false) == AuthDecision::Allow
    }
}
