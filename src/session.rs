// SPDX-License-Identifier: MPL-2.0
//! Session flags and the page access guard.
//!
//! There is no real authentication here: logging in only records who the
//! user claims to be in local storage, and the guard only checks that the
//! flag is present.

use crate::storage::LocalStorage;
use crate::ui::theming::ThemeMode;

pub const KEY_LOGGED_IN: &str = "isLoggedIn";
pub const KEY_USER_NAME: &str = "userName";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_USER_ROLE: &str = "userRole";
pub const KEY_THEME: &str = "theme";

/// Pages reachable without a session. The empty name is the site root.
pub const PUBLIC_PAGES: [&str; 4] = ["index.html", "login.html", "register.html", ""];

/// Page the guard redirects to.
pub const LOGIN_PAGE: &str = "login.html";

/// Outcome of the access guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    Allow,
    RedirectToLogin,
}

/// Decides whether `path` may be shown. Only the last path segment counts.
#[must_use]
pub fn check_auth(path: &str, logged_in: bool) -> AuthDecision {
    let page = path.rsplit('/').next().unwrap_or_default();
    if logged_in || PUBLIC_PAGES.contains(&page) {
        AuthDecision::Allow
    } else {
        AuthDecision::RedirectToLogin
    }
}

/// The signed-in user as recorded in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Session view over local storage.
#[derive(Debug, Clone, Default)]
pub struct Session {
    storage: LocalStorage,
}

impl Session {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Records the user and raises the logged-in flag.
    pub fn login(&mut self, user: &User) -> bool {
        tracing::info!(email = %user.email, role = %user.role, "signed in");
        self.storage.set(KEY_LOGGED_IN, "true")
            & self.storage.set(KEY_USER_NAME, user.name.as_str())
            & self.storage.set(KEY_USER_EMAIL, user.email.as_str())
            & self.storage.set(KEY_USER_ROLE, user.role.as_str())
    }

    /// Clears the session flags. The theme preference is kept.
    pub fn logout(&mut self) -> bool {
        tracing::info!("signed out");
        [KEY_LOGGED_IN, KEY_USER_NAME, KEY_USER_EMAIL, KEY_USER_ROLE]
            .into_iter()
            .fold(true, |ok, key| self.storage.remove(key) & ok)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.storage
            .get_text(KEY_LOGGED_IN)
            .is_some_and(|flag| !flag.is_empty())
    }

    pub fn user(&self) -> Option<User> {
        if !self.is_logged_in() {
            return None;
        }
        let text = |key| self.storage.get_text(key).unwrap_or_default().to_string();
        Some(User {
            name: text(KEY_USER_NAME),
            email: text(KEY_USER_EMAIL),
            role: text(KEY_USER_ROLE),
        })
    }

    /// Guard for `path` against the current session.
    #[must_use]
    pub fn check_auth(&self, path: &str) -> AuthDecision {
        check_auth(path, self.is_logged_in())
    }

    /// Theme saved by an earlier toggle, if any.
    pub fn saved_theme(&self) -> Option<ThemeMode> {
        self.storage.get_text(KEY_THEME).and_then(ThemeMode::parse)
    }

    /// Flips light/dark and remembers the choice.
    pub fn toggle_theme(&mut self, current: ThemeMode) -> ThemeMode {
        let next = current.toggled();
        self.storage.set(KEY_THEME, next.as_str());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> User {
        User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            role: "student".into(),
        }
    }

    #[test]
    fn public_pages_are_always_allowed() {
        for page in ["index.html", "/site/login.html", "register.html", "", "/"] {
            assert_eq!(check_auth(page, false), AuthDecision::Allow, "{page}");
        }
    }

    #[test]
    fn protected_pages_need_a_session() {
        assert_eq!(
            check_auth("/app/dashboard.html", false),
            AuthDecision::RedirectToLogin
        );
        assert_eq!(check_auth("/app/dashboard.html", true), AuthDecision::Allow);
    }

    #[test]
    fn login_then_logout() {
        let mut session = Session::new(LocalStorage::in_memory());
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());

        assert!(session.login(&ada()));
        assert!(session.is_logged_in());
        assert_eq!(session.user(), Some(ada()));
        assert_eq!(session.check_auth("courses.html"), AuthDecision::Allow);

        assert!(session.logout());
        assert!(!session.is_logged_in());
        assert!(!session.storage().contains(KEY_USER_EMAIL));
        assert_eq!(
            session.check_auth("courses.html"),
            AuthDecision::RedirectToLogin
        );
    }

    #[test]
    fn logout_keeps_theme() {
        let mut session = Session::new(LocalStorage::in_memory());
        session.login(&ada());
        session.toggle_theme(ThemeMode::Light);
        session.logout();

        assert_eq!(session.saved_theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn toggle_theme_persists_choice() {
        let mut session = Session::new(LocalStorage::in_memory());
        assert_eq!(session.saved_theme(), None);

        assert_eq!(session.toggle_theme(ThemeMode::Dark), ThemeMode::Light);
        assert_eq!(session.saved_theme(), Some(ThemeMode::Light));
        assert_eq!(session.storage().get_text(KEY_THEME), Some("light"));
    }

    #[test]
    fn empty_flag_counts_as_logged_out() {
        let mut storage = LocalStorage::in_memory();
        storage.set(KEY_LOGGED_IN, "");
        assert!(!Session::new(storage).is_logged_in());
    }
}
