// SPDX-License-Identifier: MPL-2.0
use learnhub::app::config::{self, Config, NotificationsConfig};
use learnhub::session::{AuthDecision, Session, User};
use learnhub::storage::LocalStorage;
use learnhub::ui::notifications::NotificationSettings;
use learnhub::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn notification_timing_comes_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let config = Config {
        notifications: NotificationsConfig {
            display_ms: Some(2500),
            fade_ms: Some(0),
            escape_markup: Some(true),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let settings = NotificationSettings::from(&loaded.notifications);
    assert_eq!(settings.display, Duration::from_millis(2500));
    assert!(settings.fade.is_zero());
}

#[test]
fn session_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let (storage, _) = LocalStorage::load_from(base.clone());
    let mut session = Session::new(storage);
    session.login(&User {
        name: "Grace".into(),
        email: "grace@example.com".into(),
        role: "instructor".into(),
    });
    session.toggle_theme(ThemeMode::Light);

    let (storage, warning) = LocalStorage::load_from(base.clone());
    assert!(warning.is_none());
    let restored = Session::new(storage);
    assert_eq!(restored.check_auth("dashboard.html"), AuthDecision::Allow);
    assert_eq!(restored.user().map(|u| u.role), Some("instructor".to_string()));
    assert_eq!(restored.saved_theme(), Some(ThemeMode::Dark));

    let mut restored = restored;
    restored.logout();
    let (storage, _) = LocalStorage::load_from(base);
    let after_logout = Session::new(storage);
    assert_eq!(
        after_logout.check_auth("dashboard.html"),
        AuthDecision::RedirectToLogin
    );
    assert_eq!(after_logout.saved_theme(), Some(ThemeMode::Dark));
}
