// SPDX-License-Identifier: MPL-2.0
use learnhub::ui::notifications::markup;
use learnhub::ui::notifications::{
    Center, Clock, Lifecycle, ManualClock, NotificationSettings, Severity, TimerQueue, ToastLayer,
    UnavailableSurface,
};
use std::time::Duration;

fn center() -> (Center<ToastLayer, TimerQueue<ManualClock>>, ManualClock) {
    let clock = ManualClock::new();
    let center = Center::new(ToastLayer::new(), TimerQueue::with_clock(clock.clone()));
    (center, clock)
}

fn advance(center: &mut Center<ToastLayer, TimerQueue<ManualClock>>, clock: &ManualClock, ms: u64) {
    clock.advance(Duration::from_millis(ms));
    center.tick(clock.now());
}

#[test]
fn toast_runs_full_lifecycle_without_intervention() {
    let (mut center, clock) = center();
    let Some(handle) = center.notify("Assignment submitted", Severity::Success) else {
        panic!("notify failed");
    };

    advance(&mut center, &clock, 4999);
    assert_eq!(center.state(handle), Some(Lifecycle::Visible));

    advance(&mut center, &clock, 1);
    assert_eq!(center.state(handle), Some(Lifecycle::Dismissing));
    assert!(center.surface().node(handle.id()).is_some_and(|n| n.fading));

    advance(&mut center, &clock, 300);
    assert_eq!(center.state(handle), Some(Lifecycle::Removed));
    assert!(!center.surface().contains(handle.id()));
    assert!(!center.has_pending_timers());
}

#[test]
fn manual_dismiss_is_idempotent_and_silences_timers() {
    let (mut center, clock) = center();
    let Some(handle) = center.notify("Saved", Severity::Info) else {
        panic!("notify failed");
    };

    assert!(center.dismiss(handle));
    assert!(!center.dismiss(handle));
    assert_eq!(center.state(handle), Some(Lifecycle::Removed));

    advance(&mut center, &clock, 10_000);
    assert_eq!(center.state(handle), Some(Lifecycle::Removed));
    assert!(center.is_empty());
}

#[test]
fn toasts_keep_call_order_and_share_one_container() {
    let (mut center, _clock) = center();
    let first = center.notify("A", Severity::Info).map(|h| h.id());
    let second = center.notify("B", Severity::Warning).map(|h| h.id());

    let layer = center.surface();
    assert_eq!(layer.containers_created(), 1);
    let ids: Vec<_> = layer.nodes().iter().map(|n| Some(n.id)).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn dismissing_one_leaves_the_other_running() {
    let (mut center, clock) = center();
    let (Some(a), Some(b)) = (
        center.notify("A", Severity::Info),
        center.notify("B", Severity::Info),
    ) else {
        panic!("notify failed");
    };

    center.dismiss(a);
    assert_eq!(center.state(b), Some(Lifecycle::Visible));

    advance(&mut center, &clock, 5000);
    advance(&mut center, &clock, 300);
    assert_eq!(center.state(b), Some(Lifecycle::Removed));
}

#[test]
fn markup_reflects_severity_and_escaping() {
    let (mut center, _clock) = center();
    center.notify("<b>Quiz</b> graded", Severity::Error);
    center.notify_named("Heads up", "nonsense");

    let Some(container) = center.surface().container() else {
        panic!("container missing");
    };
    let html = markup::container(container);
    assert!(html.starts_with(r#"<div class="notification-container">"#));
    assert!(html.contains("fa-exclamation-circle"));
    assert!(html.contains("#ef4444"));
    assert!(html.contains("&lt;b&gt;Quiz&lt;/b&gt; graded"));
    assert!(html.contains("fa-info-circle"));
}

#[test]
fn legacy_mode_renders_markup_verbatim() {
    let settings = NotificationSettings {
        escape_markup: false,
        ..NotificationSettings::default()
    };
    let mut center = Center::with_settings(
        ToastLayer::new(),
        TimerQueue::with_clock(ManualClock::new()),
        settings,
    );
    center.notify("<b>bold</b>", Severity::Info);

    assert_eq!(center.surface().nodes()[0].body, "<b>bold</b>");
}

#[test]
fn missing_surface_drops_notification_quietly() {
    let mut center = Center::new(UnavailableSurface, TimerQueue::with_clock(ManualClock::new()));
    assert!(center.notify("lost", Severity::Info).is_none());
    assert!(center.is_empty());
    assert!(!center.has_pending_timers());
}
