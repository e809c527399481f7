// SPDX-License-Identifier: MPL-2.0
//! End-to-end lifecycle tests driving the public surface: registry,
//! overlay and dispatcher, with synthetic instants so no test sleeps.

use iced_toasts::config::defaults::{DEFAULT_TOAST_DURATION, ENTER_DELAY, EXIT_DELAY};
use iced_toasts::config::{self, Config};
use iced_toasts::diagnostics::{DiagnosticsLog, ToastEventKind};
use iced_toasts::domain::timer::Phase;
use iced_toasts::domain::toast::ToastKind;
use iced_toasts::registry::Registry;
use iced_toasts::ui::toasts::{Message, Overlay};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const TICK: Duration = Duration::from_millis(50);

/// Drives the overlay with synthetic ticks until `deadline`, returning the
/// instant of the last tick.
fn run_ticks(
    overlay: &mut Overlay,
    registry: &mut Registry,
    mut now: Instant,
    deadline: Instant,
) -> Instant {
    while now < deadline {
        now += TICK;
        overlay.apply(registry, Message::Tick(now), now);
    }
    now
}

#[test]
fn default_duration_toast_expires_around_three_seconds() {
    let mut registry = Registry::new();
    let mut overlay = Overlay::new();
    let t0 = Instant::now();

    registry.add("x", ToastKind::Info, None);
    overlay.apply(&mut registry, Message::Tick(t0), t0);

    // Alive right up to the end of the countdown...
    let almost = t0 + ENTER_DELAY + DEFAULT_TOAST_DURATION - TICK;
    let now = run_ticks(&mut overlay, &mut registry, t0, almost);
    assert_eq!(registry.len(), 1);

    // ...and gone once countdown plus exit transition have elapsed.
    run_ticks(
        &mut overlay,
        &mut registry,
        now,
        now + TICK + EXIT_DELAY + TICK,
    );
    assert!(registry.is_empty());
}

#[test]
fn hover_pause_then_resume_completes_the_countdown() {
    let mut registry = Registry::new();
    let mut overlay = Overlay::new();
    let t0 = Instant::now();

    // Duration 3000ms, pause with the full countdown remaining, hold the
    // pointer for 3500ms, release.
    registry.add("x", ToastKind::Info, Some(Duration::from_millis(3000)));
    overlay.apply(&mut registry, Message::Tick(t0), t0);
    let id = registry.snapshot()[0].id();

    let start = run_ticks(&mut overlay, &mut registry, t0, t0 + ENTER_DELAY + TICK);
    overlay.apply(&mut registry, Message::PointerEntered(id), start);

    let release = run_ticks(
        &mut overlay,
        &mut registry,
        start,
        start + Duration::from_millis(3500),
    );
    assert_eq!(registry.len(), 1, "paused toast must not expire");
    overlay.apply(&mut registry, Message::PointerExited(id), release);

    // Still alive 2950ms after release (one tick short of the countdown)...
    let now = run_ticks(
        &mut overlay,
        &mut registry,
        release,
        release + Duration::from_millis(2950),
    );
    assert_eq!(registry.len(), 1, "resumed toast must live out its remaining time");

    // ...and removed within countdown + exit transition + one tick.
    run_ticks(
        &mut overlay,
        &mut registry,
        now,
        release + Duration::from_millis(3000) + EXIT_DELAY + TICK,
    );
    assert!(registry.is_empty());
}

#[test]
fn double_dismiss_produces_exactly_one_removal() {
    let mut log = DiagnosticsLog::new(32);
    let mut registry = Registry::new();
    registry.set_diagnostics(log.handle());
    let mut overlay = Overlay::new();
    let t0 = Instant::now();

    registry.push_info("x");
    overlay.apply(&mut registry, Message::Tick(t0), t0);
    let id = registry.snapshot()[0].id();

    let now = run_ticks(&mut overlay, &mut registry, t0, t0 + ENTER_DELAY + TICK);
    overlay.apply(&mut registry, Message::Dismiss(id), now);
    overlay.apply(
        &mut registry,
        Message::Dismiss(id),
        now + Duration::from_millis(10),
    );

    run_ticks(&mut overlay, &mut registry, now, now + EXIT_DELAY + TICK);
    assert!(registry.is_empty());

    log.drain();
    let removals = log
        .events()
        .filter(|e| matches!(e.kind(), ToastEventKind::Removed { id: r } if *r == id))
        .count();
    assert_eq!(removals, 1);
}

#[test]
fn colliding_adds_keep_a_single_toast_with_a_restarted_clock() {
    let mut registry = Registry::new();
    let mut overlay = Overlay::new();
    let t0 = Instant::now();

    registry.add("saved", ToastKind::Success, Some(Duration::from_millis(1000)));
    overlay.apply(&mut registry, Message::Tick(t0), t0);
    let id = registry.snapshot()[0].id();

    // 800ms in, the same notification fires again.
    let now = run_ticks(
        &mut overlay,
        &mut registry,
        t0,
        t0 + ENTER_DELAY + Duration::from_millis(800),
    );
    registry.add("saved", ToastKind::Success, Some(Duration::from_millis(1000)));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot()[0].id(), id, "refresh keeps the id");

    // 900ms later the original clock would have expired; the refreshed one
    // has 100ms to go.
    let later = run_ticks(&mut overlay, &mut registry, now, now + Duration::from_millis(900));
    assert_eq!(registry.len(), 1);
    assert_eq!(overlay.timer(id).expect("timer").phase(), Phase::Running);

    run_ticks(
        &mut overlay,
        &mut registry,
        later,
        later + Duration::from_millis(200) + EXIT_DELAY + TICK,
    );
    assert!(registry.is_empty());
}

#[test]
fn insertion_order_is_preserved_across_removal() {
    let mut registry = Registry::new();
    registry.push_info("a");
    registry.push_info("b");
    registry.push_info("c");

    let order: Vec<_> = registry.snapshot().iter().map(|t| t.message().to_owned()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);

    let b_id = registry.snapshot()[1].id();
    registry.remove(b_id);

    let order: Vec<_> = registry.snapshot().iter().map(|t| t.message().to_owned()).collect();
    assert_eq!(order, vec!["a", "c"]);
}

#[test]
fn dispatched_toast_appears_on_the_next_tick() {
    let mut registry = Registry::new();
    let mut overlay = Overlay::new();
    let dispatcher = registry.dispatcher();
    let t0 = Instant::now();

    dispatcher.add_toast("from a worker", ToastKind::Info, None);
    assert!(registry.is_empty());

    overlay.apply(&mut registry, Message::Tick(t0), t0);
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.snapshot()[0].message(), "from a worker");
}

#[test]
fn configured_default_duration_drives_expiry() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.timing.default_duration_ms = Some(1000);
    config::save_to_path(&config, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let mut registry = Registry::new().with_default_duration(loaded.default_duration());
    let mut overlay = Overlay::from_config(&loaded);
    let t0 = Instant::now();

    registry.push_info("configured");
    overlay.apply(&mut registry, Message::Tick(t0), t0);

    let almost = t0 + ENTER_DELAY + Duration::from_millis(1000) - TICK;
    let now = run_ticks(&mut overlay, &mut registry, t0, almost);
    assert_eq!(registry.len(), 1);

    run_ticks(&mut overlay, &mut registry, now, now + TICK + EXIT_DELAY + TICK);
    assert!(registry.is_empty());
}
