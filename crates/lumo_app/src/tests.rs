//! App-level tests: context wiring, showcase screen, scenario runs

use std::path::Path;

use lumo_theme::{ColorScheme, SchemeSignal, ThemePreference};
use tempfile::tempdir;

use crate::config::LumoConfig;
use crate::context::AppContext;
use crate::demos::showcase::{
    ShowcaseDemo, BRAND_ID, CARD_DESCRIPTION_ID, CARD_ID, CARD_TITLE_ID, CTA_BUTTON_ID, HEADER_ID,
    THEME_TOGGLE_ID, WELCOME_HEADING_ID,
};
use crate::context::ROOT_ELEMENT_ID;
use crate::headless_runner::run_scenario;
use crate::headless_runtime::HeadlessRunConfig;

fn memory_config() -> LumoConfig {
    let mut config = LumoConfig::default();
    config.theme.storage_dir = None;
    config
}

fn disk_config(dir: &Path) -> LumoConfig {
    let mut config = LumoConfig::default();
    config.theme.storage_dir = Some(dir.to_path_buf());
    config.theme.storage_key = "theme-preference".to_string();
    config
}

fn showcase_app(config: LumoConfig, signal: &SchemeSignal) -> (AppContext, ShowcaseDemo) {
    let demo = ShowcaseDemo::new();
    let app = AppContext::with_signal(config, demo.view(), signal.clone()).expect("app context");
    (app, demo)
}

fn quick_cfg() -> HeadlessRunConfig {
    HeadlessRunConfig {
        max_frames: 1,
        probe_every_frames: 1,
        ..Default::default()
    }
}

#[test]
fn showcase_registers_its_element_ids() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let (app, _demo) = showcase_app(memory_config(), &signal);

    for id in [
        ROOT_ELEMENT_ID,
        HEADER_ID,
        BRAND_ID,
        THEME_TOGGLE_ID,
        WELCOME_HEADING_ID,
        CARD_ID,
        CARD_TITLE_ID,
        CARD_DESCRIPTION_ID,
        CTA_BUTTON_ID,
    ] {
        assert!(
            app.registry().node_of(id).is_some(),
            "missing element {id:?}"
        );
    }

    assert_eq!(
        app.registry().text_of(WELCOME_HEADING_ID).as_deref(),
        Some("Welcome to Lumo")
    );
    assert_eq!(
        app.registry().text_of(CARD_TITLE_ID).as_deref(),
        Some("Getting Started")
    );
}

#[test]
fn system_preference_with_dark_os_marks_the_root_at_startup() {
    let signal = SchemeSignal::new(ColorScheme::Dark);
    let (app, _demo) = showcase_app(memory_config(), &signal);

    assert_eq!(app.preference(), ThemePreference::System);
    assert_eq!(app.resolved_scheme(), ColorScheme::Dark);
    assert!(app.has_dark_marker());

    let snapshot = app.capture_snapshot();
    assert!(snapshot.dark_marker);
    assert_eq!(snapshot.resolved_scheme, ColorScheme::Dark);
}

#[test]
fn explicit_light_choice_overrides_a_dark_os_and_persists() {
    let tmp = tempdir().expect("tempdir");
    let signal = SchemeSignal::new(ColorScheme::Dark);
    let (app, _demo) = showcase_app(disk_config(tmp.path()), &signal);
    assert!(app.has_dark_marker());

    app.set_preference(ThemePreference::Light);

    assert_eq!(app.resolved_scheme(), ColorScheme::Light);
    assert!(!app.has_dark_marker());
    let raw = std::fs::read_to_string(tmp.path().join("theme-preference")).unwrap();
    assert_eq!(raw, "light");

    // An explicit choice shadows later OS changes entirely.
    signal.emit(ColorScheme::Dark);
    assert_eq!(app.resolved_scheme(), ColorScheme::Light);
    assert!(!app.has_dark_marker());
}

#[test]
fn preference_survives_a_fresh_context_on_the_same_config() {
    let tmp = tempdir().expect("tempdir");

    {
        let signal = SchemeSignal::new(ColorScheme::Light);
        let (app, _demo) = showcase_app(disk_config(tmp.path()), &signal);
        app.set_preference(ThemePreference::Dark);
    }

    let signal = SchemeSignal::new(ColorScheme::Light);
    let (app, _demo) = showcase_app(disk_config(tmp.path()), &signal);
    assert_eq!(app.preference(), ThemePreference::Dark);
    assert_eq!(app.resolved_scheme(), ColorScheme::Dark);
    assert!(app.has_dark_marker());
}

#[test]
fn garbage_in_storage_falls_back_to_the_configured_default() {
    let tmp = tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("theme-preference"), "solarized").unwrap();

    let signal = SchemeSignal::new(ColorScheme::Dark);
    let (app, _demo) = showcase_app(disk_config(tmp.path()), &signal);

    assert_eq!(app.preference(), ThemePreference::System);
    assert_eq!(app.resolved_scheme(), ColorScheme::Dark);
}

#[test]
fn toggle_click_commits_a_preference_and_rebuild_restyles() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let (mut app, _demo) = showcase_app(memory_config(), &signal);

    let root_before = app.registry().node_of(ROOT_ELEMENT_ID).unwrap();
    let bg_before = app.tree().get_render_node(root_before).unwrap().props.background;

    assert!(app.click(THEME_TOGGLE_ID));
    assert_eq!(app.preference(), ThemePreference::Dark);
    assert_eq!(app.resolved_scheme(), ColorScheme::Dark);
    assert!(app.has_dark_marker());
    assert!(app.rebuild_pending());

    assert!(app.advance_frame());
    assert!(!app.rebuild_pending());

    let root_after = app.registry().node_of(ROOT_ELEMENT_ID).unwrap();
    let bg_after = app.tree().get_render_node(root_after).unwrap().props.background;
    assert_ne!(bg_before, bg_after);

    // The rebuild re-asserts the marker on the fresh registry entries.
    assert!(app.has_dark_marker());
}

#[test]
fn cta_clicks_reach_the_handler_and_nothing_else_does() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let (app, demo) = showcase_app(memory_config(), &signal);

    assert!(app.click(CTA_BUTTON_ID));
    assert!(app.click(CTA_BUTTON_ID));
    assert_eq!(demo.clicks(), 2);

    assert!(!app.click(WELCOME_HEADING_ID));
    assert!(!app.click("ghost-element"));
    assert_eq!(demo.clicks(), 2);
}

#[test]
fn teardown_releases_the_signal_subscription_exactly_once() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let (mut app, _demo) = showcase_app(memory_config(), &signal);
    assert_eq!(signal.subscriber_count(), 1);

    app.teardown();
    assert_eq!(signal.subscriber_count(), 0);

    app.teardown();
    assert_eq!(signal.subscriber_count(), 0);

    // A torn-down context no longer follows the OS.
    signal.emit(ColorScheme::Dark);
    assert_eq!(app.resolved_scheme(), ColorScheme::Light);
}

#[test]
fn dropping_the_context_releases_its_subscription() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    {
        let (_app, _demo) = showcase_app(memory_config(), &signal);
        assert_eq!(signal.subscriber_count(), 1);
    }
    assert_eq!(signal.subscriber_count(), 0);
}

#[test]
fn two_contexts_keep_independent_stores() {
    let signal_a = SchemeSignal::new(ColorScheme::Light);
    let signal_b = SchemeSignal::new(ColorScheme::Light);
    let (app_a, _demo_a) = showcase_app(memory_config(), &signal_a);
    let (app_b, _demo_b) = showcase_app(memory_config(), &signal_b);

    app_a.set_preference(ThemePreference::Dark);

    assert_eq!(app_a.resolved_scheme(), ColorScheme::Dark);
    assert_eq!(app_b.resolved_scheme(), ColorScheme::Light);
    assert!(!app_b.has_dark_marker());
}

#[test]
fn window_size_drives_root_layout() {
    let mut config = memory_config();
    config.window.width = 640;
    config.window.height = 480;

    let signal = SchemeSignal::new(ColorScheme::Light);
    let (mut app, _demo) = showcase_app(config, &signal);

    let root = app.registry().node_of(ROOT_ELEMENT_ID).unwrap();
    let bounds = app.tree().bounds_of(root).unwrap();
    assert_eq!(bounds.width, 640.0);
    assert_eq!(bounds.height, 480.0);

    app.resize(800.0, 500.0);
    let bounds = app.tree().bounds_of(root).unwrap();
    assert_eq!(bounds.width, 800.0);
    assert_eq!(bounds.height, 500.0);
}

#[test]
fn scenario_drives_the_full_theme_lifecycle() {
    let signal = SchemeSignal::new(ColorScheme::Dark);
    let (mut app, _demo) = showcase_app(memory_config(), &signal);

    let outcome = run_scenario(
        r#"{"steps": [
            {"type": "assert_exists", "id": "app-root"},
            {"type": "assert_exists", "id": "theme-toggle"},
            {"type": "assert_preference", "value": "system"},
            {"type": "assert_scheme", "value": "dark"},
            {"type": "assert_dark_marker", "value": true},

            {"type": "set_preference", "value": "light"},
            {"type": "assert_preference", "value": "light"},
            {"type": "assert_scheme", "value": "light"},
            {"type": "assert_dark_marker", "value": false},

            {"type": "emit_system_scheme", "value": "dark"},
            {"type": "assert_scheme", "value": "light"},

            {"type": "click", "id": "theme-toggle"},
            {"type": "assert_preference", "value": "dark"},
            {"type": "tick", "frames": 1},
            {"type": "assert_dark_marker", "value": true},
            {"type": "assert_class", "id": "app-root", "class": "dark", "present": true}
        ]}"#,
        quick_cfg(),
        &mut app,
    )
    .unwrap();

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().steps_executed, 16);
}

#[test]
fn text_assertions_read_text_elements_not_containers() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let (mut app, _demo) = showcase_app(memory_config(), &signal);

    let outcome = run_scenario(
        r#"{"steps": [
            {"type": "assert_text_contains", "id": "welcome-heading", "value": "Welcome"},
            {"type": "assert_text_contains", "id": "getting-started-title", "value": "Getting Started"},
            {"type": "assert_text_contains", "id": "getting-started", "value": "anything"}
        ]}"#,
        quick_cfg(),
        &mut app,
    )
    .unwrap();

    // The card is a container; its copy lives in child text elements.
    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(2));
    assert!(report.message.as_deref().unwrap().contains("text not available"));
}
