use lumo_theme::{
    ColorScheme, ColorToken, PreferenceStore, SchemeMarker, SchemeSignal, ThemePreference,
    ThemeStore, ThemeStoreConfig,
};
use std::fs;
use std::sync::{Arc, Mutex};

struct RecordingMarker {
    applied: Arc<Mutex<Vec<ColorScheme>>>,
}

impl SchemeMarker for RecordingMarker {
    fn apply(&self, scheme: ColorScheme) {
        self.applied.lock().unwrap().push(scheme);
    }
}

fn marker_pair() -> (RecordingMarker, Arc<Mutex<Vec<ColorScheme>>>) {
    let applied = Arc::new(Mutex::new(Vec::new()));
    (
        RecordingMarker {
            applied: applied.clone(),
        },
        applied,
    )
}

#[test]
fn concrete_preferences_resolve_regardless_of_os_scheme() {
    for os in [ColorScheme::Light, ColorScheme::Dark] {
        let store = ThemeStore::new(ThemeStoreConfig {
            default_preference: ThemePreference::Light,
            system_scheme: os,
            ..Default::default()
        });
        assert_eq!(store.resolved_scheme(), ColorScheme::Light, "os={os:?}");

        store.set_preference(ThemePreference::Dark);
        assert_eq!(store.resolved_scheme(), ColorScheme::Dark, "os={os:?}");
    }
}

#[test]
fn system_preference_resolves_to_the_os_scheme() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let store = ThemeStore::new(ThemeStoreConfig {
        default_preference: ThemePreference::System,
        ..Default::default()
    });
    let _sub = store.watch(&signal);
    assert_eq!(store.resolved_scheme(), ColorScheme::Light);

    signal.emit(ColorScheme::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);

    signal.emit(ColorScheme::Light);
    assert_eq!(store.resolved_scheme(), ColorScheme::Light);
}

#[test]
fn explicit_choice_survives_a_fresh_store_on_the_same_key() {
    let dir = tempfile::tempdir().expect("tempdir");

    {
        let store = ThemeStore::new(ThemeStoreConfig {
            storage: PreferenceStore::new(dir.path(), "app-theme"),
            ..Default::default()
        });
        store.set_preference(ThemePreference::Dark);
    }

    let revived = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "app-theme"),
        default_preference: ThemePreference::Light,
        ..Default::default()
    });
    assert_eq!(revived.preference(), ThemePreference::Dark);
    assert_eq!(revived.resolved_scheme(), ColorScheme::Dark);
}

#[test]
fn stores_on_different_keys_do_not_observe_each_other() {
    let dir = tempfile::tempdir().expect("tempdir");

    let a = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "root-a"),
        ..Default::default()
    });
    let b = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "root-b"),
        ..Default::default()
    });

    a.set_preference(ThemePreference::Dark);
    assert_eq!(b.preference(), ThemePreference::System);

    let b_revived = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "root-b"),
        ..Default::default()
    });
    assert_eq!(b_revived.preference(), ThemePreference::System);
}

#[test]
fn setting_the_current_preference_again_is_inert() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "app-theme"),
        ..Default::default()
    });

    let notifications = Arc::new(Mutex::new(0u32));
    let notifications_clone = notifications.clone();
    let _listener = store.on_change(move |_| {
        *notifications_clone.lock().unwrap() += 1;
    });

    store.set_preference(ThemePreference::Dark);
    assert_eq!(*notifications.lock().unwrap(), 1);

    // Corrupt the persisted file; an inert repeat set must not rewrite it
    let path = dir.path().join("app-theme");
    fs::write(&path, "scribble").expect("write");

    store.set_preference(ThemePreference::Dark);
    assert_eq!(*notifications.lock().unwrap(), 1);
    assert_eq!(fs::read_to_string(&path).expect("read"), "scribble");
}

#[test]
fn os_scheme_changes_only_matter_under_system_preference() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let store = ThemeStore::new(ThemeStoreConfig {
        default_preference: ThemePreference::Light,
        ..Default::default()
    });
    let _sub = store.watch(&signal);

    let notifications = Arc::new(Mutex::new(0u32));
    let notifications_clone = notifications.clone();
    let _listener = store.on_change(move |_| {
        *notifications_clone.lock().unwrap() += 1;
    });

    signal.emit(ColorScheme::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Light);
    assert_eq!(*notifications.lock().unwrap(), 0);

    // Switching to system picks up the recorded OS value
    store.set_preference(ThemePreference::System);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);
    assert_eq!(*notifications.lock().unwrap(), 1);
}

#[test]
fn released_subscription_detaches_the_store_from_the_signal() {
    let signal = SchemeSignal::new(ColorScheme::Light);
    let store = ThemeStore::new(ThemeStoreConfig {
        default_preference: ThemePreference::System,
        ..Default::default()
    });

    let sub = store.watch(&signal);
    signal.emit(ColorScheme::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);

    sub.release();
    signal.emit(ColorScheme::Light);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);
    assert_eq!(signal.subscriber_count(), 0);

    // Releasing again changes nothing
    sub.release();
    assert_eq!(signal.subscriber_count(), 0);
}

#[test]
fn system_default_with_dark_os_then_explicit_light() {
    let dir = tempfile::tempdir().expect("tempdir");
    let signal = SchemeSignal::new(ColorScheme::Dark);
    let store = ThemeStore::new(ThemeStoreConfig {
        default_preference: ThemePreference::System,
        storage: PreferenceStore::new(dir.path(), "app-theme"),
        ..Default::default()
    });
    let _sub = store.watch(&signal);
    let (marker, applied) = marker_pair();
    store.bind_marker(marker);

    // Nothing persisted, OS reports dark: dark presentation
    assert_eq!(store.preference(), ThemePreference::System);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);
    assert_eq!(applied.lock().unwrap().last(), Some(&ColorScheme::Dark));

    store.set_preference(ThemePreference::Light);

    assert_eq!(store.resolved_scheme(), ColorScheme::Light);
    assert_eq!(applied.lock().unwrap().last(), Some(&ColorScheme::Light));
    assert_eq!(
        fs::read_to_string(dir.path().join("app-theme")).expect("read"),
        "light"
    );

    // The explicit choice now shadows the OS
    signal.emit(ColorScheme::Light);
    signal.emit(ColorScheme::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Light);
}

#[test]
fn garbage_in_storage_falls_back_to_the_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("app-theme"), "midnight").expect("write");

    let store = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::new(dir.path(), "app-theme"),
        default_preference: ThemePreference::System,
        system_scheme: ColorScheme::Dark,
        ..Default::default()
    });

    assert_eq!(store.preference(), ThemePreference::System);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);
}

#[test]
fn store_stays_fully_functional_without_storage() {
    let store = ThemeStore::new(ThemeStoreConfig {
        storage: PreferenceStore::disabled(),
        ..Default::default()
    });

    store.set_preference(ThemePreference::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);

    store.toggle_preference();
    assert_eq!(store.preference(), ThemePreference::Light);
}

#[test]
fn toggling_from_system_commits_an_explicit_preference() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ThemeStore::new(ThemeStoreConfig {
        default_preference: ThemePreference::System,
        system_scheme: ColorScheme::Dark,
        storage: PreferenceStore::new(dir.path(), "app-theme"),
        ..Default::default()
    });

    store.toggle_preference();

    assert_eq!(store.preference(), ThemePreference::Light);
    assert_eq!(
        fs::read_to_string(dir.path().join("app-theme")).expect("read"),
        "light"
    );
}

#[test]
fn handles_share_one_store() {
    let store = ThemeStore::default();
    let handle = store.clone();

    handle.set_preference(ThemePreference::Dark);
    assert_eq!(store.resolved_scheme(), ColorScheme::Dark);
    assert_eq!(
        store.color(ColorToken::Background),
        handle.color(ColorToken::Background)
    );
}
