//! Theme Lifecycle Integration Tests
//!
//! End-to-end tests for resolving, toggling and persisting the theme across
//! sessions backed by an on-disk key-value store.

use folio::storage::{StorageError, UnavailableStorage, THEME_KEY};
use folio::{
    FixedAppearance, KvConfig, KvStore, LocalStorage, NoAppearance, StoredPreference,
    ThemeConfig, ThemeMode, ThemeState, ThemeToggle,
};
use std::collections::BTreeSet;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn open_store(dir: &TempDir) -> KvStore {
    KvStore::new(KvConfig::new(dir.path().join("prefs.db")).flush_every_ms(None)).unwrap()
}

/// First visit follows the system, a toggle is remembered by the next session
#[test]
fn test_preference_survives_restart() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();

    // Session 1: nothing stored, system prefers dark
    {
        let store = open_store(&temp_dir);
        let mut state =
            ThemeState::initialize(&store, FixedAppearance::DARK, &ThemeConfig::default());
        assert_eq!(state.mode(), ThemeMode::Dark);

        assert_eq!(state.toggle(), ThemeMode::Light);
        store.flush().unwrap();
    }

    // Session 2: stored light wins over a dark system
    {
        let store = open_store(&temp_dir);
        assert_eq!(store.get(THEME_KEY).unwrap(), Some("light".to_string()));

        let state =
            ThemeState::initialize(&store, FixedAppearance::DARK, &ThemeConfig::default());
        assert_eq!(state.mode(), ThemeMode::Light);
    }
}

/// Stored value wins regardless of what the system says
#[test]
fn test_stored_value_beats_system_preference() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    store.set_item(THEME_KEY, "light").unwrap();

    let state = ThemeState::initialize(&store, FixedAppearance::DARK, &ThemeConfig::default());
    assert_eq!(state.mode(), ThemeMode::Light);
}

/// Every toggle leaves storage equal to the in-memory mode
#[test]
fn test_storage_tracks_every_toggle() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let preference = StoredPreference::new(&store);

    let mut state = ThemeState::initialize(&store, NoAppearance, &ThemeConfig::default());
    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(preference.read().unwrap(), Some(ThemeMode::Light));

    for _ in 0..5 {
        let mode = state.toggle();
        assert_eq!(preference.read().unwrap(), Some(mode));
        assert!(state.last_persist_error().is_none());
    }
}

/// Storage disabled: the toggle keeps working for the session
#[test]
fn test_disabled_storage_degrades_gracefully() {
    init_tracing();
    let mut state =
        ThemeState::initialize(UnavailableStorage, FixedAppearance::DARK, &ThemeConfig::default());
    assert_eq!(state.mode(), ThemeMode::Dark);

    let button = ThemeToggle::click(&mut state);
    assert_eq!(state.mode(), ThemeMode::Light);
    assert_eq!(button, ThemeToggle::for_mode(ThemeMode::Light));
    assert!(matches!(state.last_persist_error(), Some(StorageError::Unavailable)));
}

/// The renderer swaps root classes as the mode changes
#[test]
fn test_root_classes_follow_mode() {
    init_tracing();
    let temp_dir = TempDir::new().unwrap();
    let store = open_store(&temp_dir);
    let mut state = ThemeState::initialize(&store, FixedAppearance::LIGHT, &ThemeConfig::default());

    let mut classes: BTreeSet<String> = BTreeSet::from(["site".to_string()]);
    folio::ui::apply_root_classes(&mut classes, state.mode());
    assert!(classes.contains("theme-light"));

    state.toggle();
    folio::ui::apply_root_classes(&mut classes, state.mode());
    assert!(classes.contains("theme-dark"));
    assert!(!classes.contains("theme-light"));
    assert_eq!(state.css_class(), "theme-dark");
}
