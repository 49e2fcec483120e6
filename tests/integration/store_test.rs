//! Store behavior: persistence, ordering, fail-open reads, legacy decoding.

use std::fs;

use super::helpers::future_record;
use tealtimer::store::STORE_FILE;
use tealtimer::{ThemeKind, TimerStore};

#[test]
fn collection_round_trips_in_display_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);

    let mut store = TimerStore::open(&path);
    for (name, theme) in [
        ("first", ThemeKind::Digital),
        ("second", ThemeKind::Calendar),
        ("third", ThemeKind::ChronometerAnalog),
    ] {
        store.add(future_record(name, theme)).unwrap();
    }

    let reopened = TimerStore::open(&path);
    let names: Vec<_> = reopened.timers().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(reopened.timers()[2].theme, ThemeKind::ChronometerAnalog);
}

#[test]
fn reorder_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);

    let mut store = TimerStore::open(&path);
    for name in ["a", "b", "c"] {
        store.add(future_record(name, ThemeKind::Digital)).unwrap();
    }
    store.move_timer(0, 2).unwrap();

    let reopened = TimerStore::open(&path);
    let names: Vec<_> = reopened.timers().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["b", "c", "a"]);
}

#[test]
fn corrupt_store_fails_open_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);
    fs::write(&path, "]]] definitely not json").unwrap();

    let store = TimerStore::open(&path);
    assert!(store.is_empty());
}

#[test]
fn corrupt_store_is_replaced_on_next_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);
    fs::write(&path, "{broken").unwrap();

    let mut store = TimerStore::open(&path);
    store.add(future_record("fresh", ThemeKind::Analog)).unwrap();

    let reopened = TimerStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.timers()[0].name, "fresh");
}

#[test]
fn legacy_records_decode_with_defaults_and_digital_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);
    // Hand-written legacy document: minimal fields plus an unknown theme
    let json = r#"[
        {
            "id": "0e2c1a52-7a70-4a9c-9d5b-53a1e2f3b4c5",
            "name": "minimal",
            "targetDate": "2030-06-15T12:30"
        },
        {
            "id": "1f3d2b63-8b81-4bad-ae6c-64b2f3a4c5d6",
            "name": "stale-theme",
            "targetDate": "2030-06-15T12:30",
            "theme": "foo"
        }
    ]"#;
    fs::write(&path, json).unwrap();

    let store = TimerStore::open(&path);
    assert_eq!(store.len(), 2);

    let minimal = store.find_by_name("minimal").unwrap();
    assert_eq!(minimal.theme, ThemeKind::Digital);
    assert_eq!(minimal.theme_color, tealtimer::timer::DEFAULT_THEME_COLOR);
    assert_eq!(minimal.glow_intensity, 0.0);

    let stale = store.find_by_name("stale-theme").unwrap();
    assert_eq!(stale.theme, ThemeKind::Digital);
}

#[test]
fn delete_and_update_are_visible_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STORE_FILE);

    let mut store = TimerStore::open(&path);
    let keep = future_record("keep", ThemeKind::Digital);
    let drop = future_record("drop", ThemeKind::Digital);
    let keep_id = keep.id;
    let drop_id = drop.id;
    store.add(keep).unwrap();
    store.add(drop).unwrap();

    let mut edited = store.get(keep_id).unwrap().clone();
    edited.theme = ThemeKind::Chronometer;
    edited.set_glow_intensity(0.5);
    store.update(edited).unwrap();
    store.delete(drop_id).unwrap();

    let reopened = TimerStore::open(&path);
    assert_eq!(reopened.len(), 1);
    let survivor = reopened.get(keep_id).unwrap();
    assert_eq!(survivor.theme, ThemeKind::Chronometer);
    assert_eq!(survivor.glow_intensity, 0.5);
}
