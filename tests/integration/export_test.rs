//! Snapshot export behavior.

use super::helpers::{future_record, target_ms};
use tealtimer::export::export_snapshot;
use tealtimer::files::export_filename;
use tealtimer::ThemeKind;

#[test]
fn export_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let record = future_record("Nested", ThemeKind::Digital);

    let path = export_snapshot(&record, &nested, target_ms(&record) - 1_000).unwrap();
    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), nested);
}

#[test]
fn export_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let record = future_record("Repeat", ThemeKind::Chronometer);
    let target = target_ms(&record);

    let first = export_snapshot(&record, dir.path(), target - 61_000).unwrap();
    let early = std::fs::read_to_string(&first).unwrap();
    let second = export_snapshot(&record, dir.path(), target - 1_000).unwrap();
    let late = std::fs::read_to_string(&second).unwrap();

    assert_eq!(first, second);
    assert_ne!(early, late);
}

#[test]
fn awkward_names_produce_safe_filenames() {
    let dir = tempfile::tempdir().unwrap();
    let mut record = future_record("x", ThemeKind::Digital);
    record.name = "summer / holiday: 2030?".to_string();

    let path = export_snapshot(&record, dir.path(), target_ms(&record) - 1_000).unwrap();
    let file_name = path.file_name().unwrap().to_str().unwrap().to_string();
    assert_eq!(file_name, export_filename(&record.name));
    assert!(!file_name.contains('/'));
    assert!(!file_name.contains(':'));
    assert!(path.exists());
}
